//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the storefront client and the
//! backend services (auth, catalog, orders). All DTOs use JSON serialization
//! via `serde`, except the login form which is sent URL-encoded.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login and registration DTOs
//!   - **[`dto::catalog`]**: Product listing DTOs
//!   - **[`dto::orders`]**: Order placement DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_number`]**: Group digits with separators
//!   - **[`utils::format_price`]**: Render a product price for display
//!
//! ## Wire Format
//!
//! - Field names use **snake_case** in both Rust and JSON
//! - Optional response fields default to `None` when the server omits them
//! - Server-assigned identifiers may be JSON strings or integers; see
//!   [`dto::catalog::ResourceId`]
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::dto::orders::{OrderItem, OrderRequest};
//! use shared::dto::catalog::ResourceId;
//!
//! let order = OrderRequest {
//!     user_id: "alice".to_string(),
//!     items: vec![OrderItem { product_id: ResourceId::Integer(1), quantity: 2 }],
//! };
//!
//! let body = serde_json::to_value(&order).unwrap();
//! assert_eq!(body["items"][0]["product_id"], 1);
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
