//! API configuration
//!
//! Every backend call is resolved against one base URL. It is fixed at build
//! time from `STOREFRONT_API_BASE_URL` (Trunk forwards the environment to
//! `cargo build`), falling back to [`DEFAULT_API_BASE_URL`]. An empty value
//! makes all endpoints origin-relative.

use crate::utils::url::join_url;

/// Used when `STOREFRONT_API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Configuration baked in at build time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("STOREFRONT_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute (or origin-relative) URL for an API path such as `/products`.
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
