//! # Order Placement
//!
//! Guards run before any request goes out:
//!
//! 1. a session token must be stored
//! 2. its payload must decode and carry a usable `sub` claim
//!
//! Only then is one single-line order sent, with `sub` as the `user_id`.

use shared::dto::{OrderRequest, OrderResponse, ResourceId};
use thiserror::Error;

use crate::error::{ApiError, Operation};
use crate::services::api::StorefrontApi;
use crate::services::storage::{TokenStorage, TokenStore};
use crate::services::token::decode_claims;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("You must be logged in to place an order.")]
    LoginRequired,

    #[error("Could not read the user ID from the token. Please log in again.")]
    MissingSubject,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl OrderError {
    /// Guard failures interrupt the user; API failures are shown inline only.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, OrderError::Api(_))
    }

    pub fn user_message(&self) -> String {
        match self {
            OrderError::Api(err) => err.user_message(Operation::PlaceOrder),
            guard => guard.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub product_id: ResourceId,
    pub order: OrderResponse,
}

impl PlacedOrder {
    /// Inline confirmation
    pub fn message(&self) -> String {
        format!(
            "Order for product ID {} created! (Order ID: {})",
            self.product_id, self.order.id
        )
    }

    /// Pop-up confirmation
    pub fn alert_text(&self) -> String {
        format!("Order created! Order ID: {}", self.order.id)
    }
}

pub async fn place_order<A, S>(
    api: &A,
    store: &TokenStore<S>,
    product_id: &ResourceId,
    quantity: u32,
) -> Result<PlacedOrder, OrderError>
where
    A: StorefrontApi + ?Sized,
    S: TokenStorage,
{
    let token = store.get().ok_or(OrderError::LoginRequired)?;

    let user_id = match decode_claims(&token) {
        Ok(claims) => claims
            .subject()
            .map(str::to_string)
            .ok_or(OrderError::MissingSubject)?,
        Err(err) => {
            log::warn!("Could not decode session token: {}", err);
            return Err(OrderError::MissingSubject);
        }
    };

    let request = OrderRequest::single(user_id, product_id.clone(), quantity.max(1));
    log::info!("Placing order for product {} x{}", product_id, quantity);

    let order = api.place_order(&token, &request).await?;
    log::info!("Order {} created", order.id);

    Ok(PlacedOrder {
        product_id: product_id.clone(),
        order,
    })
}
