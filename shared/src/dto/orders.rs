use serde::{Deserialize, Serialize};

use super::catalog::ResourceId;

/// One line of an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: ResourceId,
    pub quantity: u32,
}

/// Order request for `POST /orders`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRequest {
    /// Subject claim of the session token
    pub user_id: String,
    pub items: Vec<OrderItem>,
}

impl OrderRequest {
    /// An order for a single product.
    pub fn single(user_id: impl Into<String>, product_id: ResourceId, quantity: u32) -> Self {
        Self {
            user_id: user_id.into(),
            items: vec![OrderItem { product_id, quantity }],
        }
    }
}

/// Created order (status 201)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderResponse {
    pub id: ResourceId,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_request_body() {
        let order = OrderRequest::single("alice", ResourceId::from("p-1"), 3);
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            serde_json::json!({"user_id": "alice", "items": [{"product_id": "p-1", "quantity": 3}]})
        );
    }

    #[test]
    fn test_order_response_minimal() {
        let resp: OrderResponse = serde_json::from_str(r#"{"id":"ord-9"}"#).unwrap();
        assert_eq!(resp.id.to_string(), "ord-9");
        assert!(resp.items.is_empty());
        assert_eq!(resp.status, None);
    }

    #[test]
    fn test_order_response_full() {
        let resp: OrderResponse = serde_json::from_str(
            r#"{"id":"ord-1","user_id":"alice","items":[{"product_id":"p-1","quantity":2}],"total_price":50.0,"status":"pending"}"#,
        )
        .unwrap();
        assert_eq!(resp.user_id.as_deref(), Some("alice"));
        assert_eq!(resp.items[0].quantity, 2);
        assert_eq!(resp.total_price, Some(50.0));
    }
}
