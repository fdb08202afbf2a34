use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier.
///
/// The catalog service issues UUID strings while other deployments use
/// integers. The JSON shape is preserved so an id read from the
/// catalog is sent back to the order service unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Integer(i64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Integer(n) => write!(f, "{}", n),
            ResourceId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(n: i64) -> Self {
        ResourceId::Integer(n)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        ResourceId::Text(s.to_string())
    }
}

/// A catalog entry as returned by `GET /products`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ResourceId,
    pub name: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_with_integer_id() {
        let products: Vec<Product> =
            serde_json::from_str(r#"[{"id":1,"name":"Widget","price":1000}]"#).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ResourceId::Integer(1));
        assert_eq!(products[0].name, "Widget");
        assert_eq!(products[0].price, 1000.0);
    }

    #[test]
    fn test_product_with_uuid_id() {
        let product: Product = serde_json::from_str(
            r#"{"id":"0b6e4c1a-53a8-4c57-9d59-0d3f58e0c1f1","name":"Mouse","price":25.5}"#,
        )
        .unwrap();
        assert_eq!(
            product.id,
            ResourceId::Text("0b6e4c1a-53a8-4c57-9d59-0d3f58e0c1f1".to_string())
        );
        assert_eq!(product.id.to_string(), "0b6e4c1a-53a8-4c57-9d59-0d3f58e0c1f1");
    }

    #[test]
    fn test_resource_id_keeps_wire_shape() {
        assert_eq!(serde_json::to_string(&ResourceId::Integer(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&ResourceId::from("a")).unwrap(), "\"a\"");
    }
}
