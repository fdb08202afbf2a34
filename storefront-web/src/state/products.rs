//! # Products Screen State
//!
//! ```text
//! Loading ──ListProducts ok──▶ Ready { products, quantities }
//!    │                              (empty list renders as "no items")
//!    └──────ListProducts err──▶ Failed(message)
//! ```
//!
//! Ordering never changes the state; only the screen's notice does.
//! [`QuantitySelection`] keeps exactly one entry per loaded product and every
//! value is at least 1.

use std::collections::HashMap;

use shared::dto::{Product, ResourceId};

use crate::error::{ApiError, Operation};

/// Parse a quantity input the way a number field is read: leading
/// whitespace, optional sign, then the leading run of digits. Anything that
/// is not a positive integer becomes 1.
pub fn parse_quantity(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if negative || digits.is_empty() {
        return 1;
    }
    match digits.parse::<u32>() {
        Ok(0) => 1,
        Ok(n) => n,
        // Only overflow is possible here.
        Err(_) => u32::MAX,
    }
}

/// Requested quantity per product
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantitySelection(HashMap<ResourceId, u32>);

impl QuantitySelection {
    /// Quantity 1 for each product.
    pub fn for_products(products: &[Product]) -> Self {
        Self(products.iter().map(|p| (p.id.clone(), 1)).collect())
    }

    pub fn get(&self, id: &ResourceId) -> Option<u32> {
        self.0.get(id).copied()
    }

    /// Store the parsed input for a listed product. Unknown ids are ignored.
    pub fn set_from_input(&mut self, id: &ResourceId, input: &str) -> Option<u32> {
        let quantity = self.0.get_mut(id)?;
        *quantity = parse_quantity(input);
        Some(*quantity)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductsState {
    Loading,
    Failed(String),
    Ready {
        products: Vec<Product>,
        quantities: QuantitySelection,
    },
}

/// What the list area shows. Quantity edits do not change it, so the list
/// is not rebuilt while typing.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    Loading,
    Failed(String),
    Empty,
    Listed(Vec<Product>),
}

impl ProductsState {
    pub fn from_result(result: Result<Vec<Product>, ApiError>) -> Self {
        match result {
            Ok(products) => {
                let quantities = QuantitySelection::for_products(&products);
                ProductsState::Ready { products, quantities }
            }
            Err(err) => ProductsState::Failed(err.user_message(Operation::ListProducts)),
        }
    }

    pub fn catalog_view(&self) -> CatalogView {
        match self {
            ProductsState::Loading => CatalogView::Loading,
            ProductsState::Failed(message) => CatalogView::Failed(message.clone()),
            ProductsState::Ready { products, .. } if products.is_empty() => CatalogView::Empty,
            ProductsState::Ready { products, .. } => CatalogView::Listed(products.clone()),
        }
    }

    pub fn quantity(&self, id: &ResourceId) -> Option<u32> {
        match self {
            ProductsState::Ready { quantities, .. } => quantities.get(id),
            _ => None,
        }
    }

    pub fn set_quantity(&mut self, id: &ResourceId, input: &str) -> Option<u32> {
        match self {
            ProductsState::Ready { quantities, .. } => quantities.set_from_input(id, input),
            _ => None,
        }
    }
}
