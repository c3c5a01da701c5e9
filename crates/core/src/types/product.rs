//! Product entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::id::ProductId;

/// A sellable product.
///
/// Immutable once built. [`Product::new`] accepts any name and price;
/// business rules such as a non-empty name or a positive price are checked
/// by [`ProductValidator`](crate::validation::ProductValidator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub(crate) id: ProductId,
    name: String,
    price: Decimal,
}

impl Product {
    /// Create a product with a freshly generated identity.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            price,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_name_and_price() {
        let price = Decimal::new(1999, 2);
        let product = Product::new("Widget", price);
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.price(), price);
    }

    #[test]
    fn test_new_generates_identity() {
        let a = Product::new("Widget", Decimal::ONE);
        let b = Product::new("Widget", Decimal::ONE);
        assert!(!a.id().is_nil());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_new_accepts_invalid_input() {
        let product = Product::new("", Decimal::new(-5, 0));
        assert_eq!(product.name(), "");
        assert!(product.price().is_sign_negative());
    }

    #[test]
    fn test_serde_keeps_identity() {
        let product = Product::new("Widget", Decimal::new(2500, 2));
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
