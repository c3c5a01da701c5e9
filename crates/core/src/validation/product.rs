//! Rules for [`Product`].

use rust_decimal::Decimal;

use super::{RuleSet, ValidationResult, Validator};
use crate::types::{Product, ProductId};

/// A product needs an identity, a name and a positive price.
#[derive(Debug)]
pub struct ProductValidator {
    rules: RuleSet<Product>,
}

impl ProductValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new("Product")
                .not_empty("id", "Id", product_id)
                .not_empty("name", "Name", Product::name)
                .greater_than("price", "Price", Product::price, Decimal::ZERO),
        }
    }
}

impl Default for ProductValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<Product> for ProductValidator {
    fn validate(&self, product: &Product) -> ValidationResult {
        self.rules.evaluate(product)
    }
}

const fn product_id(product: &Product) -> &ProductId {
    &product.id
}
