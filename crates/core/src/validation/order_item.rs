//! Rules for [`OrderItem`].

use rust_decimal::Decimal;

use super::{ProductValidator, RuleSet, ValidationResult, Validator};
use crate::types::{OrderItem, OrderItemId, Product};

/// Item identity, quantity and cost rules, followed by the rules of the
/// injected product validator.
#[derive(Debug)]
pub struct OrderItemValidator {
    rules: RuleSet<OrderItem>,
}

impl OrderItemValidator {
    #[must_use]
    pub fn new<P>(product_validator: P) -> Self
    where
        P: Validator<Product> + Send + Sync + 'static,
    {
        Self {
            rules: RuleSet::new("OrderItem")
                .not_empty("id", "Id", order_item_id)
                .greater_than("quantity", "Quantity", OrderItem::quantity, 0)
                .greater_than("cost", "Cost", OrderItem::cost, Decimal::ZERO)
                .nested("product", OrderItem::product, product_validator),
        }
    }
}

impl Default for OrderItemValidator {
    fn default() -> Self {
        Self::new(ProductValidator::new())
    }
}

impl Validator<OrderItem> for OrderItemValidator {
    fn validate(&self, item: &OrderItem) -> ValidationResult {
        self.rules.evaluate(item)
    }
}

const fn order_item_id(item: &OrderItem) -> &OrderItemId {
    &item.id
}
