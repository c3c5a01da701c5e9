//! Rule-based validation of order entities.
//!
//! Each entity has a validator that reports every broken rule as a
//! [`Violation`]. Parent validators receive their child validators at
//! construction time and include all child violations in their own result:
//!
//! - [`CustomerValidator`] delegates `shipping_address` to an
//!   [`AddressValidator`]
//! - [`OrderItemValidator`] delegates `product` to a [`ProductValidator`]
//!
//! Validators hold no mutable state and are `Send + Sync`, so one instance
//! can be shared by any number of callers.

pub mod address;
pub mod customer;
pub mod order_item;
pub mod product;
pub mod result;
pub mod rules;

use std::sync::Arc;

pub use address::AddressValidator;
pub use customer::CustomerValidator;
pub use order_item::OrderItemValidator;
pub use product::ProductValidator;
pub use result::{RuleCode, ValidationError, ValidationResult, Violation};
pub use rules::{IsEmpty, RuleSet};

use crate::config::ValidationConfig;
use crate::types::{Address, Customer, OrderItem, Product};

/// Inspects values of type `T` and reports broken rules.
pub trait Validator<T: ?Sized> {
    /// Evaluate every rule. An empty result means `instance` is valid.
    fn validate(&self, instance: &T) -> ValidationResult;

    /// Validate and turn any violation into an error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] carrying every violation if any rule failed.
    fn validate_strict(&self, instance: &T) -> Result<(), ValidationError> {
        self.validate(instance).into_result()
    }
}

impl<T: ?Sized + 'static> Validator<T> for RuleSet<T> {
    fn validate(&self, instance: &T) -> ValidationResult {
        self.evaluate(instance)
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for &V {
    fn validate(&self, instance: &T) -> ValidationResult {
        (**self).validate(instance)
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for Box<V> {
    fn validate(&self, instance: &T) -> ValidationResult {
        (**self).validate(instance)
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for Arc<V> {
    fn validate(&self, instance: &T) -> ValidationResult {
        (**self).validate(instance)
    }
}

/// One validator per entity, wired together from a [`ValidationConfig`].
///
/// The address and product validators are shared with the parents that
/// delegate to them.
#[derive(Debug, Clone)]
pub struct OrderValidators {
    address: Arc<AddressValidator>,
    product: Arc<ProductValidator>,
    customer: Arc<CustomerValidator>,
    order_item: Arc<OrderItemValidator>,
}

impl OrderValidators {
    #[must_use]
    pub fn new(config: &ValidationConfig) -> Self {
        let address = Arc::new(AddressValidator::new());
        let product = Arc::new(ProductValidator::new());
        let customer = Arc::new(CustomerValidator::with_rule_set(
            config.customer_rules,
            Arc::clone(&address),
        ));
        let order_item = Arc::new(OrderItemValidator::new(Arc::clone(&product)));

        tracing::debug!(
            customer_rules = %config.customer_rules,
            "Order validators configured"
        );

        Self {
            address,
            product,
            customer,
            order_item,
        }
    }

    #[must_use]
    pub fn address(&self) -> &AddressValidator {
        &self.address
    }

    #[must_use]
    pub fn product(&self) -> &ProductValidator {
        &self.product
    }

    #[must_use]
    pub fn customer(&self) -> &CustomerValidator {
        &self.customer
    }

    #[must_use]
    pub fn order_item(&self) -> &OrderItemValidator {
        &self.order_item
    }
}

impl Default for OrderValidators {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl Validator<Address> for OrderValidators {
    fn validate(&self, address: &Address) -> ValidationResult {
        self.address.validate(address)
    }
}

impl Validator<Product> for OrderValidators {
    fn validate(&self, product: &Product) -> ValidationResult {
        self.product.validate(product)
    }
}

impl Validator<Customer> for OrderValidators {
    fn validate(&self, customer: &Customer) -> ValidationResult {
        self.customer.validate(customer)
    }
}

impl Validator<OrderItem> for OrderValidators {
    fn validate(&self, item: &OrderItem) -> ValidationResult {
        self.order_item.validate(item)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::config::CustomerRuleSet;

    const fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_validators_are_shareable() {
        assert_send_sync::<AddressValidator>();
        assert_send_sync::<ProductValidator>();
        assert_send_sync::<CustomerValidator>();
        assert_send_sync::<OrderItemValidator>();
        assert_send_sync::<OrderValidators>();
    }

    #[test]
    fn test_validate_strict_ok_for_valid_product() {
        let product = Product::new("Widget", Decimal::ONE);
        assert!(ProductValidator::new().validate_strict(&product).is_ok());
    }

    #[test]
    fn test_validate_strict_carries_all_violations() {
        let err = ProductValidator::new()
            .validate_strict(&Product::new("", Decimal::ZERO))
            .unwrap_err();
        assert_eq!(err.violations().len(), 2);
    }

    fn violation_count<V: Validator<Address>>(validator: V, address: &Address) -> usize {
        validator.validate(address).len()
    }

    #[test]
    fn test_smart_pointers_delegate() {
        let address = Address::new("", "City", "ST", "00000");
        let boxed: Box<dyn Validator<Address>> = Box::new(AddressValidator::new());

        assert_eq!(violation_count(&AddressValidator::new(), &address), 1);
        assert_eq!(violation_count(Arc::new(AddressValidator::new()), &address), 1);
        assert_eq!(violation_count(boxed, &address), 1);
    }

    #[test]
    fn test_bundle_follows_config() {
        let config = ValidationConfig {
            customer_rules: CustomerRuleSet::Identity,
        };
        let validators = OrderValidators::new(&config);
        assert_eq!(validators.customer().rule_set(), CustomerRuleSet::Identity);

        let customer = Customer::new("Ann", "", Address::new("1 Main", "City", "ST", "00000"));
        assert!(validators.validate(&customer).is_valid());
        assert!(!OrderValidators::default().validate(&customer).is_valid());
    }

    #[test]
    fn test_bundle_dispatches_by_type() {
        let validators = OrderValidators::default();
        let item = OrderItem::new(Product::new("", Decimal::ONE), 1);

        let item_result = Validator::<OrderItem>::validate(&validators, &item);
        let product_result = Validator::<Product>::validate(&validators, item.product());
        assert_eq!(item_result.len(), 1);
        assert_eq!(product_result.len(), 1);
        assert_eq!(
            item_result.violations().first().map(|v| v.property.as_str()),
            Some("product.name")
        );
    }
}
