//! Rules for [`Customer`].

use super::{AddressValidator, RuleSet, ValidationResult, Validator};
use crate::config::CustomerRuleSet;
use crate::types::{Address, Customer, CustomerId};

/// Customer name rules, followed by the shipping address rules of the
/// injected address validator.
///
/// Which name rules apply is chosen by [`CustomerRuleSet`]:
///
/// | Rule set   | Own rules             |
/// |------------|-----------------------|
/// | `Names`    | First Name, Last Name |
/// | `Identity` | Id, First Name        |
#[derive(Debug)]
pub struct CustomerValidator {
    rule_set: CustomerRuleSet,
    rules: RuleSet<Customer>,
}

impl CustomerValidator {
    /// Build the default (`Names`) rule set around `address_validator`.
    #[must_use]
    pub fn new<A>(address_validator: A) -> Self
    where
        A: Validator<Address> + Send + Sync + 'static,
    {
        Self::with_rule_set(CustomerRuleSet::default(), address_validator)
    }

    #[must_use]
    pub fn with_rule_set<A>(rule_set: CustomerRuleSet, address_validator: A) -> Self
    where
        A: Validator<Address> + Send + Sync + 'static,
    {
        let rules = RuleSet::new("Customer");
        let rules = match rule_set {
            CustomerRuleSet::Names => rules
                .not_empty("first_name", "First Name", Customer::first_name)
                .not_empty("last_name", "Last Name", Customer::last_name),
            CustomerRuleSet::Identity => rules
                .not_empty("id", "Id", customer_id)
                .not_empty("first_name", "First Name", Customer::first_name),
        };

        Self {
            rule_set,
            rules: rules.nested(
                "shipping_address",
                Customer::shipping_address,
                address_validator,
            ),
        }
    }

    #[must_use]
    pub const fn rule_set(&self) -> CustomerRuleSet {
        self.rule_set
    }
}

impl Default for CustomerValidator {
    fn default() -> Self {
        Self::new(AddressValidator::new())
    }
}

impl Validator<Customer> for CustomerValidator {
    fn validate(&self, customer: &Customer) -> ValidationResult {
        self.rules.evaluate(customer)
    }
}

const fn customer_id(customer: &Customer) -> &CustomerId {
    &customer.id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new("1 Main", "City", "ST", "00000")
    }

    #[test]
    fn test_valid_customer() {
        let customer = Customer::new("Ann", "Lee", address());
        assert!(CustomerValidator::default().validate(&customer).is_valid());
    }

    #[test]
    fn test_names_rule_set() {
        let customer = Customer::new("", "", address());
        let result = CustomerValidator::default().validate(&customer);
        assert_eq!(
            result.messages().collect::<Vec<_>>(),
            [
                "'First Name' must not be empty.",
                "'Last Name' must not be empty."
            ]
        );
    }

    #[test]
    fn test_identity_rule_set_ignores_last_name() {
        let validator =
            CustomerValidator::with_rule_set(CustomerRuleSet::Identity, AddressValidator::new());
        let mut customer = Customer::new("Ann", "", address());
        assert!(validator.validate(&customer).is_valid());

        customer.id = CustomerId::nil();
        let result = validator.validate(&customer);
        assert_eq!(result.messages().collect::<Vec<_>>(), ["'Id' must not be empty."]);
    }

    #[test]
    fn test_address_violations_follow_own_rules() {
        let customer = Customer::new("", "Lee", Address::new("", "City", "ST", ""));
        let result = CustomerValidator::default().validate(&customer);

        let properties: Vec<_> = result
            .violations()
            .iter()
            .map(|v| v.property.as_str())
            .collect();
        assert_eq!(
            properties,
            [
                "first_name",
                "shipping_address.street",
                "shipping_address.zip_code"
            ]
        );
        assert!(result.contains_message("'Street' must not be empty."));
        assert!(result.contains_message("'Zip Code' must not be empty."));
    }
}
