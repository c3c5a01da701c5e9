//! Rules for [`Address`].

use super::{RuleSet, ValidationResult, Validator};
use crate::types::Address;

/// Every address part must be filled in.
#[derive(Debug)]
pub struct AddressValidator {
    rules: RuleSet<Address>,
}

impl AddressValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new("Address")
                .not_empty("street", "Street", Address::street)
                .not_empty("city", "City", Address::city)
                .not_empty("state", "State", Address::state)
                .not_empty("zip_code", "Zip Code", Address::zip_code),
        }
    }
}

impl Default for AddressValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<Address> for AddressValidator {
    fn validate(&self, address: &Address) -> ValidationResult {
        self.rules.evaluate(address)
    }
}
