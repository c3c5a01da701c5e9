//! Shipping address value object.

use serde::{Deserialize, Serialize};

use super::entity::ValueObject;

/// A postal address.
///
/// Construction never fails: blank fields are accepted here and reported
/// later by [`AddressValidator`](crate::validation::AddressValidator).
///
/// ```
/// use clean_orders_core::Address;
///
/// let a = Address::new("1 Main", "Springfield", "IL", "62701");
/// let b = Address::new("1 Main", "Springfield", "IL", "62701");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    street: String,
    city: String,
    state: String,
    zip_code: String,
}

impl Address {
    /// Create a new address from its four parts.
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
        }
    }

    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    #[must_use]
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

impl ValueObject for Address {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_stored_verbatim() {
        let address = Address::new("1 Main", "Springfield", "IL", "62701");
        assert_eq!(address.street(), "1 Main");
        assert_eq!(address.city(), "Springfield");
        assert_eq!(address.state(), "IL");
        assert_eq!(address.zip_code(), "62701");
    }

    #[test]
    fn test_blank_fields_accepted() {
        let address = Address::new("", "", "", "");
        assert_eq!(address.street(), "");
        assert_eq!(address.zip_code(), "");
    }

    #[test]
    fn test_equality_by_value() {
        let a = Address::new("1 Main", "City", "ST", "00000");
        assert_eq!(a, a.clone());
        assert_ne!(a, Address::new("2 Main", "City", "ST", "00000"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let address = Address::new("1 Main", "City", "ST", "00000");
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["zip_code"], "00000");

        let parsed: Address = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, address);
    }
}
