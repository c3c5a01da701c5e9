//! Customer entity.

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::entity::Entity;
use super::id::CustomerId;

/// A customer and the address their orders ship to.
///
/// The customer exclusively owns its shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub(crate) id: CustomerId,
    first_name: String,
    last_name: String,
    shipping_address: Address,
}

impl Customer {
    /// Create a customer with a freshly generated identity.
    ///
    /// Fields are stored verbatim; see
    /// [`CustomerValidator`](crate::validation::CustomerValidator) for the
    /// rules applied to them.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        shipping_address: Address,
    ) -> Self {
        Self {
            id: CustomerId::generate(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            shipping_address,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CustomerId {
        self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub const fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> CustomerId {
        self.id
    }
}
