//! Validation configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CLEAN_ORDERS_CUSTOMER_RULES` - Customer rule set, `names` or
//!   `identity` (default: names)

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CUSTOMER_RULES_VAR: &str = "CLEAN_ORDERS_CUSTOMER_RULES";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// The rule set a [`CustomerValidator`](crate::validation::CustomerValidator)
/// applies to the customer itself, before the shipping address rules.
///
/// Exactly one set is active; the two are never combined. Product rules are
/// not affected: [`ProductValidator`](crate::validation::ProductValidator)
/// always checks Id, Name and Price under either set. A product built by
/// [`Product::new`](crate::types::Product::new) always passes its Id rule,
/// so only rehydrated products can tell the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CustomerRuleSet {
    /// First Name and Last Name must not be empty.
    #[default]
    Names,
    /// Id and First Name must not be empty. Last Name is not checked.
    Identity,
}

impl CustomerRuleSet {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Names => "names",
            Self::Identity => "identity",
        }
    }
}

impl fmt::Display for CustomerRuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerRuleSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "names" => Ok(Self::Names),
            "identity" => Ok(Self::Identity),
            other => Err(format!(
                "unknown customer rule set '{other}' (expected 'names' or 'identity')"
            )),
        }
    }
}

/// Validation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Rules applied to customers.
    pub customer_rules: CustomerRuleSet,
}

impl ValidationConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let customer_rules = lookup(CUSTOMER_RULES_VAR)
            .map(|value| {
                value
                    .parse::<CustomerRuleSet>()
                    .map_err(|e| ConfigError::InvalidEnvVar(CUSTOMER_RULES_VAR.to_string(), e))
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self { customer_rules })
    }
}
