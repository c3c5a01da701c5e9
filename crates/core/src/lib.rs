//! Clean Orders Core - Order entities and their validation rules.
//!
//! This crate models the parts of an order (customer, shipping address,
//! product, line item) and checks them against declarative rule sets.
//!
//! # Architecture
//!
//! Construction and validation are separate steps. Factories such as
//! [`Product::new`] never fail; a validator inspects a finished instance and
//! reports every broken rule at once as data, never as a panic.
//!
//! ```
//! use clean_orders_core::{Product, ProductValidator, Validator};
//! use rust_decimal::Decimal;
//!
//! let result = ProductValidator::new().validate(&Product::new("", Decimal::ZERO));
//! assert_eq!(
//!     result.messages().collect::<Vec<_>>(),
//!     ["'Name' must not be empty.", "'Price' must be greater than '0'."],
//! );
//! ```
//!
//! # Modules
//!
//! - [`types`] - Entities, the address value object and type-safe IDs
//! - [`validation`] - Rule engine and one validator per entity
//! - [`config`] - Rule-set selection loaded from environment variables

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod types;
pub mod validation;

pub use config::{ConfigError, CustomerRuleSet, ValidationConfig};
pub use types::*;
pub use validation::{
    AddressValidator, CustomerValidator, IsEmpty, OrderItemValidator, OrderValidators,
    ProductValidator, RuleCode, RuleSet, ValidationError, ValidationResult, Validator, Violation,
};
