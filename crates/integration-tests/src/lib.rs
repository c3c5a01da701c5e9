//! Integration tests for Clean Orders.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p clean-orders-integration-tests
//!
//! # With validation diagnostics
//! RUST_LOG=clean_orders_core=trace cargo test -p clean-orders-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `product` - Product construction and `ProductValidator`
//! - `customer` - Customer construction and `CustomerValidator` with address delegation
//! - `order_item` - Line item cost tracking and `OrderItemValidator` with product delegation
//! - `properties` - Property tests over generated inputs
//!
//! This crate only exposes shared fixtures for the test files.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clean_orders_core::{Address, Customer, OrderItem, Product};
use rust_decimal::Decimal;

/// Install a test-writer subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to debug output from the core crate.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "clean_orders_core=debug".into());

    // Another test in the same binary may already have installed it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// A complete shipping address.
#[must_use]
pub fn sample_address() -> Address {
    Address::new("742 Evergreen Terrace", "Springfield", "Oregon", "97403")
}

/// A customer that passes every default rule.
#[must_use]
pub fn sample_customer() -> Customer {
    Customer::new("Marge", "Simpson", sample_address())
}

/// A product that passes every rule.
#[must_use]
pub fn sample_product() -> Product {
    Product::new("Handcrafted Granite Chair", Decimal::new(4999, 2))
}

/// A line item that passes every rule.
#[must_use]
pub fn sample_order_item() -> OrderItem {
    OrderItem::new(sample_product(), 3)
}
