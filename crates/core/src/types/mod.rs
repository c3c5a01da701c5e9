//! Core types for Clean Orders.
//!
//! This module provides the order entities, the shipping address value
//! object and type-safe identities.

pub mod address;
pub mod customer;
pub mod entity;
pub mod id;
pub mod order_item;
pub mod product;

pub use address::Address;
pub use customer::Customer;
pub use entity::{Entity, ValueObject};
pub use id::*;
pub use order_item::{OrderItem, OrderItemError};
pub use product::Product;
