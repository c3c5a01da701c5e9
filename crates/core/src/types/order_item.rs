//! Order line item entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::id::OrderItemId;
use super::product::Product;

/// Errors that can occur when building an [`OrderItem`] with a checked cost.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderItemError {
    /// `price * quantity` does not fit in a `Decimal`.
    #[error("cost of {quantity} x {price} overflows")]
    CostOverflow {
        /// Unit price of the product.
        price: Decimal,
        /// Requested quantity.
        quantity: i32,
    },
}

/// A line of an order: one product and how many of it.
///
/// `cost` is derived and always equals `product.price() * quantity()`. The
/// only mutator, [`OrderItem::update_quantity`], rewrites both fields in a
/// single `&mut self` call.
///
/// ```
/// use clean_orders_core::{OrderItem, Product};
/// use rust_decimal::Decimal;
///
/// let mut item = OrderItem::new(Product::new("Widget", Decimal::from(25)), 4);
/// assert_eq!(item.cost(), Decimal::from(100));
///
/// item.update_quantity(2);
/// assert_eq!(item.cost(), Decimal::from(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderItemRecord")]
pub struct OrderItem {
    pub(crate) id: OrderItemId,
    product: Product,
    quantity: i32,
    cost: Decimal,
}

/// Serialized form accepted on input. `cost` is never trusted from outside.
#[derive(Deserialize)]
struct OrderItemRecord {
    id: OrderItemId,
    product: Product,
    quantity: i32,
}

impl TryFrom<OrderItemRecord> for OrderItem {
    type Error = OrderItemError;

    fn try_from(record: OrderItemRecord) -> Result<Self, Self::Error> {
        let cost = checked_line_cost(&record.product, record.quantity)?;
        Ok(Self {
            id: record.id,
            product: record.product,
            quantity: record.quantity,
            cost,
        })
    }
}

impl OrderItem {
    /// Create an item with a freshly generated identity.
    ///
    /// Any quantity is accepted, including zero and negative values.
    ///
    /// # Panics
    ///
    /// Panics if `price * quantity` overflows `Decimal` (a unit price above
    /// roughly 3.7e19). Use [`OrderItem::try_new`] for untrusted prices.
    #[must_use]
    pub fn new(product: Product, quantity: i32) -> Self {
        let cost = line_cost(&product, quantity);
        Self {
            id: OrderItemId::generate(),
            product,
            quantity,
            cost,
        }
    }

    /// Create an item, failing instead of panicking when the cost overflows.
    ///
    /// # Errors
    ///
    /// Returns [`OrderItemError::CostOverflow`] if `price * quantity` does not
    /// fit in a `Decimal`.
    pub fn try_new(product: Product, quantity: i32) -> Result<Self, OrderItemError> {
        let cost = checked_line_cost(&product, quantity)?;
        Ok(Self {
            id: OrderItemId::generate(),
            product,
            quantity,
            cost,
        })
    }

    /// Replace the quantity and recompute the cost.
    ///
    /// # Panics
    ///
    /// Panics under the same overflow condition as [`OrderItem::new`]. Use
    /// [`OrderItem::try_update_quantity`] for untrusted prices.
    pub fn update_quantity(&mut self, quantity: i32) {
        let cost = line_cost(&self.product, quantity);
        self.apply_quantity(quantity, cost);
    }

    /// Replace the quantity and recompute the cost, leaving the item
    /// untouched if the cost overflows.
    ///
    /// # Errors
    ///
    /// Returns [`OrderItemError::CostOverflow`] if `price * quantity` does not
    /// fit in a `Decimal`.
    pub fn try_update_quantity(&mut self, quantity: i32) -> Result<(), OrderItemError> {
        let cost = checked_line_cost(&self.product, quantity)?;
        self.apply_quantity(quantity, cost);
        Ok(())
    }

    fn apply_quantity(&mut self, quantity: i32, cost: Decimal) {
        tracing::trace!(
            item_id = %self.id,
            from = self.quantity,
            to = quantity,
            "Updating order item quantity"
        );
        self.cost = cost;
        self.quantity = quantity;
    }

    #[must_use]
    pub const fn id(&self) -> OrderItemId {
        self.id
    }

    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub const fn quantity(&self) -> i32 {
        self.quantity
    }

    #[must_use]
    pub const fn cost(&self) -> Decimal {
        self.cost
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    fn id(&self) -> OrderItemId {
        self.id
    }
}

fn line_cost(product: &Product, quantity: i32) -> Decimal {
    product.price() * Decimal::from(quantity)
}

fn checked_line_cost(product: &Product, quantity: i32) -> Result<Decimal, OrderItemError> {
    product
        .price()
        .checked_mul(Decimal::from(quantity))
        .ok_or(OrderItemError::CostOverflow {
            price: product.price(),
            quantity,
        })
}
