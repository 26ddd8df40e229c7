//! Repository port traits
//!
//! The order store is the single source of truth for orders. Only the
//! order service talks to it.

use crate::domain::entities::{Order, OrderId};

/// Ordered storage for orders. Iteration order is insertion order.
pub trait OrderRepository {
    /// All orders, in insertion order
    fn all(&self) -> &[Order];

    /// Append an order to the end of the store
    fn insert(&mut self, order: Order);

    /// Index of the order with the given id
    fn position(&self, id: &OrderId) -> Option<usize>;

    /// Order at an index
    fn get(&self, index: usize) -> Option<&Order>;

    /// Replace the order at an index. Out of range indices are ignored.
    fn replace(&mut self, index: usize, order: Order);

    /// Remove the order at an index. Out of range indices are ignored.
    fn remove(&mut self, index: usize) -> Option<Order>;
}
