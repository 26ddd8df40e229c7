//! In-memory implementation of OrderRepository

use crate::domain::entities::{Order, OrderId};
use crate::domain::ports::OrderRepository;

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: Vec<Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an order
    #[cfg(test)]
    pub fn with_order(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn all(&self) -> &[Order] {
        &self.orders
    }

    fn insert(&mut self, order: Order) {
        self.orders.push(order);
    }

    fn position(&self, id: &OrderId) -> Option<usize> {
        self.orders.iter().position(|o| o.id == *id)
    }

    fn get(&self, index: usize) -> Option<&Order> {
        self.orders.get(index)
    }

    fn replace(&mut self, index: usize, order: Order) {
        if let Some(slot) = self.orders.get_mut(index) {
            *slot = order;
        }
    }

    fn remove(&mut self, index: usize) -> Option<Order> {
        if index < self.orders.len() {
            Some(self.orders.remove(index))
        } else {
            None
        }
    }
}
