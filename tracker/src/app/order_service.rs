//! Order service
//!
//! The public CRUD contract over the order store. Every lookup is a linear
//! scan; order lists are small and human-entered.

use crate::domain::entities::{CakeId, NewCake, NewOrder, Order, OrderId};
use crate::domain::ports::{IdGenerator, OrderRepository};
use crate::error::DomainError;

/// Service owning the order store and the shared id generator
pub struct OrderService<R, G>
where
    R: OrderRepository,
    G: IdGenerator,
{
    orders: R,
    ids: G,
}

impl<R, G> OrderService<R, G>
where
    R: OrderRepository,
    G: IdGenerator,
{
    pub fn new(orders: R, ids: G) -> Self {
        Self { orders, ids }
    }

    /// Every order currently in the store, in insertion order
    pub fn list_all(&self) -> &[Order] {
        self.orders.all()
    }

    /// Append an already-built order
    pub fn create(&mut self, order: Order) {
        tracing::debug!(order_id = %order.id, "Creating order");
        self.orders.insert(order);
    }

    /// Mint an id for a new order and store it
    pub fn create_order(&mut self, new_order: NewOrder) -> Result<Order, DomainError> {
        let order = Order::new(OrderId(self.ids.next_id()?), new_order);
        self.create(order.clone());
        tracing::info!(order_id = %order.id, name = %order.name, "Order created");
        Ok(order)
    }

    pub fn find_index_by_id(&self, id: OrderId) -> Option<usize> {
        self.orders.position(&id)
    }

    pub fn find_by_id(&self, id: OrderId) -> Option<&Order> {
        self.find_index_by_id(id).and_then(|i| self.orders.get(i))
    }

    /// Replace the stored order with the same id.
    ///
    /// An unknown id is ignored.
    pub fn update(&mut self, order: Order) {
        match self.find_index_by_id(order.id) {
            Some(index) => self.orders.replace(index, order),
            None => tracing::debug!(order_id = %order.id, "Update for unknown order ignored"),
        }
    }

    /// Remove an order and all of its cakes.
    ///
    /// An unknown id leaves the store untouched.
    pub fn delete_order(&mut self, id: OrderId) {
        match self.find_index_by_id(id) {
            Some(index) => {
                self.orders.remove(index);
                tracing::info!(order_id = %id, "Order deleted");
            }
            None => tracing::debug!(order_id = %id, "Delete for unknown order ignored"),
        }
    }

    /// Add a cake to an existing order and store the result
    pub fn add_cake(&mut self, order_id: OrderId, new_cake: NewCake) -> Result<CakeId, DomainError> {
        let mut order = self
            .find_by_id(order_id)
            .cloned()
            .ok_or_else(|| order_not_found(order_id))?;

        let cake_id = order.add_cake(&mut self.ids, new_cake)?;
        self.update(order);

        tracing::info!(order_id = %order_id, cake_id = %cake_id, "Cake added");
        Ok(cake_id)
    }

    /// Remove a cake from an order.
    ///
    /// The order must exist. A missing cake within it is not an error.
    pub fn delete_cake(&mut self, order_id: OrderId, cake_id: CakeId) -> Result<(), DomainError> {
        let index = self
            .find_index_by_id(order_id)
            .ok_or_else(|| order_not_found(order_id))?;

        let mut order = self
            .orders
            .get(index)
            .cloned()
            .ok_or_else(|| order_not_found(order_id))?;

        if order.remove_cake(cake_id) {
            tracing::info!(order_id = %order_id, cake_id = %cake_id, "Cake deleted");
        } else {
            tracing::debug!(order_id = %order_id, cake_id = %cake_id, "Cake not in order");
        }
        self.orders.replace(index, order);
        Ok(())
    }
}

fn order_not_found(id: OrderId) -> DomainError {
    DomainError::NotFound(format!("Order {} not found", id))
}
