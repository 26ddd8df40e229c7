//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::adapters::{InMemoryOrderRepository, SequentialIdGenerator};
use crate::app::{OrderService, Tracker};
use crate::domain::entities::{NewCake, NewOrder, Order, OrderId};

use super::mocks::RecordingView;

pub type TestService = OrderService<InMemoryOrderRepository, SequentialIdGenerator>;

pub type TestTracker = Tracker<InMemoryOrderRepository, SequentialIdGenerator, RecordingView>;

/// Create an order with the given id and name, baked by Ana for 2024-05-01
pub fn test_order(id: u64, name: &str) -> Order {
    Order::new(OrderId(id), test_new_order(name))
}

pub fn test_new_order(name: &str) -> NewOrder {
    NewOrder::new(name, "Ana", "2024-05-01")
}

pub fn test_new_cake(flavor: &str) -> NewCake {
    NewCake::new(flavor, "Buttercream", "2")
}

/// An empty service whose ids start at 0
pub fn test_service() -> TestService {
    OrderService::new(InMemoryOrderRepository::new(), SequentialIdGenerator::new())
}

/// An unstarted tracker over an empty store, recording every refresh
pub fn test_tracker() -> TestTracker {
    Tracker::new(test_service(), RecordingView::new())
}
