//! Domain entities
//!
//! Plain records with identity. An `Order` owns its `Cake`s outright.

pub mod cake;
pub mod order;

pub use cake::{Cake, CakeId, NewCake};
pub use order::{NewOrder, Order, OrderId};
