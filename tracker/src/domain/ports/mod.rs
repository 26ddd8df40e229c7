//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod ids;
pub mod repositories;
pub mod view;

pub use ids::IdGenerator;
pub use repositories::OrderRepository;
pub use view::View;
