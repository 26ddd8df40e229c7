//! Adapters layer
//!
//! Concrete implementations of the domain port traits.
//! - `memory`: In-process order store
//! - `sequential_ids`: Counter-backed identifier generator

pub mod memory;
pub mod sequential_ids;

pub use memory::InMemoryOrderRepository;
pub use sequential_ids::SequentialIdGenerator;
