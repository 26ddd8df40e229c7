//! In-memory adapters
//!
//! State lives for the lifetime of the process and starts empty.

mod order_repo;

pub use order_repo::InMemoryOrderRepository;
