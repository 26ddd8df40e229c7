//! Test utilities
//!
//! Hand-written mock implementations and test fixtures for unit testing.
//!
//! The mocks are plain structs rather than generated ones; tests assert on
//! what they recorded.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
