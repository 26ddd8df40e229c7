//! Application layer
//!
//! Contains use cases and service orchestration.
//! The tracker turns intents into service calls and publishes the result.

pub mod intent_parser;
pub mod order_service;
pub mod state;
pub mod tracker;

pub use intent_parser::{help_text, parse_intent};
pub use order_service::OrderService;
pub use tracker::{Outcome, Tracker};
