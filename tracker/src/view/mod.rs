//! View module
//!
//! Renders published snapshots and reads user intents from a line stream.

pub mod renderer;
pub mod session;
pub mod terminal;

pub use session::run_session;
pub use terminal::TerminalView;
