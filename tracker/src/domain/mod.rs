//! Domain layer
//!
//! Contains pure order-tracking logic with no I/O.
//! - `entities`: Orders, cakes and their identifiers
//! - `ports`: Trait definitions for the store, id source and view

pub mod entities;
pub mod ports;
