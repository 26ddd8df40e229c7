//! View port
//!
//! The view renders a whole snapshot every time. It must not assume
//! anything about the previous snapshot.

use crate::domain::entities::Order;

pub trait View {
    /// Redraw from the given snapshot
    fn refresh(&mut self, snapshot: &[Order]);
}
