//! Application state cell
//!
//! Holds the most recently published snapshot and pushes every new one to
//! the view. There is no diffing: each publish is a full refresh.

use crate::domain::entities::Order;
use crate::domain::ports::View;

/// The current snapshot plus the view that renders it
pub struct StateCell<V: View> {
    current: Option<Vec<Order>>,
    view: V,
    publish_count: usize,
}

impl<V: View> StateCell<V> {
    /// An uninitialized cell. Nothing is rendered until the first publish.
    pub fn new(view: V) -> Self {
        Self {
            current: None,
            view,
            publish_count: 0,
        }
    }

    /// Replace the current snapshot and refresh the view with it
    pub fn publish(&mut self, snapshot: Vec<Order>) {
        self.publish_count += 1;
        tracing::debug!(
            orders = snapshot.len(),
            publish = self.publish_count,
            "Publishing snapshot"
        );
        let snapshot = self.current.insert(snapshot);
        self.view.refresh(snapshot.as_slice());
    }

    /// The last published snapshot, or `None` before the first publish
    pub fn current(&self) -> Option<&[Order]> {
        self.current.as_deref()
    }

    #[cfg(test)]
    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    pub fn publish_count(&self) -> usize {
        self.publish_count
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }
}
