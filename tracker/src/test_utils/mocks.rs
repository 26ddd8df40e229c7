//! Mock implementations of port traits

use crate::domain::entities::Order;
use crate::domain::ports::View;

// ============================================================================
// Recording View
// ============================================================================

/// Keeps a copy of every snapshot it was asked to render
#[derive(Debug, Default)]
pub struct RecordingView {
    refreshes: Vec<Vec<Order>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refreshes(&self) -> &[Vec<Order>] {
        &self.refreshes
    }

    pub fn last(&self) -> Option<&[Order]> {
        self.refreshes.last().map(Vec::as_slice)
    }
}

impl View for RecordingView {
    fn refresh(&mut self, snapshot: &[Order]) {
        self.refreshes.push(snapshot.to_vec());
    }
}
