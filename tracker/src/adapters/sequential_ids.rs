//! Counter-backed identifier generator

use crate::domain::ports::IdGenerator;
use crate::error::DomainError;

/// Hands out `origin, origin + 1, ...` up to and including `u64::MAX`
#[derive(Debug)]
pub struct SequentialIdGenerator {
    /// `None` once `u64::MAX` has been issued
    next: Option<u64>,
}

impl SequentialIdGenerator {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(origin: u64) -> Self {
        Self { next: Some(origin) }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> Result<u64, DomainError> {
        let id = self.next.ok_or(DomainError::IdsExhausted)?;
        self.next = id.checked_add(1);
        Ok(id)
    }
}
