//! Identifier source port

use crate::error::DomainError;

/// Issues identifiers for orders and cakes.
///
/// One generator serves both entity kinds, so an order id and a cake id
/// never share a value. Implementations must return strictly increasing
/// values and never reuse one. Once no larger value is left, every call
/// fails with `DomainError::IdsExhausted`.
pub trait IdGenerator {
    fn next_id(&mut self) -> Result<u64, DomainError>;
}
