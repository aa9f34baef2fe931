use crate::types::{BookingIdentity, BookingRecord};
use thiserror::Error;

/// Result of a conditional insert. `AlreadyExists` is an expected business
/// outcome, not a fault; faults travel as `StoreError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyExists,
}

/// Transient backend failure. The outcome of the attempted operation is
/// unknown; callers must never read this as "no conflict".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Booking store unavailable: {0}")]
    Unavailable(String),
}

pub trait BookingStore: Clone + Send + Sync + 'static {
    /// Writes `record` only if no booking exists under its identity, as one
    /// atomic operation. Two callers racing on the same identity can never
    /// both see `Inserted`.
    fn conditional_insert(&self, record: &BookingRecord) -> Result<InsertOutcome, StoreError>;

    /// Point read for diagnostics. Never used to gate a write.
    fn lookup(&self, identity: &BookingIdentity) -> Result<Option<BookingRecord>, StoreError>;
}
