use crate::backend::{BookingStore, InsertOutcome};
use crate::types::{BookingIdentity, BookingRecord};
use crate::validation::{validate_appointment, FieldError};
use serde_json::Value;
use tracing::{error, info, warn};

/// Outcome of one scheduling attempt, ready for the transport layer to
/// encode. `Unauthorized` is produced by the authentication middleware,
/// never by `schedule` itself.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Scheduled,
    Unauthorized,
    BadRequest(Vec<FieldError>),
    Conflict(Option<String>),
    InternalError,
}

/// Orchestrates one booking attempt: validate, derive the slot identity,
/// commit through the store's conditional insert. Holds no state between
/// calls; every invocation is a single self-contained write.
#[derive(Clone)]
pub struct Scheduler<B: BookingStore> {
    store: B,
}

impl<B: BookingStore> Scheduler<B> {
    pub fn new(store: B) -> Self {
        Self { store }
    }

    pub fn schedule(&self, payload: &Value) -> BookingOutcome {
        let request = match validate_appointment(payload) {
            Ok(request) => request,
            Err(errors) => {
                info!(?errors, "Validation failed");
                return BookingOutcome::BadRequest(errors);
            }
        };

        let identity = BookingIdentity::for_slot(&request.location, &request.appointment_time);
        let record = BookingRecord::new(&identity, &request);
        info!(
            full_name = %record.full_name,
            appointment_time = %record.appointment_time,
            "Validated appointment request"
        );

        // No retries here: the conditional insert is idempotent, so a
        // wrapping caller may retry a store fault safely.
        match self.store.conditional_insert(&record) {
            Ok(InsertOutcome::Inserted) => BookingOutcome::Scheduled,
            Ok(InsertOutcome::AlreadyExists) => {
                info!(%identity, "Slot already booked");
                BookingOutcome::Conflict(self.conflict_detail(&identity))
            }
            Err(err) => {
                error!(%err, %identity, "Conditional insert failed");
                BookingOutcome::InternalError
            }
        }
    }

    /// Diagnostics only. The conflict is already decided by the insert; a
    /// failed lookup degrades the message, not the outcome.
    fn conflict_detail(&self, identity: &BookingIdentity) -> Option<String> {
        match self.store.lookup(identity) {
            Ok(Some(existing)) => Some(format!(
                "An appointment already exists at {}",
                existing.appointment_time
            )),
            Ok(None) => None,
            Err(err) => {
                warn!(%err, %identity, "Conflict lookup failed");
                None
            }
        }
    }
}
