use crate::backend::{BookingStore, InsertOutcome, StoreError};
use crate::types::{BookingIdentity, BookingRecord};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory booking store, used when no database is configured. Bookings do
/// not survive a restart.
#[derive(Debug, Clone, Default)]
pub struct LocalBookings {
    bookings: Arc<Mutex<HashMap<String, BookingRecord>>>,
}

impl BookingStore for LocalBookings {
    fn conditional_insert(&self, record: &BookingRecord) -> Result<InsertOutcome, StoreError> {
        let mut bookings = self.bookings.lock().unwrap();
        // Entry keeps the existence check and the write a single operation
        // under the lock.
        match bookings.entry(record.appointment_id.clone()) {
            Entry::Occupied(_) => Ok(InsertOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(InsertOutcome::Inserted)
            }
        }
    }

    fn lookup(&self, identity: &BookingIdentity) -> Result<Option<BookingRecord>, StoreError> {
        Ok(self.bookings.lock().unwrap().get(identity.as_str()).cloned())
    }
}
