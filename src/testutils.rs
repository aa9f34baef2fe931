use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

use serde_json::{json, Value};

use crate::{
    backend::{BookingStore, InsertOutcome, StoreError},
    configuration::Configuration,
    types::{AppointmentRequest, AppointmentTime, BookingIdentity, BookingRecord},
};

pub const TEST_API_KEY: &str = "test-api-key";

pub struct MockBookingStoreInner {
    pub insert_result: Mutex<Result<InsertOutcome, StoreError>>,
    pub lookup_result: Mutex<Result<Option<BookingRecord>, StoreError>>,
    pub calls_to_conditional_insert: AtomicU64,
    pub calls_to_lookup: AtomicU64,
    pub inserted_records: Mutex<Vec<BookingRecord>>,
}

#[derive(Clone)]
pub struct MockBookingStore(pub Arc<MockBookingStoreInner>);

impl MockBookingStore {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingStoreInner {
            insert_result: Mutex::new(Ok(InsertOutcome::Inserted)),
            lookup_result: Mutex::new(Ok(None)),
            calls_to_conditional_insert: AtomicU64::default(),
            calls_to_lookup: AtomicU64::default(),
            inserted_records: Mutex::default(),
        }))
    }

    pub fn set_insert_result(&self, result: Result<InsertOutcome, StoreError>) {
        *self.0.insert_result.lock().unwrap() = result;
    }

    pub fn set_lookup_result(&self, result: Result<Option<BookingRecord>, StoreError>) {
        *self.0.lookup_result.lock().unwrap() = result;
    }
}

impl BookingStore for MockBookingStore {
    fn conditional_insert(&self, record: &BookingRecord) -> Result<InsertOutcome, StoreError> {
        self.0
            .calls_to_conditional_insert
            .fetch_add(1, Ordering::SeqCst);
        let result = self.0.insert_result.lock().unwrap().clone();
        if let Ok(InsertOutcome::Inserted) = result {
            self.0.inserted_records.lock().unwrap().push(record.clone());
        }
        result
    }

    fn lookup(&self, _identity: &BookingIdentity) -> Result<Option<BookingRecord>, StoreError> {
        self.0.calls_to_lookup.fetch_add(1, Ordering::SeqCst);
        self.0.lookup_result.lock().unwrap().clone()
    }
}

#[derive(Clone)]
pub struct TestConfiguration;

impl Configuration for TestConfiguration {
    fn api_key(&self) -> String {
        TEST_API_KEY.into()
    }

    fn port(&self) -> String {
        "0".into()
    }

    fn database_url(&self) -> Option<String> {
        None
    }
}

pub fn appointment_payload(full_name: &str, location: &str, appointment_time: &str) -> Value {
    json!({
        "fullName": full_name,
        "location": location,
        "appointmentTime": appointment_time,
        "car": "Outback",
        "services": ["Oil Change", "Tire Rotation"],
    })
}

fn example_request(full_name: &str) -> AppointmentRequest {
    AppointmentRequest {
        full_name: full_name.into(),
        location: "Farrish Subaru".into(),
        appointment_time: AppointmentTime::parse("2025-01-01T10:00:00Z").unwrap(),
        car: "Outback".into(),
        services: vec!["Oil Change".into(), "Tire Rotation".into()],
    }
}

pub fn example_identity() -> BookingIdentity {
    let request = example_request("Jane Doe");
    BookingIdentity::for_slot(&request.location, &request.appointment_time)
}

pub fn example_record(full_name: &str) -> BookingRecord {
    let request = example_request(full_name);
    let identity = BookingIdentity::for_slot(&request.location, &request.appointment_time);
    BookingRecord::new(&identity, &request)
}
