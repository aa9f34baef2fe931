use chrono::{DateTime, FixedOffset, Utc};
use diesel::prelude::*;
use std::fmt;

/// A validated booking request. Field values keep their original casing;
/// normalization happens when the identity and the record are built.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentRequest {
    pub full_name: String,
    pub location: String,
    pub appointment_time: AppointmentTime,
    pub car: String,
    pub services: Vec<String>,
}

/// An appointment time as received on the wire, plus its parsed form so
/// nothing downstream has to parse it again.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentTime {
    raw: String,
    parsed: DateTime<FixedOffset>,
}

impl AppointmentTime {
    /// Accepts RFC 3339 only, which makes an explicit UTC offset ("Z" or
    /// numeric) mandatory.
    pub fn parse(raw: &str) -> Result<Self, chrono::ParseError> {
        let parsed = DateTime::parse_from_rfc3339(raw)?;
        Ok(Self {
            raw: raw.to_owned(),
            parsed,
        })
    }

    /// The original wire form, full precision, offset notation untouched.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The minute this appointment falls in, in UTC. Slot granularity is one
    /// minute: seconds, sub-second digits and offset notation are folded away
    /// so the same slot cannot sneak past under a different spelling.
    pub fn slot_minute(&self) -> String {
        self.parsed
            .with_timezone(&Utc)
            .format("%Y-%m-%dT%H:%M")
            .to_string()
    }
}

/// Canonical key for one (location, minute) slot. Two requests a human would
/// call "the same slot" derive the same identity regardless of location
/// casing or time spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingIdentity(String);

impl BookingIdentity {
    // A '#' inside the location text is not escaped; two locations differing
    // only around a literal '#' could collide. Known limitation.
    pub fn for_slot(location: &str, time: &AppointmentTime) -> Self {
        Self(format!("{}#{}", location.to_lowercase(), time.slot_minute()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The persisted booking. One row per identity, written once, never updated.
#[derive(Debug, Clone, PartialEq, Queryable, Insertable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct BookingRecord {
    pub appointment_id: String,
    pub full_name: String,
    pub location: String,
    pub appointment_time: String,
    pub car: String,
    pub services: Vec<String>,
}

impl BookingRecord {
    pub fn new(identity: &BookingIdentity, request: &AppointmentRequest) -> Self {
        Self {
            appointment_id: identity.as_str().to_owned(),
            full_name: request.full_name.to_lowercase(),
            location: request.location.to_lowercase(),
            appointment_time: request.appointment_time.as_str().to_owned(),
            car: request.car.clone(),
            services: request.services.clone(),
        }
    }
}
