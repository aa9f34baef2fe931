use crate::types::{AppointmentRequest, AppointmentTime};
use serde::Serialize;
use serde_json::Value;

/// One violated rule, addressed by a dotted path ("services.0").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub(crate) const REQUIRED: &str = "Required";
pub(crate) const EXPECTED_OBJECT: &str = "Expected object";
pub(crate) const EXPECTED_STRING: &str = "Expected string";
pub(crate) const EXPECTED_ARRAY: &str = "Expected array";
pub(crate) const MUST_NOT_BE_EMPTY: &str = "Must not be empty";
pub(crate) const AT_LEAST_ONE_ELEMENT: &str = "Must contain at least one element";
pub(crate) const INVALID_DATETIME: &str = "Must be an ISO-8601 datetime with a UTC offset";

/// Checks a decoded JSON payload against the appointment schema.
///
/// Rules run in schema order and every violated rule yields its own entry, so
/// callers can report all problems at once. A non-string value for a text
/// field is a failure, never a coercion.
pub fn validate_appointment(payload: &Value) -> Result<AppointmentRequest, Vec<FieldError>> {
    let Some(fields) = payload.as_object() else {
        return Err(vec![FieldError::new("", EXPECTED_OBJECT)]);
    };

    let mut errors = Vec::new();

    let full_name = non_empty_string(fields.get("fullName"), "fullName", &mut errors);
    let location = non_empty_string(fields.get("location"), "location", &mut errors);
    let appointment_time = offset_datetime(fields.get("appointmentTime"), &mut errors);
    let car = non_empty_string(fields.get("car"), "car", &mut errors);
    let services = service_list(fields.get("services"), &mut errors);

    match (full_name, location, appointment_time, car, services) {
        (Some(full_name), Some(location), Some(appointment_time), Some(car), Some(services)) => {
            Ok(AppointmentRequest {
                full_name,
                location,
                appointment_time,
                car,
                services,
            })
        }
        _ => Err(errors),
    }
}

fn non_empty_string(
    value: Option<&Value>,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let Some(value) = value else {
        errors.push(FieldError::new(path, REQUIRED));
        return None;
    };
    let Some(text) = value.as_str() else {
        errors.push(FieldError::new(path, EXPECTED_STRING));
        return None;
    };
    if text.is_empty() {
        errors.push(FieldError::new(path, MUST_NOT_BE_EMPTY));
        return None;
    }
    Some(text.to_owned())
}

fn offset_datetime(value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<AppointmentTime> {
    let Some(value) = value else {
        errors.push(FieldError::new("appointmentTime", REQUIRED));
        return None;
    };
    let Some(text) = value.as_str() else {
        errors.push(FieldError::new("appointmentTime", EXPECTED_STRING));
        return None;
    };
    match AppointmentTime::parse(text) {
        Ok(time) => Some(time),
        Err(_) => {
            errors.push(FieldError::new("appointmentTime", INVALID_DATETIME));
            None
        }
    }
}

fn service_list(value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<Vec<String>> {
    let Some(value) = value else {
        errors.push(FieldError::new("services", REQUIRED));
        return None;
    };
    let Some(entries) = value.as_array() else {
        errors.push(FieldError::new("services", EXPECTED_ARRAY));
        return None;
    };
    if entries.is_empty() {
        errors.push(FieldError::new("services", AT_LEAST_ONE_ELEMENT));
        return None;
    }

    let mut services = Vec::with_capacity(entries.len());
    let mut valid = true;
    for (index, entry) in entries.iter().enumerate() {
        match entry.as_str() {
            Some(text) if !text.is_empty() => services.push(text.to_owned()),
            Some(_) => {
                errors.push(FieldError::new(format!("services.{index}"), MUST_NOT_BE_EMPTY));
                valid = false;
            }
            None => {
                errors.push(FieldError::new(format!("services.{index}"), EXPECTED_STRING));
                valid = false;
            }
        }
    }
    valid.then_some(services)
}
