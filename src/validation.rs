use std::fmt;
use std::ops::RangeInclusive;

use serde_json::Value;

use crate::models::ride::{NewRide, RideCreateRequest};

const LAT_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONG_RANGE: RangeInclusive<f64> = -180.0..=180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    StartCoordinates,
    EndCoordinates,
    RiderName,
    DriverName,
    DriverVehicle,
}

impl ValidationFailure {
    pub fn message(self) -> &'static str {
        match self {
            ValidationFailure::StartCoordinates => {
                "Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively"
            }
            ValidationFailure::EndCoordinates => {
                "End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively"
            }
            ValidationFailure::RiderName => "Rider name must be a non empty string",
            ValidationFailure::DriverName => "Driver name must be a non empty string",
            ValidationFailure::DriverVehicle => "Driver vehicle must be a non empty string",
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Checks a create request against the domain constraints.
///
/// Checks run in a fixed order and stop at the first failure, so a request
/// with several bad fields reports only the first one.
pub fn validate(request: &RideCreateRequest) -> Result<NewRide, ValidationFailure> {
    let start_lat = coerce_number(request.start_lat.as_ref());
    let start_long = coerce_number(request.start_long.as_ref());
    let end_lat = coerce_number(request.end_lat.as_ref());
    let end_long = coerce_number(request.end_long.as_ref());

    if !LAT_RANGE.contains(&start_lat) || !LONG_RANGE.contains(&start_long) {
        return Err(ValidationFailure::StartCoordinates);
    }
    if !LAT_RANGE.contains(&end_lat) || !LONG_RANGE.contains(&end_long) {
        return Err(ValidationFailure::EndCoordinates);
    }

    let rider_name =
        non_empty_text(request.rider_name.as_ref()).ok_or(ValidationFailure::RiderName)?;
    let driver_name =
        non_empty_text(request.driver_name.as_ref()).ok_or(ValidationFailure::DriverName)?;
    let driver_vehicle =
        non_empty_text(request.driver_vehicle.as_ref()).ok_or(ValidationFailure::DriverVehicle)?;

    Ok(NewRide {
        start_lat,
        start_long,
        end_lat,
        end_long,
        rider_name,
        driver_name,
        driver_vehicle,
    })
}

// Missing or unparseable input coerces to NaN, which sits outside every
// bound and surfaces as a range violation rather than a separate error kind.
fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        _ => f64::NAN,
    }
}

fn non_empty_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}
