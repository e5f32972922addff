use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use sqlx::FromRow;

/// A persisted ride. Wire field names follow the stored column names.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    #[serde(rename = "rideID")]
    #[sqlx(rename = "rideID")]
    pub ride_id: i64,
    #[sqlx(rename = "startLat")]
    pub start_lat: f64,
    #[sqlx(rename = "startLong")]
    pub start_long: f64,
    #[sqlx(rename = "endLat")]
    pub end_lat: f64,
    #[sqlx(rename = "endLong")]
    pub end_long: f64,
    #[sqlx(rename = "riderName")]
    pub rider_name: String,
    #[sqlx(rename = "driverName")]
    pub driver_name: String,
    #[sqlx(rename = "driverVehicle")]
    pub driver_vehicle: String,
    #[serde(serialize_with = "sql_timestamp")]
    pub created: NaiveDateTime,
}

// `created` is stored as `YYYY-MM-DD HH:MM:SS` text and echoed back unchanged.
fn sql_timestamp<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Untrusted create payload. Clients send coordinates as JSON numbers or
/// strings and may omit or mistype any field, so everything stays raw until
/// the validator has classified it.
#[derive(Debug, Default, Deserialize)]
pub struct RideCreateRequest {
    pub start_lat: Option<Value>,
    pub start_long: Option<Value>,
    pub end_lat: Option<Value>,
    pub end_long: Option<Value>,
    pub rider_name: Option<Value>,
    pub driver_name: Option<Value>,
    pub driver_vehicle: Option<Value>,
}

/// A validated ride, ready for a single insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRide {
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}
