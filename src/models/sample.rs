use chrono::{DateTime, Utc};
use serde::Serialize;

/// Latitude/longitude pair in decimal degrees, with the text it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_text: String,
    pub longitude_text: String,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            latitude_text: latitude.to_string(),
            longitude_text: longitude.to_string(),
        }
    }

    /// Keep the source spelling (`45.10000`) for writing back.
    pub fn with_text(mut self, latitude: &str, longitude: &str) -> Self {
        self.latitude_text = latitude.to_string();
        self.longitude_text = longitude.to_string();
        self
    }
}

/// One recorded instant of a track (a TCX `Trackpoint`).
///
/// Readings are kept as the raw text found in the source document and
/// written back untouched. The odometer is also parsed, for ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sample {
    pub time: Option<DateTime<Utc>>, // ⇔ Trackpoint/Time
    pub position: Option<Position>,  // ⇔ Trackpoint/Position
    pub odometer: Option<f64>,       // ⇔ Trackpoint/DistanceMeters
    pub odometer_text: Option<String>,
    pub altitude: Option<String>,    // ⇔ Trackpoint/AltitudeMeters
    pub heart_rate: Option<String>,  // ⇔ Trackpoint/HeartRateBpm/Value
    pub cadence: Option<String>,     // ⇔ Trackpoint/Cadence
    pub speed: Option<String>,       // ⇔ Trackpoint/Extensions/TPX/Speed
}

impl Sample {
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            time: Some(time),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_odometer(mut self, meters: f64) -> Self {
        self.odometer = Some(meters);
        self.odometer_text = Some(meters.to_string());
        self
    }

    /// Time and position of this sample, when both are known.
    pub fn fix(&self) -> Option<(DateTime<Utc>, Position)> {
        Some((self.time?, self.position.clone()?))
    }
}
