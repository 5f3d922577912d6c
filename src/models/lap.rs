use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// The seven lap header fields reconciled during a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryField {
    TotalTimeSeconds,
    DistanceMeters,
    MaximumSpeed,
    Calories,
    Intensity,
    AverageHeartRateBpm,
    MaximumHeartRateBpm,
}

impl SummaryField {
    pub const ALL: [SummaryField; 7] = [
        SummaryField::TotalTimeSeconds,
        SummaryField::DistanceMeters,
        SummaryField::MaximumSpeed,
        SummaryField::Calories,
        SummaryField::Intensity,
        SummaryField::AverageHeartRateBpm,
        SummaryField::MaximumHeartRateBpm,
    ];

    /// Element name inside `Lap`.
    pub fn tag(&self) -> &'static str {
        match self {
            SummaryField::TotalTimeSeconds => "TotalTimeSeconds",
            SummaryField::DistanceMeters => "DistanceMeters",
            SummaryField::MaximumSpeed => "MaximumSpeed",
            SummaryField::Calories => "Calories",
            SummaryField::Intensity => "Intensity",
            SummaryField::AverageHeartRateBpm => "AverageHeartRateBpm",
            SummaryField::MaximumHeartRateBpm => "MaximumHeartRateBpm",
        }
    }

    /// Heart-rate fields wrap their text in a typed `Value` child.
    pub fn is_heart_rate(&self) -> bool {
        matches!(
            self,
            SummaryField::AverageHeartRateBpm | SummaryField::MaximumHeartRateBpm
        )
    }
}

impl fmt::Display for SummaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Lap header statistics, stored as the raw text of each element.
///
/// `cadence` is not one of the reconciled fields: it is carried through a
/// shift and left empty by a merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LapSummary {
    pub total_time_seconds: Option<String>,
    pub distance_meters: Option<String>,
    pub maximum_speed: Option<String>,
    pub calories: Option<String>,
    pub intensity: Option<String>,
    pub average_heart_rate_bpm: Option<String>,
    pub maximum_heart_rate_bpm: Option<String>,
    pub cadence: Option<String>,
}

impl LapSummary {
    pub fn get(&self, field: SummaryField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: SummaryField, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    fn slot(&self, field: SummaryField) -> &Option<String> {
        match field {
            SummaryField::TotalTimeSeconds => &self.total_time_seconds,
            SummaryField::DistanceMeters => &self.distance_meters,
            SummaryField::MaximumSpeed => &self.maximum_speed,
            SummaryField::Calories => &self.calories,
            SummaryField::Intensity => &self.intensity,
            SummaryField::AverageHeartRateBpm => &self.average_heart_rate_bpm,
            SummaryField::MaximumHeartRateBpm => &self.maximum_heart_rate_bpm,
        }
    }

    fn slot_mut(&mut self, field: SummaryField) -> &mut Option<String> {
        match field {
            SummaryField::TotalTimeSeconds => &mut self.total_time_seconds,
            SummaryField::DistanceMeters => &mut self.distance_meters,
            SummaryField::MaximumSpeed => &mut self.maximum_speed,
            SummaryField::Calories => &mut self.calories,
            SummaryField::Intensity => &mut self.intensity,
            SummaryField::AverageHeartRateBpm => &mut self.average_heart_rate_bpm,
            SummaryField::MaximumHeartRateBpm => &mut self.maximum_heart_rate_bpm,
        }
    }
}

/// A single lap. TCX allows many, this tool always writes exactly one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lap {
    pub start_time: DateTime<Utc>,
    pub summary: LapSummary,
    pub trigger_method: String,
    pub samples: Vec<super::Sample>,
}
