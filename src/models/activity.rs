use super::{Lap, LapSummary, Sample};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

pub const SPORT_BIKING: &str = "Biking";
pub const TRIGGER_MANUAL: &str = "Manual";

/// Output activity: one Activity holding exactly one Lap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: DateTime<Utc>,
    pub sport: String,
    pub lap: Lap,
}

impl Activity {
    pub fn biking(id: DateTime<Utc>, lap: Lap) -> Self {
        Self {
            id,
            sport: SPORT_BIKING.to_string(),
            lap,
        }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.lap.samples
    }
}

/// One source document as read from disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recording {
    pub source: PathBuf,
    pub id: DateTime<Utc>,
    pub lap_start: DateTime<Utc>,
    pub summary: LapSummary,
    pub samples: Vec<Sample>,
}

impl Recording {
    /// Label used in error messages and logs.
    pub fn label(&self) -> String {
        self.source.display().to_string()
    }
}
