use crate::errors::{AppError, AppResult};
use crate::models::{Activity, Lap, LapSummary, Recording, Sample, TRIGGER_MANUAL};
use chrono::{DateTime, Duration, Utc};

/// Default distance between the merged activity id and its first sample.
/// Keeps the id clear of the single-device recordings' own ids.
pub const DEFAULT_ID_OFFSET_SECS: i64 = 60;

/// Earliest sample time minus `offset`.
pub fn activity_id(samples: &[Sample], offset: Duration) -> Option<DateTime<Utc>> {
    samples
        .iter()
        .filter_map(|s| s.time)
        .min()
        .map(|t| t - offset)
}

/// The earlier of the two lap start times.
pub fn lap_start(first: &Recording, second: &Recording) -> DateTime<Utc> {
    first.lap_start.min(second.lap_start)
}

pub fn assemble(
    first: &Recording,
    second: &Recording,
    summary: LapSummary,
    samples: Vec<Sample>,
    id_offset: Duration,
) -> AppResult<Activity> {
    let id = activity_id(&samples, id_offset).ok_or_else(|| AppError::MissingField {
        file: format!("{} + {}", first.label(), second.label()),
        path: "Lap/Track/Trackpoint/Time".to_string(),
    })?;

    let lap = Lap {
        start_time: lap_start(first, second),
        summary,
        trigger_method: TRIGGER_MANUAL.to_string(),
        samples,
    };

    Ok(Activity::biking(id, lap))
}
