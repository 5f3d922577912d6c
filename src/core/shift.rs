//! Shifting a recording's timestamps past reported breaks.

use crate::errors::{AppError, AppResult};
use crate::models::{Activity, BreakSchedule, Lap, Recording, Sample, TRIGGER_MANUAL};
use crate::tcx::{WriteOptions, write_activity};
use std::path::Path;
use tracing::{debug, info};

/// Move every sample forward by the total length of the breaks that started
/// at or before its original time. Order and all other fields are kept.
pub fn shift_samples(recording: &Recording, breaks: &BreakSchedule) -> AppResult<Vec<Sample>> {
    recording
        .samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let original = sample.time.ok_or_else(|| AppError::MissingField {
                file: recording.label(),
                path: format!("Lap/Track/Trackpoint[{}]/Time", i + 1),
            })?;

            let mut shifted = sample.clone();
            shifted.time = Some(original + breaks.offset_at(original));
            Ok(shifted)
        })
        .collect()
}

/// The recording as a single-lap activity with shifted samples.
pub fn shift_recording(recording: &Recording, breaks: &BreakSchedule) -> AppResult<Activity> {
    let samples = shift_samples(recording, breaks)?;

    let lap = Lap {
        start_time: recording.lap_start,
        summary: recording.summary.clone(),
        trigger_method: TRIGGER_MANUAL.to_string(),
        samples,
    };

    Ok(Activity::biking(recording.id, lap))
}

/// High-level logic for the `shift` command.
pub struct ShiftLogic;

impl ShiftLogic {
    pub fn shift(
        recording: &Recording,
        breaks: &BreakSchedule,
        output: &Path,
        write: &WriteOptions,
    ) -> AppResult<Activity> {
        for (start, len) in breaks.iter() {
            debug!("break at {} for {}s", start, len);
        }
        info!(
            "shifting {} trackpoints of {} past {} breaks",
            recording.samples.len(),
            recording.label(),
            breaks.len()
        );

        let activity = shift_recording(recording, breaks)?;
        write_activity(output, &activity, write)?;
        Ok(activity)
    }
}
