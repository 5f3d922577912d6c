//! Merging two recordings of the same ride into one activity.

pub mod assemble;
pub mod header;
pub mod track;

pub use assemble::{DEFAULT_ID_OFFSET_SECS, activity_id, assemble, lap_start};
pub use header::{aggregate_headers, text_max};
pub use track::{GapFillReport, MergedTrack, fill_gaps, merge_tracks, order_by_odometer, order_by_time};

use crate::errors::AppResult;
use crate::models::{Activity, MergePolicy, Recording};
use crate::tcx::{WriteOptions, load_recording, write_activity};
use crate::utils::fs::require_inputs;
use chrono::Duration;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    pub policy: MergePolicy,
    pub id_offset: Duration,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            policy: MergePolicy::Time,
            id_offset: Duration::seconds(DEFAULT_ID_OFFSET_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub activity: Activity,
    pub gap_fill: Option<GapFillReport>,
}

/// Pure merge of two loaded recordings.
pub fn merge_recordings(
    first: &Recording,
    second: &Recording,
    opts: &MergeOptions,
) -> AppResult<MergeOutcome> {
    let summary = aggregate_headers(&first.summary, &second.summary);
    let track = merge_tracks(first, second, opts.policy)?;
    let activity = assemble(first, second, summary, track.samples, opts.id_offset)?;

    Ok(MergeOutcome {
        activity,
        gap_fill: track.gap_fill,
    })
}

/// High-level logic for the `merge` command.
pub struct MergeLogic;

impl MergeLogic {
    /// Load both files, merge them and write `output`. Nothing is written
    /// unless every step before it succeeded.
    pub fn merge_files(
        file1: &Path,
        file2: &Path,
        output: &Path,
        opts: &MergeOptions,
        write: &WriteOptions,
    ) -> AppResult<MergeOutcome> {
        require_inputs(&[file1, file2])?;

        let first = load_recording(file1)?;
        let second = load_recording(file2)?;

        let outcome = merge_recordings(&first, &second, opts)?;
        write_activity(output, &outcome.activity, write)?;

        Ok(outcome)
    }
}
