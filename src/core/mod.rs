pub mod merge;
pub mod shift;

pub use merge::{MergeLogic, MergeOptions, MergeOutcome, merge_recordings};
pub use shift::{ShiftLogic, shift_recording, shift_samples};
