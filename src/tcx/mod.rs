//! TCX (Training Center XML) document reader and writer.

mod reader;
mod writer;

pub use reader::{load_recording, read_recording};
pub use writer::{WriteOptions, render_activity, write_activity};

/// Training-database namespace: document skeleton, laps, trackpoints.
pub const TCD_NS: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";
/// Activity extension namespace: `Extensions/TPX/Speed`.
pub const EXTENSION_NS: &str = "http://www.garmin.com/xmlschemas/ActivityExtension/v2";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

pub const EXTENSION_PREFIX: &str = "ns3";
pub const XSI_PREFIX: &str = "xsi";

/// Type attached to every heart-rate `Value` wrapper.
pub const HEART_RATE_TYPE: &str = "HeartRateInBeatsPerMinute_t";
