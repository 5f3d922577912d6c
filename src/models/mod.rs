pub mod activity;
pub mod breaks;
pub mod lap;
pub mod policy;
pub mod sample;

pub use activity::{Activity, Recording, SPORT_BIKING, TRIGGER_MANUAL};
pub use breaks::BreakSchedule;
pub use lap::{Lap, LapSummary, SummaryField};
pub use policy::MergePolicy;
pub use sample::{Position, Sample};
