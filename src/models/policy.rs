use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the combined samples of two recordings are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Interleave by wall-clock time
    #[default]
    Time,
    /// Order by cumulative distance and fill in missing positions
    Odometer,
}

impl MergePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergePolicy::Time => "time",
            MergePolicy::Odometer => "odometer",
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
