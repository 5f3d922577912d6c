use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// Reported pauses: break start (epoch seconds) → break length (seconds).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakSchedule {
    breaks: BTreeMap<i64, i64>,
}

impl BreakSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a break. A second break at the same instant replaces the first.
    pub fn insert(&mut self, start_epoch: i64, length_secs: i64) {
        self.breaks.insert(start_epoch, length_secs);
    }

    /// Register a break given as an offset from `origin`.
    pub fn insert_relative(&mut self, origin: DateTime<Utc>, offset_secs: i64, length_secs: i64) {
        self.insert(origin.timestamp() + offset_secs, length_secs);
    }

    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.breaks.iter().map(|(s, l)| (*s, *l))
    }

    /// Total length of all breaks starting at or before `instant`.
    pub fn offset_at(&self, instant: DateTime<Utc>) -> Duration {
        let secs: i64 = self
            .breaks
            .range(..=instant.timestamp())
            .map(|(_, len)| *len)
            .sum();
        Duration::seconds(secs)
    }
}

impl FromIterator<(i64, i64)> for BreakSchedule {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        Self {
            breaks: iter.into_iter().collect(),
        }
    }
}
