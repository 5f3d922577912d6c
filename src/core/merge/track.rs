use crate::errors::{AppError, AppResult};
use crate::models::{MergePolicy, Recording, Sample};
use std::cmp::Ordering;
use tracing::{debug, info, warn};

/// What the odometer gap-fill did to samples without a position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GapFillReport {
    pub from_next: usize,
    pub from_previous: usize,
    pub unrepaired: usize,
}

impl GapFillReport {
    pub fn repaired(&self) -> usize {
        self.from_next + self.from_previous
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergedTrack {
    pub samples: Vec<Sample>,
    /// Only set under the odometer policy.
    pub gap_fill: Option<GapFillReport>,
}

/// Combine the samples of both recordings under `policy`.
pub fn merge_tracks(
    first: &Recording,
    second: &Recording,
    policy: MergePolicy,
) -> AppResult<MergedTrack> {
    info!(
        "merging {} + {} trackpoints by {}",
        first.samples.len(),
        second.samples.len(),
        policy
    );

    match policy {
        MergePolicy::Time => Ok(MergedTrack {
            samples: order_by_time(first, second)?,
            gap_fill: None,
        }),
        MergePolicy::Odometer => {
            let mut samples = order_by_odometer(first, second);
            let report = fill_gaps(&mut samples);
            Ok(MergedTrack {
                samples,
                gap_fill: Some(report),
            })
        }
    }
}

/// Stable sort of both tracks by time. Every sample must carry a time.
pub fn order_by_time(first: &Recording, second: &Recording) -> AppResult<Vec<Sample>> {
    for rec in [first, second] {
        if let Some(i) = rec.samples.iter().position(|s| s.time.is_none()) {
            return Err(AppError::MissingField {
                file: rec.label(),
                path: format!("Lap/Track/Trackpoint[{}]/Time", i + 1),
            });
        }
    }

    let mut samples = concat(first, second);
    samples.sort_by_key(|s| s.time);
    Ok(samples)
}

/// Stable sort of both tracks by odometer. Samples without one sort first.
pub fn order_by_odometer(first: &Recording, second: &Recording) -> Vec<Sample> {
    let mut samples = concat(first, second);

    let without = samples.iter().filter(|s| s.odometer.is_none()).count();
    if without > 0 {
        warn!("{} trackpoints have no DistanceMeters and sort first", without);
    }

    samples.sort_by(|a, b| compare_odometer(a.odometer, b.odometer));
    samples
}

fn compare_odometer(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn concat(first: &Recording, second: &Recording) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(first.samples.len() + second.samples.len());
    samples.extend_from_slice(&first.samples);
    samples.extend_from_slice(&second.samples);
    samples
}

/// Give every sample without a position the time and position of a
/// neighbour: the next sample if it has both, otherwise the previous one.
/// Samples are repaired in order, so a repaired sample can serve as the
/// previous neighbour of the one after it.
pub fn fill_gaps(samples: &mut [Sample]) -> GapFillReport {
    let mut report = GapFillReport::default();

    for i in 0..samples.len() {
        if samples[i].position.is_some() {
            continue;
        }

        // -----------------------------
        // Next first, then previous
        // -----------------------------
        let from_next = samples.get(i + 1).and_then(Sample::fix);
        let fix = match from_next {
            Some(fix) => {
                report.from_next += 1;
                Some(fix)
            }
            None => {
                let from_previous = i
                    .checked_sub(1)
                    .and_then(|p| samples.get(p))
                    .and_then(Sample::fix);
                if from_previous.is_some() {
                    report.from_previous += 1;
                }
                from_previous
            }
        };

        match fix {
            Some((time, position)) => {
                debug!("trackpoint {} takes time {} from a neighbour", i, time);
                let sample = &mut samples[i];
                sample.time = Some(time);
                sample.position = Some(position);
            }
            None => {
                warn!("trackpoint {} has no neighbour with a position, left as is", i);
                report.unrepaired += 1;
            }
        }
    }

    report
}
