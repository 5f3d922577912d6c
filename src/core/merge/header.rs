use crate::models::{LapSummary, SummaryField};
use tracing::debug;

/// Reconcile two lap headers field by field.
///
/// Each field keeps the greater of the two raw texts. The comparison is on
/// text, not on numbers: `"99"` beats `"100"`. Only equal-width unsigned
/// values compare the way their numbers would.
pub fn aggregate_headers(first: &LapSummary, second: &LapSummary) -> LapSummary {
    let mut merged = LapSummary::default();

    for field in SummaryField::ALL {
        let a = first.get(field);
        let b = second.get(field);
        let winner = text_max(a, b);
        debug!("{}: {:?} vs {:?} -> {:?}", field, a, b, winner);
        merged.set(field, winner.map(str::to_string));
    }

    debug!("merged header: {:?}", merged);
    merged
}

/// Lexicographic maximum. A missing value counts as the empty string,
/// ties keep `a`.
pub fn text_max<'a>(a: Option<&'a str>, b: Option<&'a str>) -> Option<&'a str> {
    match (a, b) {
        (None, None) => None,
        (Some(x), None) => Some(x),
        (None, Some(y)) => Some(y),
        (Some(x), Some(y)) => {
            if y > x {
                Some(y)
            } else {
                Some(x)
            }
        }
    }
}
