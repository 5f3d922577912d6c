use super::{EXTENSION_NS, TCD_NS};
use crate::errors::{AppError, AppResult};
use crate::models::{LapSummary, Position, Recording, Sample, SummaryField};
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};
use xmltree::{Element, XMLNode};

/// Load one recording from disk. Fails with `NotFound` before any parsing.
pub fn load_recording(path: &Path) -> AppResult<Recording> {
    if !path.is_file() {
        return Err(AppError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let recording = read_recording(BufReader::new(file), path)?;

    info!(
        "{}: {} trackpoints, lap started {}",
        recording.label(),
        recording.samples.len(),
        recording.lap_start
    );
    Ok(recording)
}

/// Parse a TCX document. `source` is only used to label the recording and
/// its errors.
pub fn read_recording<R: Read>(reader: R, source: &Path) -> AppResult<Recording> {
    let doc = Doc {
        file: source.display().to_string(),
    };

    let root = Element::parse(reader).map_err(|e| AppError::Xml {
        file: doc.file.clone(),
        message: e.to_string(),
    })?;

    let activity = find_descendant(&root, "Activity").ok_or_else(|| doc.missing("Activity"))?;

    let id_text = text_of(activity, "Id").ok_or_else(|| doc.missing("Activity/Id"))?;
    let id = doc.timestamp("Activity/Id", &id_text)?;

    let lap = child(activity, "Lap").ok_or_else(|| doc.missing("Activity/Lap"))?;
    let start_text = lap
        .attributes
        .get("StartTime")
        .ok_or_else(|| doc.missing("Lap[@StartTime]"))?;
    let lap_start = doc.timestamp("Lap[@StartTime]", start_text)?;

    let mut summary = LapSummary::default();
    for field in SummaryField::ALL {
        let value = child(lap, field.tag()).map(summary_text);
        debug!("{} {}: {:?}", doc.file, field, value);
        summary.set(field, value);
    }
    summary.cadence = text_of(lap, "Cadence");

    let mut samples = Vec::new();
    for track in children(lap, "Track") {
        for point in children(track, "Trackpoint") {
            samples.push(doc.sample(point, samples.len())?);
        }
    }

    Ok(Recording {
        source: source.to_path_buf(),
        id,
        lap_start,
        summary,
        samples,
    })
}

struct Doc {
    file: String,
}

impl Doc {
    fn missing(&self, path: &str) -> AppError {
        AppError::MissingField {
            file: self.file.clone(),
            path: path.to_string(),
        }
    }

    fn timestamp(&self, path: &str, raw: &str) -> AppResult<DateTime<Utc>> {
        parse_timestamp(raw).map_err(|_| AppError::Format {
            file: self.file.clone(),
            path: path.to_string(),
            value: raw.to_string(),
        })
    }

    fn number(&self, path: &str, raw: &str) -> AppResult<f64> {
        raw.trim().parse::<f64>().map_err(|_| AppError::InvalidNumber {
            file: self.file.clone(),
            path: path.to_string(),
            value: raw.to_string(),
        })
    }

    fn sample(&self, point: &Element, index: usize) -> AppResult<Sample> {
        let path = |leaf: &str| format!("Lap/Track/Trackpoint[{}]/{}", index + 1, leaf);

        let time = match text_of(point, "Time") {
            Some(raw) => Some(self.timestamp(&path("Time"), &raw)?),
            None => None,
        };

        let position = match child(point, "Position") {
            Some(pos) => match (
                text_of(pos, "LatitudeDegrees"),
                text_of(pos, "LongitudeDegrees"),
            ) {
                (Some(lat), Some(lon)) => Some(
                    Position::new(
                        self.number(&path("Position/LatitudeDegrees"), &lat)?,
                        self.number(&path("Position/LongitudeDegrees"), &lon)?,
                    )
                    .with_text(&lat, &lon),
                ),
                _ => None,
            },
            None => None,
        };

        let odometer_text = text_of(point, "DistanceMeters");
        let odometer = match &odometer_text {
            Some(raw) => Some(self.number(&path("DistanceMeters"), raw)?),
            None => None,
        };

        let speed = child(point, "Extensions")
            .and_then(|ext| child_ns(ext, "TPX", EXTENSION_NS))
            .and_then(|tpx| child_ns(tpx, "Speed", EXTENSION_NS))
            .and_then(element_text);

        Ok(Sample {
            time,
            position,
            odometer,
            odometer_text,
            altitude: text_of(point, "AltitudeMeters"),
            heart_rate: child(point, "HeartRateBpm").and_then(|hr| text_of(hr, "Value")),
            cadence: text_of(point, "Cadence"),
            speed,
        })
    }
}

fn is_named(el: &Element, name: &str, ns: &str) -> bool {
    el.name == name && el.namespace.as_deref() == Some(ns)
}

fn elements(el: &Element) -> impl Iterator<Item = &Element> {
    el.children.iter().filter_map(|node| match node {
        XMLNode::Element(e) => Some(e),
        _ => None,
    })
}

fn child_ns<'a>(el: &'a Element, name: &str, ns: &str) -> Option<&'a Element> {
    elements(el).find(|e| is_named(e, name, ns))
}

fn child<'a>(el: &'a Element, name: &str) -> Option<&'a Element> {
    child_ns(el, name, TCD_NS)
}

fn children<'a>(el: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> {
    elements(el).filter(move |e| is_named(e, name, TCD_NS))
}

/// Depth-first search for the first element with the given TCD name.
fn find_descendant<'a>(el: &'a Element, name: &str) -> Option<&'a Element> {
    if is_named(el, name, TCD_NS) {
        return Some(el);
    }
    elements(el).find_map(|e| find_descendant(e, name))
}

fn element_text(el: &Element) -> Option<String> {
    el.get_text().map(|t| t.trim().to_string())
}

fn text_of(el: &Element, name: &str) -> Option<String> {
    child(el, name).and_then(element_text)
}

/// Text of a header field: its own text, or the text of its first child
/// element for wrapped values such as `AverageHeartRateBpm/Value`.
fn summary_text(el: &Element) -> String {
    let inner = elements(el).next().unwrap_or(el);
    element_text(inner).unwrap_or_default()
}
