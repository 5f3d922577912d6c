use super::{EXTENSION_NS, EXTENSION_PREFIX, HEART_RATE_TYPE, TCD_NS, XSI_NS, XSI_PREFIX};
use crate::errors::{AppError, AppResult};
use crate::models::{Activity, Sample, SummaryField};
use crate::utils::fs::write_atomic;
use crate::utils::time::format_timestamp;
use std::path::Path;
use xmltree::{Element, EmitterConfig, Namespace, XMLNode};

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Serializer switches, usually taken from the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    pub pretty_print: bool,
    /// Rewrite `xsi:type` to a bare `type` attribute for consumers that
    /// do not resolve the XSI namespace.
    pub normalize_type_attribute: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            pretty_print: true,
            normalize_type_attribute: true,
        }
    }
}

/// Serialize an activity into a complete TCX document.
pub fn render_activity(activity: &Activity, opts: &WriteOptions) -> AppResult<String> {
    let root = document(activity);

    let config = EmitterConfig::new()
        .perform_indent(opts.pretty_print)
        .write_document_declaration(false);

    let mut buf: Vec<u8> = Vec::new();
    root.write_with_config(&mut buf, config)
        .map_err(|e| AppError::Serialize(e.to_string()))?;
    let body = String::from_utf8(buf).map_err(|e| AppError::Serialize(e.to_string()))?;

    let xml = format!("{XML_PROLOG}\n{body}\n");
    if opts.normalize_type_attribute {
        Ok(xml.replace("xsi:type", "type"))
    } else {
        Ok(xml)
    }
}

/// Render then write in one step: the target is either fully written or untouched.
pub fn write_activity(path: &Path, activity: &Activity, opts: &WriteOptions) -> AppResult<()> {
    let xml = render_activity(activity, opts)?;
    write_atomic(path, xml.as_bytes())
}

fn document(activity: &Activity) -> Element {
    let lap = &activity.lap;

    let mut lap_el = tcd("Lap");
    lap_el
        .attributes
        .insert("StartTime".to_string(), format_timestamp(&lap.start_time));

    // heart rate first, as typed values
    for field in [
        SummaryField::MaximumHeartRateBpm,
        SummaryField::AverageHeartRateBpm,
    ] {
        if let Some(value) = lap.summary.get(field) {
            push(&mut lap_el, heart_rate(field.tag(), value));
        }
    }
    push(&mut lap_el, text("TriggerMethod", &lap.trigger_method));
    for field in SummaryField::ALL.iter().filter(|f| !f.is_heart_rate()) {
        if let Some(value) = lap.summary.get(*field) {
            push(&mut lap_el, text(field.tag(), value));
        }
    }
    if let Some(cadence) = &lap.summary.cadence {
        push(&mut lap_el, text("Cadence", cadence));
    }

    let mut track = tcd("Track");
    for sample in &lap.samples {
        push(&mut track, trackpoint(sample));
    }
    push(&mut lap_el, track);

    let mut activity_el = tcd("Activity");
    activity_el
        .attributes
        .insert("Sport".to_string(), activity.sport.clone());
    push(&mut activity_el, text("Id", &format_timestamp(&activity.id)));
    push(&mut activity_el, lap_el);

    let mut activities = tcd("Activities");
    push(&mut activities, activity_el);

    let mut ns = Namespace::empty();
    ns.put("", TCD_NS);
    ns.put(XSI_PREFIX, XSI_NS);
    ns.put(EXTENSION_PREFIX, EXTENSION_NS);

    let mut root = tcd("TrainingCenterDatabase");
    root.namespaces = Some(ns);
    push(&mut root, activities);
    root
}

fn trackpoint(sample: &Sample) -> Element {
    let mut tp = tcd("Trackpoint");

    if let Some(time) = &sample.time {
        push(&mut tp, text("Time", &format_timestamp(time)));
    }
    if let Some(pos) = &sample.position {
        let mut el = tcd("Position");
        push(&mut el, text("LatitudeDegrees", &pos.latitude_text));
        push(&mut el, text("LongitudeDegrees", &pos.longitude_text));
        push(&mut tp, el);
    }
    if let Some(alt) = &sample.altitude {
        push(&mut tp, text("AltitudeMeters", alt));
    }
    // source spelling wins over the parsed value
    let distance = match (&sample.odometer_text, sample.odometer) {
        (Some(raw), _) => Some(raw.clone()),
        (None, Some(meters)) => Some(meters.to_string()),
        (None, None) => None,
    };
    if let Some(distance) = distance {
        push(&mut tp, text("DistanceMeters", &distance));
    }
    if let Some(hr) = &sample.heart_rate {
        push(&mut tp, heart_rate("HeartRateBpm", hr));
    }
    if let Some(cad) = &sample.cadence {
        push(&mut tp, text("Cadence", cad));
    }
    if let Some(speed) = &sample.speed {
        let mut speed_el = extension("Speed");
        speed_el.children.push(XMLNode::Text(speed.clone()));
        let mut tpx = extension("TPX");
        push(&mut tpx, speed_el);
        let mut ext = tcd("Extensions");
        push(&mut ext, tpx);
        push(&mut tp, ext);
    }

    tp
}

fn tcd(name: &str) -> Element {
    let mut el = Element::new(name);
    el.namespace = Some(TCD_NS.to_string());
    el
}

fn extension(name: &str) -> Element {
    let mut el = Element::new(name);
    el.prefix = Some(EXTENSION_PREFIX.to_string());
    el.namespace = Some(EXTENSION_NS.to_string());
    el
}

fn text(name: &str, value: &str) -> Element {
    let mut el = tcd(name);
    el.children.push(XMLNode::Text(value.to_string()));
    el
}

fn heart_rate(name: &str, value: &str) -> Element {
    let mut el = tcd(name);
    el.attributes.insert(
        format!("{XSI_PREFIX}:type"),
        HEART_RATE_TYPE.to_string(),
    );
    push(&mut el, text("Value", value));
    el
}

fn push(parent: &mut Element, child: Element) {
    parent.children.push(XMLNode::Element(child));
}
