#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tcxmerge::models::{LapSummary, Position, Recording, Sample};

/// 2016-06-25T16:51:00Z
pub const BASE: i64 = 1_466_873_460;

pub fn tcxm() -> Command {
    cargo_bin_cmd!("tcxmerge")
}

pub fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("valid timestamp")
}

pub fn iso(secs: i64) -> String {
    ts(secs).format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

pub fn pos(lat: f64, lon: f64) -> Position {
    Position::new(lat, lon)
}

/// Sample at `t` with odometer `odo` and an optional position.
pub fn sample(t: i64, odo: f64, position: Option<Position>) -> Sample {
    let s = Sample::at(ts(t)).with_odometer(odo);
    match position {
        Some(p) => s.with_position(p),
        None => s,
    }
}

pub fn summary(values: [&str; 7]) -> LapSummary {
    LapSummary {
        total_time_seconds: Some(values[0].to_string()),
        distance_meters: Some(values[1].to_string()),
        maximum_speed: Some(values[2].to_string()),
        calories: Some(values[3].to_string()),
        intensity: Some(values[4].to_string()),
        average_heart_rate_bpm: Some(values[5].to_string()),
        maximum_heart_rate_bpm: Some(values[6].to_string()),
        cadence: None,
    }
}

pub fn recording(name: &str, lap_start: i64, samples: Vec<Sample>) -> Recording {
    Recording {
        source: PathBuf::from(name),
        id: ts(lap_start),
        lap_start: ts(lap_start),
        summary: LapSummary::default(),
        samples,
    }
}

/// One `<Trackpoint>`; `odo`/`position` are omitted when `None`.
pub fn trackpoint_xml(time: &str, odo: Option<f64>, position: Option<(f64, f64)>) -> String {
    let mut xml = format!("<Trackpoint><Time>{time}</Time>");
    if let Some((lat, lon)) = position {
        xml.push_str(&format!(
            "<Position><LatitudeDegrees>{lat}</LatitudeDegrees><LongitudeDegrees>{lon}</LongitudeDegrees></Position>"
        ));
    }
    xml.push_str("<AltitudeMeters>312.4</AltitudeMeters>");
    if let Some(odo) = odo {
        xml.push_str(&format!("<DistanceMeters>{odo}</DistanceMeters>"));
    }
    xml.push_str(
        "<HeartRateBpm xsi:type=\"HeartRateInBeatsPerMinute_t\"><Value>131</Value></HeartRateBpm>\
         <Cadence>84</Cadence>\
         <Extensions><ns3:TPX><ns3:Speed>7.25</ns3:Speed></ns3:TPX></Extensions>\
         </Trackpoint>",
    );
    xml
}

/// A complete single-lap TCX document.
pub fn tcx_xml(id: &str, lap_start: &str, header: [&str; 7], trackpoints: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2" xmlns:ns3="http://www.garmin.com/xmlschemas/ActivityExtension/v2" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <Activities>
    <Activity Sport="Biking">
      <Id>{id}</Id>
      <Lap StartTime="{lap_start}">
        <TotalTimeSeconds>{}</TotalTimeSeconds>
        <DistanceMeters>{}</DistanceMeters>
        <MaximumSpeed>{}</MaximumSpeed>
        <Calories>{}</Calories>
        <AverageHeartRateBpm xsi:type="HeartRateInBeatsPerMinute_t"><Value>{}</Value></AverageHeartRateBpm>
        <MaximumHeartRateBpm xsi:type="HeartRateInBeatsPerMinute_t"><Value>{}</Value></MaximumHeartRateBpm>
        <Intensity>{}</Intensity>
        <TriggerMethod>Manual</TriggerMethod>
        <Track>
          {}
        </Track>
      </Lap>
    </Activity>
  </Activities>
</TrainingCenterDatabase>
"#,
        header[0],
        header[1],
        header[2],
        header[3],
        header[5],
        header[6],
        header[4],
        trackpoints.join("\n          ")
    )
}

/// Header order: total time, distance, max speed, calories, intensity, avg hr, max hr.
pub const HEADER_A: [&str; 7] = ["3600", "20500.5", "12.50", "512", "Active", "131", "172"];
pub const HEADER_B: [&str; 7] = ["3725", "20480.0", "11.75", "498", "Active", "128", "176"];

/// Device A: three points with position at BASE+100/200/300, odometer 10/20/30.
pub fn device_a_xml() -> String {
    let points = vec![
        trackpoint_xml(&iso(BASE + 100), Some(10.0), Some((45.1, 9.1))),
        trackpoint_xml(&iso(BASE + 200), Some(20.0), Some((45.2, 9.2))),
        trackpoint_xml(&iso(BASE + 300), Some(30.0), Some((45.3, 9.3))),
    ];
    tcx_xml(&iso(BASE + 100), &iso(BASE + 100), HEADER_A, &points)
}

/// Device B: two points without position at BASE+150/250, odometer 15/25.
pub fn device_b_xml() -> String {
    let points = vec![
        trackpoint_xml(&iso(BASE + 150), Some(15.0), None),
        trackpoint_xml(&iso(BASE + 250), Some(25.0), None),
    ];
    tcx_xml(&iso(BASE + 150), &iso(BASE + 90), HEADER_B, &points)
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}
