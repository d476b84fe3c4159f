//! End-to-end conversion tests against the library API
//!
//! Exercises the full record-to-document path: parsing NRC JSON, the
//! eligibility filter, metric extraction, point alignment and GPX output
//! shape.

use nrc2gpx::{assemble_gpx, should_skip_conversion, ActivityRecord, ConvertError};
use serde_json::json;

fn parse_record(value: serde_json::Value) -> ActivityRecord {
    serde_json::from_value(value).expect("record should deserialize")
}

fn morning_run() -> serde_json::Value {
    json!({
        "type": "run",
        "summaries": [
            {"metric": "distance", "source": "com.nike.running.ios", "value": 2.5}
        ],
        "tags": {"com.nike.name": "Morning Run"},
        "start_epoch_ms": 1000,
        "metrics": [
            {"type": "latitude", "values": [
                {"start_epoch_ms": 0, "value": 10.0},
                {"start_epoch_ms": 1000, "value": 10.1}
            ]},
            {"type": "longitude", "values": [
                {"start_epoch_ms": 0, "value": 20.0},
                {"start_epoch_ms": 1000, "value": 20.1}
            ]},
            {"type": "elevation", "values": [
                {"start_epoch_ms": 0, "value": 5.0},
                {"start_epoch_ms": 1000, "value": 5.5}
            ]}
        ]
    })
}

#[test]
fn test_end_to_end_morning_run() {
    let record = parse_record(morning_run());

    let (skip, _) = should_skip_conversion(&record, "morning.json");
    assert!(!skip);

    let gpx = assemble_gpx(&record).expect("conversion should succeed");

    assert!(gpx.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(gpx.contains("<name>Morning Run</name>"));
    assert!(gpx.contains("<type>9</type>"));
    assert_eq!(gpx.matches("<trkpt").count(), 2);
    assert!(gpx.contains("lat=\"10.0\" lon=\"20.0\""));
    assert!(gpx.contains("lat=\"10.1\" lon=\"20.1\""));
    assert!(gpx.contains("<ele>5.0</ele>"));
    assert!(gpx.contains("<ele>5.5</ele>"));
}

#[test]
fn test_document_structure_counts() {
    let record = parse_record(morning_run());
    let gpx = assemble_gpx(&record).unwrap();

    assert_eq!(gpx.matches("<metadata>").count(), 1);
    assert_eq!(gpx.matches("</metadata>").count(), 1);
    assert_eq!(gpx.matches("<trk>").count(), 1);
    assert_eq!(gpx.matches("<name>").count(), 1);
    assert_eq!(gpx.matches("<trkseg>").count(), 1);
    assert_eq!(gpx.matches("<trkpt").count(), gpx.matches("</trkpt>").count());
    // One time element in metadata plus one per point
    assert_eq!(gpx.matches("<time>").count(), 3);
}

#[test]
fn test_points_follow_input_order() {
    let record = parse_record(morning_run());
    let gpx = assemble_gpx(&record).unwrap();

    let first = gpx.find("lat=\"10.0\"").unwrap();
    let second = gpx.find("lat=\"10.1\"").unwrap();
    assert!(first < second);
}

#[test]
fn test_non_run_is_filtered() {
    let mut value = morning_run();
    value["type"] = json!("training");
    let record = parse_record(value);

    let (skip, reason) = should_skip_conversion(&record, "yoga.json");
    assert!(skip);
    assert_eq!(reason, "yoga.json (not a run)");
}

#[test]
fn test_manual_entry_is_filtered_even_for_runs() {
    let mut value = morning_run();
    value["summaries"] = json!([
        {"metric": "distance", "source": "com.nike.running.ios.manualentry", "value": 5.0}
    ]);
    let record = parse_record(value);

    let (skip, reason) = should_skip_conversion(&record, "manual.json");
    assert!(skip);
    assert_eq!(reason, "manual.json (manual entry)");
}

#[test]
fn test_missing_metric_series_fails() {
    let mut value = morning_run();
    value["metrics"]
        .as_array_mut()
        .unwrap()
        .retain(|m| m["type"] != "elevation");
    let record = parse_record(value);

    let err = assemble_gpx(&record).unwrap_err();
    assert!(matches!(err, ConvertError::MissingMetric("elevation")));
}

#[test]
fn test_coarser_elevation_sampling_resolves_forward() {
    // Elevation sampled at a third of the position rate; each point picks
    // the first elevation sample at or after its own timestamp
    let value = json!({
        "type": "run",
        "tags": {"com.nike.name": "Intervals"},
        "start_epoch_ms": 0,
        "metrics": [
            {"type": "latitude", "values": [
                {"start_epoch_ms": 0, "value": 1.5},
                {"start_epoch_ms": 1000, "value": 2.5},
                {"start_epoch_ms": 2000, "value": 3.5}
            ]},
            {"type": "longitude", "values": [
                {"start_epoch_ms": 0, "value": 4.5},
                {"start_epoch_ms": 1000, "value": 5.5},
                {"start_epoch_ms": 2000, "value": 6.5}
            ]},
            {"type": "elevation", "values": [
                {"start_epoch_ms": 0, "value": 100.5},
                {"start_epoch_ms": 3000, "value": 200.5}
            ]}
        ]
    });
    let gpx = assemble_gpx(&parse_record(value)).unwrap();

    assert_eq!(gpx.matches("<ele>100.5</ele>").count(), 1);
    assert_eq!(gpx.matches("<ele>200.5</ele>").count(), 2);
}

#[test]
fn test_mismatched_position_series_fails() {
    let mut value = morning_run();
    value["metrics"][1]["values"].as_array_mut().unwrap().pop();
    let record = parse_record(value);

    let err = assemble_gpx(&record).unwrap_err();
    assert!(matches!(err, ConvertError::Alignment(_)));
}

#[test]
fn test_name_with_xml_special_characters_is_escaped() {
    let mut value = morning_run();
    value["tags"]["com.nike.name"] = json!("Track & Field <5k>");
    let gpx = assemble_gpx(&parse_record(value)).unwrap();

    assert!(gpx.contains("<name>Track &amp; Field &lt;5k&gt;</name>"));
}

#[test]
fn test_record_without_name_tag_is_malformed() {
    let mut value = morning_run();
    value["tags"] = json!({});
    let record = parse_record(value);

    let err = assemble_gpx(&record).unwrap_err();
    assert!(matches!(err, ConvertError::Malformed(_)));
}

#[test]
fn test_record_missing_start_time_does_not_parse() {
    let mut value = morning_run();
    value.as_object_mut().unwrap().remove("start_epoch_ms");

    let result: Result<ActivityRecord, _> = serde_json::from_value(value);
    assert!(result.is_err());
}
