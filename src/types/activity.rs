use std::collections::HashMap;

use serde::Deserialize;

/// Activity type tag used by the NRC export for outdoor runs
pub const ACTIVITY_TYPE_RUN: &str = "run";

/// Summary metric name carrying the total distance
pub const SUMMARY_DISTANCE: &str = "distance";

/// Source tag on summaries entered by hand in the app instead of recorded
pub const MANUAL_ENTRY_SOURCE: &str = "com.nike.running.ios.manualentry";

/// Tag key holding the user-visible activity name
pub const NAME_TAG: &str = "com.nike.name";

pub const METRIC_LATITUDE: &str = "latitude";
pub const METRIC_LONGITUDE: &str = "longitude";
pub const METRIC_ELEVATION: &str = "elevation";

/// One parsed NRC activity export document
///
/// The `summaries`, `tags` and `metrics` collections default to empty when
/// absent so that their problems surface as conversion failures (missing
/// name tag, missing metric series) rather than parse failures. A missing
/// `type` or `start_epoch_ms` is a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "type")]
    pub activity_type: String,
    #[serde(default)]
    pub summaries: Vec<Summary>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    pub start_epoch_ms: i64,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

impl ActivityRecord {
    /// User-visible activity name from the tags map, if present
    pub fn display_name(&self) -> Option<&str> {
        self.tags.get(NAME_TAG).map(String::as_str)
    }
}

/// Aggregate metric entry from the `summaries` array
#[derive(Debug, Clone, Deserialize)]
pub struct Summary {
    pub metric: String,
    pub source: String,
    #[serde(default)]
    pub value: f64,
}

/// One time series from the `metrics` array
#[derive(Debug, Clone, Deserialize)]
pub struct Metric {
    #[serde(rename = "type")]
    pub metric_type: String,
    #[serde(default)]
    pub values: Vec<Sample>,
}

/// A single timestamped reading within a metric series
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    pub start_epoch_ms: i64,
    pub value: f64,
}
