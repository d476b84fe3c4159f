//! Assembly of an eligible activity record into a GPX document
//!
//! One pass over the record: pull the display name and start time, capture
//! the three metric series of interest, align them into track points, then
//! serialize. Any structural problem aborts the whole conversion; no
//! partial document is ever produced.

use crate::align::align_track_points;
use crate::error::{ConvertError, Result};
use crate::gpx::write_gpx;
use crate::types::{
    ActivityRecord, Sample, METRIC_ELEVATION, METRIC_LATITUDE, METRIC_LONGITUDE, NAME_TAG,
};

/// Convert an eligible activity record into a GPX 1.1 document string
///
/// # Errors
/// * [`ConvertError::Malformed`] when the name tag is absent
/// * [`ConvertError::MissingMetric`] when any of the latitude, longitude
///   or elevation series is absent
/// * [`ConvertError::Alignment`] when the series cannot be merged
pub fn assemble_gpx(record: &ActivityRecord) -> Result<String> {
    let name = record
        .display_name()
        .ok_or_else(|| ConvertError::Malformed(format!("missing '{NAME_TAG}' tag")))?;

    let mut latitudes: Option<&[Sample]> = None;
    let mut longitudes: Option<&[Sample]> = None;
    let mut elevations: Option<&[Sample]> = None;
    for metric in &record.metrics {
        match metric.metric_type.as_str() {
            METRIC_LATITUDE => latitudes = Some(&metric.values),
            METRIC_LONGITUDE => longitudes = Some(&metric.values),
            METRIC_ELEVATION => elevations = Some(&metric.values),
            _ => {}
        }
    }
    let latitudes = latitudes.ok_or(ConvertError::MissingMetric(METRIC_LATITUDE))?;
    let longitudes = longitudes.ok_or(ConvertError::MissingMetric(METRIC_LONGITUDE))?;
    let elevations = elevations.ok_or(ConvertError::MissingMetric(METRIC_ELEVATION))?;

    let points = align_track_points(latitudes, longitudes, elevations)?;
    write_gpx(name, record.start_epoch_ms, &points)
}
