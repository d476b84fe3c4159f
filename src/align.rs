//! Time alignment of independently sampled metric series
//!
//! The NRC export stores latitude, longitude and elevation as three
//! separate time series. Latitude and longitude are sampled in lockstep
//! (equal length, identical per-index timestamps), but elevation runs on
//! its own, generally coarser, clock. This module merges the three into
//! one resolved track point per position sample.

use crate::error::{ConvertError, Result};
use crate::types::{Sample, TrackPoint};

/// Merge latitude, longitude and elevation series into resolved track points
///
/// Latitude and longitude must be pairwise time-aligned. For each position
/// sample, the elevation is taken from the first elevation sample whose
/// timestamp is at or after the position timestamp. Both inputs must be
/// time-ordered ascending; a single cursor walks the elevation series
/// forward and never backs up, which is an O(n) merge.
///
/// # Errors
/// Returns [`ConvertError::Alignment`] when the latitude and longitude
/// series differ in length, when their timestamps diverge at some index,
/// or when the elevation series runs out before every point is resolved.
pub fn align_track_points(
    latitudes: &[Sample],
    longitudes: &[Sample],
    elevations: &[Sample],
) -> Result<Vec<TrackPoint>> {
    if latitudes.len() != longitudes.len() {
        return Err(ConvertError::Alignment(format!(
            "latitude has {} samples but longitude has {}",
            latitudes.len(),
            longitudes.len()
        )));
    }

    let mut points = Vec::with_capacity(latitudes.len());
    let mut cursor = 0usize;

    for (lat, lon) in latitudes.iter().zip(longitudes) {
        if lat.start_epoch_ms != lon.start_epoch_ms {
            return Err(ConvertError::Alignment(format!(
                "latitude/longitude timestamps diverge: {} ms vs {} ms",
                lat.start_epoch_ms, lon.start_epoch_ms
            )));
        }
        let point_time = lat.start_epoch_ms;

        while cursor < elevations.len() && elevations[cursor].start_epoch_ms < point_time {
            cursor += 1;
        }
        let Some(elevation) = elevations.get(cursor) else {
            return Err(ConvertError::Alignment(format!(
                "elevation series exhausted before point at {point_time} ms"
            )));
        };

        points.push(TrackPoint {
            timestamp_ms: point_time,
            latitude: lat.value,
            longitude: lon.value,
            elevation: elevation.value,
        });
    }

    Ok(points)
}
