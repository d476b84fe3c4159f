/// A fully resolved position on the track, ready for GPX serialization
///
/// Produced by the alignment pass: latitude and longitude come from the
/// paired sample at this timestamp, elevation from the nearest elevation
/// sample at or after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub timestamp_ms: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}
