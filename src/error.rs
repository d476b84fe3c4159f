use std::fmt;

/// Failure categories for activity conversion
#[derive(Debug)]
pub enum ConvertError {
    /// I/O errors reading input or writing output
    Io(std::io::Error),
    /// Input is not valid JSON or does not match the activity record shape
    Json(serde_json::Error),
    /// One of the required metric series is absent from the record
    MissingMetric(&'static str),
    /// Latitude/longitude/elevation series disagree on length or timestamps
    Alignment(String),
    /// Structurally broken record (missing tag, unusable timestamp)
    Malformed(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Io(err) => write!(f, "I/O error: {err}"),
            ConvertError::Json(err) => write!(f, "JSON error: {err}"),
            ConvertError::MissingMetric(metric) => write!(f, "Missing metric series: {metric}"),
            ConvertError::Alignment(msg) => write!(f, "Alignment error: {msg}"),
            ConvertError::Malformed(msg) => write!(f, "Malformed record: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Io(err) => Some(err),
            ConvertError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
