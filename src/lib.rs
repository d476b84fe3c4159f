//! NRC to GPX Converter Library
//!
//! A Rust library for converting Nike Run Club (NRC) JSON activity exports
//! into GPX 1.1 tracks that other fitness platforms can import.
//!
//! # Features
//!
//! - **`cli`** (default): Build the command-line interface binary
//!
//! # Quick Start
//!
//! Convert a single export file:
//! ```rust,no_run
//! use nrc2gpx::{convert_activity_file, ConversionOutcome, ConvertOptions};
//! use std::path::Path;
//!
//! let options = ConvertOptions::default();
//! match convert_activity_file(Path::new("activity.json"), &options).unwrap() {
//!     ConversionOutcome::Converted(path) => println!("wrote {}", path.display()),
//!     ConversionOutcome::Skipped(reason) => println!("skipped: {reason}"),
//! }
//! ```
//!
//! Work with already-parsed records:
//! ```rust
//! use nrc2gpx::{assemble_gpx, should_skip_conversion, ActivityRecord};
//!
//! let record: ActivityRecord = serde_json::from_str(r#"{
//!     "type": "run",
//!     "tags": {"com.nike.name": "Morning Run"},
//!     "start_epoch_ms": 1000,
//!     "metrics": [
//!         {"type": "latitude", "values": [{"start_epoch_ms": 0, "value": 10.0}]},
//!         {"type": "longitude", "values": [{"start_epoch_ms": 0, "value": 20.0}]},
//!         {"type": "elevation", "values": [{"start_epoch_ms": 0, "value": 5.0}]}
//!     ]
//! }"#).unwrap();
//!
//! let (skip, _reason) = should_skip_conversion(&record, "activity.json");
//! assert!(!skip);
//! let gpx = assemble_gpx(&record).unwrap();
//! assert!(gpx.contains("<name>Morning Run</name>"));
//! ```
//!
//! # Public API
//!
//! ## Conversion Functions
//! - [`convert_activity_file`] - Convert one export file end to end
//! - [`assemble_gpx`] - Build a GPX document from a parsed record
//! - [`align_track_points`] - Merge position and elevation series
//! - [`write_gpx`] - Serialize resolved track points
//!
//! ## Filtering Functions
//! - [`should_skip_conversion`] - Eligibility check with diagnostic reason
//!
//! ## Data Types
//! - [`ActivityRecord`] - Parsed NRC export document
//! - [`TrackPoint`] - Resolved position sample
//! - [`ConvertOptions`] / [`ConversionOutcome`] - File conversion control
//! - [`ConvertError`] - Failure taxonomy for conversions

// Module declarations
pub mod align;
pub mod assembler;
pub mod error;
pub mod export;
pub mod filters;
pub mod gpx;
pub mod types;

// Re-export everything from modules for convenience
pub use align::*;
pub use assembler::*;
pub use error::*;
pub use export::*;
pub use filters::*;
pub use gpx::*;
pub use types::*;
