//! Per-file conversion entry point and output handling
//!
//! The library core works on parsed records; this module owns the thin
//! file layer around it: reading the JSON input, choosing the output path
//! and writing the finished document.

use std::path::{Path, PathBuf};

use crate::assembler::assemble_gpx;
use crate::error::Result;
use crate::filters::should_skip_conversion;
use crate::types::ActivityRecord;

/// Options controlling where converted files are written
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Directory for output files (default: same as input file)
    pub output_dir: Option<String>,
}

/// Outcome of converting one input file
#[derive(Debug)]
pub enum ConversionOutcome {
    /// Document written to the contained path
    Converted(PathBuf),
    /// Record was ineligible; contains the diagnostic reason
    Skipped(String),
}

/// Compute the output path for a converted activity
///
/// Uses the input file stem with a `.gpx` extension, placed in
/// `output_dir` when given, otherwise next to the input file.
pub fn compute_gpx_path(input_path: &Path, output_dir: Option<&str>) -> PathBuf {
    let base_name = input_path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("activity");

    let dir = match output_dir {
        Some(dir) => PathBuf::from(dir),
        None => input_path.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    dir.join(format!("{base_name}.gpx"))
}

/// Write a finished GPX document, creating the output directory if needed
pub fn write_gpx_file(gpx: &str, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, gpx)?;
    Ok(())
}

/// Convert a single NRC JSON export file to a GPX file
///
/// Reads and parses the input, applies the eligibility filter, assembles
/// the document and writes it. Ineligible records are a normal outcome
/// ([`ConversionOutcome::Skipped`]), not an error; nothing is written for
/// them.
pub fn convert_activity_file(
    input_path: &Path,
    options: &ConvertOptions,
) -> Result<ConversionOutcome> {
    let raw = std::fs::read_to_string(input_path)?;
    let record: ActivityRecord = serde_json::from_str(&raw)?;

    let source_id = input_path.display().to_string();
    let (skip, reason) = should_skip_conversion(&record, &source_id);
    if skip {
        return Ok(ConversionOutcome::Skipped(reason));
    }

    let gpx = assemble_gpx(&record)?;
    let output_path = compute_gpx_path(input_path, options.output_dir.as_deref());
    write_gpx_file(&gpx, &output_path)?;
    Ok(ConversionOutcome::Converted(output_path))
}
