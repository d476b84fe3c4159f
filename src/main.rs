//! CLI batch driver for the NRC to GPX converter
//!
//! Expands the given file arguments, converts each JSON export in turn and
//! reports the failures at the end of the batch.

use anyhow::Result;
use clap::{Arg, Command};
use glob::glob;
use nrc2gpx::{convert_activity_file, ConversionOutcome, ConvertOptions};
use std::path::{Path, PathBuf};

fn build_command() -> Command {
    Command::new("nrc2gpx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Nike Run Club JSON activity exports to GPX 1.1 track files.")
        .arg(
            Arg::new("files")
                .help("NRC JSON export files to convert (.json extension, supports globbing)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed conversion information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for GPX output files (default: same as input file)")
                .value_name("DIR"),
        )
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    let output_dir = matches.get_one::<String>("output-dir").cloned();
    let file_patterns: Vec<&String> = matches.get_many::<String>("files").unwrap().collect();

    let options = ConvertOptions { output_dir };

    if debug {
        println!("Input patterns: {file_patterns:?}");
    }

    // Collect all valid file paths
    let mut valid_paths = Vec::new();
    for pattern in &file_patterns {
        let paths: Vec<PathBuf> = if pattern.contains('*') || pattern.contains('?') {
            match glob(pattern) {
                Ok(glob_iter) => match glob_iter.collect::<Result<Vec<_>, _>>() {
                    Ok(paths) => {
                        if debug {
                            println!("Glob pattern '{pattern}' matched {} files", paths.len());
                        }
                        paths
                    }
                    Err(e) => {
                        eprintln!("Error expanding glob pattern '{pattern}': {e}");
                        continue;
                    }
                },
                Err(e) => {
                    eprintln!("Invalid glob pattern '{pattern}': {e}");
                    continue;
                }
            }
        } else {
            vec![Path::new(pattern).to_path_buf()]
        };

        for path in paths {
            if !path.exists() {
                eprintln!("Warning: File does not exist: {path:?}");
                continue;
            }

            let valid_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false);

            if !valid_extension {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("none");
                eprintln!("Warning: Skipping file with unsupported extension '{ext}': {path:?}");
                continue;
            }

            valid_paths.push(path);
        }
    }

    if valid_paths.is_empty() {
        eprintln!("Error: No valid files found to process.");
        eprintln!("Supported extension: .json (case-insensitive)");
        eprintln!("Input patterns were: {file_patterns:?}");
        std::process::exit(1);
    }

    if debug {
        println!("Found {} valid files to process", valid_paths.len());
    }

    let mut converted_files = 0;
    let mut failed_files = Vec::new();

    for path in &valid_paths {
        match convert_activity_file(path, &options) {
            Ok(ConversionOutcome::Converted(output_path)) => {
                if debug {
                    println!("Converted {path:?} -> {}", output_path.display());
                }
                converted_files += 1;
            }
            Ok(ConversionOutcome::Skipped(reason)) => {
                println!("{reason}");
            }
            Err(e) => {
                if debug {
                    eprintln!("Error converting {path:?}: {e}");
                }
                failed_files.push(path.clone());
            }
        }
    }

    for failed in &failed_files {
        println!("FAILED: {}", failed.display());
    }

    if converted_files == 0 && !failed_files.is_empty() {
        eprintln!(
            "Error: No files were successfully converted out of {} files found.",
            valid_paths.len()
        );
        eprintln!("This could be due to:");
        eprintln!("  - Files not being valid NRC JSON exports");
        eprintln!("  - Exports missing GPS metric data");
        eprintln!("Use --debug flag for more detailed error information.");
        std::process::exit(1);
    }

    Ok(())
}
