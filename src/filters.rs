//! Eligibility filtering for activity records
//!
//! NRC exports mix GPS-tracked runs with treadmill sessions, NTC workouts
//! and manually entered activities. Only outdoor runs with recorded GPS
//! data can produce a meaningful track, so everything else is skipped up
//! front before any extraction is attempted.

use crate::types::{ActivityRecord, ACTIVITY_TYPE_RUN, MANUAL_ENTRY_SOURCE, SUMMARY_DISTANCE};

/// Determines if an activity should be skipped for conversion
///
/// Rules are evaluated in order, first match wins:
/// 1. Skip anything that is not tagged as a run.
/// 2. Skip runs whose distance summary was entered manually (no reliable
///    per-sample GPS data behind it).
///
/// # Arguments
/// * `record` - The parsed activity to evaluate
/// * `source_id` - Identifier for diagnostics, typically the input filename
///
/// # Returns
/// Tuple of (should_skip, reason_description)
pub fn should_skip_conversion(record: &ActivityRecord, source_id: &str) -> (bool, String) {
    if record.activity_type != ACTIVITY_TYPE_RUN {
        return (true, format!("{source_id} (not a run)"));
    }

    for summary in &record.summaries {
        if summary.metric == SUMMARY_DISTANCE && summary.source == MANUAL_ENTRY_SOURCE {
            return (true, format!("{source_id} (manual entry)"));
        }
    }

    (false, String::new())
}
