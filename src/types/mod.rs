//! Type definitions for NRC activity data and derived track points

pub mod activity;
pub mod track;

pub use activity::*;
pub use track::*;
