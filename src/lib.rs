//! # Optical-Markers
//!
//! Turn a Media Composer sequence report into a DI optical marker list.
//!
//! The Sequence Report tool (with only *Effects Location List* selected and CSV
//! as the format) writes one row per effect with its start and end timecodes.
//! This library anchors each effect at the midpoint of its edit, rewrites the
//! effect names, drops effects that are not opticals, and folds effects that
//! land on the same frame into a single marker. The result can be imported back
//! into Avid as a marker list.
//!
//! ## Quick Start
//!
//! ```rust
//! use optical_markers::{report::EditRow, ReportTransformer};
//!
//! let rows = vec![
//!     EditRow::new("01:00:00:00", "01:00:00:12", "V1", "Timewarp"),
//!     EditRow::new("01:00:00:06", "01:00:00:06", "V1", "3DWarp"),
//! ];
//!
//! let result = ReportTransformer::default().transform_rows(&rows);
//! assert_eq!(
//!     result.text(),
//!     "OPTICAL\t01:00:00:06\tV1\tblack\tDI - Respeed, Repo/Resize\t1"
//! );
//! ```
//!
//! ## Architecture
//!
//! - [`timecode`] - Timecode/frame conversion and midpoints
//! - [`effects`] - Effect name rewriting and exclusions
//! - [`markers`] - Marker model, aggregation and warning sinks
//! - [`report`] - Sequence report CSV loading
//! - [`transform`] - The report-to-marker-list pipeline
//! - [`config`] - Configuration management

pub mod config;
pub mod effects;
pub mod error;
pub mod markers;
pub mod report;
pub mod timecode;
pub mod transform;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{MarkerError, Result},
    markers::{MarkerList, RowWarning, WarningSink},
    transform::{markers_from_rows, ReportTransformer, Transformation},
};
