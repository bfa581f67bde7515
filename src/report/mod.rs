//! # Sequence Report Module
//!
//! Loads the CSV written by Media Composer's Sequence Report tool (with only
//! *Effects Location List* selected) into ordered [`EditRow`]s.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use optical_markers::config::ReportConfig;
//! use optical_markers::report::ReportLoader;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let report = ReportLoader::load("EFFECT_LOCATION.csv", &ReportConfig::default()).await?;
//! println!("{} edit events", report.len());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod types;

pub use loader::ReportLoader;
pub use types::{
    EditRow, ReportEncoding, SequenceReport,
    EFFECT_NAME, END_TIMECODE, REQUIRED_COLUMNS, START_TIMECODE, TRACK,
};
