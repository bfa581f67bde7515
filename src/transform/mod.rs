//! # Report Transformer
//!
//! Drives the per-row pipeline over a whole sequence report and produces the
//! marker list text plus one warning per skipped row.

pub mod engine;

pub use engine::{ReportTransformer, TransformSummary, Transformation};

use crate::{
    config::Config,
    error::Result,
    markers::RowWarning,
    report::EditRow,
};

/// Marker list text for `rows` at `frame_rate`, with default effect and marker settings
///
/// Fails only when `frame_rate` is zero.
pub fn markers_from_rows(rows: &[EditRow], frame_rate: u32) -> Result<(String, Vec<RowWarning>)> {
    let mut config = Config::default();
    config.timecode.frame_rate = frame_rate;

    let result = ReportTransformer::new(config)?.transform_rows(rows);
    Ok((result.text(), result.warnings))
}
