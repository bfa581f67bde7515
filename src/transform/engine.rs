use std::path::Path;
use tracing::{info, debug};

use crate::{
    config::Config,
    effects::EffectFilter,
    error::Result,
    markers::{MarkerAggregator, MarkerList, RowOutcome, RowWarning, WarningSink},
    report::{EditRow, ReportLoader},
    timecode::TimecodeCodec,
};

/// Counts of what happened to each report row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformSummary {
    pub rows: usize,
    pub emitted: usize,
    pub merged: usize,
    pub excluded: usize,
    pub skipped: usize,
}

/// Result of a transformation with every warning collected
#[derive(Debug, Clone)]
pub struct Transformation {
    pub markers: MarkerList,
    pub warnings: Vec<RowWarning>,
    pub summary: TransformSummary,
}

impl Transformation {
    /// The marker list as importable text
    pub fn text(&self) -> String {
        self.markers.to_string()
    }
}

/// Turns sequence report rows into a marker list
///
/// The pipeline for every row, in report order:
/// 1. Parse start and end timecodes into frame counts
/// 2. Take the median frame and format it back into a timecode
/// 3. Rewrite the effect name and drop excluded effects
/// 4. Merge into the previous marker when the timecodes match, otherwise emit
///
/// A row that fails is skipped and reported to the warning sink; the run as a
/// whole never fails because of one bad row.
pub struct ReportTransformer {
    config: Config,
    codec: TimecodeCodec,
    filter: EffectFilter,
}

impl Default for ReportTransformer {
    fn default() -> Self {
        let config = Config::default();
        Self {
            codec: TimecodeCodec::default(),
            filter: EffectFilter::from_config(&config.effects),
            config,
        }
    }
}

impl ReportTransformer {
    /// Create a new transformer with the given configuration
    ///
    /// The configuration is validated first, so a zero frame rate or a marker
    /// field containing a tab is an error here rather than a wrong marker list.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            codec: TimecodeCodec::new(config.timecode.frame_rate)?,
            filter: EffectFilter::from_config(&config.effects),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Transform rows, collecting warnings instead of reporting them
    pub fn transform_rows(&self, rows: &[EditRow]) -> Transformation {
        let mut warnings = Vec::new();
        let (markers, summary) = self.transform_with(rows, &mut warnings);

        Transformation {
            markers,
            warnings,
            summary,
        }
    }

    /// Transform rows, sending one warning per skipped row to `sink`
    pub fn transform_with<W: WarningSink + ?Sized>(
        &self,
        rows: &[EditRow],
        sink: &mut W,
    ) -> (MarkerList, TransformSummary) {
        let mut aggregator = MarkerAggregator::new(self.codec, self.filter.clone());
        let mut summary = TransformSummary {
            rows: rows.len(),
            ..Default::default()
        };

        for (index, row) in rows.iter().enumerate() {
            match aggregator.push(row) {
                Ok(RowOutcome::Emitted) => summary.emitted += 1,
                Ok(RowOutcome::Merged) => summary.merged += 1,
                Ok(RowOutcome::Excluded) => summary.excluded += 1,
                Err(error) => {
                    summary.skipped += 1;
                    sink.warn(RowWarning {
                        row_number: index + 1,
                        row: row.clone(),
                        error,
                    });
                }
            }
        }

        debug!(
            "Processed {} rows: {} emitted, {} merged, {} excluded, {} skipped",
            summary.rows, summary.emitted, summary.merged, summary.excluded, summary.skipped
        );

        let markers = MarkerList::new(aggregator.finish(), self.config.marker.clone());
        (markers, summary)
    }

    /// Load a sequence report from disk and transform it
    ///
    /// Only batch-level problems (unreadable file, missing columns) are errors.
    pub async fn transform_file<P, W>(&self, path: P, sink: &mut W) -> Result<(MarkerList, TransformSummary)>
    where
        P: AsRef<Path>,
        W: WarningSink + ?Sized,
    {
        let path = path.as_ref();
        info!("📄 Reading sequence report {:?}", path);

        let report = ReportLoader::load(path, &self.config.report).await?;
        Ok(self.transform_with(&report.rows, sink))
    }
}
