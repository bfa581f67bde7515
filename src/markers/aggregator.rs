use tracing::debug;

use crate::{
    config::Config,
    effects::{EffectClass, EffectFilter},
    error::{Result, RowError},
    markers::types::Marker,
    report::{EditRow, EFFECT_NAME, END_TIMECODE, START_TIMECODE, TRACK},
    timecode::{median_frame, TimecodeCodec},
};

/// What happened to a row pushed into the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// A new marker was started
    Emitted,

    /// The effect was appended to the previous marker
    Merged,

    /// The effect is on the exclusion list
    Excluded,
}

/// Builds markers from report rows, one row at a time
///
/// The merge state is the timecode of the last emitted marker. Excluded rows
/// and rows that fail with a [`RowError`] leave it untouched.
#[derive(Debug, Clone)]
pub struct MarkerAggregator {
    codec: TimecodeCodec,
    filter: EffectFilter,
    markers: Vec<Marker>,
}

impl Default for MarkerAggregator {
    fn default() -> Self {
        Self::new(TimecodeCodec::default(), EffectFilter::default())
    }
}

impl MarkerAggregator {
    pub fn new(codec: TimecodeCodec, filter: EffectFilter) -> Self {
        Self {
            codec,
            filter,
            markers: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            TimecodeCodec::new(config.timecode.frame_rate)?,
            EffectFilter::from_config(&config.effects),
        ))
    }

    /// Process the next row of the report
    pub fn push(&mut self, row: &EditRow) -> std::result::Result<RowOutcome, RowError> {
        let start = self.codec.parse(required(&row.start_timecode, START_TIMECODE)?)?;
        let end = self.codec.parse(required(&row.end_timecode, END_TIMECODE)?)?;
        let median_tc = self.codec.format(median_frame(start, end));

        let track = required(&row.track, TRACK)?;

        // An empty cell is a missing effect name, not an empty one
        let effect_name = row
            .effect_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| missing(EFFECT_NAME))?;

        let effects = match self.filter.classify(effect_name) {
            EffectClass::Keep(effects) => effects,
            EffectClass::Excluded { .. } => return Ok(RowOutcome::Excluded),
        };

        if let Some(last) = self.markers.last_mut().filter(|m| m.timecode == median_tc) {
            debug!("Merging '{}' into marker at {}", effects, median_tc);
            last.merge(effects);
            return Ok(RowOutcome::Merged);
        }

        debug!("Marker at {} on {}: {}", median_tc, track, effects);
        self.markers.push(Marker::new(median_tc, track, effects));
        Ok(RowOutcome::Emitted)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn finish(self) -> Vec<Marker> {
        self.markers
    }
}

fn required<'a>(value: &'a Option<String>, column: &str) -> std::result::Result<&'a str, RowError> {
    value.as_deref().ok_or_else(|| missing(column))
}

fn missing(column: &str) -> RowError {
    RowError::MissingField {
        column: column.to_string(),
    }
}
