use std::fmt;

use serde::{Deserialize, Serialize};

/// Column holding the first frame of the effect
pub const START_TIMECODE: &str = "Start Timecode";

/// Column holding the end of the effect
pub const END_TIMECODE: &str = "End Timecode";

/// Column holding the track name (V1, V2, ...)
pub const TRACK: &str = "Track";

/// Column holding the Media Composer effect name
pub const EFFECT_NAME: &str = "Effect Name";

/// Every column a sequence report must have, in report order
pub const REQUIRED_COLUMNS: [&str; 4] = [START_TIMECODE, END_TIMECODE, TRACK, EFFECT_NAME];

/// One edit event from a sequence report
///
/// A field is `None` when the row has no cell for that column at all, which
/// happens with ragged CSV exports. Empty cells are kept as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRow {
    pub start_timecode: Option<String>,
    pub end_timecode: Option<String>,
    pub track: Option<String>,
    pub effect_name: Option<String>,
}

impl EditRow {
    /// Create a row with every column present
    pub fn new<S: Into<String>>(start_timecode: S, end_timecode: S, track: S, effect_name: S) -> Self {
        Self {
            start_timecode: Some(start_timecode.into()),
            end_timecode: Some(end_timecode.into()),
            track: Some(track.into()),
            effect_name: Some(effect_name.into()),
        }
    }
}

impl fmt::Display for EditRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |value: &Option<String>| match value {
            Some(v) => format!("'{}'", v),
            None => "<missing>".to_string(),
        };

        write!(
            f,
            "{}={}, {}={}, {}={}, {}={}",
            START_TIMECODE,
            show(&self.start_timecode),
            END_TIMECODE,
            show(&self.end_timecode),
            TRACK,
            show(&self.track),
            EFFECT_NAME,
            show(&self.effect_name),
        )
    }
}

/// Rows of a sequence report in the order they appear in the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceReport {
    pub rows: Vec<EditRow>,
}

impl SequenceReport {
    pub fn new(rows: Vec<EditRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Text encoding of a sequence report file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportEncoding {
    /// Follow the byte-order mark, UTF-8 when there is none
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "utf-16le")]
    Utf16Le,
    #[serde(rename = "utf-16be")]
    Utf16Be,
}

impl fmt::Display for ReportEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Utf8 => "utf-8",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_display_marks_missing_cells() {
        let row = EditRow {
            track: None,
            ..EditRow::new("01:00:00:00", "01:00:01:00", "V1", "Timewarp")
        };
        assert_eq!(
            row.to_string(),
            "Start Timecode='01:00:00:00', End Timecode='01:00:01:00', Track=<missing>, Effect Name='Timewarp'"
        );
    }

    #[test]
    fn test_report_len() {
        let report = SequenceReport::new(vec![EditRow::default(), EditRow::default()]);
        assert_eq!(report.len(), 2);
        assert!(!report.is_empty());
        assert!(SequenceReport::default().is_empty());
    }
}
