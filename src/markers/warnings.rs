use std::fmt;

use tracing::warn;

use crate::{error::RowError, report::EditRow};

/// A report row that was skipped, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowWarning {
    /// 1-based position among the data rows (the header is not counted)
    pub row_number: usize,
    pub row: EditRow,
    pub error: RowError,
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Skipping row {} due to error: {} ({})",
            self.row_number, self.error, self.row
        )
    }
}

/// Receives one warning per skipped row
pub trait WarningSink {
    fn warn(&mut self, warning: RowWarning);
}

impl WarningSink for Vec<RowWarning> {
    fn warn(&mut self, warning: RowWarning) {
        self.push(warning);
    }
}

/// Sink that drops every warning
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreWarnings;

impl WarningSink for IgnoreWarnings {
    fn warn(&mut self, _warning: RowWarning) {}
}

/// Sink that logs each warning through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWarnings {
    pub count: usize,
}

impl WarningSink for LogWarnings {
    fn warn(&mut self, warning: RowWarning) {
        self.count += 1;
        warn!("{}", warning);
    }
}
