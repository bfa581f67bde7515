use thiserror::Error;

/// Main error type for the optical-markers library
///
/// These are batch-level failures: when one of them is returned, no marker list
/// was produced. Problems with individual report rows are [`RowError`]s and are
/// reported as warnings instead.
#[derive(Error, Debug)]
pub enum MarkerError {
    #[error("Sequence report error: {0}")]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Errors that make a whole sequence report unusable
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read sequence report: {path}")]
    LoadFailed { path: String },

    #[error("Sequence report is missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("Could not decode sequence report as {encoding}: {reason}")]
    DecodingFailed { encoding: String, reason: String },

    #[error("Malformed CSV: {reason}")]
    MalformedCsv { reason: String },
}

/// Timecode parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimecodeError {
    #[error("Timecode '{timecode}' has {found} fields, expected HH:MM:SS:FF")]
    WrongFieldCount { timecode: String, found: usize },

    #[error("Timecode '{timecode}' has a non-numeric field '{field}'")]
    InvalidField { timecode: String, field: String },

    #[error("Timecode '{timecode}' is too large to count in frames")]
    Overflow { timecode: String },

    #[error("Timecode '{timecode}' comes before 00:00:00:00 ({frames} frames)")]
    Negative { timecode: String, frames: i64 },
}

/// Errors confined to a single report row; the row is skipped and processing continues
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error(transparent)]
    Timecode(#[from] TimecodeError),

    #[error("Missing value for column '{column}'")]
    MissingField { column: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using MarkerError
pub type Result<T> = std::result::Result<T, MarkerError>;

impl MarkerError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Report(ReportError::LoadFailed { path }) => {
                format!("Could not read '{}'. Please check the file exists and is readable.", path)
            }
            Self::Report(ReportError::MissingColumns { columns }) => {
                format!(
                    "The report has no {} column(s). Export it from the Sequence Report tool with \
                     only 'Effects Location List' selected and CSV as the format.",
                    columns.join(", ")
                )
            }
            Self::Report(ReportError::DecodingFailed { .. }) => {
                "The report is not valid text. Sequence reports are normally saved as UTF-16 CSV."
                    .to_string()
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
