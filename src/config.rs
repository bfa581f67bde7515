use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::{
    effects::{Replacement, DEFAULT_EXCLUSIONS, DEFAULT_REPLACEMENTS},
    error::{ConfigError, Result},
    report::ReportEncoding,
    timecode::DEFAULT_FRAME_RATE,
};

/// Main configuration for optical-markers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Timecode settings
    pub timecode: TimecodeConfig,

    /// Effect name rewriting and filtering
    pub effects: EffectsConfig,

    /// Marker line fields
    pub marker: MarkerConfig,

    /// Sequence report reading
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.timecode.validate()?;
        self.effects.validate()?;
        self.marker.validate()?;
        self.report.validate()?;
        Ok(())
    }
}

/// Timecode configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimecodeConfig {
    /// Frames per second of the sequence
    pub frame_rate: u32,
}

impl Default for TimecodeConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl TimecodeConfig {
    fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timecode.frame_rate".to_string(),
                value: self.frame_rate.to_string()
            }.into());
        }

        Ok(())
    }
}

/// Effect name configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Rows whose rewritten effect name contains any of these are dropped
    pub exclusions: Vec<String>,

    /// Substring replacements, applied in order
    pub replacements: Vec<Replacement>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            replacements: DEFAULT_REPLACEMENTS
                .iter()
                .map(|(from, to)| Replacement::new(*from, *to))
                .collect(),
        }
    }
}

impl EffectsConfig {
    fn validate(&self) -> Result<()> {
        // An empty pattern would match every effect name
        if let Some(index) = self.replacements.iter().position(|r| r.from.is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: format!("effects.replacements[{}].from", index),
                value: String::new()
            }.into());
        }

        if let Some(index) = self.exclusions.iter().position(|e| e.is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: format!("effects.exclusions[{}]", index),
                value: String::new()
            }.into());
        }

        Ok(())
    }
}

/// Marker line configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// First field of every marker line
    pub kind: String,

    /// Marker color
    pub color: String,

    /// Text placed before the effect list in the comment
    pub comment_prefix: String,

    /// Last field of every marker line
    pub flag: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            kind: "OPTICAL".to_string(),
            color: "black".to_string(),
            comment_prefix: "DI - ".to_string(),
            flag: "1".to_string(),
        }
    }
}

impl MarkerConfig {
    fn validate(&self) -> Result<()> {
        let fields = [
            ("marker.kind", &self.kind),
            ("marker.color", &self.color),
            ("marker.comment_prefix", &self.comment_prefix),
            ("marker.flag", &self.flag),
        ];

        // Tabs and newlines would break the line format
        for (key, value) in fields {
            if value.contains(|c: char| matches!(c, '\t' | '\n' | '\r')) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.escape_debug().to_string()
                }.into());
            }
        }

        Ok(())
    }
}

/// Sequence report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Text encoding of the CSV file
    pub encoding: ReportEncoding,

    /// Field delimiter
    pub delimiter: char,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            encoding: ReportEncoding::Auto,
            delimiter: ',',
        }
    }
}

impl ReportConfig {
    fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() || self.delimiter == '"' || self.delimiter == '\n' {
            return Err(ConfigError::InvalidValue {
                key: "report.delimiter".to_string(),
                value: self.delimiter.escape_debug().to_string()
            }.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timecode.frame_rate, 24);
        assert_eq!(config.effects.replacements.len(), 3);
        assert_eq!(config.effects.exclusions.len(), 5);
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let mut original_config = Config::default();
        original_config.timecode.frame_rate = 25;
        original_config.report.delimiter = '\t';

        original_config.save_to_file(&file_path).unwrap();
        let loaded_config = Config::from_file(&file_path).unwrap();

        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[timecode]\nframe_rate = 30\n").unwrap();
        assert_eq!(config.timecode.frame_rate, 30);
        assert_eq!(config.marker, MarkerConfig::default());
        assert_eq!(config.effects, EffectsConfig::default());
    }

    #[test]
    fn test_effects_config_from_toml() {
        let config: Config = toml::from_str(
            r#"
            [effects]
            exclusions = ["Color Effect"]

            [[effects.replacements]]
            from = "Resize"
            to = "Repo"

            [report]
            encoding = "utf-16le"
            "#,
        )
        .unwrap();

        assert_eq!(config.effects.replacements, vec![Replacement::new("Resize", "Repo")]);
        assert_eq!(config.effects.exclusions, vec!["Color Effect".to_string()]);
        assert_eq!(config.report.encoding, ReportEncoding::Utf16Le);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = Config::from_file(dir.path().join("nope.toml"));
        assert!(matches!(
            result,
            Err(crate::error::MarkerError::Config(ConfigError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_unparsable_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bad.toml");
        std::fs::write(&file_path, "[timecode\nframe_rate = ").unwrap();
        assert!(matches!(
            Config::from_file(&file_path),
            Err(crate::error::MarkerError::Config(ConfigError::ParseFailed { .. }))
        ));
    }

    #[test]
    fn test_invalid_frame_rate() {
        let mut config = Config::default();
        config.timecode.frame_rate = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_effects() {
        let mut config = Config::default();
        config.effects.exclusions.push(String::new());
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.effects.replacements.push(Replacement::new("", "x"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_marker_fields_reject_tabs() {
        let mut config = Config::default();
        config.marker.color = "bl\tack".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_delimiter() {
        let mut config = Config::default();
        config.report.delimiter = '"';
        assert!(config.validate().is_err());

        config.report.delimiter = ';';
        assert!(config.validate().is_ok());
    }
}
