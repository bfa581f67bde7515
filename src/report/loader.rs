use std::path::Path;

use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::{ConfigError, ReportError, Result};
use crate::report::types::{
    EditRow, ReportEncoding, SequenceReport, EFFECT_NAME, END_TIMECODE, REQUIRED_COLUMNS,
    START_TIMECODE, TRACK,
};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Sequence report loader for CSV exports
///
/// Media Composer writes sequence reports as UTF-16 with a byte-order mark, so
/// the default encoding follows the BOM. Without one, a header whose every other
/// byte is NUL is read as UTF-16 of that byte order; anything else as UTF-8.
pub struct ReportLoader;

impl ReportLoader {
    /// Read and parse a sequence report file
    pub async fn load<P: AsRef<Path>>(path: P, config: &ReportConfig) -> Result<SequenceReport> {
        let path = path.as_ref();

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|_| ReportError::LoadFailed {
                path: path.display().to_string()
            })?;

        debug!("Read {} bytes from {:?}", bytes.len(), path);
        let report = Self::parse_bytes(&bytes, config)?;
        info!("Loaded {} rows from {:?}", report.len(), path);

        Ok(report)
    }

    /// Decode and parse raw report bytes
    pub fn parse_bytes(bytes: &[u8], config: &ReportConfig) -> Result<SequenceReport> {
        let text = Self::decode(bytes, config.encoding)?;
        Self::parse_str(&text, config)
    }

    /// Decode report bytes to text, stripping any byte-order mark
    pub fn decode(bytes: &[u8], encoding: ReportEncoding) -> Result<String> {
        match encoding {
            ReportEncoding::Auto => {
                if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
                    Self::decode_utf8(rest)
                } else if let Some(rest) = bytes.strip_prefix(UTF16LE_BOM) {
                    Self::decode_utf16(rest, ReportEncoding::Utf16Le)
                } else if let Some(rest) = bytes.strip_prefix(UTF16BE_BOM) {
                    Self::decode_utf16(rest, ReportEncoding::Utf16Be)
                } else if let Some(encoding) = Self::sniff_utf16(bytes) {
                    debug!("No byte-order mark, header looks like {}", encoding);
                    Self::decode_utf16(bytes, encoding)
                } else {
                    Self::decode_utf8(bytes)
                }
            }
            ReportEncoding::Utf8 => {
                Self::decode_utf8(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes))
            }
            ReportEncoding::Utf16Le => {
                Self::decode_utf16(bytes.strip_prefix(UTF16LE_BOM).unwrap_or(bytes), encoding)
            }
            ReportEncoding::Utf16Be => {
                Self::decode_utf16(bytes.strip_prefix(UTF16BE_BOM).unwrap_or(bytes), encoding)
            }
        }
    }

    /// Parse CSV text into edit rows
    ///
    /// The header row must name all four required columns. Rows shorter than
    /// the header are kept; their absent cells become `None`.
    pub fn parse_str(text: &str, config: &ReportConfig) -> Result<SequenceReport> {
        let delimiter = u8::try_from(config.delimiter).map_err(|_| ConfigError::InvalidValue {
            key: "report.delimiter".to_string(),
            value: config.delimiter.escape_debug().to_string()
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| ReportError::MalformedCsv { reason: e.to_string() })?
            .clone();

        let column = |name: &str| headers.iter().position(|header| header == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| column(*name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ReportError::MissingColumns { columns: missing }.into());
        }

        // All four were found above
        let start = column(START_TIMECODE).unwrap_or_default();
        let end = column(END_TIMECODE).unwrap_or_default();
        let track = column(TRACK).unwrap_or_default();
        let effect = column(EFFECT_NAME).unwrap_or_default();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| ReportError::MalformedCsv { reason: e.to_string() })?;
            let cell = |index: usize| record.get(index).map(str::to_string);

            rows.push(EditRow {
                start_timecode: cell(start),
                end_timecode: cell(end),
                track: cell(track),
                effect_name: cell(effect),
            });
        }

        debug!("Parsed {} report rows", rows.len());
        Ok(SequenceReport::new(rows))
    }

    /// Guess UTF-16 byte order from NUL bytes in the first characters
    fn sniff_utf16(bytes: &[u8]) -> Option<ReportEncoding> {
        let head = &bytes[..bytes.len().min(64) & !1];
        if head.is_empty() {
            return None;
        }

        let mut pairs = head.chunks_exact(2);
        if pairs.clone().all(|pair| pair[0] != 0 && pair[1] == 0) {
            Some(ReportEncoding::Utf16Le)
        } else if pairs.all(|pair| pair[0] == 0 && pair[1] != 0) {
            Some(ReportEncoding::Utf16Be)
        } else {
            None
        }
    }

    fn decode_utf8(bytes: &[u8]) -> Result<String> {
        let text = String::from_utf8(bytes.to_vec()).map_err(|e| {
            ReportError::DecodingFailed {
                encoding: ReportEncoding::Utf8.to_string(),
                reason: e.to_string()
            }
        })?;

        // NULs mean the bytes were really some other encoding
        if let Some(offset) = text.find('\0') {
            return Err(ReportError::DecodingFailed {
                encoding: ReportEncoding::Utf8.to_string(),
                reason: format!("NUL byte at offset {}", offset)
            }.into());
        }

        Ok(text)
    }

    fn decode_utf16(bytes: &[u8], encoding: ReportEncoding) -> Result<String> {
        if bytes.len() % 2 != 0 {
            return Err(ReportError::DecodingFailed {
                encoding: encoding.to_string(),
                reason: format!("odd number of bytes ({})", bytes.len())
            }.into());
        }

        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| match encoding {
                ReportEncoding::Utf16Be => u16::from_be_bytes([pair[0], pair[1]]),
                _ => u16::from_le_bytes([pair[0], pair[1]]),
            })
            .collect();

        String::from_utf16(&units).map_err(|e| {
            ReportError::DecodingFailed {
                encoding: encoding.to_string(),
                reason: e.to_string()
            }.into()
        })
    }
}
