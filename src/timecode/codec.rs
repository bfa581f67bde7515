use std::num::IntErrorKind;

use crate::error::{ConfigError, Result, TimecodeError};

/// Total frames since `00:00:00:00`
pub type FrameCount = u64;

/// Frame rate used by Media Composer film projects
pub const DEFAULT_FRAME_RATE: u32 = 24;

/// Converts between `HH:MM:SS:FF` strings and absolute frame counts at a fixed rate
///
/// Parsing is deliberately permissive: fields are not range-checked against the
/// rate or against 60, so `00:00:00:30` at 24 fps is simply frame 30. Reports
/// exported from different systems disagree on these details and the marker list
/// only needs a consistent frame number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimecodeCodec {
    frame_rate: u32,
}

impl Default for TimecodeCodec {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl TimecodeCodec {
    /// Create a codec for the given frames-per-second rate
    ///
    /// Fails for a rate of zero, which has no timecode representation.
    pub fn new(frame_rate: u32) -> Result<Self> {
        if frame_rate == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timecode.frame_rate".to_string(),
                value: frame_rate.to_string()
            }.into());
        }

        Ok(Self { frame_rate })
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Parse a timecode into an absolute frame count
    ///
    /// Each of the four colon-separated fields is trimmed before being read as a
    /// signed integer. Individual fields may be negative; only a negative total
    /// is rejected.
    pub fn parse(&self, timecode: &str) -> std::result::Result<FrameCount, TimecodeError> {
        let fields: Vec<&str> = timecode.split(':').collect();
        if fields.len() != 4 {
            return Err(TimecodeError::WrongFieldCount {
                timecode: timecode.to_string(),
                found: fields.len(),
            });
        }

        let mut values = [0i64; 4];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = Self::parse_field(timecode, field)?;
        }
        let [hours, minutes, seconds, frames] = values;

        let total = hours
            .checked_mul(3600)
            .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(seconds))
            .and_then(|total_seconds| total_seconds.checked_mul(i64::from(self.frame_rate)))
            .and_then(|total| total.checked_add(frames))
            .ok_or_else(|| TimecodeError::Overflow {
                timecode: timecode.to_string(),
            })?;

        FrameCount::try_from(total).map_err(|_| TimecodeError::Negative {
            timecode: timecode.to_string(),
            frames: total,
        })
    }

    /// Format a frame count as `HH:MM:SS:FF`
    ///
    /// Every field is padded to two digits; hours grow past two digits rather
    /// than wrapping.
    pub fn format(&self, frames: FrameCount) -> String {
        let rate = u64::from(self.frame_rate);
        let per_hour = 3600 * rate;
        let per_minute = 60 * rate;

        let hours = frames / per_hour;
        let remainder = frames % per_hour;
        let minutes = remainder / per_minute;
        let remainder = remainder % per_minute;
        let seconds = remainder / rate;
        let frames = remainder % rate;

        format!("{:02}:{:02}:{:02}:{:02}", hours, minutes, seconds, frames)
    }

    fn parse_field(timecode: &str, field: &str) -> std::result::Result<i64, TimecodeError> {
        field.trim().parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => TimecodeError::Overflow {
                timecode: timecode.to_string(),
            },
            _ => TimecodeError::InvalidField {
                timecode: timecode.to_string(),
                field: field.to_string(),
            },
        })
    }
}

/// Median of an edit's start and end frames, rounded down
///
/// For two values the median is their mean. The order of the arguments does not
/// matter and the sum is never formed, so it cannot overflow.
pub fn median_frame(start: FrameCount, end: FrameCount) -> FrameCount {
    let (low, high) = if start <= end { (start, end) } else { (end, start) };
    low + (high - low) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_known_values() {
        let codec = TimecodeCodec::new(24).unwrap();
        assert_eq!(codec.parse("00:00:00:00").unwrap(), 0);
        assert_eq!(codec.parse("00:00:01:00").unwrap(), 24);
        assert_eq!(codec.parse("01:00:00:00").unwrap(), 86_400);
        assert_eq!(codec.parse("01:00:00:12").unwrap(), 86_412);
    }

    #[test]
    fn test_format_known_values() {
        let codec = TimecodeCodec::new(24).unwrap();
        assert_eq!(codec.format(0), "00:00:00:00");
        assert_eq!(codec.format(86_406), "01:00:00:06");
        assert_eq!(codec.format(24 * 61 + 5), "00:01:01:05");
    }

    #[test]
    fn test_hours_are_never_truncated() {
        let codec = TimecodeCodec::new(24).unwrap();
        let frames = codec.parse("123:00:00:00").unwrap();
        assert_eq!(codec.format(frames), "123:00:00:00");
    }

    #[test]
    fn test_out_of_range_fields_are_accepted() {
        let codec = TimecodeCodec::new(24).unwrap();
        // 30 frames at 24 fps carries into the next second
        let frames = codec.parse("00:00:00:30").unwrap();
        assert_eq!(frames, 30);
        assert_eq!(codec.format(frames), "00:00:01:06");

        assert_eq!(codec.parse("00:75:00:00").unwrap(), 75 * 60 * 24);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let codec = TimecodeCodec::new(24).unwrap();
        assert_eq!(codec.parse(" 01:00:00:01 ").unwrap(), 86_401);
        assert_eq!(codec.parse("01: 00 :00:+1").unwrap(), 86_401);
    }

    #[test]
    fn test_malformed_timecodes() {
        let codec = TimecodeCodec::new(24).unwrap();

        assert!(matches!(
            codec.parse("aa:bb:cc:dd"),
            Err(TimecodeError::InvalidField { .. })
        ));
        assert!(matches!(
            codec.parse("01:00:00"),
            Err(TimecodeError::WrongFieldCount { found: 3, .. })
        ));
        assert!(matches!(
            codec.parse("01:00:00:00:00"),
            Err(TimecodeError::WrongFieldCount { found: 5, .. })
        ));
        assert!(matches!(
            codec.parse(""),
            Err(TimecodeError::WrongFieldCount { found: 1, .. })
        ));
        assert!(matches!(
            codec.parse("01:00:00:"),
            Err(TimecodeError::InvalidField { .. })
        ));
        assert!(matches!(
            codec.parse("01:00:00:1.5"),
            Err(TimecodeError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_negative_fields_are_accepted() {
        let codec = TimecodeCodec::new(24).unwrap();
        let frames = codec.parse("01:-1:00:00").unwrap();
        assert_eq!(frames, 85_440);
        assert_eq!(codec.format(frames), "00:59:00:00");

        assert_eq!(codec.parse("00:00:01:-1").unwrap(), 23);
    }

    #[test]
    fn test_negative_total_is_an_error() {
        let codec = TimecodeCodec::new(24).unwrap();
        assert_eq!(
            codec.parse("-1:00:00:00"),
            Err(TimecodeError::Negative {
                timecode: "-1:00:00:00".to_string(),
                frames: -86_400,
            })
        );
        assert!(matches!(
            codec.parse("00:00:00:-1"),
            Err(TimecodeError::Negative { frames: -1, .. })
        ));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let codec = TimecodeCodec::new(24).unwrap();
        assert!(matches!(
            codec.parse("99999999999999999999:00:00:00"),
            Err(TimecodeError::Overflow { .. })
        ));
        assert!(matches!(
            codec.parse(&format!("{}:00:00:00", u64::MAX / 3600)),
            Err(TimecodeError::Overflow { .. })
        ));
        assert!(matches!(
            codec.parse("00:00:00:-99999999999999999999"),
            Err(TimecodeError::Overflow { .. })
        ));
    }

    #[test]
    fn test_other_frame_rates() {
        let codec = TimecodeCodec::new(25).unwrap();
        assert_eq!(codec.parse("00:00:01:00").unwrap(), 25);
        assert_eq!(codec.format(25 * 3600 + 24), "01:00:00:24");

        assert!(TimecodeCodec::new(0).is_err());
        assert_eq!(TimecodeCodec::default().frame_rate(), DEFAULT_FRAME_RATE);
    }

    #[test]
    fn test_median_frame() {
        assert_eq!(median_frame(86_400, 86_412), 86_406);
        assert_eq!(median_frame(10, 10), 10);
        // Odd spans round down
        assert_eq!(median_frame(0, 5), 2);
        assert_eq!(median_frame(5, 0), 2);
        assert_eq!(median_frame(u64::MAX, u64::MAX - 1), u64::MAX - 1);
    }

    proptest! {
        #[test]
        fn prop_round_trip(h in 0u64..100, m in 0u64..60, s in 0u64..60, f in 0u64..24) {
            let codec = TimecodeCodec::new(24).unwrap();
            let timecode = format!("{:02}:{:02}:{:02}:{:02}", h, m, s, f);
            let frames = codec.parse(&timecode).unwrap();
            prop_assert_eq!(codec.format(frames), timecode);
        }

        #[test]
        fn prop_median_is_order_independent(a in any::<u64>(), b in any::<u64>()) {
            prop_assert_eq!(median_frame(a, b), median_frame(b, a));
        }

        #[test]
        fn prop_median_lies_between(a in any::<u64>(), b in any::<u64>()) {
            let median = median_frame(a, b);
            prop_assert!(median >= a.min(b) && median <= a.max(b));
        }
    }
}
