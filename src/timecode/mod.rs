//! # Timecode Module
//!
//! Conversion between `HH:MM:SS:FF` timecodes and absolute frame counts, plus the
//! midpoint calculation used to anchor a marker inside an edit event.
//!
//! ## Usage
//!
//! ```rust
//! use optical_markers::timecode::{median_frame, TimecodeCodec};
//!
//! let codec = TimecodeCodec::new(24).unwrap();
//! let start = codec.parse("01:00:00:00").unwrap();
//! let end = codec.parse("01:00:00:12").unwrap();
//! assert_eq!(codec.format(median_frame(start, end)), "01:00:00:06");
//! ```

pub mod codec;

pub use codec::{median_frame, FrameCount, TimecodeCodec, DEFAULT_FRAME_RATE};
