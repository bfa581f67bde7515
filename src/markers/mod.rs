//! # Marker Module
//!
//! The marker list model and the row-by-row aggregation that builds it.
//!
//! Each report row is anchored at the median of its start and end frames. Rows
//! landing on the same frame as the previously emitted marker are folded into
//! that marker's comment instead of producing a duplicate.

pub mod aggregator;
pub mod types;
pub mod warnings;

pub use aggregator::{MarkerAggregator, RowOutcome};
pub use types::{Marker, MarkerList, EFFECT_SEPARATOR};
pub use warnings::{IgnoreWarnings, LogWarnings, RowWarning, WarningSink};
