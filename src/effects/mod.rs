//! # Effect Names
//!
//! Rewrites Media Composer effect names into the vocabulary used on DI turnover
//! marker lists and decides which effects are worth a marker at all.
//!
//! Keys, submasters, audio pan/volume and titles are routinely present on a
//! sequence but are not opticals, so they are dropped.

pub mod filter;

pub use filter::{EffectClass, EffectFilter, Replacement};

/// Built-in substring replacements, applied in this order
pub const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    ("Timewarp", "Respeed"),
    ("3DWarp", "Repo/Resize"),
    ("Motion Effect", "Respeed"),
];

/// Built-in exclusions, matched as substrings of the rewritten name
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "Matte Key",
    "3D MatteKey",
    "Audio Pan/Volume",
    "Submaster",
    "Avid Titler+",
];
