use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EffectsConfig;

/// A case-sensitive substring replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new<F: Into<String>, T: Into<String>>(from: F, to: T) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Outcome of running an effect name through the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectClass {
    /// The effect gets a marker under this (rewritten) name
    Keep(String),

    /// The rewritten name contains an excluded substring
    Excluded { name: String, matched: String },
}

/// Normalizes effect names and drops the ones that never become markers
#[derive(Debug, Clone)]
pub struct EffectFilter {
    replacements: Vec<Replacement>,
    exclusions: Vec<String>,
}

impl Default for EffectFilter {
    fn default() -> Self {
        Self::from_config(&EffectsConfig::default())
    }
}

impl EffectFilter {
    pub fn new(replacements: Vec<Replacement>, exclusions: Vec<String>) -> Self {
        Self {
            replacements,
            exclusions,
        }
    }

    pub fn from_config(config: &EffectsConfig) -> Self {
        Self::new(config.replacements.clone(), config.exclusions.clone())
    }

    /// Apply every replacement in order, then trim surrounding whitespace
    ///
    /// Each replacement is a separate pass over the output of the previous one.
    pub fn normalize(&self, effect_name: &str) -> String {
        let rewritten = self
            .replacements
            .iter()
            .fold(effect_name.to_string(), |name, r| name.replace(&r.from, &r.to));

        rewritten.trim().to_string()
    }

    /// Normalize the name and check it against the exclusion list
    pub fn classify(&self, effect_name: &str) -> EffectClass {
        let name = self.normalize(effect_name);

        match self.exclusions.iter().find(|excluded| name.contains(excluded.as_str())) {
            Some(matched) => {
                debug!("Excluding effect '{}' (matches '{}')", name, matched);
                EffectClass::Excluded {
                    name,
                    matched: matched.clone(),
                }
            }
            None => EffectClass::Keep(name),
        }
    }

    pub fn is_excluded(&self, effect_name: &str) -> bool {
        matches!(self.classify(effect_name), EffectClass::Excluded { .. })
    }
}
