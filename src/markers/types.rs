use std::fmt;

use crate::config::MarkerConfig;

/// Separator between effect names inside one marker comment
pub const EFFECT_SEPARATOR: &str = ", ";

/// One marker on the output list
///
/// Several report rows can land on the same frame (a resize and a respeed on
/// the same shot, for example). They share one marker and its comment lists
/// every effect in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub timecode: String,
    pub track: String,
    pub effects: Vec<String>,
}

impl Marker {
    pub fn new<T: Into<String>, K: Into<String>, E: Into<String>>(timecode: T, track: K, effect: E) -> Self {
        Self {
            timecode: timecode.into(),
            track: track.into(),
            effects: vec![effect.into()],
        }
    }

    /// Add another effect at the same position
    pub fn merge<E: Into<String>>(&mut self, effect: E) {
        self.effects.push(effect.into());
    }

    pub fn comment(&self, style: &MarkerConfig) -> String {
        format!("{}{}", style.comment_prefix, self.effects.join(EFFECT_SEPARATOR))
    }

    /// Serialize as one tab-separated marker line
    pub fn to_line(&self, style: &MarkerConfig) -> String {
        [
            style.kind.as_str(),
            self.timecode.as_str(),
            self.track.as_str(),
            style.color.as_str(),
            self.comment(style).as_str(),
            style.flag.as_str(),
        ]
        .join("\t")
    }
}

/// Finished marker list, ready to be imported
///
/// Displays as one line per marker separated by `\n`, without a trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerList {
    markers: Vec<Marker>,
    style: MarkerConfig,
}

impl MarkerList {
    pub fn new(markers: Vec<Marker>, style: MarkerConfig) -> Self {
        Self { markers, style }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.markers.iter().map(|marker| marker.to_line(&self.style))
    }
}

impl fmt::Display for MarkerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}
