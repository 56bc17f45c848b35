//! Types for the Suggestion Engine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compatibility::same_color;
use crate::domain::{Garment, SeasonalPalette, Vibe};
use crate::errors::DomainError;

/// Which suggestion algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Garments matching the requested mood, never lent-out ones
    Mood,
    /// Garments safe for the weather, capped
    Weather,
    /// Garments safe for both weather and event, capped
    Stylist,
    /// Signature colours of the wearer's seasonal palette
    Palette,
}

impl StrategyKind {
    pub const ALL: &'static [StrategyKind] =
        &[StrategyKind::Mood, StrategyKind::Weather, StrategyKind::Stylist, StrategyKind::Palette];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Mood => "mood",
            StrategyKind::Weather => "weather",
            StrategyKind::Stylist => "stylist",
            StrategyKind::Palette => "palette",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mood" => Ok(Self::Mood),
            "weather" => Ok(Self::Weather),
            "stylist" => Ok(Self::Stylist),
            "palette" => Ok(Self::Palette),
            other => Err(DomainError::UnknownVocabulary {
                kind: "strategy",
                value: other.to_owned(),
            }),
        }
    }
}

/// Caps applied by the bounded strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionLimits {
    /// Maximum picks for the weather strategy (default: 3)
    pub weather: usize,
    /// Maximum picks for the stylist strategy (default: 2)
    pub stylist: usize,
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self { weather: super::DEFAULT_WEATHER_LIMIT, stylist: super::DEFAULT_STYLIST_LIMIT }
    }
}

impl SuggestionLimits {
    /// Cap for a strategy; `None` means unbounded
    pub fn for_strategy(&self, kind: StrategyKind) -> Option<usize> {
        match kind {
            StrategyKind::Weather => Some(self.weather),
            StrategyKind::Stylist => Some(self.stylist),
            StrategyKind::Mood | StrategyKind::Palette => None,
        }
    }
}

/// Positive selection a strategy makes before exclusion rules apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selector {
    Any,
    Mood(Vibe),
    Palette(SeasonalPalette),
}

impl Selector {
    pub(crate) fn selects(&self, garment: &Garment) -> bool {
        match self {
            Selector::Any => true,
            Selector::Mood(vibe) => garment.vibe() == *vibe,
            Selector::Palette(palette) => signature_colors(*palette)
                .iter()
                .any(|color| same_color(color, garment.color())),
        }
    }
}

/// Colours that flatter a seasonal palette. Only winter has a curated set.
pub fn signature_colors(palette: SeasonalPalette) -> &'static [&'static str] {
    match palette {
        SeasonalPalette::Winter => &["black"],
        SeasonalPalette::Summer | SeasonalPalette::Autumn | SeasonalPalette::Spring => &[],
    }
}
