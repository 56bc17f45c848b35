//! Closed vocabularies used to describe garments and recommendation contexts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Declares a closed vocabulary: a `Copy` enum with a canonical snake_case
/// spelling used by serde, `Display` and `FromStr`.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let normalized = normalize_word(value);
                match normalized.as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(DomainError::UnknownVocabulary {
                        kind: $kind,
                        value: value.trim().to_owned(),
                    }),
                }
            }
        }
    };
}

fn normalize_word(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

vocabulary! {
    Category ("category") {
        Trousers => "trousers",
        Shirt => "shirt",
        Jacket => "jacket",
        Skirt => "skirt",
        Footwear => "footwear",
        Accessory => "accessory",
        Outerwear => "outerwear",
    }
}

vocabulary! {
    /// `AllSeasons` is a value of its own; it does not stand in for the others.
    Season ("season") {
        Summer => "summer",
        Winter => "winter",
        Spring => "spring",
        Autumn => "autumn",
        AllSeasons => "all_seasons",
    }
}

vocabulary! {
    Weather ("weather") {
        Sunny => "sunny",
        Rainy => "rainy",
        Snowy => "snowy",
        Windy => "windy",
        Cloudy => "cloudy",
    }
}

vocabulary! {
    Event ("event") {
        BusinessMeeting => "business_meeting",
        DateNight => "date_night",
        Gala => "gala",
        Casual => "casual",
        Sport => "sport",
        Travel => "travel",
    }
}

vocabulary! {
    FitStyle ("fit style") {
        Masculine => "masculine",
        Feminine => "feminine",
        Unisex => "unisex",
        Oversize => "oversize",
        Slim => "slim",
    }
}

vocabulary! {
    Pattern ("pattern") {
        Basic => "basic",
        Printed => "printed",
        Striped => "striped",
        Checked => "checked",
    }
}

vocabulary! {
    /// Mood a garment projects. `Edgy` covers torn and rebellious pieces.
    Vibe ("vibe") {
        Bold => "bold",
        Composed => "composed",
        Relaxed => "relaxed",
        Edgy => "edgy",
        Minimal => "minimal",
    }
}

vocabulary! {
    Material ("material") {
        Cotton => "cotton",
        Wool => "wool",
        Linen => "linen",
        Denim => "denim",
        Leather => "leather",
        Suede => "suede",
        Synthetic => "synthetic",
    }
}

vocabulary! {
    /// Seasonal colour-analysis classification of the wearer.
    SeasonalPalette ("seasonal palette") {
        Winter => "winter",
        Summer => "summer",
        Autumn => "autumn",
        Spring => "spring",
    }
}

impl Default for FitStyle {
    fn default() -> Self {
        Self::Unisex
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::Basic
    }
}

impl Default for Vibe {
    fn default() -> Self {
        Self::Relaxed
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::Cotton
    }
}
