//! Recommendation and compatibility engine for a personal wardrobe.
//!
//! The caller owns the wardrobe; every component here borrows it for the
//! duration of one call and returns structured results.

pub mod compatibility;
pub mod config;
pub mod context;
pub mod domain;
pub mod errors;
pub mod health;
pub mod rules;
pub mod suggestions;

pub use compatibility::{
    colors_match, is_acquisition_worthwhile, CompatibilityChecker, CompatibilityVerdict,
};
pub use context::Context;
pub use domain::{
    Category, Event, FitStyle, Garment, GarmentId, GarmentOptions, GarmentSpec, Material, Pattern,
    Season, SeasonalPalette, Vibe, Weather,
};
pub use errors::{ApplicationError, DomainError};
pub use health::{HealthDetector, StaleGarment};
pub use rules::{Admissibility, Exclusion, ExclusionRule, RuleSet};
pub use suggestions::{StrategyKind, SuggestionEngine, SuggestionLimits, Suggestions};
