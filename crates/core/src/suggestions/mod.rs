//! Contextual outfit suggestions
//!
//! Interchangeable strategies (mood, weather, stylist, palette) that filter a
//! wardrobe through the shared exclusion rules and cap the result.

mod engine;
mod types;

pub use engine::{SuggestionEngine, Suggestions};
pub use types::*;

use crate::errors::DomainError;

/// Result type for suggestion operations
pub type SuggestionResult<T> = Result<T, DomainError>;

/// Safe picks returned by the weather strategy
pub const DEFAULT_WEATHER_LIMIT: usize = 3;

/// Picks returned by the stylist strategy
pub const DEFAULT_STYLIST_LIMIT: usize = 2;
