//! Contextual exclusion rules shared by every suggestion strategy.
//!
//! A garment is admissible for a context only when no rule in the set
//! excludes it. Rules are pure and total; new ones are appended without
//! touching the existing ones.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::domain::{Event, Garment, Material, Vibe, Weather};
use crate::suggestions::StrategyKind;

pub trait ExclusionRule: Send + Sync {
    /// Stable identifier reported in diagnostics.
    fn code(&self) -> &'static str;

    /// Human-readable explanation of why a garment is excluded.
    fn reason(&self) -> &'static str;

    fn excludes(&self, garment: &Garment, context: &Context) -> bool;
}

/// Suede is not suggested when it is raining.
#[derive(Clone, Copy, Debug, Default)]
pub struct RainRuinsSuede;

impl ExclusionRule for RainRuinsSuede {
    fn code(&self) -> &'static str {
        "RAIN_SUEDE"
    }

    fn reason(&self) -> &'static str {
        "suede does not survive rainy weather"
    }

    fn excludes(&self, garment: &Garment, context: &Context) -> bool {
        context.weather == Some(Weather::Rainy) && garment.material() == Material::Suede
    }
}

/// Edgy or torn pieces are kept out of formal business meetings.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeetingRejectsEdgy;

impl ExclusionRule for MeetingRejectsEdgy {
    fn code(&self) -> &'static str {
        "MEETING_EDGY"
    }

    fn reason(&self) -> &'static str {
        "edgy pieces are out of place at a business meeting"
    }

    fn excludes(&self, garment: &Garment, context: &Context) -> bool {
        context.event == Some(Event::BusinessMeeting) && garment.vibe() == Vibe::Edgy
    }
}

/// A garment lent to someone else cannot be worn.
#[derive(Clone, Copy, Debug, Default)]
pub struct BorrowedUnavailable;

impl ExclusionRule for BorrowedUnavailable {
    fn code(&self) -> &'static str {
        "BORROWED"
    }

    fn reason(&self) -> &'static str {
        "garment is currently lent out"
    }

    fn excludes(&self, garment: &Garment, _context: &Context) -> bool {
        garment.is_borrowed()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    pub code: String,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admissibility {
    pub admissible: bool,
    pub exclusions: Vec<Exclusion>,
}

impl Default for Admissibility {
    fn default() -> Self {
        Self { admissible: true, exclusions: Vec::new() }
    }
}

#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Vec<Arc<dyn ExclusionRule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules each strategy applies out of the box.
    pub fn for_strategy(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Mood => Self::new().with_rule(BorrowedUnavailable),
            StrategyKind::Palette => Self::new(),
            StrategyKind::Weather => Self::new().with_rule(RainRuinsSuede),
            StrategyKind::Stylist => {
                Self::new().with_rule(RainRuinsSuede).with_rule(MeetingRejectsEdgy)
            }
        }
    }

    pub fn with_rule(mut self, rule: impl ExclusionRule + 'static) -> Self {
        self.push(Arc::new(rule));
        self
    }

    pub fn push(&mut self, rule: Arc<dyn ExclusionRule>) {
        self.rules.push(rule);
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.code()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn admits(&self, garment: &Garment, context: &Context) -> bool {
        !self.rules.iter().any(|rule| rule.excludes(garment, context))
    }

    /// Reports every rule the garment violates, in rule order.
    pub fn evaluate(&self, garment: &Garment, context: &Context) -> Admissibility {
        let exclusions: Vec<Exclusion> = self
            .rules
            .iter()
            .filter(|rule| rule.excludes(garment, context))
            .map(|rule| Exclusion {
                code: rule.code().to_string(),
                reason: rule.reason().to_string(),
            })
            .collect();

        Admissibility { admissible: exclusions.is_empty(), exclusions }
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet").field("rules", &self.codes()).finish()
    }
}
