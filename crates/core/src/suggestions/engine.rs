//! Suggestion Engine implementation

use tracing::debug;

use super::types::{Selector, StrategyKind, SuggestionLimits};
use super::SuggestionResult;
use crate::context::Context;
use crate::domain::Garment;
use crate::errors::DomainError;
use crate::rules::{Admissibility, ExclusionRule, RuleSet};

/// Runs any strategy against a caller-owned wardrobe.
///
/// The engine holds configuration only: the caps and one rule set per
/// strategy. Nothing carries over between calls.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    limits: SuggestionLimits,
    mood_rules: RuleSet,
    weather_rules: RuleSet,
    stylist_rules: RuleSet,
    palette_rules: RuleSet,
}

impl SuggestionEngine {
    /// Create an engine with the built-in rules for every strategy
    pub fn new(limits: SuggestionLimits) -> Self {
        Self {
            limits,
            mood_rules: RuleSet::for_strategy(StrategyKind::Mood),
            weather_rules: RuleSet::for_strategy(StrategyKind::Weather),
            stylist_rules: RuleSet::for_strategy(StrategyKind::Stylist),
            palette_rules: RuleSet::for_strategy(StrategyKind::Palette),
        }
    }

    /// Append a custom exclusion rule to one strategy
    pub fn with_rule(mut self, kind: StrategyKind, rule: impl ExclusionRule + 'static) -> Self {
        let rules = std::mem::take(self.rules_mut(kind));
        *self.rules_mut(kind) = rules.with_rule(rule);
        self
    }

    pub fn limits(&self) -> SuggestionLimits {
        self.limits
    }

    pub fn rules(&self, kind: StrategyKind) -> &RuleSet {
        match kind {
            StrategyKind::Mood => &self.mood_rules,
            StrategyKind::Weather => &self.weather_rules,
            StrategyKind::Stylist => &self.stylist_rules,
            StrategyKind::Palette => &self.palette_rules,
        }
    }

    fn rules_mut(&mut self, kind: StrategyKind) -> &mut RuleSet {
        match kind {
            StrategyKind::Mood => &mut self.mood_rules,
            StrategyKind::Weather => &mut self.weather_rules,
            StrategyKind::Stylist => &mut self.stylist_rules,
            StrategyKind::Palette => &mut self.palette_rules,
        }
    }

    /// Prepare suggestions for a context.
    ///
    /// Fails before producing anything when the context lacks the field the
    /// strategy needs. An empty result is not an error.
    pub fn suggest<'a>(
        &'a self,
        kind: StrategyKind,
        garments: &'a [Garment],
        context: &Context,
    ) -> SuggestionResult<Suggestions<'a>> {
        let selector = match selector_for(kind, context) {
            Ok(selector) => selector,
            Err(error) => {
                debug!(
                    event_name = "suggestions.rejected",
                    strategy = %kind,
                    error = %error,
                    "suggestion context is missing a required field"
                );
                return Err(error);
            }
        };

        let suggestions = Suggestions {
            kind,
            garments,
            context: *context,
            selector,
            rules: self.rules(kind),
            limit: self.limits.for_strategy(kind),
        };

        debug!(
            event_name = "suggestions.prepared",
            strategy = %kind,
            wardrobe_size = garments.len(),
            rules = ?suggestions.rules.codes(),
            limit = ?suggestions.limit,
            "suggestions prepared"
        );

        Ok(suggestions)
    }

    /// Explain why a single garment is or is not admissible for a strategy
    pub fn explain(&self, kind: StrategyKind, garment: &Garment, context: &Context) -> Admissibility {
        self.rules(kind).evaluate(garment, context)
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(SuggestionLimits::default())
    }
}

fn selector_for(kind: StrategyKind, context: &Context) -> SuggestionResult<Selector> {
    let missing = |field: &'static str| DomainError::MissingContext { strategy: kind, field };

    match kind {
        StrategyKind::Mood => context.mood.map(Selector::Mood).ok_or_else(|| missing("mood")),
        StrategyKind::Weather => {
            context.weather.map(|_| Selector::Any).ok_or_else(|| missing("weather"))
        }
        StrategyKind::Stylist => {
            if context.weather.is_none() {
                return Err(missing("weather"));
            }
            context.event.map(|_| Selector::Any).ok_or_else(|| missing("event"))
        }
        StrategyKind::Palette => {
            context.palette.map(Selector::Palette).ok_or_else(|| missing("palette"))
        }
    }
}

/// Lazily evaluated suggestions over a borrowed wardrobe.
///
/// Each call to [`Suggestions::iter`] restarts the evaluation from the first
/// garment, in wardrobe order.
#[derive(Debug, Clone)]
pub struct Suggestions<'a> {
    kind: StrategyKind,
    garments: &'a [Garment],
    context: Context,
    selector: Selector,
    rules: &'a RuleSet,
    limit: Option<usize>,
}

impl<'a> Suggestions<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Garment> + '_ {
        self.garments
            .iter()
            .filter(move |garment| self.selector.selects(garment))
            .filter(move |garment| self.rules.admits(garment, &self.context))
            .take(self.limit.unwrap_or(usize::MAX))
    }

    pub fn to_vec(&self) -> Vec<&'a Garment> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{
        Category, Event, GarmentOptions, GarmentSpec, Material, SeasonalPalette, Vibe, Weather,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date")
    }

    fn item(brand: &str, color: &str, material: Material, vibe: Vibe) -> Garment {
        Garment::create_on(
            GarmentSpec::new(Category::Shirt, color, "M", "mixed", brand),
            GarmentOptions::default().with_material(material).with_vibe(vibe),
            today(),
        )
        .expect("garment")
    }

    fn brands(garments: &[&Garment]) -> Vec<String> {
        garments.iter().map(|garment| garment.brand().to_owned()).collect()
    }

    #[test]
    fn mood_strategy_keeps_matching_vibe_in_order_and_skips_lent_items() {
        let mut wardrobe = vec![
            item("a", "Blue", Material::Cotton, Vibe::Relaxed),
            item("b", "Grey", Material::Cotton, Vibe::Bold),
            item("c", "Green", Material::Linen, Vibe::Relaxed),
            item("d", "White", Material::Denim, Vibe::Relaxed),
        ];
        wardrobe[2].mark_as_borrowed("Ali").expect("lend");

        let engine = SuggestionEngine::default();
        let context = Context::new().with_mood(Vibe::Relaxed);
        let suggestions = engine.suggest(StrategyKind::Mood, &wardrobe, &context).expect("suggest");

        assert_eq!(brands(&suggestions.to_vec()), vec!["a", "d"]);
        assert_eq!(suggestions.limit(), None);
    }

    #[test]
    fn weather_strategy_caps_at_three_safe_picks() {
        let wardrobe = vec![
            item("suede", "Brown", Material::Suede, Vibe::Composed),
            item("a", "Blue", Material::Cotton, Vibe::Relaxed),
            item("b", "Grey", Material::Wool, Vibe::Bold),
            item("c", "Green", Material::Linen, Vibe::Edgy),
            item("d", "White", Material::Denim, Vibe::Relaxed),
        ];

        let engine = SuggestionEngine::default();
        let context = Context::new().with_weather(Weather::Rainy);
        let suggestions =
            engine.suggest(StrategyKind::Weather, &wardrobe, &context).expect("suggest");

        assert_eq!(brands(&suggestions.to_vec()), vec!["a", "b", "c"]);
        assert_eq!(suggestions.len(), 3);
    }

    #[test]
    fn weather_strategy_keeps_suede_when_dry() {
        let wardrobe = vec![item("suede", "Brown", Material::Suede, Vibe::Composed)];
        let engine = SuggestionEngine::default();
        let context = Context::new().with_weather(Weather::Sunny);

        let suggestions =
            engine.suggest(StrategyKind::Weather, &wardrobe, &context).expect("suggest");

        assert_eq!(suggestions.len(), 1);
    }

    #[test]
    fn stylist_strategy_applies_both_rules_and_caps_at_two() {
        let wardrobe = vec![
            item("torn", "Black", Material::Denim, Vibe::Edgy),
            item("suede", "Brown", Material::Suede, Vibe::Composed),
            item("a", "Navy", Material::Wool, Vibe::Composed),
            item("b", "White", Material::Cotton, Vibe::Minimal),
            item("c", "Grey", Material::Cotton, Vibe::Bold),
        ];

        let engine = SuggestionEngine::default();
        let context = Context::new().with_weather(Weather::Rainy).with_event(Event::BusinessMeeting);
        let suggestions =
            engine.suggest(StrategyKind::Stylist, &wardrobe, &context).expect("suggest");

        assert_eq!(brands(&suggestions.to_vec()), vec!["a", "b"]);
    }

    #[test]
    fn palette_strategy_suggests_signature_colors() {
        let mut wardrobe = vec![
            item("a", "Black", Material::Wool, Vibe::Bold),
            item("b", "Red", Material::Cotton, Vibe::Bold),
            item("c", "black", Material::Leather, Vibe::Edgy),
        ];
        wardrobe[2].mark_as_borrowed("Deniz").expect("lend");
        let engine = SuggestionEngine::default();

        let winter = Context::new().with_palette(SeasonalPalette::Winter);
        let suggestions = engine.suggest(StrategyKind::Palette, &wardrobe, &winter).expect("suggest");
        assert_eq!(brands(&suggestions.to_vec()), vec!["a", "c"]);

        let summer = Context::new().with_palette(SeasonalPalette::Summer);
        let suggestions = engine.suggest(StrategyKind::Palette, &wardrobe, &summer).expect("suggest");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn palette_strategy_lists_lent_garments() {
        let mut jacket = item("lent", "Black", Material::Wool, Vibe::Composed);
        jacket.mark_as_borrowed("Deniz").expect("lend");
        let wardrobe = vec![jacket];

        let winter = Context::new().with_palette(SeasonalPalette::Winter);
        let engine = SuggestionEngine::default();
        let suggestions = engine
            .suggest(StrategyKind::Palette, &wardrobe, &winter)
            .expect("suggest");

        assert_eq!(brands(&suggestions.to_vec()), vec!["lent"]);
    }

    #[test]
    fn missing_context_field_fails_fast() {
        let wardrobe = vec![item("a", "Blue", Material::Cotton, Vibe::Relaxed)];
        let engine = SuggestionEngine::default();
        let weather_only = Context::new().with_weather(Weather::Rainy);

        let cases = [
            (StrategyKind::Mood, Context::new(), "mood"),
            (StrategyKind::Weather, Context::new().with_mood(Vibe::Bold), "weather"),
            (StrategyKind::Stylist, weather_only, "event"),
            (StrategyKind::Stylist, Context::new().with_event(Event::Gala), "weather"),
            (StrategyKind::Palette, weather_only, "palette"),
        ];

        for (kind, context, field) in cases {
            let error = engine.suggest(kind, &wardrobe, &context).unwrap_err();
            assert_eq!(error, DomainError::MissingContext { strategy: kind, field });
        }
    }

    #[test]
    fn suggestions_restart_on_every_iteration() {
        let wardrobe = vec![
            item("a", "Blue", Material::Cotton, Vibe::Relaxed),
            item("b", "Grey", Material::Wool, Vibe::Relaxed),
        ];
        let engine = SuggestionEngine::default();
        let context = Context::new().with_mood(Vibe::Relaxed);
        let suggestions = engine.suggest(StrategyKind::Mood, &wardrobe, &context).expect("suggest");

        let first: Vec<_> = suggestions.iter().map(|garment| garment.id().clone()).collect();
        let second: Vec<_> = suggestions.iter().map(|garment| garment.id().clone()).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn configured_limits_replace_defaults() {
        let wardrobe: Vec<Garment> = (0..6)
            .map(|index| item(&format!("g{index}"), "Blue", Material::Cotton, Vibe::Relaxed))
            .collect();
        let engine = SuggestionEngine::new(SuggestionLimits { weather: 5, stylist: 1 });

        let rainy = Context::new().with_weather(Weather::Rainy);
        assert_eq!(engine.suggest(StrategyKind::Weather, &wardrobe, &rainy).expect("weather").len(), 5);

        let meeting = rainy.with_event(Event::BusinessMeeting);
        assert_eq!(engine.suggest(StrategyKind::Stylist, &wardrobe, &meeting).expect("stylist").len(), 1);
    }

    #[test]
    fn custom_rule_extends_a_single_strategy() {
        struct NoRedAtGala;

        impl ExclusionRule for NoRedAtGala {
            fn code(&self) -> &'static str {
                "GALA_RED"
            }

            fn reason(&self) -> &'static str {
                "red is reserved for the host"
            }

            fn excludes(&self, garment: &Garment, context: &Context) -> bool {
                context.event == Some(Event::Gala) && garment.color().eq_ignore_ascii_case("red")
            }
        }

        let wardrobe = vec![
            item("red", "Red", Material::Cotton, Vibe::Bold),
            item("navy", "Navy", Material::Wool, Vibe::Composed),
        ];
        let engine = SuggestionEngine::default().with_rule(StrategyKind::Stylist, NoRedAtGala);
        let context = Context::new().with_weather(Weather::Sunny).with_event(Event::Gala);

        let stylist = engine.suggest(StrategyKind::Stylist, &wardrobe, &context).expect("stylist");
        assert_eq!(brands(&stylist.to_vec()), vec!["navy"]);

        let weather = engine.suggest(StrategyKind::Weather, &wardrobe, &context).expect("weather");
        assert_eq!(weather.len(), 2);

        let explanation = engine.explain(StrategyKind::Stylist, &wardrobe[0], &context);
        assert!(!explanation.admissible);
        assert_eq!(explanation.exclusions[0].code, "GALA_RED");
    }
}
