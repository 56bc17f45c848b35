use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use serde::Serialize;
use wardrobe_core::{
    ApplicationError, Context, Event, Garment, SeasonalPalette, StrategyKind, SuggestionEngine,
    Vibe, Weather,
};

use crate::commands::{load_config, CommandResult};
use crate::wardrobe;

#[derive(Debug, Clone, Args)]
pub struct SuggestArgs {
    #[arg(long, help = "Strategy to run: mood|weather|stylist|palette")]
    pub strategy: StrategyKind,
    #[arg(long, help = "Target mood for the mood strategy")]
    pub mood: Option<Vibe>,
    #[arg(long, help = "Current weather for the weather and stylist strategies")]
    pub weather: Option<Weather>,
    #[arg(long, help = "Occasion for the stylist strategy")]
    pub event: Option<Event>,
    #[arg(long, help = "Seasonal colour palette for the palette strategy")]
    pub palette: Option<SeasonalPalette>,
    #[arg(long, help = "TOML wardrobe file; the demo wardrobe is used when omitted")]
    pub wardrobe: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SuggestionReport<'a> {
    strategy: StrategyKind,
    context: Context,
    limit: Option<usize>,
    picks: Vec<&'a Garment>,
}

pub fn run(args: SuggestArgs) -> CommandResult {
    match execute(&args) {
        Ok(result) => result,
        Err(error) => CommandResult::from_error("suggest", &error),
    }
}

fn execute(args: &SuggestArgs) -> Result<CommandResult, ApplicationError> {
    let config = load_config()?;
    let garments = wardrobe::load(args.wardrobe.as_deref(), Local::now().date_naive())?;
    let engine = SuggestionEngine::new(config.suggestions.limits());

    let context = Context {
        weather: args.weather,
        event: args.event,
        mood: args.mood,
        palette: args.palette,
    };
    let suggestions = engine.suggest(args.strategy, &garments, &context)?;
    let picks = suggestions.to_vec();

    let names: Vec<String> = picks.iter().map(|garment| garment.display_name()).collect();
    let message = if names.is_empty() {
        format!("{} strategy found nothing to suggest", args.strategy)
    } else {
        format!("{} strategy suggests: {}", args.strategy, names.join(", "))
    };

    let report = SuggestionReport {
        strategy: args.strategy,
        context,
        limit: suggestions.limit(),
        picks,
    };
    Ok(CommandResult::success_with("suggest", message, report))
}
