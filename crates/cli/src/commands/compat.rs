use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use serde::Serialize;
use wardrobe_core::{
    ApplicationError, Category, CompatibilityChecker, CompatibilityVerdict, Garment,
    GarmentOptions, GarmentSpec,
};

use crate::commands::CommandResult;
use crate::wardrobe;

#[derive(Debug, Clone, Args)]
pub struct CompatArgs {
    #[arg(long, help = "Category of the garment under consideration")]
    pub category: Category,
    #[arg(long)]
    pub color: String,
    #[arg(long)]
    pub size: String,
    #[arg(long, help = "Fabric composition, e.g. \"80% wool\"")]
    pub fabric: String,
    #[arg(long)]
    pub brand: String,
    #[arg(long, help = "TOML wardrobe file; the demo wardrobe is used when omitted")]
    pub wardrobe: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CompatibilityReport {
    candidate: String,
    #[serde(flatten)]
    verdict: CompatibilityVerdict,
}

pub fn run(args: CompatArgs) -> CommandResult {
    match execute(args) {
        Ok(result) => result,
        Err(error) => CommandResult::from_error("compat", &error),
    }
}

fn execute(args: CompatArgs) -> Result<CommandResult, ApplicationError> {
    let today = Local::now().date_naive();
    let garments = wardrobe::load(args.wardrobe.as_deref(), today)?;
    let candidate = Garment::create_on(
        GarmentSpec::new(args.category, args.color, args.size, args.fabric, args.brand),
        GarmentOptions::default(),
        today,
    )?;

    let verdict = CompatibilityChecker.evaluate(&candidate, &garments);

    let message = if verdict.worthwhile {
        format!(
            "yes: {} pairs with {} garment(s) you own",
            candidate.display_name(),
            verdict.match_count
        )
    } else {
        format!("no: {} pairs with nothing you own", candidate.display_name())
    };

    let report = CompatibilityReport { candidate: candidate.display_name(), verdict };
    Ok(CommandResult::success_with("compat", message, report))
}
