use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use wardrobe_core::{ApplicationError, HealthDetector, Season};

use crate::commands::{load_config, CommandResult};
use crate::wardrobe;

#[derive(Debug, Clone, Args)]
pub struct HealthArgs {
    #[arg(long, help = "Season to check: summer|winter|spring|autumn|all_seasons")]
    pub season: Season,
    #[arg(long, help = "TOML wardrobe file; the demo wardrobe is used when omitted")]
    pub wardrobe: Option<PathBuf>,
}

pub fn run(args: HealthArgs) -> CommandResult {
    match execute(&args) {
        Ok(result) => result,
        Err(error) => CommandResult::from_error("health", &error),
    }
}

fn execute(args: &HealthArgs) -> Result<CommandResult, ApplicationError> {
    let config = load_config()?;
    let today = Local::now().date_naive();
    let garments = wardrobe::load(args.wardrobe.as_deref(), today)?;
    let detector = HealthDetector::new(config.health.stale_after_days);

    let stale = detector.check(&garments, args.season, today);

    let message = if stale.is_empty() {
        format!("nothing suited to {} has gone unworn for too long", args.season)
    } else {
        let lines: Vec<String> = stale
            .iter()
            .map(|entry| {
                format!(
                    "{} (last worn {}, {} days ago)",
                    entry.garment.display_name(),
                    entry.garment.last_worn(),
                    entry.days_since_worn
                )
            })
            .collect();
        format!("unworn for over {} days: {}", detector.stale_after_days(), lines.join("; "))
    };

    Ok(CommandResult::success_with("health", message, &stale))
}
