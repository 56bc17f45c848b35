pub mod commands;
pub mod wardrobe;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use wardrobe_core::config::{AppConfig, LoadOptions, LoggingConfig};

#[derive(Debug, Parser)]
#[command(
    name = "wardrobe",
    about = "Wardrobe recommendation CLI",
    long_about = "Suggest what to wear, flag stale garments, and check whether a purchase pairs with the wardrobe.",
    after_help = "Examples:\n  wardrobe suggest --strategy stylist --weather rainy --event business-meeting\n  wardrobe health --season winter\n  wardrobe compat --category skirt --color \"Neon Pink\" --size S --fabric Poly --brand Zara"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Suggest garments for a mood, weather, event or seasonal palette")]
    Suggest(commands::suggest::SuggestArgs),
    #[command(about = "List in-season garments that have not been worn for too long")]
    Health(commands::health::HealthArgs),
    #[command(about = "Check whether a candidate purchase pairs with the wardrobe")]
    Compat(commands::compat::CompatArgs),
    #[command(about = "Inspect effective configuration values")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let logging = AppConfig::load(LoadOptions::default())
        .map(|config| config.logging)
        .unwrap_or_else(|_| AppConfig::default().logging);
    init_logging(&logging);

    let result = match cli.command {
        Command::Suggest(args) => commands::suggest::run(args),
        Command::Health(args) => commands::health::run(args),
        Command::Compat(args) => commands::compat::run(args),
        Command::Config => commands::config::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn init_logging(logging: &LoggingConfig) {
    use tracing::Level;
    use wardrobe_core::config::LogFormat::*;

    let log_level = logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(log_level);

    match logging.format {
        Compact => builder.compact().init(),
        Pretty => builder.pretty().init(),
        Json => builder.json().init(),
    }
}
