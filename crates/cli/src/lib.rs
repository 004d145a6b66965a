pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use commands::recommend::RecommendArgs;

#[derive(Debug, Parser)]
#[command(
    name = "lookbook",
    about = "Lookbook stylist operator CLI",
    long_about = "Generate outfit recommendations from the styling engine and operate Lookbook migrations, demo fixtures, config inspection, and readiness checks.",
    after_help = "Examples:\n  lookbook recommend --occasion business --budget 700 --seed 42\n  lookbook tier 150\n  lookbook doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Generate ranked outfit recommendations for a set of preferences")]
    Recommend(RecommendArgs),
    #[command(about = "Show the budget tier and per-item price band for a total budget")]
    Tier {
        #[arg(help = "Total outfit budget, e.g. 150 or 89.99")]
        budget: String,
    },
    #[command(about = "Apply pending database migrations and return structured status output")]
    Migrate,
    #[command(about = "Load the demo profiles, saved looks, and likes (idempotent)")]
    Seed,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config, catalog readiness, and DB connectivity checks")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Recommend(args) => commands::recommend::run(&args),
        Command::Tier { budget } => commands::tier::run(&budget),
        Command::Migrate => commands::migrate::run(),
        Command::Seed => commands::seed::run(),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
