use std::str::FromStr;

use clap::Args;
use rust_decimal::Decimal;

use crate::commands::CommandResult;
use lookbook_core::config::{AppConfig, LoadOptions};
use lookbook_core::{BudgetTier, Catalog, StylistEngine, UserPreferences};

#[derive(Args, Debug)]
pub struct RecommendArgs {
    #[arg(long, help = "Occasion, e.g. business, casual, wedding, date-night")]
    pub occasion: String,
    #[arg(long, help = "Total outfit budget, e.g. 700 or 89.99")]
    pub budget: String,
    #[arg(long, default_value = "average", help = "Body type, e.g. slim, athletic, average, large")]
    pub body_type: String,
    #[arg(long, default_value = "medium", help = "Skin tone, e.g. fair, medium, olive, deep")]
    pub skin_tone: String,
    #[arg(long, default_value = "all", help = "Season, e.g. spring, summer, fall, winter")]
    pub season: String,
    #[arg(long, default_value = "unspecified", help = "Gender used in look descriptions")]
    pub gender: String,
    #[arg(
        long,
        default_value = "adult",
        help = "Age group, e.g. teen, young-adult, adult, mature, senior"
    )]
    pub age_group: String,
    #[arg(long, help = "Number of outfits to return (defaults to the configured count)")]
    pub count: Option<usize>,
    #[arg(long, help = "RNG seed for reproducible output")]
    pub seed: Option<u64>,
    #[arg(long, help = "Emit the full style report as JSON")]
    pub json: bool,
}

pub fn run(args: &RecommendArgs) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "recommend",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let budget = match Decimal::from_str(args.budget.trim()) {
        Ok(budget) => budget,
        Err(error) => {
            return CommandResult::failure(
                "recommend",
                "invalid_budget",
                format!("could not parse budget `{}`: {error}", args.budget),
                2,
            );
        }
    };

    let preferences = UserPreferences {
        gender: args.gender.clone(),
        age_group: args.age_group.clone(),
        skin_tone: args.skin_tone.clone(),
        body_type: args.body_type.clone(),
        occasion: args.occasion.clone(),
        season: args.season.clone(),
        budget,
        ..UserPreferences::default()
    };

    let request = match preferences.validate() {
        Ok(request) => request,
        Err(error) => {
            return CommandResult::failure("recommend", "invalid_preferences", error.to_string(), 2);
        }
    };

    let mut engine = match args.seed.or(config.stylist.rng_seed) {
        Some(seed) => StylistEngine::with_seed(Catalog::builtin(), seed),
        None => StylistEngine::new(Catalog::builtin()),
    };

    let count = args.count.unwrap_or(config.stylist.default_count).clamp(1, 20);
    let report = engine.recommend(&request, count);

    if args.json {
        let output = serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!("{{\"error\":\"report serialization failed: {error}\"}}")
        });
        return CommandResult { exit_code: 0, output };
    }

    let tier = BudgetTier::from_budget(budget);
    let mut lines = vec![format!(
        "{} outfits for {} (budget ${budget}, {} tier)",
        report.outfits.len(),
        request.occasion_label,
        tier.label()
    )];
    for outfit in &report.outfits {
        lines.push(format!(
            "  - {}: ${} (confidence {:.2})",
            outfit.look_name, outfit.total_price, outfit.confidence
        ));
        for item in &outfit.items {
            lines.push(format!("      {} {} (${})", item.brand, item.name, item.price));
        }
    }

    CommandResult::success("recommend", lines.join("\n"))
}
