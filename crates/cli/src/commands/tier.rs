use std::str::FromStr;

use rust_decimal::Decimal;

use crate::commands::CommandResult;
use lookbook_core::BudgetTier;

pub fn run(budget_raw: &str) -> CommandResult {
    let budget = match Decimal::from_str(budget_raw.trim()) {
        Ok(budget) => budget,
        Err(error) => {
            return CommandResult::failure(
                "tier",
                "invalid_budget",
                format!("could not parse budget `{budget_raw}`: {error}"),
                2,
            );
        }
    };

    if budget <= Decimal::ZERO {
        return CommandResult::failure(
            "tier",
            "invalid_budget",
            "budget must be a positive amount",
            2,
        );
    }

    let tier = BudgetTier::from_budget(budget);
    let band = tier.price_band(budget);

    CommandResult::success(
        "tier",
        format!(
            "${budget} shops the {} tier (per-item band ${} to ${})",
            tier.label(),
            band.min,
            band.max
        ),
    )
}
