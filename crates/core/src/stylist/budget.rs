//! Budget tier classification and per-item price bands.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share of the total budget a single garment may consume.
const PER_ITEM_BUDGET_SHARE: Decimal = Decimal::from_parts(60, 0, 0, false, 2);

/// Spending tier derived from the total outfit budget. Tier boundaries are
/// half-open: a budget sitting exactly on a boundary belongs to the higher
/// tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    UltraBudget,
    BudgetFriendly,
    MidRange,
    Premium,
    Luxury,
    UltraLuxury,
}

impl BudgetTier {
    pub fn from_budget(budget: Decimal) -> Self {
        if budget < Decimal::new(50, 0) {
            BudgetTier::UltraBudget
        } else if budget < Decimal::new(100, 0) {
            BudgetTier::BudgetFriendly
        } else if budget < Decimal::new(300, 0) {
            BudgetTier::MidRange
        } else if budget < Decimal::new(600, 0) {
            BudgetTier::Premium
        } else if budget < Decimal::new(1200, 0) {
            BudgetTier::Luxury
        } else {
            BudgetTier::UltraLuxury
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::UltraBudget => "ultra budget",
            BudgetTier::BudgetFriendly => "budget friendly",
            BudgetTier::MidRange => "mid range",
            BudgetTier::Premium => "premium",
            BudgetTier::Luxury => "luxury",
            BudgetTier::UltraLuxury => "ultra luxury",
        }
    }

    /// Per-item price band for this tier. Low tiers carry no floor so
    /// essentials always qualify. The ceiling is the tier cap or the
    /// budget-share cap, whichever is tighter; the top tier has no cap of its
    /// own, so only the share cap bounds it.
    pub fn price_band(&self, budget: Decimal) -> PriceBand {
        let (min, cap) = match self {
            BudgetTier::UltraBudget => (Decimal::ZERO, Some(Decimal::new(30, 0))),
            BudgetTier::BudgetFriendly => (Decimal::ZERO, Some(Decimal::new(60, 0))),
            BudgetTier::MidRange => (Decimal::new(20, 0), Some(Decimal::new(120, 0))),
            BudgetTier::Premium => (Decimal::new(40, 0), Some(Decimal::new(250, 0))),
            BudgetTier::Luxury => (Decimal::new(80, 0), Some(Decimal::new(500, 0))),
            BudgetTier::UltraLuxury => (Decimal::new(150, 0), None),
        };
        let share_cap = budget * PER_ITEM_BUDGET_SHARE;
        let max = cap.map_or(share_cap, |cap| cap.min(share_cap));
        PriceBand { min, max }
    }
}

/// Inclusive per-item price window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceBand {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceBand {
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_half_open() {
        assert_eq!(BudgetTier::from_budget(Decimal::new(49, 0)), BudgetTier::UltraBudget);
        assert_eq!(BudgetTier::from_budget(Decimal::new(50, 0)), BudgetTier::BudgetFriendly);
        assert_eq!(BudgetTier::from_budget(Decimal::new(80, 0)), BudgetTier::BudgetFriendly);
        assert_eq!(BudgetTier::from_budget(Decimal::new(250, 0)), BudgetTier::MidRange);
        assert_eq!(BudgetTier::from_budget(Decimal::new(600, 0)), BudgetTier::Luxury);
        assert_eq!(BudgetTier::from_budget(Decimal::new(5000, 0)), BudgetTier::UltraLuxury);
    }

    #[test]
    fn tiers_never_decrease_as_the_budget_grows() {
        let mut previous = BudgetTier::UltraBudget;
        for dollars in 1..=2000 {
            let tier = BudgetTier::from_budget(Decimal::new(dollars, 0));
            assert!(tier >= previous, "tier dropped from {previous:?} to {tier:?} at ${dollars}");
            previous = tier;
        }
    }

    #[test]
    fn band_cap_is_limited_by_budget_share() {
        // Luxury tier caps at $500, but 60% of a $700 budget is $420.
        let band = BudgetTier::Luxury.price_band(Decimal::new(700, 0));
        assert_eq!(band.min, Decimal::new(80, 0));
        assert_eq!(band.max, Decimal::new(420, 0));
        assert!(band.contains(Decimal::new(420, 0)));
        assert!(!band.contains(Decimal::new(421, 0)));
    }

    #[test]
    fn top_tier_still_enforces_the_budget_share() {
        // No tier cap above $1200, so 60% of budget is the only ceiling.
        let band = BudgetTier::UltraLuxury.price_band(Decimal::new(1200, 0));
        assert_eq!(band.min, Decimal::new(150, 0));
        assert_eq!(band.max, Decimal::new(720, 0));
        assert!(band.contains(Decimal::new(720, 0)));
        assert!(!band.contains(Decimal::new(780, 0)));
        assert!(!band.contains(Decimal::new(895, 0)));

        let roomy = BudgetTier::UltraLuxury.price_band(Decimal::new(5000, 0));
        assert_eq!(roomy.max, Decimal::new(3000, 0));
        assert!(!roomy.contains(Decimal::new(149, 0)));
    }
}
