//! Duplicate suppression and alternative-look backfill. Every surviving
//! recommendation carries a distinct item combination; when the assemblers
//! come up short, bounded top/bottom/shoes rotations fill the gap.

use std::collections::HashSet;

use rand::Rng;

use crate::domain::outfit::OutfitRecommendation;
use crate::domain::preferences::StyleRequest;

use super::assemble::{self, WardrobeSlots};

/// Per-slot cap on the backfill search. Keeps the combination walk small even
/// against a large filtered pool.
const ALTERNATIVE_POOL_DEPTH: usize = 8;

/// Drop outfits whose item combination has already been seen, preserving
/// first-wins order.
pub(crate) fn dedupe(outfits: Vec<OutfitRecommendation>) -> Vec<OutfitRecommendation> {
    let mut seen = HashSet::new();
    outfits
        .into_iter()
        .filter(|outfit| seen.insert(outfit.combination_key()))
        .collect()
}

/// Top up `outfits` to `count` with unseen top/bottom/shoes combinations.
/// Alternatives carry a randomized confidence in `[0.80, 0.90)` so reruns with
/// different seeds shuffle their ranking below the named looks.
pub(crate) fn fill_alternatives(
    slots: &WardrobeSlots<'_>,
    request: &StyleRequest,
    outfits: &mut Vec<OutfitRecommendation>,
    count: usize,
    rng: &mut impl Rng,
) {
    if outfits.len() >= count || !slots.has_base_slots() {
        return;
    }

    let mut seen: HashSet<String> = outfits.iter().map(|o| o.combination_key()).collect();
    let mut serial = outfits.len();

    for top in slots.tops.iter().take(ALTERNATIVE_POOL_DEPTH) {
        for bottom in slots.bottoms.iter().take(ALTERNATIVE_POOL_DEPTH) {
            for shoes in slots.shoes.iter().take(ALTERNATIVE_POOL_DEPTH) {
                if outfits.len() >= count {
                    return;
                }
                let confidence = 0.80 + rng.gen_range(0.0..0.10);
                serial += 1;
                let note = format!(
                    "A fresh take pairing the {} with {}.",
                    top.name.to_lowercase(),
                    bottom.name.to_lowercase()
                );
                let analysis = crate::domain::outfit::StyleAnalysis {
                    body_fit: format!("Comfortable proportions for a {} frame.", request.body_type_label.trim()),
                    color_harmony: format!("{} keeps the palette easy to wear.", top.primary_color()),
                    style_coherence: "An unforced mix drawn from the same wardrobe.".to_string(),
                    occasion_match: "Flexible enough to suit the occasion.".to_string(),
                };
                let Some(candidate) = assemble::outfit(
                    request,
                    &format!("Alternative Style {serial}"),
                    confidence,
                    note,
                    &["alternative", "versatile"],
                    analysis,
                    vec![top, bottom, shoes],
                ) else {
                    serial -= 1;
                    continue;
                };
                if seen.insert(candidate.combination_key()) {
                    outfits.push(candidate);
                } else {
                    serial -= 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;

    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::preferences::UserPreferences;
    use crate::stylist::budget::BudgetTier;
    use crate::stylist::filter::filter_candidates;

    fn request(budget: i64, occasion: &str) -> StyleRequest {
        UserPreferences {
            occasion: occasion.to_string(),
            budget: Decimal::new(budget, 0),
            ..UserPreferences::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn dedupe_keeps_first_of_each_combination() {
        let catalog = Catalog::builtin();
        let request = request(150, "casual");
        let band = BudgetTier::from_budget(request.budget).price_band(request.budget);
        let candidates = filter_candidates(&catalog, &request, &band);
        let slots = WardrobeSlots::group(&candidates);
        let mut outfits = assemble::casual_outfits(&slots, &request);
        outfits.extend(assemble::casual_outfits(&slots, &request));
        assert_eq!(outfits.len(), 2);
        let unique = dedupe(outfits);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].look_name, "Effortless Weekend");
    }

    #[test]
    fn alternatives_fill_up_to_count_with_unique_combinations() {
        let catalog = Catalog::builtin();
        let request = request(150, "casual");
        let band = BudgetTier::from_budget(request.budget).price_band(request.budget);
        let candidates = filter_candidates(&catalog, &request, &band);
        let slots = WardrobeSlots::group(&candidates);
        let mut outfits = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);
        fill_alternatives(&slots, &request, &mut outfits, 5, &mut rng);
        assert_eq!(outfits.len(), 5);
        let mut keys: Vec<_> = outfits.iter().map(|o| o.combination_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 5);
        for outfit in &outfits {
            assert!(outfit.confidence >= 0.80 && outfit.confidence < 0.90);
            assert!(outfit.total_price <= request.budget);
        }
    }
}
