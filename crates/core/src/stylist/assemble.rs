//! Per-occasion outfit assemblers. Each assembler composes a small number of
//! named looks from the slot-grouped candidate pool; combinations that would
//! blow the budget are discarded rather than trimmed.

use rust_decimal::Decimal;

use crate::domain::outfit::{OutfitId, OutfitRecommendation, StyleAnalysis};
use crate::domain::preferences::StyleRequest;
use crate::domain::product::{Occasion, Product, ProductKind, Slot};

pub(crate) const CONFIDENCE_EXECUTIVE: f64 = 0.95;
pub(crate) const CONFIDENCE_POWER_BUSINESS: f64 = 0.98;
pub(crate) const CONFIDENCE_BUSINESS_CASUAL: f64 = 0.90;
pub(crate) const CONFIDENCE_WEEKEND: f64 = 0.88;
pub(crate) const CONFIDENCE_SMART_CASUAL: f64 = 0.85;
pub(crate) const CONFIDENCE_FORMAL: f64 = 0.93;
pub(crate) const CONFIDENCE_NIGHT_OUT: f64 = 0.87;
pub(crate) const CONFIDENCE_ETHNIC: f64 = 0.90;
pub(crate) const CONFIDENCE_BASIC_BASE: f64 = 0.80;
pub(crate) const CONFIDENCE_BASIC_STEP: f64 = 0.02;

/// Filtered candidates grouped by the slot they fill. Kurtas are split out of
/// the top pool so only the ethnic assembler draws on them.
pub(crate) struct WardrobeSlots<'a> {
    pub tops: Vec<&'a Product>,
    pub bottoms: Vec<&'a Product>,
    pub shoes: Vec<&'a Product>,
    pub outerwear: Vec<&'a Product>,
    pub ethnic_tops: Vec<&'a Product>,
}

impl<'a> WardrobeSlots<'a> {
    pub fn group(candidates: &[&'a Product]) -> Self {
        let mut slots = Self {
            tops: Vec::new(),
            bottoms: Vec::new(),
            shoes: Vec::new(),
            outerwear: Vec::new(),
            ethnic_tops: Vec::new(),
        };
        for product in candidates {
            if product.kind == ProductKind::Kurta {
                slots.ethnic_tops.push(product);
                continue;
            }
            match product.kind.slot() {
                Slot::Top => slots.tops.push(product),
                Slot::Bottom => slots.bottoms.push(product),
                Slot::Shoes => slots.shoes.push(product),
                Slot::Outerwear => slots.outerwear.push(product),
            }
        }
        slots
    }

    pub fn has_base_slots(&self) -> bool {
        !self.tops.is_empty() && !self.bottoms.is_empty() && !self.shoes.is_empty()
    }
}

/// Nth pool entry matching the occasion, falling back to plain position when
/// too few match. Returns `None` only for an empty pool.
fn pick<'a>(pool: &[&'a Product], occasion: Occasion, offset: usize) -> Option<&'a Product> {
    if let Some(product) = pool
        .iter()
        .filter(|p| p.suits_occasion(occasion))
        .nth(offset)
    {
        return Some(product);
    }
    pool.get(offset).or_else(|| pool.first()).copied()
}

/// Prefer a specific garment kind for the slot, then any occasion match, then
/// anything in the pool.
fn pick_kind<'a>(
    pool: &[&'a Product],
    kinds: &[ProductKind],
    occasion: Occasion,
) -> Option<&'a Product> {
    for kind in kinds {
        if let Some(product) = pool
            .iter()
            .find(|p| p.kind == *kind && p.suits_occasion(occasion))
        {
            return Some(product);
        }
    }
    for kind in kinds {
        if let Some(product) = pool.iter().find(|p| p.kind == *kind) {
            return Some(product);
        }
    }
    pick(pool, occasion, 0)
}

fn body_descriptor(request: &StyleRequest) -> &str {
    let label = request.body_type_label.trim();
    if label.is_empty() {
        "balanced"
    } else {
        label
    }
}

fn style_analysis(request: &StyleRequest, lead: &Product, coherence: &str) -> StyleAnalysis {
    StyleAnalysis {
        body_fit: format!(
            "Cut to flatter a {} build without clinging or swamping.",
            body_descriptor(request)
        ),
        color_harmony: format!(
            "{} tones sit comfortably against your complexion.",
            lead.primary_color()
        ),
        style_coherence: coherence.to_string(),
        occasion_match: format!(
            "Every piece reads appropriate for {}.",
            display_occasion(request)
        ),
    }
}

fn display_occasion(request: &StyleRequest) -> &str {
    let label = request.occasion_label.trim();
    if label.is_empty() {
        "everyday wear"
    } else {
        label
    }
}

/// Sum the items, reject over-budget combinations, and stamp the shared
/// request echoes onto the recommendation. The id is derived from the item
/// combination so identical looks carry identical ids across runs.
pub(crate) fn outfit(
    request: &StyleRequest,
    look_name: &str,
    confidence: f64,
    style_note: String,
    tags: &[&str],
    analysis: StyleAnalysis,
    items: Vec<&Product>,
) -> Option<OutfitRecommendation> {
    let total_price: Decimal = items.iter().map(|item| item.price).sum();
    if total_price > request.budget {
        return None;
    }

    let mut ids: Vec<&str> = items.iter().map(|item| item.id.0.as_str()).collect();
    ids.sort_unstable();

    Some(OutfitRecommendation {
        id: OutfitId(format!("look-{}", ids.join("-"))),
        look_name: look_name.to_string(),
        items: items.into_iter().cloned().collect(),
        total_price,
        confidence,
        style_note,
        occasion: request.occasion_label.clone(),
        weather: request.weather.clone(),
        season: request.season_label.clone(),
        age_group: request.age_group_label.clone(),
        gender: request.gender.clone(),
        body_type: request.body_type_label.clone(),
        budget: request.budget,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        analysis,
    })
}

pub(crate) fn business_outfits(
    slots: &WardrobeSlots<'_>,
    request: &StyleRequest,
) -> Vec<OutfitRecommendation> {
    let mut outfits = Vec::new();

    if let (Some(top), Some(bottom), Some(shoes)) = (
        pick(&slots.tops, Occasion::Business, 0),
        pick(&slots.bottoms, Occasion::Business, 0),
        pick(&slots.shoes, Occasion::Business, 0),
    ) {
        let note = format!(
            "A commanding boardroom look anchored by a {} {} and sharp {}.",
            top.primary_color(),
            top.kind.label(),
            bottom.kind.label()
        );
        let analysis = style_analysis(
            request,
            top,
            "Tailored pieces in a restrained palette read decisive and polished.",
        );
        outfits.extend(outfit(
            request,
            "Executive Professional",
            CONFIDENCE_EXECUTIVE,
            note,
            &["professional", "executive", "polished"],
            analysis,
            vec![top, bottom, shoes],
        ));
    }

    let blazer = slots
        .outerwear
        .iter()
        .find(|p| p.kind == ProductKind::Blazer)
        .copied();
    if let (Some(blazer), Some(top), Some(bottom), Some(shoes)) = (
        blazer,
        pick(&slots.tops, Occasion::Business, 1),
        pick(&slots.bottoms, Occasion::Business, 0),
        pick(&slots.shoes, Occasion::Business, 0),
    ) {
        let note = format!(
            "Layering a {} {} over the shirt turns a solid office look into a statement.",
            blazer.primary_color(),
            blazer.kind.label()
        );
        let analysis = style_analysis(
            request,
            blazer,
            "The structured outer layer pulls the whole outfit into focus.",
        );
        outfits.extend(outfit(
            request,
            "Power Business",
            CONFIDENCE_POWER_BUSINESS,
            note,
            &["professional", "structured", "statement"],
            analysis,
            vec![top, bottom, shoes, blazer],
        ));
    }

    outfits
}

pub(crate) fn business_casual_outfits(
    slots: &WardrobeSlots<'_>,
    request: &StyleRequest,
) -> Vec<OutfitRecommendation> {
    let mut outfits = Vec::new();
    if let (Some(top), Some(bottom), Some(shoes)) = (
        pick(&slots.tops, Occasion::BusinessCasual, 0),
        pick(&slots.bottoms, Occasion::BusinessCasual, 0),
        pick(&slots.shoes, Occasion::BusinessCasual, 0),
    ) {
        let note = format!(
            "Relaxed enough for the open office, sharp enough for a client drop-in: {} {} with {}.",
            top.primary_color(),
            top.kind.label(),
            bottom.name.to_lowercase()
        );
        let analysis = style_analysis(
            request,
            top,
            "Soft tailoring keeps the look professional without stiffness.",
        );
        outfits.extend(outfit(
            request,
            "Modern Business Casual",
            CONFIDENCE_BUSINESS_CASUAL,
            note,
            &["business casual", "versatile", "modern"],
            analysis,
            vec![top, bottom, shoes],
        ));
    }
    outfits
}

pub(crate) fn casual_outfits(
    slots: &WardrobeSlots<'_>,
    request: &StyleRequest,
) -> Vec<OutfitRecommendation> {
    let mut outfits = Vec::new();
    if let (Some(top), Some(bottom), Some(shoes)) = (
        pick_kind(
            &slots.tops,
            &[ProductKind::TShirt, ProductKind::Hoodie],
            Occasion::Casual,
        ),
        pick_kind(
            &slots.bottoms,
            &[ProductKind::Jeans, ProductKind::Joggers, ProductKind::Shorts],
            Occasion::Casual,
        ),
        pick(&slots.shoes, Occasion::Casual, 0),
    ) {
        let note = format!(
            "Easy pieces that still look considered: a {} {} with worn-in {}.",
            top.primary_color(),
            top.kind.label(),
            bottom.kind.label()
        );
        let analysis = style_analysis(
            request,
            top,
            "Relaxed fits layered in compatible casual textures.",
        );
        outfits.extend(outfit(
            request,
            "Effortless Weekend",
            CONFIDENCE_WEEKEND,
            note,
            &["casual", "comfortable", "weekend"],
            analysis,
            vec![top, bottom, shoes],
        ));
    }
    outfits
}

pub(crate) fn smart_casual_outfits(
    slots: &WardrobeSlots<'_>,
    request: &StyleRequest,
) -> Vec<OutfitRecommendation> {
    let mut outfits = Vec::new();
    if let (Some(top), Some(bottom), Some(shoes)) = (
        pick_kind(
            &slots.tops,
            &[ProductKind::Shirt, ProductKind::Sweater, ProductKind::Polo],
            Occasion::BusinessCasual,
        ),
        pick_kind(
            &slots.bottoms,
            &[ProductKind::Pants, ProductKind::Jeans],
            Occasion::BusinessCasual,
        ),
        pick(&slots.shoes, Occasion::BusinessCasual, 0),
    ) {
        let note = format!(
            "A step up from everyday casual: {} {} over {}.",
            top.primary_color(),
            top.kind.label(),
            bottom.name.to_lowercase()
        );
        let analysis = style_analysis(
            request,
            top,
            "Elevated basics that move between settings without a change.",
        );
        outfits.extend(outfit(
            request,
            "Sophisticated Casual",
            CONFIDENCE_SMART_CASUAL,
            note,
            &["smart casual", "refined", "versatile"],
            analysis,
            vec![top, bottom, shoes],
        ));
    }
    outfits
}

pub(crate) fn formal_outfits(
    slots: &WardrobeSlots<'_>,
    request: &StyleRequest,
) -> Vec<OutfitRecommendation> {
    let mut outfits = Vec::new();
    if let (Some(top), Some(bottom), Some(shoes)) = (
        pick(&slots.tops, Occasion::Formal, 0),
        pick(&slots.bottoms, Occasion::Formal, 0),
        pick(&slots.shoes, Occasion::Formal, 0),
    ) {
        let mut items = vec![top, bottom, shoes];
        if let Some(blazer) = slots
            .outerwear
            .iter()
            .find(|p| p.suits_occasion(Occasion::Formal))
        {
            items.push(blazer);
        }
        let note = format!(
            "Evening-ready formality: a crisp {} {} grounded by {}.",
            top.primary_color(),
            top.kind.label(),
            shoes.name.to_lowercase()
        );
        let analysis = style_analysis(
            request,
            top,
            "Formal staples in classic proportions, nothing loud.",
        );
        outfits.extend(outfit(
            request,
            "Black Tie Elegance",
            CONFIDENCE_FORMAL,
            note,
            &["formal", "elegant", "evening"],
            analysis,
            items,
        ));
    }
    outfits
}

pub(crate) fn night_out_outfits(
    slots: &WardrobeSlots<'_>,
    request: &StyleRequest,
) -> Vec<OutfitRecommendation> {
    let mut outfits = Vec::new();
    if let (Some(top), Some(bottom), Some(shoes)) = (
        pick(&slots.tops, Occasion::NightOut, 0),
        pick_kind(
            &slots.bottoms,
            &[ProductKind::Jeans, ProductKind::Pants],
            Occasion::NightOut,
        ),
        pick(&slots.shoes, Occasion::NightOut, 0),
    ) {
        let note = format!(
            "Dark, sleek and a little sharp: {} {} with {} for after hours.",
            top.primary_color(),
            top.kind.label(),
            bottom.name.to_lowercase()
        );
        let analysis = style_analysis(
            request,
            top,
            "A darker palette with one standout piece carries the evening.",
        );
        outfits.extend(outfit(
            request,
            "Night Out Style",
            CONFIDENCE_NIGHT_OUT,
            note,
            &["night out", "sleek", "evening"],
            analysis,
            vec![top, bottom, shoes],
        ));
    }
    outfits
}

pub(crate) fn ethnic_outfits(
    slots: &WardrobeSlots<'_>,
    request: &StyleRequest,
) -> Vec<OutfitRecommendation> {
    let mut outfits = Vec::new();
    if let (Some(kurta), Some(bottom)) = (
        slots.ethnic_tops.first().copied(),
        pick_kind(
            &slots.bottoms,
            &[ProductKind::Pants, ProductKind::Jeans],
            Occasion::Ethnic,
        ),
    ) {
        let note = format!(
            "Traditional elegance for the celebration: a {} {} paired with tailored {}.",
            kurta.primary_color(),
            kurta.kind.label(),
            bottom.kind.label()
        );
        let analysis = style_analysis(
            request,
            kurta,
            "Heritage silhouette balanced with a clean modern bottom.",
        );
        outfits.extend(outfit(
            request,
            "Traditional Ethnic",
            CONFIDENCE_ETHNIC,
            note,
            &["ethnic", "traditional", "festive"],
            analysis,
            vec![kurta, bottom],
        ));
    }
    outfits
}

/// Fallback when no occasion assembler produced anything: plain positional
/// top-bottom-shoes rotations named "Classic Style N".
pub(crate) fn basic_outfits(
    slots: &WardrobeSlots<'_>,
    request: &StyleRequest,
    count: usize,
) -> Vec<OutfitRecommendation> {
    let mut outfits = Vec::new();
    if !slots.has_base_slots() {
        return outfits;
    }
    for index in 0..count {
        let top = slots.tops[index % slots.tops.len()];
        let bottom = slots.bottoms[index % slots.bottoms.len()];
        let shoes = slots.shoes[index % slots.shoes.len()];
        let note = format!(
            "A dependable combination built around a {} {}.",
            top.primary_color(),
            top.kind.label()
        );
        let analysis = style_analysis(
            request,
            top,
            "Straightforward pieces that always work together.",
        );
        outfits.extend(outfit(
            request,
            &format!("Classic Style {}", index + 1),
            CONFIDENCE_BASIC_BASE + CONFIDENCE_BASIC_STEP * (index + 1) as f64,
            note,
            &["classic", "versatile"],
            analysis,
            vec![top, bottom, shoes],
        ));
    }
    outfits
}

#[cfg(test)]
mod tests {
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

    fn slots_for<'a>(catalog: &'a Catalog, request: &StyleRequest) -> Vec<&'a Product> {
        let band = BudgetTier::from_budget(request.budget).price_band(request.budget);
        filter_candidates(catalog, request, &band)
    }

    #[test]
    fn business_assembler_stays_under_budget() {
        let catalog = Catalog::builtin();
        let request = request(700, "business professional");
        let candidates = slots_for(&catalog, &request);
        let slots = WardrobeSlots::group(&candidates);
        let outfits = business_outfits(&slots, &request);
        assert!(!outfits.is_empty());
        for outfit in &outfits {
            assert!(outfit.total_price <= request.budget);
            let total: Decimal = outfit.items.iter().map(|i| i.price).sum();
            assert_eq!(outfit.total_price, total);
        }
    }

    #[test]
    fn executive_look_carries_expected_confidence() {
        let catalog = Catalog::builtin();
        let request = request(700, "business professional");
        let candidates = slots_for(&catalog, &request);
        let slots = WardrobeSlots::group(&candidates);
        let outfits = business_outfits(&slots, &request);
        let executive = outfits
            .iter()
            .find(|o| o.look_name == "Executive Professional")
            .expect("executive look missing");
        assert_eq!(executive.confidence, CONFIDENCE_EXECUTIVE);
        assert_eq!(executive.items.len(), 3);
    }

    #[test]
    fn ethnic_assembler_pairs_kurta_with_bottom() {
        let catalog = Catalog::builtin();
        let request = request(200, "wedding guest");
        let candidates = slots_for(&catalog, &request);
        let slots = WardrobeSlots::group(&candidates);
        let outfits = ethnic_outfits(&slots, &request);
        assert_eq!(outfits.len(), 1);
        assert_eq!(outfits[0].items.len(), 2);
        assert_eq!(outfits[0].items[0].kind, ProductKind::Kurta);
    }

    #[test]
    fn kurtas_never_land_in_the_regular_top_pool() {
        let catalog = Catalog::builtin();
        let request = request(200, "wedding guest");
        let candidates = slots_for(&catalog, &request);
        let slots = WardrobeSlots::group(&candidates);
        assert!(slots.tops.iter().all(|p| p.kind != ProductKind::Kurta));
        assert!(!slots.ethnic_tops.is_empty());
    }

    #[test]
    fn over_budget_combination_is_discarded() {
        let catalog = Catalog::builtin();
        let request = request(700, "business professional");
        let candidates = slots_for(&catalog, &request);
        let slots = WardrobeSlots::group(&candidates);
        let poor = StyleRequest {
            budget: Decimal::new(10, 0),
            ..request
        };
        assert!(business_outfits(&slots, &poor).is_empty());
    }

    #[test]
    fn basic_outfits_step_confidence_upward() {
        let catalog = Catalog::builtin();
        let request = request(120, "casual");
        let candidates = slots_for(&catalog, &request);
        let slots = WardrobeSlots::group(&candidates);
        let outfits = basic_outfits(&slots, &request, 3);
        assert!(!outfits.is_empty());
        assert!((outfits[0].confidence - 0.82).abs() < 1e-9);
    }
}
