//! End-to-end properties of the recommendation pipeline against the built-in
//! catalog, plus a tiny hand-built catalog exercising the degenerate case.

use rust_decimal::Decimal;

use lookbook_core::{
    BodyType, BudgetTier, Catalog, Color, FitType, Material, Occasion, Product, ProductCategory,
    ProductId, ProductKind, Season, SkinTone, StyleRequest, StylistEngine, UserPreferences,
};

fn request(budget: i64, occasion: &str) -> StyleRequest {
    UserPreferences {
        occasion: occasion.to_string(),
        budget: Decimal::new(budget, 0),
        body_type: "athletic".to_string(),
        skin_tone: "medium".to_string(),
        season: "fall".to_string(),
        gender: "male".to_string(),
        age_group: "adult".to_string(),
        ..UserPreferences::default()
    }
    .validate()
    .expect("valid request")
}

#[test]
fn budget_tier_anchors() {
    assert_eq!(BudgetTier::from_budget(Decimal::new(80, 0)), BudgetTier::BudgetFriendly);
    assert_eq!(BudgetTier::from_budget(Decimal::new(250, 0)), BudgetTier::MidRange);
    assert_eq!(BudgetTier::from_budget(Decimal::new(5000, 0)), BudgetTier::UltraLuxury);
}

#[test]
fn totals_are_exact_sums_and_never_exceed_budget() {
    let mut engine = StylistEngine::with_seed(Catalog::builtin(), 3);
    for (budget, occasion) in [
        (60, "casual"),
        (150, "business casual"),
        (700, "business professional"),
        (250, "date night"),
        (5000, "formal"),
    ] {
        let request = request(budget, occasion);
        for outfit in engine.outfits(&request, 5) {
            let total: Decimal = outfit.items.iter().map(|item| item.price).sum();
            assert_eq!(outfit.total_price, total, "{occasion}: total mismatch");
            assert!(outfit.total_price <= request.budget, "{occasion}: over budget");
            assert!(!outfit.items.is_empty());
        }
    }
}

#[test]
fn results_are_diverse_and_capped_at_count() {
    let mut engine = StylistEngine::with_seed(Catalog::builtin(), 3);
    let outfits = engine.outfits(&request(150, "casual"), 4);
    assert!(outfits.len() <= 4);
    assert!(!outfits.is_empty());
    let mut keys: Vec<String> = outfits.iter().map(|o| o.combination_key()).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), outfits.len(), "duplicate item combinations survived");
}

#[test]
fn no_single_item_exceeds_the_budget_share_at_the_top_tier() {
    // $1200 sits in the top tier, which has no tier cap, so the 60% share
    // ($720) is the only per-item ceiling and must still hold.
    let mut engine = StylistEngine::with_seed(Catalog::builtin(), 7);
    let request = request(1200, "business professional");
    let share_cap = Decimal::new(720, 0);
    let outfits = engine.outfits(&request, 5);
    assert!(!outfits.is_empty());
    for outfit in &outfits {
        for item in &outfit.items {
            assert!(
                item.price <= share_cap,
                "{} at ${} exceeds the per-item budget share",
                item.name,
                item.price
            );
        }
    }
}

#[test]
fn business_request_at_seven_hundred_yields_executive_looks() {
    let mut engine = StylistEngine::with_seed(Catalog::builtin(), 3);
    let request = request(700, "business professional");
    let outfits = engine.outfits(&request, 5);
    let names: Vec<&str> = outfits.iter().map(|o| o.look_name.as_str()).collect();
    assert!(names.contains(&"Executive Professional"), "got {names:?}");
    assert!(names.contains(&"Power Business"), "got {names:?}");

    // The blazer look outranks everything else.
    assert_eq!(outfits[0].look_name, "Power Business");
    assert!((outfits[0].confidence - 0.98).abs() < 1e-9);
    assert!(outfits[0].items.iter().any(|i| i.kind == ProductKind::Blazer));
}

#[test]
fn unknown_occasion_still_produces_outfits() {
    let mut engine = StylistEngine::with_seed(Catalog::builtin(), 3);
    let outfits = engine.outfits(&request(250, "Moon Landing Gala"), 3);
    assert!(!outfits.is_empty(), "nonsense occasion should degrade to casual");
    for outfit in &outfits {
        assert!(outfit.total_price <= Decimal::new(250, 0));
    }
}

#[test]
fn same_seed_same_request_same_report() {
    let request = request(300, "night out");
    let left = StylistEngine::with_seed(Catalog::builtin(), 17).recommend(&request, 4);
    let right = StylistEngine::with_seed(Catalog::builtin(), 17).recommend(&request, 4);
    assert_eq!(left.outfits, right.outfits);
    assert_eq!(left.analysis, right.analysis);
}

#[test]
fn analysis_reflects_the_declared_attributes() {
    let request = request(700, "business professional");
    let report = StylistEngine::with_seed(Catalog::builtin(), 3).recommend(&request, 3);
    assert_eq!(report.analysis.body_type, BodyType::Athletic);
    assert_eq!(report.analysis.skin_tone, SkinTone::Medium);
    assert_eq!(report.analysis.estimated_age, 35);
    assert!(report.analysis.confidence >= 0.88 && report.analysis.confidence < 0.98);
}

fn item(id: &str, kind: ProductKind, price_cents: i64) -> Product {
    Product {
        id: ProductId(id.to_string()),
        name: id.to_string(),
        brand: "Generic".to_string(),
        price: Decimal::new(price_cents, 2),
        original_price: Decimal::new(price_cents, 2),
        category: ProductCategory::Casual,
        kind,
        colors: vec![Color::Navy],
        materials: vec![Material::Cotton],
        seasons: vec![Season::All],
        occasions: vec![Occasion::Casual],
        body_types: vec![BodyType::All],
        skin_tones: vec![SkinTone::All],
        fit: FitType::Regular,
        description: String::new(),
        image_url: String::new(),
        rating: 4.0,
        reviews: 1,
        in_stock: true,
        purchase_url: String::new(),
        tags: vec![],
    }
}

#[test]
fn single_combination_catalog_yields_exactly_one_outfit() {
    let catalog = Catalog::new(vec![
        item("only-top", ProductKind::TShirt, 25_00),
        item("only-bottom", ProductKind::Jeans, 35_00),
        item("only-shoes", ProductKind::Shoes, 45_00),
    ]);
    let mut engine = StylistEngine::with_seed(catalog, 1);
    let outfits = engine.outfits(&request(120, "casual"), 5);
    assert_eq!(outfits.len(), 1, "one possible combination, one outfit");
    assert_eq!(outfits[0].items.len(), 3);
    assert_eq!(outfits[0].total_price, Decimal::new(105_00, 2));
}

#[test]
fn empty_catalog_yields_no_outfits_but_still_analyzes() {
    let mut engine = StylistEngine::with_seed(Catalog::new(vec![]), 1);
    let report = engine.recommend(&request(120, "casual"), 3);
    assert!(report.outfits.is_empty());
    assert_eq!(report.analysis.body_type, BodyType::Athletic);
}
