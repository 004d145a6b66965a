use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::analysis::AnalysisResult;
use crate::domain::product::Product;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutfitId(pub String);

/// The four free-text rationale strings attached to every recommendation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleAnalysis {
    pub body_fit: String,
    pub color_harmony: String,
    pub style_coherence: String,
    pub occasion_match: String,
}

/// One assembled look. `total_price` is always the exact sum of the item
/// prices and never exceeds the budget echoed alongside it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    pub id: OutfitId,
    pub look_name: String,
    pub items: Vec<Product>,
    pub total_price: Decimal,
    pub confidence: f64,
    pub style_note: String,
    pub occasion: String,
    pub weather: String,
    pub season: String,
    pub age_group: String,
    pub gender: String,
    pub body_type: String,
    pub budget: Decimal,
    pub tags: Vec<String>,
    pub analysis: StyleAnalysis,
}

impl OutfitRecommendation {
    /// Canonical identity of the item combination: sorted item IDs joined.
    /// Two outfits with the same key are considered duplicates.
    pub fn combination_key(&self) -> String {
        let mut ids: Vec<&str> = self.items.iter().map(|item| item.id.0.as_str()).collect();
        ids.sort_unstable();
        ids.join("-")
    }
}

/// Full engine output for one request: the simulated analysis payload plus
/// the ranked outfit list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StyleReport {
    pub analysis: AnalysisResult,
    pub outfits: Vec<OutfitRecommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::{
        BodyType, Color, FitType, Material, Occasion, ProductCategory, ProductId, ProductKind,
        Season, SkinTone,
    };

    fn item(id: &str) -> Product {
        Product {
            id: ProductId(id.to_string()),
            name: id.to_string(),
            brand: "Generic".to_string(),
            price: Decimal::new(1000, 2),
            original_price: Decimal::new(1000, 2),
            category: ProductCategory::Casual,
            kind: ProductKind::Shirt,
            colors: vec![Color::White],
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
    fn combination_key_is_order_independent() {
        let mut outfit = OutfitRecommendation {
            id: OutfitId("o-1".to_string()),
            look_name: "Test".to_string(),
            items: vec![item("b"), item("a"), item("c")],
            total_price: Decimal::new(3000, 2),
            confidence: 0.8,
            style_note: String::new(),
            occasion: String::new(),
            weather: String::new(),
            season: String::new(),
            age_group: String::new(),
            gender: String::new(),
            body_type: String::new(),
            budget: Decimal::new(10000, 2),
            tags: vec![],
            analysis: StyleAnalysis {
                body_fit: String::new(),
                color_harmony: String::new(),
                style_coherence: String::new(),
                occasion_match: String::new(),
            },
        };
        let key = outfit.combination_key();
        outfit.items.reverse();
        assert_eq!(outfit.combination_key(), key);
        assert_eq!(key, "a-b-c");
    }
}
