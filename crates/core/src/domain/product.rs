use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub String);

/// Garment slot an item occupies inside an assembled outfit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Top,
    Bottom,
    Shoes,
    Outerwear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Shirt,
    TShirt,
    Polo,
    Sweater,
    Hoodie,
    Blazer,
    Jacket,
    Coat,
    Pants,
    Jeans,
    Shorts,
    Joggers,
    Shoes,
    Kurta,
}

impl ProductKind {
    /// Slot this kind fills when composing an outfit. Kurtas occupy the top
    /// slot but only the ethnic assembler reaches for them.
    pub fn slot(&self) -> Slot {
        match self {
            Self::Shirt | Self::TShirt | Self::Polo | Self::Sweater | Self::Hoodie | Self::Kurta => {
                Slot::Top
            }
            Self::Pants | Self::Jeans | Self::Shorts | Self::Joggers => Slot::Bottom,
            Self::Shoes => Slot::Shoes,
            Self::Blazer | Self::Jacket | Self::Coat => Slot::Outerwear,
        }
    }

    /// Lowercase display form used when templating style notes.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shirt => "shirt",
            Self::TShirt => "t-shirt",
            Self::Polo => "polo",
            Self::Sweater => "sweater",
            Self::Hoodie => "hoodie",
            Self::Blazer => "blazer",
            Self::Jacket => "jacket",
            Self::Coat => "coat",
            Self::Pants => "pants",
            Self::Jeans => "jeans",
            Self::Shorts => "shorts",
            Self::Joggers => "joggers",
            Self::Shoes => "shoes",
            Self::Kurta => "kurta",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Casual,
    Formal,
    Activewear,
    Ethnic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    White,
    Gray,
    Charcoal,
    Navy,
    Blue,
    LightBlue,
    Brown,
    Tan,
    Beige,
    Cream,
    Camel,
    Olive,
    Green,
    Burgundy,
}

impl Color {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Charcoal => "charcoal",
            Self::Navy => "navy",
            Self::Blue => "blue",
            Self::LightBlue => "light blue",
            Self::Brown => "brown",
            Self::Tan => "tan",
            Self::Beige => "beige",
            Self::Cream => "cream",
            Self::Camel => "camel",
            Self::Olive => "olive",
            Self::Green => "green",
            Self::Burgundy => "burgundy",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Cotton,
    Wool,
    Polyester,
    Linen,
    Denim,
    Leather,
    Suede,
    Silk,
    Cashmere,
    Acrylic,
}

/// Wearable season. `All` is the catalog sentinel for season-agnostic items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    Casual,
    Business,
    BusinessCasual,
    Formal,
    Weekend,
    NightOut,
    Beach,
    Sport,
    Wedding,
    Ethnic,
}

/// Body build classification. `All` is the catalog sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    Slim,
    Athletic,
    Average,
    Large,
    All,
}

/// Skin tone classification. `All` is the catalog sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinTone {
    Fair,
    Medium,
    Olive,
    Deep,
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitType {
    Slim,
    Regular,
    Relaxed,
    Athletic,
}

/// A catalog garment. Immutable for the life of the program: the catalog is
/// built once and only ever filtered or read afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
    pub original_price: Decimal,
    pub category: ProductCategory,
    pub kind: ProductKind,
    pub colors: Vec<Color>,
    pub materials: Vec<Material>,
    pub seasons: Vec<Season>,
    pub occasions: Vec<Occasion>,
    pub body_types: Vec<BodyType>,
    pub skin_tones: Vec<SkinTone>,
    pub fit: FitType,
    pub description: String,
    pub image_url: String,
    pub rating: f32,
    pub reviews: u32,
    pub in_stock: bool,
    pub purchase_url: String,
    pub tags: Vec<String>,
}

impl Product {
    pub fn suits_body_type(&self, body_type: BodyType) -> bool {
        self.body_types.contains(&body_type) || self.body_types.contains(&BodyType::All)
    }

    pub fn suits_skin_tone(&self, skin_tone: SkinTone) -> bool {
        self.skin_tones.contains(&skin_tone) || self.skin_tones.contains(&SkinTone::All)
    }

    pub fn suits_season(&self, season: Season) -> bool {
        season == Season::All
            || self.seasons.contains(&season)
            || self.seasons.contains(&Season::All)
    }

    pub fn suits_occasion(&self, occasion: Occasion) -> bool {
        self.occasions.contains(&occasion)
    }

    /// First listed color as a lowercase display string, "neutral" when the
    /// entry carries none.
    pub fn primary_color(&self) -> &'static str {
        self.colors.first().map(Color::label).unwrap_or("neutral")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with(body_types: Vec<BodyType>, seasons: Vec<Season>) -> Product {
        Product {
            id: ProductId("test-001".to_string()),
            name: "Test Shirt".to_string(),
            brand: "Generic".to_string(),
            price: Decimal::new(2999, 2),
            original_price: Decimal::new(2999, 2),
            category: ProductCategory::Casual,
            kind: ProductKind::Shirt,
            colors: vec![Color::LightBlue],
            materials: vec![Material::Cotton],
            seasons,
            occasions: vec![Occasion::Casual],
            body_types,
            skin_tones: vec![SkinTone::All],
            fit: FitType::Regular,
            description: String::new(),
            image_url: String::new(),
            rating: 4.0,
            reviews: 10,
            in_stock: true,
            purchase_url: String::new(),
            tags: vec![],
        }
    }

    #[test]
    fn sentinel_body_type_matches_every_request() {
        let product = product_with(vec![BodyType::All], vec![Season::All]);
        assert!(product.suits_body_type(BodyType::Slim));
        assert!(product.suits_body_type(BodyType::Large));
    }

    #[test]
    fn explicit_body_type_list_excludes_others() {
        let product = product_with(vec![BodyType::Athletic], vec![Season::All]);
        assert!(product.suits_body_type(BodyType::Athletic));
        assert!(!product.suits_body_type(BodyType::Large));
    }

    #[test]
    fn all_season_request_accepts_seasonal_items() {
        let product = product_with(vec![BodyType::All], vec![Season::Winter]);
        assert!(product.suits_season(Season::All));
        assert!(product.suits_season(Season::Winter));
        assert!(!product.suits_season(Season::Summer));
    }

    #[test]
    fn primary_color_falls_back_to_neutral() {
        let mut product = product_with(vec![BodyType::All], vec![Season::All]);
        assert_eq!(product.primary_color(), "light blue");
        product.colors.clear();
        assert_eq!(product.primary_color(), "neutral");
    }
}
