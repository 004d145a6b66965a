//! Built-in garment seeds spanning all six price tiers and every outfit
//! slot. Materialized into owned [`Product`]s by [`super::Catalog::builtin`].

use crate::domain::product::{
    BodyType, Color, FitType, Material, Occasion, ProductCategory, ProductKind, Season, SkinTone,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ProductSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub brand: &'static str,
    pub price_cents: i64,
    pub original_price_cents: i64,
    pub category: ProductCategory,
    pub kind: ProductKind,
    pub colors: &'static [Color],
    pub materials: &'static [Material],
    pub seasons: &'static [Season],
    pub occasions: &'static [Occasion],
    pub body_types: &'static [BodyType],
    pub skin_tones: &'static [SkinTone],
    pub fit: FitType,
    pub description: &'static str,
    pub image_url: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub purchase_url: &'static str,
    pub tags: &'static [&'static str],
}

const ALL_BODIES: &[BodyType] = &[BodyType::All];
const ALL_TONES: &[SkinTone] = &[SkinTone::All];
const ALL_SEASONS: &[Season] = &[Season::All];
const COOL_SEASONS: &[Season] = &[Season::Fall, Season::Winter, Season::Spring];
const WARM_SEASONS: &[Season] = &[Season::Spring, Season::Summer];

pub(crate) const PRODUCT_SEEDS: &[ProductSeed] = &[
    // ---- ultra budget (under $30) -------------------------------------
    ProductSeed {
        id: "ultra-tshirt-001",
        name: "Basic White Cotton T-Shirt",
        brand: "H&M",
        price_cents: 12_99,
        original_price_cents: 15_99,
        category: ProductCategory::Casual,
        kind: ProductKind::TShirt,
        colors: &[Color::White],
        materials: &[Material::Cotton],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::Weekend],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Essential white cotton t-shirt for everyday wear.",
        image_url: "https://images.pexels.com/photos/1656684/pexels-photo-1656684.jpeg",
        rating: 4.2,
        reviews: 523,
        purchase_url: "https://www2.hm.com/en_us/productpage.0713996001.html",
        tags: &["basic", "essential", "affordable"],
    },
    ProductSeed {
        id: "ultra-tshirt-002",
        name: "Charcoal Crew Neck T-Shirt",
        brand: "Uniqlo",
        price_cents: 14_90,
        original_price_cents: 14_90,
        category: ProductCategory::Casual,
        kind: ProductKind::TShirt,
        colors: &[Color::Charcoal],
        materials: &[Material::Cotton],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::Weekend, Occasion::NightOut],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Supima cotton crew neck in a deep charcoal.",
        image_url: "https://images.pexels.com/photos/1192609/pexels-photo-1192609.jpeg",
        rating: 4.4,
        reviews: 341,
        purchase_url: "https://www.uniqlo.com/us/en/products/E455365-000/00",
        tags: &["basic", "layering", "affordable"],
    },
    ProductSeed {
        id: "ultra-shorts-001",
        name: "Gray Jersey Shorts",
        brand: "H&M",
        price_cents: 17_99,
        original_price_cents: 19_99,
        category: ProductCategory::Activewear,
        kind: ProductKind::Shorts,
        colors: &[Color::Gray],
        materials: &[Material::Cotton, Material::Polyester],
        seasons: WARM_SEASONS,
        occasions: &[Occasion::Casual, Occasion::Sport, Occasion::Beach],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Relaxed,
        description: "Lightweight jersey shorts for warm days.",
        image_url: "https://images.pexels.com/photos/1040945/pexels-photo-1040945.jpeg",
        rating: 4.0,
        reviews: 112,
        purchase_url: "https://www2.hm.com/en_us/productpage.0714032001.html",
        tags: &["sport", "summer", "affordable"],
    },
    ProductSeed {
        id: "ultra-shoes-001",
        name: "White Canvas Sneakers",
        brand: "H&M",
        price_cents: 24_99,
        original_price_cents: 29_99,
        category: ProductCategory::Casual,
        kind: ProductKind::Shoes,
        colors: &[Color::White],
        materials: &[Material::Cotton],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::Weekend, Occasion::Sport],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Basic white canvas sneakers for everyday wear.",
        image_url: "https://images.pexels.com/photos/1598505/pexels-photo-1598505.jpeg",
        rating: 4.0,
        reviews: 287,
        purchase_url: "https://www2.hm.com/en_us/productpage.0664587001.html",
        tags: &["casual", "sneakers", "affordable"],
    },
    ProductSeed {
        id: "ultra-jeans-001",
        name: "Classic Blue Denim Jeans",
        brand: "H&M",
        price_cents: 29_99,
        original_price_cents: 39_99,
        category: ProductCategory::Casual,
        kind: ProductKind::Jeans,
        colors: &[Color::Blue],
        materials: &[Material::Denim],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::Weekend],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Classic blue denim jeans with regular fit.",
        image_url: "https://images.pexels.com/photos/1484807/pexels-photo-1484807.jpeg",
        rating: 4.1,
        reviews: 412,
        purchase_url: "https://www2.hm.com/en_us/productpage.0685815016.html",
        tags: &["casual", "denim", "affordable"],
    },
    ProductSeed {
        id: "ultra-pants-001",
        name: "Black Chino Pants",
        brand: "H&M",
        price_cents: 29_99,
        original_price_cents: 34_99,
        category: ProductCategory::Casual,
        kind: ProductKind::Pants,
        colors: &[Color::Black],
        materials: &[Material::Cotton],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::BusinessCasual],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Black chino pants with slim fit.",
        image_url: "https://images.pexels.com/photos/1598507/pexels-photo-1598507.jpeg",
        rating: 4.2,
        reviews: 156,
        purchase_url: "https://www2.hm.com/en_us/productpage.0721500001.html",
        tags: &["casual", "business casual", "affordable"],
    },
    ProductSeed {
        id: "ultra-shirt-001",
        name: "Light Blue Cotton Shirt",
        brand: "H&M",
        price_cents: 24_99,
        original_price_cents: 29_99,
        category: ProductCategory::Casual,
        kind: ProductKind::Shirt,
        colors: &[Color::LightBlue],
        materials: &[Material::Cotton],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::BusinessCasual],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Light blue cotton shirt for casual and business casual wear.",
        image_url: "https://images.pexels.com/photos/297933/pexels-photo-297933.jpeg",
        rating: 4.3,
        reviews: 198,
        purchase_url: "https://www2.hm.com/en_us/productpage.0668120001.html",
        tags: &["casual", "business casual", "affordable"],
    },
    ProductSeed {
        id: "ultra-polo-001",
        name: "Navy Blue Polo Shirt",
        brand: "Uniqlo",
        price_cents: 29_90,
        original_price_cents: 29_90,
        category: ProductCategory::Casual,
        kind: ProductKind::Polo,
        colors: &[Color::Navy],
        materials: &[Material::Cotton],
        seasons: &[Season::Spring, Season::Summer, Season::Fall],
        occasions: &[Occasion::Casual, Occasion::Weekend, Occasion::BusinessCasual],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Navy blue polo shirt with regular fit.",
        image_url: "https://images.pexels.com/photos/1342609/pexels-photo-1342609.jpeg",
        rating: 4.5,
        reviews: 187,
        purchase_url: "https://www.uniqlo.com/us/en/products/E441605-000/00",
        tags: &["affordable", "business casual", "versatile"],
    },
    // ---- budget friendly ($30-$60) ------------------------------------
    ProductSeed {
        id: "budget-sweater-001",
        name: "Gray Crew Neck Sweater",
        brand: "Uniqlo",
        price_cents: 39_90,
        original_price_cents: 39_90,
        category: ProductCategory::Casual,
        kind: ProductKind::Sweater,
        colors: &[Color::Gray],
        materials: &[Material::Cotton, Material::Acrylic],
        seasons: COOL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::BusinessCasual],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Gray crew neck sweater made from cotton blend.",
        image_url: "https://images.pexels.com/photos/1232459/pexels-photo-1232459.jpeg",
        rating: 4.4,
        reviews: 167,
        purchase_url: "https://www.uniqlo.com/us/en/products/E444656-000/00",
        tags: &["winter", "layering", "versatile"],
    },
    ProductSeed {
        id: "budget-shirt-001",
        name: "White Oxford Button-Down",
        brand: "Gap",
        price_cents: 34_90,
        original_price_cents: 44_90,
        category: ProductCategory::Formal,
        kind: ProductKind::Shirt,
        colors: &[Color::White],
        materials: &[Material::Cotton],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Business, Occasion::BusinessCasual, Occasion::Formal],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Crisp white oxford that moves between office and dinner.",
        image_url: "https://images.pexels.com/photos/769733/pexels-photo-769733.jpeg",
        rating: 4.3,
        reviews: 264,
        purchase_url: "https://www.gap.com/browse/product.do?pid=440931012",
        tags: &["business", "professional", "versatile"],
    },
    ProductSeed {
        id: "budget-pants-001",
        name: "Navy Slim Chinos",
        brand: "Gap",
        price_cents: 39_99,
        original_price_cents: 49_99,
        category: ProductCategory::Casual,
        kind: ProductKind::Pants,
        colors: &[Color::Navy],
        materials: &[Material::Cotton],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::BusinessCasual, Occasion::Business, Occasion::Casual],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Navy chinos with a tapered leg and pressed finish.",
        image_url: "https://images.pexels.com/photos/1082529/pexels-photo-1082529.jpeg",
        rating: 4.2,
        reviews: 203,
        purchase_url: "https://www.gap.com/browse/product.do?pid=500091022",
        tags: &["business casual", "chinos", "versatile"],
    },
    ProductSeed {
        id: "budget-shoes-001",
        name: "Brown Casual Loafers",
        brand: "Uniqlo",
        price_cents: 59_90,
        original_price_cents: 69_90,
        category: ProductCategory::Casual,
        kind: ProductKind::Shoes,
        colors: &[Color::Brown],
        materials: &[Material::Leather],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::BusinessCasual],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Brown casual loafers for business casual wear.",
        image_url: "https://images.pexels.com/photos/267301/pexels-photo-267301.jpeg",
        rating: 4.1,
        reviews: 98,
        purchase_url: "https://www.uniqlo.com/us/en/products/E443210-000/00",
        tags: &["loafers", "business casual", "leather"],
    },
    ProductSeed {
        id: "budget-jeans-001",
        name: "Slim Dark Wash Jeans",
        brand: "Gap",
        price_cents: 49_90,
        original_price_cents: 59_90,
        category: ProductCategory::Casual,
        kind: ProductKind::Jeans,
        colors: &[Color::Navy],
        materials: &[Material::Denim],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::NightOut, Occasion::Weekend],
        body_types: &[BodyType::Slim, BodyType::Athletic, BodyType::Average],
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Dark wash denim that dresses up after hours.",
        image_url: "https://images.pexels.com/photos/603022/pexels-photo-603022.jpeg",
        rating: 4.4,
        reviews: 311,
        purchase_url: "https://www.gap.com/browse/product.do?pid=794710002",
        tags: &["night out", "denim", "slim"],
    },
    ProductSeed {
        id: "budget-hoodie-001",
        name: "Black Zip-Up Hoodie",
        brand: "H&M",
        price_cents: 34_99,
        original_price_cents: 39_99,
        category: ProductCategory::Activewear,
        kind: ProductKind::Hoodie,
        colors: &[Color::Black],
        materials: &[Material::Cotton, Material::Polyester],
        seasons: COOL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::Sport, Occasion::Weekend],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Relaxed,
        description: "Everyday zip hoodie with brushed interior.",
        image_url: "https://images.pexels.com/photos/1183266/pexels-photo-1183266.jpeg",
        rating: 4.0,
        reviews: 145,
        purchase_url: "https://www2.hm.com/en_us/productpage.0715624001.html",
        tags: &["sport", "layering", "casual"],
    },
    ProductSeed {
        id: "budget-joggers-001",
        name: "Heather Gray Joggers",
        brand: "Adidas",
        price_cents: 44_99,
        original_price_cents: 49_99,
        category: ProductCategory::Activewear,
        kind: ProductKind::Joggers,
        colors: &[Color::Gray],
        materials: &[Material::Cotton, Material::Polyester],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::Sport],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Relaxed,
        description: "Tapered fleece joggers with ribbed cuffs.",
        image_url: "https://images.pexels.com/photos/1552108/pexels-photo-1552108.jpeg",
        rating: 4.3,
        reviews: 221,
        purchase_url: "https://www.adidas.com/us/essentials-fleece-pants/HL2236.html",
        tags: &["sport", "comfort", "casual"],
    },
    ProductSeed {
        id: "budget-shoes-002",
        name: "Black Low-Top Sneakers",
        brand: "Adidas",
        price_cents: 44_90,
        original_price_cents: 54_90,
        category: ProductCategory::Casual,
        kind: ProductKind::Shoes,
        colors: &[Color::Black],
        materials: &[Material::Leather, Material::Polyester],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::NightOut, Occasion::Weekend],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Clean black low-tops that work day to night.",
        image_url: "https://images.pexels.com/photos/2529148/pexels-photo-2529148.jpeg",
        rating: 4.5,
        reviews: 402,
        purchase_url: "https://www.adidas.com/us/advantage-shoes/GZ5301.html",
        tags: &["sneakers", "night out", "versatile"],
    },
    ProductSeed {
        id: "budget-kurta-001",
        name: "Navy Cotton Kurta",
        brand: "FabIndia",
        price_cents: 45_00,
        original_price_cents: 55_00,
        category: ProductCategory::Ethnic,
        kind: ProductKind::Kurta,
        colors: &[Color::Navy],
        materials: &[Material::Cotton],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Ethnic, Occasion::Wedding],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Handloom cotton kurta with mandarin collar.",
        image_url: "https://images.pexels.com/photos/2235071/pexels-photo-2235071.jpeg",
        rating: 4.4,
        reviews: 87,
        purchase_url: "https://www.fabindia.com/men-kurtas",
        tags: &["ethnic", "traditional", "cultural"],
    },
    // ---- mid range ($60-$120) -----------------------------------------
    ProductSeed {
        id: "mid-shirt-001",
        name: "White Non-Iron Dress Shirt",
        brand: "Brooks Brothers",
        price_cents: 69_50,
        original_price_cents: 92_00,
        category: ProductCategory::Formal,
        kind: ProductKind::Shirt,
        colors: &[Color::White],
        materials: &[Material::Cotton],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Business, Occasion::Formal],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Non-iron broadcloth dress shirt with spread collar.",
        image_url: "https://images.pexels.com/photos/325876/pexels-photo-325876.jpeg",
        rating: 4.6,
        reviews: 334,
        purchase_url: "https://www.brooksbrothers.com/non-iron-dress-shirt",
        tags: &["business", "professional", "dress shirt"],
    },
    ProductSeed {
        id: "mid-shirt-002",
        name: "Burgundy Flannel Shirt",
        brand: "Gap",
        price_cents: 59_50,
        original_price_cents: 69_50,
        category: ProductCategory::Casual,
        kind: ProductKind::Shirt,
        colors: &[Color::Burgundy],
        materials: &[Material::Cotton],
        seasons: &[Season::Fall, Season::Winter],
        occasions: &[Occasion::Casual, Occasion::Weekend],
        body_types: ALL_BODIES,
        skin_tones: &[SkinTone::Fair, SkinTone::Medium, SkinTone::Olive],
        fit: FitType::Relaxed,
        description: "Brushed flannel in a deep burgundy check.",
        image_url: "https://images.pexels.com/photos/1043143/pexels-photo-1043143.jpeg",
        rating: 4.2,
        reviews: 129,
        purchase_url: "https://www.gap.com/browse/product.do?pid=480245012",
        tags: &["weekend", "flannel", "fall"],
    },
    ProductSeed {
        id: "mid-pants-001",
        name: "Charcoal Dress Pants",
        brand: "Dockers",
        price_cents: 79_99,
        original_price_cents: 89_99,
        category: ProductCategory::Formal,
        kind: ProductKind::Pants,
        colors: &[Color::Charcoal],
        materials: &[Material::Wool, Material::Polyester],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Business, Occasion::Formal],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Charcoal dress pants with a classic straight leg.",
        image_url: "https://images.pexels.com/photos/1300550/pexels-photo-1300550.jpeg",
        rating: 4.3,
        reviews: 186,
        purchase_url: "https://www.dockers.com/US/en_US/clothing/men/pants",
        tags: &["business", "professional", "dress pants"],
    },
    ProductSeed {
        id: "mid-pants-002",
        name: "Olive Stretch Chinos",
        brand: "Dockers",
        price_cents: 64_90,
        original_price_cents: 74_90,
        category: ProductCategory::Casual,
        kind: ProductKind::Pants,
        colors: &[Color::Olive],
        materials: &[Material::Cotton],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::BusinessCasual, Occasion::Casual],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Stretch chinos in a muted olive tone.",
        image_url: "https://images.pexels.com/photos/1598508/pexels-photo-1598508.jpeg",
        rating: 4.1,
        reviews: 142,
        purchase_url: "https://www.dockers.com/US/en_US/clothing/men/chinos",
        tags: &["business casual", "chinos", "versatile"],
    },
    ProductSeed {
        id: "mid-jeans-001",
        name: "511 Slim Fit Jeans",
        brand: "Levi's",
        price_cents: 69_50,
        original_price_cents: 69_50,
        category: ProductCategory::Casual,
        kind: ProductKind::Jeans,
        colors: &[Color::Blue],
        materials: &[Material::Denim],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::NightOut, Occasion::Weekend],
        body_types: &[BodyType::Slim, BodyType::Athletic, BodyType::Average],
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "The classic 511 slim with signature stretch.",
        image_url: "https://images.pexels.com/photos/1598509/pexels-photo-1598509.jpeg",
        rating: 4.6,
        reviews: 1287,
        purchase_url: "https://www.levi.com/US/en_US/apparel/clothing/bottoms/511-slim-fit-mens-jeans/p/045112407",
        tags: &["denim", "slim", "everyday"],
    },
    ProductSeed {
        id: "mid-shoes-001",
        name: "Black Leather Oxford Shoes",
        brand: "Clarks",
        price_cents: 99_99,
        original_price_cents: 120_00,
        category: ProductCategory::Formal,
        kind: ProductKind::Shoes,
        colors: &[Color::Black],
        materials: &[Material::Leather],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Business, Occasion::Formal, Occasion::Wedding],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Polished cap-toe oxfords on a cushioned sole.",
        image_url: "https://images.pexels.com/photos/293406/pexels-photo-293406.jpeg",
        rating: 4.5,
        reviews: 456,
        purchase_url: "https://www.clarks.com/en-us/mens-dress-shoes",
        tags: &["business", "formal", "oxford"],
    },
    ProductSeed {
        id: "mid-shoes-002",
        name: "White Leather Sneakers",
        brand: "Cole Haan",
        price_cents: 89_99,
        original_price_cents: 110_00,
        category: ProductCategory::Casual,
        kind: ProductKind::Shoes,
        colors: &[Color::White],
        materials: &[Material::Leather],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::BusinessCasual, Occasion::NightOut],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Minimal white leather sneakers with a refined profile.",
        image_url: "https://images.pexels.com/photos/19090/pexels-photo.jpg",
        rating: 4.4,
        reviews: 289,
        purchase_url: "https://www.colehaan.com/mens-sneakers",
        tags: &["sneakers", "smart casual", "leather"],
    },
    ProductSeed {
        id: "mid-sweater-001",
        name: "Navy Merino V-Neck Sweater",
        brand: "Uniqlo",
        price_cents: 89_90,
        original_price_cents: 99_90,
        category: ProductCategory::Casual,
        kind: ProductKind::Sweater,
        colors: &[Color::Navy],
        materials: &[Material::Wool],
        seasons: COOL_SEASONS,
        occasions: &[Occasion::BusinessCasual, Occasion::Business, Occasion::Casual],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Extra-fine merino v-neck that layers over a collar.",
        image_url: "https://images.pexels.com/photos/45982/pexels-photo-45982.jpeg",
        rating: 4.7,
        reviews: 517,
        purchase_url: "https://www.uniqlo.com/us/en/products/E450534-000/00",
        tags: &["merino", "layering", "business casual"],
    },
    ProductSeed {
        id: "mid-kurta-001",
        name: "Embroidered Kurta Set",
        brand: "FabIndia",
        price_cents: 89_00,
        original_price_cents: 105_00,
        category: ProductCategory::Ethnic,
        kind: ProductKind::Kurta,
        colors: &[Color::Cream],
        materials: &[Material::Cotton, Material::Silk],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Ethnic, Occasion::Wedding],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Cream kurta with tonal embroidery at the placket.",
        image_url: "https://images.pexels.com/photos/2235072/pexels-photo-2235072.jpeg",
        rating: 4.5,
        reviews: 64,
        purchase_url: "https://www.fabindia.com/men-kurta-sets",
        tags: &["ethnic", "wedding", "traditional"],
    },
    // ---- premium ($120-$250) ------------------------------------------
    ProductSeed {
        id: "prem-blazer-001",
        name: "Navy Wool Blazer",
        brand: "Mango",
        price_cents: 199_99,
        original_price_cents: 229_99,
        category: ProductCategory::Formal,
        kind: ProductKind::Blazer,
        colors: &[Color::Navy],
        materials: &[Material::Wool, Material::Polyester],
        seasons: COOL_SEASONS,
        occasions: &[Occasion::Business, Occasion::BusinessCasual, Occasion::Formal],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Structured navy blazer with patch pockets.",
        image_url: "https://images.pexels.com/photos/1043474/pexels-photo-1043474.jpeg",
        rating: 4.5,
        reviews: 133,
        purchase_url: "https://shop.mango.com/us/men/blazers",
        tags: &["blazer", "business", "structured"],
    },
    ProductSeed {
        id: "prem-shirt-001",
        name: "Egyptian Cotton Dress Shirt",
        brand: "Calvin Klein",
        price_cents: 129_00,
        original_price_cents: 145_00,
        category: ProductCategory::Formal,
        kind: ProductKind::Shirt,
        colors: &[Color::White],
        materials: &[Material::Cotton],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Business, Occasion::Formal],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Two-ply Egyptian cotton shirt with French cuffs.",
        image_url: "https://images.pexels.com/photos/297934/pexels-photo-297934.jpeg",
        rating: 4.7,
        reviews: 201,
        purchase_url: "https://www.calvinklein.us/en/men/apparel/dress-shirts",
        tags: &["business", "executive", "dress shirt"],
    },
    ProductSeed {
        id: "prem-pants-001",
        name: "Gray Wool Trousers",
        brand: "Calvin Klein",
        price_cents: 149_99,
        original_price_cents: 169_99,
        category: ProductCategory::Formal,
        kind: ProductKind::Pants,
        colors: &[Color::Gray],
        materials: &[Material::Wool],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Business, Occasion::Formal],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Tropical-weight wool trousers with a flat front.",
        image_url: "https://images.pexels.com/photos/1300551/pexels-photo-1300551.jpeg",
        rating: 4.5,
        reviews: 97,
        purchase_url: "https://www.calvinklein.us/en/men/apparel/pants",
        tags: &["business", "executive", "tailored"],
    },
    ProductSeed {
        id: "prem-shoes-001",
        name: "Pinch Penny Loafers",
        brand: "Cole Haan",
        price_cents: 180_00,
        original_price_cents: 200_00,
        category: ProductCategory::Formal,
        kind: ProductKind::Shoes,
        colors: &[Color::Brown],
        materials: &[Material::Leather],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Business, Occasion::BusinessCasual, Occasion::Formal],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Hand-sewn penny loafers in burnished leather.",
        image_url: "https://images.pexels.com/photos/267242/pexels-photo-267242.jpeg",
        rating: 4.6,
        reviews: 378,
        purchase_url: "https://www.colehaan.com/pinch-penny",
        tags: &["loafers", "business", "classic"],
    },
    ProductSeed {
        id: "prem-jeans-001",
        name: "Premium Dark Wash Jeans",
        brand: "Levi's",
        price_cents: 128_00,
        original_price_cents: 148_00,
        category: ProductCategory::Casual,
        kind: ProductKind::Jeans,
        colors: &[Color::Navy],
        materials: &[Material::Denim],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Casual, Occasion::NightOut, Occasion::BusinessCasual],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Premium dark wash jeans with superior construction.",
        image_url: "https://images.pexels.com/photos/1484808/pexels-photo-1484808.jpeg",
        rating: 4.7,
        reviews: 423,
        purchase_url: "https://www.levi.com/US/en_US/apparel/clothing/bottoms/made-crafted",
        tags: &["denim", "premium", "night out"],
    },
    ProductSeed {
        id: "prem-polo-001",
        name: "Classic Pique Polo",
        brand: "Lacoste",
        price_cents: 125_00,
        original_price_cents: 125_00,
        category: ProductCategory::Casual,
        kind: ProductKind::Polo,
        colors: &[Color::Green],
        materials: &[Material::Cotton],
        seasons: &[Season::Spring, Season::Summer, Season::Fall],
        occasions: &[Occasion::Casual, Occasion::BusinessCasual, Occasion::Weekend],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "The original L.12.12 pique polo.",
        image_url: "https://images.pexels.com/photos/1342610/pexels-photo-1342610.jpeg",
        rating: 4.8,
        reviews: 612,
        purchase_url: "https://www.lacoste.com/us/lacoste/men/clothing/polos",
        tags: &["polo", "heritage", "smart casual"],
    },
    ProductSeed {
        id: "prem-jacket-001",
        name: "Tan Suede Trucker Jacket",
        brand: "Mango",
        price_cents: 229_00,
        original_price_cents: 259_00,
        category: ProductCategory::Casual,
        kind: ProductKind::Jacket,
        colors: &[Color::Tan],
        materials: &[Material::Suede],
        seasons: &[Season::Fall, Season::Spring],
        occasions: &[Occasion::Casual, Occasion::NightOut, Occasion::Weekend],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Soft suede trucker with a camel finish.",
        image_url: "https://images.pexels.com/photos/1124468/pexels-photo-1124468.jpeg",
        rating: 4.4,
        reviews: 79,
        purchase_url: "https://shop.mango.com/us/men/jackets",
        tags: &["suede", "night out", "layering"],
    },
    ProductSeed {
        id: "prem-sweater-001",
        name: "Cashmere Blend Turtleneck",
        brand: "Calvin Klein",
        price_cents: 198_00,
        original_price_cents: 225_00,
        category: ProductCategory::Casual,
        kind: ProductKind::Sweater,
        colors: &[Color::Black],
        materials: &[Material::Cashmere, Material::Wool],
        seasons: &[Season::Fall, Season::Winter],
        occasions: &[Occasion::BusinessCasual, Occasion::NightOut, Occasion::Casual],
        body_types: &[BodyType::Slim, BodyType::Athletic, BodyType::Average],
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Fine-gauge turtleneck in a cashmere blend.",
        image_url: "https://images.pexels.com/photos/1124469/pexels-photo-1124469.jpeg",
        rating: 4.6,
        reviews: 154,
        purchase_url: "https://www.calvinklein.us/en/men/apparel/sweaters",
        tags: &["cashmere", "night out", "refined"],
    },
    // ---- luxury ($250-$500) -------------------------------------------
    ProductSeed {
        id: "lux-blazer-001",
        name: "Wool-Cashmere Navy Blazer",
        brand: "Hugo Boss",
        price_cents: 495_00,
        original_price_cents: 545_00,
        category: ProductCategory::Formal,
        kind: ProductKind::Blazer,
        colors: &[Color::Navy],
        materials: &[Material::Wool, Material::Cashmere],
        seasons: COOL_SEASONS,
        occasions: &[Occasion::Business, Occasion::Formal],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Luxury navy blazer made from wool-cashmere blend.",
        image_url: "https://images.pexels.com/photos/1342611/pexels-photo-1342611.jpeg",
        rating: 4.9,
        reviews: 88,
        purchase_url: "https://www.hugoboss.com/us/men-blazers",
        tags: &["executive", "luxury", "tailored"],
    },
    ProductSeed {
        id: "lux-shirt-001",
        name: "Twill Dress Shirt",
        brand: "Hugo Boss",
        price_cents: 225_00,
        original_price_cents: 225_00,
        category: ProductCategory::Formal,
        kind: ProductKind::Shirt,
        colors: &[Color::LightBlue],
        materials: &[Material::Cotton],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Business, Occasion::Formal],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Italian twill shirt with a sharp semi-spread collar.",
        image_url: "https://images.pexels.com/photos/297935/pexels-photo-297935.jpeg",
        rating: 4.7,
        reviews: 112,
        purchase_url: "https://www.hugoboss.com/us/men-shirts",
        tags: &["executive", "luxury", "dress shirt"],
    },
    ProductSeed {
        id: "lux-pants-001",
        name: "Tailored Wool Trousers",
        brand: "Hugo Boss",
        price_cents: 329_99,
        original_price_cents: 359_99,
        category: ProductCategory::Formal,
        kind: ProductKind::Pants,
        colors: &[Color::Charcoal],
        materials: &[Material::Wool],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Business, Occasion::Formal],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Premium wool trousers with impeccable tailoring.",
        image_url: "https://images.pexels.com/photos/1436289/pexels-photo-1436289.jpeg",
        rating: 4.8,
        reviews: 76,
        purchase_url: "https://www.hugoboss.com/us/men-pants",
        tags: &["executive", "luxury", "tailored"],
    },
    ProductSeed {
        id: "lux-shoes-001",
        name: "Italian Leather Oxfords",
        brand: "Hugo Boss",
        price_cents: 450_00,
        original_price_cents: 450_00,
        category: ProductCategory::Formal,
        kind: ProductKind::Shoes,
        colors: &[Color::Black],
        materials: &[Material::Leather],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Business, Occasion::Formal, Occasion::Wedding],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Whole-cut oxfords in polished Italian calfskin.",
        image_url: "https://images.pexels.com/photos/293407/pexels-photo-293407.jpeg",
        rating: 4.9,
        reviews: 64,
        purchase_url: "https://www.hugoboss.com/us/men-shoes",
        tags: &["formal", "luxury", "oxford"],
    },
    ProductSeed {
        id: "lux-coat-001",
        name: "Camel Wool Overcoat",
        brand: "Hugo Boss",
        price_cents: 499_00,
        original_price_cents: 549_00,
        category: ProductCategory::Formal,
        kind: ProductKind::Coat,
        colors: &[Color::Camel],
        materials: &[Material::Wool],
        seasons: &[Season::Fall, Season::Winter],
        occasions: &[Occasion::Business, Occasion::Formal, Occasion::BusinessCasual],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Single-breasted camel overcoat that finishes any look.",
        image_url: "https://images.pexels.com/photos/1124470/pexels-photo-1124470.jpeg",
        rating: 4.8,
        reviews: 53,
        purchase_url: "https://www.hugoboss.com/us/men-coats",
        tags: &["overcoat", "luxury", "winter"],
    },
    ProductSeed {
        id: "lux-kurta-001",
        name: "Silk Kurta Set",
        brand: "Manyavar",
        price_cents: 295_00,
        original_price_cents: 325_00,
        category: ProductCategory::Ethnic,
        kind: ProductKind::Kurta,
        colors: &[Color::Burgundy],
        materials: &[Material::Silk],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Ethnic, Occasion::Wedding],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Raw silk kurta set for weddings and festive evenings.",
        image_url: "https://images.pexels.com/photos/2235073/pexels-photo-2235073.jpeg",
        rating: 4.7,
        reviews: 41,
        purchase_url: "https://www.manyavar.com/en/men-kurtas",
        tags: &["ethnic", "wedding", "silk"],
    },
    ProductSeed {
        id: "lux-shoes-002",
        name: "Suede Tassel Loafers",
        brand: "Cole Haan",
        price_cents: 395_00,
        original_price_cents: 395_00,
        category: ProductCategory::Formal,
        kind: ProductKind::Shoes,
        colors: &[Color::Tan],
        materials: &[Material::Suede],
        seasons: &[Season::Spring, Season::Summer, Season::Fall],
        occasions: &[Occasion::BusinessCasual, Occasion::NightOut, Occasion::Formal],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Unlined suede tassel loafers in warm tan.",
        image_url: "https://images.pexels.com/photos/267243/pexels-photo-267243.jpeg",
        rating: 4.5,
        reviews: 58,
        purchase_url: "https://www.colehaan.com/mens-loafers",
        tags: &["loafers", "luxury", "smart casual"],
    },
    // ---- ultra luxury ($500+) -----------------------------------------
    ProductSeed {
        id: "ultralux-shoes-001",
        name: "Handmade Leather Derbies",
        brand: "Hugo Boss",
        price_cents: 780_00,
        original_price_cents: 780_00,
        category: ProductCategory::Formal,
        kind: ProductKind::Shoes,
        colors: &[Color::Brown],
        materials: &[Material::Leather],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Formal, Occasion::Business, Occasion::Wedding],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Regular,
        description: "Hand-finished derbies built on a Goodyear welt.",
        image_url: "https://images.pexels.com/photos/293408/pexels-photo-293408.jpeg",
        rating: 4.9,
        reviews: 22,
        purchase_url: "https://www.hugoboss.com/us/men-shoes-handmade",
        tags: &["formal", "handmade", "luxury"],
    },
    ProductSeed {
        id: "ultralux-blazer-001",
        name: "Double-Breasted Flannel Blazer",
        brand: "Hugo Boss",
        price_cents: 895_00,
        original_price_cents: 945_00,
        category: ProductCategory::Formal,
        kind: ProductKind::Blazer,
        colors: &[Color::Charcoal],
        materials: &[Material::Wool, Material::Cashmere],
        seasons: &[Season::Fall, Season::Winter],
        occasions: &[Occasion::Formal, Occasion::Business],
        body_types: &[BodyType::Slim, BodyType::Athletic, BodyType::Average],
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Double-breasted flannel blazer with peak lapels.",
        image_url: "https://images.pexels.com/photos/1043475/pexels-photo-1043475.jpeg",
        rating: 4.8,
        reviews: 17,
        purchase_url: "https://www.hugoboss.com/us/men-tailoring",
        tags: &["formal", "tailoring", "luxury"],
    },
    ProductSeed {
        id: "ultralux-shirt-001",
        name: "Sea Island Cotton Shirt",
        brand: "Brooks Brothers",
        price_cents: 345_00,
        original_price_cents: 345_00,
        category: ProductCategory::Formal,
        kind: ProductKind::Shirt,
        colors: &[Color::White],
        materials: &[Material::Cotton],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Formal, Occasion::Business, Occasion::Wedding],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Rare Sea Island cotton with mother-of-pearl buttons.",
        image_url: "https://images.pexels.com/photos/325877/pexels-photo-325877.jpeg",
        rating: 4.9,
        reviews: 31,
        purchase_url: "https://www.brooksbrothers.com/sea-island",
        tags: &["formal", "luxury", "dress shirt"],
    },
    ProductSeed {
        id: "ultralux-pants-001",
        name: "Super 150s Wool Trousers",
        brand: "Hugo Boss",
        price_cents: 425_00,
        original_price_cents: 455_00,
        category: ProductCategory::Formal,
        kind: ProductKind::Pants,
        colors: &[Color::Black],
        materials: &[Material::Wool],
        seasons: ALL_SEASONS,
        occasions: &[Occasion::Formal, Occasion::Business, Occasion::Wedding],
        body_types: ALL_BODIES,
        skin_tones: ALL_TONES,
        fit: FitType::Slim,
        description: "Super 150s trousers with a knife-edge crease.",
        image_url: "https://images.pexels.com/photos/1300552/pexels-photo-1300552.jpeg",
        rating: 4.8,
        reviews: 19,
        purchase_url: "https://www.hugoboss.com/us/men-trousers",
        tags: &["formal", "tailoring", "luxury"],
    },
];
