//! Garment catalog. The engine never reaches for a global table: callers
//! construct a [`Catalog`] (usually [`Catalog::builtin`]) and hand it to the
//! stylist, which keeps test catalogs and future remote catalogs cheap.

mod seeds;

use rust_decimal::Decimal;

use crate::domain::product::{Occasion, Product, ProductId, ProductKind};

use seeds::{ProductSeed, PRODUCT_SEEDS};

#[derive(Clone, Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Catalog over an arbitrary product list. Order is preserved; callers
    /// that care about deterministic output should pass a stable order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in demo catalog, materialized from the seed table.
    pub fn builtin() -> Self {
        Self::new(PRODUCT_SEEDS.iter().map(materialize).collect())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn by_kind(&self, kind: ProductKind) -> Vec<&Product> {
        self.products.iter().filter(|p| p.kind == kind).collect()
    }

    pub fn by_occasion(&self, occasion: Occasion) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.suits_occasion(occasion))
            .collect()
    }

    /// Products priced within `[min, max]` inclusive.
    pub fn by_price_range(&self, min: Decimal, max: Decimal) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.price >= min && p.price <= max)
            .collect()
    }

    /// Case-insensitive substring search over name, brand, description and
    /// tags.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.brand.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

fn materialize(seed: &ProductSeed) -> Product {
    Product {
        id: ProductId(seed.id.to_string()),
        name: seed.name.to_string(),
        brand: seed.brand.to_string(),
        price: Decimal::new(seed.price_cents, 2),
        original_price: Decimal::new(seed.original_price_cents, 2),
        category: seed.category,
        kind: seed.kind,
        colors: seed.colors.to_vec(),
        materials: seed.materials.to_vec(),
        seasons: seed.seasons.to_vec(),
        occasions: seed.occasions.to_vec(),
        body_types: seed.body_types.to_vec(),
        skin_tones: seed.skin_tones.to_vec(),
        fit: seed.fit,
        description: seed.description.to_string(),
        image_url: seed.image_url.to_string(),
        rating: seed.rating,
        reviews: seed.reviews,
        in_stock: true,
        purchase_url: seed.purchase_url.to_string(),
        tags: seed.tags.iter().map(|t| t.to_string()).collect(),
    }
}
