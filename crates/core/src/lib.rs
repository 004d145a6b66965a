pub mod analysis;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod stylist;

pub use analysis::BodyAnalyzer;
pub use catalog::Catalog;
pub use domain::analysis::{AnalysisResult, BodyMeasurements};
pub use domain::outfit::{OutfitId, OutfitRecommendation, StyleAnalysis, StyleReport};
pub use domain::preferences::{AgeGroup, StyleRequest, UserPreferences};
pub use domain::product::{
    BodyType, Color, FitType, Material, Occasion, Product, ProductCategory, ProductId,
    ProductKind, Season, SkinTone, Slot,
};
pub use domain::profile::{LikedLook, SavedLook, SavedLookId, StyleProfile, UserId};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use stylist::{BudgetTier, PriceBand, StylistEngine, DEFAULT_RECOMMENDATION_COUNT};
