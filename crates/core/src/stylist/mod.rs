//! Outfit Recommendation Engine
//!
//! Assembles budget-aware, occasion-specific outfits from a catalog, with
//! duplicate suppression and confidence ranking.

mod assemble;
mod budget;
mod diversity;
mod engine;
mod filter;

pub use budget::{BudgetTier, PriceBand};
pub use engine::StylistEngine;

/// Outfits returned when a caller does not specify a count.
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 3;
