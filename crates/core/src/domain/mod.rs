pub mod analysis;
pub mod outfit;
pub mod preferences;
pub mod product;
pub mod profile;
