use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Persisted styling preferences for a returning user. Identity itself lives
/// in the external hosted auth service; rows are keyed by its opaque user id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub user_id: UserId,
    pub gender: String,
    pub age_group: String,
    pub skin_tone: String,
    pub body_type: String,
    pub style_personality: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SavedLookId(pub String);

/// A recommendation the user chose to keep. The full item list is stored so
/// the look survives catalog changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedLook {
    pub id: SavedLookId,
    pub user_id: UserId,
    pub look_name: String,
    pub items: Vec<Product>,
    pub total_price: Decimal,
    pub occasion: String,
    pub created_at: DateTime<Utc>,
}

/// A lightweight "liked" marker on a generated outfit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LikedLook {
    pub user_id: UserId,
    pub outfit_id: String,
    pub look_name: String,
    pub created_at: DateTime<Utc>,
}
