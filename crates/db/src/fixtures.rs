//! Deterministic demo seeds for local development and end-to-end checks:
//! two returning users with a profile, saved looks, and a liked look each.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use lookbook_core::domain::profile::{LikedLook, SavedLook, SavedLookId, StyleProfile, UserId};
use lookbook_core::{Catalog, ProductId};

use crate::connection::DbPool;
use crate::repositories::{
    LikedLookRepository, ProfileRepository, RepositoryError, SavedLookRepository,
    SqlLikedLookRepository, SqlProfileRepository, SqlSavedLookRepository,
};

struct SeedUserContract {
    user_id: &'static str,
    gender: &'static str,
    age_group: &'static str,
    skin_tone: &'static str,
    body_type: &'static str,
    style_personality: &'static [&'static str],
    saved_looks: &'static [SeedLookContract],
    liked_outfit: &'static str,
}

struct SeedLookContract {
    id: &'static str,
    look_name: &'static str,
    occasion: &'static str,
    product_ids: &'static [&'static str],
}

const SEED_USERS: &[SeedUserContract] = &[
    SeedUserContract {
        user_id: "demo-user-001",
        gender: "male",
        age_group: "young-adult",
        skin_tone: "medium",
        body_type: "athletic",
        style_personality: &["minimal", "classic"],
        saved_looks: &[
            SeedLookContract {
                id: "seed-look-001",
                look_name: "Executive Professional",
                occasion: "business professional",
                product_ids: &["prem-shirt-001", "prem-pants-001", "mid-shoes-001"],
            },
            SeedLookContract {
                id: "seed-look-002",
                look_name: "Effortless Weekend",
                occasion: "casual",
                product_ids: &["ultra-tshirt-001", "ultra-jeans-001", "ultra-shoes-001"],
            },
        ],
        liked_outfit: "look-mid-shoes-001-prem-pants-001-prem-shirt-001",
    },
    SeedUserContract {
        user_id: "demo-user-002",
        gender: "male",
        age_group: "adult",
        skin_tone: "deep",
        body_type: "average",
        style_personality: &["bold"],
        saved_looks: &[SeedLookContract {
            id: "seed-look-003",
            look_name: "Traditional Ethnic",
            occasion: "wedding guest",
            product_ids: &["mid-kurta-001", "budget-pants-001"],
        }],
        liked_outfit: "look-budget-pants-001-mid-kurta-001",
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct SeedResult {
    pub profiles: usize,
    pub saved_looks: usize,
    pub liked_looks: usize,
}

/// Upsert the demo dataset. Safe to run repeatedly: profiles and saved looks
/// overwrite in place and the like toggle is re-applied only when absent.
pub async fn seed_demo_data(pool: &DbPool) -> Result<SeedResult, RepositoryError> {
    let catalog = Catalog::builtin();
    let profiles = SqlProfileRepository::new(pool.clone());
    let saved = SqlSavedLookRepository::new(pool.clone());
    let liked = SqlLikedLookRepository::new(pool.clone());

    let mut result = SeedResult { profiles: 0, saved_looks: 0, liked_looks: 0 };
    let seeded_at = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();

    for user in SEED_USERS {
        let user_id = UserId(user.user_id.to_string());
        profiles
            .save(StyleProfile {
                user_id: user_id.clone(),
                gender: user.gender.to_string(),
                age_group: user.age_group.to_string(),
                skin_tone: user.skin_tone.to_string(),
                body_type: user.body_type.to_string(),
                style_personality: user
                    .style_personality
                    .iter()
                    .map(|tag| tag.to_string())
                    .collect(),
                updated_at: seeded_at,
            })
            .await?;
        result.profiles += 1;

        for look in user.saved_looks {
            let items: Vec<_> = look
                .product_ids
                .iter()
                .filter_map(|id| catalog.find(&ProductId(id.to_string())).cloned())
                .collect();
            if items.len() != look.product_ids.len() {
                return Err(RepositoryError::Decode(format!(
                    "seed look `{}` references products missing from the catalog",
                    look.id
                )));
            }
            let total_price: Decimal = items.iter().map(|item| item.price).sum();

            saved
                .save(SavedLook {
                    id: SavedLookId(look.id.to_string()),
                    user_id: user_id.clone(),
                    look_name: look.look_name.to_string(),
                    items,
                    total_price,
                    occasion: look.occasion.to_string(),
                    created_at: seeded_at,
                })
                .await?;
            result.saved_looks += 1;
        }

        let already_liked = liked
            .list_for_user(&user_id)
            .await?
            .iter()
            .any(|like| like.outfit_id == user.liked_outfit);
        if !already_liked {
            liked
                .toggle(LikedLook {
                    user_id: user_id.clone(),
                    outfit_id: user.liked_outfit.to_string(),
                    look_name: "Seeded favorite".to_string(),
                    created_at: seeded_at,
                })
                .await?;
        }
        result.liked_looks += 1;
    }

    Ok(result)
}
