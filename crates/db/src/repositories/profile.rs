use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};

use lookbook_core::domain::profile::{StyleProfile, UserId};

use super::{ProfileRepository, RepositoryError};
use crate::DbPool;

pub struct SqlProfileRepository {
    pool: DbPool,
}

impl SqlProfileRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProfileRepository for SqlProfileRepository {
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StyleProfile>, RepositoryError> {
        let row = sqlx::query(
            "SELECT
                user_id,
                gender,
                age_group,
                skin_tone,
                body_type,
                style_personality,
                updated_at
             FROM style_profile
             WHERE user_id = ?",
        )
        .bind(&user_id.0)
        .fetch_optional(&self.pool)
        .await?;

        row.map(profile_from_row).transpose()
    }

    async fn save(&self, profile: StyleProfile) -> Result<(), RepositoryError> {
        let personality = serde_json::to_string(&profile.style_personality)
            .map_err(|err| RepositoryError::Decode(err.to_string()))?;

        sqlx::query(
            "INSERT INTO style_profile (
                user_id,
                gender,
                age_group,
                skin_tone,
                body_type,
                style_personality,
                updated_at
             ) VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(user_id) DO UPDATE SET
                gender = excluded.gender,
                age_group = excluded.age_group,
                skin_tone = excluded.skin_tone,
                body_type = excluded.body_type,
                style_personality = excluded.style_personality,
                updated_at = excluded.updated_at",
        )
        .bind(&profile.user_id.0)
        .bind(&profile.gender)
        .bind(&profile.age_group)
        .bind(&profile.skin_tone)
        .bind(&profile.body_type)
        .bind(personality)
        .bind(profile.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn profile_from_row(row: SqliteRow) -> Result<StyleProfile, RepositoryError> {
    let personality_raw = row.try_get::<String, _>("style_personality")?;
    let style_personality: Vec<String> = serde_json::from_str(&personality_raw)
        .map_err(|err| RepositoryError::Decode(format!("bad style_personality json: {err}")))?;

    Ok(StyleProfile {
        user_id: UserId(row.try_get("user_id")?),
        gender: row.try_get("gender")?,
        age_group: row.try_get("age_group")?,
        skin_tone: row.try_get("skin_tone")?,
        body_type: row.try_get("body_type")?,
        style_personality,
        updated_at: parse_timestamp("updated_at", row.try_get("updated_at")?)?,
    })
}

pub(crate) fn parse_timestamp(
    column: &str,
    value: String,
) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| RepositoryError::Decode(format!("bad timestamp in `{column}`: {err}")))
}
