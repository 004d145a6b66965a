use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::{sqlite::SqliteRow, Row};

use lookbook_core::domain::product::Product;
use lookbook_core::domain::profile::{LikedLook, SavedLook, SavedLookId, UserId};

use super::profile::parse_timestamp;
use super::{LikedLookRepository, RepositoryError, SavedLookRepository};
use crate::DbPool;

pub struct SqlSavedLookRepository {
    pool: DbPool,
}

impl SqlSavedLookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SavedLookRepository for SqlSavedLookRepository {
    async fn find_by_id(&self, id: &SavedLookId) -> Result<Option<SavedLook>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, user_id, look_name, items, total_price, occasion, created_at
             FROM saved_look
             WHERE id = ?",
        )
        .bind(&id.0)
        .fetch_optional(&self.pool)
        .await?;

        row.map(saved_look_from_row).transpose()
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<SavedLook>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, user_id, look_name, items, total_price, occasion, created_at
             FROM saved_look
             WHERE user_id = ?
             ORDER BY created_at DESC",
        )
        .bind(&user_id.0)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(saved_look_from_row).collect()
    }

    async fn save(&self, look: SavedLook) -> Result<(), RepositoryError> {
        let items = serde_json::to_string(&look.items)
            .map_err(|err| RepositoryError::Decode(err.to_string()))?;

        sqlx::query(
            "INSERT INTO saved_look (
                id, user_id, look_name, items, total_price, occasion, created_at
             ) VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                look_name = excluded.look_name,
                items = excluded.items,
                total_price = excluded.total_price,
                occasion = excluded.occasion",
        )
        .bind(&look.id.0)
        .bind(&look.user_id.0)
        .bind(&look.look_name)
        .bind(items)
        .bind(look.total_price.to_string())
        .bind(&look.occasion)
        .bind(look.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: &SavedLookId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM saved_look WHERE id = ?")
            .bind(&id.0)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct SqlLikedLookRepository {
    pool: DbPool,
}

impl SqlLikedLookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl LikedLookRepository for SqlLikedLookRepository {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<LikedLook>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT user_id, outfit_id, look_name, created_at
             FROM liked_look
             WHERE user_id = ?
             ORDER BY created_at DESC",
        )
        .bind(&user_id.0)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(liked_look_from_row).collect()
    }

    async fn toggle(&self, like: LikedLook) -> Result<bool, RepositoryError> {
        let removed = sqlx::query("DELETE FROM liked_look WHERE user_id = ? AND outfit_id = ?")
            .bind(&like.user_id.0)
            .bind(&like.outfit_id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        if removed > 0 {
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO liked_look (user_id, outfit_id, look_name, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&like.user_id.0)
        .bind(&like.outfit_id)
        .bind(&like.look_name)
        .bind(like.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(true)
    }
}

fn saved_look_from_row(row: SqliteRow) -> Result<SavedLook, RepositoryError> {
    let items_raw = row.try_get::<String, _>("items")?;
    let items: Vec<Product> = serde_json::from_str(&items_raw)
        .map_err(|err| RepositoryError::Decode(format!("bad items json: {err}")))?;

    let price_raw = row.try_get::<String, _>("total_price")?;
    let total_price = Decimal::from_str(&price_raw)
        .map_err(|err| RepositoryError::Decode(format!("bad total_price `{price_raw}`: {err}")))?;

    Ok(SavedLook {
        id: SavedLookId(row.try_get("id")?),
        user_id: UserId(row.try_get("user_id")?),
        look_name: row.try_get("look_name")?,
        items,
        total_price,
        occasion: row.try_get("occasion")?,
        created_at: parse_timestamp("created_at", row.try_get("created_at")?)?,
    })
}

fn liked_look_from_row(row: SqliteRow) -> Result<LikedLook, RepositoryError> {
    Ok(LikedLook {
        user_id: UserId(row.try_get("user_id")?),
        outfit_id: row.try_get("outfit_id")?,
        look_name: row.try_get("look_name")?,
        created_at: parse_timestamp("created_at", row.try_get("created_at")?)?,
    })
}
