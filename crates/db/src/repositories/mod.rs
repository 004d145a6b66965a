use async_trait::async_trait;
use thiserror::Error;

use lookbook_core::domain::profile::{LikedLook, SavedLook, SavedLookId, StyleProfile, UserId};

pub mod looks;
pub mod memory;
pub mod profile;

pub use looks::{SqlLikedLookRepository, SqlSavedLookRepository};
pub use memory::{
    InMemoryLikedLookRepository, InMemoryProfileRepository, InMemorySavedLookRepository,
};
pub use profile::SqlProfileRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<StyleProfile>, RepositoryError>;
    async fn save(&self, profile: StyleProfile) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait SavedLookRepository: Send + Sync {
    async fn find_by_id(&self, id: &SavedLookId) -> Result<Option<SavedLook>, RepositoryError>;
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<SavedLook>, RepositoryError>;
    async fn save(&self, look: SavedLook) -> Result<(), RepositoryError>;
    async fn delete(&self, id: &SavedLookId) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait LikedLookRepository: Send + Sync {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<LikedLook>, RepositoryError>;
    /// Toggle the like marker for `(user, outfit)`. Returns `true` when the
    /// look is liked after the call, `false` when the toggle removed it.
    async fn toggle(&self, like: LikedLook) -> Result<bool, RepositoryError>;
}
