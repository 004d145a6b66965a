use std::collections::HashMap;

use tokio::sync::RwLock;

use lookbook_core::domain::profile::{LikedLook, SavedLook, SavedLookId, StyleProfile, UserId};

use super::{LikedLookRepository, ProfileRepository, RepositoryError, SavedLookRepository};

#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<String, StyleProfile>>,
}

#[async_trait::async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StyleProfile>, RepositoryError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&user_id.0).cloned())
    }

    async fn save(&self, profile: StyleProfile) -> Result<(), RepositoryError> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.user_id.0.clone(), profile);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySavedLookRepository {
    looks: RwLock<HashMap<String, SavedLook>>,
}

#[async_trait::async_trait]
impl SavedLookRepository for InMemorySavedLookRepository {
    async fn find_by_id(&self, id: &SavedLookId) -> Result<Option<SavedLook>, RepositoryError> {
        let looks = self.looks.read().await;
        Ok(looks.get(&id.0).cloned())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<SavedLook>, RepositoryError> {
        let looks = self.looks.read().await;
        let mut result: Vec<SavedLook> =
            looks.values().filter(|look| look.user_id == *user_id).cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn save(&self, look: SavedLook) -> Result<(), RepositoryError> {
        let mut looks = self.looks.write().await;
        looks.insert(look.id.0.clone(), look);
        Ok(())
    }

    async fn delete(&self, id: &SavedLookId) -> Result<bool, RepositoryError> {
        let mut looks = self.looks.write().await;
        Ok(looks.remove(&id.0).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryLikedLookRepository {
    likes: RwLock<HashMap<(String, String), LikedLook>>,
}

#[async_trait::async_trait]
impl LikedLookRepository for InMemoryLikedLookRepository {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<LikedLook>, RepositoryError> {
        let likes = self.likes.read().await;
        let mut result: Vec<LikedLook> =
            likes.values().filter(|like| like.user_id == *user_id).cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn toggle(&self, like: LikedLook) -> Result<bool, RepositoryError> {
        let mut likes = self.likes.write().await;
        let key = (like.user_id.0.clone(), like.outfit_id.clone());
        if likes.remove(&key).is_some() {
            return Ok(false);
        }
        likes.insert(key, like);
        Ok(true)
    }
}
