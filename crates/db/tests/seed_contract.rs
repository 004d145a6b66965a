//! Contract tests for the SQL repositories and the demo seed dataset against
//! an in-memory SQLite database.

use chrono::Utc;
use rust_decimal::Decimal;

use lookbook_core::domain::profile::{LikedLook, SavedLook, SavedLookId, StyleProfile, UserId};
use lookbook_core::{Catalog, ProductId};
use lookbook_db::repositories::{
    LikedLookRepository, ProfileRepository, SavedLookRepository, SqlLikedLookRepository,
    SqlProfileRepository, SqlSavedLookRepository,
};
use lookbook_db::{connect_with_settings, migrations, seed_demo_data, DbPool};

async fn test_pool() -> DbPool {
    let pool = connect_with_settings("sqlite::memory:", 1, 30).await.expect("connect");
    migrations::run_pending(&pool).await.expect("migrate");
    pool
}

#[tokio::test]
async fn profile_roundtrips_through_sql() {
    let pool = test_pool().await;
    let repo = SqlProfileRepository::new(pool);

    let profile = StyleProfile {
        user_id: UserId("u-sql-1".to_string()),
        gender: "male".to_string(),
        age_group: "adult".to_string(),
        skin_tone: "olive".to_string(),
        body_type: "slim".to_string(),
        style_personality: vec!["minimal".to_string(), "street".to_string()],
        updated_at: Utc::now(),
    };

    repo.save(profile.clone()).await.expect("save");
    let found = repo
        .find_by_user(&UserId("u-sql-1".to_string()))
        .await
        .expect("find")
        .expect("present");
    assert_eq!(found, profile);

    // Upsert replaces in place.
    let mut changed = profile.clone();
    changed.skin_tone = "deep".to_string();
    repo.save(changed.clone()).await.expect("resave");
    let found = repo
        .find_by_user(&UserId("u-sql-1".to_string()))
        .await
        .expect("find")
        .expect("present");
    assert_eq!(found.skin_tone, "deep");
}

#[tokio::test]
async fn saved_look_preserves_items_and_price() {
    let pool = test_pool().await;
    let repo = SqlSavedLookRepository::new(pool);
    let catalog = Catalog::builtin();

    let items = vec![
        catalog.find(&ProductId("prem-shirt-001".to_string())).unwrap().clone(),
        catalog.find(&ProductId("prem-pants-001".to_string())).unwrap().clone(),
        catalog.find(&ProductId("mid-shoes-001".to_string())).unwrap().clone(),
    ];
    let total: Decimal = items.iter().map(|i| i.price).sum();

    let look = SavedLook {
        id: SavedLookId("look-sql-1".to_string()),
        user_id: UserId("u-sql-1".to_string()),
        look_name: "Executive Professional".to_string(),
        items: items.clone(),
        total_price: total,
        occasion: "business professional".to_string(),
        created_at: Utc::now(),
    };

    repo.save(look.clone()).await.expect("save");
    let found = repo
        .find_by_id(&SavedLookId("look-sql-1".to_string()))
        .await
        .expect("find")
        .expect("present");
    assert_eq!(found.items, items);
    assert_eq!(found.total_price, Decimal::new(37898, 2));

    let listed = repo.list_for_user(&UserId("u-sql-1".to_string())).await.expect("list");
    assert_eq!(listed.len(), 1);

    assert!(repo.delete(&SavedLookId("look-sql-1".to_string())).await.expect("delete"));
    assert!(!repo.delete(&SavedLookId("look-sql-1".to_string())).await.expect("redelete"));
}

#[tokio::test]
async fn like_toggle_is_an_on_off_switch() {
    let pool = test_pool().await;
    let repo = SqlLikedLookRepository::new(pool);

    let like = LikedLook {
        user_id: UserId("u-sql-2".to_string()),
        outfit_id: "look-a-b-c".to_string(),
        look_name: "Night Out Style".to_string(),
        created_at: Utc::now(),
    };

    assert!(repo.toggle(like.clone()).await.expect("first toggle"));
    assert_eq!(repo.list_for_user(&like.user_id).await.expect("list").len(), 1);
    assert!(!repo.toggle(like.clone()).await.expect("second toggle"));
    assert!(repo.list_for_user(&like.user_id).await.expect("list").is_empty());
}

#[tokio::test]
async fn demo_seed_is_idempotent() {
    let pool = test_pool().await;

    let first = seed_demo_data(&pool).await.expect("first seed");
    assert_eq!(first.profiles, 2);
    assert_eq!(first.saved_looks, 3);

    let second = seed_demo_data(&pool).await.expect("second seed");
    assert_eq!(second, first);

    let saved = SqlSavedLookRepository::new(pool.clone());
    let looks = saved
        .list_for_user(&UserId("demo-user-001".to_string()))
        .await
        .expect("list");
    assert_eq!(looks.len(), 2);
    for look in &looks {
        let total: Decimal = look.items.iter().map(|i| i.price).sum();
        assert_eq!(look.total_price, total);
    }

    let liked = SqlLikedLookRepository::new(pool);
    let likes = liked
        .list_for_user(&UserId("demo-user-002".to_string()))
        .await
        .expect("likes");
    assert_eq!(likes.len(), 1);
}
