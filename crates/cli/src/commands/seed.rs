use crate::commands::{with_database, CommandResult};
use lookbook_db::{migrations, seed_demo_data};

pub fn run() -> CommandResult {
    let result = with_database("seed", |pool| async move {
        migrations::run_pending(&pool)
            .await
            .map_err(|error| ("migration", error.to_string(), 5u8))?;
        seed_demo_data(&pool)
            .await
            .map_err(|error| ("seed_execution", error.to_string(), 6u8))
    });

    match result {
        Ok(seeded) => CommandResult::success(
            "seed",
            format!(
                "demo data in place: {} profiles, {} saved looks, {} liked looks",
                seeded.profiles, seeded.saved_looks, seeded.liked_looks
            ),
        ),
        Err(failure) => failure,
    }
}
