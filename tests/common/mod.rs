// Common test utilities shared across test files

use carparts_seed::config::ImageSelection;
use carparts_seed::SeedSettings;
use sqlx::SqlitePool;

/// Set up an empty in-memory SQLite database (no tables yet)
#[allow(dead_code)]
pub async fn setup_test_db() -> SqlitePool {
    carparts_seed::db::connect(":memory:")
        .await
        .expect("Failed to create in-memory database")
}

/// Set up an in-memory SQLite database with the schema applied
#[allow(dead_code)]
pub async fn setup_test_db_with_schema() -> SqlitePool {
    let pool = setup_test_db().await;
    carparts_seed::db::ensure_schema(&pool)
        .await
        .expect("Failed to run migration 001");
    pool
}

/// Default settings with deterministic image selection
#[allow(dead_code)]
pub fn test_settings() -> SeedSettings {
    SeedSettings {
        images: ImageSelection::Cyclic,
        ..SeedSettings::default()
    }
}
