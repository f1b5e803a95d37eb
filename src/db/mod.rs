// Database module: connection setup, schema, and read helpers

pub mod identity;
pub mod store;

pub use identity::SqliteIdentity;
pub use store::{Record, SqliteStore};

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::domain::{Category, Listing};
use crate::services::SchemaService;

const MEMORY_DB: &str = ":memory:";

// Open a pool on a SQLite file (created if missing) or an in-memory database
pub async fn connect(db_path: &str) -> Result<SqlitePool> {
    let in_memory = db_path == MEMORY_DB;

    let options = if in_memory {
        SqliteConnectOptions::from_str("sqlite::memory:")?
    } else {
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
    };
    let options = options.foreign_keys(true);

    // An in-memory database lives only as long as its single connection
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", db_path))?;

    Ok(pool)
}

// Create all tables if absent; safe to run repeatedly
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    let migration_sql = include_str!("../../migrations/001_initial_schema.sql");
    sqlx::raw_sql(migration_sql)
        .execute(pool)
        .await
        .context("Failed to run migrations")?;

    Ok(())
}

/// Schema service over a SQLite pool
#[derive(Clone)]
pub struct SqliteSchema {
    pool: SqlitePool,
}

impl SqliteSchema {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaService for SqliteSchema {
    async fn ensure_created(&self) -> Result<()> {
        ensure_schema(&self.pool).await
    }
}

// List all categories ordered by id
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, description FROM categories ORDER BY id"
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

// List all listings in insertion order
pub async fn list_listings(pool: &SqlitePool) -> Result<Vec<Listing>> {
    let listings = sqlx::query_as::<_, Listing>(
        "SELECT id, user_id, category_id, title, description, make, model, year, condition,
                price, currency, listing_type, is_active, created_at, image_url
         FROM listings
         ORDER BY id"
    )
    .fetch_all(pool)
    .await?;

    Ok(listings)
}

// Count users registered under an email (case-insensitive)
pub async fn count_users_with_email(pool: &SqlitePool, email: &str) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await?;

    Ok(count)
}

// Count roles with a given name
pub async fn count_roles_named(pool: &SqlitePool, name: &str) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM roles WHERE name = ?")
        .bind(name)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
