// Staged entity stores for categories and listings

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use crate::domain::{Category, NewListing};
use crate::services::EntityStore;

/// A row type that can be written to its table
#[async_trait]
pub trait Record: Send + Sync + 'static {
    const TABLE: &'static str;

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<()>;
}

#[async_trait]
impl Record for Category {
    const TABLE: &'static str = "categories";

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<()> {
        // Explicit id: listings reference categories by these fixed ids
        sqlx::query("INSERT INTO categories (id, name, description) VALUES (?, ?, ?)")
            .bind(self.id)
            .bind(&self.name)
            .bind(&self.description)
            .execute(&mut *conn)
            .await
            .with_context(|| format!("Failed to insert category {}", self.id))?;

        Ok(())
    }
}

#[async_trait]
impl Record for NewListing {
    const TABLE: &'static str = "listings";

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<()> {
        sqlx::query(
            "INSERT INTO listings
             (user_id, category_id, title, description, make, model, year, condition,
              price, currency, listing_type, is_active, created_at, image_url)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&self.user_id)
        .bind(self.category_id)
        .bind(&self.title)
        .bind(&self.description)
        .bind(&self.make)
        .bind(&self.model)
        .bind(self.year)
        .bind(&self.condition)
        .bind(self.price)
        .bind(&self.currency)
        .bind(&self.listing_type)
        .bind(self.is_active)
        .bind(self.created_at)
        .bind(&self.image_url)
        .execute(&mut *conn)
        .await
        .with_context(|| format!("Failed to insert listing '{}'", self.title))?;

        Ok(())
    }
}

/// Entity store over one SQLite table. Staged rows are written in a single
/// transaction on `commit`.
pub struct SqliteStore<T> {
    pool: SqlitePool,
    pending: Vec<T>,
}

impl<T: Record> SqliteStore<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            pending: Vec::new(),
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[async_trait]
impl<T: Record> EntityStore<T> for SqliteStore<T> {
    async fn any(&self) -> Result<bool> {
        let exists: i64 =
            sqlx::query_scalar(&format!("SELECT EXISTS(SELECT 1 FROM {})", T::TABLE))
                .fetch_one(&self.pool)
                .await
                .with_context(|| format!("Failed to query {}", T::TABLE))?;

        Ok(exists != 0)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", T::TABLE))
            .fetch_one(&self.pool)
            .await
            .with_context(|| format!("Failed to count {}", T::TABLE))?;

        Ok(count)
    }

    fn add_range(&mut self, rows: Vec<T>) {
        self.pending.extend(rows);
    }

    async fn commit(&mut self) -> Result<u64> {
        if self.pending.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await.context("Failed to begin transaction")?;
        for row in &self.pending {
            row.insert(&mut *tx).await?;
        }
        tx.commit()
            .await
            .with_context(|| format!("Failed to commit {}", T::TABLE))?;

        let written = self.pending.len() as u64;
        self.pending.clear();
        Ok(written)
    }
}
