//! Repository for the `portfolios` table.

use async_trait::async_trait;
use porto_core::types::DbId;

use crate::error::StorageError;
use crate::models::{Portfolio, Record};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, image_url, link";

/// Storage contract for portfolio projects.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// All rows in store order. An empty table yields an empty list.
    async fn get_all(&self) -> Result<Vec<Portfolio>, StorageError>;

    /// Fetch one row, failing with [`StorageError::NotFound`] when absent.
    async fn get_by_id(&self, id: DbId) -> Result<Portfolio, StorageError>;

    /// Insert a row and write the generated id back into `portfolio`.
    async fn create(&self, portfolio: &mut Portfolio) -> Result<(), StorageError>;

    /// Overwrite the row identified by `portfolio.id`.
    async fn update(&self, portfolio: &Portfolio) -> Result<(), StorageError>;

    async fn delete(&self, id: DbId) -> Result<(), StorageError>;
}

/// PostgreSQL-backed [`PortfolioRepository`].
#[derive(Clone)]
pub struct PgPortfolioRepo {
    pool: DbPool,
}

impl PgPortfolioRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioRepository for PgPortfolioRepo {
    async fn get_all(&self) -> Result<Vec<Portfolio>, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM portfolios");
        let rows = sqlx::query_as::<_, Portfolio>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Portfolio, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM portfolios WHERE id = $1");
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound {
                entity: Portfolio::ENTITY,
                id,
            })
    }

    async fn create(&self, portfolio: &mut Portfolio) -> Result<(), StorageError> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO portfolios (name, description, image_url, link)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&portfolio.name)
        .bind(&portfolio.description)
        .bind(&portfolio.image_url)
        .bind(&portfolio.link)
        .fetch_one(&self.pool)
        .await?;
        portfolio.set_id(id);
        Ok(())
    }

    async fn update(&self, portfolio: &Portfolio) -> Result<(), StorageError> {
        sqlx::query(
            "UPDATE portfolios SET name = $1, description = $2, image_url = $3, link = $4
             WHERE id = $5",
        )
        .bind(&portfolio.name)
        .bind(&portfolio.description)
        .bind(&portfolio.image_url)
        .bind(&portfolio.link)
        .bind(portfolio.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM portfolios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
