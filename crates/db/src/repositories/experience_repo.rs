//! Repository for the `experiences` table.

use async_trait::async_trait;
use porto_core::types::DbId;

use crate::error::StorageError;
use crate::models::{Experience, Record};
use crate::DbPool;

const COLUMNS: &str = "id, title, company, start_date, end_date, description";

/// Storage contract for work experiences.
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Experience>, StorageError>;

    async fn get_by_id(&self, id: DbId) -> Result<Experience, StorageError>;

    /// Insert a row and write the generated id back into `experience`.
    async fn create(&self, experience: &mut Experience) -> Result<(), StorageError>;

    async fn update(&self, experience: &Experience) -> Result<(), StorageError>;

    async fn delete(&self, id: DbId) -> Result<(), StorageError>;
}

/// PostgreSQL-backed [`ExperienceRepository`].
#[derive(Clone)]
pub struct PgExperienceRepo {
    pool: DbPool,
}

impl PgExperienceRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExperienceRepository for PgExperienceRepo {
    async fn get_all(&self) -> Result<Vec<Experience>, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM experiences");
        let rows = sqlx::query_as::<_, Experience>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Experience, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM experiences WHERE id = $1");
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound {
                entity: Experience::ENTITY,
                id,
            })
    }

    async fn create(&self, experience: &mut Experience) -> Result<(), StorageError> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO experiences (title, company, start_date, end_date, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&experience.title)
        .bind(&experience.company)
        .bind(&experience.start_date)
        .bind(&experience.end_date)
        .bind(&experience.description)
        .fetch_one(&self.pool)
        .await?;
        experience.set_id(id);
        Ok(())
    }

    async fn update(&self, experience: &Experience) -> Result<(), StorageError> {
        sqlx::query(
            "UPDATE experiences SET
                title = $1,
                company = $2,
                start_date = $3,
                end_date = $4,
                description = $5
             WHERE id = $6",
        )
        .bind(&experience.title)
        .bind(&experience.company)
        .bind(&experience.start_date)
        .bind(&experience.end_date)
        .bind(&experience.description)
        .bind(experience.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
