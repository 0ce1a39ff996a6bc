//! Repository for the `contacts` table. Contact messages have no update path.

use async_trait::async_trait;
use porto_core::types::DbId;

use crate::error::StorageError;
use crate::models::{Contact, Record};
use crate::DbPool;

const COLUMNS: &str = "id, name, email, message";

/// Storage contract for contact messages.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Contact>, StorageError>;

    async fn get_by_id(&self, id: DbId) -> Result<Contact, StorageError>;

    /// Insert a row and write the generated id back into `contact`.
    async fn create(&self, contact: &mut Contact) -> Result<(), StorageError>;

    async fn delete(&self, id: DbId) -> Result<(), StorageError>;
}

/// PostgreSQL-backed [`ContactRepository`].
#[derive(Clone)]
pub struct PgContactRepo {
    pool: DbPool,
}

impl PgContactRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepo {
    async fn get_all(&self) -> Result<Vec<Contact>, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM contacts");
        let rows = sqlx::query_as::<_, Contact>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Contact, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound {
                entity: Contact::ENTITY,
                id,
            })
    }

    async fn create(&self, contact: &mut Contact) -> Result<(), StorageError> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO contacts (name, email, message) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.message)
        .fetch_one(&self.pool)
        .await?;
        contact.set_id(id);
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
