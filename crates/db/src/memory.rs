//! In-memory repositories for tests.
//!
//! [`MemoryStore`] keeps rows in insertion order, hands out ids from 1, and
//! counts every repository call so tests can assert that a request was
//! rejected before reaching storage. [`MemoryStore::set_failing`] makes every
//! subsequent call fail with a database error.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use porto_core::types::DbId;
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::models::{Contact, Experience, Portfolio, Record};
use crate::repositories::{ContactRepository, ExperienceRepository, PortfolioRepository};

pub struct MemoryStore<T> {
    rows: Mutex<Vec<T>>,
    next_id: AtomicI64,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::with_rows(Vec::new())
    }
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. Ids continue after the largest seeded id.
    pub fn with_rows(rows: Vec<T>) -> Self {
        let max_id = rows.iter().map(Record::id).max().unwrap_or(0);
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicI64::new(max_id + 1),
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Number of repository calls made so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of the stored rows.
    pub async fn rows(&self) -> Vec<T> {
        self.rows.lock().await.clone()
    }

    fn enter(&self) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    async fn all(&self) -> Result<Vec<T>, StorageError> {
        self.enter()?;
        Ok(self.rows().await)
    }

    async fn find(&self, id: DbId) -> Result<T, StorageError> {
        self.enter()?;
        self.rows
            .lock()
            .await
            .iter()
            .find(|row| row.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound {
                entity: T::ENTITY,
                id,
            })
    }

    async fn insert(&self, record: &mut T) -> Result<(), StorageError> {
        self.enter()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        record.set_id(id);
        self.rows.lock().await.push(record.clone());
        Ok(())
    }

    async fn replace(&self, record: &T) -> Result<(), StorageError> {
        self.enter()?;
        let mut rows = self.rows.lock().await;
        if let Some(row) = rows.iter_mut().find(|row| row.id() == record.id()) {
            *row = record.clone();
        }
        Ok(())
    }

    async fn remove(&self, id: DbId) -> Result<(), StorageError> {
        self.enter()?;
        self.rows.lock().await.retain(|row| row.id() != id);
        Ok(())
    }
}

#[async_trait]
impl PortfolioRepository for MemoryStore<Portfolio> {
    async fn get_all(&self) -> Result<Vec<Portfolio>, StorageError> {
        self.all().await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Portfolio, StorageError> {
        self.find(id).await
    }

    async fn create(&self, portfolio: &mut Portfolio) -> Result<(), StorageError> {
        self.insert(portfolio).await
    }

    async fn update(&self, portfolio: &Portfolio) -> Result<(), StorageError> {
        self.replace(portfolio).await
    }

    async fn delete(&self, id: DbId) -> Result<(), StorageError> {
        self.remove(id).await
    }
}

#[async_trait]
impl ExperienceRepository for MemoryStore<Experience> {
    async fn get_all(&self) -> Result<Vec<Experience>, StorageError> {
        self.all().await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Experience, StorageError> {
        self.find(id).await
    }

    async fn create(&self, experience: &mut Experience) -> Result<(), StorageError> {
        self.insert(experience).await
    }

    async fn update(&self, experience: &Experience) -> Result<(), StorageError> {
        self.replace(experience).await
    }

    async fn delete(&self, id: DbId) -> Result<(), StorageError> {
        self.remove(id).await
    }
}

#[async_trait]
impl ContactRepository for MemoryStore<Contact> {
    async fn get_all(&self) -> Result<Vec<Contact>, StorageError> {
        self.all().await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Contact, StorageError> {
        self.find(id).await
    }

    async fn create(&self, contact: &mut Contact) -> Result<(), StorageError> {
        self.insert(contact).await
    }

    async fn delete(&self, id: DbId) -> Result<(), StorageError> {
        self.remove(id).await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn project(name: &str) -> Portfolio {
        Portfolio {
            name: name.to_string(),
            description: "desc".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = MemoryStore::<Portfolio>::new();
        let mut first = project("one");
        let mut second = project("two");
        PortfolioRepository::create(&store, &mut first).await.unwrap();
        PortfolioRepository::create(&store, &mut second).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(PortfolioRepository::get_all(&store).await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn seeded_rows_keep_ids_unique() {
        let mut seeded = project("seed");
        seeded.id = 10;
        let store = MemoryStore::with_rows(vec![seeded]);

        let mut fresh = project("fresh");
        PortfolioRepository::create(&store, &mut fresh).await.unwrap();
        assert_eq!(fresh.id, 11);
    }

    #[tokio::test]
    async fn get_by_id_reports_missing_row() {
        let store = MemoryStore::<Contact>::new();
        assert_matches!(
            ContactRepository::get_by_id(&store, 5).await,
            Err(StorageError::NotFound { entity: "Contact", id: 5 })
        );
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_id_succeed() {
        let store = MemoryStore::<Experience>::new();
        let ghost = Experience {
            id: 42,
            title: "t".into(),
            ..Default::default()
        };
        ExperienceRepository::update(&store, &ghost).await.unwrap();
        ExperienceRepository::delete(&store, 42).await.unwrap();
        assert!(store.rows().await.is_empty());
    }

    #[tokio::test]
    async fn failing_store_counts_calls() {
        let store = MemoryStore::<Portfolio>::new();
        store.set_failing(true);
        assert_matches!(
            PortfolioRepository::get_all(&store).await,
            Err(StorageError::Database(_))
        );
        assert_eq!(store.calls(), 1);
    }
}
