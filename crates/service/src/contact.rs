//! Contact message service. Contact messages are created and deleted, never
//! edited.

use std::sync::Arc;

use async_trait::async_trait;
use porto_core::types::DbId;
use porto_db::models::Contact;
use porto_db::repositories::ContactRepository;

use crate::error::ServiceError;
use crate::validation::validate_contact;

/// Business operations on contact messages.
#[async_trait]
pub trait ContactService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Contact>, ServiceError>;

    async fn get_by_id(&self, id: DbId) -> Result<Contact, ServiceError>;

    async fn create(&self, contact: &mut Contact) -> Result<(), ServiceError>;

    async fn delete(&self, id: DbId) -> Result<(), ServiceError>;
}

/// [`ContactService`] backed by a [`ContactRepository`].
#[derive(Clone)]
pub struct ContactManager {
    repo: Arc<dyn ContactRepository>,
}

impl ContactManager {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ContactService for ContactManager {
    async fn get_all(&self) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.repo.get_all().await?)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Contact, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    async fn create(&self, contact: &mut Contact) -> Result<(), ServiceError> {
        if let Err(e) = validate_contact(contact) {
            tracing::warn!(error = %e, "Contact create rejected by validation");
            return Err(e.into());
        }
        if let Err(e) = self.repo.create(contact).await {
            tracing::error!(error = %e, "Contact create failed in storage");
            return Err(e.into());
        }
        tracing::info!(id = contact.id, ?contact, "Created contact");
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), ServiceError> {
        if let Err(e) = self.repo.delete(id).await {
            tracing::error!(id, error = %e, "Contact delete failed in storage");
            return Err(e.into());
        }
        tracing::info!(id, "Deleted contact");
        Ok(())
    }
}
