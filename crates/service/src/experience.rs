//! Work experience service.

use std::sync::Arc;

use async_trait::async_trait;
use porto_core::error::CoreError;
use porto_core::types::DbId;
use porto_db::models::Experience;
use porto_db::repositories::ExperienceRepository;

use crate::error::ServiceError;
use crate::validation::validate_experience;

/// Business operations on work experiences.
#[async_trait]
pub trait ExperienceService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Experience>, ServiceError>;

    async fn get_by_id(&self, id: DbId) -> Result<Experience, ServiceError>;

    async fn create(&self, experience: &mut Experience) -> Result<(), ServiceError>;

    async fn update(&self, experience: &Experience) -> Result<(), ServiceError>;

    async fn delete(&self, id: DbId) -> Result<(), ServiceError>;
}

/// [`ExperienceService`] backed by an [`ExperienceRepository`].
#[derive(Clone)]
pub struct ExperienceManager {
    repo: Arc<dyn ExperienceRepository>,
}

impl ExperienceManager {
    pub fn new(repo: Arc<dyn ExperienceRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ExperienceService for ExperienceManager {
    async fn get_all(&self) -> Result<Vec<Experience>, ServiceError> {
        Ok(self.repo.get_all().await?)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Experience, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    async fn create(&self, experience: &mut Experience) -> Result<(), ServiceError> {
        if let Err(e) = validate_experience(experience) {
            tracing::warn!(error = %e, "Experience create rejected by validation");
            return Err(e.into());
        }
        if let Err(e) = self.repo.create(experience).await {
            tracing::error!(error = %e, "Experience create failed in storage");
            return Err(e.into());
        }
        tracing::info!(id = experience.id, ?experience, "Created experience");
        Ok(())
    }

    async fn update(&self, experience: &Experience) -> Result<(), ServiceError> {
        if experience.id == 0 {
            tracing::warn!("Experience update rejected: id is required");
            return Err(CoreError::IdentityRequired.into());
        }
        if let Err(e) = validate_experience(experience) {
            tracing::warn!(id = experience.id, error = %e, "Experience update rejected by validation");
            return Err(e.into());
        }
        if let Err(e) = self.repo.update(experience).await {
            tracing::error!(id = experience.id, error = %e, "Experience update failed in storage");
            return Err(e.into());
        }
        tracing::info!(id = experience.id, ?experience, "Updated experience");
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), ServiceError> {
        if let Err(e) = self.repo.delete(id).await {
            tracing::error!(id, error = %e, "Experience delete failed in storage");
            return Err(e.into());
        }
        tracing::info!(id, "Deleted experience");
        Ok(())
    }
}
