//! Portfolio project service.

use std::sync::Arc;

use async_trait::async_trait;
use porto_core::error::CoreError;
use porto_core::types::DbId;
use porto_db::models::Portfolio;
use porto_db::repositories::PortfolioRepository;

use crate::error::ServiceError;
use crate::validation::validate_portfolio;

/// Business operations on portfolio projects.
#[async_trait]
pub trait PortfolioService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Portfolio>, ServiceError>;

    async fn get_by_id(&self, id: DbId) -> Result<Portfolio, ServiceError>;

    /// Validate, then insert. On success `portfolio.id` holds the new id.
    async fn create(&self, portfolio: &mut Portfolio) -> Result<(), ServiceError>;

    /// Requires a non-zero id, then validates and overwrites the row.
    async fn update(&self, portfolio: &Portfolio) -> Result<(), ServiceError>;

    async fn delete(&self, id: DbId) -> Result<(), ServiceError>;
}

/// [`PortfolioService`] backed by a [`PortfolioRepository`].
#[derive(Clone)]
pub struct PortfolioManager {
    repo: Arc<dyn PortfolioRepository>,
}

impl PortfolioManager {
    pub fn new(repo: Arc<dyn PortfolioRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PortfolioService for PortfolioManager {
    async fn get_all(&self) -> Result<Vec<Portfolio>, ServiceError> {
        Ok(self.repo.get_all().await?)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Portfolio, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    async fn create(&self, portfolio: &mut Portfolio) -> Result<(), ServiceError> {
        if let Err(e) = validate_portfolio(portfolio) {
            tracing::warn!(error = %e, "Portfolio create rejected by validation");
            return Err(e.into());
        }
        if let Err(e) = self.repo.create(portfolio).await {
            tracing::error!(error = %e, "Portfolio create failed in storage");
            return Err(e.into());
        }
        tracing::info!(id = portfolio.id, ?portfolio, "Created portfolio");
        Ok(())
    }

    async fn update(&self, portfolio: &Portfolio) -> Result<(), ServiceError> {
        if portfolio.id == 0 {
            tracing::warn!("Portfolio update rejected: id is required");
            return Err(CoreError::IdentityRequired.into());
        }
        if let Err(e) = validate_portfolio(portfolio) {
            tracing::warn!(id = portfolio.id, error = %e, "Portfolio update rejected by validation");
            return Err(e.into());
        }
        if let Err(e) = self.repo.update(portfolio).await {
            tracing::error!(id = portfolio.id, error = %e, "Portfolio update failed in storage");
            return Err(e.into());
        }
        tracing::info!(id = portfolio.id, ?portfolio, "Updated portfolio");
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), ServiceError> {
        if let Err(e) = self.repo.delete(id).await {
            tracing::error!(id, error = %e, "Portfolio delete failed in storage");
            return Err(e.into());
        }
        tracing::info!(id, "Deleted portfolio");
        Ok(())
    }
}
