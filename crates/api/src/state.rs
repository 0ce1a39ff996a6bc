use std::sync::Arc;

use porto_db::repositories::{PgContactRepo, PgExperienceRepo, PgPortfolioRepo};
use porto_db::DbPool;
use porto_service::{
    ContactManager, ContactService, ExperienceManager, ExperienceService, PortfolioManager,
    PortfolioService,
};

use crate::config::ServerConfig;
use crate::templates::{FileTemplates, TemplateRenderer};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; every collaborator sits behind an `Arc`. Services and
/// the template renderer are trait objects so tests can swap in doubles.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health probe.
    pub pool: DbPool,
    pub portfolios: Arc<dyn PortfolioService>,
    pub experiences: Arc<dyn ExperienceService>,
    pub contacts: Arc<dyn ContactService>,
    pub templates: Arc<dyn TemplateRenderer>,
}

impl AppState {
    /// Wire PostgreSQL repositories, services and file-based templates.
    pub fn new(pool: DbPool, config: &ServerConfig) -> Self {
        let portfolios = PortfolioManager::new(Arc::new(PgPortfolioRepo::new(pool.clone())));
        let experiences = ExperienceManager::new(Arc::new(PgExperienceRepo::new(pool.clone())));
        let contacts = ContactManager::new(Arc::new(PgContactRepo::new(pool.clone())));
        let templates = FileTemplates::new(&config.template_dir);

        Self {
            pool,
            portfolios: Arc::new(portfolios),
            experiences: Arc::new(experiences),
            contacts: Arc::new(contacts),
            templates: Arc::new(templates),
        }
    }
}
