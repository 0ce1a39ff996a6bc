//! Repository layer.
//!
//! One trait per entity describes the storage contract; `Pg*Repo` structs
//! implement it over a [`DbPool`](crate::DbPool). Every value is passed as a
//! bind parameter.
//!
//! `update` and `delete` do not check how many rows were affected: updating
//! or deleting an id that does not exist succeeds.

pub mod contact_repo;
pub mod experience_repo;
pub mod portfolio_repo;

pub use contact_repo::{ContactRepository, PgContactRepo};
pub use experience_repo::{ExperienceRepository, PgExperienceRepo};
pub use portfolio_repo::{PgPortfolioRepo, PortfolioRepository};
