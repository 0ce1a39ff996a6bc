//! Business rules for the portfolio backend.
//!
//! Every service wraps the matching repository: reads pass straight
//! through, creates and updates are validated first, and updates are
//! refused outright when the record carries no id. Storage failures are
//! surfaced unchanged inside [`ServiceError::Storage`].

pub mod contact;
pub mod error;
pub mod experience;
pub mod portfolio;
pub mod validation;

pub use contact::{ContactManager, ContactService};
pub use error::ServiceError;
pub use experience::{ExperienceManager, ExperienceService};
pub use portfolio::{PortfolioManager, PortfolioService};
