//! Portfolio backend HTTP server library.
//!
//! Exposes configuration, state, error handling, handlers and routes so
//! integration tests and the binary entrypoint share the same router.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod templates;
