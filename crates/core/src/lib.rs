//! Shared building blocks for the portfolio backend.
//!
//! Holds the identity type, the domain error kinds raised before anything
//! reaches storage, and the field-shape rules the validators are built from.
//! Nothing in this crate performs I/O.

pub mod error;
pub mod rules;
pub mod types;
