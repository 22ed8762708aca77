//! # Domains
//!
//! The pure core of the forum backend: validated entities, storage-shaped
//! record models, repository port traits, and the error taxonomy. Nothing in
//! this crate performs I/O; adapters plug in through the port traits.

pub mod entities;
pub mod error;
pub mod models;
pub mod payload;
pub mod ports;

pub use error::{AuthorizationError, DomainError, DomainResult, NotFoundError, ValidationError};
