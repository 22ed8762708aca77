//! # API Adapters
//!
//! Transport-side collaborators of the forum core. The core produces typed,
//! locale-agnostic errors; this crate turns them into the user-facing
//! sentences and client-error categories a transport shell serves. Keeping
//! the translation here keeps the core itself locale-free.

pub mod client_error;
pub mod translator;

pub use client_error::ClientError;
pub use translator::translate;
