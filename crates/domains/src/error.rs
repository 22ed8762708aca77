//! # DomainError
//!
//! Centralized error taxonomy for the forum core. Entities and use cases
//! only ever produce the first three kinds; `Internal` is reserved for
//! storage adapters reporting infrastructure failures.
//!
//! Validation failures keep the symbolic `ENTITY.KIND` code so the
//! transport-side translator can map them to user-facing sentences; the core
//! itself stays locale-agnostic.

use thiserror::Error;

/// Which validation gate an entity constructor failed.
///
/// The two kinds are mutually exclusive and ordered: every presence check
/// runs before any type check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// A required field is absent, null, or an empty string.
    MissingProperty,
    /// A field is present but carries the wrong primitive type.
    InvalidDataType,
}

impl ValidationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationKind::MissingProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            ValidationKind::InvalidDataType => "NOT_MEET_DATA_TYPE_SPECIFICATION",
        }
    }
}

/// A payload-shape failure raised by an entity constructor.
///
/// Displays as the symbolic code, e.g. `CREATE_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity}.{}", .kind.as_str())]
pub struct ValidationError {
    /// Symbolic tag of the entity whose constructor rejected the payload.
    pub entity: &'static str,
    pub kind: ValidationKind,
}

impl ValidationError {
    /// The full symbolic code, used as the translator lookup key.
    pub fn code(&self) -> String {
        self.to_string()
    }
}

/// A referenced resource does not exist, naming the resource and its
/// declared parent id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("thread '{thread_id}' not found")]
    Thread { thread_id: String },
    #[error("comment '{comment_id}' in thread '{thread_id}' not found")]
    Comment {
        comment_id: String,
        thread_id: String,
    },
    #[error("reply '{reply_id}' in comment '{comment_id}' not found")]
    Reply {
        reply_id: String,
        comment_id: String,
    },
}

/// The acting user does not own the resource being mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    #[error("access denied: not the owner of this comment")]
    DeleteComment,
    #[error("access denied: not the owner of this reply")]
    DeleteReply,
}

/// The primary error type for all core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    #[error("{0}")]
    Authorization(#[from] AuthorizationError),

    /// Infrastructure failure (e.g. storage backend down). Never raised by
    /// entities or use cases themselves.
    #[error("internal service error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn missing_property(entity: &'static str) -> Self {
        ValidationError {
            entity,
            kind: ValidationKind::MissingProperty,
        }
        .into()
    }

    pub fn invalid_data_type(entity: &'static str) -> Self {
        ValidationError {
            entity,
            kind: ValidationKind::InvalidDataType,
        }
        .into()
    }
}

/// A specialized Result type for the forum core.
pub type DomainResult<T> = std::result::Result<T, DomainError>;
