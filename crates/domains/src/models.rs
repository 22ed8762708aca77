//! # Domain Models
//!
//! Storage-shaped records for the three nested resources. Records are owned
//! by the persistence adapter and referenced read-only by the core: entities
//! and use cases consume already-fetched records, they never construct or
//! mutate stored rows themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Soft-delete lifecycle of a comment or reply.
///
/// The only transition is `Active → Deleted`; `Deleted` is terminal. There
/// is no undelete, so no method produces `Active` from an existing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteState {
    Active,
    Deleted,
}

impl DeleteState {
    /// The single allowed transition. Idempotent: deleting a deleted
    /// resource stays `Deleted`.
    pub fn deleted(self) -> DeleteState {
        DeleteState::Deleted
    }

    pub fn is_deleted(self) -> bool {
        matches!(self, DeleteState::Deleted)
    }
}

/// A top-level discussion topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadRecord {
    /// Prefixed id, e.g. `thread-123`.
    pub id: String,
    pub title: String,
    pub body: String,
    /// User id of the creator; immutable after creation.
    pub owner: String,
    /// Creation timestamp; assigned once, never mutated.
    pub date: DateTime<Utc>,
}

/// A reply to a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Prefixed id, e.g. `comment-123`.
    pub id: String,
    /// Immutable parent reference; must exist at creation time.
    pub thread_id: String,
    pub owner: String,
    pub content: String,
    pub state: DeleteState,
    pub date: DateTime<Utc>,
}

/// A reply to a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyRecord {
    /// Prefixed id, e.g. `reply-123`.
    pub id: String,
    /// Immutable parent reference; must exist at creation time.
    pub comment_id: String,
    pub owner: String,
    pub content: String,
    pub state: DeleteState,
    pub date: DateTime<Utc>,
}

/// The thread projection joined with its author's username, as returned by
/// `ThreadRepository::get_thread_details`. The date is already rendered for
/// display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadDetails {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
}
