//! # Repository Ports
//!
//! The persistence contracts the use-case layer depends on. Any storage
//! adapter must implement these traits; the trait obligation itself replaces
//! the old runtime "method not implemented" signal. Mocks are generated by
//! mockall under `cfg(test)` or the `testing` feature.

use async_trait::async_trait;
use serde_json::Value;

use crate::entities::{
    CreateComment, CreateReply, CreateThread, CreatedComment, CreatedReply, CreatedThread,
    DeleteComment, DeleteReply,
};
use crate::error::DomainResult;
use crate::models::{CommentRecord, ReplyRecord, ThreadDetails, ThreadRecord};

/// Persistence contract for threads.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persists a validated thread owned by `user_id` and returns the
    /// created view mapped from the stored row.
    async fn add_thread(
        &self,
        user_id: &str,
        new_thread: &CreateThread,
    ) -> DomainResult<CreatedThread>;

    async fn find_thread_by_id(&self, thread_id: &str) -> DomainResult<Option<ThreadRecord>>;

    /// The thread header joined with its author's username.
    async fn get_thread_details(&self, thread_id: &str) -> DomainResult<ThreadDetails>;
}

/// Persistence contract for comments.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(
        &self,
        user_id: &str,
        new_comment: &CreateComment,
    ) -> DomainResult<CreatedComment>;

    async fn find_comment_by_id(
        &self,
        comment_id: &str,
        thread_id: &str,
    ) -> DomainResult<Option<CommentRecord>>;

    /// Idempotent soft delete; only flips the record's delete state.
    async fn delete_comment(&self, user_id: &str, intent: &DeleteComment) -> DomainResult<()>;

    /// Raw comment rows for one thread in ascending date order, each row
    /// embedding its reply rows (also ascending). Rows are storage-shaped
    /// (`id`, `username`, `date`, `content`, `is_delete`, `replies`); the
    /// detail entities validate and redact them.
    async fn get_thread_comments(&self, thread_id: &str) -> DomainResult<Vec<Value>>;
}

/// Persistence contract for replies.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, user_id: &str, new_reply: &CreateReply)
        -> DomainResult<CreatedReply>;

    async fn find_reply_by_id(
        &self,
        reply_id: &str,
        comment_id: &str,
    ) -> DomainResult<Option<ReplyRecord>>;

    /// Idempotent soft delete; only flips the record's delete state.
    async fn delete_reply(&self, user_id: &str, intent: &DeleteReply) -> DomainResult<()>;
}
