//! Comment use cases. Both resolve the parent thread before touching the
//! comment port; a missing thread is always reported first.

use std::sync::Arc;

use serde_json::Value;

use domains::entities::{CreateComment, CreatedComment, DeleteComment};
use domains::error::{DomainResult, NotFoundError};
use domains::payload::raw_str;
use domains::ports::{CommentRepository, ThreadRepository};

/// Validates the payload and persists a comment on an existing thread.
pub struct AddCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, user_id: &str, payload: &Value) -> DomainResult<CreatedComment> {
        let thread_id = raw_str(payload, "threadId");

        if self
            .thread_repository
            .find_thread_by_id(thread_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Thread {
                thread_id: thread_id.to_owned(),
            }
            .into());
        }

        let new_comment = CreateComment::new(payload)?;

        self.comment_repository
            .add_comment(user_id, &new_comment)
            .await
    }
}

/// Soft-deletes a comment after existence and ownership checks.
pub struct DeleteCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, user_id: &str, payload: &Value) -> DomainResult<()> {
        let thread_id = raw_str(payload, "threadId");

        if self
            .thread_repository
            .find_thread_by_id(thread_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Thread {
                thread_id: thread_id.to_owned(),
            }
            .into());
        }

        let comment_id = raw_str(payload, "commentId");
        let existing = self
            .comment_repository
            .find_comment_by_id(comment_id, thread_id)
            .await?;

        let intent = DeleteComment::new(existing.as_ref(), payload, user_id)?;

        self.comment_repository.delete_comment(user_id, &intent).await
    }
}
