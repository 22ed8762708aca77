//! Reply use cases. The existence chain is strict: thread first, then
//! comment, then (for deletes) the reply itself.

use std::sync::Arc;

use serde_json::Value;

use domains::entities::{CreateReply, CreatedReply, DeleteReply};
use domains::error::{DomainResult, NotFoundError};
use domains::payload::raw_str;
use domains::ports::{CommentRepository, ReplyRepository, ThreadRepository};

/// Validates the payload and persists a reply on an existing comment.
pub struct AddReplyUseCase {
    reply_repository: Arc<dyn ReplyRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddReplyUseCase {
    pub fn new(
        reply_repository: Arc<dyn ReplyRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            reply_repository,
            comment_repository,
            thread_repository,
        }
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, user_id: &str, payload: &Value) -> DomainResult<CreatedReply> {
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

        if self
            .comment_repository
            .find_comment_by_id(comment_id, thread_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Comment {
                comment_id: comment_id.to_owned(),
                thread_id: thread_id.to_owned(),
            }
            .into());
        }

        let new_reply = CreateReply::new(payload)?;

        self.reply_repository.add_reply(user_id, &new_reply).await
    }
}

/// Soft-deletes a reply after the full existence chain and the ownership
/// check.
pub struct DeleteReplyUseCase {
    reply_repository: Arc<dyn ReplyRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(
        reply_repository: Arc<dyn ReplyRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            reply_repository,
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

        if self
            .comment_repository
            .find_comment_by_id(comment_id, thread_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Comment {
                comment_id: comment_id.to_owned(),
                thread_id: thread_id.to_owned(),
            }
            .into());
        }

        let reply_id = raw_str(payload, "replyId");
        let existing = self
            .reply_repository
            .find_reply_by_id(reply_id, comment_id)
            .await?;

        let intent = DeleteReply::new(existing.as_ref(), payload, user_id)?;

        self.reply_repository.delete_reply(user_id, &intent).await
    }
}
