//! Thread use cases: creating a thread and assembling the nested detail
//! view from flat storage rows.

use std::sync::Arc;

use serde_json::Value;

use domains::entities::{CommentDetails, CreateThread, CreatedThread, ReplyDetails, ThreadDetailsView};
use domains::error::{DomainResult, NotFoundError};
use domains::payload::raw_str;
use domains::ports::{CommentRepository, ThreadRepository};

/// Validates the payload and persists a new thread owned by the caller.
pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, user_id: &str, payload: &Value) -> DomainResult<CreatedThread> {
        let new_thread = CreateThread::new(payload)?;

        self.thread_repository.add_thread(user_id, &new_thread).await
    }
}

/// Resolves a thread and maps its flat comment/reply rows into the nested
/// detail view, applying soft-delete redaction. Ordering is whatever storage
/// supplied (ascending chronological); the core does not re-sort.
pub struct GetThreadDetailsUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl GetThreadDetailsUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Value) -> DomainResult<ThreadDetailsView> {
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

        let details = self.thread_repository.get_thread_details(thread_id).await?;
        let comment_rows = self.comment_repository.get_thread_comments(thread_id).await?;

        let mut comments = Vec::with_capacity(comment_rows.len());
        for row in &comment_rows {
            let replies = match row.get("replies").and_then(Value::as_array) {
                Some(rows) => rows
                    .iter()
                    .map(ReplyDetails::new)
                    .collect::<DomainResult<Vec<_>>>()?,
                None => Vec::new(),
            };
            comments.push(CommentDetails::new(row, Some(replies))?);
        }

        Ok(ThreadDetailsView::new(details, comments))
    }
}
