//! # In-memory repositories
//!
//! DashMap-backed implementations of the three ports. Ids are prefixed
//! UUIDv7 strings, so insertion order and chronological order coincide.
//! Deletes are idempotent state flips, mirroring the SQL
//! `UPDATE … SET is_delete = true` the production backend issues.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use dashmap::DashMap;
use serde_json::{json, Value};
use uuid::Uuid;

use domains::entities::{
    CreateComment, CreateReply, CreateThread, CreatedComment, CreatedReply, CreatedThread,
    DeleteComment, DeleteReply,
};
use domains::error::{DomainResult, NotFoundError};
use domains::models::{CommentRecord, DeleteState, ReplyRecord, ThreadDetails, ThreadRecord};
use domains::ports::{CommentRepository, ReplyRepository, ThreadRepository};

fn render_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Shared backing store for all three repositories. Users are kept here too
/// so the detail projections can join owner ids to usernames.
#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<String, String>,
    threads: DashMap<String, ThreadRecord>,
    comments: DashMap<String, CommentRecord>,
    replies: DashMap<String, ReplyRecord>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn register_user(&self, user_id: &str, username: &str) {
        self.users.insert(user_id.to_owned(), username.to_owned());
    }

    /// Unregistered owners fall back to their raw id, so read projections
    /// never fail on a missing join.
    fn username(&self, user_id: &str) -> String {
        self.users
            .get(user_id)
            .map(|name| name.clone())
            .unwrap_or_else(|| user_id.to_owned())
    }
}

pub struct MemoryThreadRepository {
    store: Arc<MemoryStore>,
}

impl MemoryThreadRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ThreadRepository for MemoryThreadRepository {
    async fn add_thread(
        &self,
        user_id: &str,
        new_thread: &CreateThread,
    ) -> DomainResult<CreatedThread> {
        let thread_id = format!("thread-{}", Uuid::now_v7());

        let record = ThreadRecord {
            id: thread_id.clone(),
            title: new_thread.title.clone(),
            body: new_thread.body.clone(),
            owner: user_id.to_owned(),
            date: Utc::now(),
        };
        self.store.threads.insert(thread_id.clone(), record);
        tracing::debug!(%thread_id, "thread stored");

        CreatedThread::from_row(&json!({
            "id": thread_id,
            "title": &new_thread.title,
            "owner": user_id,
        }))
    }

    async fn find_thread_by_id(&self, thread_id: &str) -> DomainResult<Option<ThreadRecord>> {
        Ok(self.store.threads.get(thread_id).map(|r| r.clone()))
    }

    async fn get_thread_details(&self, thread_id: &str) -> DomainResult<ThreadDetails> {
        let Some(record) = self.store.threads.get(thread_id) else {
            return Err(NotFoundError::Thread {
                thread_id: thread_id.to_owned(),
            }
            .into());
        };

        Ok(ThreadDetails {
            id: record.id.clone(),
            title: record.title.clone(),
            body: record.body.clone(),
            date: render_date(record.date),
            username: self.store.username(&record.owner),
        })
    }
}

pub struct MemoryCommentRepository {
    store: Arc<MemoryStore>,
}

impl MemoryCommentRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    fn reply_rows(&self, comment_id: &str) -> Vec<Value> {
        let mut replies: Vec<ReplyRecord> = self
            .store
            .replies
            .iter()
            .filter(|r| r.comment_id == comment_id)
            .map(|r| r.clone())
            .collect();
        // UUIDv7 ids are monotonic, which breaks ties for rows created in
        // the same millisecond.
        replies.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        replies
            .into_iter()
            .map(|reply| {
                json!({
                    "id": reply.id,
                    "username": self.store.username(&reply.owner),
                    "date": render_date(reply.date),
                    "content": reply.content,
                    "is_delete": reply.state.is_deleted(),
                })
            })
            .collect()
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn add_comment(
        &self,
        user_id: &str,
        new_comment: &CreateComment,
    ) -> DomainResult<CreatedComment> {
        let comment_id = format!("comment-{}", Uuid::now_v7());

        let record = CommentRecord {
            id: comment_id.clone(),
            thread_id: new_comment.thread_id.clone(),
            owner: user_id.to_owned(),
            content: new_comment.content.clone(),
            state: DeleteState::Active,
            date: Utc::now(),
        };
        self.store.comments.insert(comment_id.clone(), record);
        tracing::debug!(%comment_id, thread_id = %new_comment.thread_id, "comment stored");

        CreatedComment::from_row(&json!({
            "id": comment_id,
            "content": &new_comment.content,
            "owner": user_id,
        }))
    }

    async fn find_comment_by_id(
        &self,
        comment_id: &str,
        thread_id: &str,
    ) -> DomainResult<Option<CommentRecord>> {
        Ok(self
            .store
            .comments
            .get(comment_id)
            .filter(|r| r.thread_id == thread_id)
            .map(|r| r.clone()))
    }

    async fn delete_comment(&self, user_id: &str, intent: &DeleteComment) -> DomainResult<()> {
        // Same guard set as the SQL UPDATE: id, parent, and owner must all
        // match. Re-deleting an already deleted comment is a no-op.
        if let Some(mut record) = self.store.comments.get_mut(&intent.comment_id) {
            if record.thread_id == intent.thread_id && record.owner == user_id {
                record.state = record.state.deleted();
                tracing::debug!(comment_id = %intent.comment_id, "comment soft-deleted");
            }
        }
        Ok(())
    }

    async fn get_thread_comments(&self, thread_id: &str) -> DomainResult<Vec<Value>> {
        let mut comments: Vec<CommentRecord> = self
            .store
            .comments
            .iter()
            .filter(|r| r.thread_id == thread_id)
            .map(|r| r.clone())
            .collect();
        comments.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        Ok(comments
            .into_iter()
            .map(|comment| {
                json!({
                    "id": &comment.id,
                    "username": self.store.username(&comment.owner),
                    "date": render_date(comment.date),
                    "content": comment.content,
                    "is_delete": comment.state.is_deleted(),
                    "replies": self.reply_rows(&comment.id),
                })
            })
            .collect())
    }
}

pub struct MemoryReplyRepository {
    store: Arc<MemoryStore>,
}

impl MemoryReplyRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReplyRepository for MemoryReplyRepository {
    async fn add_reply(
        &self,
        user_id: &str,
        new_reply: &CreateReply,
    ) -> DomainResult<CreatedReply> {
        let reply_id = format!("reply-{}", Uuid::now_v7());

        let record = ReplyRecord {
            id: reply_id.clone(),
            comment_id: new_reply.comment_id.clone(),
            owner: user_id.to_owned(),
            content: new_reply.content.clone(),
            state: DeleteState::Active,
            date: Utc::now(),
        };
        self.store.replies.insert(reply_id.clone(), record);
        tracing::debug!(%reply_id, comment_id = %new_reply.comment_id, "reply stored");

        CreatedReply::from_row(&json!({
            "id": reply_id,
            "content": &new_reply.content,
            "owner": user_id,
        }))
    }

    async fn find_reply_by_id(
        &self,
        reply_id: &str,
        comment_id: &str,
    ) -> DomainResult<Option<ReplyRecord>> {
        Ok(self
            .store
            .replies
            .get(reply_id)
            .filter(|r| r.comment_id == comment_id)
            .map(|r| r.clone()))
    }

    async fn delete_reply(&self, user_id: &str, intent: &DeleteReply) -> DomainResult<()> {
        if let Some(mut record) = self.store.replies.get_mut(&intent.reply_id) {
            if record.comment_id == intent.comment_id && record.owner == user_id {
                record.state = record.state.deleted();
                tracing::debug!(reply_id = %intent.reply_id, "reply soft-deleted");
            }
        }
        Ok(())
    }
}
