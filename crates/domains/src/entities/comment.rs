//! Comment entities: creation request, created-comment view, delete intent,
//! and the redacting read view.

use serde::Serialize;
use serde_json::Value;

use crate::error::{AuthorizationError, DomainError, DomainResult, NotFoundError};
use crate::models::CommentRecord;
use crate::payload::field;

use super::reply::ReplyDetails;

/// Placeholder shown in place of a soft-deleted comment's content.
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";

/// A validated request to comment on a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateComment {
    pub content: String,
    pub thread_id: String,
}

impl CreateComment {
    const TAG: &'static str = "CREATE_COMMENT";

    pub fn new(payload: &Value) -> DomainResult<Self> {
        let (Some(content), Some(thread_id)) =
            (field(payload, "content"), field(payload, "threadId"))
        else {
            return Err(DomainError::missing_property(Self::TAG));
        };
        let (Some(content), Some(thread_id)) = (content.as_str(), thread_id.as_str()) else {
            return Err(DomainError::invalid_data_type(Self::TAG));
        };

        Ok(Self {
            content: content.to_owned(),
            thread_id: thread_id.to_owned(),
        })
    }
}

/// The view of a freshly persisted comment, validated from the raw row the
/// storage adapter gets back from its insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl CreatedComment {
    const TAG: &'static str = "CREATED_COMMENT";

    pub fn from_row(row: &Value) -> DomainResult<Self> {
        let (Some(id), Some(content), Some(owner)) = (
            field(row, "id"),
            field(row, "content"),
            field(row, "owner"),
        ) else {
            return Err(DomainError::missing_property(Self::TAG));
        };
        let (Some(id), Some(content), Some(owner)) = (id.as_str(), content.as_str(), owner.as_str())
        else {
            return Err(DomainError::invalid_data_type(Self::TAG));
        };

        Ok(Self {
            id: id.to_owned(),
            content: content.to_owned(),
            owner: owner.to_owned(),
        })
    }
}

/// A validated, authorized intent to soft-delete a comment.
///
/// Check order is fixed: payload presence, payload types, existence of the
/// fetched record, then ownership. The fetch itself is the use case's job;
/// this entity stays pure and synchronous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    pub thread_id: String,
    pub comment_id: String,
}

impl DeleteComment {
    const TAG: &'static str = "DELETE_COMMENT";

    pub fn new(
        existing: Option<&CommentRecord>,
        payload: &Value,
        user_id: &str,
    ) -> DomainResult<Self> {
        let (Some(comment_id), Some(thread_id)) =
            (field(payload, "commentId"), field(payload, "threadId"))
        else {
            return Err(DomainError::missing_property(Self::TAG));
        };
        let (Some(comment_id), Some(thread_id)) = (comment_id.as_str(), thread_id.as_str()) else {
            return Err(DomainError::invalid_data_type(Self::TAG));
        };

        let Some(existing) = existing else {
            return Err(NotFoundError::Comment {
                comment_id: comment_id.to_owned(),
                thread_id: thread_id.to_owned(),
            }
            .into());
        };

        if existing.owner != user_id {
            return Err(AuthorizationError::DeleteComment.into());
        }

        Ok(Self {
            thread_id: thread_id.to_owned(),
            comment_id: comment_id.to_owned(),
        })
    }
}

/// The read view of one comment inside a thread detail, with soft-delete
/// redaction applied and its replies already materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDetails {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub replies: Vec<ReplyDetails>,
}

impl CommentDetails {
    const TAG: &'static str = "COMMENT_DETAILS";

    /// Builds the view from a raw storage row. `replies` defaults to empty
    /// when none are supplied. Redaction is a pure function of `is_delete`:
    /// the original content is kept in storage, only the view is redacted.
    pub fn new(row: &Value, replies: Option<Vec<ReplyDetails>>) -> DomainResult<Self> {
        let (Some(id), Some(username), Some(date), Some(content)) = (
            field(row, "id"),
            field(row, "username"),
            field(row, "date"),
            field(row, "content"),
        ) else {
            return Err(DomainError::missing_property(Self::TAG));
        };
        // A missing or non-boolean is_delete is a type failure, not a
        // missing property: the presence gate only covers the text fields.
        let (Some(id), Some(username), Some(date), Some(content), Some(is_delete)) = (
            id.as_str(),
            username.as_str(),
            date.as_str(),
            content.as_str(),
            row.get("is_delete").and_then(Value::as_bool),
        ) else {
            return Err(DomainError::invalid_data_type(Self::TAG));
        };

        Ok(Self {
            id: id.to_owned(),
            username: username.to_owned(),
            date: date.to_owned(),
            content: if is_delete {
                DELETED_COMMENT_PLACEHOLDER.to_owned()
            } else {
                content.to_owned()
            },
            replies: replies.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    use crate::models::DeleteState;

    fn comment_record(owner: &str) -> CommentRecord {
        CommentRecord {
            id: "comment-123".into(),
            thread_id: "thread-123".into(),
            owner: owner.into(),
            content: "a comment".into(),
            state: DeleteState::Active,
            date: Utc::now(),
        }
    }

    #[test]
    fn create_comment_rejects_missing_property() {
        let payload = json!({ "content": "a comment" });
        let err = CreateComment::new(&payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "CREATE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY"
        );
    }

    #[test]
    fn create_comment_rejects_wrong_data_type() {
        let payload = json!({ "content": "a comment", "threadId": 456 });
        let err = CreateComment::new(&payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "CREATE_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION"
        );
    }

    #[test]
    fn create_comment_round_trips_valid_payload() {
        let payload = json!({ "content": "a comment", "threadId": "thread-456" });
        let comment = CreateComment::new(&payload).unwrap();
        assert_eq!(comment.content, "a comment");
        assert_eq!(comment.thread_id, "thread-456");
    }

    #[test]
    fn created_comment_validates_row() {
        let row = json!({ "id": "comment-123", "owner": "user-123" });
        let err = CreatedComment::from_row(&row).unwrap_err();
        assert_eq!(
            err.to_string(),
            "CREATED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY"
        );

        let row = json!({ "id": "comment-123", "content": "a comment", "owner": "user-123" });
        let created = CreatedComment::from_row(&row).unwrap();
        assert_eq!(created.id, "comment-123");
        assert_eq!(created.content, "a comment");
        assert_eq!(created.owner, "user-123");
    }

    #[test]
    fn delete_comment_checks_payload_before_existence() {
        // Even with no record fetched, a malformed payload is reported as a
        // validation failure, never as not-found.
        let payload = json!({ "threadId": "thread-123" });
        let err = DeleteComment::new(None, &payload, "user-123").unwrap_err();
        assert_eq!(
            err.to_string(),
            "DELETE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY"
        );

        let payload = json!({ "threadId": "thread-123", "commentId": 1 });
        let err = DeleteComment::new(None, &payload, "user-123").unwrap_err();
        assert_eq!(
            err.to_string(),
            "DELETE_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION"
        );
    }

    #[test]
    fn delete_comment_rejects_absent_record() {
        let payload = json!({ "threadId": "thread-123", "commentId": "comment-123" });
        let err = DeleteComment::new(None, &payload, "user-123").unwrap_err();
        assert_eq!(
            err,
            NotFoundError::Comment {
                comment_id: "comment-123".into(),
                thread_id: "thread-123".into(),
            }
            .into()
        );
    }

    #[test]
    fn delete_comment_rejects_non_owner() {
        let payload = json!({ "threadId": "thread-123", "commentId": "comment-123" });
        let existing = comment_record("user-123");
        let err = DeleteComment::new(Some(&existing), &payload, "user-456").unwrap_err();
        assert_eq!(err, AuthorizationError::DeleteComment.into());
    }

    #[test]
    fn delete_comment_accepts_owner() {
        let payload = json!({ "threadId": "thread-123", "commentId": "comment-123" });
        let existing = comment_record("user-123");
        let intent = DeleteComment::new(Some(&existing), &payload, "user-123").unwrap();
        assert_eq!(intent.thread_id, "thread-123");
        assert_eq!(intent.comment_id, "comment-123");
    }

    #[test]
    fn comment_details_validates_row() {
        let row = json!({ "id": "comment-123", "username": "johndoe", "date": "2023" });
        let err = CommentDetails::new(&row, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "COMMENT_DETAILS.NOT_CONTAIN_NEEDED_PROPERTY"
        );

        // is_delete is only checked in the type phase.
        let row = json!({
            "id": "comment-123", "username": "johndoe",
            "date": "2023", "content": "a comment",
        });
        let err = CommentDetails::new(&row, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "COMMENT_DETAILS.NOT_MEET_DATA_TYPE_SPECIFICATION"
        );
    }

    #[test]
    fn comment_details_passes_content_through_when_active() {
        let row = json!({
            "id": "comment-123", "username": "johndoe",
            "date": "2023", "content": "a comment", "is_delete": false,
        });
        let details = CommentDetails::new(&row, None).unwrap();
        assert_eq!(details.content, "a comment");
        assert!(details.replies.is_empty());
    }

    #[test]
    fn comment_details_redacts_deleted_content() {
        let row = json!({
            "id": "comment-123", "username": "johndoe",
            "date": "2023", "content": "a comment", "is_delete": true,
        });
        let details = CommentDetails::new(&row, None).unwrap();
        assert_eq!(details.content, DELETED_COMMENT_PLACEHOLDER);
    }
}
