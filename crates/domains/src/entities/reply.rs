//! Reply entities: creation request, created-reply view, delete intent, and
//! the redacting read view.

use serde::Serialize;
use serde_json::Value;

use crate::error::{AuthorizationError, DomainError, DomainResult, NotFoundError};
use crate::models::ReplyRecord;
use crate::payload::field;

/// Placeholder shown in place of a soft-deleted reply's content.
pub const DELETED_REPLY_PLACEHOLDER: &str = "**balasan telah dihapus**";

/// A validated request to reply to a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReply {
    pub content: String,
    pub comment_id: String,
}

impl CreateReply {
    const TAG: &'static str = "CREATE_REPLY";

    pub fn new(payload: &Value) -> DomainResult<Self> {
        let (Some(content), Some(comment_id)) =
            (field(payload, "content"), field(payload, "commentId"))
        else {
            return Err(DomainError::missing_property(Self::TAG));
        };
        let (Some(content), Some(comment_id)) = (content.as_str(), comment_id.as_str()) else {
            return Err(DomainError::invalid_data_type(Self::TAG));
        };

        Ok(Self {
            content: content.to_owned(),
            comment_id: comment_id.to_owned(),
        })
    }
}

/// The view of a freshly persisted reply, validated from the raw row the
/// storage adapter gets back from its insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl CreatedReply {
    const TAG: &'static str = "CREATED_REPLY";

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

/// A validated, authorized intent to soft-delete a reply.
///
/// Same gate order as `DeleteComment`: payload presence, payload types,
/// existence, ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReply {
    pub comment_id: String,
    pub reply_id: String,
}

impl DeleteReply {
    const TAG: &'static str = "DELETE_REPLY";

    pub fn new(
        existing: Option<&ReplyRecord>,
        payload: &Value,
        user_id: &str,
    ) -> DomainResult<Self> {
        let (Some(comment_id), Some(reply_id)) =
            (field(payload, "commentId"), field(payload, "replyId"))
        else {
            return Err(DomainError::missing_property(Self::TAG));
        };
        let (Some(comment_id), Some(reply_id)) = (comment_id.as_str(), reply_id.as_str()) else {
            return Err(DomainError::invalid_data_type(Self::TAG));
        };

        let Some(existing) = existing else {
            return Err(NotFoundError::Reply {
                reply_id: reply_id.to_owned(),
                comment_id: comment_id.to_owned(),
            }
            .into());
        };

        if existing.owner != user_id {
            return Err(AuthorizationError::DeleteReply.into());
        }

        Ok(Self {
            comment_id: comment_id.to_owned(),
            reply_id: reply_id.to_owned(),
        })
    }
}

/// The read view of one reply inside a comment detail, with soft-delete
/// redaction applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyDetails {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
}

impl ReplyDetails {
    const TAG: &'static str = "REPLY_DETAILS";

    pub fn new(row: &Value) -> DomainResult<Self> {
        let (Some(id), Some(username), Some(date), Some(content)) = (
            field(row, "id"),
            field(row, "username"),
            field(row, "date"),
            field(row, "content"),
        ) else {
            return Err(DomainError::missing_property(Self::TAG));
        };
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
                DELETED_REPLY_PLACEHOLDER.to_owned()
            } else {
                content.to_owned()
            },
        })
    }
}
