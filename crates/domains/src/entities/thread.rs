//! Thread entities: the validated creation request, the created-thread view
//! returned by storage, and the assembled detail view.

use serde::Serialize;
use serde_json::Value;

use crate::error::{DomainError, DomainResult};
use crate::models::ThreadDetails;
use crate::payload::field;

use super::comment::CommentDetails;

/// A validated request to create a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateThread {
    pub title: String,
    pub body: String,
}

impl CreateThread {
    const TAG: &'static str = "CREATE_THREAD";

    pub fn new(payload: &Value) -> DomainResult<Self> {
        let (Some(title), Some(body)) = (field(payload, "title"), field(payload, "body")) else {
            return Err(DomainError::missing_property(Self::TAG));
        };
        let (Some(title), Some(body)) = (title.as_str(), body.as_str()) else {
            return Err(DomainError::invalid_data_type(Self::TAG));
        };

        Ok(Self {
            title: title.to_owned(),
            body: body.to_owned(),
        })
    }
}

/// The view of a freshly persisted thread, validated from the raw row the
/// storage adapter gets back from its insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl CreatedThread {
    const TAG: &'static str = "CREATED_THREAD";

    pub fn from_row(row: &Value) -> DomainResult<Self> {
        let (Some(id), Some(title), Some(owner)) = (
            field(row, "id"),
            field(row, "title"),
            field(row, "owner"),
        ) else {
            return Err(DomainError::missing_property(Self::TAG));
        };
        let (Some(id), Some(title), Some(owner)) = (id.as_str(), title.as_str(), owner.as_str())
        else {
            return Err(DomainError::invalid_data_type(Self::TAG));
        };

        Ok(Self {
            id: id.to_owned(),
            title: title.to_owned(),
            owner: owner.to_owned(),
        })
    }
}

/// The fully assembled thread-detail projection handed to the transport
/// shell: the thread header plus its comments (each carrying its replies),
/// in ascending chronological order as supplied by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetailsView {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<CommentDetails>,
}

impl ThreadDetailsView {
    pub fn new(details: ThreadDetails, comments: Vec<CommentDetails>) -> Self {
        Self {
            id: details.id,
            title: details.title,
            body: details.body,
            date: details.date,
            username: details.username,
            comments,
        }
    }
}
