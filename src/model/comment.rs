// src/model/comment.rs
//! Comments and discussion threads.

use crate::types::{CommentId, DiscussionId, PageId, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parent::Parent;
use super::rich_text::{plain_text_of, RichText};
use super::user::PartialUser;

/// A comment entity as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub parent: Parent,
    pub discussion_id: DiscussionId,
    pub created_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<DateTime<Utc>>,
    pub created_by: PartialUser,
    pub rich_text: Vec<RichText>,
}

impl Comment {
    /// The comment body joined into plain text.
    pub fn plain_text(&self) -> String {
        plain_text_of(&self.rich_text)
    }
}

/// Body of `POST /comments`.
///
/// A comment lands either as a new thread on a page (`parent`) or as a
/// reply in an existing thread (`discussion_id`); exactly one of the
/// two must be set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCommentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion_id: Option<DiscussionId>,
    pub rich_text: Vec<RichText>,
}

impl CreateCommentRequest {
    /// Starts a new discussion on a page.
    pub fn on_page(page_id: PageId, rich_text: Vec<RichText>) -> Self {
        Self {
            parent: Some(Parent::page(page_id)),
            discussion_id: None,
            rich_text,
        }
    }

    /// Replies to an existing discussion.
    pub fn in_discussion(discussion_id: DiscussionId, rich_text: Vec<RichText>) -> Self {
        Self {
            parent: None,
            discussion_id: Some(discussion_id),
            rich_text,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.parent.is_some() == self.discussion_id.is_some() {
            return Err(ValidationError::ExclusiveFields {
                first: "parent",
                second: "discussion_id",
            });
        }
        if self.rich_text.is_empty() {
            return Err(ValidationError::EmptyField("rich_text"));
        }
        Ok(())
    }
}
