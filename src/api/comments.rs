// src/api/comments.rs
//! The comments endpoint.

use crate::error::Result;
use crate::model::{Comment, CreateCommentRequest, PaginatedList};
use crate::types::{BlockId, PageSize, StartCursor};

use super::http::Transport;
use super::pagination::collect_all;

/// Operations on comments and discussion threads.
#[derive(Debug, Clone)]
pub struct CommentsEndpoint {
    transport: Transport,
}

impl CommentsEndpoint {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// `POST /comments`: adds a comment to a page or an existing
    /// discussion thread.
    pub async fn create(&self, request: CreateCommentRequest) -> Result<Comment> {
        request.validate()?;
        self.transport.post("comments", &request).await
    }

    /// `GET /comments`: one page of open comments under a block or
    /// page.
    pub async fn list(
        &self,
        block_id: &BlockId,
        cursor: Option<StartCursor>,
        page_size: Option<PageSize>,
    ) -> Result<PaginatedList<Comment>> {
        let mut query: Vec<(&str, String)> =
            vec![("block_id", block_id.as_str().to_string())];
        if let Some(cursor) = cursor {
            query.push(("start_cursor", cursor.as_str().to_string()));
        }
        if let Some(page_size) = page_size {
            query.push(("page_size", page_size.get().to_string()));
        }
        self.transport.get("comments", &query).await
    }

    /// Every open comment under a block or page, following cursors to
    /// the end.
    pub async fn list_all(&self, block_id: &BlockId) -> Result<Vec<Comment>> {
        collect_all(|cursor| self.list(block_id, cursor, None), None).await
    }
}
