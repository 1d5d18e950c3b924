// src/api/blocks.rs
//! The blocks endpoint.

use crate::error::Result;
use crate::model::{AppendBlockChildrenRequest, Block, PaginatedList, UpdateBlockRequest};
use crate::types::{BlockId, PageSize, StartCursor};

use super::http::Transport;
use super::pagination::collect_all;

/// Operations on the block tree.
///
/// A page id works anywhere a block id is expected; convert through
/// `BlockId::from` to address a page's children directly.
#[derive(Debug, Clone)]
pub struct BlocksEndpoint {
    transport: Transport,
}

impl BlocksEndpoint {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// `GET /blocks/{block_id}`.
    pub async fn retrieve(&self, block_id: &BlockId) -> Result<Block> {
        self.transport
            .get(&format!("blocks/{}", block_id.as_str()), &[])
            .await
    }

    /// `GET /blocks/{block_id}/children`: one page of direct children.
    /// Children of nested blocks need their own calls.
    pub async fn children(
        &self,
        block_id: &BlockId,
        cursor: Option<StartCursor>,
        page_size: Option<PageSize>,
    ) -> Result<PaginatedList<Block>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("start_cursor", cursor.as_str().to_string()));
        }
        if let Some(page_size) = page_size {
            query.push(("page_size", page_size.get().to_string()));
        }
        self.transport
            .get(&format!("blocks/{}/children", block_id.as_str()), &query)
            .await
    }

    /// Every direct child, following cursors to the end.
    pub async fn children_all(&self, block_id: &BlockId) -> Result<Vec<Block>> {
        collect_all(|cursor| self.children(block_id, cursor, None), None).await
    }

    /// `PATCH /blocks/{block_id}/children`: appends new children,
    /// returning the created blocks.
    pub async fn append_children(
        &self,
        block_id: &BlockId,
        request: AppendBlockChildrenRequest,
    ) -> Result<PaginatedList<Block>> {
        request.validate()?;
        self.transport
            .patch(&format!("blocks/{}/children", block_id.as_str()), &request)
            .await
    }

    /// `PATCH /blocks/{block_id}`: replaces the content of a block
    /// with new content of the same type.
    pub async fn update(&self, block_id: &BlockId, request: UpdateBlockRequest) -> Result<Block> {
        self.transport
            .patch(&format!("blocks/{}", block_id.as_str()), &request)
            .await
    }

    /// `DELETE /blocks/{block_id}`: moves the block to the trash and
    /// returns it with `archived` set.
    pub async fn delete(&self, block_id: &BlockId) -> Result<Block> {
        self.transport
            .delete(&format!("blocks/{}", block_id.as_str()))
            .await
    }
}
