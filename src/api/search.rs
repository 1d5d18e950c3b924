// src/api/search.rs
//! The search endpoint.

use crate::error::Result;
use crate::model::{PageOrDatabase, PaginatedList, SearchRequest};

use super::http::Transport;

/// Workspace-wide search across everything shared with the
/// integration.
#[derive(Debug, Clone)]
pub struct SearchEndpoint {
    transport: Transport,
}

impl SearchEndpoint {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// `POST /search`: one page of pages and databases matching the
    /// query. Results rank by similarity to the query string; an empty
    /// request returns everything the integration can see.
    pub async fn query(&self, request: SearchRequest) -> Result<PaginatedList<PageOrDatabase>> {
        self.transport.post("search", &request).await
    }
}
