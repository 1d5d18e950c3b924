// src/api/databases.rs
//! The databases endpoint.

use crate::error::Result;
use crate::model::{
    CreateDatabaseRequest, Database, Filter, Page, PaginatedList, QueryDatabaseRequest, Sort,
    UpdateDatabaseRequest,
};
use crate::types::DatabaseId;

use super::http::Transport;
use super::pagination::collect_all;

/// Operations on databases and their rows.
#[derive(Debug, Clone)]
pub struct DatabasesEndpoint {
    transport: Transport,
}

impl DatabasesEndpoint {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// `POST /databases`: creates a database as a child of a page.
    pub async fn create(&self, request: CreateDatabaseRequest) -> Result<Database> {
        request.validate()?;
        self.transport.post("databases", &request).await
    }

    /// `GET /databases/{database_id}`: the schema, not the rows.
    pub async fn retrieve(&self, database_id: &DatabaseId) -> Result<Database> {
        self.transport
            .get(&format!("databases/{}", database_id.as_str()), &[])
            .await
    }

    /// `PATCH /databases/{database_id}`: updates title, description,
    /// or columns.
    pub async fn update(
        &self,
        database_id: &DatabaseId,
        request: UpdateDatabaseRequest,
    ) -> Result<Database> {
        self.transport
            .patch(&format!("databases/{}", database_id.as_str()), &request)
            .await
    }

    /// `POST /databases/{database_id}/query`: one page of matching
    /// rows.
    pub async fn query(
        &self,
        database_id: &DatabaseId,
        request: QueryDatabaseRequest,
    ) -> Result<PaginatedList<Page>> {
        self.transport
            .post(&format!("databases/{}/query", database_id.as_str()), &request)
            .await
    }

    /// Every row matching the filter, following cursors to the end.
    pub async fn query_all(
        &self,
        database_id: &DatabaseId,
        filter: Option<Filter>,
        sorts: Vec<Sort>,
    ) -> Result<Vec<Page>> {
        let base = QueryDatabaseRequest {
            filter,
            sorts,
            start_cursor: None,
            page_size: None,
        };
        collect_all(
            |cursor| {
                let mut request = base.clone();
                request.start_cursor = cursor;
                self.query(database_id, request)
            },
            None,
        )
        .await
    }
}
