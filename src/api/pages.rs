// src/api/pages.rs
//! The pages endpoint.

use crate::error::Result;
use crate::model::{CreatePageRequest, Page, PropertyItemResponse, UpdatePageRequest};
use crate::types::{PageId, PageSize, PropertyId, StartCursor};

use super::http::Transport;

/// Operations on pages and their property values.
#[derive(Debug, Clone)]
pub struct PagesEndpoint {
    transport: Transport,
}

impl PagesEndpoint {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// `POST /pages`: creates a page under a page or database parent.
    pub async fn create(&self, request: CreatePageRequest) -> Result<Page> {
        request.validate()?;
        self.transport.post("pages", &request).await
    }

    /// `GET /pages/{page_id}`.
    ///
    /// `filter_properties` limits the returned property values to the
    /// given property ids; an empty slice returns all of them.
    pub async fn retrieve(&self, page_id: &PageId, filter_properties: &[PropertyId]) -> Result<Page> {
        let query: Vec<(&str, String)> = filter_properties
            .iter()
            .map(|id| ("filter_properties", id.as_str().to_string()))
            .collect();
        self.transport
            .get(&format!("pages/{}", page_id.as_str()), &query)
            .await
    }

    /// `PATCH /pages/{page_id}`: updates property values, icon, cover,
    /// or the archived flag.
    pub async fn update(&self, page_id: &PageId, request: UpdatePageRequest) -> Result<Page> {
        self.transport
            .patch(&format!("pages/{}", page_id.as_str()), &request)
            .await
    }

    /// `GET /pages/{page_id}/properties/{property_id}`: one property
    /// value, paginated for the list-shaped kinds.
    pub async fn retrieve_property_item(
        &self,
        page_id: &PageId,
        property_id: &PropertyId,
        cursor: Option<StartCursor>,
        page_size: Option<PageSize>,
    ) -> Result<PropertyItemResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("start_cursor", cursor.as_str().to_string()));
        }
        if let Some(page_size) = page_size {
            query.push(("page_size", page_size.get().to_string()));
        }
        self.transport
            .get(
                &format!(
                    "pages/{}/properties/{}",
                    page_id.as_str(),
                    property_id.as_str()
                ),
                &query,
            )
            .await
    }

    /// Moves a page to the trash. The page stays retrievable and can
    /// be brought back with [`PagesEndpoint::restore`].
    pub async fn trash(&self, page_id: &PageId) -> Result<Page> {
        self.update(page_id, UpdatePageRequest::archive()).await
    }

    /// Restores a page from the trash.
    pub async fn restore(&self, page_id: &PageId) -> Result<Page> {
        self.update(page_id, UpdatePageRequest::restore()).await
    }
}
