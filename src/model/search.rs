// src/model/search.rs
//! Workspace-wide search.
//!
//! Search results mix pages and databases in one list, so the result
//! type dispatches on the envelope `object` tag instead of `type`.

use crate::types::{PageSize, StartCursor};
use serde::{Deserialize, Serialize};

use super::database::Database;
use super::page::Page;
use super::sort::SortDirection;

/// Body of `POST /search`. Everything is optional; an empty body
/// returns every page and database shared with the integration.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<StartCursor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<PageSize>,
}

impl SearchRequest {
    pub fn query(text: impl Into<String>) -> Self {
        Self {
            query: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, direction: SortDirection) -> Self {
        self.sort = Some(SearchSort {
            direction,
            timestamp: SearchTimestamp::LastEditedTime,
        });
        self
    }

    pub fn pages_only(mut self) -> Self {
        self.filter = Some(SearchFilter::pages());
        self
    }

    pub fn databases_only(mut self) -> Self {
        self.filter = Some(SearchFilter::databases());
        self
    }

    pub fn with_cursor(mut self, cursor: StartCursor) -> Self {
        self.start_cursor = Some(cursor);
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Search results are sortable by last edit time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSort {
    pub direction: SortDirection,
    pub timestamp: SearchTimestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchTimestamp {
    LastEditedTime,
}

/// Restricts search results to one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub value: SearchObjectKind,
    pub property: SearchFilterProperty,
}

impl SearchFilter {
    pub fn pages() -> Self {
        Self {
            value: SearchObjectKind::Page,
            property: SearchFilterProperty::Object,
        }
    }

    pub fn databases() -> Self {
        Self {
            value: SearchObjectKind::Database,
            property: SearchFilterProperty::Object,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchObjectKind {
    Page,
    Database,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFilterProperty {
    Object,
}

/// One search result, dispatched on the envelope `object` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum PageOrDatabase {
    Page(Box<Page>),
    Database(Box<Database>),
}

impl PageOrDatabase {
    /// The result's title as plain text, whichever kind it is.
    pub fn title_plain_text(&self) -> String {
        match self {
            Self::Page(page) => page.title_plain_text(),
            Self::Database(database) => database.title_plain_text(),
        }
    }

    pub fn is_page(&self) -> bool {
        matches!(self, Self::Page(_))
    }

    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}
