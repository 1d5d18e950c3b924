// src/model/mod.rs
//! Wire-format entities, request bodies, and shared envelopes.
//!
//! Entity structs deliberately omit the constant `object` discriminator
//! the service sends on every body. Unknown fields are ignored on the
//! way in, and search results recover the discriminator through the
//! tagged [`PageOrDatabase`] wrapper.

pub mod block;
pub mod comment;
pub mod database;
pub mod file;
pub mod filter;
pub mod page;
pub mod parent;
pub mod rich_text;
pub mod search;
pub mod sort;
pub mod user;

pub use block::*;
pub use comment::*;
pub use database::*;
pub use file::*;
pub use filter::*;
pub use page::*;
pub use parent::*;
pub use rich_text::*;
pub use search::*;
pub use sort::*;
pub use user::*;

use crate::types::StartCursor;
use serde::{Deserialize, Serialize};

fn default_list_object() -> String {
    "list".to_string()
}

/// One page of a paginated listing.
///
/// `results` and `has_more` are required so that a non-list body never
/// passes for a page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    #[serde(default = "default_list_object")]
    pub object: String,
    pub results: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<StartCursor>,
    pub has_more: bool,
}

impl<T> PaginatedList<T> {
    /// The cursor to request the next page with, `None` once the
    /// listing is exhausted.
    pub fn next_page_cursor(&self) -> Option<StartCursor> {
        if self.has_more {
            self.next_cursor.clone()
        } else {
            None
        }
    }
}

/// Placeholder for wire objects that carry no fields, like `{ }` in
/// `{"type": "title", "title": {}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyObject {}
