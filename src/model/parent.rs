// src/model/parent.rs

use crate::types::{BlockId, DatabaseId, PageId};
use serde::{Deserialize, Serialize};

/// Where an object hangs in the workspace tree.
///
/// Every page, database, block, and comment names a parent of one of
/// these kinds. Creation endpoints restrict which kinds they accept;
/// the resource clients reject unsupported kinds before any request is
/// sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Parent {
    #[serde(rename = "page_id")]
    Page { page_id: PageId },
    #[serde(rename = "database_id")]
    Database { database_id: DatabaseId },
    #[serde(rename = "block_id")]
    Block { block_id: BlockId },
    #[serde(rename = "workspace")]
    Workspace { workspace: bool },
}

impl Parent {
    pub fn page(page_id: PageId) -> Self {
        Parent::Page { page_id }
    }

    pub fn database(database_id: DatabaseId) -> Self {
        Parent::Database { database_id }
    }

    pub fn block(block_id: BlockId) -> Self {
        Parent::Block { block_id }
    }

    pub fn workspace() -> Self {
        Parent::Workspace { workspace: true }
    }

    /// The wire name of this parent kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Parent::Page { .. } => "page_id",
            Parent::Database { .. } => "database_id",
            Parent::Block { .. } => "block_id",
            Parent::Workspace { .. } => "workspace",
        }
    }
}
