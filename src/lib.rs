// src/lib.rs
//! notion-sdk library — a typed async client for the Notion REST API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `Error`, `ErrorCode`, `ValidationError`
//! - **Configuration** — `ClientConfig`, `ClientConfigBuilder`
//! - **Domain model** — `Page`, `Database`, `Block`, `User`, `Comment`, etc.
//! - **Domain types** — `PageId`, `BlockId`, `ApiKey`, `PageSize`, etc.
//! - **API client** — `Client` and the per-resource endpoints
//!
//! # Example
//!
//! ```no_run
//! use notion_sdk::{Client, Filter, PropertyCondition, TextCondition};
//!
//! # async fn run() -> notion_sdk::Result<()> {
//! let client = Client::new("secret_your_integration_token_here")?;
//!
//! let database_id = "https://www.notion.so/a1b2c3d4e5f67890abcdef1234567890".parse()?;
//! let rows = client
//!     .databases
//!     .query_all(
//!         &database_id,
//!         Some(Filter::property(
//!             "Name",
//!             PropertyCondition::Title(TextCondition::Contains("kale".into())),
//!         )),
//!         Vec::new(),
//!     )
//!     .await?;
//!
//! for page in rows {
//!     println!("{}", page.title_plain_text());
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod config;
mod constants;
mod error;
mod model;
mod types;

// --- Error Handling ---
pub use crate::error::{Error, ErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{ClientConfig, ClientConfigBuilder};

// --- Entities and Envelopes ---
pub use crate::model::{
    Comment, Database, EmptyObject, Page, PageOrDatabase, PaginatedList, Parent, User,
};

// --- Rich Text ---
pub use crate::model::{
    plain_text_of, Annotations, DatabaseRef, EquationContent, Link, LinkPreviewRef, Mention,
    MentionDate, PageRef, RichText, RichTextVariant, TextContent,
};

// --- Users and Files ---
pub use crate::model::{
    BotData, BotOwner, ExternalFile, FileObject, FileWithCaption, HostedFile, Icon, PartialUser,
    PersonData, UserDetails, UserRef,
};

// --- Database Schemas ---
pub use crate::model::{
    DatabaseProperty, DualPropertyConfig, FormulaConfig, NumberConfig, NumberFormat,
    PropertySchema, RelationConfig, RelationKind, RollupConfig, SelectConfig, SelectOption,
    StatusConfig, StatusGroup,
};

// --- Page Properties ---
pub use crate::model::{
    DateValue, FormulaResult, PageProperty, PropertyItem, PropertyItemResponse, PropertyItemValue,
    PropertyValue, RollupKind, RollupResult, UniqueIdValue, VerificationValue,
};

// --- Blocks ---
pub use crate::model::{
    Block, BlockType, BookmarkContent, CalloutContent, ChildContent, CodeContent, ColorContent,
    EmbedContent, HeadingContent, LinkPreviewContent, LinkTarget, SyncedBlockContent, SyncedFrom,
    TableContent, TableRowContent, TextBlockContent, ToDoContent,
};

// --- Requests ---
pub use crate::model::{
    AppendBlockChildrenRequest, CreateCommentRequest, CreateDatabaseRequest, CreatePageRequest,
    QueryDatabaseRequest, SearchFilter, SearchFilterProperty, SearchObjectKind, SearchRequest,
    SearchSort, SearchTimestamp, UpdateBlockRequest, UpdateDatabaseRequest, UpdatePageRequest,
};

// --- Filters and Sorts ---
pub use crate::model::{
    CheckboxCondition, DateCondition, ExistenceCondition, Filter, FormulaCondition,
    MultiSelectCondition, NumberCondition, PeopleCondition, PropertyCondition, PropertyFilter,
    RelationCondition, SelectCondition, Sort, SortDirection, SortTimestamp, TextCondition,
    TimestampCondition, TimestampFilter,
};

// --- Domain Types ---
pub use crate::types::{
    ApiKey, BlockId, Color, CommentId, DatabaseId, DiscussionId, PageId, PageSize, PropertyId,
    PropertyName, SelectColor, StartCursor, UserId, ValidatedUrl,
};

// --- API Client ---
pub use crate::api::{
    pagination::{collect_all, stream_all},
    BlocksEndpoint, Client, CommentsEndpoint, DatabasesEndpoint, PagesEndpoint, SearchEndpoint,
    UsersEndpoint,
};
