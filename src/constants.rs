// src/constants.rs
//! Domain constants that define the operational boundaries of the client.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story of how
//! the client talks to the Notion API: where it connects, which API revision
//! it speaks, and how much it asks for at a time.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Base URL every request path is joined onto.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// The Notion API revision this client speaks, sent as the
/// `Notion-Version` header on every request.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Smallest page size the Notion API accepts for paginated endpoints.
pub const NOTION_API_MIN_PAGE_SIZE: u32 = 1;

/// Largest page size the Notion API accepts for paginated endpoints.
///
/// Requests above this are rejected by the service, so the bound is
/// enforced locally before any request is built.
pub const NOTION_API_MAX_PAGE_SIZE: u32 = 100;

// ---------------------------------------------------------------------------
// Transport defaults
// ---------------------------------------------------------------------------

/// Default wall-clock budget for a single request/response round trip.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Default budget for establishing the TCP/TLS connection.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// User agent advertised on every request.
pub const USER_AGENT: &str = concat!("notion-sdk/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing undecodable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
