use super::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Strong typing for Notion object IDs with phantom types.
///
/// IDs are stored in canonical form: 32 lowercase hex characters, no
/// dashes. `parse` accepts the dashed UUID form, the bare form, and
/// full Notion URLs. Serialization emits the dashed form the API uses
/// in its own payloads; deserialization normalizes back to canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscussionMarker;

/// Type aliases for specific ID types
pub type PageId = Id<PageMarker>;
pub type BlockId = Id<BlockMarker>;
pub type DatabaseId = Id<DatabaseMarker>;
pub type UserId = Id<UserMarker>;
pub type CommentId = Id<CommentMarker>;
pub type DiscussionId = Id<DiscussionMarker>;

impl<T> Id<T> {
    /// Parse various Notion ID formats into a normalized ID
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_notion_id(input)?;
        Ok(Self {
            value: normalized,
            _phantom: PhantomData,
        })
    }

    /// Create an ID from an already normalized string (internal use)
    pub(crate) fn from_normalized(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Create a new random v4 UUID ID
    pub fn new_v4() -> Self {
        let uuid = Uuid::new_v4();
        Self {
            value: uuid.as_simple().to_string(),
            _phantom: PhantomData,
        }
    }

    /// Get the canonical (non-hyphenated) ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the ID in the dashed UUID form the API echoes back
    pub fn to_dashed(&self) -> String {
        if self.value.len() == 32 && !self.value.contains('-') {
            format!(
                "{}-{}-{}-{}-{}",
                &self.value[0..8],
                &self.value[8..12],
                &self.value[12..16],
                &self.value[16..20],
                &self.value[20..32]
            )
        } else {
            self.value.clone()
        }
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> std::str::FromStr for Id<T> {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_dashed().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        let normalized = normalize_notion_id(&value).map_err(serde::de::Error::custom)?;
        Ok(Self::from_normalized(normalized))
    }
}

// A page is addressable as a block: its children are the page's
// top-level content, and comments attach to it under a block_id.
impl From<PageId> for BlockId {
    fn from(id: PageId) -> Self {
        BlockId::from_normalized(id.value)
    }
}

impl From<&PageId> for BlockId {
    fn from(id: &PageId) -> Self {
        BlockId::from_normalized(id.value.clone())
    }
}

/// Normalize various Notion ID formats into a consistent format
fn normalize_notion_id(input: &str) -> Result<String, ValidationError> {
    let cleaned = input.trim().trim_end_matches('/');

    // 1. UUID format with dashes
    if let Ok(uuid) = Uuid::parse_str(cleaned) {
        return Ok(uuid.as_simple().to_string());
    }

    // 2. Direct 32-char hex ID
    if cleaned.len() == 32 && cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
        return Ok(cleaned.to_lowercase());
    }

    // 3. Extract from URLs
    if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
        return extract_id_from_url(cleaned);
    }

    Err(ValidationError::InvalidId(format!(
        "Could not parse Notion ID from: {}",
        input
    )))
}

/// Extract an ID from the tail of a Notion URL.
fn extract_id_from_url(url: &str) -> Result<String, ValidationError> {
    lazy_static::lazy_static! {
        static ref ID_REGEX: Regex = Regex::new(
            r"(?:[/-])([a-fA-F0-9]{32}|[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12})(?:[/?#]|$)"
        ).expect("Failed to compile Notion ID regex - this is a bug in the code");
    }

    if let Some(captures) = ID_REGEX.captures(url) {
        if let Some(id_match) = captures.get(1) {
            return Ok(id_match.as_str().replace('-', "").to_lowercase());
        }
    }

    Err(ValidationError::InvalidId(format!(
        "No valid ID found in URL: {}",
        url
    )))
}
