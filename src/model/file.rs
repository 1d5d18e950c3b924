// src/model/file.rs
//! File, icon, and cover objects.
//!
//! Files come in two flavors: external links the caller provides, and
//! Notion-hosted files whose URLs expire. Integrations can only write
//! the external flavor; hosted files appear on responses.

use crate::types::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rich_text::RichText;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileObject {
    External { external: ExternalFile },
    File { file: HostedFile },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: String,
    pub expiry_time: DateTime<Utc>,
}

impl FileObject {
    /// Build an external file reference. The URL is validated before any
    /// request is assembled.
    pub fn external(url: impl Into<String>) -> Result<Self, ValidationError> {
        let url = url.into();
        crate::types::ValidatedUrl::parse(&url)?;
        Ok(FileObject::External {
            external: ExternalFile { url },
        })
    }

    pub fn url(&self) -> &str {
        match self {
            FileObject::External { external } => &external.url,
            FileObject::File { file } => &file.url,
        }
    }
}

/// Page and database icons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Icon {
    Emoji { emoji: String },
    External { external: ExternalFile },
    File { file: HostedFile },
}

impl Icon {
    pub fn emoji(emoji: impl Into<String>) -> Self {
        Icon::Emoji {
            emoji: emoji.into(),
        }
    }

    /// Build an icon from an external image URL, validated locally.
    pub fn external(url: impl Into<String>) -> Result<Self, ValidationError> {
        let url = url.into();
        crate::types::ValidatedUrl::parse(&url)?;
        Ok(Icon::External {
            external: ExternalFile { url },
        })
    }
}

/// A file plus the caption and name fields media blocks and file
/// properties attach to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileWithCaption {
    #[serde(flatten)]
    pub file: FileObject,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FileWithCaption {
    /// Build an external media reference with no caption.
    pub fn external(url: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            file: FileObject::external(url)?,
            caption: Vec::new(),
            name: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn external_file_serializes_to_wire_shape() {
        let file = FileObject::external("https://example.com/logo.png").unwrap();
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "external",
                "external": { "url": "https://example.com/logo.png" }
            })
        );
    }

    #[test]
    fn external_file_rejects_bad_urls() {
        assert!(FileObject::external("notaurl").is_err());
        assert!(Icon::external("ftp://example.com/x.png").is_err());
    }

    #[test]
    fn hosted_file_parses_expiry() {
        let raw = json!({
            "type": "file",
            "file": {
                "url": "https://s3.us-west-2.amazonaws.com/secure.notion-static.com/x.png",
                "expiry_time": "2023-01-01T00:00:00.000Z"
            }
        });
        let file: FileObject = serde_json::from_value(raw).unwrap();
        assert!(matches!(file, FileObject::File { .. }));
    }

    #[test]
    fn emoji_icon_round_trips() {
        let icon = Icon::emoji("🥑");
        let raw = serde_json::to_value(&icon).unwrap();
        assert_eq!(raw, json!({ "type": "emoji", "emoji": "🥑" }));
        let back: Icon = serde_json::from_value(raw).unwrap();
        assert_eq!(back, icon);
    }

    #[test]
    fn captioned_file_flattens_variant() {
        let raw = json!({
            "type": "external",
            "external": { "url": "https://example.com/diagram.png" },
            "caption": [
                { "type": "text", "text": { "content": "The diagram" } }
            ]
        });
        let file: FileWithCaption = serde_json::from_value(raw).unwrap();
        assert_eq!(file.file.url(), "https://example.com/diagram.png");
        assert_eq!(file.caption.len(), 1);
    }
}
