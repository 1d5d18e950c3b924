// src/model/rich_text.rs
//! Rich text spans: the inline content unit used by page properties,
//! block content, database titles, and comments.
//!
//! A span is a tagged variant (text, mention, equation) carrying style
//! annotations and a plain-text projection. On requests only the variant
//! payload is sent; `annotations`, `plain_text`, and `href` are filled in
//! by the service and appear on responses.

use crate::types::{Color, DatabaseId, PageId, UserId, ValidationError};
use serde::{Deserialize, Serialize};

use super::user::UserRef;

/// One rich text span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(flatten)]
    pub variant: RichTextVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// The content-bearing part of a span, dispatched on the wire `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextVariant {
    Text { text: TextContent },
    Mention { mention: Mention },
    Equation { equation: EquationContent },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationContent {
    /// A KaTeX-compatible expression.
    pub expression: String,
}

/// An inline reference to another Notion object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mention {
    User { user: UserRef },
    Page { page: PageRef },
    Database { database: DatabaseRef },
    Date { date: MentionDate },
    LinkPreview { link_preview: LinkPreviewRef },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    pub id: PageId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseRef {
    pub id: DatabaseId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkPreviewRef {
    pub url: String,
}

/// Date payload of a date mention. `start` and `end` are ISO 8601 dates
/// or datetimes exactly as the service formats them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionDate {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Style annotations applied to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub color: Color,
}

impl Annotations {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }

    pub fn code() -> Self {
        Self {
            code: true,
            ..Self::default()
        }
    }

    pub fn colored(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

impl RichText {
    /// Build a plain text span.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            variant: RichTextVariant::Text {
                text: TextContent {
                    content: content.into(),
                    link: None,
                },
            },
            annotations: None,
            plain_text: None,
            href: None,
        }
    }

    /// Build a styled text span.
    pub fn styled(content: impl Into<String>, annotations: Annotations) -> Self {
        let mut span = Self::text(content);
        span.annotations = Some(annotations);
        span
    }

    /// Build a text span that links out to a URL. The URL is validated
    /// before any request is assembled.
    pub fn text_with_link(
        content: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let url = url.into();
        crate::types::ValidatedUrl::parse(&url)?;
        Ok(Self {
            variant: RichTextVariant::Text {
                text: TextContent {
                    content: content.into(),
                    link: Some(Link { url }),
                },
            },
            annotations: None,
            plain_text: None,
            href: None,
        })
    }

    /// Build an inline equation span.
    pub fn equation(expression: impl Into<String>) -> Self {
        Self {
            variant: RichTextVariant::Equation {
                equation: EquationContent {
                    expression: expression.into(),
                },
            },
            annotations: None,
            plain_text: None,
            href: None,
        }
    }

    /// Build a user mention span.
    pub fn mention_user(user_id: UserId) -> Self {
        Self::mention(Mention::User {
            user: UserRef::partial(user_id),
        })
    }

    /// Build a page mention span.
    pub fn mention_page(page_id: PageId) -> Self {
        Self::mention(Mention::Page {
            page: PageRef { id: page_id },
        })
    }

    /// Build a database mention span.
    pub fn mention_database(database_id: DatabaseId) -> Self {
        Self::mention(Mention::Database {
            database: DatabaseRef { id: database_id },
        })
    }

    fn mention(mention: Mention) -> Self {
        Self {
            variant: RichTextVariant::Mention { mention },
            annotations: None,
            plain_text: None,
            href: None,
        }
    }

    /// The plain-text projection of this span.
    ///
    /// Responses carry the service-computed `plain_text`; for locally
    /// built spans the projection falls back to the variant content.
    pub fn plain_text(&self) -> &str {
        if let Some(text) = &self.plain_text {
            return text;
        }
        match &self.variant {
            RichTextVariant::Text { text } => &text.content,
            RichTextVariant::Equation { equation } => &equation.expression,
            RichTextVariant::Mention { .. } => "",
        }
    }
}

/// Joins the plain-text projections of a span sequence.
pub fn plain_text_of(spans: &[RichText]) -> String {
    spans.iter().map(RichText::plain_text).collect()
}
