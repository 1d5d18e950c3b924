// src/model/block.rs
//! Blocks: the content tree under pages.
//!
//! Every block kind shares the envelope fields (id, timestamps,
//! `has_children`) and differs only in the flattened type payload.
//! Kinds this crate does not model parse into `Unsupported` instead of
//! failing the whole response.

use crate::types::{BlockId, Color, DatabaseId, PageId, ValidatedUrl, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::file::{FileWithCaption, Icon};
use super::parent::Parent;
use super::rich_text::{plain_text_of, EquationContent, RichText};
use super::user::PartialUser;
use super::EmptyObject;

/// A block entity as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<PartialUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by: Option<PartialUser>,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(flatten)]
    pub block_type: BlockType,
}

impl Block {
    /// The wire name of this block's type.
    pub fn type_name(&self) -> &'static str {
        self.block_type.type_name()
    }

    /// The inline content of text-bearing blocks, `None` for the rest.
    pub fn rich_text(&self) -> Option<&[RichText]> {
        self.block_type.rich_text()
    }

    /// The inline content joined into plain text.
    pub fn plain_text(&self) -> String {
        self.rich_text().map(plain_text_of).unwrap_or_default()
    }
}

/// A block's typed payload, dispatched on the wire `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockType {
    Paragraph {
        paragraph: TextBlockContent,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: HeadingContent,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: HeadingContent,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: HeadingContent,
    },
    BulletedListItem {
        bulleted_list_item: TextBlockContent,
    },
    NumberedListItem {
        numbered_list_item: TextBlockContent,
    },
    ToDo {
        to_do: ToDoContent,
    },
    Toggle {
        toggle: TextBlockContent,
    },
    Quote {
        quote: TextBlockContent,
    },
    Callout {
        callout: CalloutContent,
    },
    Code {
        code: CodeContent,
    },
    Equation {
        equation: EquationContent,
    },
    Divider {
        divider: EmptyObject,
    },
    Bookmark {
        bookmark: BookmarkContent,
    },
    Embed {
        embed: EmbedContent,
    },
    Image {
        image: FileWithCaption,
    },
    Video {
        video: FileWithCaption,
    },
    Pdf {
        pdf: FileWithCaption,
    },
    File {
        file: FileWithCaption,
    },
    ChildPage {
        child_page: ChildContent,
    },
    ChildDatabase {
        child_database: ChildContent,
    },
    Table {
        table: TableContent,
    },
    TableRow {
        table_row: TableRowContent,
    },
    TableOfContents {
        table_of_contents: ColorContent,
    },
    Breadcrumb {
        breadcrumb: EmptyObject,
    },
    ColumnList {
        column_list: EmptyObject,
    },
    Column {
        column: EmptyObject,
    },
    LinkPreview {
        link_preview: LinkPreviewContent,
    },
    LinkToPage {
        link_to_page: LinkTarget,
    },
    SyncedBlock {
        synced_block: SyncedBlockContent,
    },
    #[serde(other)]
    Unsupported,
}

/// Shared payload of paragraphs, list items, toggles, and quotes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlockContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BlockType>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeadingContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub is_toggleable: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToDoContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BlockType>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalloutContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BlockType>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkContent {
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedContent {
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildContent {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableContent {
    pub table_width: u32,
    #[serde(default)]
    pub has_column_header: bool,
    #[serde(default)]
    pub has_row_header: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRowContent {
    #[serde(default)]
    pub cells: Vec<Vec<RichText>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorContent {
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreviewContent {
    pub url: String,
}

/// Target of a `link_to_page` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LinkTarget {
    PageId { page_id: PageId },
    DatabaseId { database_id: DatabaseId },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SyncedBlockContent {
    /// `None` marks the original block; duplicates point back at it.
    #[serde(default)]
    pub synced_from: Option<SyncedFrom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BlockType>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyncedFrom {
    BlockId { block_id: BlockId },
}

impl BlockType {
    pub fn paragraph(rich_text: Vec<RichText>) -> Self {
        Self::Paragraph {
            paragraph: TextBlockContent {
                rich_text,
                ..TextBlockContent::default()
            },
        }
    }

    pub fn heading_1(rich_text: Vec<RichText>) -> Self {
        Self::Heading1 {
            heading_1: HeadingContent {
                rich_text,
                ..HeadingContent::default()
            },
        }
    }

    pub fn heading_2(rich_text: Vec<RichText>) -> Self {
        Self::Heading2 {
            heading_2: HeadingContent {
                rich_text,
                ..HeadingContent::default()
            },
        }
    }

    pub fn heading_3(rich_text: Vec<RichText>) -> Self {
        Self::Heading3 {
            heading_3: HeadingContent {
                rich_text,
                ..HeadingContent::default()
            },
        }
    }

    pub fn bulleted_list_item(rich_text: Vec<RichText>) -> Self {
        Self::BulletedListItem {
            bulleted_list_item: TextBlockContent {
                rich_text,
                ..TextBlockContent::default()
            },
        }
    }

    pub fn numbered_list_item(rich_text: Vec<RichText>) -> Self {
        Self::NumberedListItem {
            numbered_list_item: TextBlockContent {
                rich_text,
                ..TextBlockContent::default()
            },
        }
    }

    pub fn to_do(rich_text: Vec<RichText>, checked: bool) -> Self {
        Self::ToDo {
            to_do: ToDoContent {
                rich_text,
                checked,
                ..ToDoContent::default()
            },
        }
    }

    pub fn toggle(rich_text: Vec<RichText>) -> Self {
        Self::Toggle {
            toggle: TextBlockContent {
                rich_text,
                ..TextBlockContent::default()
            },
        }
    }

    pub fn quote(rich_text: Vec<RichText>) -> Self {
        Self::Quote {
            quote: TextBlockContent {
                rich_text,
                ..TextBlockContent::default()
            },
        }
    }

    pub fn callout(rich_text: Vec<RichText>, icon: Option<Icon>) -> Self {
        Self::Callout {
            callout: CalloutContent {
                rich_text,
                icon,
                ..CalloutContent::default()
            },
        }
    }

    pub fn code(rich_text: Vec<RichText>, language: impl Into<String>) -> Self {
        Self::Code {
            code: CodeContent {
                rich_text,
                caption: Vec::new(),
                language: language.into(),
            },
        }
    }

    pub fn equation(expression: impl Into<String>) -> Self {
        Self::Equation {
            equation: EquationContent {
                expression: expression.into(),
            },
        }
    }

    pub fn divider() -> Self {
        Self::Divider {
            divider: EmptyObject {},
        }
    }

    pub fn bookmark(url: impl Into<String>) -> Result<Self, ValidationError> {
        let url = url.into();
        ValidatedUrl::parse(&url)?;
        Ok(Self::Bookmark {
            bookmark: BookmarkContent {
                url,
                caption: Vec::new(),
            },
        })
    }

    pub fn image_external(url: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::Image {
            image: FileWithCaption::external(url)?,
        })
    }

    /// The wire name of this block's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::Heading1 { .. } => "heading_1",
            Self::Heading2 { .. } => "heading_2",
            Self::Heading3 { .. } => "heading_3",
            Self::BulletedListItem { .. } => "bulleted_list_item",
            Self::NumberedListItem { .. } => "numbered_list_item",
            Self::ToDo { .. } => "to_do",
            Self::Toggle { .. } => "toggle",
            Self::Quote { .. } => "quote",
            Self::Callout { .. } => "callout",
            Self::Code { .. } => "code",
            Self::Equation { .. } => "equation",
            Self::Divider { .. } => "divider",
            Self::Bookmark { .. } => "bookmark",
            Self::Embed { .. } => "embed",
            Self::Image { .. } => "image",
            Self::Video { .. } => "video",
            Self::Pdf { .. } => "pdf",
            Self::File { .. } => "file",
            Self::ChildPage { .. } => "child_page",
            Self::ChildDatabase { .. } => "child_database",
            Self::Table { .. } => "table",
            Self::TableRow { .. } => "table_row",
            Self::TableOfContents { .. } => "table_of_contents",
            Self::Breadcrumb { .. } => "breadcrumb",
            Self::ColumnList { .. } => "column_list",
            Self::Column { .. } => "column",
            Self::LinkPreview { .. } => "link_preview",
            Self::LinkToPage { .. } => "link_to_page",
            Self::SyncedBlock { .. } => "synced_block",
            Self::Unsupported => "unsupported",
        }
    }

    fn text_content(&self) -> Option<&Vec<RichText>> {
        match self {
            Self::Paragraph { paragraph: c }
            | Self::BulletedListItem {
                bulleted_list_item: c,
            }
            | Self::NumberedListItem {
                numbered_list_item: c,
            }
            | Self::Toggle { toggle: c }
            | Self::Quote { quote: c } => Some(&c.rich_text),
            Self::Heading1 { heading_1: c }
            | Self::Heading2 { heading_2: c }
            | Self::Heading3 { heading_3: c } => Some(&c.rich_text),
            Self::ToDo { to_do: c } => Some(&c.rich_text),
            Self::Callout { callout: c } => Some(&c.rich_text),
            Self::Code { code: c } => Some(&c.rich_text),
            _ => None,
        }
    }

    /// The inline content of text-bearing kinds, `None` for the rest.
    pub fn rich_text(&self) -> Option<&[RichText]> {
        self.text_content().map(Vec::as_slice)
    }
}

/// Body of `PATCH /blocks/{block_id}/children`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppendBlockChildrenRequest {
    pub children: Vec<BlockType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<BlockId>,
}

impl AppendBlockChildrenRequest {
    pub fn new(children: Vec<BlockType>) -> Self {
        Self {
            children,
            after: None,
        }
    }

    /// Inserts the new children after an existing child instead of at
    /// the end.
    pub fn after(mut self, block_id: BlockId) -> Self {
        self.after = Some(block_id);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.children.is_empty() {
            return Err(ValidationError::EmptyField("children"));
        }
        Ok(())
    }
}

/// Body of `PATCH /blocks/{block_id}`. The service merges the given
/// content into the existing block of the same type.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UpdateBlockRequest {
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub content: Option<BlockType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl UpdateBlockRequest {
    pub fn content(content: BlockType) -> Self {
        Self {
            content: Some(content),
            archived: None,
        }
    }

    pub fn archive() -> Self {
        Self {
            content: None,
            archived: Some(true),
        }
    }
}
