// src/model/page.rs
//! Pages, their property values, and the page-level request bodies.
//!
//! Property values mirror the database schema by wire tag: a column
//! declared `number` in the schema arrives as a `number` value here.
//! Scalar kinds wrap `Option` because the service sends `null` for
//! cells that were never filled in.

use crate::types::{PageId, PropertyId, PropertyName, UserId, ValidationError};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::block::BlockType;
use super::database::SelectOption;
use super::file::{FileObject, FileWithCaption, Icon};
use super::parent::Parent;
use super::rich_text::{plain_text_of, PageRef, RichText};
use super::user::{PartialUser, UserRef};
use super::PaginatedList;

/// A page entity as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<PartialUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by: Option<PartialUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<FileObject>,
    pub parent: Parent,
    #[serde(default)]
    pub archived: bool,
    pub properties: IndexMap<PropertyName, PageProperty>,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}

impl Page {
    /// Looks up a property by its column name.
    pub fn property(&self, name: &str) -> Option<&PageProperty> {
        self.properties.get(name)
    }

    /// The plain text of the title property, empty for untitled pages.
    pub fn title_plain_text(&self) -> String {
        self.properties
            .values()
            .find_map(|prop| match &prop.value {
                PropertyValue::Title { title } => Some(plain_text_of(title)),
                _ => None,
            })
            .unwrap_or_default()
    }
}

/// One property cell: the response-side id plus the typed value.
///
/// `has_more` is set on relation values truncated by the service; the
/// full list is only reachable through the property item endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
    #[serde(flatten)]
    pub value: PropertyValue,
}

/// A property value, dispatched on the wire `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
    Number { number: Option<f64> },
    Select { select: Option<SelectOption> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Status { status: Option<SelectOption> },
    Date { date: Option<DateValue> },
    People { people: Vec<UserRef> },
    Checkbox { checkbox: bool },
    Url { url: Option<String> },
    Email { email: Option<String> },
    PhoneNumber { phone_number: Option<String> },
    Files { files: Vec<FileWithCaption> },
    Formula { formula: FormulaResult },
    Relation { relation: Vec<PageRef> },
    Rollup { rollup: RollupResult },
    CreatedTime { created_time: DateTime<Utc> },
    CreatedBy { created_by: PartialUser },
    LastEditedTime { last_edited_time: DateTime<Utc> },
    LastEditedBy { last_edited_by: PartialUser },
    UniqueId { unique_id: UniqueIdValue },
    Verification { verification: VerificationValue },
}

/// A date or date range. Start and end stay as strings because the
/// service sends both date-only and full timestamps here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl DateValue {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: None,
            time_zone: None,
        }
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }
}

/// The computed result of a formula column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaResult {
    String { string: Option<String> },
    Number { number: Option<f64> },
    Boolean { boolean: Option<bool> },
    Date { date: Option<DateValue> },
}

/// The aggregated result of a rollup column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(flatten)]
    pub kind: RollupKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollupKind {
    Number { number: Option<f64> },
    Date { date: Option<DateValue> },
    Array { array: Vec<PropertyValue> },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueIdValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub number: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationValue {
    #[serde(default)]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateValue>,
}

impl PageProperty {
    fn value(value: PropertyValue) -> Self {
        Self {
            id: None,
            has_more: None,
            value,
        }
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::value(PropertyValue::Title {
            title: vec![RichText::text(text)],
        })
    }

    pub fn rich_text(segments: Vec<RichText>) -> Self {
        Self::value(PropertyValue::RichText { rich_text: segments })
    }

    pub fn number(number: f64) -> Self {
        Self::value(PropertyValue::Number {
            number: Some(number),
        })
    }

    pub fn checkbox(checked: bool) -> Self {
        Self::value(PropertyValue::Checkbox { checkbox: checked })
    }

    pub fn select(name: impl Into<String>) -> Self {
        Self::value(PropertyValue::Select {
            select: Some(SelectOption::new(name)),
        })
    }

    pub fn multi_select(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::value(PropertyValue::MultiSelect {
            multi_select: names.into_iter().map(SelectOption::new).collect(),
        })
    }

    pub fn status(name: impl Into<String>) -> Self {
        Self::value(PropertyValue::Status {
            status: Some(SelectOption::new(name)),
        })
    }

    pub fn date(value: DateValue) -> Self {
        Self::value(PropertyValue::Date { date: Some(value) })
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self::value(PropertyValue::Url {
            url: Some(url.into()),
        })
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self::value(PropertyValue::Email {
            email: Some(email.into()),
        })
    }

    pub fn phone_number(phone_number: impl Into<String>) -> Self {
        Self::value(PropertyValue::PhoneNumber {
            phone_number: Some(phone_number.into()),
        })
    }

    pub fn people(ids: impl IntoIterator<Item = UserId>) -> Self {
        Self::value(PropertyValue::People {
            people: ids.into_iter().map(UserRef::partial).collect(),
        })
    }

    pub fn relation(ids: impl IntoIterator<Item = PageId>) -> Self {
        Self::value(PropertyValue::Relation {
            relation: ids.into_iter().map(|id| PageRef { id }).collect(),
        })
    }

    /// The wire name of this value's type.
    pub fn type_name(&self) -> &'static str {
        match &self.value {
            PropertyValue::Title { .. } => "title",
            PropertyValue::RichText { .. } => "rich_text",
            PropertyValue::Number { .. } => "number",
            PropertyValue::Select { .. } => "select",
            PropertyValue::MultiSelect { .. } => "multi_select",
            PropertyValue::Status { .. } => "status",
            PropertyValue::Date { .. } => "date",
            PropertyValue::People { .. } => "people",
            PropertyValue::Checkbox { .. } => "checkbox",
            PropertyValue::Url { .. } => "url",
            PropertyValue::Email { .. } => "email",
            PropertyValue::PhoneNumber { .. } => "phone_number",
            PropertyValue::Files { .. } => "files",
            PropertyValue::Formula { .. } => "formula",
            PropertyValue::Relation { .. } => "relation",
            PropertyValue::Rollup { .. } => "rollup",
            PropertyValue::CreatedTime { .. } => "created_time",
            PropertyValue::CreatedBy { .. } => "created_by",
            PropertyValue::LastEditedTime { .. } => "last_edited_time",
            PropertyValue::LastEditedBy { .. } => "last_edited_by",
            PropertyValue::UniqueId { .. } => "unique_id",
            PropertyValue::Verification { .. } => "verification",
        }
    }
}

/// Body of `POST /pages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: IndexMap<PropertyName, PageProperty>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BlockType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<FileObject>,
}

impl CreatePageRequest {
    pub fn new(parent: Parent, properties: IndexMap<PropertyName, PageProperty>) -> Self {
        Self {
            parent,
            properties,
            children: Vec::new(),
            icon: None,
            cover: None,
        }
    }

    pub fn with_children(mut self, children: Vec<BlockType>) -> Self {
        self.children = children;
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_cover(mut self, cover: FileObject) -> Self {
        self.cover = Some(cover);
        self
    }

    /// Pages are created under a page or a database, never a block or
    /// the workspace root.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        match self.parent {
            Parent::Page { .. } | Parent::Database { .. } => Ok(()),
            _ => Err(ValidationError::InvalidParent {
                context: "page creation",
                kind: self.parent.kind(),
            }),
        }
    }
}

/// Body of `PATCH /pages/{page_id}`. Unset fields are left untouched
/// by the service, so everything serializes only when present.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UpdatePageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<PropertyName, PageProperty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<FileObject>,
}

impl UpdatePageRequest {
    pub fn properties(properties: IndexMap<PropertyName, PageProperty>) -> Self {
        Self {
            properties: Some(properties),
            ..Self::default()
        }
    }

    pub fn archive() -> Self {
        Self {
            archived: Some(true),
            ..Self::default()
        }
    }

    pub fn restore() -> Self {
        Self {
            archived: Some(false),
            ..Self::default()
        }
    }
}

/// One element from the property item endpoint. Paginated kinds carry
/// a single item per element instead of the page-side list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(flatten)]
    pub value: PropertyItemValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyItemValue {
    Title { title: RichText },
    RichText { rich_text: RichText },
    People { people: UserRef },
    Relation { relation: PageRef },
    Rollup { rollup: RollupResult },
    Number { number: Option<f64> },
    Select { select: Option<SelectOption> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Status { status: Option<SelectOption> },
    Date { date: Option<DateValue> },
    Checkbox { checkbox: bool },
    Url { url: Option<String> },
    Email { email: Option<String> },
    PhoneNumber { phone_number: Option<String> },
    Files { files: Vec<FileWithCaption> },
    Formula { formula: FormulaResult },
    CreatedTime { created_time: DateTime<Utc> },
    CreatedBy { created_by: PartialUser },
    LastEditedTime { last_edited_time: DateTime<Utc> },
    LastEditedBy { last_edited_by: PartialUser },
    UniqueId { unique_id: UniqueIdValue },
    Verification { verification: VerificationValue },
}

/// Response of the property item endpoint: a list for paginated
/// property kinds, a single item for scalar ones.
///
/// The list variant must stay first so an `object: "list"` body is not
/// mistaken for a bare item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyItemResponse {
    List(PaginatedList<PropertyItem>),
    Item(Box<PropertyItem>),
}

impl PropertyItemResponse {
    /// Flattens either shape into the items it carries.
    pub fn into_items(self) -> Vec<PropertyItem> {
        match self {
            Self::List(list) => list.results,
            Self::Item(item) => vec![*item],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn title_factory_serializes_wire_shape() {
        let prop = PageProperty::title("Tuscan Kale");
        let value = serde_json::to_value(&prop).unwrap();
        assert_eq!(value["type"], json!("title"));
        assert_eq!(
            value["title"][0]["text"]["content"],
            json!("Tuscan Kale")
        );
    }

    #[test]
    fn empty_number_cell_parses_as_none() {
        let raw = json!({ "id": "dVo%3C", "type": "number", "number": null });
        let prop: PageProperty = serde_json::from_value(raw).unwrap();
        assert_eq!(prop.value, PropertyValue::Number { number: None });
    }

    #[test]
    fn update_request_serializes_only_set_fields() {
        let value = serde_json::to_value(UpdatePageRequest::archive()).unwrap();
        assert_eq!(value, json!({ "archived": true }));
    }

    #[test]
    fn create_request_rejects_workspace_parent() {
        let mut properties = IndexMap::new();
        properties.insert(PropertyName::from("Name"), PageProperty::title("Kale"));
        let request = CreatePageRequest::new(Parent::workspace(), properties);
        assert!(request.validate().is_err());
    }

    #[test]
    fn title_plain_text_joins_segments() {
        let raw = json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "created_time": "2023-01-01T00:00:00.000Z",
            "last_edited_time": "2023-01-02T00:00:00.000Z",
            "parent": { "type": "workspace", "workspace": true },
            "archived": false,
            "properties": {
                "Name": {
                    "id": "title",
                    "type": "title",
                    "title": [
                        { "type": "text", "text": { "content": "Tuscan " }, "plain_text": "Tuscan " },
                        { "type": "text", "text": { "content": "Kale" }, "plain_text": "Kale" }
                    ]
                }
            },
            "url": "https://www.notion.so/Tuscan-Kale-550e8400e29b41d4a716446655440000"
        });
        let page: Page = serde_json::from_value(raw).unwrap();
        assert_eq!(page.title_plain_text(), "Tuscan Kale");
        assert_eq!(page.property("Name").map(|p| p.type_name()), Some("title"));
    }

    #[test]
    fn formula_result_parses_number_kind() {
        let raw = json!({ "type": "formula", "formula": { "type": "number", "number": 42.5 } });
        let prop: PageProperty = serde_json::from_value(raw).unwrap();
        match prop.value {
            PropertyValue::Formula { formula } => {
                assert_eq!(formula, FormulaResult::Number { number: Some(42.5) });
            }
            other => panic!("expected formula value, got {:?}", other),
        }
    }

    #[test]
    fn property_item_response_distinguishes_list_from_item() {
        let list: PropertyItemResponse = serde_json::from_value(json!({
            "object": "list",
            "results": [
                { "object": "property_item", "id": "title", "type": "title",
                  "title": { "type": "text", "text": { "content": "Kale" } } }
            ],
            "next_cursor": null,
            "has_more": false
        }))
        .unwrap();
        assert!(matches!(list, PropertyItemResponse::List(_)));

        let item: PropertyItemResponse = serde_json::from_value(json!({
            "object": "property_item", "id": "dVo%3C", "type": "number", "number": 7.0
        }))
        .unwrap();
        assert_eq!(item.into_items().len(), 1);
    }

    #[test]
    fn relation_value_marks_truncation() {
        let raw = json!({
            "id": "x%3Ag%3C",
            "type": "relation",
            "relation": [ { "id": "a1b2c3d4-e5f6-7890-abcd-ef1234567890" } ],
            "has_more": true
        });
        let prop: PageProperty = serde_json::from_value(raw).unwrap();
        assert_eq!(prop.has_more, Some(true));
    }
}
