// src/model/database.rs
//! Databases and their property schemas.
//!
//! A database's `properties` mapping describes what each column IS; the
//! same names reappear on pages carrying values. The schema side is the
//! `DatabaseProperty` tagged set here, each variant owning exactly the
//! configuration object its wire tag requires.

use crate::types::{DatabaseId, PageSize, PropertyId, PropertyName, SelectColor, StartCursor, ValidationError};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::file::{FileObject, Icon};
use super::filter::Filter;
use super::parent::Parent;
use super::rich_text::{plain_text_of, RichText};
use super::sort::Sort;
use super::user::PartialUser;
use super::EmptyObject;

/// A database entity as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: DatabaseId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<PartialUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by: Option<PartialUser>,
    pub title: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<FileObject>,
    pub properties: IndexMap<PropertyName, DatabaseProperty>,
    pub parent: Parent,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub is_inline: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}

impl Database {
    /// The title joined into plain text, empty for untitled databases.
    pub fn title_plain_text(&self) -> String {
        plain_text_of(&self.title)
    }
}

/// One column definition: the response-side id and name plus the typed
/// schema. Requests send only the schema part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub schema: PropertySchema,
}

/// What a database column is, dispatched on the wire `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertySchema {
    Title { title: EmptyObject },
    RichText { rich_text: EmptyObject },
    Number { number: NumberConfig },
    Select { select: SelectConfig },
    MultiSelect { multi_select: SelectConfig },
    Status { status: StatusConfig },
    Date { date: EmptyObject },
    People { people: EmptyObject },
    Files { files: EmptyObject },
    Checkbox { checkbox: EmptyObject },
    Url { url: EmptyObject },
    Email { email: EmptyObject },
    PhoneNumber { phone_number: EmptyObject },
    Formula { formula: FormulaConfig },
    Relation { relation: RelationConfig },
    Rollup { rollup: RollupConfig },
    CreatedTime { created_time: EmptyObject },
    CreatedBy { created_by: EmptyObject },
    LastEditedTime { last_edited_time: EmptyObject },
    LastEditedBy { last_edited_by: EmptyObject },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumberConfig {
    #[serde(default)]
    pub format: NumberFormat,
}

/// Display formats for number columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    #[default]
    Number,
    NumberWithCommas,
    Percent,
    Dollar,
    CanadianDollar,
    Euro,
    Pound,
    Yen,
    Ruble,
    Rupee,
    Won,
    Yuan,
    Real,
    Lira,
    Rupiah,
    Franc,
    HongKongDollar,
    NewZealandDollar,
    Krona,
    NorwegianKrone,
    MexicanPeso,
    Rand,
    NewTaiwanDollar,
    DanishKrone,
    Zloty,
    Baht,
    Forint,
    Koruna,
    Shekel,
    ChileanPeso,
    PhilippinePeso,
    Dirham,
    ColombianPeso,
    Riyal,
    Ringgit,
    Leu,
    ArgentinePeso,
    UruguayanPeso,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

/// One option of a select, multi-select, or status column.
///
/// On creation only the name (and optionally a color) is sent; the
/// service assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<SelectColor>,
}

impl SelectOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: SelectColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Status columns cannot be configured through the API; the groups and
/// options appear on responses only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub groups: Vec<StatusGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<SelectColor>,
    #[serde(default)]
    pub option_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaConfig {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationConfig {
    pub database_id: DatabaseId,
    #[serde(flatten, default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RelationKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelationKind {
    SingleProperty { single_property: EmptyObject },
    DualProperty { dual_property: DualPropertyConfig },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DualPropertyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_id: Option<PropertyId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RollupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_id: Option<PropertyId>,
    #[serde(default)]
    pub function: String,
}

impl DatabaseProperty {
    fn schema(schema: PropertySchema) -> Self {
        Self {
            id: None,
            name: None,
            schema,
        }
    }

    pub fn title() -> Self {
        Self::schema(PropertySchema::Title {
            title: EmptyObject {},
        })
    }

    pub fn rich_text() -> Self {
        Self::schema(PropertySchema::RichText {
            rich_text: EmptyObject {},
        })
    }

    pub fn number(format: NumberFormat) -> Self {
        Self::schema(PropertySchema::Number {
            number: NumberConfig { format },
        })
    }

    pub fn select(options: Vec<SelectOption>) -> Self {
        Self::schema(PropertySchema::Select {
            select: SelectConfig { options },
        })
    }

    pub fn multi_select(options: Vec<SelectOption>) -> Self {
        Self::schema(PropertySchema::MultiSelect {
            multi_select: SelectConfig { options },
        })
    }

    pub fn date() -> Self {
        Self::schema(PropertySchema::Date {
            date: EmptyObject {},
        })
    }

    pub fn people() -> Self {
        Self::schema(PropertySchema::People {
            people: EmptyObject {},
        })
    }

    pub fn files() -> Self {
        Self::schema(PropertySchema::Files {
            files: EmptyObject {},
        })
    }

    pub fn checkbox() -> Self {
        Self::schema(PropertySchema::Checkbox {
            checkbox: EmptyObject {},
        })
    }

    pub fn url() -> Self {
        Self::schema(PropertySchema::Url {
            url: EmptyObject {},
        })
    }

    pub fn email() -> Self {
        Self::schema(PropertySchema::Email {
            email: EmptyObject {},
        })
    }

    pub fn phone_number() -> Self {
        Self::schema(PropertySchema::PhoneNumber {
            phone_number: EmptyObject {},
        })
    }

    pub fn formula(expression: impl Into<String>) -> Self {
        Self::schema(PropertySchema::Formula {
            formula: FormulaConfig {
                expression: expression.into(),
            },
        })
    }

    /// A single-property relation to another database.
    pub fn relation(database_id: DatabaseId) -> Self {
        Self::schema(PropertySchema::Relation {
            relation: RelationConfig {
                database_id,
                kind: Some(RelationKind::SingleProperty {
                    single_property: EmptyObject {},
                }),
            },
        })
    }

    pub fn created_time() -> Self {
        Self::schema(PropertySchema::CreatedTime {
            created_time: EmptyObject {},
        })
    }

    pub fn created_by() -> Self {
        Self::schema(PropertySchema::CreatedBy {
            created_by: EmptyObject {},
        })
    }

    pub fn last_edited_time() -> Self {
        Self::schema(PropertySchema::LastEditedTime {
            last_edited_time: EmptyObject {},
        })
    }

    pub fn last_edited_by() -> Self {
        Self::schema(PropertySchema::LastEditedBy {
            last_edited_by: EmptyObject {},
        })
    }

    /// The wire name of this property's type.
    pub fn type_name(&self) -> &'static str {
        match &self.schema {
            PropertySchema::Title { .. } => "title",
            PropertySchema::RichText { .. } => "rich_text",
            PropertySchema::Number { .. } => "number",
            PropertySchema::Select { .. } => "select",
            PropertySchema::MultiSelect { .. } => "multi_select",
            PropertySchema::Status { .. } => "status",
            PropertySchema::Date { .. } => "date",
            PropertySchema::People { .. } => "people",
            PropertySchema::Files { .. } => "files",
            PropertySchema::Checkbox { .. } => "checkbox",
            PropertySchema::Url { .. } => "url",
            PropertySchema::Email { .. } => "email",
            PropertySchema::PhoneNumber { .. } => "phone_number",
            PropertySchema::Formula { .. } => "formula",
            PropertySchema::Relation { .. } => "relation",
            PropertySchema::Rollup { .. } => "rollup",
            PropertySchema::CreatedTime { .. } => "created_time",
            PropertySchema::CreatedBy { .. } => "created_by",
            PropertySchema::LastEditedTime { .. } => "last_edited_time",
            PropertySchema::LastEditedBy { .. } => "last_edited_by",
        }
    }
}

/// Body of `POST /databases`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDatabaseRequest {
    pub parent: Parent,
    pub title: Vec<RichText>,
    pub properties: IndexMap<PropertyName, DatabaseProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<FileObject>,
}

impl CreateDatabaseRequest {
    pub fn new(
        parent: Parent,
        title: Vec<RichText>,
        properties: IndexMap<PropertyName, DatabaseProperty>,
    ) -> Self {
        Self {
            parent,
            title,
            properties,
            icon: None,
            cover: None,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_cover(mut self, cover: FileObject) -> Self {
        self.cover = Some(cover);
        self
    }

    /// Checks the constraints the service would reject: databases are
    /// created under pages, and the schema needs exactly one title
    /// column.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if !matches!(self.parent, Parent::Page { .. }) {
            return Err(ValidationError::InvalidParent {
                context: "database creation",
                kind: self.parent.kind(),
            });
        }
        let title_columns = self
            .properties
            .values()
            .filter(|prop| matches!(prop.schema, PropertySchema::Title { .. }))
            .count();
        if title_columns != 1 {
            return Err(ValidationError::EmptyField("title property"));
        }
        Ok(())
    }
}

/// Body of `PATCH /databases/{database_id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UpdateDatabaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<RichText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<RichText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<PropertyName, DatabaseProperty>>,
}

/// Body of `POST /databases/{database_id}/query`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QueryDatabaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<StartCursor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<PageSize>,
}

impl QueryDatabaseRequest {
    pub fn filtered(filter: Filter) -> Self {
        Self {
            filter: Some(filter),
            ..Self::default()
        }
    }

    pub fn with_sorts(mut self, sorts: Vec<Sort>) -> Self {
        self.sorts = sorts;
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn number_schema_serializes_format() {
        let prop = DatabaseProperty::number(NumberFormat::Dollar);
        let value = serde_json::to_value(&prop).unwrap();
        assert_eq!(
            value,
            json!({ "type": "number", "number": { "format": "dollar" } })
        );
    }

    #[test]
    fn title_schema_serializes_empty_object() {
        let prop = DatabaseProperty::title();
        let value = serde_json::to_value(&prop).unwrap();
        assert_eq!(value, json!({ "type": "title", "title": {} }));
    }

    #[test]
    fn select_schema_carries_options() {
        let prop = DatabaseProperty::select(vec![
            SelectOption::new("To Do").with_color(SelectColor::Red),
            SelectOption::new("Done").with_color(SelectColor::Green),
        ]);
        let value = serde_json::to_value(&prop).unwrap();
        assert_eq!(value["select"]["options"][0]["name"], json!("To Do"));
        assert_eq!(value["select"]["options"][1]["color"], json!("green"));
    }

    #[test]
    fn schema_parses_from_response_with_id_and_name() {
        let raw = json!({
            "id": "fy:{",
            "name": "Price",
            "type": "number",
            "number": { "format": "dollar" }
        });
        let prop: DatabaseProperty = serde_json::from_value(raw).unwrap();
        assert_eq!(prop.name.as_deref(), Some("Price"));
        assert_eq!(prop.type_name(), "number");
        match prop.schema {
            PropertySchema::Number { number } => assert_eq!(number.format, NumberFormat::Dollar),
            other => panic!("expected number schema, got {:?}", other),
        }
    }

    #[test]
    fn create_request_requires_page_parent() {
        let mut properties = IndexMap::new();
        properties.insert(PropertyName::from("Name"), DatabaseProperty::title());

        let db_parent = Parent::database(
            DatabaseId::parse("a1b2c3d4e5f678900000000000000000").unwrap(),
        );
        let request =
            CreateDatabaseRequest::new(db_parent, vec![RichText::text("Grocery List")], properties);
        assert!(request.validate().is_err());
    }

    #[test]
    fn create_request_requires_exactly_one_title_column() {
        let page_parent = Parent::page(
            crate::types::PageId::parse("550e8400e29b41d4a716446655440000").unwrap(),
        );
        let mut no_title = IndexMap::new();
        no_title.insert(
            PropertyName::from("Price"),
            DatabaseProperty::number(NumberFormat::Euro),
        );
        let request = CreateDatabaseRequest::new(
            page_parent,
            vec![RichText::text("Grocery List")],
            no_title,
        );
        assert!(request.validate().is_err());
    }

    #[test]
    fn empty_query_serializes_to_empty_body() {
        let value = serde_json::to_value(QueryDatabaseRequest::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn relation_schema_round_trips() {
        let raw = json!({
            "type": "relation",
            "relation": {
                "database_id": "a1b2c3d4-e5f6-7890-abcd-ef1234567890",
                "type": "dual_property",
                "dual_property": {
                    "synced_property_name": "Related",
                    "synced_property_id": "fy:{"
                }
            }
        });
        let prop: DatabaseProperty = serde_json::from_value(raw).unwrap();
        match &prop.schema {
            PropertySchema::Relation { relation } => {
                assert!(matches!(relation.kind, Some(RelationKind::DualProperty { .. })));
            }
            other => panic!("expected relation schema, got {:?}", other),
        }
    }
}
