// src/model/filter.rs
//! Filter conditions for database queries.
//!
//! The wire format keys each condition by the property type it applies
//! to, then by the operator. Compound filters nest through `and`/`or`.
//! The externally tagged condition enums reproduce the two-level
//! nesting without hand-written serializers.

use crate::types::{PageId, PropertyName, UserId};
use serde::{Deserialize, Serialize};

use super::sort::SortTimestamp;
use super::EmptyObject;

/// A query filter: a single property condition, a timestamp condition,
/// or a boolean combination of other filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    And { and: Vec<Filter> },
    Or { or: Vec<Filter> },
    Timestamp(TimestampFilter),
    Property(PropertyFilter),
}

impl Filter {
    pub fn and(filters: Vec<Filter>) -> Self {
        Self::And { and: filters }
    }

    pub fn or(filters: Vec<Filter>) -> Self {
        Self::Or { or: filters }
    }

    pub fn property(name: impl Into<PropertyName>, condition: PropertyCondition) -> Self {
        Self::Property(PropertyFilter {
            property: name.into(),
            condition,
        })
    }

    pub fn created_time(condition: DateCondition) -> Self {
        Self::Timestamp(TimestampFilter {
            timestamp: SortTimestamp::CreatedTime,
            condition: TimestampCondition::CreatedTime(condition),
        })
    }

    pub fn last_edited_time(condition: DateCondition) -> Self {
        Self::Timestamp(TimestampFilter {
            timestamp: SortTimestamp::LastEditedTime,
            condition: TimestampCondition::LastEditedTime(condition),
        })
    }
}

/// A condition on one named property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    pub property: PropertyName,
    #[serde(flatten)]
    pub condition: PropertyCondition,
}

/// The property-type key of a condition. Flattened into the filter, so
/// `{"property": "Name", "title": {"contains": "kale"}}` comes out of
/// `Title(TextCondition::Contains(..))`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCondition {
    Title(TextCondition),
    RichText(TextCondition),
    Url(TextCondition),
    Email(TextCondition),
    PhoneNumber(TextCondition),
    Number(NumberCondition),
    Checkbox(CheckboxCondition),
    Select(SelectCondition),
    Status(SelectCondition),
    MultiSelect(MultiSelectCondition),
    Date(DateCondition),
    People(PeopleCondition),
    Files(ExistenceCondition),
    Relation(RelationCondition),
    Formula(Box<FormulaCondition>),
}

/// Operators on title, rich text, url, email, and phone properties.
///
/// `IsEmpty` and `IsNotEmpty` must carry `true`; the service rejects
/// `false` there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCondition {
    Equals(String),
    DoesNotEqual(String),
    Contains(String),
    DoesNotContain(String),
    StartsWith(String),
    EndsWith(String),
    IsEmpty(bool),
    IsNotEmpty(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberCondition {
    Equals(f64),
    DoesNotEqual(f64),
    GreaterThan(f64),
    LessThan(f64),
    GreaterThanOrEqualTo(f64),
    LessThanOrEqualTo(f64),
    IsEmpty(bool),
    IsNotEmpty(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckboxCondition {
    Equals(bool),
    DoesNotEqual(bool),
}

/// Operators on select and status properties, matching option names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectCondition {
    Equals(String),
    DoesNotEqual(String),
    IsEmpty(bool),
    IsNotEmpty(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiSelectCondition {
    Contains(String),
    DoesNotContain(String),
    IsEmpty(bool),
    IsNotEmpty(bool),
}

/// Operators on date properties. Bounds are ISO 8601 dates or
/// timestamps; the relative ranges take no operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateCondition {
    Equals(String),
    Before(String),
    After(String),
    OnOrBefore(String),
    OnOrAfter(String),
    PastWeek(EmptyObject),
    PastMonth(EmptyObject),
    PastYear(EmptyObject),
    NextWeek(EmptyObject),
    NextMonth(EmptyObject),
    NextYear(EmptyObject),
    ThisWeek(EmptyObject),
    IsEmpty(bool),
    IsNotEmpty(bool),
}

impl DateCondition {
    pub fn past_week() -> Self {
        Self::PastWeek(EmptyObject {})
    }

    pub fn past_month() -> Self {
        Self::PastMonth(EmptyObject {})
    }

    pub fn past_year() -> Self {
        Self::PastYear(EmptyObject {})
    }

    pub fn next_week() -> Self {
        Self::NextWeek(EmptyObject {})
    }

    pub fn next_month() -> Self {
        Self::NextMonth(EmptyObject {})
    }

    pub fn next_year() -> Self {
        Self::NextYear(EmptyObject {})
    }

    pub fn this_week() -> Self {
        Self::ThisWeek(EmptyObject {})
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeopleCondition {
    Contains(UserId),
    DoesNotContain(UserId),
    IsEmpty(bool),
    IsNotEmpty(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationCondition {
    Contains(PageId),
    DoesNotContain(PageId),
    IsEmpty(bool),
    IsNotEmpty(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExistenceCondition {
    IsEmpty(bool),
    IsNotEmpty(bool),
}

/// Conditions on formula properties, keyed by the formula result type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaCondition {
    String(TextCondition),
    Checkbox(CheckboxCondition),
    Number(NumberCondition),
    Date(DateCondition),
}

/// A condition on an entity timestamp instead of a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampFilter {
    pub timestamp: SortTimestamp,
    #[serde(flatten)]
    pub condition: TimestampCondition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampCondition {
    CreatedTime(DateCondition),
    LastEditedTime(DateCondition),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn checkbox_filter_serializes_two_level_nesting() {
        let filter = Filter::property(
            "In stock",
            PropertyCondition::Checkbox(CheckboxCondition::Equals(true)),
        );
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            value,
            json!({ "property": "In stock", "checkbox": { "equals": true } })
        );
    }

    #[test]
    fn compound_filter_nests_conditions() {
        let filter = Filter::and(vec![
            Filter::property(
                "Price",
                PropertyCondition::Number(NumberCondition::GreaterThan(2.0)),
            ),
            Filter::or(vec![
                Filter::property(
                    "Name",
                    PropertyCondition::Title(TextCondition::Contains("kale".into())),
                ),
                Filter::property(
                    "Tags",
                    PropertyCondition::MultiSelect(MultiSelectCondition::Contains(
                        "vegetable".into(),
                    )),
                ),
            ]),
        ]);
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value["and"][0]["number"]["greater_than"], json!(2.0));
        assert_eq!(
            value["and"][1]["or"][0]["title"]["contains"],
            json!("kale")
        );
    }

    #[test]
    fn timestamp_filter_repeats_the_timestamp_key() {
        let filter = Filter::last_edited_time(DateCondition::past_week());
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            value,
            json!({ "timestamp": "last_edited_time", "last_edited_time": { "past_week": {} } })
        );
    }

    #[test]
    fn formula_condition_keys_by_result_type() {
        let filter = Filter::property(
            "Discounted",
            PropertyCondition::Formula(Box::new(FormulaCondition::Number(
                NumberCondition::LessThan(10.0),
            ))),
        );
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            value,
            json!({ "property": "Discounted", "formula": { "number": { "less_than": 10.0 } } })
        );
    }

    #[test]
    fn relation_filter_serializes_dashed_id() {
        let id = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        let filter = Filter::property(
            "Project",
            PropertyCondition::Relation(RelationCondition::Contains(id)),
        );
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            value["relation"]["contains"],
            json!("550e8400-e29b-41d4-a716-446655440000")
        );
    }
}
