// src/model/sort.rs
//! Sort criteria for database queries.

use crate::types::PropertyName;
use serde::{Deserialize, Serialize};

/// One sort criterion: by a named property or by an entity timestamp.
/// Earlier criteria take precedence over later ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sort {
    Property {
        property: PropertyName,
        direction: SortDirection,
    },
    Timestamp {
        timestamp: SortTimestamp,
        direction: SortDirection,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortTimestamp {
    CreatedTime,
    LastEditedTime,
}

impl Sort {
    pub fn ascending(property: impl Into<PropertyName>) -> Self {
        Self::Property {
            property: property.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(property: impl Into<PropertyName>) -> Self {
        Self::Property {
            property: property.into(),
            direction: SortDirection::Descending,
        }
    }

    pub fn by_created_time(direction: SortDirection) -> Self {
        Self::Timestamp {
            timestamp: SortTimestamp::CreatedTime,
            direction,
        }
    }

    pub fn by_last_edited_time(direction: SortDirection) -> Self {
        Self::Timestamp {
            timestamp: SortTimestamp::LastEditedTime,
            direction,
        }
    }
}
