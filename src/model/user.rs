// src/model/user.rs
//! Workspace members and integrations as the API represents them.
//!
//! Full user objects are discriminated into person and bot variants by
//! the wire `type` tag. Entity envelopes (`created_by`, `last_edited_by`)
//! and low-capability people listings carry partial references instead,
//! which hold only the identifier.

use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// A full user object, as returned by the users endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub details: UserDetails,
}

/// Person or bot, dispatched on the wire `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserDetails {
    Person {
        #[serde(default)]
        person: PersonData,
    },
    Bot {
        #[serde(default)]
        bot: BotData,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonData {
    /// Only populated when the integration has email capabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BotData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<BotOwner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotOwner {
    Workspace { workspace: bool },
    User { user: Box<PartialUser> },
}

/// A reference to a user carrying only the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialUser {
    #[serde(default = "default_user_object")]
    pub object: String,
    pub id: UserId,
}

fn default_user_object() -> String {
    "user".to_string()
}

impl PartialUser {
    pub fn new(id: UserId) -> Self {
        Self {
            object: default_user_object(),
            id,
        }
    }
}

/// A user as it appears inside other objects: full when the integration
/// has user capabilities, a bare reference otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Full(User),
    Partial(PartialUser),
}

impl UserRef {
    /// Build a bare reference, the form requests send.
    pub fn partial(id: UserId) -> Self {
        Self::Partial(PartialUser::new(id))
    }

    pub fn id(&self) -> &UserId {
        match self {
            UserRef::Full(user) => &user.id,
            UserRef::Partial(partial) => &partial.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            UserRef::Full(user) => user.name.as_deref(),
            UserRef::Partial(_) => None,
        }
    }
}

impl User {
    pub fn is_bot(&self) -> bool {
        matches!(self.details, UserDetails::Bot { .. })
    }

    pub fn is_person(&self) -> bool {
        matches!(self.details, UserDetails::Person { .. })
    }

    /// The person's email, when visible to the integration.
    pub fn email(&self) -> Option<&str> {
        match &self.details {
            UserDetails::Person { person } => person.email.as_deref(),
            UserDetails::Bot { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn person_user_parses() {
        let raw = json!({
            "object": "user",
            "id": "d40e767c-d7af-4b18-a86d-55c61f1e39a4",
            "type": "person",
            "person": { "email": "avo@example.org" },
            "name": "Avocado Lovelace",
            "avatar_url": "https://secure.notion-static.com/avo.jpg"
        });
        let user: User = serde_json::from_value(raw).unwrap();
        assert!(user.is_person());
        assert_eq!(user.email(), Some("avo@example.org"));
        assert_eq!(user.name.as_deref(), Some("Avocado Lovelace"));
    }

    #[test]
    fn bot_user_parses_with_workspace_owner() {
        let raw = json!({
            "object": "user",
            "id": "9a3b5ae0-c6e6-482d-b0e1-ed315ee6dc57",
            "type": "bot",
            "bot": {
                "owner": { "type": "workspace", "workspace": true },
                "workspace_name": "Ada's workspace"
            },
            "name": "Doc bot",
            "avatar_url": null
        });
        let user: User = serde_json::from_value(raw).unwrap();
        assert!(user.is_bot());
        match &user.details {
            UserDetails::Bot { bot } => {
                assert_eq!(bot.workspace_name.as_deref(), Some("Ada's workspace"));
                assert!(matches!(
                    bot.owner,
                    Some(BotOwner::Workspace { workspace: true })
                ));
            }
            other => panic!("expected bot details, got {:?}", other),
        }
    }

    #[test]
    fn partial_reference_falls_back() {
        let raw = json!({ "object": "user", "id": "d40e767c-d7af-4b18-a86d-55c61f1e39a4" });
        let user_ref: UserRef = serde_json::from_value(raw).unwrap();
        assert!(matches!(user_ref, UserRef::Partial(_)));
        assert_eq!(user_ref.id().as_str(), "d40e767cd7af4b18a86d55c61f1e39a4");
        assert_eq!(user_ref.name(), None);
    }

    #[test]
    fn partial_reference_serializes_with_object_marker() {
        let user_ref = UserRef::partial(UserId::parse("d40e767cd7af4b18a86d55c61f1e39a4").unwrap());
        let value = serde_json::to_value(&user_ref).unwrap();
        assert_eq!(value["object"], json!("user"));
        assert_eq!(value["id"], json!("d40e767c-d7af-4b18-a86d-55c61f1e39a4"));
    }
}
