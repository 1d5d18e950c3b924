// src/api/users.rs
//! The users endpoint.

use crate::error::Result;
use crate::model::{PaginatedList, User};
use crate::types::{PageSize, StartCursor, UserId};

use super::http::Transport;
use super::pagination::collect_all;

/// Operations on workspace members and integrations.
#[derive(Debug, Clone)]
pub struct UsersEndpoint {
    transport: Transport,
}

impl UsersEndpoint {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// `GET /users`: one page of the workspace member listing.
    pub async fn list(
        &self,
        cursor: Option<StartCursor>,
        page_size: Option<PageSize>,
    ) -> Result<PaginatedList<User>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("start_cursor", cursor.as_str().to_string()));
        }
        if let Some(page_size) = page_size {
            query.push(("page_size", page_size.get().to_string()));
        }
        self.transport.get("users", &query).await
    }

    /// Every user in the workspace, following cursors to the end.
    pub async fn list_all(&self) -> Result<Vec<User>> {
        collect_all(|cursor| self.list(cursor, None), None).await
    }

    /// `GET /users/{user_id}`.
    pub async fn retrieve(&self, user_id: &UserId) -> Result<User> {
        self.transport
            .get(&format!("users/{}", user_id.as_str()), &[])
            .await
    }

    /// `GET /users/me`: the bot user this API key belongs to.
    pub async fn me(&self) -> Result<User> {
        self.transport.get("users/me", &[]).await
    }
}
