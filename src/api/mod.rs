// src/api/mod.rs
//! Notion API interaction: the root client and one endpoint type per
//! resource.
//!
//! [`Client`] owns the authenticated transport; each endpoint field
//! shares it, so cloning the client or an endpoint never opens a new
//! connection pool.

mod http;
pub mod pagination;

pub mod blocks;
pub mod comments;
pub mod databases;
pub mod pages;
pub mod search;
pub mod users;

pub use blocks::BlocksEndpoint;
pub use comments::CommentsEndpoint;
pub use databases::DatabasesEndpoint;
pub use pages::PagesEndpoint;
pub use search::SearchEndpoint;
pub use users::UsersEndpoint;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::types::ApiKey;
use http::Transport;

/// The Notion API client.
///
/// ```no_run
/// # async fn run() -> notion_sdk::Result<()> {
/// let client = notion_sdk::Client::from_env()?;
/// let me = client.users.me().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    pub users: UsersEndpoint,
    pub databases: DatabasesEndpoint,
    pub pages: PagesEndpoint,
    pub blocks: BlocksEndpoint,
    pub search: SearchEndpoint,
    pub comments: CommentsEndpoint,
}

impl Client {
    /// Client for the production endpoint with default settings. The
    /// key is validated before anything is sent.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = ApiKey::new(api_key)?;
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Client configured from the `NOTION_API_KEY` environment
    /// variable.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Client with explicit configuration, for overriding the base
    /// URL, API version, or timeouts.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        Ok(Self {
            users: UsersEndpoint::new(transport.clone()),
            databases: DatabasesEndpoint::new(transport.clone()),
            pages: PagesEndpoint::new(transport.clone()),
            blocks: BlocksEndpoint::new(transport.clone()),
            search: SearchEndpoint::new(transport.clone()),
            comments: CommentsEndpoint::new(transport),
        })
    }
}
