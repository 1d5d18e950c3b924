// src/config.rs
use std::time::Duration;

use crate::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, NOTION_API_BASE_URL,
    NOTION_API_VERSION,
};
use crate::types::{ApiKey, ValidatedUrl, ValidationError};

/// Resolved client configuration, validated and ready to build the
/// HTTP transport from.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    pub base_url: ValidatedUrl,
    /// Value of the `Notion-Version` header sent with every request.
    pub notion_version: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Configuration with the production endpoint and default timeouts.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: ValidatedUrl::parse(NOTION_API_BASE_URL)
                .expect("Default base URL should always be valid"),
            notion_version: NOTION_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Reads the API key from the `NOTION_API_KEY` environment
    /// variable.
    pub fn from_env() -> Result<Self, ValidationError> {
        let raw = std::env::var("NOTION_API_KEY")
            .map_err(|_| ValidationError::MissingConfiguration("NOTION_API_KEY"))?;
        Ok(Self::new(ApiKey::new(raw)?))
    }

    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            api_key: api_key.into(),
            base_url: None,
            notion_version: None,
            timeout: None,
            connect_timeout: None,
        }
    }
}

/// Builder that defers validation to [`ClientConfigBuilder::build`],
/// so partial configuration never holds a half-checked key or URL.
#[derive(Debug)]
pub struct ClientConfigBuilder {
    api_key: String,
    base_url: Option<String>,
    notion_version: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Overrides the endpoint, mainly for tests against a local mock
    /// server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = Some(version.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    pub fn build(self) -> Result<ClientConfig, ValidationError> {
        let api_key = ApiKey::new(self.api_key)?;
        let mut config = ClientConfig::new(api_key);
        if let Some(url) = self.base_url {
            config.base_url = ValidatedUrl::parse(&url)?;
        }
        if let Some(version) = self.notion_version {
            config.notion_version = version;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(connect_timeout) = self.connect_timeout {
            config.connect_timeout = connect_timeout;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_point_at_production() {
        let config = ClientConfig::new(ApiKey::new_unchecked("secret_test_key_1234567890"));
        assert_eq!(config.base_url.as_str(), "https://api.notion.com/v1");
        assert_eq!(config.notion_version, "2022-06-28");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn builder_overrides_take_effect() {
        let config = ClientConfig::builder("secret_test_key_1234567890")
            .base_url("http://127.0.0.1:8080")
            .notion_version("2021-08-16")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/");
        assert_eq!(config.notion_version, "2021-08-16");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn builder_rejects_bad_inputs() {
        assert!(ClientConfig::builder("not-a-notion-key").build().is_err());
        assert!(ClientConfig::builder("secret_test_key_1234567890")
            .base_url("ftp://example.com")
            .build()
            .is_err());
    }
}
