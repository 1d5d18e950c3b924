// src/api/http.rs
//! Pure HTTP transport for the Notion API.
//!
//! This module provides a thin wrapper around reqwest for making
//! authenticated JSON requests. It handles headers, status mapping,
//! and body decoding without any endpoint-specific logic.

use reqwest::header;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::constants::USER_AGENT;
use crate::error::{preview_of, Error, Result};
use crate::types::ValidatedUrl;

/// A thin wrapper around reqwest Client for Notion API requests.
///
/// Cloning is cheap; every clone shares the underlying connection
/// pool.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: ValidatedUrl,
}

impl Transport {
    /// Creates a new transport with authentication baked into the
    /// default headers.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(create_headers(config)?)
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), endpoint)
    }

    /// Makes a GET request to the specified endpoint.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(endpoint);
        log::debug!("GET {}", url);
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        decode(response).await
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(endpoint);
        log::debug!("POST {}", url);
        let response = self.http.post(&url).json(body).send().await?;
        decode(response).await
    }

    /// Makes a PATCH request with JSON body to the specified endpoint.
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(endpoint);
        log::debug!("PATCH {}", url);
        let response = self.http.patch(&url).json(body).send().await?;
        decode(response).await
    }

    /// Makes a DELETE request to the specified endpoint.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        log::debug!("DELETE {}", url);
        let response = self.http.delete(&url).send().await?;
        decode(response).await
    }
}

/// Creates the default headers for Notion API requests.
fn create_headers(config: &ClientConfig) -> Result<header::HeaderMap> {
    let mut headers = header::HeaderMap::new();

    let auth_header = format!("Bearer {}", config.api_key.as_str());
    headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&auth_header).map_err(|e| Error::InvalidHeader {
            message: format!("Invalid API token format: {}", e),
        })?,
    );

    headers.insert(
        "Notion-Version",
        header::HeaderValue::from_str(&config.notion_version).map_err(|e| {
            Error::InvalidHeader {
                message: format!("Invalid Notion-Version value: {}", e),
            }
        })?,
    );

    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );

    Ok(headers)
}

/// Maps a response to the typed result: error statuses become
/// [`Error::Api`], success bodies that fail to parse become
/// [`Error::Deserialization`].
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        log::debug!("API error response ({}): {}", status, preview_of(&body));
        return Err(Error::from_response(status.as_u16(), &body));
    }

    serde_json::from_str(&body).map_err(|source| Error::Deserialization {
        source,
        body: preview_of(&body),
    })
}
