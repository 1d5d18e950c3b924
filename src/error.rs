// src/error.rs
//! Client error types with structured error handling.
//!
//! Failures split three ways: requests rejected before they leave the
//! process, transport faults, and errors the service itself reported.
//! Callers match on the variant to decide between fixing their input,
//! retrying, and giving up.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::types::ValidationError;

/// Notion API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"rate_limited"`,
/// the service's error vocabulary is encoded in the type system. Codes
/// this client doesn't recognize survive as [`ErrorCode::Unknown`]
/// rather than failing the error path itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// API rate limit exceeded, back off and retry
    RateLimited,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request body contains invalid JSON
    InvalidJson,
    /// Request URL is malformed
    InvalidRequestUrl,
    /// Request is not supported by the endpoint
    InvalidRequest,
    /// Request parameters failed the service's validation
    ValidationFailed,
    /// The Notion-Version header is missing
    MissingVersion,
    /// Conflict with the current state of the resource
    Conflict,
    /// Service internal error
    InternalError,
    /// Service is temporarily unavailable
    ServiceUnavailable,
    /// Service cannot reach its own database
    DatabaseConnectionUnavailable,
    /// Service timed out upstream
    GatewayTimeout,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl ErrorCode {
    /// Parse a service error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "invalid_request_url" => Self::InvalidRequestUrl,
            "invalid_request" => Self::InvalidRequest,
            "validation_error" => Self::ValidationFailed,
            "missing_version" => Self::MissingVersion,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            "database_connection_unavailable" => Self::DatabaseConnectionUnavailable,
            "gateway_timeout" => Self::GatewayTimeout,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error is transient and worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited
                | Self::InternalError
                | Self::ServiceUnavailable
                | Self::DatabaseConnectionUnavailable
                | Self::GatewayTimeout
        ) || matches!(self, Self::HttpStatus(status) if *status >= 500)
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::InvalidRequestUrl => write!(f, "invalid_request_url"),
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::MissingVersion => write!(f, "missing_version"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::DatabaseConnectionUnavailable => write!(f, "database_connection_unavailable"),
            Self::GatewayTimeout => write!(f, "gateway_timeout"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main client error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The request was rejected before anything left the process.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The HTTP exchange itself failed.
    #[error("Network failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with an error status.
    #[error("Notion API returned an error ({status} {code}): {message}")]
    Api {
        status: u16,
        code: ErrorCode,
        message: String,
        request_id: Option<String>,
    },

    /// The service answered 2xx but the body did not match the
    /// expected shape.
    #[error("Failed to deserialize response: {source}\nBody: {body}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Invalid authentication header: {message}")]
    InvalidHeader { message: String },
}

/// The JSON body the service sends alongside error statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    message: String,
    #[serde(default)]
    request_id: Option<String>,
}

impl Error {
    /// Builds the API error for a non-success response, falling back
    /// to the raw status when the error body is not the documented
    /// shape.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => Self::Api {
                status,
                code: ErrorCode::from_api_response(&parsed.code),
                message: parsed.message,
                request_id: parsed.request_id,
            },
            Err(_) => Self::Api {
                status,
                code: ErrorCode::from_http_status(status),
                message: preview_of(body),
                request_id: None,
            },
        }
    }

    /// Whether retrying the same call might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api { code, .. } => code.is_retryable(),
            Self::Transport(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        }
    }

    /// Whether the target object simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { code, .. } if code.is_not_found())
    }

    /// The HTTP status of an API error, `None` for the other variants.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Truncates a response body for inclusion in error messages.
pub(crate) fn preview_of(body: &str) -> String {
    if body.chars().count() <= ERROR_BODY_PREVIEW_LENGTH {
        body.to_string()
    } else {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
