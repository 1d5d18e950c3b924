use thiserror::Error;

mod colors;
mod domain_types;
mod ids;

pub use colors::*;
pub use domain_types::*;
pub use ids::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Value out of bounds: {value}, expected {min}..={max}")]
    OutOfBounds { value: u32, min: u32, max: u32 },

    #[error("Invalid parent kind for {context}: {kind}")]
    InvalidParent {
        context: &'static str,
        kind: &'static str,
    },

    #[error("Exactly one of {first} and {second} must be set")]
    ExclusiveFields {
        first: &'static str,
        second: &'static str,
    },

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Missing configuration: {0}")]
    MissingConfiguration(&'static str),
}
