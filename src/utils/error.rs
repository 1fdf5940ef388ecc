// src/utils/error.rs
use thiserror::Error;

// Errors raised while fetching the upstream page
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // DNS, refused connection, timeout, body read

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // Any non-2xx status; the body is never parsed
}

// Errors raised while turning a fetched document into typed values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    #[error("Marker node not found: {0}")]
    NodeNotFound(String),

    #[error("Numeric label not found in {0}")]
    LabelNotFound(String),

    #[error("Not a number: '{0}'")]
    NotANumber(String),

    #[error("Expected at least {expected} '{marker}' nodes, found {found}")]
    TooFewNodes {
        marker: String,
        expected: usize,
        found: usize,
    },

    #[error("Text '{text}' does not match {field} pattern")]
    PatternMismatch { field: &'static str, text: String },

    #[error("Malformed table row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Upstream fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
