// src/error.rs
//! Error types for a scrape run.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run. None of these are retried.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Response body from {url} is not valid UTF-8: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
