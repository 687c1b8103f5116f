//! Token-classification backends.
//!
//! The model is a black box behind `TokenClassifier`: text in, ordered
//! tagged tokens out. `StaticClassifier` replays fixed tokens (tests, offline
//! token files). `HttpClassifier` calls a remote inference endpoint.

mod http;
mod static_backend;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::RawToken;

pub use http::{parse_response, ClassifierConfig, HttpClassifier};
pub use static_backend::StaticClassifier;

/// Trait for pluggable classification backends.
#[async_trait]
pub trait TokenClassifier: Send + Sync {
    /// Human-readable backend identifier (e.g. "static", "http").
    fn backend_id(&self) -> &str;

    /// Classify `text` into tokens ordered left to right.
    async fn classify(&self, text: &str) -> Result<Vec<RawToken>, ClassifierError>;
}

/// Errors from classification backends.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Cannot read token file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No classifier endpoint configured")]
    NotConfigured,
}
