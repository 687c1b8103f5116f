//! Classifier that replays a fixed token sequence.

use std::path::Path;

use async_trait::async_trait;

use crate::models::RawToken;

use super::{parse_response, ClassifierError, TokenClassifier};

/// Returns the same tokens for every input.
///
/// Useful for tests and for annotating text whose tokens were produced
/// elsewhere and saved as JSON.
#[derive(Debug, Clone, Default)]
pub struct StaticClassifier {
    tokens: Vec<RawToken>,
}

impl StaticClassifier {
    pub fn new(tokens: Vec<RawToken>) -> Self {
        Self { tokens }
    }

    /// Parse tokens from JSON, in any shape `parse_response` accepts.
    pub fn from_json_str(json: &str) -> Result<Self, ClassifierError> {
        Ok(Self::new(parse_response(json)?))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ClassifierError> {
        let json = std::fs::read_to_string(path).map_err(|source| ClassifierError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn tokens(&self) -> &[RawToken] {
        &self.tokens
    }
}

#[async_trait]
impl TokenClassifier for StaticClassifier {
    fn backend_id(&self) -> &str {
        "static"
    }

    async fn classify(&self, _text: &str) -> Result<Vec<RawToken>, ClassifierError> {
        Ok(self.tokens.clone())
    }
}
