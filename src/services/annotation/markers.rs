//! Opening/closing marker literals.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::char_len;

pub const DEFAULT_OPEN_MARKER: &str = "<e1>";
pub const DEFAULT_CLOSE_MARKER: &str = "</e1>";

/// Marker literals as they appear in settings files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerConfig {
    #[serde(default = "default_open")]
    pub open: String,
    #[serde(default = "default_close")]
    pub close: String,
}

fn default_open() -> String {
    DEFAULT_OPEN_MARKER.to_string()
}

fn default_close() -> String {
    DEFAULT_CLOSE_MARKER.to_string()
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            open: default_open(),
            close: default_close(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("{0} marker must not be empty")]
    Empty(&'static str),

    #[error("opening and closing markers are both {0:?}")]
    Identical(String),
}

/// A validated, non-empty, distinct pair of markers.
///
/// Lengths are measured in characters, the same unit as span offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    open: String,
    close: String,
    open_len: usize,
    close_len: usize,
}

impl MarkerPair {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Result<Self, MarkerError> {
        let open = open.into();
        let close = close.into();

        if open.is_empty() {
            return Err(MarkerError::Empty("opening"));
        }
        if close.is_empty() {
            return Err(MarkerError::Empty("closing"));
        }
        if open == close {
            return Err(MarkerError::Identical(open));
        }

        let open_len = char_len(&open);
        let close_len = char_len(&close);
        Ok(Self {
            open,
            close,
            open_len,
            close_len,
        })
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    pub fn open_len(&self) -> usize {
        self.open_len
    }

    pub fn close_len(&self) -> usize {
        self.close_len
    }

    /// Characters added to the text per annotated span.
    pub fn pair_len(&self) -> usize {
        self.open_len + self.close_len
    }
}

impl Default for MarkerPair {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN_MARKER.to_string(),
            close: DEFAULT_CLOSE_MARKER.to_string(),
            open_len: char_len(DEFAULT_OPEN_MARKER),
            close_len: char_len(DEFAULT_CLOSE_MARKER),
        }
    }
}

impl TryFrom<&MarkerConfig> for MarkerPair {
    type Error = MarkerError;

    fn try_from(config: &MarkerConfig) -> Result<Self, Self::Error> {
        MarkerPair::new(config.open.clone(), config.close.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lengths_match_literals() {
        let pair = MarkerPair::default();
        let built = MarkerPair::new(DEFAULT_OPEN_MARKER, DEFAULT_CLOSE_MARKER).unwrap();
        assert_eq!(pair, built);
        assert_eq!(pair.pair_len(), 9);
    }

    #[test]
    fn test_lengths_are_in_characters() {
        let pair = MarkerPair::new("«", "»").unwrap();
        assert_eq!(pair.open_len(), 1);
        assert_eq!(pair.close_len(), 1);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(MarkerPair::new("", "</e1>"), Err(MarkerError::Empty("opening")));
        assert_eq!(MarkerPair::new("<e1>", ""), Err(MarkerError::Empty("closing")));
    }

    #[test]
    fn test_rejects_identical() {
        assert_eq!(
            MarkerPair::new("|", "|"),
            Err(MarkerError::Identical("|".to_string()))
        );
    }

    #[test]
    fn test_from_config() {
        let config = MarkerConfig {
            open: "[ORG]".to_string(),
            close: "[/ORG]".to_string(),
        };
        let pair = MarkerPair::try_from(&config).unwrap();
        assert_eq!(pair.open(), "[ORG]");
        assert_eq!(pair.pair_len(), 11);
    }
}
