//! Types shared across the annotation pipeline.

use serde::Serialize;
use thiserror::Error;

use crate::classifier::ClassifierError;
use crate::models::{SpanCollection, TokenError};
use crate::services::ner::ReconstructError;

use super::markers::MarkerError;

/// Result of annotating one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedText {
    /// Original text with marker pairs inserted.
    pub text: String,
    /// Spans in original-text coordinates, for diagnostics.
    pub spans: SpanCollection,
}

impl AnnotatedText {
    /// Pass-through result with no spans.
    pub fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            spans: SpanCollection::new(),
        }
    }
}

/// Errors from the annotation pipeline.
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("Invalid markers: {0}")]
    Markers(#[from] MarkerError),

    #[error("Malformed token data: {0}")]
    Token(#[from] TokenError),

    #[error("Inconsistent tag sequence: {0}")]
    Reconstruct(#[from] ReconstructError),

    #[error("Classifier failed: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Marker for span {span} lands at {position}, outside the text ({len} chars)")]
    OffsetOutOfBounds {
        span: usize,
        position: usize,
        len: usize,
    },
}
