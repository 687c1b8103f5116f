//! Annotation pipeline: marker insertion and orchestration.
//!
//! `TextAnnotator` does the offset bookkeeping. `OrgAnnotator` and the
//! `annotate_*` functions chain a classifier, the span reconstructor and the
//! annotator into one call.

mod annotator;
mod markers;
mod pipeline;
mod types;

pub use annotator::TextAnnotator;
pub use markers::{
    MarkerConfig, MarkerError, MarkerPair, DEFAULT_CLOSE_MARKER, DEFAULT_OPEN_MARKER,
};
pub use pipeline::{annotate_text, annotate_tokens, AnnotationOptions, OrgAnnotator};
pub use types::{AnnotatedText, AnnotationError};
