//! Service layer: span reconstruction and text annotation.
//!
//! Both stages are pure functions over their inputs. The only I/O in the
//! pipeline is the classifier call, which lives behind `TokenClassifier`.

pub mod annotation;
pub mod ner;

pub use annotation::{
    annotate_text, annotate_tokens, AnnotatedText, AnnotationError, AnnotationOptions,
    MarkerConfig, MarkerError, MarkerPair, OrgAnnotator, TextAnnotator,
};
pub use ner::{reconstruct_spans, ReconstructError, SpanReconstructor};
