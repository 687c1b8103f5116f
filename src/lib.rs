//! orgmark - organization span reconstruction and inline annotation.
//!
//! Takes BIO-tagged sub-word tokens from an external token-classification
//! model, folds them into whole organization spans, and writes marker pairs
//! around those spans in the original text.

pub mod classifier;
pub mod config;
pub mod models;
pub mod services;
mod utils;

pub use classifier::{ClassifierError, HttpClassifier, StaticClassifier, TokenClassifier};
pub use config::{load_settings, Settings};
pub use models::{EntitySpan, EntityTag, LabelScheme, RawToken, SpanCollection, Token};
pub use services::{
    annotate_text, annotate_tokens, reconstruct_spans, AnnotatedText, AnnotationError,
    AnnotationOptions, MarkerPair, OrgAnnotator, SpanReconstructor, TextAnnotator,
};
