//! End-to-end orchestration: classify, decode, reconstruct, annotate.

use tracing::debug;

use crate::classifier::{ClassifierError, TokenClassifier};
use crate::models::{decode_tokens, LabelScheme, RawToken};
use crate::services::ner::SpanReconstructor;

use super::annotator::TextAnnotator;
use super::markers::MarkerPair;
use super::types::{AnnotatedText, AnnotationError};

/// Markers and label interpretation for one pipeline.
#[derive(Debug, Clone, Default)]
pub struct AnnotationOptions {
    pub markers: MarkerPair,
    pub labels: LabelScheme,
}

/// Annotate `text` using already-classified tokens.
pub fn annotate_tokens(
    text: &str,
    raw: &[RawToken],
    options: &AnnotationOptions,
) -> Result<AnnotatedText, AnnotationError> {
    let tokens = decode_tokens(raw, &options.labels, text)?;
    let spans = SpanReconstructor::new(options.labels.continuation_prefix.as_str())
        .reconstruct(&tokens)?;

    debug!("Reconstructed {} span(s) from {} token(s)", spans.len(), tokens.len());

    let annotated = TextAnnotator::new(options.markers.clone()).annotate(text, &spans)?;
    Ok(AnnotatedText {
        text: annotated,
        spans,
    })
}

/// Annotate `text`, obtaining tokens from `classify`.
///
/// Empty text is returned unchanged without calling the classifier.
pub fn annotate_text<F>(
    text: &str,
    classify: F,
    options: &AnnotationOptions,
) -> Result<AnnotatedText, AnnotationError>
where
    F: FnOnce(&str) -> Result<Vec<RawToken>, ClassifierError>,
{
    if text.is_empty() {
        return Ok(AnnotatedText::unchanged(text));
    }
    let raw = classify(text)?;
    annotate_tokens(text, &raw, options)
}

/// Pipeline bound to a classifier backend.
pub struct OrgAnnotator {
    classifier: Box<dyn TokenClassifier>,
    options: AnnotationOptions,
}

impl OrgAnnotator {
    pub fn new(classifier: Box<dyn TokenClassifier>, options: AnnotationOptions) -> Self {
        Self {
            classifier,
            options,
        }
    }

    pub fn backend_id(&self) -> &str {
        self.classifier.backend_id()
    }

    pub fn options(&self) -> &AnnotationOptions {
        &self.options
    }

    pub async fn annotate(&self, text: &str) -> Result<AnnotatedText, AnnotationError> {
        if text.is_empty() {
            return Ok(AnnotatedText::unchanged(text));
        }

        debug!("Classifying {} chars via {}", text.len(), self.backend_id());
        let raw = self.classifier.classify(text).await?;
        annotate_tokens(text, &raw, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::StaticClassifier;

    fn sail_tokens() -> Vec<RawToken> {
        vec![
            RawToken::new("Stock", "O", 0, 5),
            RawToken::new("SA", "B-ORG", 16, 18),
            RawToken::new("##IL", "I-ORG", 18, 20),
            RawToken::new("are", "O", 21, 24),
        ]
    }

    const SAIL_TEXT: &str = "Stock prices of SAIL are roaring high this week.";

    #[test]
    fn test_annotate_tokens() {
        let result = annotate_tokens(SAIL_TEXT, &sail_tokens(), &AnnotationOptions::default())
            .unwrap();
        assert_eq!(result.text, "Stock prices of <e1>SAIL</e1> are roaring high this week.");
        assert_eq!(result.spans.len(), 1);
        assert_eq!(result.spans.as_slice()[0].text, "SAIL");
    }

    #[test]
    fn test_annotate_text_with_closure() {
        let result = annotate_text(
            SAIL_TEXT,
            |_| Ok(sail_tokens()),
            &AnnotationOptions::default(),
        )
        .unwrap();
        assert!(result.text.contains("<e1>SAIL</e1>"));
    }

    #[test]
    fn test_empty_text_skips_classifier() {
        let result = annotate_text(
            "",
            |_| Err(ClassifierError::NotConfigured),
            &AnnotationOptions::default(),
        )
        .unwrap();
        assert_eq!(result, AnnotatedText::unchanged(""));
    }

    #[test]
    fn test_classifier_error_is_surfaced() {
        let err = annotate_text(
            SAIL_TEXT,
            |_| Err(ClassifierError::Api("HTTP 503".to_string())),
            &AnnotationOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AnnotationError::Classifier(ClassifierError::Api(_))));
    }

    #[test]
    fn test_token_error_is_surfaced() {
        let raw = vec![RawToken::new("SAIL", "B-ORG", 16, 200)];
        let err = annotate_tokens(SAIL_TEXT, &raw, &AnnotationOptions::default()).unwrap_err();
        assert!(matches!(err, AnnotationError::Token(_)));
    }

    #[test]
    fn test_reconstruct_error_is_surfaced() {
        let raw = vec![RawToken::new("##IL", "I-ORG", 18, 20)];
        let err = annotate_tokens(SAIL_TEXT, &raw, &AnnotationOptions::default()).unwrap_err();
        assert!(matches!(err, AnnotationError::Reconstruct(_)));
    }

    #[tokio::test]
    async fn test_org_annotator() {
        let annotator = OrgAnnotator::new(
            Box::new(StaticClassifier::new(sail_tokens())),
            AnnotationOptions::default(),
        );
        assert_eq!(annotator.backend_id(), "static");

        let result = annotator.annotate(SAIL_TEXT).await.unwrap();
        assert_eq!(result.text, "Stock prices of <e1>SAIL</e1> are roaring high this week.");
    }
}
