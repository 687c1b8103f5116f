//! Organization span reconstruction from BIO-tagged sub-word tokens.
//!
//! Tokens are folded left to right into a [`SpanCollection`]. A begin tag
//! opens a span and inside tags extend whichever span is currently open.

use thiserror::Error;
use tracing::debug;

use crate::models::{EntityTag, SpanCollection, Token};

/// The tag sequence cannot be folded into spans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructError {
    #[error("token {index} ({word:?}) continues an organization but none is open")]
    InsideWithoutBegin { index: usize, word: String },
}

/// Folds tagged tokens into whole-entity spans.
#[derive(Debug, Clone)]
pub struct SpanReconstructor {
    continuation_prefix: String,
}

impl SpanReconstructor {
    pub fn new(continuation_prefix: impl Into<String>) -> Self {
        Self {
            continuation_prefix: continuation_prefix.into(),
        }
    }

    /// Reconstruct spans from tokens in left-to-right order.
    ///
    /// A begin tag on a continuation piece is ignored: it neither opens a span
    /// nor extends the open one. Non-organization tokens are skipped and leave
    /// the open span as it is.
    pub fn reconstruct(&self, tokens: &[Token]) -> Result<SpanCollection, ReconstructError> {
        let mut spans = SpanCollection::new();
        let mut open: Option<usize> = None;

        for (index, token) in tokens.iter().enumerate() {
            match token.tag {
                EntityTag::BeginOrg if token.is_continuation => {
                    debug!(
                        "Ignoring begin tag on continuation piece {:?} at {}..{}",
                        token.text, token.start, token.end
                    );
                }
                EntityTag::BeginOrg => {
                    let id = spans.push(self.strip(&token.text), token.start, token.end);
                    open = Some(id);
                }
                EntityTag::InsideOrg => {
                    let Some(span) = open.and_then(|id| spans.get_mut(id)) else {
                        return Err(ReconstructError::InsideWithoutBegin {
                            index,
                            word: token.text.clone(),
                        });
                    };
                    span.text.push_str(&self.strip(&token.text));
                    span.end = token.end;
                }
                EntityTag::Other => {}
            }
        }

        Ok(spans)
    }

    fn strip(&self, word: &str) -> String {
        if self.continuation_prefix.is_empty() {
            word.to_string()
        } else {
            word.replace(&self.continuation_prefix, "")
        }
    }
}

impl Default for SpanReconstructor {
    fn default() -> Self {
        Self::new("##")
    }
}

/// Convenience function: reconstructs spans with the default `##` prefix.
pub fn reconstruct_spans(tokens: &[Token]) -> Result<SpanCollection, ReconstructError> {
    SpanReconstructor::default().reconstruct(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn begin(text: &str, start: usize, end: usize) -> Token {
        Token::new(text, EntityTag::BeginOrg, text.starts_with("##"), start, end)
    }

    fn inside(text: &str, start: usize, end: usize) -> Token {
        Token::new(text, EntityTag::InsideOrg, text.starts_with("##"), start, end)
    }

    fn other(text: &str, start: usize, end: usize) -> Token {
        Token::new(text, EntityTag::Other, text.starts_with("##"), start, end)
    }

    fn texts(spans: &SpanCollection) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let spans = reconstruct_spans(&[]).unwrap();
        assert!(spans.is_empty());
    }

    #[test]
    fn test_no_organizations() {
        let tokens = vec![other("It", 0, 2), other("is", 3, 5), other("sunny", 6, 11)];
        assert!(reconstruct_spans(&tokens).unwrap().is_empty());
    }

    #[test]
    fn test_single_word_entities() {
        let tokens = vec![
            begin("Microsoft", 34, 43),
            other(",", 43, 44),
            begin("Google", 45, 51),
        ];
        let spans = reconstruct_spans(&tokens).unwrap();

        assert_eq!(texts(&spans), vec!["Microsoft", "Google"]);
        assert_eq!((spans.as_slice()[1].start, spans.as_slice()[1].end), (45, 51));
    }

    #[test]
    fn test_subword_merge_strips_prefix() {
        let tokens = vec![begin("My", 56, 58), inside("##ntra", 58, 62)];
        let spans = reconstruct_spans(&tokens).unwrap();

        assert_eq!(texts(&spans), vec!["Myntra"]);
        assert_eq!((spans.as_slice()[0].start, spans.as_slice()[0].end), (56, 62));
    }

    #[test]
    fn test_multi_word_merge_has_no_separator() {
        let tokens = vec![
            begin("Novo", 0, 4),
            inside("Nordisk", 5, 12),
            inside("A", 13, 14),
            inside("/", 14, 15),
            inside("S", 15, 16),
            other(".", 16, 17),
        ];
        let spans = reconstruct_spans(&tokens).unwrap();

        assert_eq!(texts(&spans), vec!["NovoNordiskA/S"]);
        assert_eq!((spans.as_slice()[0].start, spans.as_slice()[0].end), (0, 16));
    }

    #[test]
    fn test_repeated_name_is_not_collapsed() {
        let tokens = vec![begin("Apple", 10, 15), other("and", 16, 19), begin("Apple", 20, 25)];
        let spans = reconstruct_spans(&tokens).unwrap();

        assert_eq!(spans.len(), 2);
        assert_eq!(spans.as_slice()[0].start, 10);
        assert_eq!(spans.as_slice()[1].start, 20);
    }

    #[test]
    fn test_begin_on_continuation_is_ignored() {
        let tokens = vec![begin("##corp", 0, 4), other("rose", 5, 9)];
        assert!(reconstruct_spans(&tokens).unwrap().is_empty());
    }

    #[test]
    fn test_begin_on_continuation_leaves_open_span_alone() {
        let tokens = vec![
            begin("Acme", 0, 4),
            begin("##co", 4, 6),
            inside("##rp", 6, 8),
        ];
        let spans = reconstruct_spans(&tokens).unwrap();

        assert_eq!(texts(&spans), vec!["Acmerp"]);
        assert_eq!(spans.as_slice()[0].end, 8);
    }

    #[test]
    fn test_inside_without_begin() {
        let tokens = vec![inside("Corp", 0, 4)];
        let err = reconstruct_spans(&tokens).unwrap_err();
        assert_eq!(
            err,
            ReconstructError::InsideWithoutBegin {
                index: 0,
                word: "Corp".to_string()
            }
        );
    }

    #[test]
    fn test_inside_after_other_extends_open_span() {
        let tokens = vec![
            begin("Johnson", 0, 7),
            other("&", 8, 9),
            inside("Johnson", 10, 17),
            other("rose", 18, 22),
        ];
        let spans = reconstruct_spans(&tokens).unwrap();

        assert_eq!(texts(&spans), vec!["JohnsonJohnson"]);
        assert_eq!((spans.as_slice()[0].start, spans.as_slice()[0].end), (0, 17));
    }

    #[test]
    fn test_inside_after_other_with_no_begin_is_rejected() {
        let tokens = vec![other("and", 0, 3), inside("Corp", 4, 8)];
        let err = reconstruct_spans(&tokens).unwrap_err();
        assert!(matches!(err, ReconstructError::InsideWithoutBegin { index: 1, .. }));
    }

    #[test]
    fn test_custom_prefix() {
        let reconstructor = SpanReconstructor::new("@@");
        let tokens = vec![
            Token::new("Sie", EntityTag::BeginOrg, false, 0, 3),
            Token::new("@@mens", EntityTag::InsideOrg, true, 3, 7),
        ];
        let spans = reconstructor.reconstruct(&tokens).unwrap();
        assert_eq!(texts(&spans), vec!["Siemens"]);
    }

    #[test]
    fn test_reconstructed_text_never_contains_prefix() {
        let tokens = vec![
            begin("Goo", 0, 3),
            inside("##g", 3, 4),
            inside("##le", 4, 6),
            other("and", 7, 10),
            begin("IB", 11, 13),
            inside("##M", 13, 14),
        ];
        let spans = reconstruct_spans(&tokens).unwrap();

        assert_eq!(texts(&spans), vec!["Google", "IBM"]);
        assert!(spans.iter().all(|s| !s.text.contains("##")));
    }
}
