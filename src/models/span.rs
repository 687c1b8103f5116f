//! Reconstructed organization spans.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::utils::slice_chars;

/// One organization occurrence in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Discovery index within its collection.
    pub id: usize,
    /// Token pieces joined without separators, continuation markers removed.
    pub text: String,
    /// Start offset in characters.
    pub start: usize,
    /// End offset (exclusive) in characters.
    pub end: usize,
}

impl EntitySpan {
    /// The span as it appears in `original`, separators included.
    pub fn source_text<'a>(&self, original: &'a str) -> Option<&'a str> {
        slice_chars(original, self.start, self.end)
    }
}

/// Spans in the order they were discovered.
///
/// Repeated names are separate entries. Use [`SpanCollection::distinct_names`]
/// when a deduplicated view is wanted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpanCollection {
    spans: Vec<EntitySpan>,
}

impl SpanCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a span and return its id.
    pub fn push(&mut self, text: impl Into<String>, start: usize, end: usize) -> usize {
        let id = self.spans.len();
        self.spans.push(EntitySpan {
            id,
            text: text.into(),
            start,
            end,
        });
        id
    }

    pub fn get(&self, id: usize) -> Option<&EntitySpan> {
        self.spans.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: usize) -> Option<&mut EntitySpan> {
        self.spans.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntitySpan> {
        self.spans.iter()
    }

    pub fn as_slice(&self) -> &[EntitySpan] {
        &self.spans
    }

    /// Unique span texts in first-seen order.
    pub fn distinct_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.spans
            .iter()
            .map(|span| span.text.as_str())
            .filter(|text| seen.insert(*text))
            .collect()
    }

    pub fn into_vec(self) -> Vec<EntitySpan> {
        self.spans
    }
}

impl<'a> IntoIterator for &'a SpanCollection {
    type Item = &'a EntitySpan;
    type IntoIter = std::slice::Iter<'a, EntitySpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

impl FromIterator<(String, usize, usize)> for SpanCollection {
    fn from_iter<I: IntoIterator<Item = (String, usize, usize)>>(iter: I) -> Self {
        let mut spans = SpanCollection::new();
        for (text, start, end) in iter {
            spans.push(text, start, end);
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_sequential_ids() {
        let mut spans = SpanCollection::new();
        assert_eq!(spans.push("Google", 0, 6), 0);
        assert_eq!(spans.push("Myntra", 11, 17), 1);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans.get(1).map(|s| s.text.as_str()), Some("Myntra"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut spans = SpanCollection::new();
        spans.push("Apple", 10, 15);
        spans.push("Apple", 27, 32);

        assert_eq!(spans.len(), 2);
        assert_eq!(spans.distinct_names(), vec!["Apple"]);
    }

    #[test]
    fn test_distinct_names_keeps_first_seen_order() {
        let spans: SpanCollection = [
            ("Google".to_string(), 0, 6),
            ("Apple".to_string(), 8, 13),
            ("Google".to_string(), 20, 26),
        ]
        .into_iter()
        .collect();

        assert_eq!(spans.distinct_names(), vec!["Google", "Apple"]);
    }

    #[test]
    fn test_source_text() {
        let original = "stockholder of Novo Nordisk A/S.";
        let mut spans = SpanCollection::new();
        let id = spans.push("NovoNordiskA/S", 15, 31);

        let span = spans.get(id).unwrap();
        assert_eq!(span.source_text(original), Some("Novo Nordisk A/S"));
    }

    #[test]
    fn test_serializes_as_array() {
        let mut spans = SpanCollection::new();
        spans.push("SAIL", 16, 20);
        let json = serde_json::to_value(&spans).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"id": 0, "text": "SAIL", "start": 16, "end": 20}])
        );
    }
}
