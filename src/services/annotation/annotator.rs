//! Marker insertion into the original text.

use crate::models::{EntitySpan, SpanCollection};
use crate::utils::{byte_offset, char_len};

use super::markers::MarkerPair;
use super::types::AnnotationError;

/// Inserts a marker pair around every span.
///
/// Spans must be sorted by `start` and must not overlap. This is not checked;
/// violating it garbles the output or fails with `OffsetOutOfBounds`.
#[derive(Debug, Clone, Default)]
pub struct TextAnnotator {
    markers: MarkerPair,
}

impl TextAnnotator {
    pub fn new(markers: MarkerPair) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &MarkerPair {
        &self.markers
    }

    /// Return a copy of `text` with every span wrapped in markers.
    ///
    /// Offsets are shifted rather than recomputed: the `i`-th span moves right
    /// by `i` full marker pairs, and its closing marker moves by one more
    /// opening marker.
    pub fn annotate(&self, text: &str, spans: &SpanCollection) -> Result<String, AnnotationError> {
        let marker_bytes = self.markers.open().len() + self.markers.close().len();
        let mut out =
            String::with_capacity(text.len().saturating_add(spans.len().saturating_mul(marker_bytes)));
        out.push_str(text);

        let shift = self.markers.pair_len();
        for (i, span) in spans.iter().enumerate() {
            let offset = i.checked_mul(shift);
            let adjusted_start = offset.and_then(|d| span.start.checked_add(d));
            let adjusted_end = offset
                .and_then(|d| span.end.checked_add(d))
                .and_then(|p| p.checked_add(self.markers.open_len()));

            insert_at(&mut out, adjusted_start, self.markers.open(), span)?;
            insert_at(&mut out, adjusted_end, self.markers.close(), span)?;
        }

        Ok(out)
    }
}

/// Insert `marker` at char `position`. `None` means the shifted position
/// overflowed `usize` and is reported as out of bounds at `usize::MAX`.
fn insert_at(
    out: &mut String,
    position: Option<usize>,
    marker: &str,
    span: &EntitySpan,
) -> Result<(), AnnotationError> {
    let byte = position
        .and_then(|p| byte_offset(out, p))
        .ok_or_else(|| AnnotationError::OffsetOutOfBounds {
            span: span.id,
            position: position.unwrap_or(usize::MAX),
            len: char_len(out),
        })?;
    out.insert_str(byte, marker);
    Ok(())
}
