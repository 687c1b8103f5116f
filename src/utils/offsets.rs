//! Character-offset helpers.
//!
//! Model offsets count Unicode scalar values, while Rust strings are indexed by
//! byte. Everything that touches text positions goes through these helpers so a
//! multi-byte character is never split.

/// Number of characters in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the character at `char_idx`.
///
/// `char_idx == char_len(s)` maps to `s.len()` (the insertion point at the end).
/// Returns `None` past that.
pub fn byte_offset(s: &str, char_idx: usize) -> Option<usize> {
    s.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(s.len()))
        .nth(char_idx)
}

/// Slice `s` by the half-open character range `[start, end)`.
pub fn slice_chars(s: &str, start: usize, end: usize) -> Option<&str> {
    if start > end {
        return None;
    }
    let from = byte_offset(s, start)?;
    let to = byte_offset(s, end)?;
    s.get(from..to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset_ascii() {
        assert_eq!(byte_offset("abc", 0), Some(0));
        assert_eq!(byte_offset("abc", 2), Some(2));
        assert_eq!(byte_offset("abc", 3), Some(3));
        assert_eq!(byte_offset("abc", 4), None);
    }

    #[test]
    fn test_byte_offset_multibyte() {
        let s = "Müller";
        assert_eq!(byte_offset(s, 1), Some(1));
        assert_eq!(byte_offset(s, 2), Some(3));
        assert_eq!(byte_offset(s, char_len(s)), Some(s.len()));
    }

    #[test]
    fn test_byte_offset_empty() {
        assert_eq!(byte_offset("", 0), Some(0));
        assert_eq!(byte_offset("", 1), None);
    }

    #[test]
    fn test_slice_chars() {
        assert_eq!(slice_chars("Grüße an Nestlé", 9, 15), Some("Nestlé"));
        assert_eq!(slice_chars("abc", 2, 1), None);
        assert_eq!(slice_chars("abc", 1, 9), None);
    }
}
