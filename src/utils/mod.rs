//! Small shared helpers.

pub mod offsets;

pub use offsets::{byte_offset, char_len, slice_chars};
