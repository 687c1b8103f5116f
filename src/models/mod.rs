//! Data models for tokens and reconstructed entity spans.

mod span;
mod token;

pub use span::{EntitySpan, SpanCollection};
pub use token::{decode_tokens, EntityTag, LabelScheme, RawToken, Token, TokenError};
