//! Tagged tokens as emitted by an external token-classification model.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::char_len;

/// Labels any BIO scheme may emit: `O`, `B-XXX` or `I-XXX`.
static BIO_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:O|[BI]-[A-Z][A-Z0-9_]*)$").expect("BIO label pattern should compile")
});

/// A token record exactly as the model produced it.
///
/// Field aliases accept the common shapes of token-classification output
/// (`word`/`text`, `entity`/`entity_group`/`tag`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawToken {
    /// Surface text, possibly carrying a continuation prefix.
    #[serde(alias = "text")]
    pub word: String,
    /// BIO label, e.g. `B-ORG`.
    #[serde(alias = "entity_group", alias = "tag")]
    pub entity: String,
    /// Start offset in characters into the original text.
    pub start: usize,
    /// End offset (exclusive) in characters into the original text.
    pub end: usize,
    /// Model confidence. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    /// Token index reported by the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl RawToken {
    pub fn new(word: impl Into<String>, entity: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            word: word.into(),
            entity: entity.into(),
            start,
            end,
            score: None,
            index: None,
        }
    }
}

/// Organization-relevant classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityTag {
    BeginOrg,
    InsideOrg,
    Other,
}

/// How model labels and surface text are interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelScheme {
    /// Label that opens an organization.
    #[serde(default = "default_begin_label")]
    pub begin_label: String,
    /// Label that continues an organization.
    #[serde(default = "default_inside_label")]
    pub inside_label: String,
    /// Prefix marking a sub-word continuation piece. Empty disables detection.
    #[serde(default = "default_continuation_prefix")]
    pub continuation_prefix: String,
}

fn default_begin_label() -> String {
    "B-ORG".to_string()
}

fn default_inside_label() -> String {
    "I-ORG".to_string()
}

fn default_continuation_prefix() -> String {
    "##".to_string()
}

impl Default for LabelScheme {
    fn default() -> Self {
        Self {
            begin_label: default_begin_label(),
            inside_label: default_inside_label(),
            continuation_prefix: default_continuation_prefix(),
        }
    }
}

impl LabelScheme {
    /// Map a model label onto an [`EntityTag`].
    ///
    /// The configured organization labels always win. Anything else must still
    /// look like a BIO label, otherwise it is rejected rather than ignored.
    pub fn parse_tag(&self, label: &str) -> Option<EntityTag> {
        if label == self.begin_label {
            Some(EntityTag::BeginOrg)
        } else if label == self.inside_label {
            Some(EntityTag::InsideOrg)
        } else if BIO_LABEL.is_match(label) {
            Some(EntityTag::Other)
        } else {
            None
        }
    }

    pub fn is_continuation(&self, word: &str) -> bool {
        !self.continuation_prefix.is_empty() && word.starts_with(&self.continuation_prefix)
    }
}

/// A decoded, validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub tag: EntityTag,
    pub is_continuation: bool,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        tag: EntityTag,
        is_continuation: bool,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            text: text.into(),
            tag,
            is_continuation,
            start,
            end,
        }
    }
}

/// Token data that breaks the model contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token {index} ({word:?}) has unknown tag {tag:?}")]
    UnknownTag {
        index: usize,
        word: String,
        tag: String,
    },

    #[error("token {index} ({word:?}) has inverted offsets {start}..{end}")]
    InvertedOffsets {
        index: usize,
        word: String,
        start: usize,
        end: usize,
    },

    #[error("token {index} ({word:?}) ends at {end}, past the end of the text ({len} chars)")]
    OffsetOutOfBounds {
        index: usize,
        word: String,
        end: usize,
        len: usize,
    },
}

/// Decode raw model output for `text` into validated tokens.
///
/// Fails on the first token whose tag or offsets violate the contract. Nothing
/// is clamped or skipped.
pub fn decode_tokens(
    raw: &[RawToken],
    scheme: &LabelScheme,
    text: &str,
) -> Result<Vec<Token>, TokenError> {
    let len = char_len(text);

    raw.iter()
        .enumerate()
        .map(|(index, token)| {
            let tag = scheme
                .parse_tag(&token.entity)
                .ok_or_else(|| TokenError::UnknownTag {
                    index,
                    word: token.word.clone(),
                    tag: token.entity.clone(),
                })?;

            if token.start > token.end {
                return Err(TokenError::InvertedOffsets {
                    index,
                    word: token.word.clone(),
                    start: token.start,
                    end: token.end,
                });
            }
            if token.end > len {
                return Err(TokenError::OffsetOutOfBounds {
                    index,
                    word: token.word.clone(),
                    end: token.end,
                    len,
                });
            }

            Ok(Token::new(
                token.word.clone(),
                tag,
                scheme.is_continuation(&token.word),
                token.start,
                token.end,
            ))
        })
        .collect()
}
