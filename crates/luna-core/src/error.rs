//! Error types for tokenizing and building markup trees.

use crate::types::TagName;
use thiserror::Error;

/// Errors that can occur while parsing markup into a [`Forest`](crate::Forest).
///
/// Offsets are byte offsets into the original input, pointing at the `<` of the
/// offending tag (or at the first unconsumed byte for tokenizer failures).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input could not be split into tags: a truncated tag with no closing
    /// `>`, stray text between tags, or an unknown tag name.
    #[error("tokenize error at offset {offset}: {message}")]
    Tokenize { offset: usize, message: String },

    /// A closing tag did not match the innermost open container, or a tag
    /// appeared that the grammar does not allow in this position.
    #[error("malformed markup at offset {offset}: expected {expected}, found {found}")]
    Malformed {
        offset: usize,
        expected: String,
        found: String,
    },

    /// The input ended while a container was still open.
    #[error("unterminated tag: <{tag}> opened at offset {offset} is never closed")]
    Unterminated { tag: TagName, offset: usize },

    /// The input is longer than the configured `max_input_len`.
    #[error("input too large: {len} bytes exceeds the limit of {limit}")]
    InputTooLarge { len: usize, limit: usize },

    /// Opening a container at `offset` would exceed the configured `max_depth`.
    #[error("nesting too deep at offset {offset}: limit is {limit}")]
    TooDeep { limit: usize, offset: usize },
}

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Tokenize,
    Malformed,
    Unterminated,
    Limit,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Tokenize { .. } => ErrorKind::Tokenize,
            ParseError::Malformed { .. } => ErrorKind::Malformed,
            ParseError::Unterminated { .. } => ErrorKind::Unterminated,
            ParseError::InputTooLarge { .. } | ParseError::TooDeep { .. } => ErrorKind::Limit,
        }
    }

    /// Byte offset the error points at, when there is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Tokenize { offset, .. }
            | ParseError::Malformed { offset, .. }
            | ParseError::Unterminated { offset, .. }
            | ParseError::TooDeep { offset, .. } => Some(*offset),
            ParseError::InputTooLarge { .. } => None,
        }
    }
}

/// Convenience alias used throughout luna-core.
pub type Result<T> = std::result::Result<T, ParseError>;
