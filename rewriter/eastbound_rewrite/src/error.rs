//! Error type for the rewrite transform.
//!
//! All errors are fatal for the whole file: the rewriter never emits a
//! partially transformed result. Expected failure conditions are values,
//! never panics, and the byte offset of the offending construct is
//! carried for diagnostics.

use eastbound_lexer_core::RawTag;
use thiserror::Error;

/// A fatal lexical error; the source file is left unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// String literal with no closing quote before end of line or input.
    #[error("unterminated string literal starting at byte {at}")]
    UnterminatedString {
        /// Byte offset of the opening quote (or encoding prefix).
        at: u32,
    },
    /// Character literal with no closing quote before end of line or input.
    #[error("unterminated character literal starting at byte {at}")]
    UnterminatedChar {
        /// Byte offset of the opening quote.
        at: u32,
    },
    /// Block comment with no closing `*/` before end of input.
    #[error("unterminated block comment starting at byte {at}")]
    UnterminatedBlockComment {
        /// Byte offset of the opening `/*`.
        at: u32,
    },
    /// Raw string literal whose `)tag"` terminator never appears.
    #[error("unterminated raw string literal starting at byte {at}")]
    UnterminatedRawString {
        /// Byte offset of the literal's prefix.
        at: u32,
    },
    /// Raw string with a malformed delimiter (too long, or missing `(`).
    #[error("malformed raw string delimiter at byte {at}")]
    InvalidRawDelimiter {
        /// Byte offset of the literal's prefix.
        at: u32,
    },
}

impl RewriteError {
    /// Map an error tag from the scanner to a `RewriteError` at `at`.
    ///
    /// The caller must have checked [`RawTag::is_error`].
    pub(crate) fn from_error_tag(tag: RawTag, at: u32) -> Self {
        match tag {
            RawTag::UnterminatedString => Self::UnterminatedString { at },
            RawTag::UnterminatedChar => Self::UnterminatedChar { at },
            RawTag::UnterminatedBlockComment => Self::UnterminatedBlockComment { at },
            RawTag::UnterminatedRawString => Self::UnterminatedRawString { at },
            RawTag::InvalidRawDelimiter => Self::InvalidRawDelimiter { at },
            _ => unreachable!("not an error tag: {tag:?}"),
        }
    }

    /// Byte offset of the offending construct.
    pub fn offset(&self) -> u32 {
        match self {
            Self::UnterminatedString { at }
            | Self::UnterminatedChar { at }
            | Self::UnterminatedBlockComment { at }
            | Self::UnterminatedRawString { at }
            | Self::InvalidRawDelimiter { at } => *at,
        }
    }
}
