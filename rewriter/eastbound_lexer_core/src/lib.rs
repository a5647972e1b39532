//! Low-level lexical scanner for C and C++ source text.
//!
//! This crate knows just enough C++ lexical structure to carve a file into
//! classified spans: identifiers, punctuation, string and character
//! literals (including raw strings with arbitrary delimiters), comments,
//! and preprocessor lines. It does not resolve keywords or build any
//! syntax tree — that is left to the consuming layer.
//!
//! # Lossless tokenization
//!
//! The scanner produces [`RawToken`] values as `(tag, length)` pairs.
//! Every byte of the source belongs to exactly one token, so the token
//! lengths always sum to the source length. Consumers that re-emit token
//! text reproduce the input byte for byte.
//!
//! # Error handling
//!
//! Malformed input (an unterminated string, comment, or raw string) is
//! encoded as an error [`RawTag`] variant covering the consumed bytes.
//! The scanner never panics and never truncates silently.

pub mod cursor;
pub mod raw_scanner;
pub mod source_buffer;
pub mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
