//! Integration layer over `eastbound_lexer_core`.
//!
//! Drives the raw scanner, attaches source text slices to the `(tag, len)`
//! pairs, and upgrades error tags to fatal [`RewriteError`]s. A lex error
//! aborts the whole rewrite; the caller keeps the original text.

use eastbound_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::error::RewriteError;

/// A classified lexical span with its exact source text.
///
/// Tokens are immutable; the rewriter re-emits their text, it never edits
/// it. Concatenating `text` over a full token sequence reproduces the
/// source byte for byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    /// What kind of span this is.
    pub tag: RawTag,
    /// Exact source text of the span.
    pub text: &'a str,
}

/// Tokenize `source`, resolving raw tokens to text slices.
///
/// The first error tag encountered is fatal and carries the byte offset
/// where the offending construct began.
pub(crate) fn lex(source: &str) -> Result<Vec<Token<'_>>, RewriteError> {
    let buffer = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buffer.cursor());
    let mut tokens = Vec::new();
    let mut offset: u32 = 0;

    loop {
        let raw = scanner.next_token();
        if raw.tag == RawTag::Eof {
            break;
        }
        if raw.tag.is_error() {
            return Err(RewriteError::from_error_tag(raw.tag, offset));
        }
        let end = offset + raw.len;
        tokens.push(Token {
            tag: raw.tag,
            text: &source[offset as usize..end as usize],
        });
        offset = end;
    }

    Ok(tokens)
}
