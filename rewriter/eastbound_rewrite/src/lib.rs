//! West-const to east-const rewriting for C and C++ source text.
//!
//! The crate exposes a single pure transform: [`rewrite`] takes complete
//! source text and returns the same text with type-qualifying `const`
//! keywords moved to the east side of the type they qualify
//! (`const int x` becomes `int const x`). Every other byte — formatting,
//! comments, string contents, macro invocations — is preserved exactly.
//!
//! # Pipeline
//!
//! ```text
//! text ──lex──▶ tokens ──rewrite pass──▶ text
//! ```
//!
//! Lexing is delegated to `eastbound_lexer_core`; this crate attaches
//! source slices to the raw tokens, recognizes declarator regions with a
//! bounded recursive-descent pass, and re-emits the file with only the
//! qualifier tokens moved. Anything it cannot prove to be a declaration
//! is copied through untouched — a missed rewrite is always preferable to
//! changing what a macro call means.
//!
//! # Guarantees
//!
//! - Idempotent: `rewrite(rewrite(s)) == rewrite(s)`.
//! - Lossless outside declarator regions: bytes not part of a rewritten
//!   region are copied verbatim.
//! - Total: malformed lexical input yields a [`RewriteError`] and the
//!   caller keeps the original text; nothing is ever half-written.

mod declarator;
mod error;
mod keywords;
mod lex;
mod rewriter;

pub use error::RewriteError;

/// Rewrite west-const source text into canonical east-const form.
///
/// Returns the complete rewritten text, or a [`RewriteError`] if the
/// input cannot be tokenized (unterminated string, comment, or raw
/// string). On error the input is considered untouchable and the caller
/// should keep the original text.
pub fn rewrite(source: &str) -> Result<String, RewriteError> {
    let tokens = lex::lex(source)?;
    Ok(rewriter::rewrite_tokens(&tokens, source.len()))
}
