//! The single left-to-right rewrite pass.
//!
//! Walks the token stream once, copying bytes through verbatim except
//! inside recognized declarator regions, which are re-emitted in
//! canonical east-const order. Comments, literals, preprocessor lines,
//! and macro-call argument lists are opaque. Template argument interiors
//! are rewritten recursively, so `std::vector<const char*>` is handled
//! by the same pass that handles the outer declaration.

use eastbound_lexer_core::RawTag;

use crate::declarator::{self, Region};
use crate::keywords;
use crate::lex::Token;

/// Re-emit the token stream with qualifiers in east position.
pub(crate) fn rewrite_tokens(tokens: &[Token<'_>], source_len: usize) -> String {
    // Moved qualifiers can add at most a few separator spaces.
    let mut out = String::with_capacity(source_len + 16);
    emit_range(tokens, 0, tokens.len(), &mut out);
    out
}

/// Emit `tokens[lo..hi]` into `out`, rewriting declarator regions.
///
/// The range entry point is always a declaration-capable boundary: the
/// start of the file for the top-level call, or the interior of a `<...>`
/// template argument list for recursive calls.
fn emit_range(tokens: &[Token<'_>], lo: usize, hi: usize, out: &mut String) {
    let mut at_boundary = true;
    let mut i = lo;

    while i < hi {
        let t = &tokens[i];
        match t.tag {
            // Trivia and comments: copied, boundary state unaffected.
            RawTag::Whitespace | RawTag::Newline | RawTag::LineComment | RawTag::BlockComment => {
                out.push_str(t.text);
                i += 1;
            }
            // A preprocessor line ends whatever came before it; the next
            // code token sits at a fresh declaration boundary.
            RawTag::Preprocessor => {
                out.push_str(t.text);
                at_boundary = true;
                i += 1;
            }
            RawTag::Ident if at_boundary && (t.text == "const" || t.text == "static") => {
                match declarator::match_region(tokens, i) {
                    Some(region)
                        if region.has_west_const
                            && !region.comment_gap
                            && region.type_end <= hi =>
                    {
                        emit_region(tokens, &region, out);
                        // Keep the moved qualifier separated from a
                        // directly adjacent declarator suffix.
                        if let Some(next) = tokens.get(region.type_end) {
                            if matches!(next.text.as_bytes().first(), Some(b'*' | b'&' | b'[')) {
                                out.push(' ');
                            }
                        }
                        i = region.type_end;
                        at_boundary = false;
                    }
                    // Already east, comment in the way, or no declarator
                    // here at all: plain copy.
                    _ => {
                        out.push_str(t.text);
                        at_boundary = false;
                        i += 1;
                    }
                }
            }
            RawTag::Ident => {
                // A macro-like callee opens an opaque argument list: the
                // span through the matching ')' is copied verbatim, even
                // if it literally contains `const`.
                if keywords::is_macro_like(t.text) {
                    if let Some(open) = next_significant(tokens, i + 1, hi) {
                        if tokens[open].tag == RawTag::LeftParen {
                            i = copy_balanced(tokens, i, open, hi, out);
                            at_boundary = false;
                            continue;
                        }
                    }
                }
                out.push_str(t.text);
                at_boundary = false;
                i += 1;
            }
            // Tokens after which a declaration can begin.
            RawTag::Semicolon
            | RawTag::LeftBrace
            | RawTag::RightBrace
            | RawTag::LeftParen
            | RawTag::Comma
            | RawTag::Less
            | RawTag::Equal => {
                out.push_str(t.text);
                at_boundary = true;
                i += 1;
            }
            _ => {
                out.push_str(t.text);
                at_boundary = false;
                i += 1;
            }
        }
    }
}

/// Emit one declarator region in canonical east-const order.
///
/// Storage-class keywords keep their leftmost position; the type text is
/// emitted verbatim (template argument interiors recursively rewritten);
/// `const` lands immediately after the type. Whitespace between moved
/// tokens is normalized to a single space.
fn emit_region(tokens: &[Token<'_>], region: &Region, out: &mut String) {
    for &s in &region.specs {
        if tokens[s].text == "static" {
            out.push_str(tokens[s].text);
            out.push(' ');
        }
    }

    match region.template_args {
        Some((less, greater)) => {
            for t in &tokens[region.type_start..less] {
                out.push_str(t.text);
            }
            out.push('<');
            emit_range(tokens, less + 1, greater, out);
            out.push('>');
        }
        None => {
            for t in &tokens[region.type_start..region.type_end] {
                out.push_str(t.text);
            }
        }
    }

    out.push_str(" const");
}

/// Index of the next token in `from..hi` that is not trivia or a comment.
fn next_significant(tokens: &[Token<'_>], from: usize, hi: usize) -> Option<usize> {
    let mut i = from;
    while i < hi {
        let t = &tokens[i];
        if t.tag.is_trivia() || matches!(t.tag, RawTag::LineComment | RawTag::BlockComment) {
            i += 1;
        } else {
            return Some(i);
        }
    }
    None
}

/// Copy `tokens[from..]` verbatim from the callee through the `)` that
/// matches the `(` at `open`. Returns the index after the copied span.
/// An unbalanced list copies through to `hi`.
fn copy_balanced(tokens: &[Token<'_>], from: usize, open: usize, hi: usize, out: &mut String) -> usize {
    for t in &tokens[from..=open] {
        out.push_str(t.text);
    }
    let mut depth = 1u32;
    let mut i = open + 1;
    while i < hi {
        let t = &tokens[i];
        out.push_str(t.text);
        match t.tag {
            RawTag::LeftParen => depth += 1,
            RawTag::RightParen => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    i
}
