//! Declarator region recognition.
//!
//! A declarator region is the token span covering optional specifier
//! keywords (`static`, `const`) and the type they qualify, ending where
//! the declared name or the `*`/`&`/`[` suffix chain begins. Recognition
//! is a bounded recursive-descent scan over the token stream — no AST, no
//! symbol resolution. Failure to match is cheap and common; the rewriter
//! then copies the tokens through untouched.

use eastbound_lexer_core::RawTag;

use crate::keywords;
use crate::lex::Token;

/// Upper bound on the number of tokens examined for one region. Anything
/// longer than this is not a declaration worth rewriting.
const MAX_REGION_TOKENS: usize = 256;

/// A recognized declarator region.
///
/// Token indices refer to the slice passed to [`match_region`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Region {
    /// Indices of the specifier tokens (`static`, `const`) in written order.
    pub specs: Vec<usize>,
    /// First token of the type.
    pub type_start: usize,
    /// One past the last token of the type (exclusive).
    pub type_end: usize,
    /// Template argument list inside the type: indices of the opening `<`
    /// and its matching `>`.
    pub template_args: Option<(usize, usize)>,
    /// `true` when a `const` specifier precedes the type (the west form).
    pub has_west_const: bool,
    /// `true` when a comment sits between region tokens. Such regions are
    /// not rewritten; moving tokens across a comment could displace it.
    pub comment_gap: bool,
}

/// Attempt to recognize a declarator region starting at `start`, which
/// must index a `const` or `static` token.
///
/// Returns `None` when no well-formed region begins here — a bare `const`
/// inside a macro argument list, a specifier not followed by a type, an
/// unbalanced template argument list. The caller falls back to verbatim
/// copy, which is always safe.
pub(crate) fn match_region(tokens: &[Token<'_>], start: usize) -> Option<Region> {
    let mut i = start;
    let mut specs = Vec::new();
    let mut comment_gap = false;
    let mut saw_const = false;

    // Specifier run: `static` and at most one `const`, with trivia (and,
    // pathologically, comments) in between.
    loop {
        if i - start > MAX_REGION_TOKENS {
            return None;
        }
        let t = tokens.get(i)?;
        match t.tag {
            RawTag::Whitespace | RawTag::Newline => i += 1,
            RawTag::LineComment | RawTag::BlockComment => {
                comment_gap = true;
                i += 1;
            }
            RawTag::Ident if t.text == "const" => {
                if saw_const {
                    // Duplicate cv-qualifier — not a declaration we touch.
                    return None;
                }
                saw_const = true;
                specs.push(i);
                i += 1;
            }
            RawTag::Ident if t.text == "static" => {
                specs.push(i);
                i += 1;
            }
            _ => break,
        }
    }
    if specs.is_empty() {
        return None;
    }

    let (type_start, type_end, template_args) = match_type(tokens, i)?;

    Some(Region {
        specs,
        type_start,
        type_end,
        template_args,
        has_west_const: saw_const,
        comment_gap,
    })
}

/// Recognize the type of a region: a run of fundamental type keywords, or
/// a possibly `::`-qualified name with optional balanced template
/// arguments.
fn match_type(
    tokens: &[Token<'_>],
    start: usize,
) -> Option<(usize, usize, Option<(usize, usize)>)> {
    let first = tokens.get(start)?;
    match first.tag {
        RawTag::Ident if keywords::is_type_specifier(first.text) => {
            let end = builtin_run(tokens, start);
            Some((start, end, None))
        }
        RawTag::Ident | RawTag::ColonColon => {
            let (end, template_args) = qualified_name(tokens, start)?;
            Some((start, end, template_args))
        }
        _ => None,
    }
}

/// Consume a run of fundamental type keywords (`unsigned long int`).
/// `auto` never extends a run; it only stands alone.
fn builtin_run(tokens: &[Token<'_>], start: usize) -> usize {
    let mut end = start + 1;
    let mut i = start + 1;
    while i - start < MAX_REGION_TOKENS {
        match tokens.get(i) {
            Some(t) if t.tag.is_trivia() => i += 1,
            Some(t)
                if t.tag == RawTag::Ident
                    && t.text != "auto"
                    && keywords::is_type_specifier(t.text) =>
            {
                i += 1;
                end = i;
            }
            _ => break,
        }
    }
    end
}

/// Consume `["::"] ident { "::" ident } [ "<" balanced ">" ]`.
///
/// Returns the exclusive end index and the template argument bracket
/// indices when present. Bails out on reserved non-type words, on
/// template argument lists that fail to balance, on types that continue
/// past their template arguments (`foo<int>::type`), and on a bare
/// macro-like name that is being invoked (`SOME_MACRO(x)`) — all of
/// which yield copy-through rather than a risky rewrite.
fn qualified_name(
    tokens: &[Token<'_>],
    start: usize,
) -> Option<(usize, Option<(usize, usize)>)> {
    let mut i = start;
    let qualified_head = tokens.get(i)?.tag == RawTag::ColonColon;
    if qualified_head {
        i += 1;
    }

    let first_seg = i;
    let mut segments = 0usize;
    let mut end;
    loop {
        if i - start > MAX_REGION_TOKENS {
            return None;
        }
        let seg = tokens.get(i)?;
        if seg.tag != RawTag::Ident
            || seg.text == "const"
            || seg.text == "static"
            || keywords::is_reserved_non_type(seg.text)
        {
            return None;
        }
        i += 1;
        end = i;
        segments += 1;

        match next_nontrivia(tokens, i) {
            Some(next) if tokens[next].tag == RawTag::ColonColon => i = next + 1,
            _ => break,
        }
    }

    // Optional template argument list.
    if let Some(less) = next_nontrivia(tokens, end) {
        if tokens[less].tag == RawTag::Less {
            let greater = balanced_angle(tokens, less)?;
            // A type continuing past its template arguments
            // (`vector<int>::size_type`) is out of scope.
            if let Some(after) = next_nontrivia(tokens, greater + 1) {
                if tokens[after].tag == RawTag::ColonColon {
                    return None;
                }
            }
            return Some((greater + 1, Some((less, greater))));
        }
    }

    // A lone macro-like name with an argument list is a macro call, not a
    // type: anything emitted between the name and its `(` would stop the
    // preprocessor from expanding it. Macro names are single unqualified
    // identifiers, so `NS::MACRO(x)` stays a candidate type.
    if !qualified_head && segments == 1 && keywords::is_macro_like(tokens[first_seg].text) {
        if let Some(next) = next_code_token(tokens, end) {
            if tokens[next].tag == RawTag::LeftParen {
                return None;
            }
        }
    }

    Some((end, None))
}

/// Find the `>` matching the `<` at `less`, tracking nesting depth.
///
/// Tokens that cannot occur inside a template argument list of a type we
/// are willing to rewrite (`;`, braces, parentheses) abort the match.
fn balanced_angle(tokens: &[Token<'_>], less: usize) -> Option<usize> {
    let mut depth = 1u32;
    let mut i = less + 1;
    while i - less < MAX_REGION_TOKENS {
        let t = tokens.get(i)?;
        match t.tag {
            RawTag::Less => depth += 1,
            RawTag::Greater => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            RawTag::Semicolon
            | RawTag::LeftBrace
            | RawTag::RightBrace
            | RawTag::LeftParen
            | RawTag::RightParen => return None,
            _ => {}
        }
        i += 1;
    }
    None
}

/// Index of the next token that is not whitespace, a newline, or a
/// comment. Comments are skipped because a macro still expands with a
/// comment between its name and `(`.
fn next_code_token(tokens: &[Token<'_>], from: usize) -> Option<usize> {
    let mut i = from;
    while i < tokens.len() {
        match tokens[i].tag {
            RawTag::Whitespace | RawTag::Newline | RawTag::LineComment | RawTag::BlockComment => {
                i += 1;
            }
            _ => return Some(i),
        }
    }
    None
}

/// Index of the next token that is not whitespace or a newline.
fn next_nontrivia(tokens: &[Token<'_>], from: usize) -> Option<usize> {
    let mut i = from;
    while i < tokens.len() {
        if tokens[i].tag.is_trivia() {
            i += 1;
        } else {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests;
