//! Identifier classification for declarator recognition.
//!
//! Two keyword lookups, both length-bucketed for fast rejection:
//! identifiers whose length falls outside the keyword range are dismissed
//! without a single string comparison.
//!
//! - [`is_type_specifier`]: fundamental type keywords that can form a type
//!   by themselves or in runs (`unsigned long int`, `auto`).
//! - [`is_reserved_non_type`]: reserved words that can never serve as the
//!   type name of a declarator region. Used to reject bogus parses such as
//!   `const return` so the rewriter falls back to copy-through. The set is
//!   deliberately broad — elaborated forms like `const struct S*` are left
//!   unrewritten rather than risked.
//!
//! Plus [`is_macro_like`], the spelling heuristic behind macro-call
//! opacity, shared by the region recognizer and the emission pass.

/// Returns `true` for fundamental type specifier keywords.
///
/// These may appear in runs (`unsigned long`), except `auto`, which only
/// stands alone — the caller enforces that.
pub(crate) fn is_type_specifier(text: &str) -> bool {
    let len = text.len();
    // Guard: all fundamental type keywords are 3-8 chars.
    if !(3..=8).contains(&len) {
        return false;
    }
    match len {
        3 => matches!(text, "int"),
        4 => matches!(text, "auto" | "bool" | "char" | "long" | "void"),
        5 => matches!(text, "float" | "short"),
        6 => matches!(text, "double" | "signed"),
        7 => matches!(text, "wchar_t" | "char8_t"),
        8 => matches!(text, "unsigned" | "char16_t" | "char32_t"),
        _ => false,
    }
}

/// Returns `true` for reserved words that cannot begin the type of a
/// declarator region.
///
/// `const` and `static` are not listed — the region recognizer consumes
/// them as specifiers before the type is parsed. Fundamental type keywords
/// are not listed either; they are valid type starts.
pub(crate) fn is_reserved_non_type(text: &str) -> bool {
    let len = text.len();
    // Guard: the reserved words below are 2-16 chars.
    if !(2..=16).contains(&len) {
        return false;
    }
    match len {
        2 => matches!(text, "do" | "if"),
        3 => matches!(text, "asm" | "for" | "new" | "try"),
        4 => matches!(text, "case" | "else" | "enum" | "goto" | "this" | "true"),
        5 => matches!(
            text,
            "break" | "catch" | "class" | "false" | "throw" | "union" | "using" | "while"
        ),
        6 => matches!(
            text,
            "delete" | "export" | "extern" | "friend" | "inline" | "public" | "return"
                | "sizeof" | "struct" | "switch" | "typeid"
        ),
        7 => matches!(
            text,
            "alignas" | "alignof" | "concept" | "default" | "mutable" | "nullptr" | "private"
                | "typedef" | "virtual"
        ),
        8 => matches!(
            text,
            "co_await" | "co_yield" | "continue" | "decltype" | "explicit" | "noexcept"
                | "operator" | "register" | "requires" | "template" | "typename" | "volatile"
        ),
        9 => matches!(
            text,
            "co_return" | "constexpr" | "consteval" | "constinit" | "namespace" | "protected"
        ),
        10 => matches!(text, "const_cast"),
        11 => matches!(text, "static_cast"),
        12 => matches!(text, "dynamic_cast" | "thread_local"),
        13 => matches!(text, "static_assert"),
        16 => matches!(text, "reinterpret_cast"),
        _ => false,
    }
}

/// Returns `true` for identifiers spelled like object-like macros: at
/// least two characters, only uppercase letters, digits and underscores,
/// with at least one letter. `DWORD` qualifies; `main` and `F` do not.
pub(crate) fn is_macro_like(text: &str) -> bool {
    text.len() >= 2
        && text
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
        && text.bytes().any(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests;
