//! Raw token tags and the `(tag, len)` token pair.
//!
//! Tags are a single byte with semantic ranges: identifiers and literals
//! first, then punctuation, then trivia, then error conditions, with
//! `Eof` pinned at 255. Error conditions are tags, not `Result::Err` —
//! the integration layer decides whether they are fatal.

/// Classification of a raw lexical span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals: 0-15 ===
    /// Identifier or keyword (`[A-Za-z_][A-Za-z0-9_]*`).
    Ident = 0,
    /// Numeric literal (pp-number: digits, `.`, exponents, digit separators).
    Number = 1,
    /// String literal, including any encoding prefix (`"x"`, `u8"x"`, `L"x"`).
    String = 2,
    /// Character literal (`'c'`, `'\n'`, multi-char forms included).
    Char = 3,
    /// Raw string literal (`R"tag(...)tag"`, prefixes allowed). Fully opaque.
    RawString = 4,

    // === Punctuation: 32-47 ===
    /// `::` scope resolution (always one token).
    ColonColon = 32,
    /// `*`
    Star = 33,
    /// `&`
    Ampersand = 34,
    /// `<` (always a single token; `>>` never fuses either).
    Less = 35,
    /// `>`
    Greater = 36,
    /// `(`
    LeftParen = 37,
    /// `)`
    RightParen = 38,
    /// `[`
    LeftBracket = 39,
    /// `]`
    RightBracket = 40,
    /// `{`
    LeftBrace = 41,
    /// `}`
    RightBrace = 42,
    /// `,`
    Comma = 43,
    /// `;`
    Semicolon = 44,
    /// `=`
    Equal = 45,
    /// Any other punctuation byte or non-ASCII character outside literals.
    Other = 46,

    // === Trivia: 112-116 ===
    /// Horizontal whitespace run (spaces, tabs, stray `\r`).
    Whitespace = 112,
    /// Line terminator (`\n`, `\r\n`, or a lone `\r`).
    Newline = 113,
    /// `//` comment through end of line (newline not included).
    LineComment = 114,
    /// `/* ... */` comment (non-nesting).
    BlockComment = 115,
    /// Preprocessor line: `#` first on its line, through the first line end
    /// not escaped by a trailing backslash. Continuation lines are folded
    /// into the token.
    Preprocessor = 116,

    // === Errors: 240-244 ===
    /// String literal with no closing `"` before end of line or input.
    UnterminatedString = 240,
    /// Char literal with no closing `'` before end of line or input.
    UnterminatedChar = 241,
    /// Block comment with no closing `*/` before end of input.
    UnterminatedBlockComment = 242,
    /// Raw string literal whose `)tag"` terminator never appears.
    UnterminatedRawString = 243,
    /// Raw string whose delimiter is malformed (too long, or no `(`).
    InvalidRawDelimiter = 244,

    // === Control: 255 ===
    /// End of input. Always `len == 0`.
    Eof = 255,
}

impl RawTag {
    /// Returns `true` for error tags (the 240+ range).
    pub fn is_error(self) -> bool {
        (self as u8) >= 240 && self != RawTag::Eof
    }

    /// Returns `true` for whitespace and newline tokens.
    pub fn is_trivia(self) -> bool {
        matches!(self, RawTag::Whitespace | RawTag::Newline)
    }
}

/// One raw token: a tag plus the byte length of the span it covers.
///
/// Positions are not stored; consumers accumulate lengths, which is exact
/// because tokenization is lossless.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    /// What kind of span this is.
    pub tag: RawTag,
    /// Byte length of the span. Zero only for `Eof`.
    pub len: u32,
}
