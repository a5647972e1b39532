//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords or interpret literal contents — those are deferred to the
//! consuming layer.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused
//! method that advances the cursor and returns `RawToken { tag, len }`.
//! The sentinel byte (`0x00`) naturally dispatches to `eof()`.
//!
//! Two constructs need scanner state beyond the cursor position:
//!
//! - **Raw strings**: the terminator `)tag"` depends on the delimiter tag
//!   read earlier in the same token, so the scanner captures the delimiter
//!   bytes first and then searches for that exact terminator. A regular
//!   expression cannot express this; an explicit scan can.
//! - **Preprocessor lines**: `#` only opens a preprocessor line when
//!   nothing but horizontal whitespace precedes it on its line, tracked
//!   with a line-start flag updated per token.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Maximum length of a raw string delimiter tag, per the C++ grammar.
const MAX_RAW_DELIMITER_LEN: u32 = 16;

/// Returns `true` for bytes that may continue an identifier.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Returns `true` for bytes allowed in a raw string delimiter tag.
///
/// The grammar excludes parentheses, backslash, and whitespace; everything
/// else in the basic source character set is allowed. The sentinel (`0x00`)
/// is excluded so scanning terminates at EOF.
#[inline]
fn is_raw_delimiter_byte(b: u8) -> bool {
    !matches!(b, 0 | b'(' | b')' | b'\\' | b' ' | b'\t' | b'\n' | b'\r')
}

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    /// `true` when only horizontal whitespace has been seen since the last
    /// line end. Controls whether `#` opens a preprocessor line.
    line_start: bool,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            line_start: true,
        }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let tok = self.dispatch();
        match tok.tag {
            RawTag::Newline => self.line_start = true,
            RawTag::Whitespace | RawTag::Eof => {}
            _ => self.line_start = false,
        }
        tok
    }

    fn dispatch(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(),
            b' ' | b'\t' => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'\'' => self.char_literal(start),
            b'/' => self.slash_or_comment(start),
            b'#' => self.hash(start),
            b':' => self.colon(start),
            b'*' => self.single(start, RawTag::Star),
            b'&' => self.single(start, RawTag::Ampersand),
            b'<' => self.single(start, RawTag::Less),
            b'>' => self.single(start, RawTag::Greater),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b'=' => self.single(start, RawTag::Equal),
            // Remaining punctuation, control bytes, and non-ASCII leaders
            _ => self.other_byte(start),
        }
    }

    // ─── EOF ────────────────────────────────────────────────────────────

    fn eof(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte — pass through as an opaque punctuation
            // byte; the file is copied losslessly either way.
            self.cursor.advance();
            RawToken {
                tag: RawTag::Other,
                len: 1,
            }
        }
    }

    // ─── Trivia ─────────────────────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b == b' ' || b == b'\t');
        RawToken {
            tag: RawTag::Whitespace,
            len: self.cursor.pos() - start,
        }
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
        }
        RawToken {
            tag: RawTag::Newline,
            len: self.cursor.pos() - start,
        }
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag: RawTag::Newline,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Comments ───────────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first '/'
        match self.cursor.current() {
            b'/' => {
                self.cursor.advance(); // consume second '/'
                                       // SIMD-accelerated scan to end of line
                self.cursor.eat_until_newline_or_eof();
                RawToken {
                    tag: RawTag::LineComment,
                    len: self.cursor.pos() - start,
                }
            }
            b'*' => {
                self.cursor.advance(); // consume '*'
                self.block_comment(start)
            }
            _ => RawToken {
                tag: RawTag::Other,
                len: self.cursor.pos() - start,
            },
        }
    }

    /// Scan a block comment body. `/*` is already consumed.
    /// Block comments do not nest.
    fn block_comment(&mut self, start: u32) -> RawToken {
        loop {
            if !self.cursor.skip_to_byte(b'*') {
                return RawToken {
                    tag: RawTag::UnterminatedBlockComment,
                    len: self.cursor.pos() - start,
                };
            }
            if self.cursor.peek() == b'/' {
                self.cursor.advance_n(2); // consume "*/"
                return RawToken {
                    tag: RawTag::BlockComment,
                    len: self.cursor.pos() - start,
                };
            }
            self.cursor.advance(); // lone '*' — keep scanning
        }
    }

    // ─── Identifiers & literal prefixes ─────────────────────────────────

    /// Scan an identifier, then check whether it is actually the encoding
    /// prefix of a string literal. `R"`, `u8R"`, `uR"`, `UR"`, `LR"` open
    /// raw strings; `u8"`, `u"`, `U"`, `L"` open ordinary strings. Any
    /// other identifier directly followed by `"` stays an identifier and
    /// the quote lexes as its own (string) token.
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first char (already validated)
        self.cursor.eat_while(is_ident_continue);

        if self.cursor.current() == b'"' {
            let text = self.cursor.slice_bytes(start, self.cursor.pos());
            match text {
                b"R" | b"u8R" | b"uR" | b"UR" | b"LR" => return self.raw_string(start),
                b"u8" | b"u" | b"U" | b"L" => return self.string(start),
                _ => {}
            }
        }

        RawToken {
            tag: RawTag::Ident,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    /// Scan a pp-number: digits, identifier characters (hex digits and
    /// suffixes), `.`, digit separators (`1'000'000`), and signed
    /// exponents (`1e+5`, `0x1p-3`). The contents are never interpreted,
    /// only delimited, so the loose pp-number rule is exactly right.
    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first digit
        loop {
            let b = self.cursor.current();
            if is_ident_continue(b) || b == b'.' {
                self.cursor.advance();
                continue;
            }
            // Digit separator: only between digit-ish characters, so the
            // quote never opens a char literal mid-number.
            if b == b'\'' && is_ident_continue(self.cursor.peek()) {
                self.cursor.advance_n(2);
                continue;
            }
            // Exponent sign: '+'/'-' immediately after e/E/p/P.
            if (b == b'+' || b == b'-')
                && matches!(
                    self.cursor.byte_at(self.cursor.pos() - 1),
                    b'e' | b'E' | b'p' | b'P'
                )
            {
                self.cursor.advance();
                continue;
            }
            break;
        }
        RawToken {
            tag: RawTag::Number,
            len: self.cursor.pos() - start,
        }
    }

    // ─── String & char literals ─────────────────────────────────────────

    /// Scan an ordinary string literal. The cursor sits on the opening
    /// `"` (any encoding prefix between `start` and here is part of the
    /// token). An escaped quote (`\"`) must not terminate the scan; a raw
    /// line end or EOF inside the literal is an unterminated-string error.
    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '"'
        loop {
            // SIMD-accelerated skip past ordinary string content
            let b = self.cursor.skip_to_string_delim();
            match b {
                b'"' => {
                    self.cursor.advance(); // consume closing '"'
                    return RawToken {
                        tag: RawTag::String,
                        len: self.cursor.pos() - start,
                    };
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if !self.cursor.is_eof() {
                        self.cursor.advance(); // skip escaped char
                    }
                }
                b'\n' | b'\r' | 0 => {
                    return RawToken {
                        tag: RawTag::UnterminatedString,
                        len: self.cursor.pos() - start,
                    };
                }
                _ => unreachable!("skip_to_string_delim returned unexpected byte"),
            }
        }
    }

    /// Scan a char literal. C++ allows multi-character literals (`'ab'`),
    /// so the scan runs to the closing quote rather than expecting exactly
    /// one character.
    fn char_literal(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '\''
        loop {
            let b = self.cursor.skip_to_char_delim();
            match b {
                b'\'' => {
                    self.cursor.advance(); // consume closing '\''
                    return RawToken {
                        tag: RawTag::Char,
                        len: self.cursor.pos() - start,
                    };
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if !self.cursor.is_eof() {
                        self.cursor.advance(); // skip escaped char
                    }
                }
                b'\n' | b'\r' | 0 => {
                    return RawToken {
                        tag: RawTag::UnterminatedChar,
                        len: self.cursor.pos() - start,
                    };
                }
                _ => unreachable!("skip_to_char_delim returned unexpected byte"),
            }
        }
    }

    // ─── Raw string literals ────────────────────────────────────────────

    /// Scan a raw string literal. The cursor sits on the `"` following the
    /// `R` prefix (already consumed, between `start` and here).
    ///
    /// First the delimiter tag is captured (up to 16 bytes, then `(`),
    /// then the body is scanned for the exact terminator `)tag"`. The body
    /// is fully opaque: escapes, quotes, comments, and code-like text
    /// inside it mean nothing.
    fn raw_string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '"'

        // Capture the delimiter tag.
        let delim_start = self.cursor.pos();
        while is_raw_delimiter_byte(self.cursor.current()) {
            if self.cursor.pos() - delim_start >= MAX_RAW_DELIMITER_LEN {
                return RawToken {
                    tag: RawTag::InvalidRawDelimiter,
                    len: self.cursor.pos() - start,
                };
            }
            self.cursor.advance();
        }
        if self.cursor.current() != b'(' {
            return RawToken {
                tag: RawTag::InvalidRawDelimiter,
                len: self.cursor.pos() - start,
            };
        }
        let delim = self.cursor.slice_bytes(delim_start, self.cursor.pos());
        self.cursor.advance(); // consume '('

        // Scan for the exact terminator: ')' + delim + '"'.
        loop {
            if !self.cursor.skip_to_byte(b')') {
                return RawToken {
                    tag: RawTag::UnterminatedRawString,
                    len: self.cursor.pos() - start,
                };
            }
            self.cursor.advance(); // consume ')'
            #[allow(clippy::cast_possible_truncation)]
            let delim_len = delim.len() as u32;
            if self.cursor.rest_starts_with(delim)
                && self.cursor.byte_at(self.cursor.pos() + delim_len) == b'"'
            {
                self.cursor.advance_n(delim_len + 1); // consume tag + '"'
                return RawToken {
                    tag: RawTag::RawString,
                    len: self.cursor.pos() - start,
                };
            }
            // Not the terminator — ')' was ordinary body content.
        }
    }

    // ─── Preprocessor lines ─────────────────────────────────────────────

    /// `#` opens a preprocessor line only when nothing but horizontal
    /// whitespace precedes it on its line; elsewhere it is ordinary
    /// punctuation (e.g. inside a macro body passed through opaquely).
    fn hash(&mut self, start: u32) -> RawToken {
        if self.line_start {
            self.preprocessor_line(start)
        } else {
            self.single(start, RawTag::Other)
        }
    }

    /// Scan a preprocessor line through the first line end not escaped by
    /// a trailing backslash. Continuation newlines are folded into the
    /// token; the final newline is left for the next token.
    fn preprocessor_line(&mut self, start: u32) -> RawToken {
        loop {
            self.cursor.eat_until_newline_or_eof();
            if self.cursor.is_eof() {
                break;
            }
            // Cursor sits on '\n'. Look back past an optional '\r' for the
            // escaping backslash.
            let newline = self.cursor.pos();
            let mut before = newline;
            if before > start && self.cursor.byte_at(before - 1) == b'\r' {
                before -= 1;
            }
            if before > start && self.cursor.byte_at(before - 1) == b'\\' {
                self.cursor.advance(); // consume the escaped '\n', keep going
            } else {
                // A trailing '\r' belongs to the newline token, not the line.
                self.cursor.retreat_n(newline - before);
                break;
            }
        }
        RawToken {
            tag: RawTag::Preprocessor,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Punctuation ────────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn colon(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume ':'
        if self.cursor.current() == b':' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::ColonColon,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Other,
                len: self.cursor.pos() - start,
            }
        }
    }

    /// Any byte with no dedicated arm: punctuation the rewriter never
    /// inspects, or the leading byte of a non-ASCII character (consumed
    /// whole so token boundaries stay on UTF-8 character boundaries).
    fn other_byte(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        RawToken {
            tag: RawTag::Other,
            len: self.cursor.pos() - start,
        }
    }
}

#[cfg(test)]
mod tests;
