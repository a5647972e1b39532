use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Helper: scan a source string and collect all tokens (excluding Eof).
fn scan(source: &str) -> Vec<RawToken> {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

/// Helper: scan and return tags only.
fn scan_tags(source: &str) -> Vec<RawTag> {
    scan(source).iter().map(|t| t.tag).collect()
}

/// Helper: scan and return `(tag, text)` pairs by re-slicing the source.
fn scan_texts(source: &str) -> Vec<(RawTag, &str)> {
    let mut out = Vec::new();
    let mut offset = 0usize;
    for tok in scan(source) {
        let end = offset + tok.len as usize;
        out.push((tok.tag, &source[offset..end]));
        offset = end;
    }
    out
}

// ─── Lossless tokenization ──────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "const int x = 1;",
        "// comment\nint y;",
        "/* block */ \"str\" 'c'",
        "R\"cpp(const int kFoo = 33;)cpp\"",
        "#define FOO(a) \\\n  (a)\nint z;",
        "std::vector<const char*> v;",
        "  \t\n  \r\n  ",
        "1'000'000 0x1p-3 1.5e+10",
    ];
    for source in sources {
        let tokens = scan(source);
        let total_len: u32 = tokens.iter().map(|t| t.len).sum();
        assert_eq!(
            total_len as usize,
            source.len(),
            "total token length mismatch for {source:?}",
        );
    }
}

#[test]
fn every_token_has_positive_length() {
    let sources = ["const int x;", "*&<>()[]{};,=", "\"s\" 'c'", "  \t\n\r\n"];
    for source in sources {
        for tok in scan(source) {
            assert!(tok.len > 0, "zero-length token {tok:?} in {source:?}");
        }
    }
}

#[test]
fn eof_has_zero_length_and_repeats() {
    let buf = SourceBuffer::new("");
    let mut scanner = RawScanner::new(buf.cursor());
    let tok = scanner.next_token();
    assert_eq!(tok.tag, RawTag::Eof);
    assert_eq!(tok.len, 0);
    assert_eq!(scanner.next_token().tag, RawTag::Eof);
}

// ─── Identifiers, numbers, punctuation ──────────────────────────────────

#[test]
fn identifiers_and_punctuation() {
    assert_eq!(
        scan_tags("const std::string& s"),
        vec![
            RawTag::Ident,
            RawTag::Whitespace,
            RawTag::Ident,
            RawTag::ColonColon,
            RawTag::Ident,
            RawTag::Ampersand,
            RawTag::Whitespace,
            RawTag::Ident,
        ]
    );
}

#[test]
fn underscore_starts_identifier() {
    assert_eq!(scan_tags("_x __y"), vec![
        RawTag::Ident,
        RawTag::Whitespace,
        RawTag::Ident
    ]);
}

#[test]
fn single_colon_is_other() {
    assert_eq!(scan_tags("a:b"), vec![RawTag::Ident, RawTag::Other, RawTag::Ident]);
}

#[test]
fn greater_never_fuses() {
    // Nested template closers must stay two separate '>' tokens.
    assert_eq!(
        scan_tags("vector<vector<int>>"),
        vec![
            RawTag::Ident,
            RawTag::Less,
            RawTag::Ident,
            RawTag::Less,
            RawTag::Ident,
            RawTag::Greater,
            RawTag::Greater,
        ]
    );
}

#[test]
fn pp_number_forms() {
    for source in ["42", "0xFF", "1'000'000", "1.5e+10", "0x1p-3", "1.f", "33ull"] {
        let tokens = scan(source);
        assert_eq!(tokens.len(), 1, "{source:?} should be one number token");
        assert_eq!(tokens[0].tag, RawTag::Number);
        assert_eq!(tokens[0].len as usize, source.len());
    }
}

#[test]
fn number_followed_by_punctuation() {
    assert_eq!(scan_tags("33;"), vec![RawTag::Number, RawTag::Semicolon]);
}

// ─── Comments ───────────────────────────────────────────────────────────

#[test]
fn line_comment_excludes_newline() {
    let texts = scan_texts("// const int\nx");
    assert_eq!(texts[0], (RawTag::LineComment, "// const int"));
    assert_eq!(texts[1], (RawTag::Newline, "\n"));
    assert_eq!(texts[2], (RawTag::Ident, "x"));
}

#[test]
fn line_comment_at_eof() {
    let texts = scan_texts("// trailing");
    assert_eq!(texts, vec![(RawTag::LineComment, "// trailing")]);
}

#[test]
fn block_comment_spans_lines() {
    let source = "/*\n const keywords ignored\n */";
    let texts = scan_texts(source);
    assert_eq!(texts, vec![(RawTag::BlockComment, source)]);
}

#[test]
fn block_comment_does_not_nest() {
    let texts = scan_texts("/* a /* b */ c");
    assert_eq!(texts[0], (RawTag::BlockComment, "/* a /* b */"));
}

#[test]
fn lone_star_inside_block_comment() {
    let texts = scan_texts("/* a * b */");
    assert_eq!(texts, vec![(RawTag::BlockComment, "/* a * b */")]);
}

#[test]
fn unterminated_block_comment() {
    let tags = scan_tags("/* never closed");
    assert_eq!(tags, vec![RawTag::UnterminatedBlockComment]);
}

#[test]
fn lone_slash_is_other() {
    assert_eq!(scan_tags("a/b"), vec![RawTag::Ident, RawTag::Other, RawTag::Ident]);
}

// ─── String & char literals ─────────────────────────────────────────────

#[test]
fn string_with_escaped_quote() {
    let texts = scan_texts(r#""a\"b" x"#);
    assert_eq!(texts[0], (RawTag::String, r#""a\"b""#));
    assert_eq!(texts[2], (RawTag::Ident, "x"));
}

#[test]
fn string_with_escaped_backslash() {
    let texts = scan_texts(r#""a\\" x"#);
    assert_eq!(texts[0], (RawTag::String, r#""a\\""#));
}

#[test]
fn string_containing_const_is_one_token() {
    let texts = scan_texts("\"const int x;\"");
    assert_eq!(texts, vec![(RawTag::String, "\"const int x;\"")]);
}

#[test]
fn encoding_prefixes_lex_as_one_string() {
    for source in ["u8\"x\"", "u\"x\"", "U\"x\"", "L\"x\""] {
        let texts = scan_texts(source);
        assert_eq!(texts, vec![(RawTag::String, source)], "for {source:?}");
    }
}

#[test]
fn ordinary_identifier_before_quote_stays_identifier() {
    assert_eq!(
        scan_tags("foo\"bar\""),
        vec![RawTag::Ident, RawTag::String]
    );
}

#[test]
fn unterminated_string_at_line_end() {
    let tags = scan_tags("\"oops\nint x;");
    assert_eq!(tags[0], RawTag::UnterminatedString);
}

#[test]
fn unterminated_string_at_eof() {
    assert_eq!(scan_tags("\"oops"), vec![RawTag::UnterminatedString]);
}

#[test]
fn char_literals() {
    let texts = scan_texts(r"'c' '\n' '\'' 'ab'");
    let chars: Vec<&str> = texts
        .iter()
        .filter(|(tag, _)| *tag == RawTag::Char)
        .map(|(_, text)| *text)
        .collect();
    assert_eq!(chars, vec!["'c'", r"'\n'", r"'\''", "'ab'"]);
}

#[test]
fn unterminated_char_at_line_end() {
    assert_eq!(scan_tags("'x\n")[0], RawTag::UnterminatedChar);
}

// ─── Raw string literals ────────────────────────────────────────────────

#[test]
fn raw_string_with_tag_delimiter() {
    let source = "R\"cpp(\n  const int kFoo = 33;\n)cpp\"";
    let texts = scan_texts(source);
    assert_eq!(texts, vec![(RawTag::RawString, source)]);
}

#[test]
fn raw_string_with_empty_delimiter() {
    let source = "R\"(const)\"";
    assert_eq!(scan_texts(source), vec![(RawTag::RawString, source)]);
}

#[test]
fn raw_string_body_may_contain_near_terminators() {
    // ")cp\" and ")cppx\" must not terminate a )cpp" raw string.
    let source = "R\"cpp(a )cp\" b )cppx\" c)cpp\"";
    assert_eq!(scan_texts(source), vec![(RawTag::RawString, source)]);
}

#[test]
fn raw_string_body_quotes_and_comments_are_opaque() {
    let source = "R\"x(\" // /* 'c' )x\"";
    assert_eq!(scan_texts(source), vec![(RawTag::RawString, source)]);
}

#[test]
fn raw_string_prefixes() {
    for source in ["u8R\"(x)\"", "uR\"(x)\"", "UR\"(x)\"", "LR\"(x)\""] {
        assert_eq!(
            scan_texts(source),
            vec![(RawTag::RawString, source)],
            "for {source:?}"
        );
    }
}

#[test]
fn unterminated_raw_string() {
    assert_eq!(
        scan_tags("R\"cpp(const int x;)cp\""),
        vec![RawTag::UnterminatedRawString]
    );
}

#[test]
fn raw_delimiter_too_long_is_invalid() {
    // 17 delimiter characters exceeds the 16-char grammar limit.
    let source = "R\"aaaaaaaaaaaaaaaaa(x)\"";
    assert_eq!(scan_tags(source)[0], RawTag::InvalidRawDelimiter);
}

#[test]
fn raw_delimiter_without_open_paren_is_invalid() {
    assert_eq!(scan_tags("R\"tag")[0], RawTag::InvalidRawDelimiter);
}

// ─── Preprocessor lines ─────────────────────────────────────────────────

#[test]
fn include_line_is_one_token() {
    let texts = scan_texts("#include <string>\nint x;");
    assert_eq!(texts[0], (RawTag::Preprocessor, "#include <string>"));
    assert_eq!(texts[1], (RawTag::Newline, "\n"));
}

#[test]
fn hash_after_leading_whitespace_still_preprocessor() {
    let texts = scan_texts("  #pragma once\n");
    assert_eq!(texts[0], (RawTag::Whitespace, "  "));
    assert_eq!(texts[1], (RawTag::Preprocessor, "#pragma once"));
}

#[test]
fn define_with_continuation_folds_lines() {
    let source = "#define FOO(a) \\\n  (a + const_val)\nint x;";
    let texts = scan_texts(source);
    assert_eq!(
        texts[0],
        (RawTag::Preprocessor, "#define FOO(a) \\\n  (a + const_val)")
    );
    assert_eq!(texts[1], (RawTag::Newline, "\n"));
}

#[test]
fn continuation_with_crlf() {
    let source = "#define A \\\r\n B\r\nint x;";
    let texts = scan_texts(source);
    assert_eq!(texts[0], (RawTag::Preprocessor, "#define A \\\r\n B"));
    assert_eq!(texts[1], (RawTag::Newline, "\r\n"));
}

#[test]
fn hash_mid_line_is_not_preprocessor() {
    let tags = scan_tags("a # b");
    assert_eq!(
        tags,
        vec![
            RawTag::Ident,
            RawTag::Whitespace,
            RawTag::Other,
            RawTag::Whitespace,
            RawTag::Ident
        ]
    );
}

#[test]
fn preprocessor_at_eof_without_newline() {
    let texts = scan_texts("#endif");
    assert_eq!(texts, vec![(RawTag::Preprocessor, "#endif")]);
}

// ─── Newlines & whitespace ──────────────────────────────────────────────

#[test]
fn newline_variants() {
    let texts = scan_texts("a\nb\r\nc\rd");
    let newlines: Vec<&str> = texts
        .iter()
        .filter(|(tag, _)| *tag == RawTag::Newline)
        .map(|(_, text)| *text)
        .collect();
    assert_eq!(newlines, vec!["\n", "\r\n", "\r"]);
}

#[test]
fn non_ascii_outside_literals_is_other() {
    let texts = scan_texts("µ x");
    assert_eq!(texts[0], (RawTag::Other, "µ"));
    assert_eq!(texts[2], (RawTag::Ident, "x"));
}

// ─── Property: losslessness on arbitrary input ──────────────────────────

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Token lengths always sum to the source length, for any input,
        /// including ones that lex to error tags.
        #[test]
        fn tokenization_is_lossless(source in ".{0,200}") {
            let tokens = scan(&source);
            let total: u32 = tokens.iter().map(|t| t.len).sum();
            prop_assert_eq!(total as usize, source.len());
        }

        /// Token boundaries always fall on UTF-8 character boundaries, so
        /// re-slicing the source by token lengths never panics.
        #[test]
        fn boundaries_are_char_boundaries(source in "[a-zA-Z0-9_:;*&<>(){}#\"'/\\\\ \n.µü€-]{0,120}") {
            let tokens = scan(&source);
            let mut offset = 0usize;
            for tok in tokens {
                let end = offset + tok.len as usize;
                prop_assert!(source.is_char_boundary(end), "bad boundary at {}", end);
                offset = end;
            }
        }
    }
}
