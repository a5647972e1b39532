use pretty_assertions::assert_eq;

use super::{match_region, Region};
use crate::lex::{lex, Token};

fn tokens(source: &str) -> Vec<Token<'_>> {
    lex(source).unwrap()
}

/// Index of the first `const` or `static` token.
fn first_spec(tokens: &[Token<'_>]) -> usize {
    tokens
        .iter()
        .position(|t| t.text == "const" || t.text == "static")
        .unwrap()
}

fn region(tokens: &[Token<'_>]) -> Option<Region> {
    match_region(tokens, first_spec(tokens))
}

fn type_text(tokens: &[Token<'_>], region: &Region) -> String {
    tokens[region.type_start..region.type_end]
        .iter()
        .map(|t| t.text)
        .collect()
}

#[test]
fn const_builtin() {
    let toks = tokens("const int x;");
    let r = region(&toks).unwrap();
    assert!(r.has_west_const);
    assert!(!r.comment_gap);
    assert_eq!(r.specs.len(), 1);
    assert_eq!(type_text(&toks, &r), "int");
    assert_eq!(r.template_args, None);
}

#[test]
fn builtin_keyword_run() {
    let toks = tokens("const unsigned long long x;");
    let r = region(&toks).unwrap();
    assert_eq!(type_text(&toks, &r), "unsigned long long");
}

#[test]
fn static_const_in_either_order() {
    let toks = tokens("static const int x;");
    let r = region(&toks).unwrap();
    assert!(r.has_west_const);
    assert_eq!(r.specs.len(), 2);

    let toks = tokens("const static int x;");
    let r = region(&toks).unwrap();
    assert!(r.has_west_const);
    assert_eq!(r.specs.len(), 2);
}

#[test]
fn static_without_const() {
    let toks = tokens("static int x;");
    let r = region(&toks).unwrap();
    assert!(!r.has_west_const);
}

#[test]
fn qualified_name_with_leading_colons() {
    let toks = tokens("const ::std::string s;");
    let r = region(&toks).unwrap();
    assert_eq!(type_text(&toks, &r), "::std::string");
}

#[test]
fn template_arguments_are_bracketed() {
    let toks = tokens("const std::vector<const char*> v;");
    let r = region(&toks).unwrap();
    let (less, greater) = r.template_args.unwrap();
    assert_eq!(toks[less].text, "<");
    assert_eq!(toks[greater].text, ">");
    assert_eq!(r.type_end, greater + 1);
}

#[test]
fn nested_angle_brackets_balance() {
    let toks = tokens("const std::map<int, std::vector<char>> m;");
    let r = region(&toks).unwrap();
    let (_, greater) = r.template_args.unwrap();
    // The matching `>` is the second of the two closers.
    assert_eq!(toks[greater + 1].text, ">");
}

#[test]
fn comment_between_specifier_and_type_sets_the_gap_flag() {
    let toks = tokens("const /* gap */ int x;");
    let r = region(&toks).unwrap();
    assert!(r.comment_gap);
}

#[test]
fn duplicate_const_does_not_match() {
    let toks = tokens("const const int x;");
    assert_eq!(region(&toks), None);
}

#[test]
fn reserved_word_after_specifier_does_not_match() {
    let toks = tokens("const return;");
    assert_eq!(region(&toks), None);
    let toks = tokens("static if (x) {}");
    assert_eq!(region(&toks), None);
}

#[test]
fn specifier_at_end_of_input_does_not_match() {
    let toks = tokens("const");
    assert_eq!(region(&toks), None);
    let toks = tokens("const ");
    assert_eq!(region(&toks), None);
}

#[test]
fn type_continuing_past_template_args_does_not_match() {
    let toks = tokens("const std::vector<int>::size_type n;");
    assert_eq!(region(&toks), None);
}

#[test]
fn unbalanced_angle_brackets_do_not_match() {
    let toks = tokens("const std::vector<int x;");
    assert_eq!(region(&toks), None);
}

#[test]
fn statement_tokens_abort_the_angle_scan() {
    let toks = tokens("a < b; const int x;");
    let r = region(&toks).unwrap();
    assert_eq!(type_text(&toks, &r), "int");
    // `if (a < b) f();` — the `<` here is a comparison and the `(` inside
    // the would-be argument list aborts the template match.
    let toks = tokens("const less<b (c);");
    assert_eq!(region(&toks), None);
}

#[test]
fn macro_invocation_as_type_does_not_match() {
    let toks = tokens("const SOME_MACRO(x) y;");
    assert_eq!(region(&toks), None);
    // A comment between name and argument list does not hide the call.
    let toks = tokens("const SOME_MACRO /* args */ (x) y;");
    assert_eq!(region(&toks), None);
}

#[test]
fn macro_like_name_without_argument_list_still_matches() {
    let toks = tokens("const DWORD w = 0;");
    let r = region(&toks).unwrap();
    assert_eq!(type_text(&toks, &r), "DWORD");
    // Qualified names cannot be macro names.
    let toks = tokens("const win::DWORD f(x);");
    assert!(region(&toks).is_some());
}

#[test]
fn punctuation_after_specifier_does_not_match() {
    let toks = tokens("const = 3;");
    assert_eq!(region(&toks), None);
    let toks = tokens("const *p;");
    assert_eq!(region(&toks), None);
}
