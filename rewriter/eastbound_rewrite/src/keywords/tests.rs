use super::{is_macro_like, is_reserved_non_type, is_type_specifier};

#[test]
fn fundamental_types() {
    for kw in [
        "int", "auto", "bool", "char", "long", "void", "float", "short", "double", "signed",
        "wchar_t", "char8_t", "unsigned", "char16_t", "char32_t",
    ] {
        assert!(is_type_specifier(kw), "{kw} should be a type specifier");
    }
}

#[test]
fn non_types_are_rejected() {
    assert!(!is_type_specifier("const"));
    assert!(!is_type_specifier("static"));
    assert!(!is_type_specifier("string"));
    assert!(!is_type_specifier("Integer"));
    assert!(!is_type_specifier(""));
    assert!(!is_type_specifier("x"));
    // Length bucket mismatches.
    assert!(!is_type_specifier("in"));
    assert!(!is_type_specifier("intintint"));
}

#[test]
fn reserved_words_cannot_start_a_type() {
    for kw in [
        "if", "for", "new", "enum", "using", "class", "struct", "return", "extern", "inline",
        "typedef", "typename", "template", "volatile", "constexpr", "namespace", "decltype",
        "const_cast", "static_cast", "dynamic_cast", "thread_local", "static_assert",
        "reinterpret_cast",
    ] {
        assert!(is_reserved_non_type(kw), "{kw} should be reserved");
    }
}

#[test]
fn specifiers_and_types_are_not_in_the_reserved_set() {
    assert!(!is_reserved_non_type("const"));
    assert!(!is_reserved_non_type("static"));
    assert!(!is_reserved_non_type("int"));
    assert!(!is_reserved_non_type("unsigned"));
}

#[test]
fn macro_like_spelling() {
    assert!(is_macro_like("SOME_MACRO"));
    assert!(is_macro_like("DWORD"));
    assert!(is_macro_like("F2"));
    assert!(is_macro_like("_X"));

    assert!(!is_macro_like("F"));
    assert!(!is_macro_like("_"));
    assert!(!is_macro_like("__"));
    assert!(!is_macro_like("42"));
    assert!(!is_macro_like("Foo"));
    assert!(!is_macro_like("const"));
}

#[test]
fn ordinary_identifiers_are_not_reserved() {
    assert!(!is_reserved_non_type("vector"));
    assert!(!is_reserved_non_type("string"));
    assert!(!is_reserved_non_type("returned"));
    assert!(!is_reserved_non_type(""));
}
