//! Lexer tests: classification, positions, error recovery.

use condlang_rs::{Keyword, LexErrorKind, Span, TokenKind, lex, tokenize};

#[test]
fn bracketed_assignment_token_stream() {
    let tokens = tokenize("b := (a + b) * (c - d);").expect("tokenize");
    let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(
        got,
        vec![
            (TokenKind::Identifier, "b"),
            (TokenKind::Assign, ":="),
            (TokenKind::OpenBracket, "("),
            (TokenKind::Identifier, "a"),
            (TokenKind::Arithmetic, "+"),
            (TokenKind::Identifier, "b"),
            (TokenKind::CloseBracket, ")"),
            (TokenKind::Arithmetic, "*"),
            (TokenKind::OpenBracket, "("),
            (TokenKind::Identifier, "c"),
            (TokenKind::Arithmetic, "-"),
            (TokenKind::Identifier, "d"),
            (TokenKind::CloseBracket, ")"),
            (TokenKind::Delimiter, ";"),
        ]
    );
}

#[test]
fn positions_are_source_offsets() {
    let tokens = tokenize("b := (a + b);").expect("tokenize");
    let offsets: Vec<_> = tokens.iter().map(|t| t.span.offset).collect();
    assert_eq!(offsets, [0, 2, 5, 6, 8, 10, 11, 12]);
}

#[test]
fn tokens_are_in_source_order() {
    let tokens = tokenize("if x1 > 2.5e3 then y := x1 / 2 else y := 0;").expect("tokenize");
    assert!(tokens.windows(2).all(|w| w[0].span.offset < w[1].span.offset));
}

#[test]
fn conditional_keywords() {
    let tokens = tokenize("if a = b then x := 1 else x := 2;").expect("tokenize");
    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::If));
    assert_eq!(tokens[2].kind, TokenKind::Comparison);
    assert_eq!(tokens[4].kind, TokenKind::Keyword(Keyword::Then));
    assert_eq!(tokens[8].kind, TokenKind::Keyword(Keyword::Else));
}

#[test]
fn keyword_prefix_is_identifier() {
    let tokens = tokenize("ifx thenelse elsewhere").expect("tokenize");
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn exponential_constants() {
    let tokens = tokenize("x := 6.02e23 + 1E-9 + 5e+2;").expect("tokenize");
    let constants: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Constant)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(constants, ["6.02e23", "1E-9", "5e+2"]);
}

#[test]
fn exponent_without_digits() {
    // `2e-` has no exponent digits: the literal is malformed up to the sign.
    let items: Vec<_> = lex("2e-x").collect();
    assert_eq!(
        items[0].as_ref().unwrap_err().kind,
        LexErrorKind::MalformedConstant("2e".to_string())
    );
    assert_eq!(items[1].as_ref().unwrap().text, "-");
    assert_eq!(items[2].as_ref().unwrap().kind, TokenKind::Identifier);
}

#[test]
fn trailing_point_is_malformed() {
    let err = tokenize("x := 1.;").unwrap_err();
    assert_eq!(
        err.0[0].kind,
        LexErrorKind::MalformedConstant("1.".to_string())
    );
}

#[test]
fn leading_point_is_unexpected() {
    let err = tokenize(".5").unwrap_err();
    assert_eq!(err.0[0].kind, LexErrorKind::UnexpectedCharacter('.'));
}

#[test]
fn lone_colon() {
    let err = tokenize("x : y").unwrap_err();
    assert_eq!(err.0.len(), 1);
    assert_eq!(err.0[0].kind, LexErrorKind::LoneColon);
    assert_eq!(err.0[0].span.offset, 2);
}

#[test]
fn colon_equals_equals() {
    let tokens = tokenize("x :== y").expect("tokenize");
    assert_eq!(tokens[1].kind, TokenKind::Assign);
    assert_eq!(tokens[2].kind, TokenKind::Comparison);
}

#[test]
fn errors_interleave_with_tokens() {
    let items: Vec<_> = lex("a ! b ? c").collect();
    let shape: Vec<bool> = items.iter().map(Result::is_ok).collect();
    assert_eq!(shape, [true, false, true, false, true]);
}

#[test]
fn never_aborts_early() {
    let items: Vec<_> = lex("#$%^&").collect();
    assert_eq!(items.len(), 5);
    assert!(items.iter().all(Result::is_err));
}

#[test]
fn whitespace_only() {
    assert!(tokenize(" \t\r\n  ").expect("tokenize").is_empty());
    assert_eq!(lex("").count(), 0);
}

#[test]
fn underscore_is_not_an_identifier_character() {
    let err = tokenize("my_var").unwrap_err();
    assert_eq!(err.0[0].kind, LexErrorKind::UnexpectedCharacter('_'));
    assert_eq!(err.0[0].span, Span::new(2, 1, 3));
}

#[test]
fn lazy_iteration_stops_where_asked() {
    let first_two: Vec<_> = lex("a := b; c := d;").take(2).collect();
    assert_eq!(first_two.len(), 2);
}

#[test]
fn display_error() {
    let err = tokenize("x := @;").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("unexpected character: @"));
    assert!(msg.contains("line 1, column 6"));
}
