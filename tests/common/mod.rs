#![allow(dead_code)]

use condlang_rs::{Program, TokenKind, format, parse_program, parse_program_str, tokenize};

pub fn roundtrip(input: &str) {
    let tokens = tokenize(input).expect("tokenize failed");
    let program = parse_program(&tokens).expect("parse failed");
    let output = format(&program);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Helper: format a program, parse it back, assert structural equality.
pub fn assert_program_roundtrip(original: &Program) {
    let formatted = format(original);
    let parsed = parse_program_str(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });

    assert_eq!(
        original.statements, parsed.statements,
        "statements mismatch\n--- formatted ---\n{formatted}"
    );
}

/// Token spellings that must show up as tree leaves: everything but
/// delimiters and brackets.
pub fn leaf_texts(input: &str) -> Vec<String> {
    tokenize(input)
        .expect("tokenize failed")
        .into_iter()
        .filter(|t| {
            !matches!(
                t.kind,
                TokenKind::Delimiter | TokenKind::OpenBracket | TokenKind::CloseBracket
            )
        })
        .map(|t| t.text)
        .collect()
}
