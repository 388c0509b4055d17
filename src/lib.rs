//! Lexer, bracket checker, and recursive-descent parser for a small
//! language of conditional assignments.
//!
//! Statements are assignments (`x := (a + b) * c`) or conditionals
//! (`if a < b then ... else ...`), each terminated by `;`. Source text
//! is turned into an ordered syntax tree of leaf and group nodes.
//!
//! # Quick start
//!
//! ## Parse and render a syntax tree
//!
//! ```
//! use condlang_rs::{analyze, lex, render};
//!
//! let tree = analyze(lex("if a < b then x := x else x := y;")).unwrap();
//! let statement = &tree.children[0];
//! assert_eq!(statement.children.len(), 6);
//! assert!(render(&tree).contains("└── y"));
//! ```
//!
//! ## Build a program and format it
//!
//! ```
//! use condlang_rs::{Assignment, Comparison, Conditional, Program, format};
//!
//! let program = Program::new().statement(
//!     Conditional::new(Comparison::greater("a", "0"))
//!         .then(Assignment::new("y", "a"))
//!         .otherwise(Assignment::new("y", "0")),
//! );
//!
//! assert_eq!(format(&program), "if a > 0 then y := a else y := 0;\n");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod brackets;
pub mod builder;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod token;
pub mod tree;

pub use ast::{
    ArithmeticOp, Assignment, Bracket, Comparison, ComparisonOp, Conditional, Expression, Operand,
    Program, Statement, Term,
};
pub use brackets::{BracketError, BracketErrorKind, check_brackets};
pub use formatter::format;
pub use lexer::{LexError, LexErrorKind, LexErrors, Lexer, lex, tokenize};
pub use parser::{ParseError, ParseErrorKind, analyze, parse, parse_program};
pub use render::render;
pub use token::{Keyword, Span, Token, TokenKind};
pub use tree::Node;

/// Unified error type covering bracket checking, lexing and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Unbalanced brackets.
    #[error("{0}")]
    Brackets(#[from] BracketError),
    /// One or more lexer errors.
    #[error("{0}")]
    Lex(#[from] LexErrors),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Check brackets, tokenize and parse a source string into a typed
/// program in one step.
pub fn parse_program_str(input: &str) -> Result<Program, Error> {
    check_brackets(input)?;
    let tokens = tokenize(input)?;
    Ok(parse_program(&tokens)?)
}

/// Check brackets, tokenize and parse a source string into a syntax
/// tree in one step.
pub fn parse_str(input: &str) -> Result<Node, Error> {
    parse_program_str(input).map(|program| Node::from(&program))
}
