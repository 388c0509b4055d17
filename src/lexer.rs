use std::fmt;
use std::iter::FusedIterator;

use crate::token::{Keyword, Span, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// `:` not followed by `=`.
    LoneColon,
    /// Numeric literal glued to letters, digits or a second point.
    MalformedConstant(String),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {ch}")
            }
            Self::LoneColon => {
                write!(f, "expected '=' after ':'")
            }
            Self::MalformedConstant(text) => {
                write!(f, "malformed numeric constant: {text}")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Every lexical error found in one source text, in source order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_lines(.0))]
pub struct LexErrors(pub Vec<LexError>);

pub(crate) fn join_lines(errors: &[LexError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Start a lazy scan of `input`.
///
/// The returned iterator yields tokens and lexical errors in source
/// order. A bad character produces an error and scanning resumes
/// right after it, so the iterator always runs to the end of input.
#[must_use]
pub fn lex(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}

/// Tokenize a whole source string.
///
/// # Errors
///
/// Returns every lexical error of the input, aggregated, if at
/// least one character could not be classified.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexErrors> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for item in lex(input) {
        match item {
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(LexErrors(errors))
    }
}

/// Forward-only scanner over one source text.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    input: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        let bytes = source.as_bytes();
        let start = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
            3
        } else {
            0
        };
        Self {
            source,
            input: bytes,
            pos: start,
            line: 1,
            col: 1,
        }
    }

    const fn span(&self) -> Span {
        Span::new(self.pos, self.line, self.col)
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.input.len() {
            if self.input[self.pos] == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        self.advance_while(|b| b.is_ascii_whitespace());
    }

    fn text_from(&self, start: usize) -> String {
        self.source[start..self.pos].to_string()
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let span = self.span();
        let start = self.pos;
        self.advance();
        Token {
            kind,
            text: self.text_from(start),
            span,
        }
    }

    fn read_word(&mut self) -> Token {
        let span = self.span();
        let start = self.pos;
        self.advance_while(|b| b.is_ascii_alphanumeric());

        let text = self.text_from(start);
        let kind = Keyword::from_word(&text).map_or(TokenKind::Identifier, TokenKind::Keyword);
        Token { kind, text, span }
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        let start = self.pos;
        self.advance_while(|b| b.is_ascii_digit());

        // Fraction
        if self.peek() == Some(b'.') && self.peek_at(1).is_some_and(|b| b.is_ascii_digit()) {
            self.advance();
            self.advance_while(|b| b.is_ascii_digit());
        }

        // Exponent, only when digits actually follow
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let sign = usize::from(matches!(self.peek_at(1), Some(b'+' | b'-')));
            if self.peek_at(1 + sign).is_some_and(|b| b.is_ascii_digit()) {
                for _ in 0..=sign {
                    self.advance();
                }
                self.advance_while(|b| b.is_ascii_digit());
            }
        }

        if self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'.')
        {
            self.advance_while(|b| b.is_ascii_alphanumeric() || b == b'.');
            return Err(LexError {
                kind: LexErrorKind::MalformedConstant(self.text_from(start)),
                span,
            });
        }

        Ok(Token {
            kind: TokenKind::Constant,
            text: self.text_from(start),
            span,
        })
    }

    fn read_assign(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        if self.peek_at(1) == Some(b'=') {
            self.advance();
            self.advance();
            return Ok(Token {
                kind: TokenKind::Assign,
                text: ":=".to_string(),
                span,
            });
        }
        self.advance();
        Err(LexError {
            kind: LexErrorKind::LoneColon,
            span,
        })
    }

    fn unexpected_character(&mut self) -> LexError {
        let span = self.span();
        let ch = self.source[self.pos..].chars().next().unwrap_or('\u{FFFD}');
        // Skip the whole character, not just its first byte.
        self.pos += ch.len_utf8();
        self.col += 1;
        LexError {
            kind: LexErrorKind::UnexpectedCharacter(ch),
            span,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let ch = self.peek()?;

        let item = match ch {
            b'a'..=b'z' | b'A'..=b'Z' => Ok(self.read_word()),
            b'0'..=b'9' => self.read_number(),
            b':' => self.read_assign(),
            b'<' | b'>' | b'=' => Ok(self.single(TokenKind::Comparison)),
            b'+' | b'-' | b'*' | b'/' => Ok(self.single(TokenKind::Arithmetic)),
            b';' => Ok(self.single(TokenKind::Delimiter)),
            b'(' | b'[' | b'{' => Ok(self.single(TokenKind::OpenBracket)),
            b')' | b']' | b'}' => Ok(self.single(TokenKind::CloseBracket)),
            _ => Err(self.unexpected_character()),
        };

        if let Err(err) = &item {
            tracing::trace!(%err, "skipping unclassified input");
        }

        Some(item)
    }
}

impl FusedIterator for Lexer<'_> {}
