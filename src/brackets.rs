//! Bracket balance validation over raw source text.
//!
//! Runs independently of tokenization: any `(`, `[`, `{`, `)`, `]`
//! or `}` in the text takes part, wherever it appears.

use std::fmt;

use crate::token::Span;

/// Classifies a bracket balance failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketErrorKind {
    /// Closing bracket with nothing open.
    UnexpectedClose(char),
    /// Closing bracket of a different family than the innermost open one.
    Mismatched { open: char, close: char },
    /// Opening bracket never closed.
    Unclosed(char),
}

impl fmt::Display for BracketErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedClose(ch) => {
                write!(f, "unbalanced brackets: '{ch}' closes nothing")
            }
            Self::Mismatched { open, close } => {
                write!(f, "unbalanced brackets: '{close}' cannot close '{open}'")
            }
            Self::Unclosed(ch) => {
                write!(f, "unbalanced brackets: '{ch}' is never closed")
            }
        }
    }
}

/// Error produced by [`check_brackets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct BracketError {
    pub kind: BracketErrorKind,
    pub span: Span,
}

/// Closing partner of an opening bracket.
#[must_use]
pub const fn closing_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

const fn is_close(ch: char) -> bool {
    matches!(ch, ')' | ']' | '}')
}

/// Validate bracket nesting of `input`.
///
/// # Errors
///
/// Fails at the offending closing bracket when it closes nothing or
/// belongs to another family, or at the oldest bracket still open at
/// the end of input.
pub fn check_brackets(input: &str) -> Result<(), BracketError> {
    let mut stack: Vec<(char, Span)> = Vec::new();
    let mut line = 1;
    let mut column = 1;

    for (offset, ch) in input.char_indices() {
        let span = Span::new(offset, line, column);

        if closing_for(ch).is_some() {
            stack.push((ch, span));
        } else if is_close(ch) {
            let kind = match stack.pop() {
                None => Some(BracketErrorKind::UnexpectedClose(ch)),
                Some((open, _)) if closing_for(open) != Some(ch) => {
                    Some(BracketErrorKind::Mismatched { open, close: ch })
                }
                Some(_) => None,
            };
            if let Some(kind) = kind {
                return Err(BracketError { kind, span });
            }
        }

        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    match stack.first() {
        Some(&(open, span)) => Err(BracketError {
            kind: BracketErrorKind::Unclosed(open),
            span,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced() {
        assert!(check_brackets("(a+b)").is_ok());
        assert!(check_brackets("x := [a * {b - (c)}];").is_ok());
        assert!(check_brackets("").is_ok());
    }

    #[test]
    fn unclosed_reports_oldest_open() {
        let err = check_brackets("(a + (b").unwrap_err();
        assert_eq!(err.kind, BracketErrorKind::Unclosed('('));
        assert_eq!(err.span.offset, 0);
    }

    #[test]
    fn close_without_open() {
        let err = check_brackets("a)").unwrap_err();
        assert_eq!(err.kind, BracketErrorKind::UnexpectedClose(')'));
        assert_eq!(err.span.offset, 1);
    }

    #[test]
    fn family_mismatch() {
        let err = check_brackets("(a]").unwrap_err();
        assert_eq!(
            err.kind,
            BracketErrorKind::Mismatched {
                open: '(',
                close: ']'
            }
        );
        assert_eq!(err.span.offset, 2);
    }

    #[test]
    fn span_counts_lines() {
        let err = check_brackets("a\nb)").unwrap_err();
        assert_eq!(err.span, Span::new(3, 2, 2));
    }
}
