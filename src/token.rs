use std::fmt;

/// Source location for error reporting.
///
/// `offset` is the 0-based byte offset into the source text;
/// `line` and `column` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    #[must_use]
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (offset {})",
            self.line, self.column, self.offset
        )
    }
}

/// Reserved words of the conditional statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Then,
    Else,
}

impl Keyword {
    /// Look up a reserved word by its exact spelling.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "if" => Some(Self::If),
            "then" => Some(Self::Then),
            "else" => Some(Self::Else),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Letter followed by letters or digits.
    Identifier,
    /// Numeric literal (`42`, `1.5`, `2e10`).
    Constant,
    /// Assignment sign `:=`.
    Assign,
    /// `<`, `>` or `=`.
    Comparison,
    /// `+`, `-`, `*` or `/`.
    Arithmetic,
    /// `if`, `then` or `else`.
    Keyword(Keyword),
    /// Statement delimiter `;`.
    Delimiter,
    /// `(`, `[` or `{`.
    OpenBracket,
    /// `)`, `]` or `}`.
    CloseBracket,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => f.write_str("identifier"),
            Self::Constant => f.write_str("constant"),
            Self::Assign => f.write_str("assignment sign"),
            Self::Comparison => f.write_str("comparison sign"),
            Self::Arithmetic => f.write_str("arithmetic operator"),
            Self::Keyword(kw) => write!(f, "keyword '{kw}'"),
            Self::Delimiter => f.write_str("delimiter"),
            Self::OpenBracket => f.write_str("opening bracket"),
            Self::CloseBracket => f.write_str("closing bracket"),
        }
    }
}

/// A single token with its kind, text, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Whether this token is the given reserved word.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}
