/// Complete program: a sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// One statement, terminated by `;` in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `identifier := expression`.
    Assignment(Assignment),
    /// `if comparison then ... [else ...]`.
    Conditional(Conditional),
}

/// Assignment of an expression to an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: String,
    pub value: Expression,
}

/// Conditional statement with an optional else branch.
///
/// The then branch is never empty. An else branch, when present,
/// is never empty either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conditional {
    pub condition: Comparison,
    pub then_branch: Vec<Statement>,
    pub else_branch: Option<Vec<Statement>>,
}

/// Comparison of two operands: `a < b`, `a > b`, `a = b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub left: Operand,
    pub op: ComparisonOp,
    pub right: Operand,
}

/// Comparison sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Less,
    Greater,
    Equal,
}

/// Flat arithmetic expression, kept in source order.
///
/// Terms are never evaluated or reordered by precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub terms: Vec<Term>,
}

/// One element of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Operand(Operand),
    Operator(ArithmeticOp),
    /// Bracketed sub-expression, keeping its bracket family.
    Group(Bracket, Expression),
}

/// Arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Bracket family used to group a sub-expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `( ... )`.
    Round,
    /// `[ ... ]`.
    Square,
    /// `{ ... }`.
    Curly,
}

/// Operand preserving its exact source spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Identifier(String),
    Constant(String),
}

impl Operand {
    /// Return the spelling regardless of kind.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Identifier(s) | Self::Constant(s) => s,
        }
    }
}

impl ComparisonOp {
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Self::Less),
            ">" => Some(Self::Greater),
            "=" => Some(Self::Equal),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "=",
        }
    }
}

impl ArithmeticOp {
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl Bracket {
    /// Family of an opening bracket spelling.
    #[must_use]
    pub fn from_open(symbol: &str) -> Option<Self> {
        match symbol {
            "(" => Some(Self::Round),
            "[" => Some(Self::Square),
            "{" => Some(Self::Curly),
            _ => None,
        }
    }

    #[must_use]
    pub const fn open(self) -> char {
        match self {
            Self::Round => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    #[must_use]
    pub const fn close(self) -> char {
        match self {
            Self::Round => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }
}
