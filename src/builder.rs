use crate::ast::{
    ArithmeticOp, Assignment, Bracket, Comparison, ComparisonOp, Conditional, Expression, Operand,
    Program, Statement, Term,
};

impl Program {
    /// Create a new empty program.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Append a statement.
    #[must_use]
    pub fn statement(mut self, statement: impl Into<Statement>) -> Self {
        self.statements.push(statement.into());
        self
    }

    /// Append `target := value`.
    #[must_use]
    pub fn assign(self, target: &str, value: impl Into<Expression>) -> Self {
        self.statement(Assignment::new(target, value))
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl Assignment {
    #[must_use]
    pub fn new(target: &str, value: impl Into<Expression>) -> Self {
        Self {
            target: target.to_string(),
            value: value.into(),
        }
    }
}

impl Operand {
    #[must_use]
    pub fn ident(name: &str) -> Self {
        Self::Identifier(name.to_string())
    }

    #[must_use]
    pub fn constant(text: &str) -> Self {
        Self::Constant(text.to_string())
    }
}

/// Spellings starting with a digit are constants, anything else an
/// identifier.
impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        if text.starts_with(|c: char| c.is_ascii_digit()) {
            Self::constant(text)
        } else {
            Self::ident(text)
        }
    }
}

impl From<Operand> for Term {
    fn from(operand: Operand) -> Self {
        Self::Operand(operand)
    }
}

impl From<&str> for Term {
    fn from(text: &str) -> Self {
        Self::Operand(Operand::from(text))
    }
}

/// An expression used as a term becomes a round-bracket group.
impl From<Expression> for Term {
    fn from(expression: Expression) -> Self {
        Self::Group(Bracket::Round, expression)
    }
}

impl From<&str> for Expression {
    fn from(text: &str) -> Self {
        Self::value(text)
    }
}

impl From<Operand> for Expression {
    fn from(operand: Operand) -> Self {
        Self::value(operand)
    }
}

impl Expression {
    /// Start an expression with one value.
    #[must_use]
    pub fn value(first: impl Into<Term>) -> Self {
        Self {
            terms: vec![first.into()],
        }
    }

    /// Start an expression with a bracketed group of the given family.
    #[must_use]
    pub fn group(bracket: Bracket, inner: Self) -> Self {
        Self {
            terms: vec![Term::Group(bracket, inner)],
        }
    }

    /// Append an operator and the value following it.
    #[must_use]
    pub fn then(mut self, op: ArithmeticOp, value: impl Into<Term>) -> Self {
        self.terms.push(Term::Operator(op));
        self.terms.push(value.into());
        self
    }

    #[must_use]
    pub fn plus(self, value: impl Into<Term>) -> Self {
        self.then(ArithmeticOp::Add, value)
    }

    #[must_use]
    pub fn minus(self, value: impl Into<Term>) -> Self {
        self.then(ArithmeticOp::Sub, value)
    }

    #[must_use]
    pub fn times(self, value: impl Into<Term>) -> Self {
        self.then(ArithmeticOp::Mul, value)
    }

    #[must_use]
    pub fn over(self, value: impl Into<Term>) -> Self {
        self.then(ArithmeticOp::Div, value)
    }
}

impl Comparison {
    #[must_use]
    pub fn new(left: impl Into<Operand>, op: ComparisonOp, right: impl Into<Operand>) -> Self {
        Self {
            left: left.into(),
            op,
            right: right.into(),
        }
    }

    #[must_use]
    pub fn less(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::new(left, ComparisonOp::Less, right)
    }

    #[must_use]
    pub fn greater(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::new(left, ComparisonOp::Greater, right)
    }

    #[must_use]
    pub fn equal(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::new(left, ComparisonOp::Equal, right)
    }
}

impl Conditional {
    /// Create a conditional with empty branches. Add at least one
    /// statement with [`Conditional::then`] before formatting it.
    #[must_use]
    pub const fn new(condition: Comparison) -> Self {
        Self {
            condition,
            then_branch: Vec::new(),
            else_branch: None,
        }
    }

    /// Append a statement to the then branch.
    ///
    /// A conditional without an else branch is read back from source
    /// only up to its first `;`, so [`format`](crate::format) followed
    /// by parsing keeps just the first statement of such a then branch.
    #[must_use]
    pub fn then(mut self, statement: impl Into<Statement>) -> Self {
        self.then_branch.push(statement.into());
        self
    }

    /// Append a statement to the else branch, creating it if needed.
    ///
    /// Source text ends an else branch at the first `;` after the last
    /// `else`. Once formatted, statements after the first one in this
    /// branch parse back as siblings of the conditional.
    #[must_use]
    pub fn otherwise(mut self, statement: impl Into<Statement>) -> Self {
        self.else_branch
            .get_or_insert_with(Vec::new)
            .push(statement.into());
        self
    }
}

impl From<Assignment> for Statement {
    fn from(assignment: Assignment) -> Self {
        Self::Assignment(assignment)
    }
}

impl From<Conditional> for Statement {
    fn from(conditional: Conditional) -> Self {
        Self::Conditional(conditional)
    }
}
