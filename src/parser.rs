use std::fmt;

use tracing::debug;

use crate::ast::{
    ArithmeticOp, Assignment, Bracket, Comparison, ComparisonOp, Conditional, Expression, Operand,
    Program, Statement, Term,
};
use crate::lexer::{LexError, LexErrors};
use crate::token::{Keyword, Span, Token, TokenKind};
use crate::tree::Node;

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The token stream carried lexical errors; syntax analysis never ran.
    Lexical(LexErrors),
    /// Statement not followed by `;`.
    UnterminatedStatement,
    /// `;` with nothing before it.
    EmptyStatement,
    /// Assignment with fewer than three tokens.
    IncompleteStatement,
    /// Assignment target is not an identifier.
    ExpectedIdentifier { found: String },
    /// Second token of an assignment is not `:=`.
    ExpectedAssign { found: String },
    /// Expected an identifier, constant or bracketed group.
    ExpectedOperand { found: Option<String> },
    /// Two operands in a row.
    ExpectedOperator { found: String },
    /// Token that has no place in an expression.
    UnexpectedToken { found: String },
    /// Opening bracket without a matching close in the statement.
    UnclosedBracket { open: String },
    /// Group closed by a bracket of another family.
    MismatchedBracket { open: String, close: String },
    /// Conditional block not starting with the expected keyword.
    ExpectedKeyword { expected: Keyword, found: String },
    /// Conditional without `then`.
    MissingThen,
    /// `else` before `then`.
    MisplacedElse,
    /// Condition is not exactly `operand sign operand`.
    InvalidComparison,
    /// Middle token of a condition is not `<`, `>` or `=`.
    ExpectedComparison { found: String },
    /// Nothing follows `then` or `else`.
    EmptyBranch(Keyword),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical(errors) => {
                write!(f, "lexical analysis found errors:\n{errors}")
            }
            Self::UnterminatedStatement => {
                write!(f, "statement is not terminated by ';'")
            }
            Self::EmptyStatement => write!(f, "empty statement"),
            Self::IncompleteStatement => write!(f, "incomplete statement"),
            Self::ExpectedIdentifier { found } => {
                write!(f, "assignment target must be an identifier, got '{found}'")
            }
            Self::ExpectedAssign { found } => {
                write!(f, "expected ':=', got '{found}'")
            }
            Self::ExpectedOperand { found: None } => {
                write!(f, "expected operand")
            }
            Self::ExpectedOperand { found: Some(t) } => {
                write!(f, "expected operand, got '{t}'")
            }
            Self::ExpectedOperator { found } => {
                write!(f, "expected arithmetic operator, got '{found}'")
            }
            Self::UnexpectedToken { found } => {
                write!(f, "unexpected '{found}' in expression")
            }
            Self::UnclosedBracket { open } => {
                write!(f, "'{open}' is not closed within the statement")
            }
            Self::MismatchedBracket { open, close } => {
                write!(f, "'{close}' cannot close '{open}'")
            }
            Self::ExpectedKeyword { expected, found } => {
                write!(f, "expected '{expected}', got '{found}'")
            }
            Self::MissingThen => {
                write!(f, "condition must be followed by 'then'")
            }
            Self::MisplacedElse => write!(f, "'else' before 'then'"),
            Self::InvalidComparison => {
                write!(f, "condition must compare exactly two operands")
            }
            Self::ExpectedComparison { found } => {
                write!(f, "expected comparison sign, got '{found}'")
            }
            Self::EmptyBranch(keyword) => {
                write!(f, "no statement after '{keyword}'")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}{}", location(.kind, *.span))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Position of the offending token, when one exists. For a
    /// lexical pre-check failure, the position of the first lexical
    /// error.
    pub span: Option<Span>,
}

/// Lexical messages already carry their own positions.
fn location(kind: &ParseErrorKind, span: Option<Span>) -> String {
    match (kind, span) {
        (ParseErrorKind::Lexical(_), _) | (_, None) => String::new(),
        (_, Some(span)) => format!(" at {span}"),
    }
}

impl ParseError {
    const fn at(kind: ParseErrorKind, span: Span) -> Self {
        Self {
            kind,
            span: Some(span),
        }
    }
}

/// Analyze a lexer result stream into a syntax tree.
///
/// Refuses to run when the stream holds any lexical error: all of
/// them are reported together instead.
///
/// # Errors
///
/// Returns `ParseError` on the first grammar violation, or with
/// `ParseErrorKind::Lexical` when lexing failed.
pub fn analyze<I>(stream: I) -> Result<Node, ParseError>
where
    I: IntoIterator<Item = Result<Token, LexError>>,
{
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for item in stream {
        match item {
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }

    if !errors.is_empty() {
        debug!(count = errors.len(), "refusing syntax analysis");
        let span = errors.first().map(|err| err.span);
        return Err(ParseError {
            kind: ParseErrorKind::Lexical(LexErrors(errors)),
            span,
        });
    }

    parse(&tokens)
}

/// Parse a clean token slice into a syntax tree.
///
/// # Errors
///
/// Returns `ParseError` on the first grammar violation.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    parse_program(tokens).map(|program| Node::from(&program))
}

/// Parse a clean token slice into a typed `Program`.
///
/// # Errors
///
/// Returns `ParseError` on the first grammar violation.
pub fn parse_program(tokens: &[Token]) -> Result<Program, ParseError> {
    let statements = parse_sequence(tokens, Termination::Required)?;
    Ok(Program { statements })
}

/// How the last statement of a range may end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Termination {
    /// Every statement needs its own `;`.
    Required,
    /// The range boundary (an `else`, or the end of an enclosing
    /// branch) stands in for the final `;`.
    Implied,
}

const fn is_delimiter(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Delimiter)
}

const fn is_any_keyword(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Keyword(_))
}

fn parse_sequence(
    mut tokens: &[Token],
    termination: Termination,
) -> Result<Vec<Statement>, ParseError> {
    let mut statements = Vec::new();

    while let Some(first) = tokens.first() {
        let end = match tokens.iter().position(is_delimiter) {
            Some(index) => index,
            None if termination == Termination::Implied => tokens.len(),
            None => {
                return Err(ParseError::at(
                    ParseErrorKind::UnterminatedStatement,
                    first.span,
                ));
            }
        };

        let head = &tokens[..end];
        if head.is_empty() {
            return Err(ParseError::at(ParseErrorKind::EmptyStatement, first.span));
        }

        if head.iter().any(is_any_keyword) {
            let block = locate_conditional_block(tokens);
            debug!(
                offset = first.span.offset,
                tokens = block.len(),
                "conditional statement"
            );
            let conditional = parse_conditional(block, termination)?;
            statements.push(Statement::Conditional(conditional));
            tokens = &tokens[block.len()..];
        } else {
            debug!(offset = first.span.offset, "assignment statement");
            statements.push(Statement::Assignment(parse_assignment(head)?));
            tokens = &tokens[(end + 1).min(tokens.len())..];
        }
    }

    Ok(statements)
}

/// Extent of the conditional starting at `tokens[0]`.
///
/// With an `else` anywhere in the range, the block runs through the
/// first `;` after the last `else`; otherwise through the first `;`.
/// Without such a `;` the block takes the rest of the range.
fn locate_conditional_block(tokens: &[Token]) -> &[Token] {
    let from = tokens
        .iter()
        .rposition(|t| t.is_keyword(Keyword::Else))
        .map_or(0, |index| index + 1);

    tokens[from..]
        .iter()
        .position(is_delimiter)
        .map_or(tokens, |index| &tokens[..=from + index])
}

fn parse_conditional(block: &[Token], termination: Termination) -> Result<Conditional, ParseError> {
    let first = &block[0];
    if !first.is_keyword(Keyword::If) {
        return Err(ParseError::at(
            ParseErrorKind::ExpectedKeyword {
                expected: Keyword::If,
                found: first.text.clone(),
            },
            first.span,
        ));
    }

    let then_index = block
        .iter()
        .position(|t| t.is_keyword(Keyword::Then))
        .ok_or_else(|| ParseError::at(ParseErrorKind::MissingThen, first.span))?;

    let else_index = block.iter().rposition(|t| t.is_keyword(Keyword::Else));
    if let Some(index) = else_index.filter(|&index| index < then_index) {
        return Err(ParseError::at(
            ParseErrorKind::MisplacedElse,
            block[index].span,
        ));
    }

    let condition = parse_comparison(&block[1..then_index], first)?;
    let then_keyword = (Keyword::Then, block[then_index].span);

    match else_index {
        Some(else_index) => {
            let else_keyword = (Keyword::Else, block[else_index].span);
            let then_branch = parse_branch(
                &block[then_index + 1..else_index],
                then_keyword,
                Termination::Implied,
            )?;
            let else_branch = parse_branch(&block[else_index + 1..], else_keyword, termination)?;
            Ok(Conditional {
                condition,
                then_branch,
                else_branch: Some(else_branch),
            })
        }
        None => {
            let then_branch = parse_branch(&block[then_index + 1..], then_keyword, termination)?;
            Ok(Conditional {
                condition,
                then_branch,
                else_branch: None,
            })
        }
    }
}

fn parse_branch(
    tokens: &[Token],
    keyword: (Keyword, Span),
    termination: Termination,
) -> Result<Vec<Statement>, ParseError> {
    if tokens.first().is_none_or(is_delimiter) {
        let (keyword, span) = keyword;
        return Err(ParseError::at(ParseErrorKind::EmptyBranch(keyword), span));
    }
    parse_sequence(tokens, termination)
}

fn parse_comparison(tokens: &[Token], if_token: &Token) -> Result<Comparison, ParseError> {
    let [left, sign, right] = tokens else {
        let span = tokens.first().map_or(if_token.span, |t| t.span);
        return Err(ParseError::at(ParseErrorKind::InvalidComparison, span));
    };

    let left = comparison_operand(left)?;
    let op = if sign.kind == TokenKind::Comparison {
        ComparisonOp::from_symbol(&sign.text)
    } else {
        None
    };
    let Some(op) = op else {
        return Err(ParseError::at(
            ParseErrorKind::ExpectedComparison {
                found: sign.text.clone(),
            },
            sign.span,
        ));
    };
    let right = comparison_operand(right)?;

    Ok(Comparison { left, op, right })
}

fn comparison_operand(token: &Token) -> Result<Operand, ParseError> {
    to_operand(token).ok_or_else(|| {
        ParseError::at(
            ParseErrorKind::ExpectedOperand {
                found: Some(token.text.clone()),
            },
            token.span,
        )
    })
}

fn to_operand(token: &Token) -> Option<Operand> {
    match token.kind {
        TokenKind::Identifier => Some(Operand::Identifier(token.text.clone())),
        TokenKind::Constant => Some(Operand::Constant(token.text.clone())),
        _ => None,
    }
}

fn parse_assignment(tokens: &[Token]) -> Result<Assignment, ParseError> {
    let first = &tokens[0];
    if tokens.len() < 3 {
        return Err(ParseError::at(
            ParseErrorKind::IncompleteStatement,
            first.span,
        ));
    }

    let sign = &tokens[1];
    if sign.kind != TokenKind::Assign {
        return Err(ParseError::at(
            ParseErrorKind::ExpectedAssign {
                found: sign.text.clone(),
            },
            sign.span,
        ));
    }

    if first.kind != TokenKind::Identifier {
        return Err(ParseError::at(
            ParseErrorKind::ExpectedIdentifier {
                found: first.text.clone(),
            },
            first.span,
        ));
    }

    let value = parse_expression(&tokens[2..], sign.span)?;
    Ok(Assignment {
        target: first.text.clone(),
        value,
    })
}

/// Parse a flat expression: values separated by arithmetic
/// operators, where a bracketed group may also directly follow a
/// value. `anchor` locates the error for an empty range.
fn parse_expression(tokens: &[Token], anchor: Span) -> Result<Expression, ParseError> {
    let mut terms = Vec::new();
    let mut expect_value = true;
    let mut pos = 0;

    while pos < tokens.len() {
        let token = &tokens[pos];
        match token.kind {
            TokenKind::Identifier | TokenKind::Constant if expect_value => {
                if let Some(operand) = to_operand(token) {
                    terms.push(Term::Operand(operand));
                }
                expect_value = false;
                pos += 1;
            }
            TokenKind::Identifier | TokenKind::Constant => {
                return Err(ParseError::at(
                    ParseErrorKind::ExpectedOperator {
                        found: token.text.clone(),
                    },
                    token.span,
                ));
            }
            TokenKind::Arithmetic if !expect_value => {
                if let Some(op) = ArithmeticOp::from_symbol(&token.text) {
                    terms.push(Term::Operator(op));
                }
                expect_value = true;
                pos += 1;
            }
            TokenKind::Arithmetic => {
                return Err(ParseError::at(
                    ParseErrorKind::ExpectedOperand {
                        found: Some(token.text.clone()),
                    },
                    token.span,
                ));
            }
            TokenKind::OpenBracket => {
                let close = matching_close(tokens, pos)?;
                let bracket = Bracket::from_open(&token.text).unwrap_or(Bracket::Round);
                let inner = parse_expression(&tokens[pos + 1..close], token.span)?;
                terms.push(Term::Group(bracket, inner));
                expect_value = false;
                pos = close + 1;
            }
            _ => {
                return Err(ParseError::at(
                    ParseErrorKind::UnexpectedToken {
                        found: token.text.clone(),
                    },
                    token.span,
                ));
            }
        }
    }

    if expect_value {
        let span = tokens.last().map_or(anchor, |t| t.span);
        return Err(ParseError::at(
            ParseErrorKind::ExpectedOperand { found: None },
            span,
        ));
    }

    Ok(Expression { terms })
}

/// Index of the bracket closing the one at `open_index`.
fn matching_close(tokens: &[Token], open_index: usize) -> Result<usize, ParseError> {
    let open = &tokens[open_index];
    let mut depth = 0usize;

    for (index, token) in tokens.iter().enumerate().skip(open_index) {
        match token.kind {
            TokenKind::OpenBracket => depth += 1,
            TokenKind::CloseBracket => {
                depth -= 1;
                if depth == 0 {
                    let expected = Bracket::from_open(&open.text).map(Bracket::close);
                    if token.text.chars().next() != expected {
                        return Err(ParseError::at(
                            ParseErrorKind::MismatchedBracket {
                                open: open.text.clone(),
                                close: token.text.clone(),
                            },
                            token.span,
                        ));
                    }
                    return Ok(index);
                }
            }
            _ => {}
        }
    }

    Err(ParseError::at(
        ParseErrorKind::UnclosedBracket {
            open: open.text.clone(),
        },
        open.span,
    ))
}
