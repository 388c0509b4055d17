//! Pretty-printer that serializes a program back into canonical text.
//!
//! One top-level statement per line, single spaces around operators.

use std::fmt::Write as _;

use crate::ast::{Assignment, Comparison, Conditional, Expression, Program, Statement, Term};

/// Format a `Program` into source text.
///
/// Then-branch statements are joined by `; ` with no delimiter
/// before `else`; the conditional's own `;` ends the line.
#[must_use]
pub fn format(program: &Program) -> String {
    let mut out = String::new();

    for statement in &program.statements {
        format_statement(&mut out, statement);
        out.push_str(";\n");
    }

    out
}

fn format_statement(out: &mut String, statement: &Statement) {
    match statement {
        Statement::Assignment(assignment) => format_assignment(out, assignment),
        Statement::Conditional(conditional) => format_conditional(out, conditional),
    }
}

fn format_statements(out: &mut String, statements: &[Statement]) {
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        format_statement(out, statement);
    }
}

fn format_assignment(out: &mut String, assignment: &Assignment) {
    out.push_str(&assignment.target);
    out.push_str(" := ");
    format_expression(out, &assignment.value);
}

fn format_expression(out: &mut String, expression: &Expression) {
    for (i, term) in expression.terms.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match term {
            Term::Operand(operand) => out.push_str(operand.text()),
            Term::Operator(op) => out.push_str(op.as_str()),
            Term::Group(bracket, inner) => {
                out.push(bracket.open());
                format_expression(out, inner);
                out.push(bracket.close());
            }
        }
    }
}

fn format_comparison(out: &mut String, comparison: &Comparison) {
    let _ = write!(
        out,
        "{} {} {}",
        comparison.left.text(),
        comparison.op.as_str(),
        comparison.right.text()
    );
}

fn format_conditional(out: &mut String, conditional: &Conditional) {
    out.push_str("if ");
    format_comparison(out, &conditional.condition);
    out.push_str(" then ");
    format_statements(out, &conditional.then_branch);

    if let Some(else_branch) = &conditional.else_branch {
        out.push_str(" else ");
        format_statements(out, else_branch);
    }
}
