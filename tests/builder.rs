//! Builder API tests.

mod common;

use common::assert_program_roundtrip;
use condlang_rs::{
    Assignment, Bracket, Comparison, ComparisonOp, Conditional, Expression, Operand, Program,
    Statement, Term, format, parse_program_str,
};

#[test]
fn empty_program() {
    let program = Program::new();
    assert!(program.statements.is_empty());
    assert_eq!(Program::default(), program);
    assert_eq!(format(&program), "");
}

#[test]
fn build_expression_terms() {
    let expr = Expression::value("a").plus("1").times(Expression::value("b").minus("c"));
    assert_eq!(expr.terms.len(), 5);
    assert_eq!(expr.terms[0], Term::Operand(Operand::ident("a")));
    assert_eq!(expr.terms[2], Term::Operand(Operand::constant("1")));
    assert!(matches!(expr.terms[4], Term::Group(Bracket::Round, _)));
}

#[test]
fn build_comparisons() {
    assert_eq!(Comparison::less("a", "b").op, ComparisonOp::Less);
    assert_eq!(Comparison::greater("a", "b").op, ComparisonOp::Greater);
    let eq = Comparison::equal("x", "0");
    assert_eq!(eq.op, ComparisonOp::Equal);
    assert_eq!(eq.right, Operand::Constant("0".to_string()));
}

#[test]
fn otherwise_creates_else_branch() {
    let cond = Conditional::new(Comparison::less("a", "b")).then(Assignment::new("x", "1"));
    assert!(cond.else_branch.is_none());
    let cond = cond.otherwise(Assignment::new("x", "2"));
    assert_eq!(cond.else_branch.as_ref().map(Vec::len), Some(1));
}

#[test]
fn statement_from_parts() {
    let s: Statement = Assignment::new("x", "y").into();
    assert!(matches!(s, Statement::Assignment(_)));
    let s: Statement = Conditional::new(Comparison::less("a", "b")).into();
    assert!(matches!(s, Statement::Conditional(_)));
}

#[test]
fn built_programs_roundtrip() {
    let program = Program::new()
        .assign("total", Expression::value("price").times("1.2e0"))
        .assign(
            "avg",
            Expression::group(Bracket::Square, Expression::value("a").plus("b")).over("2"),
        )
        .statement(
            Conditional::new(Comparison::greater("total", "100"))
                .then(Assignment::new("discount", "10"))
                .then(Assignment::new("flag", "1"))
                .otherwise(Assignment::new("discount", "0")),
        );
    assert_program_roundtrip(&program);
}

#[test]
fn nested_then_conditional_roundtrips() {
    let program = Program::new().statement(
        Conditional::new(Comparison::less("a", "b"))
            .then(
                Conditional::new(Comparison::less("c", "d"))
                    .then(Assignment::new("x", "1"))
                    .otherwise(Assignment::new("x", "2")),
            )
            .otherwise(Assignment::new("x", "3")),
    );
    assert_program_roundtrip(&program);
}

#[test]
fn extra_else_statements_read_back_as_siblings() {
    let program = Program::new().statement(
        Conditional::new(Comparison::less("a", "b"))
            .then(Assignment::new("x", "1"))
            .otherwise(Assignment::new("y", "1"))
            .otherwise(Assignment::new("z", "1")),
    );
    let formatted = format(&program);
    assert_eq!(formatted, "if a < b then x := 1 else y := 1; z := 1;\n");

    let parsed = parse_program_str(&formatted).unwrap();
    assert_eq!(parsed.statements.len(), 2);
    let Statement::Conditional(cond) = &parsed.statements[0] else {
        panic!("expected a conditional");
    };
    assert_eq!(cond.else_branch.as_ref().map(Vec::len), Some(1));
    assert_eq!(parsed.statements[1], Statement::from(Assignment::new("z", "1")));
}

#[test]
fn else_less_then_branch_keeps_first_statement() {
    let program = Program::new().statement(
        Conditional::new(Comparison::equal("a", "0"))
            .then(Assignment::new("x", "1"))
            .then(Assignment::new("y", "2")),
    );
    let parsed = parse_program_str(&format(&program)).unwrap();
    assert_eq!(parsed.statements.len(), 2);
    let Statement::Conditional(cond) = &parsed.statements[0] else {
        panic!("expected a conditional");
    };
    assert_eq!(cond.then_branch, [Statement::from(Assignment::new("x", "1"))]);
}
