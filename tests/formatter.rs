//! Formatter tests.

use condlang_rs::{
    ArithmeticOp, Assignment, Bracket, Comparison, ComparisonOp, Conditional, Expression, Operand,
    Program, Statement, Term, format,
};

fn ident(name: &str) -> Operand {
    Operand::Identifier(name.to_string())
}

#[test]
fn format_nested_conditional() {
    let inner = Conditional {
        condition: Comparison {
            left: ident("c"),
            op: ComparisonOp::Equal,
            right: Operand::Constant("0".to_string()),
        },
        then_branch: vec![Statement::Assignment(Assignment {
            target: "x".to_string(),
            value: Expression {
                terms: vec![Term::Operand(ident("y"))],
            },
        })],
        else_branch: None,
    };
    let program = Program {
        statements: vec![Statement::Conditional(Conditional {
            condition: Comparison {
                left: ident("a"),
                op: ComparisonOp::Less,
                right: ident("b"),
            },
            then_branch: vec![Statement::Conditional(inner)],
            else_branch: Some(vec![Statement::Assignment(Assignment {
                target: "x".to_string(),
                value: Expression {
                    terms: vec![
                        Term::Operand(ident("z")),
                        Term::Operator(ArithmeticOp::Div),
                        Term::Group(
                            Bracket::Curly,
                            Expression {
                                terms: vec![Term::Operand(Operand::Constant("2".to_string()))],
                            },
                        ),
                    ],
                },
            })]),
        })],
    };

    assert_eq!(
        format(&program),
        "if a < b then if c = 0 then x := y else x := z / {2};\n"
    );
}

#[test]
fn one_statement_per_line() {
    let program = Program::new().assign("a", "1").assign("b", "a");
    let out = format(&program);
    assert_eq!(out.lines().count(), 2);
    assert!(out.ends_with(";\n"));
}

#[test]
fn juxtaposed_group_keeps_space() {
    let program = Program {
        statements: vec![Statement::Assignment(Assignment {
            target: "x".to_string(),
            value: Expression {
                terms: vec![
                    Term::Operand(ident("f")),
                    Term::Group(
                        Bracket::Round,
                        Expression {
                            terms: vec![Term::Operand(ident("a"))],
                        },
                    ),
                ],
            },
        })],
    };
    assert_eq!(format(&program), "x := f (a);\n");
}
