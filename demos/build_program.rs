//! Build a program with the builder API and print it.

use condlang_rs::{Assignment, Bracket, Comparison, Conditional, Expression, Program};

fn main() {
    let program = Program::new()
        .assign(
            "b",
            Expression::value(Expression::value("a").plus("b"))
                .times(Expression::value("c").minus("d")),
        )
        .assign(
            "r",
            Expression::group(Bracket::Square, Expression::value("b").over("2.5e1")),
        )
        .statement(
            Conditional::new(Comparison::less("b", "r"))
                .then(Assignment::new("m", "b"))
                .otherwise(Assignment::new("m", "r")),
        );

    let source = condlang_rs::format(&program);
    println!("{source}");

    let tree = condlang_rs::parse_str(&source).expect("formatted source parses");
    println!("{}", condlang_rs::render(&tree));
}
