//! Parse a source string and print its token stream and syntax tree.

fn main() {
    let input = "\
b := (a + b) * (c - d);
if a < b then x := x else x := y;
";

    if let Err(e) = condlang_rs::check_brackets(input) {
        eprintln!("{e}");
        return;
    }

    for item in condlang_rs::lex(input) {
        match item {
            Ok(token) => {
                let kind = token.kind.to_string();
                println!("{:>3}  {kind:<20} {}", token.span.offset, token.text);
            }
            Err(e) => println!("error: {e}"),
        }
    }

    match condlang_rs::analyze(condlang_rs::lex(input)) {
        Ok(tree) => print!("\n{}", condlang_rs::render(&tree)),
        Err(e) => eprintln!("{e}"),
    }
}
