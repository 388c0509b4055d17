//! Demonstrate the three error channels: brackets, lexing, parsing.

fn describe(input: &str) {
    println!("input: {input}");
    match condlang_rs::parse_str(input) {
        Ok(tree) => println!("  parsed OK ({} statement(s))", tree.children.len()),
        Err(condlang_rs::Error::Brackets(e)) => {
            println!("  bracket error: {e}");
            println!("  kind: {:?}", e.kind);
        }
        Err(condlang_rs::Error::Lex(errors)) => {
            println!("  {} lexical error(s):", errors.0.len());
            for e in &errors.0 {
                println!("    {e}");
            }
        }
        Err(condlang_rs::Error::Parse(e)) => {
            println!("  parse error: {e}");
            println!("  kind: {:?}", e.kind);
        }
    }
    println!();
}

fn main() {
    describe("x := (a + b;");
    describe("x := a # b @ c;");
    describe("x := ;");
    describe("if a < b then x := y");
}
