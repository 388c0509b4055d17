//! CLI tool to check, tokenize, parse and format condlang sources.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: condlang <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  check   Check brackets and syntax of source file(s)");
        eprintln!("  tokens  Print the token stream, lexical errors inline");
        eprintln!("  tree    Parse and print the syntax tree");
        eprintln!("  fmt     Parse and print canonical source");
        eprintln!();
        eprintln!("Use - to read from standard input.");
        eprintln!("Set RUST_LOG=debug to trace statement classification.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  condlang check program.txt");
        eprintln!("  echo 'x := a + 1;' | condlang tree -");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if !matches!(command, "check" | "tokens" | "tree" | "fmt") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match read_source(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        let ok = match command {
            "check" => check(path, &content),
            "tokens" => print_tokens(path, &content),
            "tree" => match condlang_rs::parse_str(&content) {
                Ok(tree) => {
                    print!("{}", condlang_rs::render(&tree));
                    true
                }
                Err(e) => report(path, &e),
            },
            _ => match condlang_rs::parse_program_str(&content) {
                Ok(program) => {
                    print!("{}", condlang_rs::format(&program));
                    true
                }
                Err(e) => report(path, &e),
            },
        };

        had_error |= !ok;
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn read_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        fs::read_to_string(path)
    }
}

fn report(path: &str, error: &condlang_rs::Error) -> bool {
    eprintln!("{path}: {error}");
    false
}

/// Bracket check and syntax check are reported separately, so a bracket
/// problem does not hide a syntax problem.
fn check(path: &str, content: &str) -> bool {
    let brackets = condlang_rs::check_brackets(content);
    if let Err(e) = &brackets {
        eprintln!("{path}: {e}");
    }

    match condlang_rs::analyze(condlang_rs::lex(content)) {
        Ok(tree) => {
            eprintln!(
                "{path}: valid ({} statement(s), {} node(s))",
                tree.children.len(),
                tree.size()
            );
            brackets.is_ok()
        }
        Err(e) => {
            eprintln!("{path}: {e}");
            false
        }
    }
}

fn print_tokens(path: &str, content: &str) -> bool {
    let mut ok = true;
    for item in condlang_rs::lex(content) {
        match item {
            Ok(token) => {
                println!("{}\t{}\t{}", token.span.offset, token.kind, token.text);
            }
            Err(e) => {
                eprintln!("{path}: {e}");
                ok = false;
            }
        }
    }
    ok
}
