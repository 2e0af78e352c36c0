use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use monkey::{
    display_error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Print every token of each line
    Tokens,
    /// Print the parsed program of each line, or its syntax errors
    Ast,
}

#[derive(Parser, Debug)]
#[command(name = "monkey")]
#[command(about = "Read lines of Monkey source and show how they lex or parse", long_about = None)]
struct Cli {
    /// What to print for each line
    #[arg(long, value_enum, default_value_t = Mode::Ast)]
    mode: Mode,

    /// Prompt shown before each line
    #[arg(long, default_value = ">> ")]
    prompt: String,
}

fn main() -> io::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    start(io::stdin().lock(), io::stdout().lock(), &cli)
}

fn start(input: impl BufRead, mut output: impl Write, cli: &Cli) -> io::Result<()> {
    write!(output, "{}", cli.prompt)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;

        match cli.mode {
            Mode::Tokens => print_tokens(&line, &mut output)?,
            Mode::Ast => print_program(&line, &mut output)?,
        }

        write!(output, "{}", cli.prompt)?;
        output.flush()?;
    }

    writeln!(output)
}

fn print_tokens(line: &str, output: &mut impl Write) -> io::Result<()> {
    for token in Lexer::new(line).take_while(|token| token.kind != TokenKind::EOF) {
        writeln!(output, "{} {:?}", token.kind, token.literal)?;
    }
    Ok(())
}

fn print_program(line: &str, output: &mut impl Write) -> io::Result<()> {
    let (parser, program) = parse(line);

    if parser.errors().is_empty() {
        return writeln!(output, "{}", program);
    }

    for error in parser.errors() {
        write!(output, "{}", display_error(error, line))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mode: Mode, input: &str) -> String {
        let cli = Cli {
            mode,
            prompt: String::from("> "),
        };
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output, &cli).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_token_mode() {
        let output = run(Mode::Tokens, "let x = 5;\n");
        assert_eq!(
            output,
            "> LET \"let\"\nIDENT \"x\"\nASSIGN \"=\"\nINT \"5\"\nSEMICOLON \";\"\n> \n"
        );
    }

    #[test]
    fn test_ast_mode() {
        let output = run(Mode::Ast, "let x = 1 + 2 * 3\n-a\n");
        assert_eq!(output, "> let x = (1 + (2 * 3));\n> (-a)\n> \n");
    }

    #[test]
    fn test_ast_mode_reports_errors() {
        let output = run(Mode::Ast, "let x 5;\n");
        assert!(output.contains("Error: ExpectedAssign (expected next token to be ASSIGN, got INT instead)"));
        assert!(output.contains("1 | let x 5;"));
        assert!(output.contains("  | ------^"));
    }
}
