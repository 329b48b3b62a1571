//! Line-oriented interactive front-end
//!
//! Reads one line at a time, writes a prompt before each read, and stops at
//! the end of the input stream. Every line is handled by a fresh lexer (and
//! parser, in [`ReplMode::Parse`]); nothing carries over between lines.

use crate::parser::{parse, Lexer, Token};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = ">> ";

/// What the REPL does with each line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReplMode {
    /// Print every token of the line
    #[default]
    Tokens,
    /// Parse the line and print its canonical render or the parser errors
    Parse,
}

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub mode: ReplMode,
    /// Style output with terminal colors
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: PROMPT.to_string(),
            mode: ReplMode::default(),
            color: true,
        }
    }
}

/// Run the REPL until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &ReplConfig,
) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match config.mode {
            ReplMode::Tokens => print_tokens(&mut output, &line, config.color)?,
            ReplMode::Parse => print_program(&mut output, &line, config.color)?,
        }
    }
}

fn print_tokens<W: Write>(output: &mut W, line: &str, color: bool) -> io::Result<()> {
    for token in Lexer::new(line) {
        writeln!(output, "{}", format_token(&token, color))?;
    }
    Ok(())
}

fn print_program<W: Write>(output: &mut W, line: &str, color: bool) -> io::Result<()> {
    let (program, errors) = parse(line);

    if errors.is_empty() {
        return writeln!(output, "{}", program);
    }

    if color {
        writeln!(output, "{}", "parser errors:".red().bold())?;
    } else {
        writeln!(output, "parser errors:")?;
    }
    for err in errors {
        writeln!(output, "\t{}", err)?;
    }
    Ok(())
}

/// `{kind: IDENT, literal: "x"}`, with the kind highlighted when `color` is set.
pub fn format_token(token: &Token, color: bool) -> String {
    if color {
        format!(
            "{{kind: {}, literal: {}}}",
            token.kind.to_string().cyan(),
            format!("{:?}", token.literal).yellow()
        )
    } else {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, mode: ReplMode) -> String {
        let config = ReplConfig {
            mode,
            color: false,
            ..ReplConfig::default()
        };
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output, &config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_token_mode_prints_each_token() {
        let output = run("let x = 5;\n", ReplMode::Tokens);
        assert_eq!(
            output,
            concat!(
                ">> {kind: LET, literal: \"let\"}\n",
                "{kind: IDENT, literal: \"x\"}\n",
                "{kind: =, literal: \"=\"}\n",
                "{kind: INT, literal: \"5\"}\n",
                "{kind: ;, literal: \";\"}\n",
                ">> "
            )
        );
    }

    #[test]
    fn test_empty_input_prints_single_prompt() {
        assert_eq!(run("", ReplMode::Tokens), ">> ");
    }

    #[test]
    fn test_each_line_is_independent() {
        let output = run("a\nb\n", ReplMode::Tokens);
        assert_eq!(
            output,
            ">> {kind: IDENT, literal: \"a\"}\n>> {kind: IDENT, literal: \"b\"}\n>> "
        );
    }

    #[test]
    fn test_parse_mode_renders_program() {
        let output = run("1 + 2 * 3\n", ReplMode::Parse);
        assert_eq!(output, ">> (1 + (2 * 3))\n>> ");
    }

    #[test]
    fn test_parse_mode_lists_errors() {
        let output = run("let x 5;\n", ReplMode::Parse);
        assert_eq!(
            output,
            ">> parser errors:\n\texpected next token to be =, got INT instead\n>> "
        );
    }

    #[test]
    fn test_custom_prompt() {
        let config = ReplConfig {
            prompt: "? ".to_string(),
            color: false,
            ..ReplConfig::default()
        };
        let mut output = Vec::new();
        start("x\n".as_bytes(), &mut output, &config).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "? {kind: IDENT, literal: \"x\"}\n? "
        );
    }
}
