// simian: tokenizer, parser and syntax tree viewer

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser as CliParser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use simian::parser::{Lexer, Parser};
use simian::repl::{self, ReplConfig, ReplMode, PROMPT};
use simian::ui::App;

#[derive(CliParser)]
#[command(name = "simian", version, about = "Tokenize, parse and inspect simian source")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read lines from stdin and print their tokens or parse trees
    Repl {
        #[arg(long, value_enum, default_value_t = ReplMode::Tokens)]
        mode: ReplMode,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Print every token of a file
    Tokens { path: PathBuf },
    /// Parse a file and print each statement's canonical form
    Parse { path: PathBuf },
    /// Open an interactive TUI viewer
    View { path: PathBuf },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Repl {
        mode: ReplMode::Tokens,
        no_color: false,
    }) {
        Command::Repl { mode, no_color } => {
            let config = ReplConfig {
                prompt: PROMPT.to_string(),
                mode,
                color: !no_color,
            };
            eprintln!("Welcome to simian! Type some code, Ctrl-D to exit.");
            repl::start(io::stdin().lock(), io::stdout(), &config)?;
        }
        Command::Tokens { path } => {
            let source = read_source(&path)?;
            for token in Lexer::new(&source).tokenize() {
                println!("{}", token);
            }
        }
        Command::Parse { path } => {
            let source = read_source(&path)?;
            eprintln!("Parsing {}...", path.display());

            let mut parser = Parser::from_source(&source);
            let program = parser.parse_program();
            for stmt in &program.statements {
                println!("{}", stmt);
            }

            if !parser.errors().is_empty() {
                for err in parser.errors() {
                    eprintln!("Parser error: {}", err);
                }
                std::process::exit(1);
            }
            eprintln!(
                "Parsed successfully. Found {} statements.",
                program.statements.len()
            );
        }
        Command::View { path } => {
            let source = read_source(&path)?;
            view(source)?;
        }
    }

    Ok(())
}

fn read_source(path: &Path) -> io::Result<String> {
    fs::read_to_string(path).map_err(|e| {
        eprintln!("Error: File '{}' could not be read", path.display());
        e
    })
}

fn view(source: String) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
