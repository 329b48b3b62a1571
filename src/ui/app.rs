//! Main TUI application state and logic

use crate::parser::ast::{Program, Statement};
use crate::parser::{Lexer, ParseError, Parser, Token};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Statements,
    Tree,
    Errors,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> tokens -> statements -> tree -> errors)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Statements,
            FocusedPane::Statements => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Errors,
            FocusedPane::Errors => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Errors,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Statements => FocusedPane::Tokens,
            FocusedPane::Tree => FocusedPane::Statements,
            FocusedPane::Errors => FocusedPane::Tree,
        }
    }
}

/// The main application state
pub struct App {
    /// The source text being inspected
    pub source: String,

    /// Full token stream, including the final EOF
    pub tokens: Vec<Token>,

    pub program: Program,
    pub errors: Vec<ParseError>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index of the selected statement
    pub selected: usize,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub statements_scroll: usize,
    pub tree_scroll: usize,
    pub errors_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Lex and parse `source` and build the viewer state for it
    pub fn new(source: String) -> Self {
        let tokens = Lexer::new(&source).tokenize();
        let mut parser = Parser::from_source(&source);
        let program = parser.parse_program();
        let errors = parser.errors().to_vec();

        let status_message = if errors.is_empty() {
            String::from("Parsed cleanly")
        } else {
            format!("Parsed with {} error(s)", errors.len())
        };

        App {
            source,
            tokens,
            program,
            errors,
            focused_pane: FocusedPane::Statements,
            selected: 0,
            source_scroll: 0,
            tokens_scroll: 0,
            statements_scroll: 0,
            tree_scroll: 0,
            errors_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    pub fn selected_statement(&self) -> Option<&Statement> {
        self.program.statements.get(self.selected)
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(pane_area);

        // Left column: Source (top) | Tokens (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        // Right column: Statements | Syntax Tree | Errors
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(40),
                Constraint::Percentage(25),
            ])
            .split(columns[1]);

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            left_rows[1],
            &self.tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_statements_pane(
            frame,
            right_rows[0],
            &self.program.statements,
            self.selected,
            self.focused_pane == FocusedPane::Statements,
            &mut self.statements_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            right_rows[1],
            self.program.statements.get(self.selected),
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_errors_pane(
            frame,
            right_rows[2],
            &self.errors,
            self.focused_pane == FocusedPane::Errors,
            &mut self.errors_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.program.statements.len(),
            self.errors.len(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => self.select_previous(),
            KeyCode::Right => self.select_next(),
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Statements {
                    self.select_previous();
                } else {
                    let scroll = self.focused_scroll();
                    *scroll = scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Statements {
                    self.select_next();
                } else {
                    // Panes clamp on the next render
                    let scroll = self.focused_scroll();
                    *scroll = scroll.saturating_add(1);
                }
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Statements => &mut self.statements_scroll,
            FocusedPane::Tree => &mut self.tree_scroll,
            FocusedPane::Errors => &mut self.errors_scroll,
        }
    }

    fn select_next(&mut self) {
        let total = self.program.statements.len();
        if self.selected + 1 < total {
            self.selected += 1;
            self.tree_scroll = 0;
            self.status_message = format!("Statement {}/{}", self.selected + 1, total);
        } else {
            self.status_message = "Last statement".to_string();
        }
    }

    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.tree_scroll = 0;
            self.status_message = format!(
                "Statement {}/{}",
                self.selected + 1,
                self.program.statements.len()
            );
        } else {
            self.status_message = "First statement".to_string();
        }
    }
}
