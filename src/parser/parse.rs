//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, token cursor helpers, and the main parse entry
//! point.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, cursor helpers, error collection and recovery
//! - `statements`: `let`, `return` and expression statements
//! - `expressions`: Pratt expression parsing and the prefix/infix registries
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! Rules report failures with `Result`; [`Parser::parse_program`] records the
//! error of a failed statement, skips ahead to the next statement boundary
//! and keeps going, so one pass reports every independent error.

use crate::parser::ast::*;
use crate::parser::expressions::{InfixParseFn, PrefixParseFn};
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use rustc_hash::FxHashMap;
use std::fmt;

/// Syntax errors recorded while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A rule required a specific token kind next and found another
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// The token cannot begin any expression
    NoPrefixParseFn { kind: TokenKind },

    /// Digits that do not fit a 64-bit signed integer
    InvalidInteger { literal: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => write!(
                f,
                "expected next token to be {}, got {} instead",
                expected, found
            ),
            ParseError::NoPrefixParseFn { kind } => {
                write!(f, "no prefix parse function for {} found", kind)
            }
            ParseError::InvalidInteger { literal } => {
                write!(f, "could not parse {:?} as integer", literal)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Pratt parser pulling tokens from a [`Lexer`] with one token of lookahead
pub struct Parser {
    lexer: Lexer,
    pub(crate) cur_token: Token,
    pub(crate) peek_token: Token,
    errors: Vec<ParseError>,
    /// Tokens pulled from the lexer so far
    tokens_read: usize,
    pub(crate) prefix_parse_fns: FxHashMap<TokenKind, PrefixParseFn>,
    pub(crate) infix_parse_fns: FxHashMap<TokenKind, InfixParseFn>,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::eof(),
            peek_token: Token::eof(),
            errors: Vec::new(),
            tokens_read: 0,
            prefix_parse_fns: FxHashMap::default(),
            infix_parse_fns: FxHashMap::default(),
        };
        parser.register_expression_rules();

        // Fill both cur_token and peek_token
        parser.next_token();
        parser.next_token();
        parser
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parse statements until end of input.
    ///
    /// Statements that fail to parse are left out of the program; their
    /// errors are available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            let start = self.tokens_read;
            match self.parse_statement() {
                Ok(stmt) => {
                    program.statements.push(stmt);
                    self.next_token();
                }
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize(self.tokens_read > start);
                }
            }
        }

        program
    }

    /// Errors recorded so far, in the order they were found
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Skip the rest of a failed statement.
    ///
    /// Stops just past the next `;`, or on the next `let`/`return`, or at
    /// end of input. A `let`/`return` the failed statement moved onto starts
    /// the next statement and is kept. Otherwise at least one token is
    /// consumed unless already at end of input.
    fn synchronize(&mut self, advanced: bool) {
        if advanced && matches!(self.cur_token.kind, TokenKind::Let | TokenKind::Return) {
            return;
        }
        if self.cur_token_is(TokenKind::Semicolon) {
            self.next_token();
            return;
        }

        loop {
            self.next_token();
            match self.cur_token.kind {
                TokenKind::Semicolon => {
                    self.next_token();
                    return;
                }
                TokenKind::Let | TokenKind::Return | TokenKind::Eof => return,
                _ => {}
            }
        }
    }

    // ===== Helper methods =====

    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.tokens_read += 1;
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub(crate) fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.is(kind)
    }

    pub(crate) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advance if the next token has the expected kind, else fail.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peek_token_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected: kind,
                found: self.peek_token.kind,
            })
        }
    }
}

/// Parse `source` in one go, returning the (possibly partial) program and
/// every recorded error.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();
    (program, parser.errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_source() {
        let (program, errors) = parse("");
        assert!(program.statements.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_errors_accumulate_across_statements() {
        let mut parser = Parser::from_source("let = 1; let x 5; let y = 10;");
        let program = parser.parse_program();

        assert_eq!(
            parser.errors(),
            &[
                ParseError::UnexpectedToken {
                    expected: TokenKind::Ident,
                    found: TokenKind::Assign,
                },
                ParseError::UnexpectedToken {
                    expected: TokenKind::Assign,
                    found: TokenKind::Int,
                },
            ]
        );
        assert_eq!(program.statements.len(), 1);
        assert_eq!(program.render(), "let y = 10;");
    }

    #[test]
    fn test_recovery_stops_at_statement_keyword() {
        // No semicolon after the broken let; recovery must not swallow `return`
        let (program, errors) = parse("let 5 return x;");
        assert_eq!(errors.len(), 1);
        assert_eq!(program.render(), "return x;");
    }

    #[test]
    fn test_recovery_keeps_statement_starting_at_failed_token() {
        let (program, errors) = parse("x + let y = 1; z;");
        assert_eq!(
            errors,
            vec![ParseError::NoPrefixParseFn {
                kind: TokenKind::Let
            }]
        );
        assert_eq!(program.render(), "let y = 1;z");

        let (program, errors) = parse("let x = return 5;");
        assert_eq!(
            errors,
            vec![ParseError::NoPrefixParseFn {
                kind: TokenKind::Return
            }]
        );
        assert_eq!(program.render(), "return 5;");
    }

    #[test]
    fn test_recovery_at_end_of_input() {
        let (program, errors) = parse("let x =");
        assert!(program.statements.is_empty());
        assert_eq!(
            errors,
            vec![ParseError::NoPrefixParseFn {
                kind: TokenKind::Eof
            }]
        );
    }

    #[test]
    fn test_error_messages() {
        let unexpected = ParseError::UnexpectedToken {
            expected: TokenKind::Assign,
            found: TokenKind::Int,
        };
        assert_eq!(
            unexpected.to_string(),
            "expected next token to be =, got INT instead"
        );
        assert_eq!(
            ParseError::NoPrefixParseFn {
                kind: TokenKind::Semicolon
            }
            .to_string(),
            "no prefix parse function for ; found"
        );
        assert_eq!(
            ParseError::InvalidInteger {
                literal: "99999999999999999999".to_string()
            }
            .to_string(),
            "could not parse \"99999999999999999999\" as integer"
        );
    }

    #[test]
    fn test_parse_program_twice_yields_nothing_new() {
        let mut parser = Parser::from_source("x;");
        assert_eq!(parser.parse_program().statements.len(), 1);
        assert!(parser.parse_program().statements.is_empty());
        assert!(parser.errors().is_empty());
    }
}
