//! Source parser
//!
//! This module transforms simian source text into an Abstract Syntax Tree (AST):
//! - [`token`]: The closed token vocabulary
//! - [`lexer`]: Tokenization (source text → tokens, pulled one at a time)
//! - [`parse`]: The [`Parser`] and its error type
//! - [`expressions`]: Pratt expression parsing and operator precedence
//! - [`ast`]: AST node definitions and their canonical rendering
//!
//! # Language
//!
//! - Statements: `let <ident> = <expr>;`, `return [<expr>];`, `<expr>;`
//! - Expressions: identifiers, 64-bit integer literals, prefix `!`/`-`,
//!   infix `+ - * / < > == !=`
//!
//! # Parser Implementation
//!
//! Hand-written Pratt parser with per-instance prefix/infix rule tables.
//! Syntax errors are collected rather than aborting the parse.

pub mod ast;
pub mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;

pub use ast::{Node, Program};
pub use lexer::Lexer;
pub use parse::{parse, ParseError, Parser};
pub use token::{Token, TokenKind};
