//! # Introduction
//!
//! simian is the front-end of a small interpreted language: it turns source
//! text into tokens, and tokens into an abstract syntax tree whose nodes
//! render back to a canonical, fully parenthesized form.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → canonical render / viewer
//! ```
//!
//! 1. [`parser`]: the lexer, the Pratt parser, and the AST model.
//! 2. [`repl`]: a line-at-a-time front-end that prints tokens or parses.
//! 3. [`ui`]: ratatui-based inspector; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use simian::parser::{parse, Node};
//!
//! let (program, errors) = parse("3 + 4 * 5 == 3 * 1 + 4 * 5");
//! assert!(errors.is_empty());
//! assert_eq!(program.render(), "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))");
//! ```

pub mod parser;
pub mod repl;
pub mod ui;
