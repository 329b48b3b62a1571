//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! An inspector for one source file: the source text, its token stream, the
//! parsed statements with the node tree of the selected one, and the parser
//! errors, side by side.
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for each visible pane
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it from the source text and call
//! [`App::run`] with a terminal.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
