//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source text with keyword/number/operator highlighting
//! - [`tokens`]: The token stream produced by the lexer
//! - [`statements`]: Canonical render of each parsed statement, and the
//!   node tree of the selected one
//! - [`errors`]: Parser errors
//! - [`status`]: Status bar with counts and keybindings
//!
//! Each pane module exports a `render_*` function taking the frame, its area,
//! the data to show, whether it is focused, and its scroll offset.

pub mod errors;
pub mod source;
pub mod statements;
pub mod status;
pub mod tokens;

pub use errors::render_errors_pane;
pub use source::render_source_pane;
pub use statements::{render_statements_pane, render_tree_pane};
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered, titled block styled for the focus state
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Number of content rows inside a bordered pane, at least 1
pub(crate) fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        *offset = (*offset).min(total_items - visible_height);
    } else {
        *offset = 0;
    }
}

/// Scroll so that `index` is inside the visible window
pub(crate) fn scroll_into_view(offset: &mut usize, index: usize, visible_height: usize) {
    if index < *offset {
        *offset = index;
    } else if index >= *offset + visible_height {
        *offset = index + 1 - visible_height;
    }
}
