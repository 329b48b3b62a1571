//! Parser error pane

use super::{clamp_scroll, pane_block, visible_height};
use crate::parser::ParseError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the parser errors pane
pub fn render_errors_pane(
    frame: &mut Frame,
    area: Rect,
    errors: &[ParseError],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Errors ({}) ", errors.len());
    let block = pane_block(&title, is_focused);

    if errors.is_empty() {
        let paragraph = Paragraph::new("(no errors)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.success));
        frame.render_widget(paragraph, area);
        return;
    }

    let height = visible_height(area);
    clamp_scroll(scroll_offset, errors.len(), height);

    let items: Vec<ListItem> = errors
        .iter()
        .skip(*scroll_offset)
        .take(height)
        .map(|err| ListItem::new(err.to_string()).style(Style::default().fg(DEFAULT_THEME.error)))
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
