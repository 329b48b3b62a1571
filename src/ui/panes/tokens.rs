//! Token stream pane

use super::{clamp_scroll, pane_block, visible_height};
use crate::parser::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

fn kind_style(kind: TokenKind) -> Style {
    let color = match kind {
        TokenKind::Let | TokenKind::Return => DEFAULT_THEME.keyword,
        TokenKind::Int => DEFAULT_THEME.number,
        TokenKind::Ident => DEFAULT_THEME.fg,
        TokenKind::Illegal => DEFAULT_THEME.error,
        TokenKind::Eof => DEFAULT_THEME.comment,
        _ => DEFAULT_THEME.operator,
    };
    Style::default().fg(color)
}

/// Render the token list, one `index kind literal` row per token
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let height = visible_height(area);
    clamp_scroll(scroll_offset, tokens.len(), height);

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(height)
        .map(|(idx, token)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:4} ", idx),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!("{:<8}", token.kind.to_string()), kind_style(token.kind)),
                Span::styled(
                    format!("{:?}", token.literal),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ]))
        })
        .collect();

    let title = format!(" Tokens ({}) ", tokens.len());
    let list = List::new(items).block(pane_block(&title, is_focused));
    frame.render_widget(list, area);
}
