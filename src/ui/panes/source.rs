//! Source text pane with line numbers and syntax highlighting

use super::{clamp_scroll, pane_block, visible_height};
use crate::parser::TokenKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Highlight one line: keywords, integer runs, and operator characters.
fn highlight_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut word = String::new();

    for c in line.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            // A digit right after letters starts a new run, as in the lexer
            if !word.is_empty() && is_digit_run(&word) != c.is_ascii_digit() {
                spans.push(style_word(std::mem::take(&mut word)));
            }
            word.push(c);
            continue;
        }

        if !word.is_empty() {
            spans.push(style_word(std::mem::take(&mut word)));
        }

        let style = match c {
            '=' | '+' | '-' | '!' | '*' | '/' | '<' | '>' => {
                Style::default().fg(DEFAULT_THEME.operator)
            }
            '(' | ')' | '{' | '}' => Style::default().fg(DEFAULT_THEME.primary),
            ' ' | '\t' | ',' | ';' => Style::default().fg(DEFAULT_THEME.fg),
            _ => Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::UNDERLINED),
        };
        spans.push(Span::styled(c.to_string(), style));
    }

    if !word.is_empty() {
        spans.push(style_word(word));
    }

    Line::from(spans)
}

fn is_digit_run(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_digit())
}

fn style_word(word: String) -> Span<'static> {
    let style = if is_digit_run(&word) {
        Style::default().fg(DEFAULT_THEME.number)
    } else if TokenKind::lookup_ident(&word) != TokenKind::Ident {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    Span::styled(word, style)
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let lines: Vec<&str> = source.lines().collect();
    let height = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(height)
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:4} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_line(line).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(pane_block(" Source ", is_focused));
    frame.render_widget(paragraph, area);
}
