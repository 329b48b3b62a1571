//! Parsed statement panes
//!
//! The statements pane lists the canonical render of every top-level
//! statement; the tree pane expands the selected statement node by node.

use super::{clamp_scroll, pane_block, scroll_into_view, visible_height};
use crate::parser::ast::{Expression, Node, Statement};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// One row of the node tree: depth, node kind, and detail text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub depth: usize,
    pub kind: &'static str,
    pub detail: String,
}

impl TreeRow {
    fn new(depth: usize, kind: &'static str, detail: impl Into<String>) -> Self {
        TreeRow {
            depth,
            kind,
            detail: detail.into(),
        }
    }
}

/// Flatten a statement into pre-order tree rows.
pub fn tree_rows(stmt: &Statement) -> Vec<TreeRow> {
    let mut rows = Vec::new();

    match stmt {
        Statement::Let(let_stmt) => {
            rows.push(TreeRow::new(0, "LetStatement", let_stmt.name.value.as_str()));
            push_expression(&mut rows, &let_stmt.value, 1);
        }
        Statement::Return(ret) => {
            rows.push(TreeRow::new(0, "ReturnStatement", ""));
            if let Some(value) = &ret.value {
                push_expression(&mut rows, value, 1);
            }
        }
        Statement::Expression(expr_stmt) => {
            rows.push(TreeRow::new(
                0,
                "ExpressionStatement",
                expr_stmt.token_literal(),
            ));
            push_expression(&mut rows, &expr_stmt.expression, 1);
        }
    }

    rows
}

fn push_expression(rows: &mut Vec<TreeRow>, expr: &Expression, depth: usize) {
    match expr {
        Expression::Identifier(ident) => {
            rows.push(TreeRow::new(depth, "Identifier", ident.value.as_str()));
        }
        Expression::IntegerLiteral(lit) => {
            rows.push(TreeRow::new(depth, "IntegerLiteral", lit.value.to_string()));
        }
        Expression::Prefix(prefix) => {
            rows.push(TreeRow::new(depth, "PrefixExpression", prefix.operator.as_str()));
            push_expression(rows, &prefix.right, depth + 1);
        }
        Expression::Infix(infix) => {
            rows.push(TreeRow::new(depth, "InfixExpression", infix.operator.as_str()));
            push_expression(rows, &infix.left, depth + 1);
            push_expression(rows, &infix.right, depth + 1);
        }
    }
}

/// Render the statement list with the selected statement highlighted
pub fn render_statements_pane(
    frame: &mut Frame,
    area: Rect,
    statements: &[Statement],
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Statements ({}) ", statements.len());
    let block = pane_block(&title, is_focused);

    if statements.is_empty() {
        let paragraph = Paragraph::new("(no statements)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let height = visible_height(area);
    scroll_into_view(scroll_offset, selected, height);
    clamp_scroll(scroll_offset, statements.len(), height);

    let items: Vec<ListItem> = statements
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(height)
        .map(|(idx, stmt)| {
            let style = if idx == selected {
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:3} ", idx + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(stmt.render(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the node tree of the selected statement
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    statement: Option<&Statement>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Syntax Tree ", is_focused);

    let Some(stmt) = statement else {
        let paragraph = Paragraph::new("(nothing selected)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let rows = tree_rows(stmt);
    let height = visible_height(area);
    clamp_scroll(scroll_offset, rows.len(), height);

    let lines: Vec<Line> = rows
        .iter()
        .skip(*scroll_offset)
        .take(height)
        .map(|row| {
            Line::from(vec![
                Span::raw("  ".repeat(row.depth)),
                Span::styled(row.kind, Style::default().fg(DEFAULT_THEME.node_kind)),
                Span::raw(" "),
                Span::styled(row.detail.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_tree_rows_follow_nesting() {
        let (program, _) = parse("let x = -a + 2;");
        let rows = tree_rows(&program.statements[0]);

        assert_eq!(
            rows,
            vec![
                TreeRow::new(0, "LetStatement", "x"),
                TreeRow::new(1, "InfixExpression", "+"),
                TreeRow::new(2, "PrefixExpression", "-"),
                TreeRow::new(3, "Identifier", "a"),
                TreeRow::new(2, "IntegerLiteral", "2"),
            ]
        );
    }

    #[test]
    fn test_tree_rows_for_empty_return() {
        let (program, _) = parse("return;");
        let rows = tree_rows(&program.statements[0]);
        assert_eq!(rows, vec![TreeRow::new(0, "ReturnStatement", "")]);
    }
}
