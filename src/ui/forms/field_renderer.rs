//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldSpec};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one form input described by `spec`.
///
/// `out_of_range` only changes the color: range hints are advisory.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    spec: &FieldSpec,
    display_value: &str,
    is_active: bool,
    out_of_range: bool,
) {
    let accent = if is_active { Color::Cyan } else { Color::DarkGray };
    let value_color = if out_of_range {
        Color::Yellow
    } else if is_active {
        Color::Cyan
    } else {
        Color::White
    };
    let value_style = Style::default().fg(value_color);

    let mut spans = match spec.kind {
        FieldKind::Number => {
            let shown = if display_value.is_empty() && !is_active {
                "(empty)"
            } else {
                display_value
            };
            let mut spans = vec![Span::styled(shown.to_string(), value_style)];
            if is_active {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            spans
        }
        FieldKind::Flag => vec![Span::styled(display_value.to_string(), value_style)],
        FieldKind::Choice if is_active => vec![
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                display_value.to_string(),
                value_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        ],
        FieldKind::Choice => vec![Span::styled(display_value.to_string(), value_style)],
    };

    if out_of_range {
        spans.push(Span::styled(
            "  outside usual range",
            Style::default().fg(Color::Yellow),
        ));
    }

    let title = match spec.range {
        Some(range) => format!(" {} · {} ", spec.label, range.label()),
        None => format!(" {} ", spec.label),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
