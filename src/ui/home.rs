//! Landing screen

use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the landing screen with the button that opens the predictor
pub fn draw(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding (flex)
            Constraint::Length(2),             // Title
            Constraint::Length(BUTTON_HEIGHT), // Open button
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        "BMW Car Price Predictor",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(28),
            Constraint::Min(0),
        ])
        .split(rows[2]);

    render_action_button(
        frame,
        columns[1],
        "Open Price Predictor",
        true,
        true,
        None,
    );
}
