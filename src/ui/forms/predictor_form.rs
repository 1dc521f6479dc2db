//! Predictor form rendering

use super::field_renderer::draw_field;
use super::result_panel;
use crate::app::App;
use crate::state::{FieldKind, FieldValue, PredictorForm, CLOSE_BUTTON, FIELD_SPECS, PREDICT_BUTTON};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fields per grid row
const GRID_COLUMNS: usize = 2;
const FIELD_HEIGHT: u16 = 3;

/// Draw the predictor form with action sidebar
pub fn draw_predictor(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.state.form.as_ref() else {
        return;
    };

    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(22), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app, form);
    draw_action_panel(frame, main_chunks[1], app, form);
}

/// Draw the field grid and the result panel
fn draw_form(frame: &mut Frame, area: Rect, app: &App, form: &PredictorForm) {
    let border_color = if form.is_buttons_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Car Price Predictor ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let grid_rows = FIELD_SPECS.len().div_ceil(GRID_COLUMNS) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(grid_rows * FIELD_HEIGHT), // Fields
            Constraint::Min(4),                           // Result
        ])
        .margin(1)
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(FIELD_HEIGHT); grid_rows as usize])
        .split(chunks[0]);

    for (index, spec) in FIELD_SPECS.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[index / GRID_COLUMNS]);

        let out_of_range = spec.kind == FieldKind::Number
            && spec.range.is_some_and(|range| {
                form.values
                    .get(spec.key)
                    .and_then(FieldValue::as_number)
                    .is_some_and(|n| n.is_finite() && !range.contains(n))
            });

        draw_field(
            frame,
            cells[index % GRID_COLUMNS],
            spec,
            &form.display_value(spec.key),
            form.active_field_index == index,
            out_of_range,
        );
    }

    result_panel::draw(frame, chunks[1], &app.state.submission);
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App, form: &PredictorForm) {
    let is_focused = form.is_buttons_row_active();
    let submitting = app.state.submission.is_submitting();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Predict (primary)
            Constraint::Length(BUTTON_HEIGHT), // Close
            Constraint::Min(0),                // Help text
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        if submitting { "Predicting…" } else { "Predict Price" },
        is_focused && form.selected_button == PREDICT_BUTTON,
        !submitting,
        Some(Color::Green),
    );

    render_action_button(
        frame,
        button_chunks[1],
        "Close",
        is_focused && form.selected_button == CLOSE_BUTTON,
        true,
        Some(Color::Gray),
    );

    let help = Paragraph::new(vec![
        Line::from(Span::styled(
            "Ranges are hints;",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "the service decides.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(help, button_chunks[2]);
}
