//! Submission outcome rendering

use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{format_price, SubmissionState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the result of the last submission
pub fn draw(frame: &mut Frame, area: Rect, submission: &SubmissionState) {
    let (lines, border_color) = match submission {
        SubmissionState::Idle => (
            vec![Line::from(Span::styled(
                format!("Press {SUBMIT_SHORTCUT} or select Predict to estimate the price."),
                Style::default().fg(Color::DarkGray),
            ))],
            Color::DarkGray,
        ),
        SubmissionState::Submitting => (
            vec![Line::from(Span::styled(
                "Predicting…",
                Style::default().fg(Color::Yellow),
            ))],
            Color::Yellow,
        ),
        SubmissionState::Succeeded { price, received_at } => (
            vec![
                Line::from(vec![
                    Span::raw("Predicted Price: "),
                    Span::styled(
                        format_price(*price),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("Received at {}  ·  y:copy", received_at.format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            Color::Green,
        ),
        SubmissionState::Failed(message) => (
            vec![Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            ))],
            Color::Red,
        ),
    };

    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PredictionOutcome;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(submission: &SubmissionState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 6)).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), submission))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_success_renders_euro_price() {
        let mut state = SubmissionState::Submitting;
        state.resolve(PredictionOutcome::Success(18450.5));
        let screen = render(&state);
        assert!(screen.contains("Predicted Price: €18450.50"), "{screen}");
    }

    #[test]
    fn test_failure_renders_message() {
        let state =
            SubmissionState::Failed("Failed to get prediction. Year out of range".to_string());
        let screen = render(&state);
        assert!(screen.contains("Year out of range"));
        assert!(!screen.contains("Predicted Price"));
    }

    #[test]
    fn test_submitting_renders_progress() {
        assert!(render(&SubmissionState::Submitting).contains("Predicting"));
    }

    #[test]
    fn test_idle_renders_hint() {
        assert!(render(&SubmissionState::Idle).contains(SUBMIT_SHORTCUT));
    }
}
