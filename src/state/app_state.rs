//! Application state definitions

use super::forms::PredictorForm;
use super::submission::SubmissionState;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Landing screen with the button that opens the predictor
    #[default]
    Home,
    /// Prediction form modal
    Predictor,
}

/// Application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Open form session, `None` while the predictor is closed
    pub form: Option<PredictorForm>,
    pub submission: SubmissionState,
    /// Errors waiting to be shown in the modal dialog, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Start a fresh form session and show it
    pub fn open_predictor(&mut self) {
        self.form = Some(PredictorForm::new());
        self.submission = SubmissionState::Idle;
        self.current_view = View::Predictor;
    }

    /// Discard the form session and its outcome
    pub fn close_predictor(&mut self) {
        self.form = None;
        self.submission = SubmissionState::Idle;
        self.current_view = View::Home;
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PredictionOutcome;

    #[test]
    fn test_default_view_is_home() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Home);
        assert!(state.form.is_none());
    }

    #[test]
    fn test_open_predictor_starts_session() {
        let mut state = AppState::default();
        state.open_predictor();
        assert_eq!(state.current_view, View::Predictor);
        assert!(state.form.is_some());
    }

    #[test]
    fn test_close_predictor_discards_session() {
        let mut state = AppState::default();
        state.open_predictor();
        state.submission = SubmissionState::Submitting;
        state.submission.resolve(PredictionOutcome::Failure("x".into()));
        state.close_predictor();
        assert_eq!(state.current_view, View::Home);
        assert!(state.form.is_none());
        assert_eq!(state.submission, SubmissionState::Idle);
    }

    #[test]
    fn test_reopen_resets_values() {
        let mut state = AppState::default();
        state.open_predictor();
        if let Some(form) = state.form.as_mut() {
            form.input_char('9');
        }
        state.close_predictor();
        state.open_predictor();
        let form = state.form.as_ref().unwrap();
        assert_eq!(form.values, crate::state::FormValues::initialize());
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_errors());
        state.push_error("first".into());
        state.push_error("second".into());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }
}
