//! Application state and core logic

use crate::predictor::{build_payload, PredictorClientTrait, FAILURE_PREFIX};
use crate::state::{
    AppState, FieldKind, PredictionOutcome, SubmissionState, View, CLOSE_BUTTON, PREDICT_BUTTON,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the prediction service
    predictor: Arc<dyn PredictorClientTrait>,
    /// Endpoint the client posts to, shown in the status bar
    pub endpoint: String,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Request task started by the last submit, until its outcome is taken
    in_flight: Option<JoinHandle<PredictionOutcome>>,
}

impl App {
    /// Create a new App instance
    pub fn new(predictor: Arc<dyn PredictorClientTrait>, endpoint: String) -> Self {
        Self {
            state: AppState::default(),
            predictor,
            endpoint,
            quit: false,
            copy_message: None,
            in_flight: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        // Clear any status messages on key press
        self.copy_message = None;

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Predictor => self.handle_predictor_key(key),
        }
    }

    /// Handle keys on the landing screen
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('o') => self.state.open_predictor(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in the predictor form
    fn handle_predictor_key(&mut self, key: KeyEvent) {
        // One request at a time; the form can still be closed meanwhile
        if self.state.submission.is_submitting() {
            if key.code == KeyCode::Esc {
                self.close_predictor();
            }
            return;
        }

        if key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER))
        {
            self.begin_submission();
            return;
        }

        let Some(form) = self.state.form.as_mut() else {
            return;
        };
        let on_action_row = form.is_buttons_row_active();
        let active_kind = form.active_spec().map(|spec| spec.kind);

        match key.code {
            KeyCode::Esc => self.close_predictor(),
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            // Action row: Predict / Close
            KeyCode::Left | KeyCode::Char('h') if on_action_row => form.prev_button(),
            KeyCode::Right | KeyCode::Char('l') if on_action_row => form.next_button(),
            KeyCode::Enter if on_action_row => match form.selected_button {
                PREDICT_BUTTON => self.begin_submission(),
                CLOSE_BUTTON => self.close_predictor(),
                _ => {}
            },
            KeyCode::Char('y') if self.state.submission.price_label().is_some() => {
                self.copy_price()
            }
            _ => match active_kind {
                Some(FieldKind::Number) => match key.code {
                    KeyCode::Char(c) => form.input_char(c),
                    KeyCode::Backspace => form.backspace(),
                    _ => {}
                },
                Some(FieldKind::Flag) => {
                    if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                        form.toggle_flag();
                    }
                }
                Some(FieldKind::Choice) => match key.code {
                    KeyCode::Left | KeyCode::Char('h') => form.cycle_choice(false),
                    KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::Enter => {
                        form.cycle_choice(true)
                    }
                    _ => {}
                },
                None => {}
            },
        }
    }

    /// Snapshot the form and send it on a background task.
    ///
    /// Must be called inside a tokio runtime. The outcome is collected by
    /// `finish_submission`, so input keeps flowing while the service works.
    pub fn begin_submission(&mut self) {
        if self.state.submission.is_submitting() {
            return;
        }
        let Some(form) = self.state.form.as_ref() else {
            return;
        };
        let payload = build_payload(&form.values);
        let predictor = Arc::clone(&self.predictor);
        self.in_flight = Some(tokio::spawn(async move { predictor.submit(&payload).await }));
        self.state.submission = SubmissionState::Submitting;
    }

    pub fn is_awaiting_prediction(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the request task is done and `finish_submission` won't block
    pub fn submission_finished(&self) -> bool {
        self.in_flight.as_ref().is_some_and(JoinHandle::is_finished)
    }

    /// Wait for the request task and record its outcome on the open form
    pub async fn finish_submission(&mut self) {
        let Some(handle) = self.in_flight.take() else {
            return;
        };
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("Prediction task ended abnormally: {err}");
                PredictionOutcome::Failure(format!("{FAILURE_PREFIX}The request was interrupted"))
            }
        };
        debug!(?outcome, "Submission finished");

        if self.state.form.is_some() {
            self.state.submission.resolve(outcome);
        }
    }

    /// Close the form, abandoning any request still in flight
    fn close_predictor(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            debug!("Abandoning in-flight prediction");
            handle.abort();
        }
        self.state.close_predictor();
    }

    /// Copy the formatted estimate to the system clipboard
    fn copy_price(&mut self) {
        let Some(label) = self.state.submission.price_label() else {
            return;
        };
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(label.clone())) {
            Ok(()) => self.copy_message = Some(format!("Copied {label}")),
            Err(e) => self.push_error(format!("Failed to copy to clipboard: {e}")),
        }
    }
}
