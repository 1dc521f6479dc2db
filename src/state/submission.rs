//! Submission lifecycle of the predictor form

use chrono::{DateTime, Local};

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Success(f64),
    Failure(String),
}

/// Where the current form session is in its submit cycle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        price: f64,
        received_at: DateTime<Local>,
    },
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Record the outcome of the request in flight
    pub fn resolve(&mut self, outcome: PredictionOutcome) {
        *self = match outcome {
            PredictionOutcome::Success(price) => SubmissionState::Succeeded {
                price,
                received_at: Local::now(),
            },
            PredictionOutcome::Failure(message) => SubmissionState::Failed(message),
        };
    }

    /// Formatted price when the last submission succeeded
    pub fn price_label(&self) -> Option<String> {
        match self {
            SubmissionState::Succeeded { price, .. } => Some(format_price(*price)),
            _ => None,
        }
    }
}

/// Render a price estimate in euros with two decimals
pub fn format_price(price: f64) -> String {
    format!("€{price:.2}")
}
