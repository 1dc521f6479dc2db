//! Errors raised while talking to the prediction service

use thiserror::Error;

/// Label every user-visible failure starts with
pub const FAILURE_PREFIX: &str = "Failed to get prediction. ";

/// Why a submission did not produce a price
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Network unreachable, connection reset, timeout, body cut short
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response, with the service's `error` text when it sent one
    #[error("service responded with status {status}")]
    Service { status: u16, message: Option<String> },

    /// 2xx response without a numeric `predicted_price`
    #[error("response did not contain a numeric predicted_price")]
    MalformedResponse,
}

impl SubmitError {
    /// The single string shown to the user for this failure
    pub fn user_message(&self) -> String {
        let detail = match self {
            SubmitError::Transport(err) if err.is_timeout() => {
                "Network error: the prediction service did not respond in time".to_string()
            }
            SubmitError::Transport(_) => {
                "Network error: could not reach the prediction service".to_string()
            }
            SubmitError::Service {
                message: Some(message),
                ..
            } => message.clone(),
            SubmitError::Service {
                status,
                message: None,
            } => format!("Request failed with status code {status}"),
            SubmitError::MalformedResponse => {
                "Malformed response: missing predicted_price".to_string()
            }
        };
        format!("{FAILURE_PREFIX}{detail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_message_is_verbatim_with_prefix() {
        let err = SubmitError::Service {
            status: 400,
            message: Some("Year out of range".into()),
        };
        assert_eq!(
            err.user_message(),
            "Failed to get prediction. Year out of range"
        );
    }

    #[test]
    fn test_service_without_message_uses_status() {
        let err = SubmitError::Service {
            status: 502,
            message: None,
        };
        assert_eq!(
            err.user_message(),
            "Failed to get prediction. Request failed with status code 502"
        );
    }

    #[test]
    fn test_malformed_message() {
        assert!(SubmitError::MalformedResponse
            .user_message()
            .starts_with(FAILURE_PREFIX));
    }
}
