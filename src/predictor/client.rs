//! HTTP client for the price prediction service
//!
//! The service reads the request as a one-row table: every field name maps
//! to a list holding that row's value.

use super::error::SubmitError;
use crate::state::{FieldValue, FormValues, PredictionOutcome};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Request body: each field name mapped to a single-element list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictionPayload(BTreeMap<&'static str, [FieldValue; 1]>);

/// Wrap every form value in a single-element list, keeping key spelling
pub fn build_payload(values: &FormValues) -> PredictionPayload {
    PredictionPayload(
        values
            .iter()
            .map(|(key, value)| (key, [value.clone()]))
            .collect(),
    )
}

/// How long one request may take before it is reported as a failure
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the prediction endpoint
pub struct PredictionClient {
    http: Client,
    /// The endpoint URL, fixed for the lifetime of the client
    endpoint: String,
}

impl PredictionClient {
    /// Create a client posting to `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SubmitError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post the payload once and map the response to an outcome.
    ///
    /// Never fails: every error becomes `PredictionOutcome::Failure`.
    pub async fn submit(&self, payload: &PredictionPayload) -> PredictionOutcome {
        info!(endpoint = %self.endpoint, "Requesting price prediction");
        debug!(?payload, "Prediction payload");

        match self.request_price(payload).await {
            Ok(price) => {
                info!(price, "Prediction received");
                PredictionOutcome::Success(price)
            }
            Err(err) => {
                warn!("Prediction failed: {err:?}");
                PredictionOutcome::Failure(err.user_message())
            }
        }
    }

    async fn request_price(&self, payload: &PredictionPayload) -> Result<f64, SubmitError> {
        let response = self.http.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();
        let body = response.text().await?;
        interpret_response(status, &body)
    }
}

/// Pull the price out of a 2xx body, or the `error` text out of any other
fn interpret_response(status: StatusCode, body: &str) -> Result<f64, SubmitError> {
    let parsed = serde_json::from_str::<Value>(body).ok();

    if status.is_success() {
        return parsed
            .as_ref()
            .and_then(|v| v.get("predicted_price"))
            .and_then(Value::as_f64)
            .ok_or(SubmitError::MalformedResponse);
    }

    let message = parsed
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string);

    Err(SubmitError::Service {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldKind, RawInput, FIELD_SPECS, IS_XDRIVE};
    use axum::{http::header, routing::post, Json, Router};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Serve a fixed response on an ephemeral port and return its /predict URL
    async fn spawn_stub(status: StatusCode, body: &'static str) -> String {
        let status = axum::http::StatusCode::from_u16(status.as_u16()).unwrap();
        let app = Router::new().route(
            "/predict",
            post(move || async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }),
        );
        serve(app).await
    }

    /// Client that talks to the stub directly, ignoring any proxy settings
    fn local_client(endpoint: String) -> PredictionClient {
        local_client_with_timeout(endpoint, REQUEST_TIMEOUT)
    }

    fn local_client_with_timeout(endpoint: String, timeout: Duration) -> PredictionClient {
        PredictionClient {
            http: Client::builder().no_proxy().timeout(timeout).build().unwrap(),
            endpoint,
        }
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/predict")
    }

    #[test]
    fn test_default_payload_shape() {
        let payload = build_payload(&FormValues::initialize());
        let expected = json!({
            "Engine Size (cm3)": [2000],
            "Horse Power (HP)": [184],
            "Kilometers": [143000],
            "Year": [2012],
            "Is_xDrive": [1],
            "Fuel Type": ["Diesel"],
            "Region": ["Bucuresti"],
            "Engine_Badge": ["320d"],
        });
        assert_eq!(serde_json::to_value(&payload).unwrap(), expected);
    }

    #[test]
    fn test_payload_keys_match_form_keys() {
        let values = FormValues::initialize();
        let json = serde_json::to_value(build_payload(&values)).unwrap();
        let payload_keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let form_keys: Vec<&str> = values.iter().map(|(k, _)| k).collect();
        assert_eq!(payload_keys.len(), form_keys.len());
        for spec in FIELD_SPECS {
            assert!(payload_keys.contains(&spec.key), "missing {}", spec.key);
        }
    }

    #[test]
    fn test_build_payload_is_pure() {
        let values = FormValues::initialize();
        let first = build_payload(&values);
        let second = build_payload(&values);
        assert_eq!(first, second);
        assert_eq!(values, FormValues::initialize());
    }

    #[test]
    fn test_every_value_is_single_element_list() {
        let payload = build_payload(&FormValues::initialize());
        let json = serde_json::to_value(&payload).unwrap();
        for (key, value) in json.as_object().unwrap() {
            let list = value.as_array().unwrap_or_else(|| panic!("{key} not a list"));
            assert_eq!(list.len(), 1, "{key}");
        }
    }

    #[test]
    fn test_flag_wrapped_as_integer_lists() {
        let values = FormValues::initialize();
        let off = values.apply_edit(IS_XDRIVE, RawInput::Checked(false), FieldKind::Flag);
        let on = off.apply_edit(IS_XDRIVE, RawInput::Checked(true), FieldKind::Flag);

        let off_json = serde_json::to_value(build_payload(&off)).unwrap();
        let on_json = serde_json::to_value(build_payload(&on)).unwrap();
        assert_eq!(off_json[IS_XDRIVE], json!([0]));
        assert_eq!(on_json[IS_XDRIVE], json!([1]));
    }

    #[test]
    fn test_interpret_success() {
        let price = interpret_response(StatusCode::OK, r#"{"predicted_price": 18450.5}"#);
        assert_eq!(price.unwrap(), 18450.5);
    }

    #[test]
    fn test_interpret_success_without_price_is_malformed() {
        let result = interpret_response(StatusCode::OK, r#"{"price": 1}"#);
        assert!(matches!(result, Err(SubmitError::MalformedResponse)));
        let result = interpret_response(StatusCode::OK, "not json");
        assert!(matches!(result, Err(SubmitError::MalformedResponse)));
        let result = interpret_response(StatusCode::OK, r#"{"predicted_price": "cheap"}"#);
        assert!(matches!(result, Err(SubmitError::MalformedResponse)));
    }

    #[test]
    fn test_interpret_error_body() {
        let result = interpret_response(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Missing required columns in input data"}"#,
        );
        match result {
            Err(SubmitError::Service { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(
                    message.as_deref(),
                    Some("Missing required columns in input data")
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_interpret_error_without_message() {
        let result = interpret_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert!(matches!(
            result,
            Err(SubmitError::Service {
                status: 500,
                message: None
            })
        ));
    }

    #[tokio::test]
    async fn test_submit_success() {
        let url = spawn_stub(StatusCode::OK, r#"{"predicted_price": 18450.5}"#).await;
        let client = local_client(url);
        let outcome = client
            .submit(&build_payload(&FormValues::initialize()))
            .await;
        assert_eq!(outcome, PredictionOutcome::Success(18450.5));
    }

    #[tokio::test]
    async fn test_submit_service_error() {
        let url = spawn_stub(StatusCode::BAD_REQUEST, r#"{"error":"Year out of range"}"#).await;
        let client = local_client(url);
        let outcome = client
            .submit(&build_payload(&FormValues::initialize()))
            .await;
        match outcome {
            PredictionOutcome::Failure(message) => {
                assert!(message.contains("Year out of range"), "{message}");
                assert!(message.starts_with("Failed to get prediction. "));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_malformed_success() {
        let url = spawn_stub(StatusCode::OK, r#"{"status": "ok"}"#).await;
        let client = local_client(url);
        let outcome = client
            .submit(&build_payload(&FormValues::initialize()))
            .await;
        assert_eq!(
            outcome,
            PredictionOutcome::Failure(
                "Failed to get prediction. Malformed response: missing predicted_price".into()
            )
        );
    }

    #[tokio::test]
    async fn test_submit_unreachable() {
        // Bind and release a port so nothing is listening on it
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = local_client(format!("http://{addr}/predict"));
        let outcome = client
            .submit(&build_payload(&FormValues::initialize()))
            .await;
        match outcome {
            PredictionOutcome::Failure(message) => {
                assert!(!message.is_empty());
                assert!(message.contains("Network error"), "{message}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_gives_up_on_silent_service() {
        // Accept connections and hold them open without ever answering
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client =
            local_client_with_timeout(format!("http://{addr}/predict"), Duration::from_millis(300));
        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            client.submit(&build_payload(&FormValues::initialize())),
        )
        .await
        .expect("submit should give up before the outer deadline");

        assert_eq!(
            outcome,
            PredictionOutcome::Failure(
                "Failed to get prediction. Network error: the prediction service did not respond in time"
                    .into()
            )
        );
    }

    #[tokio::test]
    async fn test_submit_posts_payload_json() {
        let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let recorder = seen.clone();
        let app = Router::new().route(
            "/predict",
            post(move |Json(body): Json<Value>| {
                let recorder = recorder.clone();
                async move {
                    *recorder.lock().unwrap() = Some(body);
                    Json(json!({ "predicted_price": 9999.99 }))
                }
            }),
        );
        let url = serve(app).await;

        let values = FormValues::initialize();
        let client = local_client(url);
        let outcome = client.submit(&build_payload(&values)).await;

        assert_eq!(outcome, PredictionOutcome::Success(9999.99));
        let body = seen.lock().unwrap().clone().unwrap();
        assert_eq!(body, serde_json::to_value(build_payload(&values)).unwrap());
        assert_eq!(body["Engine Size (cm3)"], json!([2000]));
    }

    #[test]
    fn test_endpoint_is_kept() {
        let client = PredictionClient::new("http://example.test/predict").unwrap();
        assert_eq!(client.endpoint(), "http://example.test/predict");
    }
}
