//! Trait abstraction for the prediction client to enable mocking in tests

use super::client::{PredictionClient, PredictionPayload};
use crate::state::PredictionOutcome;
use async_trait::async_trait;

/// Trait for prediction client operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictorClientTrait: Send + Sync {
    /// Post one payload and report the outcome
    async fn submit(&self, payload: &PredictionPayload) -> PredictionOutcome;
}

#[async_trait]
impl PredictorClientTrait for PredictionClient {
    async fn submit(&self, payload: &PredictionPayload) -> PredictionOutcome {
        PredictionClient::submit(self, payload).await
    }
}
