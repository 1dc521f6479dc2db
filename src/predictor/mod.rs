//! Prediction service client
//!
//! Turns a snapshot of the form into the wire payload, posts it and maps
//! the response to a `PredictionOutcome`.

mod client;
mod error;
mod traits;

pub use client::{build_payload, PredictionClient, PredictionPayload};
pub use error::FAILURE_PREFIX;
pub use traits::PredictorClientTrait;

#[cfg(test)]
pub use traits::MockPredictorClientTrait;
