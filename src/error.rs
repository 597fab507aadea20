//! Errors raised at the JSON boundary. The geometry itself is total.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid request JSON: {0}")]
    InvalidRequest(#[source] serde_json::Error),
    #[error("failed to serialize result: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("grid size must be a positive finite number, got {0}")]
    InvalidGridSize(f64),
}
