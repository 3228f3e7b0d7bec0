//! Error types for scenario loading.

use thiserror::Error;
use tradeoff_core::TradeoffError;

/// Errors raised while turning a scenario payload into a candidate store.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structurally valid JSON that does not describe a usable scenario.
    #[error("Invalid scenario: {0}")]
    Invalid(String),

    #[error(transparent)]
    Engine(#[from] TradeoffError),
}
