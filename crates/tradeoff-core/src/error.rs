//! Error types for Tradeoff

use thiserror::Error;

/// Main error type for engine operations.
///
/// Recoverable interaction outcomes (a rejected commit, a missing
/// suggestion) are not errors; they are returned as values by the
/// operations that produce them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TradeoffError {
    /// No descriptor exists for the metric key.
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// The metric has a descriptor but no bound in the constraint mapping.
    #[error("No bound set for metric: {0}")]
    MissingBound(String),

    /// A bound whose lower edge exceeds its upper edge.
    #[error("Inverted bound for {metric}: [{lower}, {upper}]")]
    InvertedBound { metric: String, lower: f64, upper: f64 },

    /// A bound reaching outside the metric's maximum range.
    #[error("Bound for {metric} [{lower}, {upper}] exceeds range [{min}, {max}]")]
    OutOfRange {
        metric: String,
        lower: f64,
        upper: f64,
        min: f64,
        max: f64,
    },

    /// NaN or infinite input.
    #[error("Non-finite value for {0}")]
    NonFinite(String),

    /// A computation that requires at least one candidate received none.
    #[error("Candidate set is empty")]
    EmptyCandidateSet,

    /// Malformed metric descriptor.
    #[error("Invalid descriptor for {metric}: {reason}")]
    InvalidDescriptor { metric: String, reason: String },

    /// A candidate value that does not fit its metric.
    #[error("Invalid value for {metric} on candidate {candidate}: {reason}")]
    InvalidValue {
        candidate: usize,
        metric: String,
        reason: String,
    },

    /// Candidate id not present in the store.
    #[error("No such candidate: {0}")]
    NoSuchCandidate(usize),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, TradeoffError>;
