//! Tradeoff Core - candidate filtering and bound suggestion
//!
//! This crate provides the pure computations behind interactive
//! multi-criteria narrowing:
//! - Scenario data model (metrics, candidates, bounds)
//! - Filter engine over per-metric bound constraints
//! - Maximum ranges and slider precision
//! - Best achievable value per metric
//! - Blocking detection and the weighted-distance unblocking heuristic

pub mod best;
pub mod blocking;
pub mod domain;
pub mod error;
pub mod filter;
pub mod options;
pub mod range;
pub mod unblock;

#[cfg(test)]
mod test_utils;

pub use best::{best_values, BestValues};
pub use blocking::{blocked_metrics, is_blocked, tightened_constraints};
pub use domain::{
    Bound, Candidate, CandidateId, CandidateStore, ConstraintMapping, Direction, MetricDescriptor,
    MetricId, MetricKind, MetricSet, MAX_DECIMALS,
};
pub use error::{Result, TradeoffError};
pub use filter::{filter, filter_with, satisfies, FilterEngine};
pub use options::{EngineOptions, MissingKeyPolicy, RangeRounding};
pub use range::{initialize_constraints, max_ranges, slider_step, MaxRanges};
pub use unblock::{suggest_unblock, Relaxation, SuggestedCandidate, UnblockOutcome, UnblockSuggestion};
