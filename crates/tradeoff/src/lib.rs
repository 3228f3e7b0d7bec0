//! Tradeoff - interactive multi-criteria candidate narrowing
//!
//! Load a scenario, tighten per-metric bounds until few candidates remain,
//! ask for a way out when a bound cannot move, then compare the survivors.
//!
//! # Example
//!
//! ```rust
//! use tradeoff::prelude::*;
//!
//! let mut explorer = Explorer::from_json_str(r#"{
//!     "metadata": { "metrics": {
//!         "fpr":  { "higherIsBetter": false, "range_min": 0, "range_max": 1 },
//!         "cost": { "higherIsBetter": false, "range_min": 0, "range_max": 10 }
//!     } },
//!     "candidates": [ { "fpr": 0.1, "cost": 5 }, { "fpr": 0.3, "cost": 2 } ]
//! }"#, &ExplorerConfig::default()).unwrap();
//!
//! explorer.commit_bound("fpr", 0.0, 0.2).unwrap();
//! assert!(explorer.is_blocked("fpr").unwrap());
//!
//! explorer.select("cost").unwrap();
//! let status = explorer.blocking().unwrap();
//! let suggestion = status.unblock().and_then(UnblockOutcome::suggestion).unwrap();
//! assert_eq!(suggestion.ids().collect::<Vec<_>>(), vec![CandidateId(1)]);
//! ```

mod error;
mod explorer;
pub mod logging;
mod preference;
mod scenario;

pub use error::ScenarioError;
pub use explorer::{BlockingStatus, CommitOutcome, DerivedView, Explorer, MetricView, Submission};
pub use preference::{PreferenceError, PreferenceSession};
pub use scenario::{load_scenario, load_scenario_file, load_scenario_reader};

pub use tradeoff_config::{ConfigError, ExplorerConfig, HeuristicConfig, LoggingConfig};

// Engine types
pub use tradeoff_core::{
    Bound, Candidate, CandidateId, CandidateStore, ConstraintMapping, Direction, EngineOptions,
    MetricDescriptor, MetricId, MetricKind, MetricSet, MissingKeyPolicy, RangeRounding, Relaxation,
    SuggestedCandidate, TradeoffError, UnblockOutcome, UnblockSuggestion,
};

/// The pure engine, for callers managing their own state.
pub use tradeoff_core as core;

pub mod prelude {
    pub use super::{
        BlockingStatus, CandidateId, CommitOutcome, Explorer, ExplorerConfig, PreferenceSession,
        UnblockOutcome,
    };
    pub use super::{Bound, MetricDescriptor, MetricSet};
}
