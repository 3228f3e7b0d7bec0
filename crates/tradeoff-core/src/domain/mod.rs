//! Scenario data model: metrics, candidates, bounds.

mod bound;
mod candidate;
mod metric;
mod store;

#[cfg(test)]
mod tests;

pub use bound::{Bound, ConstraintMapping};
pub use candidate::{Candidate, CandidateId};
pub use metric::{Direction, MetricDescriptor, MetricId, MetricKind, MetricSet, MAX_DECIMALS};
pub use store::CandidateStore;
