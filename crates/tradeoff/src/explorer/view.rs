//! Read models handed to the view layer.

use tradeoff_core::{BestValues, Bound, CandidateId, Direction, MetricId, UnblockOutcome};

/// Values derived from the current constraints.
///
/// Rebuilt on every commit; `version` matches
/// [`Explorer::version`](super::Explorer::version) at the time it was built.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    pub version: u64,
    /// Ids of the candidates passing the constraints, in store order.
    pub filtered: Vec<CandidateId>,
    pub total: usize,
    pub best: BestValues,
}

impl DerivedView {
    /// Number of candidates still passing the constraints.
    pub fn remaining(&self) -> usize {
        self.filtered.len()
    }

    pub fn contains(&self, id: CandidateId) -> bool {
        self.filtered.binary_search(&id).is_ok()
    }

    /// `"N of M"` as shown above the candidate list.
    pub fn summary(&self) -> String {
        format!("{} of {}", self.remaining(), self.total)
    }
}

/// Everything a slider needs for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricView {
    pub uid: MetricId,
    pub name: String,
    pub direction: Direction,
    pub bound: Bound,
    pub max_range: Bound,
    pub step: f64,
    /// `None` when no remaining candidate carries the metric.
    pub best: Option<f64>,
    pub best_label: Option<String>,
}

/// Blocking state of the selected metric.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockingStatus {
    NoSelection,
    /// The selected metric can still be tightened.
    Clear { metric: MetricId },
    /// One more step would empty the candidate set.
    Blocked {
        metric: MetricId,
        unblock: UnblockOutcome,
    },
}

impl BlockingStatus {
    pub fn is_blocked(&self) -> bool {
        matches!(self, BlockingStatus::Blocked { .. })
    }

    pub fn unblock(&self) -> Option<&UnblockOutcome> {
        match self {
            BlockingStatus::Blocked { unblock, .. } => Some(unblock),
            _ => None,
        }
    }
}
