//! Filter engine.
//!
//! A candidate passes a [`ConstraintMapping`] when each bounded metric it
//! carries lies inside its interval, edges included. Under the default
//! [`MissingKeyPolicy::Vacuous`] a bound the candidate has no value for is
//! satisfied; [`MissingKeyPolicy::Exclude`] rejects such candidates instead.
//!
//! Every function here is pure: the input candidates are only borrowed and
//! the returned subset preserves their order.

use tracing::warn;

use crate::domain::{Candidate, ConstraintMapping, MetricSet};
use crate::options::MissingKeyPolicy;


/// Returns true if `candidate` satisfies every applicable bound.
pub fn satisfies(candidate: &Candidate, bounds: &ConstraintMapping, policy: MissingKeyPolicy) -> bool {
    bounds.iter().all(|(uid, bound)| match candidate.get(uid) {
        Some(value) => bound.contains(value),
        None => policy == MissingKeyPolicy::Vacuous,
    })
}

/// Filters with the default vacuous missing-key policy.
///
/// # Example
///
/// ```
/// use tradeoff_core::{filter, Bound, Candidate, CandidateId, ConstraintMapping};
///
/// let candidates = vec![
///     Candidate::from_values(CandidateId(0), [("fpr", 0.1), ("cost", 5.0)]),
///     Candidate::from_values(CandidateId(1), [("fpr", 0.3), ("cost", 2.0)]),
/// ];
/// let bounds: ConstraintMapping =
///     [("fpr", Bound::new(0.0, 0.2)), ("cost", Bound::new(0.0, 10.0))].into_iter().collect();
///
/// let kept = filter(&candidates, &bounds);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].get("fpr"), Some(0.1));
/// ```
pub fn filter<'a, I>(candidates: I, bounds: &ConstraintMapping) -> Vec<&'a Candidate>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    filter_with(candidates, bounds, MissingKeyPolicy::Vacuous)
}

/// Filters under an explicit missing-key policy.
pub fn filter_with<'a, I>(
    candidates: I,
    bounds: &ConstraintMapping,
    policy: MissingKeyPolicy,
) -> Vec<&'a Candidate>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    candidates
        .into_iter()
        .filter(|c| satisfies(c, bounds, policy))
        .collect()
}

/// Filter bound to a scenario's metric descriptors.
///
/// Bounds on keys with no descriptor are skipped, with a warning, rather
/// than treated as an error.
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine<'m> {
    metrics: &'m MetricSet,
    policy: MissingKeyPolicy,
}

impl<'m> FilterEngine<'m> {
    pub fn new(metrics: &'m MetricSet, policy: MissingKeyPolicy) -> Self {
        Self { metrics, policy }
    }

    pub fn policy(&self) -> MissingKeyPolicy {
        self.policy
    }

    /// Drops bounds on keys the scenario has no descriptor for.
    pub fn known_bounds(&self, bounds: &ConstraintMapping) -> ConstraintMapping {
        if bounds.iter().all(|(uid, _)| self.metrics.contains(uid)) {
            return bounds.clone();
        }
        bounds.retain_keys(|uid| {
            let known = self.metrics.contains(uid);
            if !known {
                warn!(event = "unknown_bound_key", metric = uid);
            }
            known
        })
    }

    pub fn apply<'a, I>(&self, candidates: I, bounds: &ConstraintMapping) -> Vec<&'a Candidate>
    where
        I: IntoIterator<Item = &'a Candidate>,
    {
        filter_with(candidates, &self.known_bounds(bounds), self.policy)
    }

    /// Returns true if no candidate passes `bounds`.
    ///
    /// Short-circuits on the first survivor.
    pub fn eliminates_all<'a, I>(&self, candidates: I, bounds: &ConstraintMapping) -> bool
    where
        I: IntoIterator<Item = &'a Candidate>,
    {
        let bounds = self.known_bounds(bounds);
        !candidates
            .into_iter()
            .any(|c| satisfies(c, &bounds, self.policy))
    }
}
