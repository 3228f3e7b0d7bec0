//! Blocking detection.

use crate::domain::{Candidate, ConstraintMapping, MetricId, MetricSet};
use crate::error::{Result, TradeoffError};
use crate::filter::FilterEngine;
use crate::options::MissingKeyPolicy;

/// The constraints as they would be after tightening `uid` by one slider step.
pub fn tightened_constraints(
    uid: &str,
    constraints: &ConstraintMapping,
    metrics: &MetricSet,
) -> Result<ConstraintMapping> {
    let metric = metrics.require(uid)?;
    let bound = constraints
        .get(uid)
        .ok_or_else(|| TradeoffError::MissingBound(uid.to_string()))?;
    let tightened = bound.tightened(metric.direction, metric.slider_step(), metric.decimals);
    Ok(constraints.with_bound(metric.uid.clone(), tightened))
}

/// Returns true if one more slider step on `uid` would leave no candidate.
///
/// Runs against a simulated copy; `constraints` is left untouched.
///
/// ```
/// use tradeoff_core::{is_blocked, Bound, Candidate, CandidateId, ConstraintMapping,
///     MetricDescriptor, MetricSet, MissingKeyPolicy};
///
/// let metrics = MetricSet::new()
///     .with(MetricDescriptor::quantitative("fpr", "FPR", 0.0, 1.0).lower_is_better().with_decimals(2));
/// let candidates = vec![Candidate::from_values(CandidateId(0), [("fpr", 0.1)])];
///
/// let open: ConstraintMapping = [("fpr", Bound::new(0.0, 0.2))].into_iter().collect();
/// let tight: ConstraintMapping = [("fpr", Bound::new(0.0, 0.1))].into_iter().collect();
///
/// assert!(!is_blocked("fpr", &open, &candidates, &metrics, MissingKeyPolicy::Vacuous).unwrap());
/// assert!(is_blocked("fpr", &tight, &candidates, &metrics, MissingKeyPolicy::Vacuous).unwrap());
/// ```
pub fn is_blocked(
    uid: &str,
    constraints: &ConstraintMapping,
    candidates: &[Candidate],
    metrics: &MetricSet,
    policy: MissingKeyPolicy,
) -> Result<bool> {
    let simulated = tightened_constraints(uid, constraints, metrics)?;
    Ok(FilterEngine::new(metrics, policy).eliminates_all(candidates, &simulated))
}

/// Every bounded metric that cannot be tightened further.
pub fn blocked_metrics(
    constraints: &ConstraintMapping,
    candidates: &[Candidate],
    metrics: &MetricSet,
    policy: MissingKeyPolicy,
) -> Result<Vec<MetricId>> {
    let mut blocked = Vec::new();
    for metric in metrics.iter().filter(|m| constraints.contains(&m.uid)) {
        if is_blocked(&metric.uid, constraints, candidates, metrics, policy)? {
            blocked.push(metric.uid.clone());
        }
    }
    Ok(blocked)
}
