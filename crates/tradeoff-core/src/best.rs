//! Optimal-value resolver.

use std::collections::BTreeMap;

use crate::domain::{Candidate, MetricId, MetricSet};
use crate::error::{Result, TradeoffError};

/// Best value currently achievable per metric.
pub type BestValues = BTreeMap<MetricId, f64>;

/// Scans `filtered` for the best value of every described metric.
///
/// Metrics no filtered candidate carries are absent from the result.
///
/// # Errors
///
/// Returns [`TradeoffError::EmptyCandidateSet`] if `filtered` is empty;
/// callers must keep the filtered set non-empty before asking for optima.
///
/// # Example
///
/// ```
/// use tradeoff_core::{best_values, Candidate, CandidateId, MetricDescriptor, MetricSet};
///
/// let metrics = MetricSet::new()
///     .with(MetricDescriptor::quantitative("fpr", "FPR", 0.0, 1.0).lower_is_better())
///     .with(MetricDescriptor::quantitative("auc", "AUC", 0.0, 1.0));
/// let candidates = vec![
///     Candidate::from_values(CandidateId(0), [("fpr", 0.1), ("auc", 0.7)]),
///     Candidate::from_values(CandidateId(1), [("fpr", 0.3), ("auc", 0.9)]),
/// ];
///
/// let best = best_values(&candidates, &metrics).unwrap();
/// assert_eq!(best["fpr"], 0.1);
/// assert_eq!(best["auc"], 0.9);
/// ```
pub fn best_values<'a, I>(filtered: I, metrics: &MetricSet) -> Result<BestValues>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut best = BestValues::new();
    let mut seen = false;

    for candidate in filtered {
        seen = true;
        for metric in metrics.iter() {
            let Some(value) = candidate.get(&metric.uid) else {
                continue;
            };
            best.entry(metric.uid.clone())
                .and_modify(|current| *current = metric.direction.best(*current, value))
                .or_insert(value);
        }
    }

    if !seen {
        return Err(TradeoffError::EmptyCandidateSet);
    }
    Ok(best)
}
