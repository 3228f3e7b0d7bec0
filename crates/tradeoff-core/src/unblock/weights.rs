//! Coordinates, importance weights and the weighted distance.
//!
//! All vectors here are laid out in [`MetricSet`] iteration order. A `None`
//! coordinate (no bound, or a candidate without the metric) drops out of
//! the distance.

use crate::domain::{Candidate, CandidateStore, ConstraintMapping, MetricSet};

/// Active bound edge per metric: the lower edge when higher is better, the
/// upper edge otherwise.
pub fn position_vector(constraints: &ConstraintMapping, metrics: &MetricSet) -> Vec<Option<f64>> {
    metrics
        .iter()
        .map(|m| constraints.get(&m.uid).map(|b| b.active_edge(m.direction)))
        .collect()
}

/// A candidate's raw values per metric.
pub fn value_vector(candidate: &Candidate, metrics: &MetricSet) -> Vec<Option<f64>> {
    metrics.iter().map(|m| candidate.get(&m.uid)).collect()
}

/// Sample standard deviation, `None` below two observations.
pub fn standard_deviation(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let values: Vec<f64> = values.into_iter().collect();
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    Some(variance.sqrt())
}

/// Reciprocal standard deviation of each metric over the full population.
///
/// Metrics with no measurable spread get `zero_variance_weight`; their
/// coordinate is the same for every candidate, so any constant leaves the
/// ranking unchanged.
pub fn metric_importance(store: &CandidateStore, zero_variance_weight: f64) -> Vec<f64> {
    store
        .metrics()
        .iter()
        .map(|m| {
            let values: Vec<f64> = store.column(&m.uid).collect();
            let scale = values.iter().fold(1.0_f64, |acc, v| acc.max(v.abs()));
            match standard_deviation(values) {
                Some(sd) if sd > f64::EPSILON * scale => 1.0 / sd,
                _ => zero_variance_weight,
            }
        })
        .collect()
}

/// `sqrt(sum_i (w_i * (a_i - b_i))^2)` over coordinates present in both.
///
/// ```
/// use tradeoff_core::unblock::weighted_distance;
///
/// let d = weighted_distance(&[Some(3.0), Some(1.0)], &[Some(0.0), None], &[1.0, 5.0]);
/// assert_eq!(d, 3.0);
/// ```
pub fn weighted_distance(a: &[Option<f64>], b: &[Option<f64>], weights: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .zip(weights)
        .filter_map(|((x, y), w)| Some((w * (x.as_ref()? - y.as_ref()?)).powi(2)))
        .sum::<f64>()
        .sqrt()
}
