//! Fixtures for unit tests inside this crate.

use crate::domain::{Bound, Candidate, CandidateId, CandidateStore, ConstraintMapping, MetricDescriptor, MetricSet};

/// `fpr` (lower is better, whole-number step) and `cost` (lower is better).
pub fn fpr_cost_metrics() -> MetricSet {
    MetricSet::new()
        .with(MetricDescriptor::quantitative("fpr", "False positive rate", 0.0, 1.0).lower_is_better())
        .with(MetricDescriptor::quantitative("cost", "Cost", 0.0, 10.0).lower_is_better())
}

pub fn fpr_cost_candidates() -> Vec<Candidate> {
    vec![
        Candidate::from_values(CandidateId(0), [("fpr", 0.1), ("cost", 5.0)]),
        Candidate::from_values(CandidateId(1), [("fpr", 0.3), ("cost", 2.0)]),
    ]
}

pub fn fpr_cost_store() -> CandidateStore {
    CandidateStore::new(fpr_cost_metrics(), fpr_cost_candidates()).unwrap()
}

/// `{fpr: [0, 0.2], cost: [0, 10]}`
pub fn fpr_cost_bounds() -> ConstraintMapping {
    [("fpr", Bound::new(0.0, 0.2)), ("cost", Bound::new(0.0, 10.0))]
        .into_iter()
        .collect()
}

/// Four model configurations over accuracy (higher is better, 2 decimals),
/// latency (lower is better) and memory (lower is better).
pub fn model_zoo_store() -> CandidateStore {
    let metrics = MetricSet::new()
        .with(MetricDescriptor::quantitative("accuracy", "Accuracy", 0.0, 1.0).with_decimals(2))
        .with(MetricDescriptor::quantitative("latency", "Latency (ms)", 0.0, 200.0).lower_is_better())
        .with(MetricDescriptor::quantitative("memory", "Memory (MB)", 0.0, 2048.0).lower_is_better());
    let candidates = vec![
        Candidate::from_values(CandidateId(0), [("accuracy", 0.80), ("latency", 20.0), ("memory", 256.0)]),
        Candidate::from_values(CandidateId(1), [("accuracy", 0.85), ("latency", 40.0), ("memory", 512.0)]),
        Candidate::from_values(CandidateId(2), [("accuracy", 0.90), ("latency", 80.0), ("memory", 512.0)]),
        Candidate::from_values(CandidateId(3), [("accuracy", 0.95), ("latency", 150.0), ("memory", 1024.0)]),
    ];
    CandidateStore::new(metrics, candidates).unwrap()
}
