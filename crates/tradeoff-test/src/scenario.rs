//! Hand-written scenarios.

use tradeoff_core::{Bound, Candidate, CandidateId, CandidateStore, ConstraintMapping, MetricDescriptor, MetricSet};

/// Two candidates over `fpr` and `cost`, both lower-is-better, no decimals.
///
/// `[{fpr: 0.1, cost: 5}, {fpr: 0.3, cost: 2}]`
pub fn fpr_cost_store() -> CandidateStore {
    let metrics = MetricSet::new()
        .with(MetricDescriptor::quantitative("fpr", "False positive rate", 0.0, 1.0).lower_is_better())
        .with(MetricDescriptor::quantitative("cost", "Cost", 0.0, 10.0).lower_is_better());
    let candidates = vec![
        Candidate::from_values(CandidateId(0), [("fpr", 0.1), ("cost", 5.0)]),
        Candidate::from_values(CandidateId(1), [("fpr", 0.3), ("cost", 2.0)]),
    ];
    CandidateStore::new(metrics, candidates).expect("valid fixture")
}

/// `{fpr: [0, 0.2], cost: [0, 10]}`
pub fn fpr_cost_bounds() -> ConstraintMapping {
    [("fpr", Bound::new(0.0, 0.2)), ("cost", Bound::new(0.0, 10.0))]
        .into_iter()
        .collect()
}

fn zoo_metrics() -> MetricSet {
    MetricSet::new()
        .with(MetricDescriptor::quantitative("accuracy", "Accuracy", 0.0, 1.0).with_decimals(2))
        .with(MetricDescriptor::quantitative("latency", "Latency (ms)", 0.0, 200.0).lower_is_better())
        .with(MetricDescriptor::quantitative("memory", "Memory (MB)", 0.0, 2048.0).lower_is_better())
        .with(MetricDescriptor::qualitative(
            "license",
            "License",
            ["proprietary", "research", "open"],
        ))
}

/// Four model configurations trading accuracy against latency, memory
/// and license openness.
///
/// | id | label    | accuracy | latency | memory | license     |
/// |----|----------|----------|---------|--------|-------------|
/// | 0  | tiny     | 0.80     | 20      | 256    | open        |
/// | 1  | small    | 0.85     | 40      | 512    | research    |
/// | 2  | base     | 0.90     | 80      | 512    | open        |
/// | 3  | large    | 0.95     | 150     | 1024   | proprietary |
pub fn model_zoo_store() -> CandidateStore {
    let rows = [
        ("tiny", 0.80, 20.0, 256.0, 2.0),
        ("small", 0.85, 40.0, 512.0, 1.0),
        ("base", 0.90, 80.0, 512.0, 2.0),
        ("large", 0.95, 150.0, 1024.0, 0.0),
    ];
    let candidates = rows
        .iter()
        .enumerate()
        .map(|(i, &(label, accuracy, latency, memory, license))| {
            Candidate::new(CandidateId(i), label)
                .with_value("accuracy", accuracy)
                .with_value("latency", latency)
                .with_value("memory", memory)
                .with_value("license", license)
        })
        .collect();
    CandidateStore::new(zoo_metrics(), candidates).expect("valid fixture")
}

/// The [`model_zoo_store`] scenario as the loader's JSON payload.
///
/// The last candidate uses the flat `uid -> value` form.
pub fn model_zoo_json() -> &'static str {
    r#"{
        "metadata": {
            "metrics": {
                "accuracy": {
                    "name": "Accuracy", "type": "quantitative", "higherIsBetter": true,
                    "range_min": 0, "range_max": 1, "decimals": 2
                },
                "latency": {
                    "name": "Latency (ms)", "type": "quantitative", "higherIsBetter": false,
                    "range_min": 0, "range_max": 200
                },
                "memory": {
                    "name": "Memory (MB)", "type": "quantitative", "higherIsBetter": false,
                    "range_min": 0, "range_max": 2048
                },
                "license": {
                    "name": "License", "type": "qualitative", "higherIsBetter": true,
                    "options": ["proprietary", "research", "open"]
                }
            }
        },
        "candidates": [
            { "id": "tiny", "values": { "accuracy": 0.80, "latency": 20, "memory": 256, "license": 2 } },
            { "id": "small", "values": { "accuracy": 0.85, "latency": 40, "memory": 512, "license": 1 } },
            { "id": "base", "values": { "accuracy": 0.90, "latency": 80, "memory": 512, "license": 2 } },
            { "accuracy": 0.95, "latency": 150, "memory": 1024, "license": 0 }
        ]
    }"#
}
