//! Seeded random populations.
//!
//! Half of the values sit exactly on each metric's display grid so that
//! exact ties and bound-edge hits occur often enough to matter; the rest are
//! raw draws or float sums of grid values that land just off it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tradeoff_core::range::round_to;
use tradeoff_core::{
    Bound, Candidate, CandidateId, CandidateStore, ConstraintMapping, Direction, MetricDescriptor,
    MetricSet,
};

/// A store with `n_candidates` candidates over `n_metrics` quantitative
/// metrics named `m0`, `m1`, ... with random directions and precisions.
pub fn random_store(seed: u64, n_candidates: usize, n_metrics: usize) -> CandidateStore {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let descriptors: Vec<MetricDescriptor> = (0..n_metrics)
        .map(|i| {
            let direction = Direction::from_higher_is_better(rng.random_bool(0.5));
            let mut m = MetricDescriptor::quantitative(format!("m{i}"), format!("Metric {i}"), 0.0, 100.0)
                .with_direction(direction);
            if let Some(d) = [None, Some(1), Some(2)][rng.random_range(0..3)] {
                m = m.with_decimals(d);
            }
            m
        })
        .collect();

    let candidates = (0..n_candidates)
        .map(|c| {
            let mut candidate = Candidate::new(CandidateId(c), format!("c{c}"));
            for m in &descriptors {
                let decimals = m.decimals.unwrap_or(0);
                let raw: f64 = rng.random_range(0.0..99.0);
                let value = match rng.random_range(0..4) {
                    0 => raw,
                    // sum of two grid values, e.g. 0.1 + 0.2
                    1 => round_to(raw, decimals) + round_to(rng.random_range(0.0..1.0), decimals.max(1)),
                    _ => round_to(raw, decimals),
                };
                candidate = candidate.with_value(m.uid.clone(), value);
            }
            candidate
        })
        .collect();

    let metrics: MetricSet = descriptors.into_iter().collect();
    CandidateStore::new(metrics, candidates).expect("random fixture is valid")
}

/// Random sub-intervals spanned by two observed values per metric.
///
/// Every bound lies inside the population's observed range, but the
/// mapping as a whole may filter everything out.
pub fn random_bounds(seed: u64, store: &CandidateStore) -> ConstraintMapping {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n = store.len();

    store
        .metrics()
        .iter()
        .filter_map(|m| {
            let a = store.candidates()[rng.random_range(0..n)].get(&m.uid)?;
            let b = store.candidates()[rng.random_range(0..n)].get(&m.uid)?;
            Some((m.uid.clone(), Bound::new(a.min(b), a.max(b))))
        })
        .collect()
}
