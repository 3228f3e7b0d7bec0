//! Unblocking heuristic.
//!
//! When the user cannot tighten the selected metric any further, every
//! candidate in the full population that beats the current optimum on that
//! metric is a way out: relaxing the other bounds that exclude it lets the
//! selected metric improve. Of those candidates, the ones nearest to the
//! current bound positions under an inverse-standard-deviation weighted
//! Euclidean metric disturb the other constraints least, and are suggested.

mod weights;


use smallvec::SmallVec;
use tracing::debug;

use crate::best::best_values;
use crate::domain::{Bound, Candidate, CandidateId, CandidateStore, ConstraintMapping, MetricId, MetricSet};
use crate::error::Result;
use crate::filter::FilterEngine;
use crate::options::EngineOptions;

pub use weights::{metric_importance, position_vector, standard_deviation, value_vector, weighted_distance};

/// One bound that must widen to admit a suggested candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Relaxation {
    pub metric: MetricId,
    pub current: Bound,
    pub relaxed: Bound,
}

/// A candidate offered as a way out of a blocked state.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestedCandidate {
    pub id: CandidateId,
    pub distance: f64,
    /// Bounds to relax, in metric order. Committing all of them admits the
    /// candidate.
    pub relaxations: Vec<Relaxation>,
}

/// The nearest improving candidates for a blocked metric.
#[derive(Debug, Clone, PartialEq)]
pub struct UnblockSuggestion {
    pub metric: MetricId,
    pub min_distance: f64,
    /// All candidates tied at `min_distance`, in id order.
    pub candidates: SmallVec<[SuggestedCandidate; 2]>,
}

impl UnblockSuggestion {
    pub fn ids(&self) -> impl Iterator<Item = CandidateId> + '_ {
        self.candidates.iter().map(|c| c.id)
    }

    pub fn get(&self, id: CandidateId) -> Option<&SuggestedCandidate> {
        self.candidates.iter().find(|c| c.id == id)
    }
}

/// Result of asking for an unblocking suggestion.
#[derive(Debug, Clone, PartialEq)]
pub enum UnblockOutcome {
    /// No metric is selected; nothing to suggest for.
    NoSelection,
    /// No candidate anywhere improves on the current optimum.
    NoSuggestion,
    Suggested(UnblockSuggestion),
}

impl UnblockOutcome {
    pub fn suggestion(&self) -> Option<&UnblockSuggestion> {
        match self {
            UnblockOutcome::Suggested(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_suggested(&self) -> bool {
        matches!(self, UnblockOutcome::Suggested(_))
    }
}

/// Suggests the least invasive way to improve `selection` further.
///
/// # Errors
///
/// Fails if `selection` names an unknown metric, or if `constraints`
/// already filter the population to nothing (the explorer never commits
/// such a mapping).
pub fn suggest_unblock(
    selection: Option<&str>,
    store: &CandidateStore,
    constraints: &ConstraintMapping,
    options: &EngineOptions,
) -> Result<UnblockOutcome> {
    let Some(uid) = selection else {
        return Ok(UnblockOutcome::NoSelection);
    };
    let metric = store.metric(uid)?;
    let metrics = store.metrics();

    let engine = FilterEngine::new(metrics, options.missing_key_policy);
    let filtered = engine.apply(store.candidates(), constraints);
    let active = best_values(filtered, metrics)?;

    let Some(&optimum) = active.get(uid) else {
        debug!(event = "suggestion_computed", metric = uid, outcome = "no_optimum");
        return Ok(UnblockOutcome::NoSuggestion);
    };

    let pool: Vec<&Candidate> = store
        .candidates()
        .iter()
        .filter(|c| c.get(uid).is_some_and(|v| metric.direction.is_better(v, optimum)))
        .collect();

    if pool.is_empty() {
        debug!(event = "suggestion_computed", metric = uid, outcome = "none", optimum);
        return Ok(UnblockOutcome::NoSuggestion);
    }

    let position = position_vector(constraints, metrics);
    let weights = metric_importance(store, options.zero_variance_weight);

    let scored: Vec<(&Candidate, f64)> = pool
        .into_iter()
        .map(|c| {
            let d = weighted_distance(&value_vector(c, metrics), &position, &weights);
            (c, d)
        })
        .collect();

    let min_distance = scored
        .iter()
        .map(|(_, d)| *d)
        .fold(f64::INFINITY, f64::min);

    let candidates: SmallVec<[SuggestedCandidate; 2]> = scored
        .into_iter()
        .filter(|(_, d)| *d - min_distance <= options.tie_tolerance)
        .map(|(c, distance)| SuggestedCandidate {
            id: c.id,
            distance,
            relaxations: relaxations_for(c, constraints, metrics),
        })
        .collect();

    debug!(
        event = "suggestion_computed",
        metric = uid,
        outcome = "suggested",
        optimum,
        min_distance,
        suggestions = candidates.len()
    );

    Ok(UnblockOutcome::Suggested(UnblockSuggestion {
        metric: metric.uid.clone(),
        min_distance,
        candidates,
    }))
}

/// Bounds that currently exclude `candidate`, each widened just enough.
pub fn relaxations_for(
    candidate: &Candidate,
    constraints: &ConstraintMapping,
    metrics: &MetricSet,
) -> Vec<Relaxation> {
    metrics
        .iter()
        .filter_map(|m| {
            let current = constraints.get(&m.uid)?;
            let value = candidate.get(&m.uid)?;
            (!current.contains(value)).then(|| Relaxation {
                metric: m.uid.clone(),
                current,
                relaxed: current.widened_to(value),
            })
        })
        .collect()
}
