//! The scenario's candidate population.

use std::collections::BTreeSet;

use tracing::{info, warn};

use super::candidate::{Candidate, CandidateId};
use super::metric::{MetricDescriptor, MetricSet};
use crate::error::{Result, TradeoffError};

/// Full candidate set plus metric metadata, fixed after load.
#[derive(Debug, Clone)]
pub struct CandidateStore {
    metrics: MetricSet,
    candidates: Vec<Candidate>,
}

impl CandidateStore {
    /// Validates and freezes a scenario.
    ///
    /// Candidate ids are reassigned to their position in `candidates`.
    /// Values for keys without a descriptor are kept but logged; they take
    /// no part in filtering or suggestions.
    ///
    /// # Errors
    ///
    /// Fails on an empty population, an inconsistent descriptor, or a
    /// candidate value that is non-finite or not a valid option index.
    pub fn new(metrics: MetricSet, candidates: Vec<Candidate>) -> Result<Self> {
        metrics.validate()?;
        if candidates.is_empty() {
            return Err(TradeoffError::EmptyCandidateSet);
        }

        let mut unknown: BTreeSet<String> = BTreeSet::new();
        let mut candidates = candidates;
        for (idx, candidate) in candidates.iter_mut().enumerate() {
            candidate.id = CandidateId(idx);
            for (uid, value) in candidate.values() {
                match metrics.get(uid) {
                    Some(descriptor) => descriptor.check_value(idx, value)?,
                    None => {
                        unknown.insert(uid.to_string());
                    }
                }
            }
        }

        for uid in &unknown {
            warn!(event = "unknown_candidate_key", metric = %uid);
        }

        info!(
            event = "scenario_loaded",
            metrics = metrics.len(),
            candidates = candidates.len()
        );

        Ok(Self {
            metrics,
            candidates,
        })
    }

    pub fn metrics(&self) -> &MetricSet {
        &self.metrics
    }

    pub fn metric(&self, uid: &str) -> Result<&MetricDescriptor> {
        self.metrics.require(uid)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.get(id.0)
    }

    pub fn require(&self, id: CandidateId) -> Result<&Candidate> {
        self.get(id).ok_or(TradeoffError::NoSuchCandidate(id.0))
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false for a constructed store; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Values of one metric across the whole population.
    pub fn column<'a>(&'a self, uid: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.candidates.iter().filter_map(move |c| c.get(uid))
    }
}
