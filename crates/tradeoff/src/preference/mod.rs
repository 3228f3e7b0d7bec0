//! Pairwise preference elicitation over the narrowed candidate set.


use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;
use tradeoff_core::CandidateId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("Candidate {0} is not part of this comparison")]
    UnknownCandidate(CandidateId),

    #[error("Candidate {0} cannot be compared with itself")]
    SameCandidate(CandidateId),

    #[error("Pair {0} / {1} has already been judged")]
    AlreadyJudged(CandidateId, CandidateId),
}

/// Round-robin comparison of a fixed set of candidates.
///
/// Each unordered pair is asked once, in ascending `(first, second)` order.
#[derive(Debug, Clone, Default)]
pub struct PreferenceSession {
    candidates: Vec<CandidateId>,
    pairs: Vec<(CandidateId, CandidateId)>,
    // keyed by the ordered pair, value is the winner
    judged: BTreeMap<(CandidateId, CandidateId), CandidateId>,
}

impl PreferenceSession {
    pub fn new(ids: impl IntoIterator<Item = CandidateId>) -> Self {
        let mut candidates: Vec<CandidateId> = ids.into_iter().collect();
        candidates.sort_unstable();
        candidates.dedup();

        let pairs = candidates
            .iter()
            .enumerate()
            .flat_map(|(i, &a)| candidates[i + 1..].iter().map(move |&b| (a, b)))
            .collect();

        Self {
            candidates,
            pairs,
            judged: BTreeMap::new(),
        }
    }

    pub fn candidates(&self) -> &[CandidateId] {
        &self.candidates
    }

    /// First pair without a judgement, or `None` once complete.
    pub fn next_pair(&self) -> Option<(CandidateId, CandidateId)> {
        self.pairs
            .iter()
            .find(|pair| !self.judged.contains_key(*pair))
            .copied()
    }

    /// Stores that `winner` is preferred over `loser`.
    pub fn record(&mut self, winner: CandidateId, loser: CandidateId) -> Result<(), PreferenceError> {
        for id in [winner, loser] {
            if self.candidates.binary_search(&id).is_err() {
                return Err(PreferenceError::UnknownCandidate(id));
            }
        }
        if winner == loser {
            return Err(PreferenceError::SameCandidate(winner));
        }

        let key = (winner.min(loser), winner.max(loser));
        if self.judged.contains_key(&key) {
            return Err(PreferenceError::AlreadyJudged(key.0, key.1));
        }
        self.judged.insert(key, winner);

        let (done, total) = self.progress();
        debug!(event = "preference_recorded", %winner, %loser, done, total);
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.judged.len() == self.pairs.len()
    }

    /// `(judged, total)` pair counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.judged.len(), self.pairs.len())
    }

    pub fn wins(&self, id: CandidateId) -> usize {
        self.judged.values().filter(|&&w| w == id).count()
    }

    /// Candidates by wins, most first; equal wins keep ascending id order.
    pub fn ranking(&self) -> Vec<(CandidateId, usize)> {
        let mut tally: Vec<(CandidateId, usize)> =
            self.candidates.iter().map(|&id| (id, 0)).collect();
        for winner in self.judged.values() {
            if let Ok(idx) = self.candidates.binary_search(winner) {
                tally[idx].1 += 1;
            }
        }
        // stable sort keeps the id order among equals
        tally.sort_by(|a, b| b.1.cmp(&a.1));
        tally
    }
}
