//! Candidate records.

use std::collections::BTreeMap;
use std::fmt;

use super::metric::MetricId;

/// Position of a candidate in its [`CandidateStore`](super::CandidateStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateId(pub usize);

impl CandidateId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One scored option, e.g. a model configuration.
///
/// Values are raw metric values; qualitative metrics hold the option index.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: CandidateId,
    pub label: String,
    values: BTreeMap<MetricId, f64>,
}

impl Candidate {
    pub fn new(id: CandidateId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            values: BTreeMap::new(),
        }
    }

    /// Builds a candidate from `(uid, value)` pairs, labelled by its index.
    ///
    /// ```
    /// use tradeoff_core::{Candidate, CandidateId};
    ///
    /// let c = Candidate::from_values(CandidateId(0), [("fpr", 0.1), ("cost", 5.0)]);
    /// assert_eq!(c.get("fpr"), Some(0.1));
    /// assert_eq!(c.get("auc"), None);
    /// ```
    pub fn from_values<I, K>(id: CandidateId, values: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<MetricId>,
    {
        let mut candidate = Candidate::new(id, id.0.to_string());
        candidate.values = values.into_iter().map(|(k, v)| (k.into(), v)).collect();
        candidate
    }

    pub fn with_value(mut self, uid: impl Into<MetricId>, value: f64) -> Self {
        self.values.insert(uid.into(), value);
        self
    }

    pub fn get(&self, uid: &str) -> Option<f64> {
        self.values.get(uid).copied()
    }

    pub fn has(&self, uid: &str) -> bool {
        self.values.contains_key(uid)
    }

    pub fn values(&self) -> impl Iterator<Item = (&MetricId, f64)> {
        self.values.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
