//! Interactive exploration state.
//!
//! [`Explorer`] owns the candidate store and the constraint mapping for one
//! scenario. Every change to the constraints goes through
//! [`Explorer::commit_bound`], which refuses any bound that would leave no
//! candidate, and rebuilds the [`DerivedView`] before returning.

mod view;

#[cfg(test)]
mod tests;

use tracing::info;
use tradeoff_config::ExplorerConfig;
use tradeoff_core::unblock::relaxations_for;
use tradeoff_core::{
    best_values, initialize_constraints, is_blocked, max_ranges, suggest_unblock, Bound, CandidateId,
    CandidateStore, ConstraintMapping, EngineOptions, FilterEngine, MaxRanges, MetricId, Relaxation,
    Result, TradeoffError, UnblockOutcome,
};

use crate::error::ScenarioError;
use crate::preference::PreferenceSession;
use crate::scenario::load_scenario;

pub use view::{BlockingStatus, DerivedView, MetricView};

/// Result of a bound commit.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// The bound is in force; the derived view now has `version`.
    Committed { version: u64, remaining: usize },
    /// The bound would have filtered out every candidate; `retained` is
    /// still in force.
    Rejected { attempted: Bound, retained: Bound },
}

impl CommitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, CommitOutcome::Committed { .. })
    }
}

/// The final constraints and the candidates they admit.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub constraints: ConstraintMapping,
    pub candidates: Vec<CandidateId>,
    pub labels: Vec<String>,
    pub version: u64,
}

/// State container for one exploration session.
#[derive(Debug, Clone)]
pub struct Explorer {
    store: CandidateStore,
    options: EngineOptions,
    max_ranges: MaxRanges,
    constraints: ConstraintMapping,
    selection: Option<MetricId>,
    version: u64,
    view: DerivedView,
}

impl Explorer {
    /// Starts a session with every metric unconstrained.
    ///
    /// # Errors
    ///
    /// Fails with [`TradeoffError::EmptyCandidateSet`] if the configured
    /// missing-key policy already excludes every candidate.
    ///
    /// # Example
    ///
    /// ```
    /// use tradeoff::{Explorer, ExplorerConfig};
    ///
    /// let store = tradeoff::load_scenario(r#"{
    ///     "metadata": { "metrics": {
    ///         "fpr":  { "higherIsBetter": false, "range_min": 0, "range_max": 1, "decimals": 2 },
    ///         "cost": { "higherIsBetter": false, "range_min": 0, "range_max": 10 }
    ///     } },
    ///     "candidates": [ { "fpr": 0.1, "cost": 5 }, { "fpr": 0.3, "cost": 2 } ]
    /// }"#).unwrap();
    ///
    /// let mut explorer = Explorer::new(store, &ExplorerConfig::default()).unwrap();
    /// assert_eq!(explorer.view().summary(), "2 of 2");
    ///
    /// let outcome = explorer.commit_bound("fpr", 0.0, 0.2).unwrap();
    /// assert!(outcome.is_committed());
    /// assert_eq!(explorer.view().summary(), "1 of 2");
    /// ```
    pub fn new(store: CandidateStore, config: &ExplorerConfig) -> Result<Self> {
        let options = config.engine_options();
        let max_ranges = max_ranges(store.candidates(), store.metrics(), options.range_rounding);
        let constraints = initialize_constraints(&max_ranges);
        let view = build_view(&store, &constraints, &options, 0)?;

        Ok(Self {
            store,
            options,
            max_ranges,
            constraints,
            selection: None,
            version: 0,
            view,
        })
    }

    /// Loads a scenario document and starts a session on it.
    pub fn from_json_str(json: &str, config: &ExplorerConfig) -> std::result::Result<Self, ScenarioError> {
        let store = load_scenario(json)?;
        Ok(Self::new(store, config)?)
    }

    pub fn store(&self) -> &CandidateStore {
        &self.store
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn constraints(&self) -> &ConstraintMapping {
        &self.constraints
    }

    pub fn max_ranges(&self) -> &MaxRanges {
        &self.max_ranges
    }

    /// Incremented by every committed change to the constraints.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    /// Current bound of `uid`.
    pub fn bound(&self, uid: &str) -> Result<Bound> {
        self.store.metric(uid)?;
        self.constraints
            .get(uid)
            .ok_or_else(|| TradeoffError::MissingBound(uid.to_string()))
    }

    /// Replaces the bound of one metric.
    ///
    /// # Errors
    ///
    /// Malformed requests are errors: an unknown metric, a non-finite or
    /// inverted interval, or one reaching outside the
    /// [permissible range](Self::permissible_range).
    /// A well-formed bound that would filter out every candidate is not an
    /// error; it yields [`CommitOutcome::Rejected`] and changes nothing.
    pub fn commit_bound(&mut self, uid: &str, lower: f64, upper: f64) -> Result<CommitOutcome> {
        let metric = self.store.metric(uid)?;
        let attempted = Bound::new(lower, upper);
        self.check_bound(uid, attempted)?;

        let retained = self.bound(uid)?;
        let proposed = self.constraints.with_bound(metric.uid.clone(), attempted);
        let engine = FilterEngine::new(self.store.metrics(), self.options.missing_key_policy);

        if engine.eliminates_all(self.store.candidates(), &proposed) {
            info!(
                event = "bound_rejected",
                metric = uid,
                lower,
                upper,
                version = self.version
            );
            return Ok(CommitOutcome::Rejected {
                attempted,
                retained,
            });
        }

        let view = build_view(&self.store, &proposed, &self.options, self.version + 1)?;
        self.constraints = proposed;
        self.version += 1;
        self.view = view;

        info!(
            event = "bound_committed",
            metric = uid,
            lower,
            upper,
            version = self.version,
            remaining = self.view.remaining()
        );

        Ok(CommitOutcome::Committed {
            version: self.version,
            remaining: self.view.remaining(),
        })
    }

    fn check_bound(&self, uid: &str, attempted: Bound) -> Result<()> {
        let (lower, upper) = (attempted.lower, attempted.upper);
        if !attempted.is_finite() {
            return Err(TradeoffError::NonFinite(uid.to_string()));
        }
        if attempted.is_inverted() {
            return Err(TradeoffError::InvertedBound {
                metric: uid.to_string(),
                lower,
                upper,
            });
        }
        let permissible = self.permissible_range(uid)?;
        if !attempted.is_within(&permissible) {
            return Err(TradeoffError::OutOfRange {
                metric: uid.to_string(),
                lower,
                upper,
                min: permissible.lower,
                max: permissible.upper,
            });
        }
        Ok(())
    }

    /// Widest bound `uid` may be committed to: the descriptor range,
    /// stretched to the max range where the population reaches beyond it.
    pub fn permissible_range(&self, uid: &str) -> Result<Bound> {
        let metric = self.store.metric(uid)?;
        let max = self
            .max_ranges
            .get(uid)
            .copied()
            .ok_or_else(|| TradeoffError::MissingBound(uid.to_string()))?;
        Ok(Bound::new(
            metric.range_min.min(max.lower),
            metric.range_max.max(max.upper),
        ))
    }

    /// Restores one metric to its max range.
    pub fn reset_bound(&mut self, uid: &str) -> Result<CommitOutcome> {
        self.store.metric(uid)?;
        let max = self
            .max_ranges
            .get(uid)
            .copied()
            .ok_or_else(|| TradeoffError::MissingBound(uid.to_string()))?;
        self.commit_bound(uid, max.lower, max.upper)
    }

    /// Restores every metric to its max range.
    pub fn reset_all(&mut self) -> Result<()> {
        let constraints = initialize_constraints(&self.max_ranges);
        let view = build_view(&self.store, &constraints, &self.options, self.version + 1)?;
        self.constraints = constraints;
        self.version += 1;
        self.view = view;
        info!(event = "constraints_reset", version = self.version);
        Ok(())
    }

    /// Marks `uid` as the metric the user is adjusting.
    pub fn select(&mut self, uid: &str) -> Result<()> {
        let metric = self.store.metric(uid)?;
        self.selection = Some(metric.uid.clone());
        info!(event = "selection_changed", metric = uid);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn metric_view(&self, uid: &str) -> Result<MetricView> {
        let metric = self.store.metric(uid)?;
        let bound = self.bound(uid)?;
        let max_range = self.max_ranges.get(uid).copied().unwrap_or(bound);
        let best = self.view.best.get(uid).copied();

        Ok(MetricView {
            uid: metric.uid.clone(),
            name: metric.name.clone(),
            direction: metric.direction,
            bound,
            max_range,
            step: metric.slider_step(),
            best,
            best_label: best.map(|v| metric.format_value(v)),
        })
    }

    /// Views for every metric, in metric order.
    pub fn metric_views(&self) -> Result<Vec<MetricView>> {
        self.store
            .metrics()
            .uids()
            .map(|uid| self.metric_view(uid))
            .collect()
    }

    /// Whether one more step on `uid` would leave no candidate.
    pub fn is_blocked(&self, uid: &str) -> Result<bool> {
        is_blocked(
            uid,
            &self.constraints,
            self.store.candidates(),
            self.store.metrics(),
            self.options.missing_key_policy,
        )
    }

    /// Unblocking suggestion for the selected metric, blocked or not.
    pub fn suggest_unblock(&self) -> Result<UnblockOutcome> {
        suggest_unblock(self.selection(), &self.store, &self.constraints, &self.options)
    }

    /// Blocking state of the selected metric, with a suggestion when blocked.
    pub fn blocking(&self) -> Result<BlockingStatus> {
        let Some(metric) = self.selection.clone() else {
            return Ok(BlockingStatus::NoSelection);
        };
        if !self.is_blocked(&metric)? {
            return Ok(BlockingStatus::Clear { metric });
        }
        let unblock = self.suggest_unblock()?;
        Ok(BlockingStatus::Blocked { metric, unblock })
    }

    /// Widens every bound that excludes candidate `id`, one commit each.
    ///
    /// Returns the relaxations applied; empty if the candidate already passes.
    /// Every relaxed bound is checked before the first commit, so an error
    /// leaves the constraints untouched.
    pub fn admit_candidate(&mut self, id: CandidateId) -> Result<Vec<Relaxation>> {
        let candidate = self.store.require(id)?;
        let relaxations = relaxations_for(candidate, &self.constraints, self.store.metrics());

        for relaxation in &relaxations {
            self.check_bound(&relaxation.metric, relaxation.relaxed)?;
        }
        for relaxation in &relaxations {
            let relaxed = relaxation.relaxed;
            let outcome = self.commit_bound(&relaxation.metric, relaxed.lower, relaxed.upper)?;
            debug_assert!(outcome.is_committed(), "widening a bound cannot empty the set");
        }
        Ok(relaxations)
    }

    /// Starts pairwise comparison over the remaining candidates.
    pub fn preference_session(&self) -> PreferenceSession {
        PreferenceSession::new(self.view.filtered.iter().copied())
    }

    /// Hands the final constraints over, ending the session.
    pub fn submit(self) -> Submission {
        let labels = self
            .view
            .filtered
            .iter()
            .filter_map(|id| self.store.get(*id))
            .map(|c| c.label.clone())
            .collect();

        info!(
            event = "submitted",
            version = self.version,
            remaining = self.view.remaining()
        );

        Submission {
            constraints: self.constraints,
            candidates: self.view.filtered,
            labels,
            version: self.version,
        }
    }
}

fn build_view(
    store: &CandidateStore,
    constraints: &ConstraintMapping,
    options: &EngineOptions,
    version: u64,
) -> Result<DerivedView> {
    let engine = FilterEngine::new(store.metrics(), options.missing_key_policy);
    let filtered = engine.apply(store.candidates(), constraints);
    let best = best_values(filtered.iter().copied(), store.metrics())?;

    Ok(DerivedView {
        version,
        filtered: filtered.iter().map(|c| c.id).collect(),
        total: store.len(),
        best,
    })
}
