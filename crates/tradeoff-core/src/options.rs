//! Engine policy parameters.
//!
//! The filter, range and heuristic functions share one implementation each;
//! the behavioural differences callers may want are expressed here instead
//! of in separate code paths.

/// How the filter treats a candidate that has no value for a bounded metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MissingKeyPolicy {
    /// Only keys present in both the candidate and the bounds are checked.
    #[default]
    Vacuous,

    /// A candidate missing any bounded key is filtered out.
    Exclude,
}

/// How maximum ranges are derived from the observed population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RangeRounding {
    /// Floor the minimum and ceil the maximum at the metric's display precision.
    #[default]
    Precision,

    /// Use the observed minimum and maximum unchanged.
    Raw,
}

/// Parameters shared by the filter, range and heuristic computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    pub missing_key_policy: MissingKeyPolicy,
    pub range_rounding: RangeRounding,
    /// Distances closer than this to the minimum count as tied.
    pub tie_tolerance: f64,
    /// Importance weight for metrics whose standard deviation is zero or undefined.
    pub zero_variance_weight: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            missing_key_policy: MissingKeyPolicy::default(),
            range_rounding: RangeRounding::default(),
            tie_tolerance: 1e-9,
            zero_variance_weight: 0.0,
        }
    }
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_key_policy(mut self, policy: MissingKeyPolicy) -> Self {
        self.missing_key_policy = policy;
        self
    }

    pub fn with_range_rounding(mut self, rounding: RangeRounding) -> Self {
        self.range_rounding = rounding;
        self
    }

    pub fn with_tie_tolerance(mut self, tolerance: f64) -> Self {
        self.tie_tolerance = tolerance;
        self
    }

    pub fn with_zero_variance_weight(mut self, weight: f64) -> Self {
        self.zero_variance_weight = weight;
        self
    }
}
