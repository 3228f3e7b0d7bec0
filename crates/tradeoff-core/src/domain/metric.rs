//! Metric descriptors.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Result, TradeoffError};
use crate::range::slider_step;

/// Key identifying a metric across descriptors, candidates and bounds.
pub type MetricId = Arc<str>;

/// Most display decimals a metric may declare; f64 carries about 15
/// significant decimal digits.
pub const MAX_DECIMALS: u32 = 15;

/// Direction in which a metric improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    /// Maps the payload's `higherIsBetter` flag onto a direction.
    pub fn from_higher_is_better(higher_is_better: bool) -> Self {
        if higher_is_better {
            Direction::HigherIsBetter
        } else {
            Direction::LowerIsBetter
        }
    }

    pub fn higher_is_better(self) -> bool {
        matches!(self, Direction::HigherIsBetter)
    }

    /// Returns true if `a` is strictly better than `b`.
    ///
    /// # Example
    ///
    /// ```
    /// use tradeoff_core::Direction;
    ///
    /// assert!(Direction::HigherIsBetter.is_better(0.9, 0.8));
    /// assert!(Direction::LowerIsBetter.is_better(0.1, 0.3));
    /// assert!(!Direction::LowerIsBetter.is_better(0.3, 0.3));
    /// ```
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Direction::HigherIsBetter => a > b,
            Direction::LowerIsBetter => a < b,
        }
    }

    /// Returns the better of two values.
    pub fn best(self, a: f64, b: f64) -> f64 {
        if self.is_better(b, a) {
            b
        } else {
            a
        }
    }
}

/// Quantitative metrics carry numbers; qualitative ones an ordered option list.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricKind {
    Quantitative,
    /// Candidate values are 0-based indices into `options`.
    Qualitative { options: Vec<String> },
}

/// Describes one evaluation dimension of the scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDescriptor {
    pub uid: MetricId,
    /// Display name.
    pub name: String,
    pub kind: MetricKind,
    pub direction: Direction,
    pub range_min: f64,
    pub range_max: f64,
    /// Display precision; `None` means whole numbers.
    pub decimals: Option<u32>,
}

impl MetricDescriptor {
    /// Creates a quantitative metric over `[range_min, range_max]`.
    ///
    /// Higher values are better until [`lower_is_better`](Self::lower_is_better)
    /// is applied.
    pub fn quantitative(
        uid: impl Into<MetricId>,
        name: impl Into<String>,
        range_min: f64,
        range_max: f64,
    ) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            kind: MetricKind::Quantitative,
            direction: Direction::HigherIsBetter,
            range_min,
            range_max,
            decimals: None,
        }
    }

    /// Creates a qualitative metric whose range spans the option indices.
    pub fn qualitative<I, S>(uid: impl Into<MetricId>, name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let range_max = options.len().saturating_sub(1) as f64;
        Self {
            uid: uid.into(),
            name: name.into(),
            kind: MetricKind::Qualitative { options },
            direction: Direction::HigherIsBetter,
            range_min: 0.0,
            range_max,
            decimals: None,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn lower_is_better(self) -> Self {
        self.with_direction(Direction::LowerIsBetter)
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn is_qualitative(&self) -> bool {
        matches!(self.kind, MetricKind::Qualitative { .. })
    }

    /// Options of a qualitative metric, empty for quantitative ones.
    pub fn options(&self) -> &[String] {
        match &self.kind {
            MetricKind::Qualitative { options } => options,
            MetricKind::Quantitative => &[],
        }
    }

    /// Smallest adjustable increment for this metric's bound.
    pub fn slider_step(&self) -> f64 {
        if self.is_qualitative() {
            return 1.0;
        }
        slider_step(self.decimals)
    }

    /// Renders a raw value the way it is displayed next to the slider.
    ///
    /// ```
    /// use tradeoff_core::MetricDescriptor;
    ///
    /// let fpr = MetricDescriptor::quantitative("fpr", "FPR", 0.0, 1.0).with_decimals(2);
    /// assert_eq!(fpr.format_value(0.1), "0.10");
    ///
    /// let tier = MetricDescriptor::qualitative("tier", "Tier", ["low", "mid", "high"]);
    /// assert_eq!(tier.format_value(2.0), "high");
    /// ```
    pub fn format_value(&self, value: f64) -> String {
        if let MetricKind::Qualitative { options } = &self.kind {
            let idx = value.round();
            if idx >= 0.0 {
                if let Some(label) = options.get(idx as usize) {
                    return label.clone();
                }
            }
        }
        format!("{:.*}", self.decimals.unwrap_or(0) as usize, value)
    }

    /// Checks the descriptor's own consistency.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| TradeoffError::InvalidDescriptor {
            metric: self.uid.to_string(),
            reason: reason.to_string(),
        };

        if !self.range_min.is_finite() || !self.range_max.is_finite() {
            return Err(invalid("range is not finite"));
        }
        if self.range_min > self.range_max {
            return Err(invalid("range_min exceeds range_max"));
        }
        if self.decimals.is_some_and(|d| d > MAX_DECIMALS) {
            return Err(invalid("decimals exceed what f64 can represent"));
        }
        if let MetricKind::Qualitative { options } = &self.kind {
            if options.is_empty() {
                return Err(invalid("qualitative metric has no options"));
            }
        }
        Ok(())
    }

    /// Checks that a candidate value is usable for this metric.
    pub(crate) fn check_value(&self, candidate: usize, value: f64) -> Result<()> {
        let invalid = |reason: String| TradeoffError::InvalidValue {
            candidate,
            metric: self.uid.to_string(),
            reason,
        };

        if !value.is_finite() {
            return Err(invalid("value is not finite".to_string()));
        }
        if let MetricKind::Qualitative { options } = &self.kind {
            if value.fract() != 0.0 || value < 0.0 || value as usize >= options.len() {
                return Err(invalid(format!(
                    "{} is not an index into {} options",
                    value,
                    options.len()
                )));
            }
        }
        Ok(())
    }
}

/// The scenario's metric descriptors keyed by uid.
///
/// Iteration follows uid order; this is the fixed metric ordering used for
/// position vectors and distances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSet {
    metrics: BTreeMap<MetricId, MetricDescriptor>,
}

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor, replacing any previous one with the same uid.
    pub fn insert(&mut self, descriptor: MetricDescriptor) {
        self.metrics.insert(descriptor.uid.clone(), descriptor);
    }

    pub fn with(mut self, descriptor: MetricDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    pub fn get(&self, uid: &str) -> Option<&MetricDescriptor> {
        self.metrics.get(uid)
    }

    /// Looks up a descriptor, failing with [`TradeoffError::UnknownMetric`].
    pub fn require(&self, uid: &str) -> Result<&MetricDescriptor> {
        self.get(uid)
            .ok_or_else(|| TradeoffError::UnknownMetric(uid.to_string()))
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.metrics.contains_key(uid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricDescriptor> {
        self.metrics.values()
    }

    pub fn uids(&self) -> impl Iterator<Item = &MetricId> {
        self.metrics.keys()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        self.iter().try_for_each(MetricDescriptor::validate)
    }
}

impl FromIterator<MetricDescriptor> for MetricSet {
    fn from_iter<T: IntoIterator<Item = MetricDescriptor>>(iter: T) -> Self {
        let mut set = MetricSet::new();
        for descriptor in iter {
            set.insert(descriptor);
        }
        set
    }
}
