//! Bounds and the constraint mapping.

use std::collections::BTreeMap;

use super::metric::{Direction, MetricId};
use crate::range::round_to;

/// A closed interval `[lower, upper]` on a metric's raw scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound {
    pub lower: f64,
    pub upper: f64,
}

impl Bound {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Returns true if `value` lies inside the interval, edges included.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Returns true if this interval lies entirely inside `outer`.
    pub fn is_within(&self, outer: &Bound) -> bool {
        outer.lower <= self.lower && self.upper <= outer.upper
    }

    pub fn is_inverted(&self) -> bool {
        self.lower > self.upper
    }

    pub fn is_finite(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    /// The edge the user drags to demand a better value: the lower edge
    /// when higher is better, the upper edge otherwise.
    pub fn active_edge(&self, direction: Direction) -> f64 {
        match direction {
            Direction::HigherIsBetter => self.lower,
            Direction::LowerIsBetter => self.upper,
        }
    }

    /// Moves the active edge one `step` towards stricter values.
    ///
    /// The moved edge is re-rounded to `decimals` so repeated steps do not
    /// accumulate floating point drift. The result may be inverted.
    ///
    /// ```
    /// use tradeoff_core::{Bound, Direction};
    ///
    /// let b = Bound::new(0.0, 0.2);
    /// assert_eq!(b.tightened(Direction::LowerIsBetter, 0.1, Some(1)), Bound::new(0.0, 0.1));
    /// assert_eq!(b.tightened(Direction::HigherIsBetter, 0.1, Some(1)), Bound::new(0.1, 0.2));
    /// ```
    pub fn tightened(&self, direction: Direction, step: f64, decimals: Option<u32>) -> Bound {
        let snap = |v: f64| match decimals {
            Some(d) => round_to(v, d),
            None => v,
        };
        match direction {
            Direction::HigherIsBetter => Bound::new(snap(self.lower + step), self.upper),
            Direction::LowerIsBetter => Bound::new(self.lower, snap(self.upper - step)),
        }
    }

    /// Smallest widening of this interval that contains `value`.
    pub fn widened_to(&self, value: f64) -> Bound {
        Bound::new(self.lower.min(value), self.upper.max(value))
    }
}

/// Per-metric bounds currently in force.
///
/// Values of this type are immutable from the outside: a changed mapping is
/// produced by [`with_bound`](Self::with_bound), leaving the original intact
/// for simulations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintMapping {
    bounds: BTreeMap<MetricId, Bound>,
}

impl ConstraintMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, uid: &str) -> Option<Bound> {
        self.bounds.get(uid).copied()
    }

    /// Returns a copy of the mapping with `uid` bound to `bound`.
    pub fn with_bound(&self, uid: impl Into<MetricId>, bound: Bound) -> Self {
        let mut next = self.clone();
        next.bounds.insert(uid.into(), bound);
        next
    }

    /// Returns a copy restricted to the keys accepted by `keep`.
    pub fn retain_keys(&self, mut keep: impl FnMut(&str) -> bool) -> Self {
        Self {
            bounds: self
                .bounds
                .iter()
                .filter(|(k, _)| keep(k))
                .map(|(k, b)| (k.clone(), *b))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MetricId, &Bound)> {
        self.bounds.iter()
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.bounds.contains_key(uid)
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

impl<K: Into<MetricId>> FromIterator<(K, Bound)> for ConstraintMapping {
    fn from_iter<T: IntoIterator<Item = (K, Bound)>>(iter: T) -> Self {
        Self {
            bounds: iter.into_iter().map(|(k, b)| (k.into(), b)).collect(),
        }
    }
}
