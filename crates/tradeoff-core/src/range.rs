//! Maximum ranges, initial constraints and slider precision.

use std::collections::BTreeMap;

use crate::domain::{Bound, Candidate, ConstraintMapping, MetricId, MetricSet};
use crate::options::RangeRounding;

/// Per-metric widest permissible interval.
pub type MaxRanges = BTreeMap<MetricId, Bound>;

// Scaled values this close to an integer are treated as that integer, so
// `0.1 * 100` floors to 10 rather than 9.
const SNAP_EPSILON: f64 = 1e-9;

fn scale(decimals: u32) -> f64 {
    10f64.powi(decimals as i32)
}

fn snapped(scaled: f64) -> f64 {
    let nearest = scaled.round();
    if (scaled - nearest).abs() < SNAP_EPSILON {
        nearest
    } else {
        scaled
    }
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = scale(decimals);
    (value * factor).round() / factor
}

/// Largest multiple of `10^-decimals` not above `value`.
pub fn floor_to(value: f64, decimals: u32) -> f64 {
    let factor = scale(decimals);
    let steps = snapped(value * factor).floor();
    // a snap may land one step above `value`
    if steps / factor > value {
        (steps - 1.0) / factor
    } else {
        steps / factor
    }
}

/// Smallest multiple of `10^-decimals` not below `value`.
pub fn ceil_to(value: f64, decimals: u32) -> f64 {
    let factor = scale(decimals);
    let steps = snapped(value * factor).ceil();
    if steps / factor < value {
        (steps + 1.0) / factor
    } else {
        steps / factor
    }
}

/// Minimum adjustable increment of a bound.
///
/// ```
/// use tradeoff_core::slider_step;
///
/// assert_eq!(slider_step(None), 1.0);
/// assert_eq!(slider_step(Some(0)), 1.0);
/// assert_eq!(slider_step(Some(2)), 0.01);
/// ```
pub fn slider_step(decimals: Option<u32>) -> f64 {
    match decimals {
        None => 1.0,
        Some(d) => round_to(10f64.powi(-(d as i32)), d),
    }
}

/// Computes the widest interval each metric may take.
///
/// Qualitative metrics span all option indices. Quantitative metrics span
/// the observed population, widened outward to the display precision under
/// [`RangeRounding::Precision`]. A metric no candidate carries falls back
/// to its descriptor range.
pub fn max_ranges(candidates: &[Candidate], metrics: &MetricSet, rounding: RangeRounding) -> MaxRanges {
    metrics
        .iter()
        .map(|metric| {
            if metric.is_qualitative() {
                let last = metric.options().len().saturating_sub(1) as f64;
                return (metric.uid.clone(), Bound::new(0.0, last));
            }

            let observed = candidates
                .iter()
                .filter_map(|c| c.get(&metric.uid))
                .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                    None => Some((v, v)),
                    Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                });

            let bound = match observed {
                None => Bound::new(metric.range_min, metric.range_max),
                Some((lo, hi)) => match rounding {
                    RangeRounding::Raw => Bound::new(lo, hi),
                    RangeRounding::Precision => {
                        let decimals = metric.decimals.unwrap_or(0);
                        Bound::new(floor_to(lo, decimals), ceil_to(hi, decimals))
                    }
                },
            };
            (metric.uid.clone(), bound)
        })
        .collect()
}

/// Starting constraints: every metric unconstrained within its max range.
pub fn initialize_constraints(max_ranges: &MaxRanges) -> ConstraintMapping {
    max_ranges.iter().map(|(k, b)| (k.clone(), *b)).collect()
}
