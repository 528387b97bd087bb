use crate::error::{LimitViolation, Result};
use crate::points::PointCollection;

/// Tick positions along the axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Ticks {
    /// Let the tick producer choose.
    #[default]
    Auto,
    /// Explicit positions, drawn as given.
    Fixed(Vec<f64>),
}

impl From<Vec<f64>> for Ticks {
    fn from(ticks: Vec<f64>) -> Self {
        Self::Fixed(ticks)
    }
}

impl From<&[f64]> for Ticks {
    fn from(ticks: &[f64]) -> Self {
        Self::Fixed(ticks.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Ticks {
    fn from(ticks: [f64; N]) -> Self {
        Self::Fixed(ticks.to_vec())
    }
}

/// One end of the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bound {
    pub(crate) value: f64,
    /// Set explicitly by the caller; survives point replacement.
    pub(crate) pinned: bool,
}

impl Bound {
    fn derived(value: f64) -> Self {
        Self {
            value,
            pinned: false,
        }
    }

    fn pinned(value: f64) -> Self {
        Self {
            value,
            pinned: true,
        }
    }
}

/// Axis minimum and maximum, each either derived from points or pinned.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct AxisLimits {
    pub(crate) min: Option<Bound>,
    pub(crate) max: Option<Bound>,
}

impl AxisLimits {
    pub(crate) fn min(&self) -> Option<f64> {
        self.min.map(|b| b.value)
    }

    pub(crate) fn max(&self) -> Option<f64> {
        self.max.map(|b| b.value)
    }

    /// Pin the minimum, checked against the existing max and the ticks.
    pub(crate) fn with_min(self, min: f64, ticks: &Ticks) -> Result<Self> {
        let next = Self {
            min: Some(Bound::pinned(finite(min)?)),
            ..self
        };
        next.validate(ticks)?;
        Ok(next)
    }

    /// Pin the maximum, checked against the existing min and the ticks.
    pub(crate) fn with_max(self, max: f64, ticks: &Ticks) -> Result<Self> {
        let next = Self {
            max: Some(Bound::pinned(finite(max)?)),
            ..self
        };
        next.validate(ticks)?;
        Ok(next)
    }

    /// Pin both ends at once.
    pub(crate) fn pinned(min: f64, max: f64, ticks: &Ticks) -> Result<Self> {
        let next = Self {
            min: Some(Bound::pinned(finite(min)?)),
            max: Some(Bound::pinned(finite(max)?)),
        };
        next.validate(ticks)?;
        Ok(next)
    }

    /// Re-derive the unpinned ends from `points`; pinned ends are kept.
    ///
    /// A derived end is widened to take in every fixed tick and to stay clear of a
    /// pinned opposite end, so only pinned settings can conflict with each other.
    /// With no points, unpinned ends are forgotten.
    pub(crate) fn rederive(self, points: &PointCollection, ticks: &Ticks) -> Result<Self> {
        let pinned = |bound: Option<Bound>| bound.filter(|b| b.pinned);
        let (pinned_min, pinned_max) = (pinned(self.min), pinned(self.max));
        let (lowest_tick, highest_tick) = tick_extrema(ticks);

        let min = pinned_min.or_else(|| {
            let mut value = points.default_min()?;
            value = lowest_tick.map_or(value, |t| value.min(t));
            if let Some(max) = pinned_max {
                value = value.min(max.value - DERIVED_GAP);
            }
            Some(Bound::derived(value))
        });
        let max = pinned_max.or_else(|| {
            let mut value = points.default_max()?;
            value = highest_tick.map_or(value, |t| value.max(t));
            if let Some(min) = pinned_min {
                value = value.max(min.value + DERIVED_GAP);
            }
            Some(Bound::derived(value))
        });

        let next = Self { min, max };
        next.validate(ticks)?;
        Ok(next)
    }

    /// Drop every unpinned end.
    pub(crate) fn forget_derived(self) -> Self {
        Self {
            min: self.min.filter(|b| b.pinned),
            max: self.max.filter(|b| b.pinned),
        }
    }

    fn validate(&self, ticks: &Ticks) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min(), self.max()) {
            check_order(min, max)?;
            check_ticks(ticks, min, max)?;
        }
        Ok(())
    }
}

/// Distance kept between a derived end and a pinned opposite end.
const DERIVED_GAP: f64 = crate::points::DEFAULT_LIMIT_PADDING;

fn tick_extrema(ticks: &Ticks) -> (Option<f64>, Option<f64>) {
    match ticks {
        Ticks::Auto => (None, None),
        Ticks::Fixed(values) => (
            values.iter().copied().reduce(f64::min),
            values.iter().copied().reduce(f64::max),
        ),
    }
}

fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LimitViolation::NonFinite(value).into())
    }
}

/// `min` must be strictly below `max`.
pub(crate) fn check_order(min: f64, max: f64) -> Result<()> {
    if min < max {
        Ok(())
    } else {
        Err(LimitViolation::MinNotBelowMax { min, max }.into())
    }
}

/// Every fixed tick must be finite and lie within `[min, max]`.
pub(crate) fn check_ticks(ticks: &Ticks, min: f64, max: f64) -> Result<()> {
    let Ticks::Fixed(values) = ticks else {
        return Ok(());
    };
    for &tick in values {
        finite(tick)?;
        if tick < min {
            return Err(LimitViolation::TickBelowMin { tick, min }.into());
        }
        if tick > max {
            return Err(LimitViolation::TickAboveMax { tick, max }.into());
        }
    }
    Ok(())
}

/// Fixed ticks must be finite even before both limits exist.
pub(crate) fn check_tick_values(ticks: &Ticks) -> Result<()> {
    if let Ticks::Fixed(values) = ticks {
        for &tick in values {
            finite(tick)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NumberLineError;
    use crate::points::normalize;

    #[test]
    fn min_must_stay_below_max() {
        let limits = AxisLimits::default().with_max(3.0, &Ticks::Auto).unwrap();
        assert_eq!(
            limits.with_min(5.0, &Ticks::Auto),
            Err(NumberLineError::InvalidLimit(
                LimitViolation::MinNotBelowMax { min: 5.0, max: 3.0 }
            ))
        );
        assert!(limits.with_min(3.0, &Ticks::Auto).is_err());
        assert_eq!(limits.with_min(2.0, &Ticks::Auto).unwrap().min(), Some(2.0));
    }

    #[test]
    fn lone_bound_is_accepted() {
        let limits = AxisLimits::default().with_min(10.0, &Ticks::Auto).unwrap();
        assert_eq!(limits.min(), Some(10.0));
        assert_eq!(limits.max(), None);
    }

    #[test]
    fn ticks_checked_only_with_both_bounds() {
        let ticks = Ticks::from(vec![-1.0, 2.0, 3.0]);
        let limits = AxisLimits::default().with_min(0.0, &ticks).unwrap();
        assert_eq!(
            limits.with_max(4.0, &ticks),
            Err(NumberLineError::InvalidLimit(LimitViolation::TickBelowMin {
                tick: -1.0,
                min: 0.0
            }))
        );
    }

    #[test]
    fn tick_bounds_are_inclusive() {
        assert!(check_ticks(&Ticks::from([0.0, 4.0]), 0.0, 4.0).is_ok());
        assert_eq!(
            check_ticks(&Ticks::from([2.0, 5.0]), 0.0, 4.0),
            Err(NumberLineError::InvalidLimit(LimitViolation::TickAboveMax {
                tick: 5.0,
                max: 4.0
            }))
        );
    }

    #[test]
    fn non_finite_limits_are_rejected() {
        assert_eq!(
            AxisLimits::pinned(f64::NEG_INFINITY, 1.0, &Ticks::Auto).map(|_| ()),
            Err(NumberLineError::InvalidLimit(LimitViolation::NonFinite(
                f64::NEG_INFINITY
            )))
        );
        assert!(check_tick_values(&Ticks::from([f64::NAN])).is_err());
    }

    #[test]
    fn rederive_keeps_pinned_end() {
        let points = normalize(vec![1.0, 2.0, 3.0]).unwrap();
        let limits = AxisLimits::default()
            .with_max(10.0, &Ticks::Auto)
            .unwrap()
            .rederive(&points, &Ticks::Auto)
            .unwrap();
        assert_eq!(limits.min(), Some(0.0));
        assert_eq!(limits.max(), Some(10.0));

        let forgotten = limits.forget_derived();
        assert_eq!(forgotten.min(), None);
        assert_eq!(forgotten.max(), Some(10.0));
    }

    #[test]
    fn rederive_steps_clear_of_pinned_end() {
        let points = normalize(vec![5.0]).unwrap();
        let limits = AxisLimits::default()
            .with_max(0.0, &Ticks::Auto)
            .unwrap()
            .rederive(&points, &Ticks::Auto)
            .unwrap();
        assert_eq!(limits.min(), Some(-1.0));
        assert_eq!(limits.max(), Some(0.0));
    }

    #[test]
    fn rederive_encloses_fixed_ticks() {
        let points = normalize(vec![10.0, 11.0]).unwrap();
        let ticks = Ticks::from([1.0, 2.0, 3.0]);
        let limits = AxisLimits::default().rederive(&points, &ticks).unwrap();
        assert_eq!(limits.min(), Some(1.0));
        assert_eq!(limits.max(), Some(12.0));

        let wide = Ticks::from([0.0, 10.0]);
        let points = normalize(vec![1.0, 2.0, 3.0]).unwrap();
        let limits = AxisLimits::default().rederive(&points, &wide).unwrap();
        assert_eq!((limits.min(), limits.max()), (Some(0.0), Some(10.0)));
    }

    #[test]
    fn rederive_reports_pinned_end_against_ticks() {
        let ticks = Ticks::from([1.0]);
        let limits = AxisLimits::default().with_min(5.0, &ticks).unwrap();
        let points = normalize(vec![6.0, 7.0]).unwrap();
        assert_eq!(
            limits.rederive(&points, &ticks),
            Err(NumberLineError::InvalidLimit(LimitViolation::TickBelowMin {
                tick: 1.0,
                min: 5.0
            }))
        );
    }
}
