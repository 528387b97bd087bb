use std::sync::Arc;

use crate::limits::Ticks;

/// Visual weight of a tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickWeight {
    /// Long mark.
    Major,
    /// Short mark.
    Minor,
}

/// A position along the axis where a tick mark and label are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// The value at this tick in data coordinates
    pub value: f64,

    /// The step size between ticks. Zero for ticks that were given explicitly.
    pub step_size: f64,

    /// The visual weight of the mark at this tick
    pub weight: TickWeight,
}

impl Tick {
    /// Create a new tick.
    pub fn new(value: f64, step_size: f64, weight: TickWeight) -> Self {
        Self {
            value,
            step_size,
            weight,
        }
    }
}

/// A function which formats tick values into strings for display on the axis.
pub type TickFormatter = Arc<dyn Fn(Tick) -> String + Send + Sync>;

/// A default formatter that displays values with reasonable precision.
pub fn default_formatter(mark: Tick) -> String {
    if !(mark.step_size.is_finite() && mark.step_size > 0.0) {
        return format!("{}", mark.value);
    }
    let log_step = mark.step_size.log10();
    if log_step >= 0.0 {
        format!("{:.0}", mark.value)
    } else {
        let decimal_places = (-log_step).ceil() as usize;
        format!("{:.*}", decimal_places, mark.value)
    }
}

/// A default tick producer that generates tick positions with appropriate spacing.
pub fn default_tick_producer(min: f64, max: f64) -> Vec<Tick> {
    const TICK_TARGET_COUNT: f64 = 10.0;
    const TICK_MAJOR_INTERVAL: i64 = 5;
    const TICK_EPSILON: f64 = 1e-9;

    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }

    let step = nice_step(span / TICK_TARGET_COUNT);
    let first = (min / step).ceil() as i64;
    let last = (max / step + TICK_EPSILON).floor() as i64;

    // Stepping by index keeps values free of accumulated rounding error.
    (first..=last)
        .map(|idx| {
            let weight = if idx % TICK_MAJOR_INTERVAL == 0 {
                TickWeight::Major
            } else {
                TickWeight::Minor
            };
            let value = (idx as f64 * step).clamp(min, max);
            Tick::new(value, step, weight)
        })
        .collect()
}

/// Resolve the configured ticks into marks for the range `[min, max]`.
pub fn tick_marks(ticks: &Ticks, min: f64, max: f64) -> Vec<Tick> {
    match ticks {
        Ticks::Auto => default_tick_producer(min, max),
        Ticks::Fixed(values) => values
            .iter()
            .map(|&v| Tick::new(v, 0.0, TickWeight::Major))
            .collect(),
    }
}

/// Calculate a "nice" step size based on the desired number of divisions.
/// Returns a value that is a multiple of 1, 2, 5, or 10 times a power of 10.
pub fn nice_step(raw: f64) -> f64 {
    const NICE_STEP_BASES: [f64; 4] = [1.0, 2.0, 5.0, 10.0];
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let exp = raw.log10().floor();
    let base = 10.0_f64.powf(exp);
    for &m in &NICE_STEP_BASES {
        if raw <= m * base {
            return m * base;
        }
    }
    base * 10.0
}
