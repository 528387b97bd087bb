use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type Result<T, E = NumberLineError> = std::result::Result<T, E>;

/// Errors that can occur when feeding points, limits or ticks to a
/// [`NumberLine`](crate::NumberLine).
///
/// Every mutating operation is all-or-nothing: when one of these is returned the
/// number line is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberLineError {
    /// Points are required but absent, or an inner group is empty.
    #[error("no points provided (or an empty point group)")]
    MissingPoints,
    /// Points are nested more than two levels deep.
    #[error("points are nested more than two levels deep")]
    MultidimensionalPoints,
    /// Groups and bare values are mixed at the top level.
    #[error("element {index} does not match the nesting of the first element")]
    InconsistentNesting { index: usize },
    /// A point value is NaN or infinite.
    #[error("point {index} of group {group} is not a finite number")]
    NonFinitePoint { group: usize, index: usize },
    /// Axis limits conflict with each other or with fixed ticks.
    #[error("invalid axis limit: {0}")]
    InvalidLimit(#[from] LimitViolation),
    /// Labels are out of lockstep with the point groups.
    #[error("{labels} label(s) for {groups} point group(s)")]
    LabelCountMismatch { labels: usize, groups: usize },
    /// Per-group colors do not match the number of point groups.
    #[error("{colors} color(s) for {groups} point group(s)")]
    ColorCountMismatch { colors: usize, groups: usize },
    /// Marker size is not a finite, positive number.
    #[error("marker size must be finite and positive, got {0}")]
    InvalidMarkerSize(f32),
    /// The marker symbol is not recognized.
    #[error("unknown marker symbol {0:?}")]
    UnknownMarker(String),
}

/// The exact conflict behind a [`NumberLineError::InvalidLimit`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LimitViolation {
    #[error("min {min} is not below max {max}")]
    MinNotBelowMax { min: f64, max: f64 },
    #[error("tick {tick} is below min {min}")]
    TickBelowMin { tick: f64, min: f64 },
    #[error("tick {tick} is above max {max}")]
    TickAboveMax { tick: f64, max: f64 },
    #[error("{0} is not a finite number")]
    NonFinite(f64),
}
