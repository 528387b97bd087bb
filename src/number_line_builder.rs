use std::sync::Arc;

use crate::error::{NumberLineError, Result};
use crate::limits::Ticks;
use crate::number_line::NumberLine;
use crate::points::PointInput;
use crate::style::{ColorSpec, MarkerType};
use crate::ticks::{Tick, TickFormatter};

/// Builder for configuring and constructing a [`NumberLine`].
///
/// Provides a fluent API for setting up a number line with all its configuration
/// options before creating it. All settings have sensible defaults; validation
/// happens in [`build`](Self::build).
///
/// # Example
///
/// ```ignore
/// let line = NumberLineBuilder::new()
///     .with_points(vec![1.0, 2.0, 3.0])
///     .with_min(0.0)
///     .with_max(4.0)
///     .with_ticks(vec![1.0, 2.0, 3.0])
///     .with_marker("|")
///     .with_x_label("value")
///     .build()?;
/// ```
#[derive(Default)]
pub struct NumberLineBuilder {
    points: Option<PointInput>,
    labels: Option<Vec<String>>,
    min: Option<f64>,
    max: Option<f64>,
    ticks: Option<Ticks>,
    marker: Option<MarkerType>,
    marker_symbol: Option<String>,
    colors: Option<ColorSpec>,
    size: Option<f32>,
    x_label: Option<String>,
    title: Option<String>,
    tick_formatter: Option<TickFormatter>,
    legend: Option<bool>,
}

impl NumberLineBuilder {
    /// Create a new NumberLineBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the points, in any accepted shape.
    pub fn with_points(mut self, points: impl Into<PointInput>) -> Self {
        self.points = Some(points.into());
        self
    }

    /// Set one label per point group.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Pin the axis minimum.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Pin the axis maximum.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set explicit tick positions, or [`Ticks::Auto`].
    pub fn with_ticks(mut self, ticks: impl Into<Ticks>) -> Self {
        self.ticks = Some(ticks.into());
        self
    }

    /// Set the marker by symbol, e.g. `"o"`, `"s"`, `"|"`. Checked on build.
    pub fn with_marker(mut self, symbol: impl Into<String>) -> Self {
        self.marker_symbol = Some(symbol.into());
        self.marker = None;
        self
    }

    /// Set the marker type directly.
    pub fn with_marker_type(mut self, marker: MarkerType) -> Self {
        self.marker = Some(marker);
        self.marker_symbol = None;
        self
    }

    /// Set a single color, per-group colors, or the palette.
    pub fn with_color(mut self, colors: impl Into<ColorSpec>) -> Self {
        self.colors = Some(colors.into());
        self
    }

    /// Set the marker size in logical pixels.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the x-axis label.
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        let l = label.into();
        if !l.is_empty() {
            self.x_label = Some(l);
        }
        self
    }

    /// Set the title shown above the line.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let t = title.into();
        if !t.is_empty() {
            self.title = Some(t);
        }
        self
    }

    /// Provide a custom tick label formatter.
    pub fn with_tick_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(Tick) -> String + Send + Sync + 'static,
    {
        self.tick_formatter = Some(Arc::new(formatter));
        self
    }

    /// Enable or disable the legend. Enabled by default.
    pub fn with_legend(mut self, enabled: bool) -> Self {
        self.legend = Some(enabled);
        self
    }

    /// Build the NumberLine.
    ///
    /// Limits and ticks are applied before points, so pinned limits win over derived
    /// ones and derived limits widen to take in the fixed ticks. Fails with
    /// [`NumberLineError::MissingPoints`] when limits or ticks are given without points.
    pub fn build(self) -> Result<NumberLine> {
        let mut line = NumberLine::new();

        if self.points.is_none()
            && (self.min.is_some() || self.max.is_some() || self.ticks.is_some())
        {
            return Err(NumberLineError::MissingPoints);
        }

        match (self.min, self.max) {
            (Some(min), Some(max)) => line.set_limits(min, max)?,
            (Some(min), None) => line.set_min(min)?,
            (None, Some(max)) => line.set_max(max)?,
            (None, None) => {}
        }
        if let Some(ticks) = self.ticks {
            line.set_ticks(ticks)?;
        }
        match (self.points, self.labels) {
            (Some(points), Some(labels)) => line.set_labeled_points(points, labels)?,
            (Some(points), None) => line.set_points(points)?,
            (None, Some(labels)) if !labels.is_empty() => {
                return Err(NumberLineError::LabelCountMismatch {
                    labels: labels.len(),
                    groups: 0,
                });
            }
            (None, _) => {}
        }

        if let Some(symbol) = self.marker_symbol {
            line.set_marker_symbol(&symbol)?;
        }
        if let Some(marker) = self.marker {
            line.set_marker(marker);
        }
        if let Some(colors) = self.colors {
            line.set_color(colors);
        }
        if let Some(size) = self.size {
            line.set_size(size)?;
        }
        if let Some(x) = self.x_label {
            line.set_x_label(x);
        }
        if let Some(t) = self.title {
            line.set_title(t);
        }
        if let Some(f) = self.tick_formatter {
            line.tick_formatter = f;
        }
        if let Some(enabled) = self.legend {
            line.set_legend(enabled);
        }

        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LimitViolation;

    #[test]
    fn points_only() {
        let line = NumberLineBuilder::new()
            .with_points(vec![1.0, 2.0, 3.0])
            .build()
            .unwrap();
        assert_eq!(line.points(), &vec![vec![1.0, 2.0, 3.0]]);
        assert_eq!(line.limits(), Some((0.0, 4.0)));
    }

    #[test]
    fn full_initialization() {
        let line = NumberLineBuilder::new()
            .with_points(vec![1.0, 2.0, 3.0])
            .with_min(0.0)
            .with_max(4.0)
            .with_marker("|")
            .with_size(10.0)
            .with_x_label("x")
            .with_title("title")
            .build()
            .unwrap();
        assert_eq!(line.min(), Some(0.0));
        assert_eq!(line.max(), Some(4.0));
        assert_eq!(line.marker(), MarkerType::VerticalBar);
        assert_eq!(line.size(), 10.0);
        assert_eq!(line.x_label(), "x");
        assert_eq!(line.title(), "title");
    }

    #[test]
    fn min_only_keeps_derived_max() {
        let line = NumberLineBuilder::new()
            .with_points(vec![1.0, 2.0, 3.0])
            .with_min(-10.0)
            .build()
            .unwrap();
        assert_eq!(line.limits(), Some((-10.0, 4.0)));
    }

    #[test]
    fn limits_without_points_fail() {
        let result = NumberLineBuilder::new().with_min(0.0).with_max(4.0).build();
        assert_eq!(result.err(), Some(NumberLineError::MissingPoints));
    }

    #[test]
    fn inverted_limits_fail() {
        let result = NumberLineBuilder::new()
            .with_points(vec![1.0])
            .with_min(5.0)
            .with_max(3.0)
            .build();
        assert_eq!(
            result.err(),
            Some(NumberLineError::InvalidLimit(
                LimitViolation::MinNotBelowMax { min: 5.0, max: 3.0 }
            ))
        );
    }

    #[test]
    fn derived_limits_take_in_fixed_ticks() {
        let line = NumberLineBuilder::new()
            .with_points(vec![1.0, 2.0, 3.0])
            .with_ticks(vec![2.0, 5.0])
            .build()
            .unwrap();
        assert_eq!(line.points(), &vec![vec![1.0, 2.0, 3.0]]);
        assert_eq!(line.limits(), Some((0.0, 5.0)));
    }

    #[test]
    fn ticks_outside_pinned_limits_fail() {
        let result = NumberLineBuilder::new()
            .with_points(vec![1.0, 2.0, 3.0])
            .with_min(0.0)
            .with_max(4.0)
            .with_ticks(vec![2.0, 5.0])
            .build();
        assert!(matches!(
            result.err(),
            Some(NumberLineError::InvalidLimit(LimitViolation::TickAboveMax { .. }))
        ));
    }

    #[test]
    fn labels_must_match_groups() {
        let result = NumberLineBuilder::new()
            .with_points(vec![vec![1.0], vec![2.0]])
            .with_labels(["only one"])
            .build();
        assert_eq!(
            result.err(),
            Some(NumberLineError::LabelCountMismatch {
                labels: 1,
                groups: 2
            })
        );
    }

    #[test]
    fn unknown_marker_fails() {
        let result = NumberLineBuilder::new()
            .with_points(vec![1.0])
            .with_marker("?")
            .build();
        assert_eq!(
            result.err(),
            Some(NumberLineError::UnknownMarker("?".to_string()))
        );
    }
}
