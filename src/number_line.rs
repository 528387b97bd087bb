use std::collections::HashSet;
use std::sync::Arc;

use iced::widget::{canvas, container, stack, text};
use iced::{Element, Length, Theme};
use tracing::{debug, warn};

use crate::axes_labels;
use crate::canvas::NumberLineCanvas;
use crate::error::{NumberLineError, Result};
use crate::legend;
use crate::limits::{self, AxisLimits, Ticks};
use crate::message::NumberLineMessage;
use crate::points::{PointCollection, PointInput, normalize};
use crate::render::RenderConfig;
use crate::style::{ColorSpec, DEFAULT_MARKER_SIZE, MarkerType};
use crate::ticks::{self, Tick, TickFormatter};

/// Points on a horizontal axis, with limits, ticks, labels and styling.
///
/// Points are stored as ordered groups; each group shares a color and an optional
/// legend label. Limits not set explicitly are derived from the points
/// (`min - 1`, `max + 1`) whenever the points are replaced.
///
/// ```ignore
/// let mut line = NumberLine::new();
/// line.set_points(vec![1.0, 2.0, 3.0])?;
/// assert_eq!(line.limits(), Some((0.0, 4.0)));
/// line.set_ticks(vec![1.0, 2.0, 3.0])?;
/// ```
#[derive(Clone)]
pub struct NumberLine {
    // Data
    pub(crate) points: PointCollection,
    pub(crate) labels: Vec<String>,
    pub(crate) limits: AxisLimits,
    pub(crate) ticks: Ticks,
    // Configuration
    pub(crate) marker: MarkerType,
    pub(crate) colors: ColorSpec,
    pub(crate) size: f32,
    pub(crate) x_label: String,
    pub(crate) title: String,
    pub(crate) tick_formatter: TickFormatter,
    pub(crate) tick_label_size: f32,
    pub(crate) axis_label_size: f32,
    pub(crate) legend_enabled: bool,
    // UI state
    pub(crate) legend_collapsed: bool,
    pub(crate) hidden_groups: HashSet<usize>,
}

impl Default for NumberLine {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberLine {
    /// Create an empty number line with default settings.
    pub fn new() -> Self {
        Self {
            points: PointCollection::default(),
            labels: Vec::new(),
            limits: AxisLimits::default(),
            ticks: Ticks::Auto,
            marker: MarkerType::default(),
            colors: ColorSpec::default(),
            size: DEFAULT_MARKER_SIZE,
            x_label: String::new(),
            title: String::new(),
            tick_formatter: Arc::new(ticks::default_formatter),
            tick_label_size: 10.0,
            axis_label_size: 16.0,
            legend_enabled: true,
            legend_collapsed: false,
            hidden_groups: HashSet::new(),
        }
    }

    /// Replace all points (and labels) and re-derive the unpinned limits.
    pub fn set_points(&mut self, input: impl Into<PointInput>) -> Result<()> {
        let points = normalize(input)?;
        self.replace_points(points, Vec::new())
    }

    /// Replace all points and give every group a label.
    pub fn set_labeled_points<I, S>(
        &mut self,
        input: impl Into<PointInput>,
        labels: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let points = normalize(input)?;
        let labels = collect_labels(labels, points.len())?;
        self.replace_points(points, labels)
    }

    fn replace_points(&mut self, points: PointCollection, labels: Vec<String>) -> Result<()> {
        let limits = self.limits.rederive(&points, &self.ticks)?;
        debug!(
            groups = points.len(),
            min = ?limits.min(),
            max = ?limits.max(),
            "points replaced"
        );
        self.points = points;
        self.labels = labels;
        self.limits = limits;
        self.hidden_groups.clear();
        Ok(())
    }

    /// Append unlabeled groups. Limits are left as they are.
    ///
    /// Fails with [`NumberLineError::LabelCountMismatch`] if the existing groups are labeled.
    pub fn add_points(&mut self, input: impl Into<PointInput>) -> Result<()> {
        let points = normalize(input)?;
        if !self.labels.is_empty() {
            return Err(NumberLineError::LabelCountMismatch {
                labels: self.labels.len(),
                groups: self.points.len() + points.len(),
            });
        }
        debug!(added = points.len(), "points added");
        self.points.extend(points);
        Ok(())
    }

    /// Append groups with one label each. Limits are left as they are.
    ///
    /// The existing groups must be labeled too (or there must be none).
    pub fn add_labeled_points<I, S>(
        &mut self,
        input: impl Into<PointInput>,
        labels: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let points = normalize(input)?;
        let labels = collect_labels(labels, points.len())?;
        if self.labels.len() != self.points.len() {
            return Err(NumberLineError::LabelCountMismatch {
                labels: self.labels.len() + labels.len(),
                groups: self.points.len() + points.len(),
            });
        }
        debug!(added = points.len(), ?labels, "labeled points added");
        self.points.extend(points);
        self.labels.extend(labels);
        Ok(())
    }

    /// Remove all points and labels. Pinned limits and ticks are kept.
    pub fn clear_points(&mut self) {
        self.points.clear();
        self.labels.clear();
        self.limits = self.limits.forget_derived();
        self.hidden_groups.clear();
    }

    /// Replace every group label. The count must match the number of groups.
    pub fn set_labels<I, S>(&mut self, labels: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = collect_labels(labels, self.points.len())?;
        Ok(())
    }

    /// Drop all group labels.
    pub fn clear_labels(&mut self) {
        self.labels.clear();
    }

    /// Pin the axis minimum. Fails if it is not below the current maximum.
    pub fn set_min(&mut self, min: f64) -> Result<()> {
        self.limits = self.limits.with_min(min, &self.ticks)?;
        debug!(min, "min pinned");
        Ok(())
    }

    /// Pin the axis maximum. Fails if it is not above the current minimum.
    pub fn set_max(&mut self, max: f64) -> Result<()> {
        self.limits = self.limits.with_max(max, &self.ticks)?;
        debug!(max, "max pinned");
        Ok(())
    }

    /// Pin both axis limits at once.
    pub fn set_limits(&mut self, min: f64, max: f64) -> Result<()> {
        self.limits = AxisLimits::pinned(min, max, &self.ticks)?;
        debug!(min, max, "limits pinned");
        Ok(())
    }

    /// Unpin both limits and derive them again from the current points.
    pub fn reset_limits(&mut self) -> Result<()> {
        self.limits = AxisLimits::default().rederive(&self.points, &self.ticks)?;
        Ok(())
    }

    /// Set the tick positions.
    ///
    /// Fixed ticks must lie within `[min, max]` once both limits are set.
    pub fn set_ticks(&mut self, ticks: impl Into<Ticks>) -> Result<()> {
        let ticks = ticks.into();
        limits::check_tick_values(&ticks)?;
        if let (Some(min), Some(max)) = (self.limits.min(), self.limits.max()) {
            limits::check_ticks(&ticks, min, max)?;
        }
        debug!(?ticks, "ticks set");
        self.ticks = ticks;
        Ok(())
    }

    pub fn points(&self) -> &PointCollection {
        &self.points
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The axis minimum, pinned or derived.
    pub fn min(&self) -> Option<f64> {
        self.limits.min()
    }

    /// The axis maximum, pinned or derived.
    pub fn max(&self) -> Option<f64> {
        self.limits.max()
    }

    /// `(min, max)` once both are known.
    pub fn limits(&self) -> Option<(f64, f64)> {
        self.limits.min().zip(self.limits.max())
    }

    pub fn ticks(&self) -> &Ticks {
        &self.ticks
    }

    pub fn marker(&self) -> MarkerType {
        self.marker
    }

    pub fn colors(&self) -> &ColorSpec {
        &self.colors
    }

    /// Marker size in logical pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_marker(&mut self, marker: MarkerType) {
        self.marker = marker;
    }

    /// Set the marker from a symbol such as `"o"`, `"s"` or `"|"`.
    pub fn set_marker_symbol(&mut self, symbol: &str) -> Result<()> {
        self.marker = symbol.parse()?;
        Ok(())
    }

    /// Color all groups the same, one color per group, or by palette.
    pub fn set_color(&mut self, colors: impl Into<ColorSpec>) {
        self.colors = colors.into();
    }

    /// Set the marker size in logical pixels.
    pub fn set_size(&mut self, size: f32) -> Result<()> {
        if !(size.is_finite() && size > 0.0) {
            return Err(NumberLineError::InvalidMarkerSize(size));
        }
        self.size = size;
        Ok(())
    }

    pub fn set_x_label(&mut self, label: impl Into<String>) {
        self.x_label = label.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set a custom tick label formatter.
    pub fn set_tick_formatter<F>(&mut self, formatter: F)
    where
        F: Fn(Tick) -> String + Send + Sync + 'static,
    {
        self.tick_formatter = Arc::new(formatter);
    }

    pub fn set_tick_label_size(&mut self, size: f32) {
        self.tick_label_size = size.max(1.0);
    }

    pub fn set_axis_label_size(&mut self, size: f32) {
        self.axis_label_size = size.max(1.0);
    }

    /// Show or hide the legend. Shown by default when groups are labeled.
    pub fn set_legend(&mut self, enabled: bool) {
        self.legend_enabled = enabled;
    }

    /// Resolve everything into drawing directives.
    ///
    /// Unset limits fall back to `min(points) - 1` and `max(points) + 1`.
    pub fn render_config(&self) -> Result<RenderConfig> {
        if self.points.is_empty() {
            return Err(NumberLineError::MissingPoints);
        }
        if !self.labels.is_empty() && self.labels.len() != self.points.len() {
            return Err(NumberLineError::LabelCountMismatch {
                labels: self.labels.len(),
                groups: self.points.len(),
            });
        }
        let colors = self.colors.resolve(self.points.len())?;

        let (min, max) = match (self.limits.min(), self.limits.max()) {
            (Some(min), Some(max)) => {
                limits::check_order(min, max)?;
                limits::check_ticks(&self.ticks, min, max)?;
                (min, max)
            }
            _ => {
                let limits = self.limits.rederive(&self.points, &self.ticks)?;
                let (Some(min), Some(max)) = (limits.min(), limits.max()) else {
                    return Err(NumberLineError::MissingPoints);
                };
                (min, max)
            }
        };

        let mut config = RenderConfig::new(&self.points, &self.labels, colors, (min, max));
        config.ticks = self.ticks.clone();
        config.marker = self.marker;
        config.size = self.size;
        config.x_label = self.x_label.clone();
        config.title = self.title.clone();
        Ok(config)
    }

    /// Handle a message sent by the widget.
    pub fn update(&mut self, msg: NumberLineMessage) {
        match msg {
            NumberLineMessage::ToggleLegend => {
                self.legend_collapsed = !self.legend_collapsed;
            }
            NumberLineMessage::ToggleGroupVisibility(index) => {
                if index >= self.points.len() {
                    warn!(index, "toggle visibility: no such point group");
                    return;
                }
                if !self.hidden_groups.remove(&index) {
                    self.hidden_groups.insert(index);
                }
            }
        }
    }

    /// View the number line.
    ///
    /// If the current state cannot be rendered, the error is shown in its place.
    pub fn view(&self) -> Element<'_, NumberLineMessage> {
        let config = match self.render_config() {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "number line cannot be rendered");
                return container(text(err.to_string()).size(self.axis_label_size))
                    .center(Length::Fill)
                    .into();
            }
        };

        let legend = if self.legend_enabled {
            legend::legend(&config, &self.hidden_groups, self.legend_collapsed)
        } else {
            None
        };

        let plot = canvas(NumberLineCanvas {
            config,
            hidden_groups: self.hidden_groups.clone(),
            formatter: self.tick_formatter.clone(),
            tick_label_size: self.tick_label_size,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let elements = stack![container(plot).padding(2.0), legend];

        container(axes_labels::stack_with_labels(
            elements,
            &self.x_label,
            &self.title,
            self.axis_label_size,
        ))
        .padding(3.0)
        .style(|theme: &Theme| container::background(theme.palette().background))
        .into()
    }

    /// Open a window showing the number line; blocks until it is closed.
    pub fn show(self) -> iced::Result {
        debug!(groups = self.points.len(), "showing number line");
        iced::application(move || self.clone(), Self::update, Self::view).run()
    }
}

fn collect_labels<I, S>(labels: I, groups: usize) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
    if labels.len() == groups {
        Ok(labels)
    } else {
        Err(NumberLineError::LabelCountMismatch {
            labels: labels.len(),
            groups,
        })
    }
}
