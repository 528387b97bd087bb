use crate::Color;
use crate::limits::Ticks;
use crate::points::PointCollection;
use crate::style::MarkerType;
use crate::ticks::{self, Tick};

/// Drawing directives for one point group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDirective {
    pub values: Vec<f64>,
    pub color: Color,
    /// Legend label, if the groups are labeled.
    pub label: Option<String>,
}

/// Everything the renderer needs to draw a number line, fully resolved.
///
/// Produced by [`NumberLine::render_config`](crate::NumberLine::render_config):
/// points are normalized, colors are one-per-group and both limits are set.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub groups: Vec<GroupDirective>,
    pub min: f64,
    pub max: f64,
    pub ticks: Ticks,
    pub marker: MarkerType,
    /// Marker size in logical pixels.
    pub size: f32,
    pub x_label: String,
    pub title: String,
}

impl RenderConfig {
    pub(crate) fn new(
        points: &PointCollection,
        labels: &[String],
        colors: Vec<Color>,
        (min, max): (f64, f64),
    ) -> Self {
        let groups = points
            .iter()
            .zip(colors)
            .enumerate()
            .map(|(i, (group, color))| GroupDirective {
                values: group.values().to_vec(),
                color,
                label: labels.get(i).cloned(),
            })
            .collect();
        Self {
            groups,
            min,
            max,
            ticks: Ticks::Auto,
            marker: MarkerType::default(),
            size: crate::style::DEFAULT_MARKER_SIZE,
            x_label: String::new(),
            title: String::new(),
        }
    }

    /// Tick marks to draw; `Auto` goes through the default tick producer.
    pub fn tick_marks(&self) -> Vec<Tick> {
        ticks::tick_marks(&self.ticks, self.min, self.max)
    }

    /// Map a data value onto a horizontal span starting at `left` and `width` wide.
    ///
    /// Returns `None` for values outside `[min, max]`.
    pub fn project(&self, value: f64, left: f32, width: f32) -> Option<f32> {
        if value < self.min || value > self.max {
            return None;
        }
        let t = (value - self.min) / (self.max - self.min);
        Some(left + (t as f32) * width)
    }

    /// `(group index, label, color)` for every labeled group, in order.
    pub fn legend_entries(&self) -> impl Iterator<Item = (usize, &str, Color)> {
        self.groups
            .iter()
            .enumerate()
            .filter_map(|(i, g)| g.label.as_deref().map(|l| (i, l, g.color)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::normalize;

    fn config() -> RenderConfig {
        let points = normalize(vec![vec![1.0, 2.0], vec![3.0]]).unwrap();
        RenderConfig::new(
            &points,
            &["a".to_string(), "b".to_string()],
            vec![Color::BLACK, Color::WHITE],
            (0.0, 4.0),
        )
    }

    #[test]
    fn projects_onto_span() {
        let config = config();
        assert_eq!(config.project(0.0, 10.0, 100.0), Some(10.0));
        assert_eq!(config.project(2.0, 10.0, 100.0), Some(60.0));
        assert_eq!(config.project(4.0, 10.0, 100.0), Some(110.0));
        assert_eq!(config.project(4.5, 10.0, 100.0), None);
    }

    #[test]
    fn groups_carry_label_and_color() {
        let config = config();
        let entries: Vec<_> = config.legend_entries().collect();
        assert_eq!(entries, vec![(0, "a", Color::BLACK), (1, "b", Color::WHITE)]);
        assert_eq!(config.groups[1].values, vec![3.0]);
    }
}
