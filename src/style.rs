use std::str::FromStr;

use crate::Color;
use crate::error::NumberLineError;

/// Marker shapes for points on the line.
///
/// Parses from the usual single-character symbols (`"o"`, `"s"`, `"^"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerType {
    /// A filled circle (`o`).
    #[default]
    FilledCircle,
    /// An empty circle (`O`).
    EmptyCircle,
    /// A square (`s`).
    Square,
    /// A diamond (`D`).
    Diamond,
    /// A triangle pointing up (`^`).
    Triangle,
    /// A five-pointed star (`*`).
    Star,
    /// A plus sign (`+`).
    Plus,
    /// A diagonal cross (`x`).
    Cross,
    /// A short vertical bar across the axis (`|`).
    VerticalBar,
}

impl MarkerType {
    /// Outline vertices for polygonal markers, centered on `(cx, cy)`.
    ///
    /// `size` is the marker's bounding width. Circles and line markers have no
    /// polygon and return an empty list.
    pub(crate) fn polygon(self, cx: f32, cy: f32, size: f32) -> Vec<(f32, f32)> {
        let r = size * 0.5;
        match self {
            Self::Square => vec![
                (cx - r, cy - r),
                (cx + r, cy - r),
                (cx + r, cy + r),
                (cx - r, cy + r),
            ],
            Self::Diamond => vec![(cx, cy - r), (cx + r, cy), (cx, cy + r), (cx - r, cy)],
            Self::Triangle => {
                let h = r * 3.0_f32.sqrt() * 0.5;
                vec![(cx, cy - r), (cx + h, cy + r * 0.5), (cx - h, cy + r * 0.5)]
            }
            Self::Star => {
                const POINTS: usize = 5;
                const INNER_RATIO: f32 = 0.4;
                (0..POINTS * 2)
                    .map(|i| {
                        let radius = if i % 2 == 0 { r } else { r * INNER_RATIO };
                        let angle = -std::f32::consts::FRAC_PI_2
                            + i as f32 * std::f32::consts::PI / POINTS as f32;
                        (cx + radius * angle.cos(), cy + radius * angle.sin())
                    })
                    .collect()
            }
            _ => Vec::new(),
        }
    }
}

impl FromStr for MarkerType {
    type Err = NumberLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "o" | "." => Self::FilledCircle,
            "O" => Self::EmptyCircle,
            "s" => Self::Square,
            "D" | "d" => Self::Diamond,
            "^" => Self::Triangle,
            "*" => Self::Star,
            "+" => Self::Plus,
            "x" | "X" => Self::Cross,
            "|" => Self::VerticalBar,
            other => return Err(NumberLineError::UnknownMarker(other.to_string())),
        })
    }
}

/// Default marker size in logical pixels.
pub const DEFAULT_MARKER_SIZE: f32 = 8.0;

/// Colors cycled through when no explicit color is given, one per group.
pub const PALETTE: [Color; 10] = [
    Color::from_rgb(0.122, 0.467, 0.706),
    Color::from_rgb(1.0, 0.498, 0.055),
    Color::from_rgb(0.173, 0.627, 0.173),
    Color::from_rgb(0.839, 0.153, 0.157),
    Color::from_rgb(0.580, 0.404, 0.741),
    Color::from_rgb(0.549, 0.337, 0.294),
    Color::from_rgb(0.890, 0.467, 0.761),
    Color::from_rgb(0.498, 0.498, 0.498),
    Color::from_rgb(0.737, 0.741, 0.133),
    Color::from_rgb(0.090, 0.745, 0.812),
];

/// How point groups are colored.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ColorSpec {
    /// Cycle through [`PALETTE`], one color per group.
    #[default]
    Palette,
    /// Every group gets the same color.
    Single(Color),
    /// One color per group, in group order.
    PerGroup(Vec<Color>),
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        Self::Single(color)
    }
}

impl From<Vec<Color>> for ColorSpec {
    fn from(colors: Vec<Color>) -> Self {
        Self::PerGroup(colors)
    }
}

impl ColorSpec {
    /// Resolve to exactly one color per group.
    pub(crate) fn resolve(&self, groups: usize) -> Result<Vec<Color>, NumberLineError> {
        match self {
            Self::Palette => Ok(PALETTE.iter().copied().cycle().take(groups).collect()),
            Self::Single(color) => Ok(vec![*color; groups]),
            Self::PerGroup(colors) if colors.len() == groups => Ok(colors.clone()),
            Self::PerGroup(colors) => Err(NumberLineError::ColorCountMismatch {
                colors: colors.len(),
                groups,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_marker_symbols() {
        assert_eq!("o".parse::<MarkerType>(), Ok(MarkerType::FilledCircle));
        assert_eq!("^".parse::<MarkerType>(), Ok(MarkerType::Triangle));
        assert_eq!("|".parse::<MarkerType>(), Ok(MarkerType::VerticalBar));
        assert_eq!(
            "?".parse::<MarkerType>(),
            Err(NumberLineError::UnknownMarker("?".to_string()))
        );
    }

    #[test]
    fn star_has_ten_vertices_within_size() {
        let verts = MarkerType::Star.polygon(0.0, 0.0, 10.0);
        assert_eq!(verts.len(), 10);
        assert!(verts.iter().all(|(x, y)| (x * x + y * y).sqrt() <= 5.0 + 1e-4));
        assert!(MarkerType::FilledCircle.polygon(0.0, 0.0, 10.0).is_empty());
    }

    #[test]
    fn palette_cycles() {
        let colors = ColorSpec::Palette.resolve(12).unwrap();
        assert_eq!(colors.len(), 12);
        assert_eq!(colors[10], PALETTE[0]);
    }

    #[test]
    fn per_group_colors_must_match() {
        let spec = ColorSpec::from(vec![Color::BLACK, Color::WHITE]);
        assert_eq!(spec.resolve(2).unwrap(), vec![Color::BLACK, Color::WHITE]);
        assert_eq!(
            spec.resolve(3),
            Err(NumberLineError::ColorCountMismatch {
                colors: 2,
                groups: 3
            })
        );
        assert_eq!(
            ColorSpec::Single(Color::BLACK).resolve(2).unwrap(),
            vec![Color::BLACK; 2]
        );
    }
}
