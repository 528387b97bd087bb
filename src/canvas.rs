use std::collections::HashSet;

use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Theme};

use crate::render::RenderConfig;
use crate::style::MarkerType;
use crate::ticks::{TickFormatter, TickWeight};

const SIDE_MARGIN_PX: f32 = 24.0;
const AXIS_WIDTH_PX: f32 = 1.5;
const MAJOR_TICK_HALF_PX: f32 = 6.0;
const MINOR_TICK_HALF_PX: f32 = 3.0;
const TICK_LABEL_GAP_PX: f32 = 4.0;
const MARKER_STROKE_PX: f32 = 1.5;

/// Canvas program that draws a [`RenderConfig`] along a horizontal axis.
pub(crate) struct NumberLineCanvas {
    pub(crate) config: RenderConfig,
    pub(crate) hidden_groups: HashSet<usize>,
    pub(crate) formatter: TickFormatter,
    pub(crate) tick_label_size: f32,
}

impl<Message> canvas::Program<Message> for NumberLineCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let axis_color = theme.palette().text;

        let left = SIDE_MARGIN_PX;
        let width = (bounds.width - 2.0 * SIDE_MARGIN_PX).max(1.0);
        let axis_y = bounds.height * 0.5;

        frame.stroke(
            &Path::line(Point::new(left, axis_y), Point::new(left + width, axis_y)),
            Stroke::default()
                .with_color(axis_color)
                .with_width(AXIS_WIDTH_PX),
        );

        for tick in self.config.tick_marks() {
            let Some(x) = self.config.project(tick.value, left, width) else {
                continue;
            };
            let half = match tick.weight {
                TickWeight::Major => MAJOR_TICK_HALF_PX,
                TickWeight::Minor => MINOR_TICK_HALF_PX,
            };
            frame.stroke(
                &Path::line(Point::new(x, axis_y - half), Point::new(x, axis_y + half)),
                Stroke::default().with_color(axis_color).with_width(1.0),
            );
            frame.fill_text(Text {
                content: (self.formatter)(tick),
                position: Point::new(x, axis_y + MAJOR_TICK_HALF_PX + TICK_LABEL_GAP_PX),
                color: axis_color,
                size: Pixels(self.tick_label_size),
                align_x: Horizontal::Center.into(),
                align_y: Vertical::Top,
                ..Text::default()
            });
        }

        for (index, group) in self.config.groups.iter().enumerate() {
            if self.hidden_groups.contains(&index) {
                continue;
            }
            for &value in &group.values {
                // Values outside the limits are clipped.
                if let Some(x) = self.config.project(value, left, width) {
                    draw_marker(
                        &mut frame,
                        self.config.marker,
                        Point::new(x, axis_y),
                        self.config.size,
                        group.color,
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

fn draw_marker(frame: &mut Frame, marker: MarkerType, center: Point, size: f32, color: Color) {
    let r = size * 0.5;
    let stroke = Stroke::default()
        .with_color(color)
        .with_width(MARKER_STROKE_PX);
    match marker {
        MarkerType::FilledCircle => frame.fill(&Path::circle(center, r), color),
        MarkerType::EmptyCircle => frame.stroke(&Path::circle(center, r), stroke),
        MarkerType::Plus => {
            frame.stroke(
                &Path::line(
                    Point::new(center.x - r, center.y),
                    Point::new(center.x + r, center.y),
                ),
                stroke,
            );
            frame.stroke(
                &Path::line(
                    Point::new(center.x, center.y - r),
                    Point::new(center.x, center.y + r),
                ),
                stroke,
            );
        }
        MarkerType::Cross => {
            frame.stroke(
                &Path::line(
                    Point::new(center.x - r, center.y - r),
                    Point::new(center.x + r, center.y + r),
                ),
                stroke,
            );
            frame.stroke(
                &Path::line(
                    Point::new(center.x - r, center.y + r),
                    Point::new(center.x + r, center.y - r),
                ),
                stroke,
            );
        }
        MarkerType::VerticalBar => frame.stroke(
            &Path::line(
                Point::new(center.x, center.y - size),
                Point::new(center.x, center.y + size),
            ),
            stroke.with_width(MARKER_STROKE_PX * 1.5),
        ),
        MarkerType::Square | MarkerType::Diamond | MarkerType::Triangle | MarkerType::Star => {
            let vertices = marker.polygon(center.x, center.y, size);
            let path = Path::new(|builder| {
                for (i, &(x, y)) in vertices.iter().enumerate() {
                    if i == 0 {
                        builder.move_to(Point::new(x, y));
                    } else {
                        builder.line_to(Point::new(x, y));
                    }
                }
                builder.close();
            });
            frame.fill(&path, color);
        }
    }
}
