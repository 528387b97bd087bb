//! A number line plotting widget for Iced.
//!
//! - Points as flat lists, lists of lists, columnar tables or native arrays
//! - Limits derived from the data or pinned, validated against each other and the ticks
//! - Automatic or explicit ticks, per-group colors, markers, legend, title and axis label
//!
//! Quick start:
//!
//! ```no_run
//! use iced_numberline::NumberLineBuilder;
//!
//! NumberLineBuilder::new()
//!     .with_points(vec![vec![1.0, 2.5, 4.0], vec![3.0, 6.0]])
//!     .with_labels(["first", "second"])
//!     .with_x_label("value")
//!     .build()
//!     .unwrap()
//!     .show()
//!     .unwrap();
//! ```
//!
//! See `demos/` for more.
pub mod error;
pub mod limits;
pub mod message;
pub mod number_line;
pub mod number_line_builder;
pub mod points;
pub mod render;
pub mod style;
pub mod ticks;

pub(crate) mod axes_labels;
pub(crate) mod canvas;
pub(crate) mod legend;

// Iced re-exports.
pub use iced::Color;

// Re-exports of public types.
pub use error::{LimitViolation, NumberLineError, Result};
pub use limits::Ticks;
pub use message::NumberLineMessage;
pub use number_line::NumberLine;
pub use number_line_builder::NumberLineBuilder;
pub use points::{
    NumArray, PointCollection, PointGroup, PointInput, PointValue, Shape, Table, normalize,
};
pub use render::{GroupDirective, RenderConfig};
pub use style::{ColorSpec, MarkerType};
pub use ticks::{Tick, TickFormatter, TickWeight};
