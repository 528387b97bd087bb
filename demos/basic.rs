//! Show two labeled groups of measurements on one number line.
//!
//! Run with `RUST_LOG=iced_numberline=debug` to see state changes.
use iced_numberline::{Color, NumberLineBuilder, Table};
use rand_distr::{Distribution, Normal};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = rand::rng();
    let control = Normal::new(4.0, 1.0).unwrap();
    let treated = Normal::new(7.0, 1.5).unwrap();

    let table = Table::new()
        .with_column(
            "control",
            (0..12).map(|_| control.sample(&mut rng)).collect(),
        )
        .with_column(
            "treated",
            (0..12).map(|_| treated.sample(&mut rng)).collect(),
        );
    let labels = table.column_names();

    let line = NumberLineBuilder::new()
        .with_points(table)
        .with_labels(labels)
        .with_min(0.0)
        .with_max(12.0)
        .with_marker("|")
        .with_size(10.0)
        .with_color(vec![
            Color::from_rgb(0.2, 0.6, 1.0),
            Color::from_rgb(0.9, 0.3, 0.3),
        ])
        .with_x_label("response (a.u.)")
        .with_title("Control vs. treated")
        .build()
        .unwrap();

    line.show()
}
