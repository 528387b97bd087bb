//! Behavior of the number line through its public API.
use iced_numberline::{
    LimitViolation, NumArray, NumberLine, NumberLineBuilder, NumberLineError, PointValue, Shape,
    Table, Ticks, normalize,
};
use rand_distr::{Distribution, Normal, Uniform};

fn random_groups(count: usize) -> Vec<Vec<f64>> {
    let mut rng = rand::rng();
    let normal = Normal::new(0.0, 25.0).unwrap();
    let len = Uniform::new(1usize, 20).unwrap();
    (0..count)
        .map(|_| {
            let n = len.sample(&mut rng);
            (0..n).map(|_| normal.sample(&mut rng)).collect()
        })
        .collect()
}

#[test]
fn flat_points_normalize_to_one_group() {
    for group in random_groups(20) {
        assert_eq!(normalize(group.clone()).unwrap(), vec![group]);
    }
}

#[test]
fn nested_points_normalize_unchanged() {
    for count in 1..8 {
        let groups = random_groups(count);
        assert_eq!(normalize(groups.clone()).unwrap(), groups);
    }
}

#[test]
fn set_points_round_trips_through_normalize() {
    let groups = random_groups(5);
    let mut line = NumberLine::new();
    line.set_points(groups.clone()).unwrap();
    assert_eq!(line.points(), &normalize(groups).unwrap());
}

#[test]
fn set_points_round_trips_with_fixed_ticks_set() {
    let mut rng = rand::rng();
    for _ in 0..10 {
        let mut line = NumberLine::new();
        line.set_points(random_groups(3)).unwrap();
        let (min, max) = line.limits().unwrap();
        let spread = Uniform::new_inclusive(min, max).unwrap();
        let ticks: Vec<f64> = (0..4).map(|_| spread.sample(&mut rng)).collect();
        line.set_ticks(ticks.clone()).unwrap();

        let groups = random_groups(4);
        line.set_points(groups.clone()).unwrap();
        assert_eq!(line.points(), &normalize(groups.clone()).unwrap());

        let (min, max) = line.limits().unwrap();
        assert!(ticks.iter().chain(groups.iter().flatten()).all(|v| min <= *v && *v <= max));
        assert!(line.render_config().is_ok());
    }
}

#[test]
fn derived_limits_enclose_all_points() {
    let groups = random_groups(6);
    let mut line = NumberLine::new();
    line.set_points(groups.clone()).unwrap();
    let (min, max) = line.limits().unwrap();
    for value in groups.iter().flatten() {
        assert!(min < *value && *value < max);
    }

    let config = line.render_config().unwrap();
    assert!(
        config
            .tick_marks()
            .iter()
            .all(|t| t.value >= min && t.value <= max)
    );
}

#[test]
fn missing_and_multidimensional_points() {
    assert_eq!(
        normalize(Vec::<f64>::new()),
        Err(NumberLineError::MissingPoints)
    );
    assert_eq!(
        normalize(vec![Vec::<f64>::new()]),
        Err(NumberLineError::MissingPoints)
    );
    let deep: Vec<PointValue> = vec![vec![vec![1.0, 2.0, 3.0]].into()];
    assert_eq!(
        normalize(deep),
        Err(NumberLineError::MultidimensionalPoints)
    );
}

#[test]
fn default_limits() {
    let points = normalize(vec![1.0, 2.0, 3.0]).unwrap();
    assert_eq!(points.default_min(), Some(0.0));
    assert_eq!(points.default_max(), Some(4.0));
}

#[test]
fn limits_and_ticks() {
    let mut line = NumberLine::new();
    assert_eq!(
        line.set_limits(5.0, 3.0),
        Err(NumberLineError::InvalidLimit(
            LimitViolation::MinNotBelowMax { min: 5.0, max: 3.0 }
        ))
    );
    line.set_limits(0.0, 4.0).unwrap();
    assert_eq!(line.limits(), Some((0.0, 4.0)));

    assert_eq!(
        line.set_ticks(vec![-1.0, 2.0, 3.0]),
        Err(NumberLineError::InvalidLimit(LimitViolation::TickBelowMin {
            tick: -1.0,
            min: 0.0
        }))
    );
    assert_eq!(
        line.set_ticks(vec![2.0, 5.0]),
        Err(NumberLineError::InvalidLimit(LimitViolation::TickAboveMax {
            tick: 5.0,
            max: 4.0
        }))
    );
    line.set_ticks(Ticks::Auto).unwrap();
}

#[test]
fn clear_points_twice_equals_once() {
    let mut once = NumberLine::new();
    once.set_points(random_groups(3)).unwrap();
    once.clear_points();

    let mut twice = once.clone();
    twice.clear_points();

    assert_eq!(once.points(), twice.points());
    assert_eq!(once.labels(), twice.labels());
    assert_eq!(once.limits(), twice.limits());
    assert_eq!(once.ticks(), twice.ticks());
}

#[test]
fn table_and_array_inputs() {
    let table = Table::new()
        .with_column("morning", vec![7.5, 8.0])
        .with_column("evening", vec![19.0]);
    let labels = table.column_names();
    let mut line = NumberLine::new();
    line.set_labeled_points(table.clone(), labels).unwrap();
    assert_eq!(line.labels(), ["morning", "evening"]);
    assert_eq!(line.limits(), Some((6.5, 20.0)));
    assert_eq!(
        line.points().groups()[1].values(),
        table.column("evening").unwrap()
    );

    let array = NumArray::from_shape_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
    assert_eq!(array.shape(), Shape::TwoD { rows: 1, cols: 3 });
    line.set_points(array).unwrap();
    assert!(line.labels().is_empty());
    assert_eq!(line.points().to_vecs(), vec![vec![1.0, 2.0, 3.0]]);
}

#[test]
fn builder_matches_setters() {
    let built = NumberLineBuilder::new()
        .with_points(vec![1.0, 2.0, 3.0])
        .with_min(0.0)
        .with_max(4.0)
        .with_ticks(vec![1.0, 2.0, 3.0])
        .build()
        .unwrap();

    let mut set = NumberLine::new();
    set.set_points(vec![1.0, 2.0, 3.0]).unwrap();
    set.set_limits(0.0, 4.0).unwrap();
    set.set_ticks(vec![1.0, 2.0, 3.0]).unwrap();

    assert_eq!(built.render_config(), set.render_config());
}
