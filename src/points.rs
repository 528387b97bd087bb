//! Point input shapes and their normalization into point groups.
//!
//! Points can be handed over as a flat list of numbers, a list of lists, a
//! columnar [`Table`] or a native numeric array ([`NumArray`], or plain Rust
//! arrays). Whatever the shape, [`normalize`] turns it into a
//! [`PointCollection`]: an ordered list of non-empty groups of finite numbers.
use indexmap::IndexMap;

use crate::error::{NumberLineError, Result};

/// A dynamically nested numeric value.
///
/// Used for list-of-lists input where the nesting depth is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum PointValue {
    Scalar(f64),
    Seq(Vec<PointValue>),
}

impl From<f64> for PointValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<i32> for PointValue {
    fn from(value: i32) -> Self {
        Self::Scalar(value.into())
    }
}

impl<T: Into<PointValue>> From<Vec<T>> for PointValue {
    fn from(values: Vec<T>) -> Self {
        Self::Seq(values.into_iter().map(Into::into).collect())
    }
}

/// A columnar table of named numeric columns.
///
/// Columns keep their insertion order; each column becomes one point group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: IndexMap<String, Vec<f64>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column. A column with the same name is replaced in place.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.insert(name.into(), values);
        self
    }

    /// Column names in order, handy as group labels.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.keys().cloned().collect()
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Dimensionality of a [`NumArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    OneD(usize),
    TwoD { rows: usize, cols: usize },
}

/// A dense numeric array, one- or two-dimensional, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct NumArray {
    shape: Shape,
    data: Vec<f64>,
}

impl NumArray {
    /// Create a 1D array.
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            shape: Shape::OneD(data.len()),
            data,
        }
    }

    /// Create a 2D array from row-major data.
    ///
    /// Returns `None` if `data` does not hold exactly `rows * cols` values.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        (rows.checked_mul(cols)? == data.len()).then_some(Self {
            shape: Shape::TwoD { rows, cols },
            data,
        })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    fn into_nested(self) -> Vec<PointValue> {
        match self.shape {
            Shape::OneD(_) => self.data.into_iter().map(PointValue::Scalar).collect(),
            Shape::TwoD { rows, cols } => {
                if cols == 0 {
                    return vec![PointValue::Seq(Vec::new()); rows];
                }
                self.data.chunks(cols).map(|row| scalars(row.to_vec())).collect()
            }
        }
    }
}

fn scalars(values: Vec<f64>) -> PointValue {
    PointValue::Seq(values.into_iter().map(PointValue::Scalar).collect())
}

/// The shapes points may arrive in.
#[derive(Debug, Clone, PartialEq)]
pub enum PointInput {
    /// A flat list of numbers: one group.
    Flat(Vec<f64>),
    /// A list of (possibly nested) values.
    Nested(Vec<PointValue>),
    /// A columnar table: one group per column.
    Table(Table),
    /// A native numeric array: 1D is one group, 2D is one group per row.
    Array(NumArray),
}

impl PointInput {
    fn into_nested(self) -> Vec<PointValue> {
        match self {
            Self::Flat(values) => values.into_iter().map(PointValue::Scalar).collect(),
            Self::Nested(values) => values,
            Self::Table(table) => table.columns.into_values().map(scalars).collect(),
            Self::Array(array) => array.into_nested(),
        }
    }
}

impl From<Vec<f64>> for PointInput {
    fn from(values: Vec<f64>) -> Self {
        Self::Flat(values)
    }
}

impl From<&[f64]> for PointInput {
    fn from(values: &[f64]) -> Self {
        Self::Flat(values.to_vec())
    }
}

impl From<Vec<Vec<f64>>> for PointInput {
    fn from(groups: Vec<Vec<f64>>) -> Self {
        Self::Nested(groups.into_iter().map(PointValue::from).collect())
    }
}

impl From<Vec<PointValue>> for PointInput {
    fn from(values: Vec<PointValue>) -> Self {
        Self::Nested(values)
    }
}

impl From<Table> for PointInput {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

impl From<NumArray> for PointInput {
    fn from(array: NumArray) -> Self {
        Self::Array(array)
    }
}

impl<const N: usize> From<[f64; N]> for PointInput {
    fn from(values: [f64; N]) -> Self {
        Self::Array(NumArray::from_vec(values.to_vec()))
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for PointInput {
    fn from(rows: [[f64; C]; R]) -> Self {
        Self::Array(NumArray {
            shape: Shape::TwoD { rows: R, cols: C },
            data: rows.into_iter().flatten().collect(),
        })
    }
}

/// One set of points rendered with shared styling and label. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PointGroup(Vec<f64>);

impl PointGroup {
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a normalized group.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn extrema(&self) -> (f64, f64) {
        self.0
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            })
    }
}

/// Ordered point groups. Order is render and legend order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCollection {
    groups: Vec<PointGroup>,
}

/// Padding applied on each side of the data when limits are derived.
pub const DEFAULT_LIMIT_PADDING: f64 = 1.0;

impl PointCollection {
    pub fn groups(&self) -> &[PointGroup] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointGroup> {
        self.groups.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Copy out the groups as plain vectors.
    pub fn to_vecs(&self) -> Vec<Vec<f64>> {
        self.groups.iter().map(|g| g.0.clone()).collect()
    }

    pub(crate) fn extend(&mut self, other: PointCollection) {
        self.groups.extend(other.groups);
    }

    pub(crate) fn clear(&mut self) {
        self.groups.clear();
    }

    /// Smallest and largest value over all groups.
    pub fn extrema(&self) -> Option<(f64, f64)> {
        self.groups
            .iter()
            .map(PointGroup::extrema)
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
    }

    /// `min(points) - 1`, or `None` without points.
    pub fn default_min(&self) -> Option<f64> {
        self.extrema().map(|(lo, _)| lo - DEFAULT_LIMIT_PADDING)
    }

    /// `max(points) + 1`, or `None` without points.
    pub fn default_max(&self) -> Option<f64> {
        self.extrema().map(|(_, hi)| hi + DEFAULT_LIMIT_PADDING)
    }
}

impl PartialEq<Vec<Vec<f64>>> for PointCollection {
    fn eq(&self, other: &Vec<Vec<f64>>) -> bool {
        self.groups.len() == other.len()
            && self.groups.iter().zip(other).all(|(g, o)| g.0 == *o)
    }
}

/// Convert points of any accepted shape into a [`PointCollection`].
///
/// A flat list becomes a single group; a list of lists is taken as-is. Fails with
/// [`NumberLineError::MissingPoints`] for empty input or an empty group, and with
/// [`NumberLineError::MultidimensionalPoints`] for more than two levels of nesting.
pub fn normalize(input: impl Into<PointInput>) -> Result<PointCollection> {
    let nested = input.into().into_nested();
    let Some(first) = nested.first() else {
        return Err(NumberLineError::MissingPoints);
    };

    let groups = match first {
        PointValue::Scalar(_) => vec![flat_group(nested)?],
        PointValue::Seq(_) => nested
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                PointValue::Seq(inner) => flat_inner_group(inner),
                PointValue::Scalar(_) => Err(NumberLineError::InconsistentNesting { index }),
            })
            .collect::<Result<Vec<_>>>()?,
    };

    for (group_index, group) in groups.iter().enumerate() {
        if let Some(index) = group.0.iter().position(|v| !v.is_finite()) {
            return Err(NumberLineError::NonFinitePoint {
                group: group_index,
                index,
            });
        }
    }

    Ok(PointCollection { groups })
}

/// Top level was flat: every element must be a scalar.
fn flat_group(values: Vec<PointValue>) -> Result<PointGroup> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            PointValue::Scalar(v) => Ok(v),
            PointValue::Seq(_) => Err(NumberLineError::InconsistentNesting { index }),
        })
        .collect::<Result<Vec<_>>>()
        .map(PointGroup)
}

/// One level down: the group must be non-empty and hold no further sequences.
fn flat_inner_group(values: Vec<PointValue>) -> Result<PointGroup> {
    if values.is_empty() {
        return Err(NumberLineError::MissingPoints);
    }
    values
        .into_iter()
        .map(|value| match value {
            PointValue::Scalar(v) => Ok(v),
            PointValue::Seq(_) => Err(NumberLineError::MultidimensionalPoints),
        })
        .collect::<Result<Vec<_>>>()
        .map(PointGroup)
}
