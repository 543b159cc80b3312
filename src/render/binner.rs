//! Quantize an arbitrary-range point set onto a fixed `rows × cols` grid.
//!
//! Each axis is scaled by `max(max - min, cells - 1) / cells`, so narrow data
//! never gets stretched past one grid step per unit.  Points that land in
//! the same cell have their multiplicities summed.
//!
//! Indices are `floor((v - min) / scale)` and always lie in `0..=cells`.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::core::{
    bounds::Axis,
    config::Config,
    data::PointSet,
    error::GraphError,
};

/// Scalars needed to map values to cells and cells back to axis labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transform {
    pub rows: usize,
    pub cols: usize,
    pub min_y: Decimal,
    /// `max(max_y - min_y, rows - 1)`
    pub y_range: Decimal,
    pub y_scale: Decimal,
    pub min_x: Decimal,
    /// `max(max_x - min_x, cols - 1)`
    pub x_range: Decimal,
    pub x_scale: Decimal,
}

impl Transform {
    #[inline]
    pub fn row_of(&self, y: Decimal) -> Result<usize, GraphError> {
        cell_index(y, self.min_y, self.y_range, self.rows)
    }

    #[inline]
    pub fn col_of(&self, x: Decimal) -> Result<usize, GraphError> {
        cell_index(x, self.min_x, self.x_range, self.cols)
    }

    /// Y-axis label of `row`: `round(row * y_scale + min_y)`, ties to even.
    pub fn y_label(&self, row: usize) -> Result<Decimal, GraphError> {
        Decimal::from(row)
            .checked_mul(self.y_scale)
            .and_then(|v| v.checked_add(self.min_y))
            .map(|v| v.round())
            .ok_or(GraphError::Overflow)
    }

    /// X-axis tick value of `col`: `floor(col * x_scale) + min_x`.
    pub fn x_tick(&self, col: usize) -> Result<Decimal, GraphError> {
        Decimal::from(col)
            .checked_mul(self.x_scale)
            .and_then(|v| v.floor().checked_add(self.min_x))
            .ok_or(GraphError::Overflow)
    }
}

/// `max(high - low, cells - 1)`.  `cells` is non-zero.
fn axis_range(low: Decimal, high: Decimal, cells: usize) -> Result<Decimal, GraphError> {
    let span = high.checked_sub(low).ok_or(GraphError::Overflow)?;
    Ok(span.max(Decimal::from(cells - 1)))
}

fn axis_scale(range: Decimal, cells: usize) -> Result<Decimal, GraphError> {
    range
        .checked_div(Decimal::from(cells))
        .ok_or(GraphError::Overflow)
}

/// `floor((v - min) * cells / range)` clamped to `[0, cells]`.
///
/// Multiplied before dividing so boundary values stay exact.
fn cell_index(v: Decimal, min: Decimal, range: Decimal, cells: usize) -> Result<usize, GraphError> {
    // zero span on a one-cell axis: everything sits on the origin
    if range.is_zero() {
        return Ok(0);
    }
    let offset = v.checked_sub(min).ok_or(GraphError::Overflow)?;
    let cells_dec = Decimal::from(cells);
    let cell = match offset.checked_mul(cells_dec) {
        Some(scaled) => scaled.checked_div(range),
        None => offset
            .checked_div(range)
            .and_then(|unit| unit.checked_mul(cells_dec)),
    }
    .ok_or(GraphError::Overflow)?
    .floor();
    if cell.is_sign_negative() {
        return Ok(0);
    }
    Ok(cell.to_usize().map_or(cells, |c| c.min(cells)))
}

/// `row -> (col -> summed multiplicity)` plus the transform that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinnedGrid {
    cells: BTreeMap<usize, BTreeMap<usize, u64>>,
    transform: Transform,
}

impl BinnedGrid {
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        self.cells.get(&row)?.get(&col).copied()
    }

    /// Ascending `(row, col, count)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.cells
            .iter()
            .flat_map(|(&r, cols)| cols.iter().map(move |(&c, &n)| (r, c, n)))
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.cells.values().flat_map(BTreeMap::values).sum()
    }

    /// Highest populated row.
    #[must_use]
    pub fn top_row(&self) -> Option<usize> {
        self.cells.keys().next_back().copied()
    }

    /// Highest populated column over all rows.
    #[must_use]
    pub fn widest_col(&self) -> Option<usize> {
        self.cells
            .values()
            .filter_map(|cols| cols.keys().next_back().copied())
            .max()
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.transform.rows
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.transform.cols
    }

    #[inline]
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }
}

/// Map `points` onto the `config.rows × config.cols` grid.
///
/// * `ConfigError` if either dimension is zero
/// * `NoData` if `points` is empty
pub fn bin(points: &PointSet, config: &Config) -> Result<BinnedGrid, GraphError> {
    config.validate()?;

    let (min_y, max_y) = Axis::Y.bounds(points).ok_or(GraphError::NoData)?;
    let (min_x, max_x) = Axis::X(config.x_scan)
        .bounds(points)
        .ok_or(GraphError::NoData)?;

    let y_range = axis_range(min_y, max_y, config.rows)?;
    let x_range = axis_range(min_x, max_x, config.cols)?;
    let transform = Transform {
        rows: config.rows,
        cols: config.cols,
        min_y,
        y_range,
        y_scale: axis_scale(y_range, config.rows)?,
        min_x,
        x_range,
        x_scale: axis_scale(x_range, config.cols)?,
    };
    tracing::debug!(
        %min_y, %max_y, y_scale = %transform.y_scale,
        %min_x, %max_x, x_scale = %transform.x_scale,
        "grid transform"
    );

    let mut cells: BTreeMap<usize, BTreeMap<usize, u64>> = BTreeMap::new();
    for (y, x, n) in points.iter() {
        let row = transform.row_of(y)?;
        let col = transform.col_of(x)?;
        *cells.entry(row).or_default().entry(col).or_insert(0) += n;
    }

    Ok(BinnedGrid { cells, transform })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::core::bounds::XScan;
    use proptest::prelude::*;

    fn decimal() -> impl Strategy<Value = Decimal> {
        (-100_000i64..100_000, 0u32..3).prop_map(|(m, scale)| Decimal::new(m, scale))
    }

    fn point_set() -> impl Strategy<Value = PointSet> {
        prop::collection::vec((decimal(), decimal()), 1..200)
            .prop_map(|pts| pts.into_iter().collect())
    }

    fn scan() -> impl Strategy<Value = XScan> {
        prop_oneof![Just(XScan::AllKeys), Just(XScan::FirstPerBucket)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Every cell lies in `[0, rows] × [0, cols]`
        #[test]
        fn prop_cells_stay_in_bounds(
            points in point_set(),
            rows in 1usize..60,
            cols in 1usize..120,
            x_scan in scan(),
        ) {
            let config = Config::builder(rows, cols).x_scan(x_scan).build().unwrap();
            let grid = bin(&points, &config).unwrap();
            for (r, c, _) in grid.cells() {
                prop_assert!(r <= rows, "row {} > {}", r, rows);
                prop_assert!(c <= cols, "col {} > {}", c, cols);
            }
        }

        /// Every input line contributes exactly one unit of multiplicity
        #[test]
        fn prop_multiplicity_is_conserved(
            points in point_set(),
            rows in 1usize..60,
            cols in 1usize..120,
        ) {
            let grid = bin(&points, &Config::builder(rows, cols).build().unwrap()).unwrap();
            prop_assert_eq!(grid.total(), points.total());
        }

        #[test]
        fn prop_binning_is_deterministic(
            points in point_set(),
            rows in 1usize..60,
            cols in 1usize..120,
        ) {
            let config = Config::builder(rows, cols).build().unwrap();
            prop_assert_eq!(bin(&points, &config).unwrap(), bin(&points, &config).unwrap());
        }

        /// y1 < y2 implies row(y1) <= row(y2)
        #[test]
        fn prop_rows_are_monotonic_in_y(
            points in point_set(),
            rows in 1usize..60,
        ) {
            let grid = bin(&points, &Config::builder(rows, 40).build().unwrap()).unwrap();
            let t = grid.transform();
            let mut prev = 0usize;
            for (y, _) in points.buckets() {
                let row = t.row_of(*y).unwrap();
                prop_assert!(row >= prev);
                prev = row;
            }
        }

        /// All-equal y values land on a single row
        #[test]
        fn prop_flat_series_share_a_row(
            y in decimal(),
            xs in prop::collection::vec(decimal(), 1..50),
            rows in 1usize..60,
            cols in 1usize..120,
        ) {
            let points: PointSet = xs.into_iter().map(|x| (x, y)).collect();
            let grid = bin(&points, &Config::builder(rows, cols).build().unwrap()).unwrap();
            prop_assert_eq!(grid.top_row(), Some(0));
            prop_assert!(grid.cells().all(|(r, _, _)| r == 0));
        }

        /// The largest value on each axis lands in the last row and column
        #[test]
        fn prop_maximum_reaches_the_far_edge(
            rows in 1usize..60,
            cols in 1usize..120,
            y_extra in 0i64..200,
            x_extra in 0i64..200,
            min_y in decimal(),
            min_x in decimal(),
        ) {
            let y_span = Decimal::from(rows - 1) + Decimal::from(y_extra);
            let x_span = Decimal::from(cols - 1) + Decimal::from(x_extra);
            let points: PointSet = [(min_x, min_y), (min_x + x_span, min_y + y_span)]
                .into_iter()
                .collect();
            let grid = bin(&points, &Config::builder(rows, cols).build().unwrap()).unwrap();
            if y_span.is_zero() {
                prop_assert_eq!(grid.top_row(), Some(0));
            } else {
                prop_assert_eq!(grid.top_row(), Some(rows));
            }
            if x_span.is_zero() {
                prop_assert_eq!(grid.widest_col(), Some(0));
            } else {
                prop_assert_eq!(grid.widest_col(), Some(cols));
            }
        }
    }
}
