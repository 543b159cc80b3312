//! Geometry helpers: axis extents + terminal size plumbing.

use rust_decimal::Decimal;
use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    constants::{AXIS_GUTTER, FRAME_OVERHEAD_ROWS},
    data::PointSet,
};

/// How the x extent is gathered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum XScan {
    /// Every x of every y bucket.
    #[default]
    AllKeys,
    /// Only the smallest x of each y bucket.  Kept for output parity with
    /// older plots; the real maximum may lie beyond the scanned one.
    FirstPerBucket,
}

/// Which axis we're measuring.
#[derive(Clone, Copy, Debug)]
pub enum Axis {
    X(XScan),
    Y,
}

impl Axis {
    /// Inclusive `(min, max)` without any padding, `None` on an empty set.
    #[must_use]
    pub fn bounds(self, points: &PointSet) -> Option<(Decimal, Decimal)> {
        let mut extent: Option<(Decimal, Decimal)> = None;
        let mut widen = |v: Decimal| {
            extent = Some(match extent {
                Some((low, high)) => (low.min(v), high.max(v)),
                None => (v, v),
            });
        };

        for (&y, xs) in points.buckets() {
            match self {
                Self::Y => widen(y),
                Self::X(XScan::AllKeys) => xs.keys().copied().for_each(&mut widen),
                Self::X(XScan::FirstPerBucket) => {
                    if let Some(&x) = xs.keys().next() {
                        widen(x);
                    }
                }
            }
        }
        extent
    }
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Largest `(rows, cols)` grid whose frame fits the terminal.
///
/// A frame is `rows + 1` grid lines plus the rule and tick lines, each grid
/// line being the gutter plus `cols + 1` cells.
#[inline]
#[must_use]
pub fn fit_grid((w, h): (Width, Height)) -> (usize, usize) {
    let rows = usize::from(h.0).saturating_sub(FRAME_OVERHEAD_ROWS).max(1);
    let cols = usize::from(w.0).saturating_sub(AXIS_GUTTER + 1).max(1);
    (rows, cols)
}
