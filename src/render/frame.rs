//! Character-grid frame renderer.
//!
//! Layout, top to bottom:
//! - one line per grid row, `rows` down to 0: a 4-wide y-label gutter
//!   (`"%3s|"`) followed by `cols + 1` cells
//! - the x-axis rule `"   +----…"`
//! - x tick labels, each right-aligned in a `col_tick_incr`-wide field
//!
//! The whole frame is assembled in memory and written with one `write_all`.

use std::io::{Stdout, Write, stdout};

use crate::{
    core::{
        config::Config,
        constants::{
            AXIS_CORNER, AXIS_GUTTER, AXIS_SEPARATOR, DROP_BAR, LINE_END, ROW_TICK_DIVISOR, RULE,
            TICK_PADDING, TICK_POINTER,
        },
        data::PointSet,
        error::GraphError,
    },
    render::{
        backend::PlotBackend,
        binner::{BinnedGrid, bin},
        glyph::cell_text,
    },
};

// --- Helpers ---

#[inline]
fn push_axis_label(buf: &mut String, label: Option<&str>) {
    let w = AXIS_GUTTER - 1;
    buf.push_str(&format!("{:>w$}", label.unwrap_or("")));
    buf.push(AXIS_SEPARATOR);
}

#[inline]
fn push_rule(buf: &mut String, cols: usize) {
    buf.push_str(&" ".repeat(AXIS_GUTTER - 1));
    buf.push(AXIS_CORNER);
    buf.extend(std::iter::repeat_n(RULE, cols));
    buf.push_str(LINE_END);
}

/// Columns between x ticks: enough room for the widest column index plus
/// pointer and padding.
#[inline]
fn col_tick_incr(grid: &BinnedGrid) -> usize {
    let digits = grid.widest_col().unwrap_or(0).to_string().len();
    grid.cols()
        .div_ceil(digits + TICK_POINTER.len() + TICK_PADDING)
        .max(1)
}

/// Render `grid` into a complete frame.
///
/// Only rows that are multiples of `rows / 10`, plus the highest populated
/// row, get a y label.
pub fn draw_frame(grid: &BinnedGrid, config: &Config) -> Result<String, GraphError> {
    let rows = grid.rows();
    let cols = grid.cols();
    let t = grid.transform();

    let row_tick_incr = (rows / ROW_TICK_DIVISOR).max(1);
    let top = grid.top_row();

    // columns that already showed a point further up
    let mut dropped = vec![false; cols + 1];
    let mut buf = String::with_capacity((rows + 3) * (AXIS_GUTTER + cols + 2));

    for y in (0..=rows).rev() {
        if y % row_tick_incr == 0 || Some(y) == top {
            let label = t.y_label(y)?.to_string();
            push_axis_label(&mut buf, Some(&label));
        } else {
            push_axis_label(&mut buf, None);
        }

        for (x, seen) in dropped.iter_mut().enumerate() {
            if let Some(count) = grid.get(y, x) {
                buf.push_str(&cell_text(count, config.use_glyphs));
                *seen = true;
            } else if config.draw_bars && *seen {
                buf.push_str(DROP_BAR);
            } else {
                buf.push(' ');
            }
        }
        buf.push_str(LINE_END);
    }

    push_rule(&mut buf, cols);

    let incr = col_tick_incr(grid);
    for x in (0..=cols).step_by(incr) {
        let tick = format!("{}{TICK_POINTER}", t.x_tick(x)?);
        buf.push_str(&format!("{tick:>incr$}"));
    }
    buf.push_str(LINE_END);

    Ok(buf)
}

/// Text backend: bins the points and writes the frame to `W`.
pub struct Renderer<W: Write> {
    out: W,
}

impl Renderer<Stdout> {
    #[inline]
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write> Renderer<W> {
    #[inline]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write an already binned grid.
    pub fn render(&mut self, grid: &BinnedGrid, config: &Config) -> Result<(), GraphError> {
        let frame = draw_frame(grid, config)?;
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> PlotBackend for Renderer<W> {
    fn plot(&mut self, points: &PointSet, config: &Config) -> Result<(), GraphError> {
        let grid = bin(points, config)?;
        self.render(&grid, config)
    }
}
