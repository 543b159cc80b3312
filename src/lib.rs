//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

use std::io::Write;

pub use crate::core::{
    bounds::{Axis, XScan},
    config::{Config, ConfigBuilder},
    constants::{DEFAULT_COLS, DEFAULT_ROWS},
    data::{PointSet, Token, classify, collect_lines, parse_line, read_points},
    error::{ConfigError, GraphError},
};

pub use crate::render::{
    BinnedGrid, ExternalPlotter, PlotBackend, Renderer, Transform, bin, draw_frame,
};

/// Bin `points` onto the configured grid and write the text plot to `out`.
pub fn ascii_scatter<W: Write>(
    out: W,
    points: &PointSet,
    config: &Config,
) -> Result<(), GraphError> {
    Renderer::new(out).plot(points, config)
}
