use std::{
    io::{Write, stdout},
    time::Instant,
};

use crate::{
    core::{
        bounds::{XScan, fit_grid, terminal_geometry},
        config::Config,
        constants::LINE_END,
        data::{PointSet, read_points_from_path},
        error::GraphError,
    },
    render::{ExternalPlotter, PlotBackend, Renderer},
};

use super::parse::Cli;

/// Grid settings from the flags; `--fit` overrides `--rows` / `--cols`.
pub fn config_from_args(a: &Cli) -> Result<Config, GraphError> {
    let (rows, cols) = if a.fit {
        fit_grid(terminal_geometry())
    } else {
        (a.rows, a.cols)
    };
    let x_scan = if a.legacy_x_range {
        XScan::FirstPerBucket
    } else {
        XScan::AllKeys
    };

    Ok(Config::builder(rows, cols)
        .bars(a.bars)
        .glyphs(a.glyphs)
        .x_scan(x_scan)
        .build()?)
}

/// Dump (if asked) and plot already collected points, text going to `out`.
pub fn plot<W: Write>(a: &Cli, cfg: &Config, points: &PointSet, mut out: W) -> Result<(), GraphError> {
    if a.debug_dump_points {
        write!(out, "{points}{LINE_END}")?;
        out.flush()?;
    }

    if a.external {
        tracing::debug!("plotting with external program");
        let mut plotter = ExternalPlotter::new(&a.plotter).args(&a.plotter_args);
        plotter.plot(points, cfg)
    } else {
        Renderer::new(out).plot(points, cfg)
    }
}

pub fn scatter(a: &Cli) -> Result<(), GraphError> {
    // config first: a bad grid is reported before any input is read
    let cfg = config_from_args(a)?;
    tracing::debug!(rows = cfg.rows, cols = cfg.cols, "grid");

    let t_ingest = Instant::now();
    let points = read_points_from_path(&a.file)?;
    tracing::debug!(
        elapsed_us = t_ingest.elapsed().as_micros(),
        lines = points.total(),
        "ingest"
    );

    plot(a, &cfg, &points, stdout().lock())
}
