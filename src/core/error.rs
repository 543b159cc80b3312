//! Centralised error types used across the crate.

use std::{io, process::ExitStatus};

use thiserror::Error;

use crate::core::constants::MAX_GRID_DIM;

/// Precise configuration faults.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rows must be a positive integer, got 0")]
    ZeroRows,
    #[error("cols must be a positive integer, got 0")]
    ZeroCols,
    #[error("rows must be at most {max}, got {0}", max = MAX_GRID_DIM)]
    TooManyRows(usize),
    #[error("cols must be at most {max}, got {0}", max = MAX_GRID_DIM)]
    TooManyCols(usize),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Nothing was read, so there is no range to scale against.
    #[error("no data points to plot")]
    NoData,

    /// Decimal arithmetic left the representable range while scaling.
    #[error("coordinate arithmetic overflowed while scaling the grid")]
    Overflow,

    #[error("failed to launch plotter `{program}`: {source}")]
    Plotter {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("plotter `{program}` exited with {status}")]
    PlotterExit { program: String, status: ExitStatus },
}
