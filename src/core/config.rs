//! Run-time configuration object + fluent builder.

use crate::core::{
    bounds::XScan,
    constants::{DEFAULT_COLS, DEFAULT_ROWS, MAX_GRID_DIM},
    error::ConfigError,
};

/// Immutable parameters handed to the transformer and renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub draw_bars: bool,
    pub use_glyphs: bool,
    pub x_scan: XScan,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder(rows: usize, cols: usize) -> ConfigBuilder {
        ConfigBuilder::new(rows, cols)
    }

    /// Reject grids that would divide by zero when scaling, or that are too
    /// large to lay out as a frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.rows, self.cols) {
            (0, _) => Err(ConfigError::ZeroRows),
            (_, 0) => Err(ConfigError::ZeroCols),
            (rows, _) if rows > MAX_GRID_DIM => Err(ConfigError::TooManyRows(rows)),
            (_, cols) if cols > MAX_GRID_DIM => Err(ConfigError::TooManyCols(cols)),
            _ => Ok(()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            draw_bars: false,
            use_glyphs: false,
            x_scan: XScan::default(),
        }
    }
}

/// Fluent builder; nothing is checked until `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    rows: usize,
    cols: usize,
    draw_bars: bool,
    use_glyphs: bool,
    x_scan: Option<XScan>,
}

impl ConfigBuilder {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            draw_bars: false,
            use_glyphs: false,
            x_scan: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn bars(mut self, on: bool) -> Self {
        self.draw_bars = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn glyphs(mut self, on: bool) -> Self {
        self.use_glyphs = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn x_scan(mut self, scan: XScan) -> Self {
        self.x_scan = Some(scan);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let cfg = Config {
            rows: self.rows,
            cols: self.cols,
            draw_bars: self.draw_bars,
            use_glyphs: self.use_glyphs,
            x_scan: self.x_scan.unwrap_or_default(),
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_carries_flags() {
        let cfg = Config::builder(5, 7)
            .bars(true)
            .glyphs(true)
            .x_scan(XScan::FirstPerBucket)
            .build()
            .unwrap();
        assert_eq!(cfg.rows, 5);
        assert_eq!(cfg.cols, 7);
        assert!(cfg.draw_bars);
        assert!(cfg.use_glyphs);
        assert_eq!(cfg.x_scan, XScan::FirstPerBucket);
    }

    #[test]
    fn defaults_match_cli_defaults() {
        let built = Config::builder(DEFAULT_ROWS, DEFAULT_COLS).build().unwrap();
        assert_eq!(built, Config::default());
        assert_eq!(built.x_scan, XScan::AllKeys);
    }

    #[test]
    fn zero_rows_is_a_configuration_error() {
        assert_eq!(
            Config::builder(0, 40).build().unwrap_err(),
            ConfigError::ZeroRows
        );
    }

    #[test]
    fn zero_cols_is_a_configuration_error() {
        assert_eq!(
            Config::builder(20, 0).build().unwrap_err(),
            ConfigError::ZeroCols
        );
    }

    #[test]
    fn oversized_grids_are_configuration_errors() {
        assert_eq!(
            Config::builder(2, usize::MAX).build().unwrap_err(),
            ConfigError::TooManyCols(usize::MAX)
        );
        assert_eq!(
            Config::builder(1_000_000_000_000, 40).build().unwrap_err(),
            ConfigError::TooManyRows(1_000_000_000_000)
        );
        assert!(Config::builder(MAX_GRID_DIM, MAX_GRID_DIM).build().is_ok());
        assert_eq!(
            Config::builder(MAX_GRID_DIM + 1, 1).build().unwrap_err(),
            ConfigError::TooManyRows(MAX_GRID_DIM + 1)
        );
    }
}
