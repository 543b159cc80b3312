//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;

// re-export frequently-used items for convenience
pub use bounds::{Axis, XScan};
pub use config::{Config, ConfigBuilder};
pub use constants::{AXIS_GUTTER, DEFAULT_COLS, DEFAULT_ROWS, LINE_END, MAX_GRID_DIM};
pub use data::{PointSet, Token};
pub use error::{ConfigError, GraphError};
