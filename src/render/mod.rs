pub mod backend;
pub mod binner;
pub mod frame;
pub mod glyph;

pub use backend::{ExternalPlotter, PlotBackend};
pub use binner::{BinnedGrid, Transform, bin};
pub use frame::{Renderer, draw_frame};
