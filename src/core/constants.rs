//! A collection of constants.

/// Grid height used when none is given
pub const DEFAULT_ROWS: usize = 20;
/// Grid width used when none is given
pub const DEFAULT_COLS: usize = 40;

/// Largest accepted `rows` or `cols`, the range of a terminal dimension
pub const MAX_GRID_DIM: usize = u16::MAX as usize;

/// Width of the y-axis label column, separator included: `"%3s|"`
pub const AXIS_GUTTER: usize = 4;
/// Separator between the y labels and the plotted cells
pub const AXIS_SEPARATOR: char = '|';
/// Corner where the y axis meets the x-axis rule
pub const AXIS_CORNER: char = '+';
/// Character of the x-axis rule
pub const RULE: char = '-';

/// Printed after every x tick label
pub const TICK_POINTER: &str = " ";
/// Extra room added to each tick label on top of the digits and pointer
pub const TICK_PADDING: usize = 2;
/// Roughly ten labelled rows on the y axis
pub const ROW_TICK_DIVISOR: usize = 10;

/// Vertical guide drawn beneath a plotted point
pub const DROP_BAR: &str = "⋅";

/// Terminal lines beyond `rows`: row 0, x-axis rule, tick labels, prompt
pub const FRAME_OVERHEAD_ROWS: usize = 4;

#[cfg(windows)]
pub const LINE_END: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_END: &str = "\n";
