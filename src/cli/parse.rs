use clap::Parser;

use crate::core::constants::{DEFAULT_COLS, DEFAULT_ROWS};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "scatter",
    about = "Coarse scatter plots of whitespace-delimited numbers, in the terminal"
)]
pub struct Cli {
    /// Input path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Grid height
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Grid width
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Size the grid to the terminal instead of --rows / --cols
    #[arg(long)]
    pub fit: bool,

    /// Draw a guide from every point down to the x axis
    #[arg(short = 'b', long)]
    pub bars: bool,

    /// Show overlap counts as dots instead of digits
    #[arg(long)]
    pub glyphs: bool,

    /// Print the collected points before plotting
    #[arg(short = 'D', long)]
    pub debug_dump_points: bool,

    /// Take the x range from one x per distinct y (older output)
    #[arg(long)]
    pub legacy_x_range: bool,

    /// Hand the points to an external plotter instead of drawing text
    #[arg(long)]
    pub external: bool,

    /// Plotter program used with --external
    #[arg(long, value_name = "CMD", default_value = "gnuplot")]
    pub plotter: String,

    /// Extra argument for the plotter (repeatable)
    #[arg(long = "plotter-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub plotter_args: Vec<String>,

    /// Log progress and timings to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
