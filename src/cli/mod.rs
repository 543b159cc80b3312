mod handlers;
pub mod logger;
pub mod parse;

use clap::Parser;
pub use handlers::{config_from_args, plot};
pub use parse::Cli;

use crate::core::error::GraphError;

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    logger::init_cli_logger(cli.verbose);
    handlers::scatter(&cli)
}
