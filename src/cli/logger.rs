use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Compact logs on stderr; stdout carries the plot.  `RUST_LOG` wins over
/// `verbose`.
pub fn init_cli_logger(verbose: bool) {
    let fallback = if verbose {
        "ascii_scatter=debug"
    } else {
        "ascii_scatter=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
