// Logging and verbosity control

use tracing_subscriber::EnvFilter;

/// Initialize tracing based on CLI flags.
///
/// `RUST_LOG` wins when set; otherwise the flags pick the filter. Quiet
/// beats verbose when both are passed.
pub fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
