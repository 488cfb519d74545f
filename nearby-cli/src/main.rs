//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use nearby_cli::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    match nearby_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("nearby: {err}");
            std::process::exit(1);
        }
    }
}

/// Route `log` records and `tracing` events to stderr, filtered by `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("nearby: logging disabled: {err}");
    }
}
