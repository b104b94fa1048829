// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing input, or --help), clap
/// displays an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the global tracing subscriber
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Events go to stderr so
/// stdout carries only the CSV output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
