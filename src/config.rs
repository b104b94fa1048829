//! Import and runtime configuration
//!
//! Both configurations have sensible defaults and are normally built from the
//! command-line arguments (see [`crate::cli::CliArgs`]).

use tracing::warn;

/// Configuration of the input file format
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportConfig {
    /// Whether the first row is a header and must be skipped
    pub has_header: bool,

    /// Field delimiter byte
    pub delimiter: u8,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
        }
    }
}

/// Configuration of the tokio runtime the CLI drives imports on
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Number of runtime worker threads
    pub worker_threads: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: num_cpus::get(),
        }
    }
}

impl RuntimeConfig {
    /// Create a RuntimeConfig, falling back to the default on zero threads
    pub fn new(worker_threads: usize) -> Self {
        if worker_threads == 0 {
            let default = Self::default();
            warn!(
                requested = worker_threads,
                fallback = default.worker_threads,
                "invalid worker thread count, using default"
            );
            return default;
        }

        Self { worker_threads }
    }
}
