use crate::config::{ImportConfig, RuntimeConfig};
use clap::Parser;
use std::path::PathBuf;

/// Import transactions from a CSV file
#[derive(Parser, Debug)]
#[command(name = "transaction-importer")]
#[command(about = "Import transactions and categories from a CSV file", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path; removed after a successful import
    #[arg(value_name = "INPUT", help = "Path to the CSV file to import")]
    pub input_file: PathBuf,

    /// Treat the first row as data instead of a header
    #[arg(long = "no-header", help = "The first row is data, not a header")]
    pub no_header: bool,

    /// Field delimiter
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_delimiter,
        help = "Single-byte field delimiter (default: ',')"
    )]
    pub delimiter: u8,

    /// Number of runtime worker threads
    #[arg(
        long = "worker-threads",
        value_name = "COUNT",
        help = "Number of async runtime worker threads (default: CPU cores)"
    )]
    pub worker_threads: Option<usize>,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [b'"' | b'\n' | b'\r'] => Err(format!(
            "'{}' cannot be used as a delimiter",
            value.escape_default()
        )),
        [byte] => Ok(*byte),
        _ => Err(format!("delimiter must be a single byte, got '{}'", value)),
    }
}

impl CliArgs {
    /// Build the input format configuration
    pub fn to_import_config(&self) -> ImportConfig {
        ImportConfig {
            has_header: !self.no_header,
            delimiter: self.delimiter,
        }
    }

    /// Build the runtime configuration, falling back to defaults
    pub fn to_runtime_config(&self) -> RuntimeConfig {
        match self.worker_threads {
            Some(threads) => RuntimeConfig::new(threads),
            None => RuntimeConfig::default(),
        }
    }
}
