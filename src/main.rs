//! Transaction Importer CLI
//!
//! Command-line interface for importing transactions from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv > imported.csv
//! cargo run -- --no-header --delimiter ';' transactions.csv > imported.csv
//! RUST_LOG=debug cargo run -- --worker-threads 2 transactions.csv
//! ```
//!
//! The program imports the input file into in-memory stores, writes the created
//! transactions as CSV to stdout and removes the input file. Progress and the
//! final balance are logged to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed CSV, invalid row, store failure)

use transaction_importer::{cli, runner};
use std::process;

fn main() {
    cli::init_tracing();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = runner::run(
        &args.input_file,
        args.to_import_config(),
        &args.to_runtime_config(),
        &mut output,
    ) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
