//! invoiceflow-inspect CLI
//!
//! - no arguments → dump the first rows of every table
//! - `SQL...` → execute one statement
//! - `--locate` → find databases under the app-data directories

use invoiceflow_inspect::cli::{parse_args, run_cli_mode};
use invoiceflow_inspect::logging::init_tracing;

fn main() {
    // Help, version and usage errors exit here with clap's status
    let args = parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());

    init_tracing(args.verbose);

    let exit_code = run_cli_mode(args);
    std::process::exit(exit_code);
}
