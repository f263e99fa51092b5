//! CLI argument parsing
//!
//! ```text
//! invoiceflow-inspect [options] [SQL]...
//!
//!   (no SQL)         → Inspect mode
//!   SQL...           → Query mode, words joined with single spaces
//!   --locate         → Locate mode
//! ```

use crate::query::join_query;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "invoiceflow-inspect",
    version,
    about = "Inspect and query the InvoiceFlow desktop database",
    long_about = None
)]
pub struct Args {
    /// Database file (default: <APPDATA>/com.invoiceflow.app/invoiceflow.db)
    #[arg(long, value_name = "PATH", env = "INVOICEFLOW_DB")]
    pub db: Option<PathBuf>,

    /// TOML settings file
    #[arg(long, value_name = "FILE", env = "INVOICEFLOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Search the app-data directories for databases and list their business profiles
    #[arg(long, conflicts_with = "query")]
    pub locate: bool,

    /// Log more (repeat for debug / trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// SQL statement to execute instead of dumping tables
    #[arg(
        value_name = "SQL",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub query: Vec<String>,
}

/// CLI modes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Dump every table's first rows
    Inspect,

    /// Execute one statement
    Query { sql: String },

    /// Discover databases under the app-data directories
    Locate,
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.locate {
            Mode::Locate
        } else if self.query.is_empty() {
            Mode::Inspect
        } else {
            Mode::Query {
                sql: join_query(&self.query),
            }
        }
    }
}

/// Parse CLI arguments, program name first
///
/// Help and version requests come back as `clap::Error` too; callers use
/// `Error::exit()` to print them with the right status.
pub fn parse_args<I, T>(args: I) -> std::result::Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args)
}
