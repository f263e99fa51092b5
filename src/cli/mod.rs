//! CLI module
//!
//! Provides:
//! - Argument parsing (inspect, query, locate)
//! - Database path resolution (flag → env → app-data default)
//! - Mode dispatch and exit-code mapping

pub mod args;
pub mod db_path;
pub mod dispatch;

// Re-exports
pub use args::{parse_args, Args, Mode};
pub use db_path::resolve_db_path;
pub use dispatch::{run_cli_mode, run_mode, ExitCode};

use crate::{config, inspect, locator, store};
use std::path::PathBuf;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database not found at: {}", .0.display())]
    MissingDatabase(PathBuf),

    #[error("Database error: {0}")]
    Database(String),

    #[error("{0}")]
    Config(#[from] config::Error),

    #[error("Search error: {0}")]
    Locate(#[from] locator::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<store::Error> for Error {
    fn from(e: store::Error) -> Self {
        Error::Database(e.to_string())
    }
}

impl From<inspect::Error> for Error {
    fn from(e: inspect::Error) -> Self {
        match e {
            inspect::Error::MissingDatabase(path) => Error::MissingDatabase(path),
            other => Error::Database(other.to_string()),
        }
    }
}

impl Error {
    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Database(_) => EXIT_DB_ERROR,
            _ => EXIT_FAILURE,
        }
    }
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_DB_ERROR: i32 = 2;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
