//! Database path resolution
//!
//! Priority:
//! 1. `--db <path>` flag
//! 2. `$INVOICEFLOW_DB` (handled by clap as the flag's env fallback)
//! 3. `<roaming app-data>/<vendor_dir>/<db_file>`
//!
//! Existence is checked later, by the mode that opens the file.

use crate::config::Settings;
use crate::locator::SearchRoots;
use std::path::PathBuf;
use tracing::debug;

pub fn resolve_db_path(explicit: Option<PathBuf>, roots: &SearchRoots, settings: &Settings) -> PathBuf {
    let path = explicit.unwrap_or_else(|| roots.default_database(settings));
    debug!(path = %path.display(), "resolved database path");
    path
}
