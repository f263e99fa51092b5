//! Recursive database search
//!
//! Uses the glob crate: `<root>/**/<vendor_dir>/<db_file>`, where `**` also
//! matches zero directories. Literal parts are escaped before matching.

use super::{Result, SearchRoots};
use crate::config::Settings;
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find every `<vendor_dir>/<db_file>` below `root`
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Matching files, sorted (empty if `root` is missing)
/// * `Err(Error)` - The assembled pattern is invalid
pub fn search_root(root: &Path, vendor_dir: &str, db_file: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/**/{}/{}",
        Pattern::escape(&root.to_string_lossy()),
        Pattern::escape(vendor_dir),
        Pattern::escape(db_file)
    );
    debug!(%pattern, "searching");

    let mut found: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|entry| match entry {
            Ok(path) if path.is_file() => Some(path),
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .collect();

    found.sort();
    Ok(found)
}

/// Search every root, local first
///
/// A database reachable from both roots is reported twice.
pub fn locate(roots: &SearchRoots, settings: &Settings) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for root in roots.iter() {
        let found = search_root(root, &settings.vendor_dir, &settings.db_file)?;
        debug!(root = %root.display(), count = found.len(), "search finished");
        paths.extend(found);
    }
    Ok(paths)
}
