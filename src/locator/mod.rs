//! Database discovery
//!
//! Finds InvoiceFlow databases under the per-user application-data
//! directories.
//!
//! - `roots.rs`: SearchRoots, resolved from `LOCALAPPDATA` / `APPDATA`
//! - `search.rs`: recursive glob for `<vendor_dir>/<db_file>`
//!
//! Nothing found is an empty list, not an error.

pub mod roots;
pub mod search;

pub use roots::SearchRoots;
pub use search::{locate, search_root};

/// Locator errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),
}

/// Result type for locator operations
pub type Result<T> = std::result::Result<T, Error>;
