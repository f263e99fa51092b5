//! Database inspection
//!
//! Lists the catalog's tables and samples the first rows of each one.
//!
//! - `inspect()`: gather an `Inspection` through a `Database`
//! - `render_inspection()`: print it
//!
//! A table that cannot be read is recorded and skipped; only a catalog read
//! failure aborts the inspection.

pub(crate) mod render;

pub use render::render_inspection;

use crate::config::Settings;
use crate::store::{self, quote_identifier, Database, RowSet};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Catalog query for user tables, in catalog order
pub const LIST_TABLES_SQL: &str = "SELECT name FROM sqlite_master WHERE type='table'";

/// Inspection errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database not found at: {0}")]
    MissingDatabase(PathBuf),

    #[error("Cannot read table catalog: {0}")]
    Catalog(#[from] store::Error),
}

/// Result type for inspection
pub type Result<T> = std::result::Result<T, Error>;

/// What sampling one table produced
#[derive(Debug, Clone, PartialEq)]
pub enum TableOutcome {
    Rows(RowSet),
    Empty,
    Failed(String),
}

/// Data section for one table
#[derive(Debug, Clone, PartialEq)]
pub struct TableSection {
    pub table: String,
    pub outcome: TableOutcome,
}

/// Full inspection of one database
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub database: PathBuf,
    /// Every table in the catalog, skipped ones included
    pub tables: Vec<String>,
    /// Data sections, skipped tables excluded
    pub sections: Vec<TableSection>,
}

/// Fail with `MissingDatabase` unless `path` exists
pub fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::MissingDatabase(path.to_path_buf()));
    }
    Ok(())
}

/// Read table names from the catalog
pub fn list_tables<D: Database>(db: &mut D) -> Result<Vec<String>> {
    let set = db.execute(LIST_TABLES_SQL)?;
    Ok(set
        .rows
        .into_iter()
        .filter_map(|row| row.into_iter().next())
        .map(|value| match value {
            store::Value::Text(name) => name,
            other => other.to_string(),
        })
        .collect())
}

/// Sample up to `limit` rows of `table` in storage order
pub fn sample_table<D: Database>(db: &mut D, table: &str, limit: usize) -> TableOutcome {
    let sql = format!("SELECT * FROM {} LIMIT {}", quote_identifier(table), limit);
    match db.execute(&sql) {
        Ok(set) if set.is_empty() => TableOutcome::Empty,
        Ok(set) => TableOutcome::Rows(set),
        Err(e) => {
            warn!(table, error = %e, "failed to read table");
            TableOutcome::Failed(e.to_string())
        }
    }
}

/// Inspect the open database at `path`
pub fn inspect<D: Database>(db: &mut D, path: &Path, settings: &Settings) -> Result<Inspection> {
    let tables = list_tables(db)?;
    debug!(count = tables.len(), "read table catalog");

    let mut sections = Vec::new();
    for table in &tables {
        if settings.skips(table) {
            debug!(table = table.as_str(), "skipping table");
            continue;
        }
        sections.push(TableSection {
            table: table.clone(),
            outcome: sample_table(db, table, settings.sample_rows),
        });
    }

    Ok(Inspection {
        database: path.to_path_buf(),
        tables,
        sections,
    })
}
