//! Settings
//!
//! Defaults match the InvoiceFlow desktop app's layout. An optional TOML file
//! (`--config` / `$INVOICEFLOW_CONFIG`) overrides any subset of keys.
//!
//! ```toml
//! vendor_dir = "com.invoiceflow.app"
//! db_file = "invoiceflow.db"
//! sample_rows = 5
//! skip_tables = ["sqlite_sequence"]
//! profile_query = "SELECT id, name, updated_at FROM business_profiles"
//! ```

use serde::Deserialize;
use std::path::Path;

/// Application identifier directory the desktop app stores its data under
pub const DEFAULT_VENDOR_DIR: &str = "com.invoiceflow.app";

/// Database file name inside the vendor directory
pub const DEFAULT_DB_FILE: &str = "invoiceflow.db";

/// Rows dumped per table in inspection mode
pub const DEFAULT_SAMPLE_ROWS: usize = 5;

/// SQLite's AUTOINCREMENT bookkeeping table
pub const SQLITE_SEQUENCE: &str = "sqlite_sequence";

/// Query run against every discovered database in locate mode
pub const DEFAULT_PROFILE_QUERY: &str = "SELECT id, name, updated_at FROM business_profiles";

/// Config errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config {path}: {reason}")]
    Invalid { path: String, reason: String },
}

/// Tool settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub vendor_dir: String,
    pub db_file: String,
    pub sample_rows: usize,
    pub skip_tables: Vec<String>,
    pub profile_query: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            vendor_dir: DEFAULT_VENDOR_DIR.to_string(),
            db_file: DEFAULT_DB_FILE.to_string(),
            sample_rows: DEFAULT_SAMPLE_ROWS,
            skip_tables: vec![SQLITE_SEQUENCE.to_string()],
            profile_query: DEFAULT_PROFILE_QUERY.to_string(),
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Settings, Error> {
        match path {
            Some(path) => Settings::from_file(path),
            None => Ok(Settings::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Settings, Error> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.display().to_string(),
            source,
        })?;
        let settings: Settings = toml::from_str(&content).map_err(|source| Error::Parse {
            path: path.display().to_string(),
            source,
        })?;
        settings.validate().map_err(|reason| Error::Invalid {
            path: path.display().to_string(),
            reason,
        })?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), String> {
        // LIMIT 0 would report every populated table as empty
        if self.sample_rows == 0 {
            return Err("sample_rows must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Whether `table` gets no data section in inspection mode
    pub fn skips(&self, table: &str) -> bool {
        self.skip_tables.iter().any(|t| t == table)
    }
}
