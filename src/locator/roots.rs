//! Search root resolution
//!
//! Resolution per root:
//! 1. Environment variable (`LOCALAPPDATA` / `APPDATA`), if set and non-empty
//! 2. `<home>/AppData/Local` / `<home>/AppData/Roaming`

use crate::config::Settings;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Per-machine application data
pub const LOCAL_APPDATA_VAR: &str = "LOCALAPPDATA";

/// Per-user roaming application data
pub const ROAMING_APPDATA_VAR: &str = "APPDATA";

const LOCAL_FALLBACK: [&str; 2] = ["AppData", "Local"];
const ROAMING_FALLBACK: [&str; 2] = ["AppData", "Roaming"];

/// The two directories searched for databases
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRoots {
    pub local: PathBuf,
    pub roaming: PathBuf,
}

impl SearchRoots {
    /// Resolve from the process environment and the user's home directory
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var_os(key), dirs::home_dir())
    }

    /// Resolve with an explicit environment lookup
    ///
    /// With no home directory the fallbacks stay relative (`AppData/Local`).
    pub fn resolve<F>(lookup: F, home: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let home = home.unwrap_or_default();
        let pick = |var: &str, fallback: &[&str]| -> PathBuf {
            lookup(var)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| fallback.iter().fold(home.clone(), |p, seg| p.join(seg)))
        };

        SearchRoots {
            local: pick(LOCAL_APPDATA_VAR, &LOCAL_FALLBACK),
            roaming: pick(ROAMING_APPDATA_VAR, &ROAMING_FALLBACK),
        }
    }

    /// Local root first, then roaming
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [self.local.as_path(), self.roaming.as_path()].into_iter()
    }

    /// Where the desktop app keeps its database: `<roaming>/<vendor_dir>/<db_file>`
    pub fn default_database(&self, settings: &Settings) -> PathBuf {
        self.roaming
            .join(&settings.vendor_dir)
            .join(&settings.db_file)
    }
}
