//! invoiceflow-inspect: look inside the InvoiceFlow desktop database
//!
//! Dumps table samples, runs ad-hoc SQL, and finds database files under the
//! per-user application-data directories.

pub mod cli;
pub mod config;
pub mod inspect;
pub mod locator;
pub mod logging;
pub mod query;
pub mod store;

// Re-export the main types
pub use config::Settings;
pub use inspect::{inspect, Inspection, TableOutcome};
pub use locator::{locate, SearchRoots};
pub use query::{classify, run_query, QueryOutcome, StatementKind};
pub use store::{Database, RowSet, SqliteDatabase, Value};
