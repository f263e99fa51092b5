//! SQLite-backed `Database`
//!
//! Opens the file read-write but never creates it. Data-modification
//! statements begin a transaction when none is open, so a write only becomes
//! durable once `commit()` runs; a connection closed with a transaction still
//! open is rolled back by SQLite.
//!
//! `execute` accepts exactly one statement. SQL that holds a second statement
//! is rejected before anything runs.

use super::{Database, Error, Result, RowSet, Value};
use rusqlite::types::ValueRef;
use rusqlite::{Batch, Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Statement keywords that open an implicit transaction
const TRANSACTIONAL_KEYWORDS: [&str; 4] = ["INSERT", "UPDATE", "DELETE", "REPLACE"];

/// Driver message for SQL holding more than one statement
pub const MULTIPLE_STATEMENTS: &str = "You can only execute one statement at a time.";

/// SQLite database handle
pub struct SqliteDatabase {
    conn: Connection,
    path: PathBuf,
}

impl SqliteDatabase {
    /// Whether a transaction is currently open
    pub fn in_transaction(&self) -> bool {
        !self.conn.is_autocommit()
    }
}

impl Database for SqliteDatabase {
    fn open(path: &Path) -> Result<Self> {
        // The bundled library parses `file:` names as URIs even without the URI
        // flag, and `?mode=rwc` would bring back create
        if path.to_string_lossy().starts_with("file:") {
            return Err(Error::Driver(format!(
                "unable to open database file: URI filenames are not accepted: {}",
                path.display()
            )));
        }
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        debug!(path = %path.display(), "opened database");
        Ok(SqliteDatabase {
            conn,
            path: path.to_path_buf(),
        })
    }

    fn execute(&mut self, sql: &str) -> Result<RowSet> {
        if sql.trim().is_empty() {
            return Ok(RowSet::default());
        }

        let mut batch = Batch::new(&self.conn, sql);
        let mut stmt = match batch.next()? {
            Some(stmt) => stmt,
            None => return Ok(RowSet::default()),
        };
        // Any failure to prepare the tail still means a second statement follows
        if !matches!(batch.next(), Ok(None)) {
            return Err(Error::Driver(MULTIPLE_STATEMENTS.to_string()));
        }

        if opens_transaction(sql) && self.conn.is_autocommit() {
            debug!("beginning implicit transaction");
            self.conn.execute_batch("BEGIN")?;
        }

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = stmt.column_count();

        let mut rows = stmt.query([])?;
        let mut collected = Vec::new();
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(width);
            for idx in 0..width {
                values.push(to_value(row.get_ref(idx)?));
            }
            collected.push(values);
        }

        Ok(RowSet {
            columns,
            rows: collected,
        })
    }

    fn commit(&mut self) -> Result<()> {
        if self.in_transaction() {
            self.conn.execute_batch("COMMIT")?;
            debug!("committed transaction");
        }
        Ok(())
    }

    fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| Error::Sqlite(e))?;
        debug!(path = %path.display(), "closed database");
        Ok(())
    }
}

/// Whether `sql` is a data-modification statement
fn opens_transaction(sql: &str) -> bool {
    let keyword = sql
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_uppercase();
    TRANSACTIONAL_KEYWORDS.contains(&keyword.as_str())
}

fn to_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}
