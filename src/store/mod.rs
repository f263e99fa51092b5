//! Embedded database access
//!
//! ## Architecture
//!
//! - `Database`: the four operations the tool needs from a client library
//! - `sqlite.rs`: `SqliteDatabase`, the rusqlite-backed implementation
//! - `RowSet` / `Value`: driver-independent result rows
//!
//! Everything above this module talks to `Database`, never to rusqlite directly.

pub mod sqlite;

#[cfg(test)]
pub(crate) mod fake;

pub use sqlite::SqliteDatabase;

use std::fmt;
use std::path::Path;

/// Store errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("{0}")]
    Driver(String),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Connection to an embedded relational store
pub trait Database: Sized {
    /// Open the database file at `path`. Must not create a missing file.
    fn open(path: &Path) -> Result<Self>;

    /// Execute one statement and collect every row it produces.
    ///
    /// Statements that produce no rows return an empty `RowSet`, possibly with
    /// no columns either.
    fn execute(&mut self, sql: &str) -> Result<RowSet>;

    /// Commit the open transaction, if any.
    fn commit(&mut self) -> Result<()>;

    /// Release the connection.
    fn close(self) -> Result<()>;
}

/// Single column value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{:?}", r),
            Value::Text(s) => write_quoted(f, s),
            Value::Blob(bytes) => {
                f.write_str("x'")?;
                for b in bytes {
                    write!(f, "{:02x}", b)?;
                }
                f.write_str("'")
            }
        }
    }
}

/// Quote text the way a raw tuple dump shows it: single quotes, or double
/// quotes when the text holds a `'` but no `"`
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    write!(f, "{}", quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{}", c)?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "{}", quote)
}

/// Rows returned by a statement, with their column names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl RowSet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `Columns: a, b, c`
    pub fn header_line(&self) -> String {
        format!("Columns: {}", self.columns.join(", "))
    }
}

/// Render one row as a raw tuple: `(1, 'Acme', NULL)`
pub fn format_row(row: &[Value]) -> String {
    let fields: Vec<String> = row.iter().map(|v| v.to_string()).collect();
    format!("({})", fields.join(", "))
}

/// Quote an identifier for interpolation into SQL
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
