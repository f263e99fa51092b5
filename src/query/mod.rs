//! Ad-hoc query execution
//!
//! A statement is read-like when, trimmed, it starts with `SELECT` in any
//! case; everything else is write-like and gets committed. Execution errors
//! become `QueryOutcome::Failed` and never escape `run_query`.

use crate::inspect::render::render_rows;
use crate::store::Database;
use crate::store::RowSet;
use std::io::{self, Write};
use tracing::{debug, warn};

/// Branch a statement takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Read,
    Write,
}

/// Result of running one statement
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Read statement with at least one row
    Rows(RowSet),
    /// Read statement with no rows
    NoResults,
    /// Write statement executed and committed
    Executed,
    /// Execution or commit failed
    Failed(String),
}

/// Join command-line words into one statement
pub fn join_query<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn classify(sql: &str) -> StatementKind {
    let trimmed = sql.trim_start();
    let is_select = trimmed
        .get(..6)
        .map(|head| head.eq_ignore_ascii_case("SELECT"))
        .unwrap_or(false);

    if is_select {
        StatementKind::Read
    } else {
        StatementKind::Write
    }
}

/// Execute `sql`, committing write-like statements
pub fn run_query<D: Database>(db: &mut D, sql: &str) -> QueryOutcome {
    let kind = classify(sql);
    debug!(?kind, "running query");

    let result = db.execute(sql).and_then(|set| match kind {
        StatementKind::Read => Ok(set),
        StatementKind::Write => db.commit().map(|()| set),
    });

    match (kind, result) {
        (_, Err(e)) => {
            warn!(error = %e, "query failed");
            QueryOutcome::Failed(e.to_string())
        }
        (StatementKind::Read, Ok(set)) if set.is_empty() => QueryOutcome::NoResults,
        (StatementKind::Read, Ok(set)) => QueryOutcome::Rows(set),
        (StatementKind::Write, Ok(_)) => QueryOutcome::Executed,
    }
}

/// Write the outcome of a query to `out`
pub fn render_outcome<W: Write>(outcome: &QueryOutcome, out: &mut W) -> io::Result<()> {
    match outcome {
        QueryOutcome::Rows(set) => render_rows(set, out),
        QueryOutcome::NoResults => writeln!(out, "No results found."),
        QueryOutcome::Executed => writeln!(out, "Query executed successfully."),
        QueryOutcome::Failed(message) => writeln!(out, "Error executing query: {}", message),
    }
}
