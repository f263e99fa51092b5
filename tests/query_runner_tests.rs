//! Query runner and inspector tests through the public `Database` trait
//!
//! Covers:
//! - Statement classification
//! - Commit ordering for write statements
//! - Local recovery from driver errors
//! - Row limits against a real SQLite file

use anyhow::Result;
use invoiceflow_inspect::store::{self, Database, RowSet, SqliteDatabase, Value};
use invoiceflow_inspect::{
    classify, inspect, run_query, QueryOutcome, Settings, StatementKind, TableOutcome,
};
use rusqlite::Connection;
use std::path::Path;
use tempfile::tempdir;

/// Records the order of every call it receives
#[derive(Default)]
struct RecordingDatabase {
    events: Vec<String>,
    fail_execute: bool,
}

impl Database for RecordingDatabase {
    fn open(_path: &Path) -> store::Result<Self> {
        Ok(RecordingDatabase::default())
    }

    fn execute(&mut self, sql: &str) -> store::Result<RowSet> {
        self.events.push(format!("execute {}", sql));
        if self.fail_execute {
            return Err(store::Error::Driver("near \"UPDTE\": syntax error".to_string()));
        }
        Ok(RowSet::default())
    }

    fn commit(&mut self) -> store::Result<()> {
        self.events.push("commit".to_string());
        Ok(())
    }

    fn close(self) -> store::Result<()> {
        Ok(())
    }
}

#[test]
fn test_classification_is_prefix_based() {
    for sql in ["SELECT 1", "select 1", "  \n SeLeCt * FROM invoices"] {
        assert_eq!(classify(sql), StatementKind::Read, "{}", sql);
    }
    for sql in [
        "UPDATE x SET y=1",
        "DELETE FROM clients",
        "CREATE TABLE t (a)",
        "PRAGMA table_info(invoices)",
        "EXPLAIN SELECT 1",
    ] {
        assert_eq!(classify(sql), StatementKind::Write, "{}", sql);
    }
}

#[test]
fn test_write_commits_then_reports_success() -> Result<()> {
    let mut db = RecordingDatabase::open(Path::new("unused.db"))?;

    let outcome = run_query(&mut db, "UPDATE x SET y=1");

    assert_eq!(outcome, QueryOutcome::Executed);
    assert_eq!(db.events, vec!["execute UPDATE x SET y=1", "commit"]);
    Ok(())
}

#[test]
fn test_read_never_commits() -> Result<()> {
    let mut db = RecordingDatabase::open(Path::new("unused.db"))?;

    let outcome = run_query(&mut db, "SELECT * FROM clients");

    assert_eq!(outcome, QueryOutcome::NoResults);
    assert_eq!(db.events, vec!["execute SELECT * FROM clients"]);
    Ok(())
}

#[test]
fn test_execution_error_is_contained() -> Result<()> {
    let mut db = RecordingDatabase {
        fail_execute: true,
        ..RecordingDatabase::default()
    };

    let outcome = run_query(&mut db, "UPDTE x SET y=1");

    assert_eq!(
        outcome,
        QueryOutcome::Failed("near \"UPDTE\": syntax error".to_string())
    );
    assert_eq!(db.events.len(), 1);
    Ok(())
}

#[test]
fn test_inspect_row_counts_against_sqlite() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("invoiceflow.db");
    {
        let conn = Connection::open(&path)?;
        conn.execute_batch(
            "CREATE TABLE three (n INTEGER);
             INSERT INTO three VALUES (1), (2), (3);
             CREATE TABLE five (n INTEGER);
             INSERT INTO five VALUES (1), (2), (3), (4), (5);
             CREATE TABLE six (n INTEGER);
             INSERT INTO six VALUES (1), (2), (3), (4), (5), (6);
             CREATE TABLE none (n INTEGER);",
        )?;
    }

    let mut db = SqliteDatabase::open(&path)?;
    let inspection = inspect(&mut db, &path, &Settings::default())?;
    db.close()?;

    let counts: Vec<(String, Option<usize>)> = inspection
        .sections
        .iter()
        .map(|s| {
            let count = match &s.outcome {
                TableOutcome::Rows(set) => Some(set.len()),
                TableOutcome::Empty => Some(0),
                TableOutcome::Failed(_) => None,
            };
            (s.table.clone(), count)
        })
        .collect();

    assert_eq!(
        counts,
        vec![
            ("three".to_string(), Some(3)),
            ("five".to_string(), Some(5)),
            ("six".to_string(), Some(5)),
            ("none".to_string(), Some(0)),
        ]
    );
    Ok(())
}

#[test]
fn test_select_returns_typed_values() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("invoiceflow.db");
    Connection::open(&path)?.execute_batch(
        "CREATE TABLE line_items (id INTEGER, description TEXT, quantity REAL, note TEXT);
         INSERT INTO line_items VALUES (1, 'Design work', 2.5, NULL);",
    )?;

    let mut db = SqliteDatabase::open(&path)?;
    let outcome = run_query(&mut db, "SELECT * FROM line_items");
    db.close()?;

    match outcome {
        QueryOutcome::Rows(set) => {
            assert_eq!(set.columns, vec!["id", "description", "quantity", "note"]);
            assert_eq!(
                set.rows,
                vec![vec![
                    Value::Integer(1),
                    Value::Text("Design work".to_string()),
                    Value::Real(2.5),
                    Value::Null,
                ]]
            );
        }
        other => panic!("expected rows, got {:?}", other),
    }
    Ok(())
}
