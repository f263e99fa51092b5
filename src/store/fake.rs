//! Scripted `Database` for unit tests

use super::{Database, Error, Result, RowSet};
use std::path::Path;

type Responder = Box<dyn FnMut(&str) -> Result<RowSet>>;

/// Answers `execute` from a closure and records every call in order
pub struct FakeDatabase {
    pub calls: Vec<String>,
    responder: Responder,
}

impl FakeDatabase {
    pub fn new<F>(responder: F) -> Self
    where
        F: FnMut(&str) -> Result<RowSet> + 'static,
    {
        FakeDatabase {
            calls: Vec::new(),
            responder: Box::new(responder),
        }
    }
}

impl Database for FakeDatabase {
    fn open(path: &Path) -> Result<Self> {
        Err(Error::Driver(format!(
            "fake database cannot open {}",
            path.display()
        )))
    }

    fn execute(&mut self, sql: &str) -> Result<RowSet> {
        self.calls.push(format!("execute: {}", sql));
        (self.responder)(sql)
    }

    fn commit(&mut self) -> Result<()> {
        self.calls.push("commit".to_string());
        Ok(())
    }

    fn close(self) -> Result<()> {
        Ok(())
    }
}
