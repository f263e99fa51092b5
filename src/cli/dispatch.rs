//! CLI mode dispatch
//!
//! Dispatches to the mode handlers:
//! - inspect: dump table samples
//! - query: execute one statement
//! - locate: discover databases and list their business profiles

use crate::cli::db_path::resolve_db_path;
use crate::cli::{Args, Error, Mode, Result, EXIT_SUCCESS};
use crate::config::Settings;
use crate::inspect::{ensure_exists, inspect, render_inspection};
use crate::locator::{locate, SearchRoots};
use crate::query::{render_outcome, run_query};
use crate::store::{Database, SqliteDatabase};
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Run CLI mode against SQLite and return the exit code
///
/// Called from main() after argument parsing and logging setup.
pub fn run_cli_mode(args: Args) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = run_mode::<SqliteDatabase, _>(&args, &mut out);
    let flushed = out.flush();
    drop(out);

    match result.and(flushed.map_err(Error::Io)) {
        Ok(()) => EXIT_SUCCESS,
        Err(Error::MissingDatabase(path)) => {
            // Reported on stdout next to the rest of the report
            println!("Database not found at: {}", path.display());
            Error::MissingDatabase(path).exit_code()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Run the mode selected by `args`, writing the report to `out`
pub fn run_mode<D: Database, W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let settings = Settings::load(args.config.as_deref())?;
    let roots = SearchRoots::from_env();

    match args.mode() {
        Mode::Locate => run_locate_mode::<D, W>(&roots, &settings, out),
        Mode::Inspect => {
            let path = resolve_db_path(args.db.clone(), &roots, &settings);
            run_inspect_mode::<D, W>(&path, &settings, out)
        }
        Mode::Query { sql } => {
            let path = resolve_db_path(args.db.clone(), &roots, &settings);
            run_query_mode::<D, W>(&path, &sql, out)
        }
    }
}

/// Open `path`, refusing to touch a file that does not exist
fn open_existing<D: Database>(path: &Path) -> Result<D> {
    ensure_exists(path)?;
    let db = D::open(path)
        .map_err(|e| Error::Database(format!("Cannot open {}: {}", path.display(), e)))?;
    info!(path = %path.display(), "connected");
    Ok(db)
}

/// Run inspect mode: dump the first rows of every table
fn run_inspect_mode<D: Database, W: Write>(path: &Path, settings: &Settings, out: &mut W) -> Result<()> {
    let mut db = open_existing::<D>(path)?;

    let inspection = inspect(&mut db, path, settings)?;
    render_inspection(&inspection, out)?;

    db.close()?;
    Ok(())
}

/// Run query mode: execute one statement, errors included in the report
fn run_query_mode<D: Database, W: Write>(path: &Path, sql: &str, out: &mut W) -> Result<()> {
    let mut db = open_existing::<D>(path)?;

    writeln!(out, "Execute: {}", sql)?;
    let outcome = run_query(&mut db, sql);
    render_outcome(&outcome, out)?;

    db.close()?;
    Ok(())
}

/// Run locate mode: list discovered databases and their business profiles
fn run_locate_mode<D: Database, W: Write>(
    roots: &SearchRoots,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Search roots:")?;
    writeln!(out, "  local:   {}", roots.local.display())?;
    writeln!(out, "  roaming: {}", roots.roaming.display())?;

    let paths = locate(roots, settings)?;
    info!(count = paths.len(), "search complete");

    if paths.is_empty() {
        writeln!(out, "No databases found.")?;
        return Ok(());
    }

    writeln!(out, "Found {} database(s):", paths.len())?;
    for path in &paths {
        writeln!(out, "- {}", path.display())?;
    }

    for path in &paths {
        writeln!(out)?;
        writeln!(out, "--- Profiles in '{}' ---", path.display())?;

        let mut db = match D::open(path) {
            Ok(db) => db,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot open database");
                writeln!(out, "Error opening database: {}", e)?;
                continue;
            }
        };

        let outcome = run_query(&mut db, &settings.profile_query);
        render_outcome(&outcome, out)?;

        if let Err(e) = db.close() {
            warn!(path = %path.display(), error = %e, "failed to close database");
        }
    }

    Ok(())
}
