//! Plain-text inspection report

use super::{Inspection, TableOutcome};
use crate::store::{format_row, RowSet};
use std::io::{self, Write};

/// Write the inspection report to `out`
pub fn render_inspection<W: Write>(inspection: &Inspection, out: &mut W) -> io::Result<()> {
    writeln!(out, "Connected to database: {}", inspection.database.display())?;

    writeln!(out)?;
    writeln!(out, "--- Tables ---")?;
    for table in &inspection.tables {
        writeln!(out, "- {}", table)?;
    }

    for section in &inspection.sections {
        writeln!(out)?;
        writeln!(out, "--- Data in '{}' ---", section.table)?;
        match &section.outcome {
            TableOutcome::Empty => writeln!(out, "(Table is empty)")?,
            TableOutcome::Rows(set) => render_rows(set, out)?,
            TableOutcome::Failed(message) => {
                writeln!(out, "Error reading table {}: {}", section.table, message)?
            }
        }
    }

    Ok(())
}

/// Column header line followed by one tuple per row
pub(crate) fn render_rows<W: Write>(set: &RowSet, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", set.header_line())?;
    for row in &set.rows {
        writeln!(out, "{}", format_row(row))?;
    }
    Ok(())
}
