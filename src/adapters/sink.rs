//! Table Sinks
//!
//! `CsvSink` persists the unified table to disk; `ConsoleSink` echoes it to
//! a stream when the run is invoked with `--terminal`. Both render the same
//! shape: a `unify_name` column followed by one `<exchange>_name` column per
//! configured exchange, one row per unified key in sorted order.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::domain::UnifiedTable;
use crate::ports::sink::{SinkError, TableSink};

/// Writes the unified table as CSV, creating parent directories as needed.
/// Absent cells become empty strings.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSink for CsvSink {
    fn write(&mut self, table: &UnifiedTable) -> Result<(), SinkError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)?;

        let mut header = vec!["unify_name".to_string()];
        header.extend(table.exchanges().iter().map(|e| format!("{}_name", e)));
        writer.write_record(&header)?;

        for (key, slots) in table.rows() {
            let mut row: Vec<&str> = Vec::with_capacity(1 + slots.len());
            row.push(key);
            for slot in slots {
                row.push(slot.as_deref().unwrap_or(""));
            }
            writer.write_record(&row)?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Echoes the unified table space-separated to any writer (stdout in the
/// binary). Absent cells are rendered as `-`.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TableSink for ConsoleSink<W> {
    fn write(&mut self, table: &UnifiedTable) -> Result<(), SinkError> {
        write!(self.out, "unify_name")?;
        for exchange in table.exchanges() {
            write!(self.out, " {}_name", exchange)?;
        }
        writeln!(self.out)?;

        for (key, slots) in table.rows() {
            write!(self.out, "{}", key)?;
            for slot in slots {
                write!(self.out, " {}", slot.as_deref().unwrap_or("-"))?;
            }
            writeln!(self.out)?;
        }

        self.out.flush()?;
        Ok(())
    }
}
