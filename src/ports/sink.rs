//! Output Sink Port
//!
//! Anything that accepts the final unified table for persistence or display.

use thiserror::Error;

use crate::domain::UnifiedTable;

/// Sink errors. Failing to persist the final table is fatal for the run;
/// the table is its sole artifact.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Consumer of one completed unified table.
pub trait TableSink {
    fn write(&mut self, table: &UnifiedTable) -> Result<(), SinkError>;
}
