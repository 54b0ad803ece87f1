// ============================================================
// OUTPUT WRITERS
// ============================================================
// Serialize the engine's output table to response bytes

mod csv;
mod xlsx;

pub use csv::write_csv;
pub use xlsx::write_xlsx;

use crate::domain::clean::{CleanedTable, OutputFormat};
use crate::domain::error::Result;

/// Serialize with the writer matching the configured output format
pub fn write_table(format: OutputFormat, table: &CleanedTable) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Csv => write_csv(table),
        OutputFormat::Xlsx => write_xlsx(table),
    }
}
