// ============================================================
// CSV OUTPUT WRITER
// ============================================================

use csv::WriterBuilder;

use crate::domain::clean::CleanedTable;
use crate::domain::error::{AppError, Result};

/// Write header then body rows as UTF-8 CSV, no byte-order mark.
/// Quoting is applied only where the format requires it.
pub fn write_csv(table: &CleanedTable) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    writer
        .write_record(&table.header)
        .map_err(|e| AppError::WriteError(format!("Failed to write CSV header: {}", e)))?;

    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|e| AppError::WriteError(format!("Failed to write CSV row: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::WriteError(format!("Failed to flush CSV output: {}", e)))
}
