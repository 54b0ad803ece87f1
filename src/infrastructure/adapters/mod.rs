// ============================================================
// INPUT ADAPTERS
// ============================================================
// Parse an uploaded byte stream into the engine's Table view.
// Format selection is by case-insensitive filename suffix.

mod csv;
mod xlsx;

pub use csv::CsvTable;
pub use xlsx::WorkbookTable;

use crate::domain::clean::Table;
use crate::domain::error::{AppError, Result};

/// Recognized input file families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Xlsx,
    Xls,
}

impl InputFormat {
    /// Detect by filename suffix, case-insensitive. None means the
    /// upload never reaches the engine.
    pub fn from_filename(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".csv") {
            Some(InputFormat::Csv)
        } else if lower.ends_with(".xlsx") {
            Some(InputFormat::Xlsx)
        } else if lower.ends_with(".xls") {
            Some(InputFormat::Xls)
        } else {
            None
        }
    }
}

/// Parse the upload into a table view, dispatching on the detected
/// format
pub fn open_table(format: InputFormat, bytes: &[u8]) -> Result<Box<dyn Table>> {
    match format {
        InputFormat::Csv => Ok(Box::new(CsvTable::from_bytes(bytes)?)),
        InputFormat::Xlsx | InputFormat::Xls => {
            Ok(Box::new(WorkbookTable::from_bytes(format, bytes)?))
        }
    }
}

/// Detect the format or reject the upload
pub fn detect_format(filename: &str) -> Result<InputFormat> {
    InputFormat::from_filename(filename)
        .ok_or_else(|| AppError::InvalidRequest("Unsupported file type".to_string()))
}
