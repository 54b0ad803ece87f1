// ============================================================
// CSV INPUT ADAPTER
// ============================================================
// Decode the upload as UTF-8 (lossy fallback) and materialize all
// records; the first non-empty record is the header

use csv::ReaderBuilder;

use crate::domain::clean::Table;
use crate::domain::error::{AppError, Result};

pub struct CsvTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (text, _, _) = encoding_rs::UTF_8.decode(bytes);

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut records: Vec<Vec<String>> = Vec::new();
        for result in reader.records() {
            let record = result
                .map_err(|e| AppError::ParseError(format!("Failed to parse CSV: {}", e)))?;
            records.push(record.iter().map(|v| v.to_string()).collect());
        }

        // Blank physical rows are skipped by the reader, so the first
        // record is the header
        if records.is_empty() {
            return Ok(Self {
                header: Vec::new(),
                rows: Vec::new(),
            });
        }
        let rows = records.split_off(1);
        let header = records.pop().unwrap_or_default();

        Ok(Self { header, rows })
    }
}

impl Table for CsvTable {
    fn header(&self) -> &[String] {
        &self.header
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|v| v.as_str())
            .unwrap_or("")
    }
}
