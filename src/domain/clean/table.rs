// ============================================================
// TABLE VIEW
// ============================================================
// Uniform read abstraction the engine consumes, implemented by
// each input adapter

/// A parsed input table: header plus indexed body rows.
///
/// Body rows are addressed 0..row_count(). Reading outside a row's
/// width (or outside the row range) yields the empty string, so the
/// engine never has to care about ragged input.
pub trait Table {
    fn header(&self) -> &[String];

    fn row_count(&self) -> usize;

    /// Raw cell value at (body row, source column); "" when out of range
    fn cell(&self, row: usize, col: usize) -> &str;
}

/// Engine output: projected header plus uniform-width rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CleanedTable {
    pub fn empty() -> Self {
        Self {
            header: Vec::new(),
            rows: Vec::new(),
        }
    }
}

impl Table for CleanedTable {
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
