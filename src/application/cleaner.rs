// ============================================================
// CLEANING ENGINE
// ============================================================
// Orchestrate column selection, empty-column pruning, row
// iteration, dedup, per-cell transformation, and per-row
// validation disposition

use std::collections::{HashMap, HashSet};

use crate::domain::clean::{value, CleanConfig, CleanedTable, Table};

/// Disposition of a single body row after cell processing
enum RowDisposition {
    Keep(Vec<String>),
    Drop,
}

/// Single-pass cleaning pipeline over a [`Table`] view.
///
/// Stateless across requests; one engine is built per request from
/// its configuration record.
pub struct CleaningEngine<'a> {
    config: &'a CleanConfig,
}

impl<'a> CleaningEngine<'a> {
    pub fn new(config: &'a CleanConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline and produce the output table
    pub fn clean(&self, table: &dyn Table) -> CleanedTable {
        let header_index = Self::build_header_index(table.header());

        let mut selection = self.resolve_selection(&header_index);
        if self.config.drop_empty_cols {
            selection = Self::prune_empty_columns(table, selection);
        }

        let dedupe = self.resolve_dedupe(&header_index);

        let mut out_rows = Vec::new();
        let mut seen_keys: HashSet<String> = HashSet::new();

        for row in 0..table.row_count() {
            if self.config.drop_empty_rows && Self::is_row_empty(table, row, &selection) {
                continue;
            }

            if !dedupe.is_empty() {
                let key = Self::build_key(table, row, &dedupe);
                if !seen_keys.insert(key) {
                    continue;
                }
            }

            match self.clean_row(table, row, &selection) {
                RowDisposition::Keep(cells) => out_rows.push(cells),
                RowDisposition::Drop => {}
            }
        }

        let out_header = selection
            .iter()
            .map(|&idx| {
                table
                    .header()
                    .get(idx)
                    .cloned()
                    .unwrap_or_default()
            })
            .collect();

        CleanedTable {
            header: out_header,
            rows: out_rows,
        }
    }

    /// Map each header name to its first-occurrence index; later
    /// duplicates are shadowed
    fn build_header_index(header: &[String]) -> HashMap<String, usize> {
        let mut index = HashMap::new();
        for (i, name) in header.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }
        index
    }

    /// Source indices for the requested columns, in request order;
    /// unknown names are silently skipped
    fn resolve_selection(&self, header_index: &HashMap<String, usize>) -> Vec<usize> {
        self.config
            .columns
            .iter()
            .filter_map(|name| header_index.get(name).copied())
            .collect()
    }

    /// Dedup key indices resolved against the original header, not the
    /// selection vector
    fn resolve_dedupe(&self, header_index: &HashMap<String, usize>) -> Vec<usize> {
        self.config
            .dedupe_keys
            .iter()
            .filter_map(|name| header_index.get(name).copied())
            .collect()
    }

    /// Keep only selected indices with at least one non-blank raw cell.
    /// Emptiness is judged on raw values: a column of whitespace-only
    /// cells counts as empty.
    fn prune_empty_columns(table: &dyn Table, selection: Vec<usize>) -> Vec<usize> {
        selection
            .into_iter()
            .filter(|&idx| {
                (0..table.row_count()).any(|row| !table.cell(row, idx).trim().is_empty())
            })
            .collect()
    }

    fn is_row_empty(table: &dyn Table, row: usize, selection: &[usize]) -> bool {
        selection
            .iter()
            .all(|&idx| table.cell(row, idx).trim().is_empty())
    }

    /// Pipe-joined raw cells at the dedup indices
    fn build_key(table: &dyn Table, row: usize, dedupe: &[usize]) -> String {
        dedupe
            .iter()
            .map(|&idx| table.cell(row, idx))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Transform every selected cell; a failed validation with its
    /// removal flag set drops the whole row
    fn clean_row(&self, table: &dyn Table, row: usize, selection: &[usize]) -> RowDisposition {
        let mut out = Vec::with_capacity(selection.len());

        for &idx in selection {
            let mut cell = value::transform(table.cell(row, idx), self.config);
            if self.config.normalize_types {
                cell = value::normalize_type(&cell);
            }

            if self.config.validate_email
                && !value::is_valid_email(&cell)
                && self.config.remove_invalid_emails
            {
                return RowDisposition::Drop;
            }
            if self.config.validate_url
                && !value::is_valid_url(&cell)
                && self.config.remove_invalid_urls
            {
                return RowDisposition::Drop;
            }

            out.push(cell);
        }

        RowDisposition::Keep(out)
    }
}
