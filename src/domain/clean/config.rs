// ============================================================
// CLEANING CONFIGURATION
// ============================================================
// Per-request configuration record driving the cleaning pipeline

use serde::{Deserialize, Serialize};

/// Case folding applied to every emitted cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextCase {
    None,
    Lower,
    Upper,
    Title,
}

impl TextCase {
    /// Permissive parse: anything outside the enumerated domain is `None`
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "lower" => TextCase::Lower,
            "upper" => TextCase::Upper,
            "title" => TextCase::Title,
            _ => TextCase::None,
        }
    }
}

/// Date reformatting applied to every emitted cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    None,
    Iso,
}

impl DateFormat {
    pub fn parse_or_default(value: &str) -> Self {
        if value.eq_ignore_ascii_case("iso") {
            DateFormat::Iso
        } else {
            DateFormat::None
        }
    }
}

/// Output writer selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Xlsx,
}

impl OutputFormat {
    pub fn parse_or_default(value: &str) -> Self {
        if value.eq_ignore_ascii_case("xlsx") {
            OutputFormat::Xlsx
        } else {
            OutputFormat::Csv
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Xlsx => "xlsx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

/// Configuration for one cleaning request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CleanConfig {
    /// Source columns to keep, in output order
    pub columns: Vec<String>,

    /// Strip leading/trailing whitespace
    pub trim: bool,

    /// Collapse runs of whitespace to a single space
    pub collapse_spaces: bool,

    /// Case folding mode
    pub text_case: TextCase,

    /// Date normalization mode
    pub date_format: DateFormat,

    /// Row-equality key columns; empty means no dedup
    pub dedupe_keys: Vec<String>,

    /// Drop rows empty across kept columns
    pub drop_empty_rows: bool,

    /// Drop kept columns empty across all body rows
    pub drop_empty_cols: bool,

    /// Currency/number/boolean canonicalization
    pub normalize_types: bool,

    pub validate_email: bool,
    pub remove_invalid_emails: bool,
    pub validate_url: bool,
    pub remove_invalid_urls: bool,

    pub output_format: OutputFormat,

    /// Placeholder kept for form compatibility; user order is always kept
    pub keep_order: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            trim: true,
            collapse_spaces: true,
            text_case: TextCase::None,
            date_format: DateFormat::None,
            dedupe_keys: Vec::new(),
            drop_empty_rows: true,
            drop_empty_cols: true,
            normalize_types: false,
            validate_email: false,
            remove_invalid_emails: false,
            validate_url: false,
            remove_invalid_urls: false,
            output_format: OutputFormat::Csv,
            keep_order: true,
        }
    }
}

impl CleanConfig {
    /// Configuration with every transformation and filter disabled.
    /// Feeding a table's own header back through this yields the same rows.
    pub fn identity(columns: Vec<String>) -> Self {
        Self {
            columns,
            trim: false,
            collapse_spaces: false,
            drop_empty_rows: false,
            drop_empty_cols: false,
            ..Default::default()
        }
    }
}

/// Split a comma-separated name list, trimming each name and
/// discarding empties
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}
