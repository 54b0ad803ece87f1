// ============================================================
// CLEANING DOMAIN LAYER
// ============================================================
// Core types and value functions for tabular cleaning
// No I/O, no async

mod config;
mod table;
pub mod value;

pub use config::{split_names, CleanConfig, DateFormat, OutputFormat, TextCase};
pub use table::{CleanedTable, Table};
