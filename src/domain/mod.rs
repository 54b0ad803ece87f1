pub mod clean;
pub mod error;
