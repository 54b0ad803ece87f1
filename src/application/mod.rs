pub mod cleaner;

pub use cleaner::CleaningEngine;
