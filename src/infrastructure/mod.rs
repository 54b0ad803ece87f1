pub mod adapters;
pub mod settings;
pub mod writers;
