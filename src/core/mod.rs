// src/core/mod.rs

pub mod csv;
pub mod format;
pub mod record;

pub use record::Record;
