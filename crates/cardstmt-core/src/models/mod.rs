//! Data models for statement extraction.

pub mod config;
pub mod statement;

pub use statement::{Bank, ExtractionResult, Field, FieldSet, SourceTag};
