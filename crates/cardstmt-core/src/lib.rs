//! Core library for credit-card statement parsing.
//!
//! This crate provides:
//! - PDF text-layer extraction and Tesseract-based OCR text sources
//! - Issuing bank detection from marker substrings
//! - Per-bank field rules (HDFC, ICICI, Kotak, Amex, Capital One)
//! - Reconciliation of text-layer and OCR results into one statement record

pub mod error;
pub mod models;
pub mod pdf;
#[cfg(feature = "ocr")]
pub mod ocr;
pub mod statement;

pub use error::{OcrError, PdfError, Result, StatementError};
pub use models::config::{Config, OcrConfig, PdfConfig};
pub use models::statement::{Bank, ExtractionResult, Field, FieldSet, SourceTag};
pub use pdf::{PdfExtractor, PdfTextLayer};
#[cfg(feature = "ocr")]
pub use ocr::TesseractOcr;
pub use statement::{ParseReport, StatementParser, TextSource};
