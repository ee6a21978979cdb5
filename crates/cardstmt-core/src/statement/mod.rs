//! Statement field extraction: bank detection, per-bank rules, and
//! reconciliation of the text-layer and OCR sources.

pub mod banks;
pub mod combiner;
pub mod detector;
mod parser;
pub mod rules;

pub use combiner::{combine, preferred_source};
pub use detector::detect_bank;
pub use parser::{ParseReport, StatementParser};

use std::path::Path;

use crate::error::StatementError;

/// A way of turning a statement document into raw text.
///
/// Implementations may fail; the parser degrades a failure to empty text.
pub trait TextSource: Send + Sync {
    /// Extract the document's text, pages concatenated in order.
    fn extract_text(&self, document: &Path) -> Result<String, StatementError>;
}
