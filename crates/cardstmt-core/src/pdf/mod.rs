//! PDF text-layer extraction.

mod extractor;

pub use extractor::{PdfExtractor, PdfTextLayer};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;
