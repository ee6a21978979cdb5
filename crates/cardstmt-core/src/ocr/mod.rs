//! OCR text source backed by the Poppler and Tesseract command-line tools.

mod tesseract;

pub use tesseract::TesseractOcr;

use crate::error::OcrError;

/// Result type for OCR operations.
pub type Result<T> = std::result::Result<T, OcrError>;
