//! PDF text extraction using lopdf and pdf-extract.

use std::path::Path;

use lopdf::Document;
use tracing::{debug, info};

use super::Result;
use crate::error::{PdfError, StatementError};
use crate::statement::TextSource;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Load a PDF from bytes, trying the empty password if it is encrypted.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        self.load_with_password(data, None)
    }

    /// Load a PDF from bytes, decrypting it with `password` when needed.
    pub fn load_with_password(&mut self, data: &[u8], password: Option<&str>) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            if doc.decrypt(password.unwrap_or("")).is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF (password supplied: {})", password.is_some());

            // pdf-extract needs the decrypted bytes
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    /// Get the number of pages in the loaded PDF.
    pub fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    /// Extract text per page, in page order.
    pub fn extract_page_texts(&self) -> Result<Vec<String>> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    /// Extract the whole text layer: every page followed by a newline.
    pub fn extract_text(&self) -> Result<String> {
        let pages = self.extract_page_texts()?;

        let mut text = String::new();
        for page in pages.iter().filter(|p| !p.is_empty()) {
            text.push_str(page);
            text.push('\n');
        }
        Ok(text)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Text-layer source reading a PDF file from disk.
#[derive(Debug, Clone, Default)]
pub struct PdfTextLayer {
    password: Option<String>,
}

impl PdfTextLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the password used for encrypted statements.
    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password;
        self
    }
}

impl TextSource for PdfTextLayer {
    fn extract_text(&self, document: &Path) -> std::result::Result<String, StatementError> {
        let data = std::fs::read(document)?;

        let mut extractor = PdfExtractor::new();
        extractor.load_with_password(&data, self.password.as_deref())?;
        let text = extractor.extract_text()?;

        info!(
            "Text layer: {} chars from {} pages",
            text.len(),
            extractor.page_count()
        );
        Ok(text)
    }
}
