//! Configuration structures for the statement pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::StatementError;

/// Main configuration for the cardstmt pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// PDF text-layer configuration.
    pub pdf: PdfConfig,

    /// OCR configuration.
    pub ocr: OcrConfig,
}

/// PDF text-layer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Password for encrypted statements (empty password is tried when unset).
    pub password: Option<String>,
}

/// OCR configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Run OCR at all. When disabled the OCR source yields no text.
    pub enabled: bool,

    /// Number of leading pages to rasterize.
    pub max_pages: u32,

    /// DPI for rendering pages to images.
    pub dpi: u32,

    /// Tesseract language code.
    pub language: String,

    /// Tesseract page segmentation mode.
    pub page_segmentation_mode: u8,

    /// Tesseract executable.
    pub tesseract_cmd: String,

    /// Poppler `pdftoppm` executable.
    pub pdftoppm_cmd: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_pages: 3,
            dpi: 300,
            language: "eng".to_string(),
            page_segmentation_mode: 6, // Single uniform block of text
            tesseract_cmd: "tesseract".to_string(),
            pdftoppm_cmd: "pdftoppm".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, StatementError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| StatementError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), StatementError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StatementError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
