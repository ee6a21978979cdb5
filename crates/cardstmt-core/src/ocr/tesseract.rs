//! Rasterize leading pages with `pdftoppm`, recognize them with `tesseract`.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use tracing::{debug, info};

use super::Result;
use crate::error::{OcrError, StatementError};
use crate::models::config::OcrConfig;
use crate::statement::TextSource;

/// OCR source that shells out to Poppler and Tesseract.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    config: OcrConfig,
    password: Option<String>,
}

impl TesseractOcr {
    pub fn new(config: OcrConfig) -> Self {
        Self {
            config,
            password: None,
        }
    }

    /// Set the password passed to `pdftoppm` for encrypted statements.
    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password;
        self
    }

    /// Check that both external tools can be found.
    pub fn check_tools(&self) -> Result<()> {
        for tool in [&self.config.pdftoppm_cmd, &self.config.tesseract_cmd] {
            which::which(tool).map_err(|_| OcrError::ToolMissing(tool.clone()))?;
        }
        Ok(())
    }

    /// Run OCR over the first `max_pages` pages and concatenate the text.
    pub fn recognize(&self, document: &Path) -> Result<String> {
        let start = Instant::now();
        self.check_tools()?;

        let scratch = tempfile::tempdir()?;
        let images = self.rasterize(document, scratch.path())?;

        let mut text = String::new();
        for (i, image) in images.iter().enumerate() {
            let page_text = self.recognize_image(image)?;
            debug!("OCR page {}: {} chars", i + 1, page_text.len());
            text.push_str(&page_text);
            text.push('\n');
        }

        info!(
            "OCR complete: {} pages, {} chars in {}ms",
            images.len(),
            text.len(),
            start.elapsed().as_millis()
        );
        Ok(text)
    }

    /// Render the leading pages to PNG files and return them in page order.
    fn rasterize(&self, document: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let prefix = out_dir.join("page");

        let mut cmd = Command::new(&self.config.pdftoppm_cmd);
        cmd.arg("-r")
            .arg(self.config.dpi.to_string())
            .arg("-f")
            .arg("1")
            .arg("-l")
            .arg(self.config.max_pages.max(1).to_string())
            .arg("-png");
        if let Some(password) = &self.password {
            cmd.arg("-upw").arg(password);
        }
        cmd.arg(document).arg(&prefix);

        let output = cmd.output()?;
        if !output.status.success() {
            return Err(OcrError::Rasterize(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        // pdftoppm zero-pads page numbers to a common width, so lexical
        // order is page order.
        let mut images: Vec<PathBuf> = std::fs::read_dir(out_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "png"))
            .collect();
        images.sort();

        if images.is_empty() {
            return Err(OcrError::Rasterize("no page images produced".to_string()));
        }

        debug!("Rasterized {} pages at {} dpi", images.len(), self.config.dpi);
        Ok(images)
    }

    fn recognize_image(&self, image: &Path) -> Result<String> {
        let output = Command::new(&self.config.tesseract_cmd)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.language)
            .arg("--psm")
            .arg(self.config.page_segmentation_mode.to_string())
            .output()?;

        if !output.status.success() {
            return Err(OcrError::Recognition(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new(OcrConfig::default())
    }
}

impl TextSource for TesseractOcr {
    fn extract_text(&self, document: &Path) -> std::result::Result<String, StatementError> {
        if !self.config.enabled {
            debug!("OCR disabled, skipping {}", document.display());
            return Ok(String::new());
        }
        Ok(self.recognize(document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_ocr_yields_empty_text() {
        let config = OcrConfig {
            enabled: false,
            ..OcrConfig::default()
        };
        let ocr = TesseractOcr::new(config);
        let text = ocr.extract_text(Path::new("/nonexistent/statement.pdf")).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_missing_tool_is_reported() {
        let config = OcrConfig {
            tesseract_cmd: "cardstmt-no-such-tesseract".to_string(),
            pdftoppm_cmd: "cardstmt-no-such-pdftoppm".to_string(),
            ..OcrConfig::default()
        };
        let ocr = TesseractOcr::new(config);
        match ocr.check_tools() {
            Err(OcrError::ToolMissing(tool)) => assert_eq!(tool, "cardstmt-no-such-pdftoppm"),
            other => panic!("expected ToolMissing, got {:?}", other),
        }
    }
}
