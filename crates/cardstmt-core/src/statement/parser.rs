//! Statement orchestrator.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::TextSource;
use super::banks::extract_fields;
use super::combiner::combine;
use super::detector::detect_bank;
use crate::models::config::Config;
use crate::models::statement::{Bank, ExtractionResult, Field, FieldSet, SourceTag};
use crate::pdf::PdfTextLayer;

/// Everything the pipeline saw while parsing one document.
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    /// Final combined result.
    pub result: ExtractionResult,

    /// Raw text-layer text (empty if the source failed).
    pub text_layer_text: String,

    /// Raw OCR text (empty if the source failed or OCR is disabled).
    pub ocr_text: String,

    /// Fields found in the text layer alone.
    pub text_layer_fields: FieldSet,

    /// Fields found in the OCR text alone.
    pub ocr_fields: FieldSet,

    /// Wall-clock time spent, in milliseconds.
    pub processing_time_ms: u64,
}

/// Parses credit-card statements into an [`ExtractionResult`].
///
/// Holds no mutable state, so one parser may serve many documents
/// concurrently.
pub struct StatementParser {
    text_layer: Box<dyn TextSource>,
    ocr: Box<dyn TextSource>,
}

impl StatementParser {
    /// Create a parser over the given text-layer and OCR sources.
    pub fn new(text_layer: Box<dyn TextSource>, ocr: Box<dyn TextSource>) -> Self {
        Self { text_layer, ocr }
    }

    /// Create a parser using the PDF text layer and Tesseract OCR.
    pub fn from_config(config: &Config) -> Self {
        let password = config.pdf.password.clone();
        let text_layer = PdfTextLayer::new().with_password(password.clone());

        #[cfg(feature = "ocr")]
        let ocr: Box<dyn TextSource> =
            Box::new(crate::ocr::TesseractOcr::new(config.ocr.clone()).with_password(password));
        #[cfg(not(feature = "ocr"))]
        let ocr: Box<dyn TextSource> = {
            let _ = password;
            Box::new(NoOcr)
        };

        Self::new(Box::new(text_layer), ocr)
    }

    /// Parse a statement document.
    ///
    /// Never fails: unreadable sources count as empty text and undetected
    /// banks yield [`Bank::Unknown`] with every field absent.
    pub fn parse(&self, document: &Path) -> ExtractionResult {
        self.parse_detailed(document).result
    }

    /// Parse a statement document, keeping the raw texts and per-source fields.
    pub fn parse_detailed(&self, document: &Path) -> ParseReport {
        let start = Instant::now();
        info!("Parsing statement {}", document.display());

        let text_layer_text = acquire(self.text_layer.as_ref(), document, SourceTag::TextLayer);
        let ocr_text = acquire(self.ocr.as_ref(), document, SourceTag::Ocr);

        let (bank, text_layer_fields, ocr_fields, fields) = run(&text_layer_text, &ocr_text);

        ParseReport {
            result: ExtractionResult::new(bank, fields),
            text_layer_text,
            ocr_text,
            text_layer_fields,
            ocr_fields,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Run detection, extraction and combination over already-acquired texts.
    pub fn parse_texts(text_layer: &str, ocr: &str) -> ExtractionResult {
        let (bank, _, _, fields) = run(text_layer, ocr);
        ExtractionResult::new(bank, fields)
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn acquire(source: &dyn TextSource, document: &Path, tag: SourceTag) -> String {
    match source.extract_text(document) {
        Ok(text) => {
            debug!("{} source produced {} chars", tag, text.len());
            text
        }
        Err(e) => {
            warn!("{} extraction failed for {}: {}", tag, document.display(), e);
            String::new()
        }
    }
}

fn run(text_layer: &str, ocr: &str) -> (Bank, FieldSet, FieldSet, FieldSet) {
    let bank = detect_bank(text_layer, ocr);
    info!("Detected bank: {}", bank);

    if bank == Bank::Unknown {
        warn!("No supported bank detected, skipping field extraction");
        return (
            bank,
            FieldSet::default(),
            FieldSet::default(),
            FieldSet::default(),
        );
    }

    let text_layer_fields = extract_fields(bank, text_layer, SourceTag::TextLayer);
    let ocr_fields = extract_fields(bank, ocr, SourceTag::Ocr);
    debug!(
        "Per-source fields: text-layer {}/5, ocr {}/5",
        text_layer_fields.found_count(),
        ocr_fields.found_count()
    );

    let fields = combine(bank, &text_layer_fields, &ocr_fields);
    for field in Field::ALL {
        match fields.get(field) {
            Some(value) => info!("{}: {}", field.label(), value),
            None => warn!("{} not found", field.label()),
        }
    }

    (bank, text_layer_fields, ocr_fields, fields)
}

/// OCR stand-in when the `ocr` feature is off.
#[cfg(not(feature = "ocr"))]
struct NoOcr;

#[cfg(not(feature = "ocr"))]
impl TextSource for NoOcr {
    fn extract_text(&self, _document: &Path) -> Result<String, crate::error::StatementError> {
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PdfError, StatementError};
    use pretty_assertions::assert_eq;

    struct Fixed(&'static str);

    impl TextSource for Fixed {
        fn extract_text(&self, _document: &Path) -> Result<String, StatementError> {
            Ok(self.0.to_string())
        }
    }

    struct Broken;

    impl TextSource for Broken {
        fn extract_text(&self, _document: &Path) -> Result<String, StatementError> {
            Err(PdfError::NoPages.into())
        }
    }

    #[test]
    fn test_both_sources_failing_yields_unknown() {
        let parser = StatementParser::new(Box::new(Broken), Box::new(Broken));
        let result = parser.parse(Path::new("statement.pdf"));
        assert_eq!(result, ExtractionResult::unknown());
    }

    #[test]
    fn test_failing_ocr_degrades_to_text_layer() {
        let text = "HDFC Bank\nCard No: 5522 60XX XXXX 0591\n";
        let parser = StatementParser::new(Box::new(Fixed(text)), Box::new(Broken));
        let report = parser.parse_detailed(Path::new("statement.pdf"));

        assert_eq!(report.result.bank, Bank::Hdfc);
        assert_eq!(report.result.get(Field::Last4Digits), Some("0591"));
        assert!(report.ocr_text.is_empty());
        assert!(report.ocr_fields.is_empty());
        assert_eq!(report.text_layer_text, text);
    }

    #[test]
    fn test_bank_marker_only_yields_empty_fields() {
        let result = StatementParser::parse_texts("HDFC Bank", "");
        assert_eq!(result.bank, Bank::Hdfc);
        assert!(result.fields.is_empty());
    }

    #[test]
    fn test_unknown_bank_skips_extraction() {
        let report = StatementParser::new(
            Box::new(Fixed("Payment Due Date: 28/06/2019")),
            Box::new(Fixed("")),
        )
        .parse_detailed(Path::new("statement.pdf"));

        assert_eq!(report.result.bank, Bank::Unknown);
        assert!(report.text_layer_fields.is_empty());
        assert!(report.result.fields.is_empty());
    }
}
