//! Reconciles the text-layer and OCR field sets into one.
//!
//! The two sources are not equally reliable per bank and field, so the
//! preferred source comes from a fixed exception table; the other source is
//! only a fallback. Values are taken whole from one source or the other.

use crate::models::statement::{Bank, Field, FieldSet, SourceTag};

/// Source whose value wins for `field` on statements from `bank`.
pub fn preferred_source(bank: Bank, field: Field) -> SourceTag {
    match (bank, field) {
        // OCR reads the HDFC available-credit figure that the text layer garbles.
        (Bank::Hdfc, Field::AvailableCredit) => SourceTag::Ocr,

        // OCR misreads the ICICI due date.
        (Bank::Icici, Field::DueDate) => SourceTag::TextLayer,

        // The ICICI credit summary is only reliably present in OCR text.
        (Bank::Icici, Field::CreditLimit | Field::AvailableCredit | Field::StatementDate) => {
            SourceTag::Ocr
        }

        _ => SourceTag::TextLayer,
    }
}

/// Merge the per-source field sets for `bank`.
pub fn combine(bank: Bank, text_layer: &FieldSet, ocr: &FieldSet) -> FieldSet {
    let mut combined = FieldSet::default();

    for field in Field::ALL {
        let (first, second) = match preferred_source(bank, field) {
            SourceTag::TextLayer => (text_layer, ocr),
            SourceTag::Ocr => (ocr, text_layer),
        };

        let value = present(first.get(field)).or_else(|| present(second.get(field)));
        combined.set(field, value.map(str::to_string));
    }

    combined
}

/// Empty strings count as missing.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
