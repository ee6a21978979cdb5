//! HDFC Bank statements.
//!
//! The limits block prints "Credit Limit Available Credit Limit Available
//! Cash Limit" over one run of numbers. The text layer tends to garble the
//! available-credit figure (e.g. `23,519`) while OCR reads it correctly
//! (`2,56,760.00`), so the OCR source uses its own pattern set.

use lazy_static::lazy_static;

use crate::models::statement::{FieldSet, SourceTag};
use crate::statement::rules::matcher::verbatim;
use crate::statement::rules::{clean_amount, format_date, Alternatives};

lazy_static! {
    static ref DUE_DATE: Alternatives = Alternatives::new(&[
        r"Payment\s+Due\s+Date\s+Total\s+Dues\s+Minimum\s+Amount\s+Due\s+(\d{1,2}[/-]\d{1,2}[/-]\d{4})",
        r"Payment\s+Due\s+Date[:\s]+(\d{1,2}[/-]\d{1,2}[/-]\d{4})",
    ]).unwrap();

    // Card No: 5228 52XX XXXX 0591
    static ref CARD_NUMBER: Alternatives = Alternatives::new(&[
        r"Card\s+No[:\s]+\d{4}\s+\d{2}XX\s+XXXX\s+(\d{4})",
    ]).unwrap();

    static ref CREDIT_LIMIT: Alternatives = Alternatives::new(&[
        r"Credit\s+Limit\s+Available\s+Credit\s+Limit[^\d]+(\d{1},?\d{2},\d{3})",
    ]).unwrap();

    static ref AVAILABLE_CREDIT_TEXT: Alternatives = Alternatives::new(&[
        r"Credit\s+Limit\s+Available\s+Credit\s+Limit[^\d]+\d{1},?\d{2},\d{3}\s+([0-9,]+)",
    ]).unwrap();

    static ref AVAILABLE_CREDIT_OCR: Alternatives = Alternatives::new(&[
        r"Available\s+Credit\s+Limit[^\d]+\d{1},?\d{2},\d{3}[^\d]+(\d{1},\d{2},\d{3}(?:\.\d{2})?)",
        r"Credit\s+Limit[^\d]+\d{1},?\d{2},\d{3}[^\d]+(\d{1},\d{2},\d{3}(?:\.\d{2})?)",
    ]).unwrap();

    static ref STATEMENT_DATE: Alternatives = Alternatives::new(&[
        r"Statement\s+Date[:\s]*(\d{1,2}[/-]\d{1,2}[/-]\d{4})",
    ]).unwrap();
}

/// Extract HDFC fields from one source's text.
pub fn extract(text: &str, source: SourceTag) -> FieldSet {
    let available_credit = match source {
        SourceTag::Ocr => &*AVAILABLE_CREDIT_OCR,
        SourceTag::TextLayer => &*AVAILABLE_CREDIT_TEXT,
    };

    FieldSet {
        due_date: DUE_DATE.resolve(text, format_date),
        last_4_digits: CARD_NUMBER.resolve(text, verbatim),
        credit_limit: CREDIT_LIMIT.resolve(text, clean_amount),
        available_credit: available_credit.resolve(text, clean_amount),
        statement_date: STATEMENT_DATE.resolve(text, format_date),
    }
}
