//! Kotak Mahindra Bank statements.
//!
//! Credit limit and available credit are the two numbers printed after the
//! "Credit Limit(Rs.) Available Credit" header, in that order:
//!
//! ```text
//! Credit Limit(Rs.) Available Credit
//! 900,000 380,229.49
//! ```

use lazy_static::lazy_static;

use crate::models::statement::{FieldSet, SourceTag};
use crate::statement::rules::matcher::verbatim;
use crate::statement::rules::{clean_amount, format_date, Alternatives};

lazy_static! {
    static ref DUE_DATE: Alternatives = Alternatives::new(&[
        r"Due\s+Date\s+(\d{1,2}[-/]\w{3}[-/]\d{4})",
    ]).unwrap();

    // 414767XXXXXX6705
    static ref CARD_NUMBER: Alternatives = Alternatives::new(&[
        r"\d{6}X+(\d{4})",
    ]).unwrap();

    static ref CREDIT_LIMIT: Alternatives = Alternatives::new(&[
        r"Credit\s+Limit\s*\(Rs\.\)\s+Available\s+Credit[^\d]+([0-9,]+(?:\.\d{2})?)",
    ]).unwrap();

    static ref AVAILABLE_CREDIT: Alternatives = Alternatives::new(&[
        r"Credit\s+Limit\s*\(Rs\.\)\s+Available\s+Credit[^\d]+[0-9,]+(?:\.\d{2})?\s+([0-9,]+(?:\.\d{2})?)",
    ]).unwrap();

    static ref STATEMENT_DATE: Alternatives = Alternatives::new(&[
        r"Statement\s+Date\s+(\d{1,2}[-/]\w{3}[-/]\d{4})",
    ]).unwrap();
}

/// Extract Kotak fields from one source's text.
pub fn extract(text: &str, _source: SourceTag) -> FieldSet {
    FieldSet {
        due_date: DUE_DATE.resolve(text, format_date),
        last_4_digits: CARD_NUMBER.resolve(text, verbatim),
        credit_limit: CREDIT_LIMIT.resolve(text, clean_amount),
        available_credit: AVAILABLE_CREDIT.resolve(text, clean_amount),
        statement_date: STATEMENT_DATE.resolve(text, format_date),
    }
}
