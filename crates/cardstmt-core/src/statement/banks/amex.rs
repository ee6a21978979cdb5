//! American Express statements.
//!
//! Dates are long-form ("February 1, 2024"), the card is identified by the
//! five-digit tail of the masked membership number (`XXXX-XXXXXX-01007`),
//! and the limits are the first and second numbers after the dated
//! "At <date>" line of the credit summary.

use lazy_static::lazy_static;

use crate::models::statement::{FieldSet, SourceTag};
use crate::statement::rules::matcher::verbatim;
use crate::statement::rules::{clean_amount, format_date, Alternatives};

lazy_static! {
    static ref DUE_DATE: Alternatives = Alternatives::new(&[
        r"Due\s+by\s+(\w+\s+\d{1,2},?\s+\d{4})",
        r"Minimum\s+Payment:\s+Rs\s+[0-9,]+(?:\.\d{2})?\s+Due\s+by\s+(\w+\s+\d{1,2},?\s+\d{4})",
    ]).unwrap();

    static ref MEMBERSHIP_NUMBER: Alternatives = Alternatives::new(&[
        r"XXXX-XXXX+-(\d{5})",
        r"Membership\s+Number[^\d]+XXXX-XXXX+-(\d{5})",
    ]).unwrap();

    static ref CREDIT_LIMIT: Alternatives = Alternatives::new(&[
        r"Credit\s+Summary\s+Credit\s+Limit\s+Rs[^\d]+Available\s+Credit\s+Limit\s+Rs[^\d]+At[^\d]+\d{1,2}[/-]\d{1,2}[/-]\d{4}\s+([0-9,]+(?:\.\d{2})?)",
        r"At\s+\w+\s+\d{1,2},?\s+\d{4}\s+([0-9,]+(?:\.\d{2})?)\s+[0-9,]+(?:\.\d{2})?",
    ]).unwrap();

    static ref AVAILABLE_CREDIT: Alternatives = Alternatives::new(&[
        r"Credit\s+Summary\s+Credit\s+Limit\s+Rs[^\d]+Available\s+Credit\s+Limit\s+Rs[^\d]+At[^\d]+\d{1,2}[/-]\d{1,2}[/-]\d{4}\s+[0-9,]+(?:\.\d{2})?\s+([0-9,]+(?:\.\d{2})?)",
        r"At\s+\w+\s+\d{1,2},?\s+\d{4}\s+[0-9,]+(?:\.\d{2})?\s+([0-9,]+(?:\.\d{2})?)",
    ]).unwrap();

    static ref STATEMENT_DATE: Alternatives = Alternatives::new(&[
        r"Membership\s+Number\s+Date[^\d]+XXXX-XXXX+-\d{5}\s+(\d{1,2}[/-]\d{1,2}[/-]\d{4})",
        r"Date[^\d]+(\d{1,2}[/-]\d{1,2}[/-]\d{4})",
    ]).unwrap();
}

/// Extract Amex fields from one source's text.
pub fn extract(text: &str, _source: SourceTag) -> FieldSet {
    FieldSet {
        due_date: DUE_DATE.resolve(text, format_date),
        last_4_digits: MEMBERSHIP_NUMBER.resolve(text, verbatim),
        credit_limit: CREDIT_LIMIT.resolve(text, clean_amount),
        available_credit: AVAILABLE_CREDIT.resolve(text, clean_amount),
        statement_date: STATEMENT_DATE.resolve(text, format_date),
    }
}
