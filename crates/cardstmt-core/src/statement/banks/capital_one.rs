//! Capital One (UK) statements.
//!
//! Amounts carry a `£` prefix and the due date reads "It's due on 31 Oct 24".
//! The available-to-spend block wraps across lines:
//!
//! ```text
//! Available to spend as
//! at 05/10/24
//! £780.74
//! ```

use lazy_static::lazy_static;

use crate::models::statement::{FieldSet, SourceTag};
use crate::statement::rules::matcher::verbatim;
use crate::statement::rules::{clean_amount, format_date, Alternatives};

lazy_static! {
    static ref DUE_DATE: Alternatives = Alternatives::new(&[
        r"It'?s\s+due\s+on\s+(\d{1,2}\s+\w{3}\s+\d{2,4})",
    ]).unwrap();

    // **** **** **** 4811
    static ref CARD_NUMBER: Alternatives = Alternatives::new(&[
        r"\*{4}\s+\*{4}\s+\*{4}\s+(\d{4})",
    ]).unwrap();

    static ref CREDIT_LIMIT: Alternatives = Alternatives::new(&[
        r"Credit\s+limit[^\d]+£([0-9,]+(?:\.\d{2})?)",
    ]).unwrap();

    static ref AVAILABLE_CREDIT: Alternatives = Alternatives::new(&[
        r"Available\s+to\s+spend\s+as[^\d£]*at[^\d]+\d{2}/\d{2}/\d{2}[^\d£]+£([0-9,]+(?:\.\d{2})?)",
        r"Available\s+to\s+spend[^\d£]+£([0-9,]+(?:\.\d{2})?)",
    ]).unwrap();

    static ref STATEMENT_DATE: Alternatives = Alternatives::new(&[
        r"Statement\s+date[^\d]+(\d{1,2}\s+\w+\s+\d{2,4})",
    ]).unwrap();
}

/// Extract Capital One fields from one source's text.
pub fn extract(text: &str, _source: SourceTag) -> FieldSet {
    FieldSet {
        due_date: DUE_DATE.resolve(text, format_date),
        last_4_digits: CARD_NUMBER.resolve(text, verbatim),
        credit_limit: CREDIT_LIMIT.resolve(text, clean_amount),
        available_credit: AVAILABLE_CREDIT.resolve(text, clean_amount),
        statement_date: STATEMENT_DATE.resolve(text, format_date),
    }
}
