//! Per-bank field rules.
//!
//! Each bank module maps raw statement text to a [`FieldSet`] using ordered
//! pattern alternatives tuned to that bank's known layouts. The source tag
//! only selects between alternative pattern sets; a missing field is `None`.

pub mod amex;
pub mod capital_one;
pub mod hdfc;
pub mod icici;
pub mod kotak;

use crate::models::statement::{Bank, FieldSet, SourceTag};

/// Run the rules for `bank` over `text`.
///
/// No extraction is attempted for [`Bank::Unknown`].
pub fn extract_fields(bank: Bank, text: &str, source: SourceTag) -> FieldSet {
    match bank {
        Bank::Hdfc => hdfc::extract(text, source),
        Bank::Icici => icici::extract(text, source),
        Bank::Kotak => kotak::extract(text, source),
        Bank::Amex => amex::extract(text, source),
        Bank::CapitalOne => capital_one::extract(text, source),
        Bank::Unknown => FieldSet::default(),
    }
}
