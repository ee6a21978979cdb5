//! ICICI Bank statements.
//!
//! OCR text carries two "Summary" rows: the account summary
//! (`Summary 3,410.51 6,481.76 0.00 4,009.75`) and the credit summary
//! (`Summary 83,000.00 77,115.48`). Only the second one follows the
//! "Credit Limit Available Credit" header, and the limits pattern anchors
//! on that header with no `s` allowed in between, which skips the first row.

use lazy_static::lazy_static;

use crate::models::statement::{FieldSet, SourceTag};
use crate::statement::rules::{clean_amount, format_date, Alternatives};

lazy_static! {
    static ref DUE_DATE: Alternatives = Alternatives::new(&[
        r"Due\s+Date\s*:\s+(\d{1,2}[/-]\d{1,2}[/-]\d{4})",
    ]).unwrap();

    // 4315 XXXX XXXX 591 - the masked number repeats; the last one is the card
    static ref CARD_NUMBER: Alternatives = Alternatives::new(&[
        r"\d{4}\s+XXXX\s+XXXX\s+(\d{3,4})",
    ]).unwrap();

    static ref LIMITS: Alternatives = Alternatives::new(&[
        r"Credit\s+(?:Credit\s+)?Limit\s+Available\s+Credit[^S]*?Summary\s+(\d{1,3},\d{3}(?:\.\d{2})?)\s+(\d{1,3},\d{3}(?:\.\d{2})?)",
        r"Credit\s+Summary\s*Credit\s+Limit\s+Available\s+Credit[^\d]+(\d{1,3},\d{3}(?:\.\d{2})?)\s+(\d{1,3},\d{3}(?:\.\d{2})?)",
    ]).unwrap();

    static ref STATEMENT_DATE: Alternatives = Alternatives::new(&[
        r"Statement\s+Date[^\d]{0,50}?(\d{1,2}[/-]\d{1,2}[/-]\d{4})",
    ]).unwrap();
}

/// Extract ICICI fields from one source's text.
pub fn extract(text: &str, _source: SourceTag) -> FieldSet {
    let (credit_limit, available_credit) = match LIMITS.first_captures(text) {
        Some(caps) => (clean_amount(&caps[1]), clean_amount(&caps[2])),
        None => (None, None),
    };

    FieldSet {
        due_date: DUE_DATE.resolve(text, format_date),
        last_4_digits: CARD_NUMBER.last_match(text).map(pad_card_digits),
        credit_limit,
        available_credit,
        statement_date: STATEMENT_DATE.resolve(text, format_date),
    }
}

/// Left-pad with zeros to four digits ("591" -> "0591").
fn pad_card_digits(digits: &str) -> String {
    format!("{:0>4}", digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEXT_LAYER: &str = "ICICI Bank Credit Card Statement
Statement Date 15/12/2023
Payment Due Date : 05/01/2024
Card Account No 4315 XXXX XXXX 7008
Credit SummaryCredit Limit Available Credit
83,000.00 77,115.48
";

    const OCR: &str = "ICICI Bank
STATEMENT DATE :- 15/12/2023
Payment Due Date : 09/01/2024
Account Summary 3,410.51 6,481.76 0.00 4,009.75
Credit Credit Limit Available Credit
Credit Summary 83,000.00 77,115.48
";

    #[test]
    fn test_text_layer_canonical_layout() {
        let fields = extract(TEXT_LAYER, SourceTag::TextLayer);

        assert_eq!(
            fields,
            FieldSet {
                due_date: Some("2024-01-05".to_string()),
                last_4_digits: Some("7008".to_string()),
                credit_limit: Some("83,000.00".to_string()),
                available_credit: Some("77,115.48".to_string()),
                statement_date: Some("2023-12-15".to_string()),
            }
        );
    }

    #[test]
    fn test_ocr_skips_account_summary_row() {
        let fields = extract(OCR, SourceTag::Ocr);
        assert_eq!(fields.credit_limit.as_deref(), Some("83,000.00"));
        assert_eq!(fields.available_credit.as_deref(), Some("77,115.48"));
    }

    #[test]
    fn test_limits_reject_summary_after_other_columns() {
        let text = "Credit Limit Available Credit Cash Limit\nSummary 3,410.51 6,481.76";
        let fields = extract(text, SourceTag::Ocr);
        assert_eq!(fields.credit_limit, None);
        assert_eq!(fields.available_credit, None);
    }

    #[test]
    fn test_statement_date_tolerates_label_noise() {
        let fields = extract(OCR, SourceTag::Ocr);
        assert_eq!(fields.statement_date.as_deref(), Some("2023-12-15"));
    }

    #[test]
    fn test_last_card_number_wins_and_is_padded() {
        let text = "Primary 4315 XXXX XXXX 7008\nAdd-on card 4315 XXXX XXXX 591\n";
        let fields = extract(text, SourceTag::TextLayer);
        assert_eq!(fields.last_4_digits.as_deref(), Some("0591"));
    }

    #[test]
    fn test_pad_card_digits() {
        assert_eq!(pad_card_digits("591"), "0591");
        assert_eq!(pad_card_digits("7008"), "7008");
    }

    #[test]
    fn test_no_limits_without_anchor() {
        let fields = extract("Summary 3,410.51 6,481.76", SourceTag::Ocr);
        assert_eq!(fields.credit_limit, None);
        assert_eq!(fields.available_credit, None);
    }
}
