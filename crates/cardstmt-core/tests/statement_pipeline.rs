//! End-to-end pipeline tests with in-memory text sources.

use std::io;
use std::path::Path;

use cardstmt_core::{
    Bank, ExtractionResult, FieldSet, StatementError, StatementParser, TextSource,
};
use pretty_assertions::assert_eq;

struct FixedText(&'static str);

impl TextSource for FixedText {
    fn extract_text(&self, _document: &Path) -> Result<String, StatementError> {
        Ok(self.0.to_string())
    }
}

struct Unreadable;

impl TextSource for Unreadable {
    fn extract_text(&self, document: &Path) -> Result<String, StatementError> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not found", document.display()),
        )
        .into())
    }
}

fn parser(text_layer: &'static str, ocr: &'static str) -> StatementParser {
    StatementParser::new(Box::new(FixedText(text_layer)), Box::new(FixedText(ocr)))
}

fn fields(values: [&str; 5]) -> FieldSet {
    let value = |v: &str| Some(v.to_string());
    FieldSet {
        due_date: value(values[0]),
        last_4_digits: value(values[1]),
        credit_limit: value(values[2]),
        available_credit: value(values[3]),
        statement_date: value(values[4]),
    }
}

const HDFC_TEXT_LAYER: &str = "HDFC Bank Credit Card Statement
Card No: 5228 52XX XXXX 0591
Statement Date:14/06/2019
Payment Due Date Total Dues Minimum Amount Due
28/06/2019 45,240.00 13,636.00
Credit Limit Available Credit Limit Available Cash Limit
3,02,000 23,519 0.00
";

const HDFC_OCR: &str = "HDFC BANK
Card No: 5228 52XX XXXX 0591
Statement Date: 14/06/2019
Payment Due Date Total Dues Minimum Amount Due
28/06/2019 45,240.00 13,636.00
Credit Limit Available Credit Limit Available Cash Limit
3,02,000 2,56,760.00 -
";

const ICICI_TEXT_LAYER: &str = "ICICI Bank Credit Card Statement
Statement Date 16/12/2023
Payment Due Date : 05/01/2024
Card Account No 4315 XXXX XXXX 7008
";

const ICICI_OCR: &str = "ICICI Bank
STATEMENT DATE :- 15/12/2023
Payment Due Date : 09/01/2024
Account Summary 3,410.51 6,481.76 0.00 4,009.75
Credit Credit Limit Available Credit
Credit Summary 83,000.00 77,115.48
";

const KOTAK_TEXT_LAYER: &str = "Kotak Mahindra Bank
Primary Card Number 414767XXXXXX6705
Statement Date 15-Jan-2024
Due Date 04-Feb-2024
Credit Limit(Rs.) Available Credit
900,000 380,229.49
";

const AMEX_TEXT_LAYER: &str = "American Express Banking Corp.
Membership Number Date
XXXX-XXXXXX-01007 14/01/2024
Minimum Payment: Rs 23,500.00 Due by February 1, 2024
Credit Summary Credit Limit Rs Available Credit Limit Rs
At January 14, 2024 470,000.00 257,545.52
";

const CAPITAL_ONE_TEXT_LAYER: &str = "Capital One
Your card ending **** **** **** 4811
Statement date 5 October 24
Credit limit £1,200.00
Available to spend as
at 05/10/24
£780.74
It's due on 31 Oct 24
";

#[test]
fn test_hdfc_takes_available_credit_from_ocr() {
    let result = parser(HDFC_TEXT_LAYER, HDFC_OCR).parse(Path::new("hdfc.pdf"));

    assert_eq!(
        result,
        ExtractionResult::new(
            Bank::Hdfc,
            fields(["2019-06-28", "0591", "3,02,000", "2,56,760.00", "2019-06-14"]),
        )
    );
}

#[test]
fn test_icici_mixes_sources_per_field() {
    let report = parser(ICICI_TEXT_LAYER, ICICI_OCR).parse_detailed(Path::new("icici.pdf"));

    assert_eq!(report.text_layer_fields.due_date.as_deref(), Some("2024-01-05"));
    assert_eq!(report.ocr_fields.due_date.as_deref(), Some("2024-01-09"));
    assert_eq!(
        report.result,
        ExtractionResult::new(
            Bank::Icici,
            fields(["2024-01-05", "7008", "83,000.00", "77,115.48", "2023-12-15"]),
        )
    );
}

#[test]
fn test_kotak_from_text_layer_only() {
    let result = parser(KOTAK_TEXT_LAYER, "").parse(Path::new("kotak.pdf"));

    assert_eq!(
        result,
        ExtractionResult::new(
            Bank::Kotak,
            fields(["2024-02-04", "6705", "900,000", "380,229.49", "2024-01-15"]),
        )
    );
}

#[test]
fn test_amex_with_failing_ocr() {
    let parser = StatementParser::new(Box::new(FixedText(AMEX_TEXT_LAYER)), Box::new(Unreadable));
    let result = parser.parse(Path::new("amex.pdf"));

    assert_eq!(
        result,
        ExtractionResult::new(
            Bank::Amex,
            fields(["2024-02-01", "01007", "470,000.00", "257,545.52", "2024-01-14"]),
        )
    );
}

#[test]
fn test_capital_one_from_ocr_when_text_layer_fails() {
    let parser = StatementParser::new(
        Box::new(Unreadable),
        Box::new(FixedText(CAPITAL_ONE_TEXT_LAYER)),
    );
    let report = parser.parse_detailed(Path::new("capital-one.pdf"));

    assert!(report.text_layer_text.is_empty());
    assert!(report.text_layer_fields.is_empty());
    assert_eq!(
        report.result,
        ExtractionResult::new(
            Bank::CapitalOne,
            fields(["2024-10-31", "4811", "1,200.00", "780.74", "2024-10-05"]),
        )
    );
}

#[test]
fn test_empty_sources_yield_unknown() {
    let result = parser("", "").parse(Path::new("blank.pdf"));
    assert_eq!(result, ExtractionResult::unknown());
}

#[test]
fn test_both_sources_failing_yield_unknown() {
    let parser = StatementParser::new(Box::new(Unreadable), Box::new(Unreadable));
    let result = parser.parse(Path::new("missing.pdf"));
    assert_eq!(result, ExtractionResult::unknown());
}

#[test]
fn test_marker_only_keeps_bank_with_null_fields() {
    let result = parser("HDFC Bank", "").parse(Path::new("cover-letter.pdf"));
    assert_eq!(result, ExtractionResult::new(Bank::Hdfc, FieldSet::default()));
}

#[test]
fn test_higher_priority_marker_wins_anywhere() {
    let result = StatementParser::parse_texts("Pay via Capital One or Kotak", "");
    assert_eq!(result.bank, Bank::Kotak);
}

#[test]
fn test_result_serializes_flat_with_nulls() {
    let result = StatementParser::parse_texts("HDFC Bank\nCard No: 5228 52XX XXXX 0591", "");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "bank": "HDFC",
            "due_date": null,
            "last_4_digits": "0591",
            "credit_limit": null,
            "available_credit": null,
            "statement_date": null,
        })
    );
}
