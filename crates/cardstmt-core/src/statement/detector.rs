//! Issuing bank detection from marker substrings.

use tracing::debug;

use crate::models::statement::Bank;

/// Marker substrings per bank, in priority order. Any one marker is enough.
const MARKERS: &[(Bank, &[&str])] = &[
    (Bank::Hdfc, &["hdfc bank", "hdfcbank"]),
    (Bank::Icici, &["icici bank", "icicibank"]),
    (Bank::Kotak, &["kotak"]),
    (Bank::Amex, &["american express", "amex", "aebc"]),
    (Bank::CapitalOne, &["capital one", "capitalone"]),
];

/// Detect the issuing bank from both raw texts.
///
/// The texts are joined and lower-cased; the first bank in priority order
/// whose marker occurs wins, regardless of where in the text it appears.
pub fn detect_bank(text_layer: &str, ocr: &str) -> Bank {
    let combined = format!("{} {}", text_layer, ocr).to_lowercase();

    for (bank, markers) in MARKERS {
        if let Some(marker) = markers.iter().find(|m| combined.contains(**m)) {
            debug!("Bank marker {:?} -> {}", marker, bank);
            return *bank;
        }
    }

    Bank::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_each_bank() {
        assert_eq!(detect_bank("Welcome to HDFC Bank", ""), Bank::Hdfc);
        assert_eq!(detect_bank("", "www.icicibank.com"), Bank::Icici);
        assert_eq!(detect_bank("KOTAK MAHINDRA", ""), Bank::Kotak);
        assert_eq!(detect_bank("American Express Banking Corp", ""), Bank::Amex);
        assert_eq!(detect_bank("AEBC statement", ""), Bank::Amex);
        assert_eq!(detect_bank("", "Capital One (Europe) plc"), Bank::CapitalOne);
    }

    #[test]
    fn test_unknown_when_no_marker() {
        assert_eq!(detect_bank("Some Other Bank", "statement"), Bank::Unknown);
        assert_eq!(detect_bank("", ""), Bank::Unknown);
    }

    #[test]
    fn test_priority_ignores_position() {
        // Capital One appears first, but Amex outranks it.
        let text = "Capital One card accepted where American Express is";
        assert_eq!(detect_bank(text, ""), Bank::Amex);

        // Kotak in the text layer, HDFC only in the OCR text.
        assert_eq!(detect_bank("Kotak transfer", "paid to HDFC Bank"), Bank::Hdfc);

        assert_eq!(detect_bank("icici bank ... hdfcbank", ""), Bank::Hdfc);
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(detect_bank("hDfC bAnK", ""), Bank::Hdfc);
        assert_eq!(detect_bank("", "CAPITALONE.CO.UK"), Bank::CapitalOne);
    }
}
