//! Banks command - list supported banks and extracted fields.

use console::style;

use cardstmt_core::statement::preferred_source;
use cardstmt_core::{Bank, Field, SourceTag};

pub fn run() -> anyhow::Result<()> {
    println!("{}", style("Supported banks (detection priority order):").bold());
    for bank in Bank::SUPPORTED {
        let ocr_fields: Vec<&str> = Field::ALL
            .iter()
            .filter(|f| preferred_source(bank, **f) == SourceTag::Ocr)
            .map(|f| f.key())
            .collect();

        print!("  {:<12} {}", bank.as_str(), bank.display_name());
        if !ocr_fields.is_empty() {
            print!("  {}", style(format!("(OCR preferred: {})", ocr_fields.join(", "))).dim());
        }
        println!();
    }

    println!();
    println!("{}", style("Extracted fields:").bold());
    for field in Field::ALL {
        println!("  {:<18} {}", field.key(), field.label());
    }

    Ok(())
}
