//! Text command - show the raw text each source reads from a statement.

use std::path::PathBuf;

use clap::Args;
use console::style;

use cardstmt_core::statement::detect_bank;
use cardstmt_core::{PdfTextLayer, TesseractOcr, TextSource};

/// Arguments for the text command.
#[derive(Args)]
pub struct TextArgs {
    /// Input statement (PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Which source to run
    #[arg(short, long, value_enum, default_value = "both")]
    source: SourceChoice,

    /// Show at most this many characters per source
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Password for encrypted statements
    #[arg(long)]
    password: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceChoice {
    /// Embedded PDF text only
    TextLayer,
    /// OCR only
    Ocr,
    /// Both sources
    Both,
}

pub async fn run(args: TextArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }
    super::ensure_pdf(&args.input)?;
    if args.password.is_some() {
        config.pdf.password = args.password.clone();
    }

    let mut text_layer = String::new();
    let mut ocr = String::new();

    if args.source != SourceChoice::Ocr {
        let source = PdfTextLayer::new().with_password(config.pdf.password.clone());
        text_layer = read_source(&source, &args, "text-layer").await?;
    }
    if args.source != SourceChoice::TextLayer {
        // An explicit request for OCR text overrides `ocr.enabled`.
        let mut ocr_config = config.ocr.clone();
        ocr_config.enabled = true;
        let source = TesseractOcr::new(ocr_config).with_password(config.pdf.password.clone());
        ocr = read_source(&source, &args, "ocr").await?;
    }

    println!(
        "{} Detected bank: {}",
        style("ℹ").blue(),
        style(detect_bank(&text_layer, &ocr)).bold()
    );

    Ok(())
}

async fn read_source<S>(source: &S, args: &TextArgs, name: &str) -> anyhow::Result<String>
where
    S: TextSource + Clone + 'static,
{
    let worker = source.clone();
    let input = args.input.clone();
    let outcome = tokio::task::spawn_blocking(move || worker.extract_text(&input)).await?;

    match outcome {
        Ok(text) => {
            println!(
                "{}",
                style(format!("=== {} ({} chars) ===", name, text.chars().count())).cyan()
            );
            println!("{}", truncate(&text, args.limit));
            Ok(text)
        }
        Err(e) => {
            println!("{}", style(format!("=== {} (failed) ===", name)).red());
            println!("{}", e);
            println!();
            Ok(String::new())
        }
    }
}

fn truncate(text: &str, limit: Option<usize>) -> &str {
    match limit {
        Some(limit) => match text.char_indices().nth(limit) {
            Some((idx, _)) => &text[..idx],
            None => text,
        },
        None => text,
    }
}
