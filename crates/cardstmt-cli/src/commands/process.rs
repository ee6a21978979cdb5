//! Process command - parse a single statement.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

use cardstmt_core::{ExtractionResult, Field, FieldSet, ParseReport, StatementParser};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input statement (PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Skip OCR and use only the PDF text layer
    #[arg(long)]
    text_only: bool,

    /// Password for encrypted statements
    #[arg(long)]
    password: Option<String>,

    /// Show what each source found next to the final values
    #[arg(long)]
    show_sources: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }
    super::ensure_pdf(&args.input)?;

    if args.text_only {
        config.ocr.enabled = false;
    }
    if args.password.is_some() {
        config.pdf.password = args.password.clone();
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message("Parsing statement...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let parser = StatementParser::from_config(&config);
    let input = args.input.clone();
    let report = tokio::task::spawn_blocking(move || parser.parse_detailed(&input)).await?;

    pb.finish_and_clear();

    let output = if args.show_sources {
        format_report(&report, args.format)?
    } else {
        format_result(&report.result, args.format)?
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {}ms", report.processing_time_ms);

    Ok(())
}

/// Render the final result alone.
pub fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => format_result_csv(result),
        OutputFormat::Text => Ok(format_result_text(result, None)),
    }
}

#[derive(Serialize)]
struct SourcesView<'a> {
    #[serde(flatten)]
    result: &'a ExtractionResult,
    sources: SourceFields<'a>,
    processing_time_ms: u64,
}

#[derive(Serialize)]
struct SourceFields<'a> {
    text_layer: &'a FieldSet,
    ocr: &'a FieldSet,
}

/// Render the final result together with each source's findings.
fn format_report(report: &ParseReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let view = SourcesView {
                result: &report.result,
                sources: SourceFields {
                    text_layer: &report.text_layer_fields,
                    ocr: &report.ocr_fields,
                },
                processing_time_ms: report.processing_time_ms,
            };
            Ok(serde_json::to_string_pretty(&view)?)
        }
        OutputFormat::Csv => format_result_csv(&report.result),
        OutputFormat::Text => Ok(format_result_text(&report.result, Some(report))),
    }
}

fn format_result_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["bank"];
    header.extend(Field::ALL.iter().map(|f| f.key()));
    wtr.write_record(&header)?;

    let mut row = vec![result.bank.as_str()];
    row.extend(Field::ALL.iter().map(|f| result.get(*f).unwrap_or("")));
    wtr.write_record(&row)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_result_text(result: &ExtractionResult, report: Option<&ParseReport>) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Bank: {} ({})\n",
        result.bank,
        result.bank.display_name()
    ));
    output.push('\n');

    for field in Field::ALL {
        let value = result.get(field).unwrap_or("-");
        output.push_str(&format!("  {:<18} {}", format!("{}:", field.label()), value));

        if let Some(report) = report {
            output.push_str(&format!(
                "  [text-layer: {}, ocr: {}]",
                report.text_layer_fields.get(field).unwrap_or("-"),
                report.ocr_fields.get(field).unwrap_or("-"),
            ));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "\n{}/{} fields found\n",
        result.fields.found_count(),
        Field::ALL.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardstmt_core::Bank;

    fn sample() -> ExtractionResult {
        let mut fields = FieldSet::default();
        fields.set(Field::DueDate, Some("2024-02-04".to_string()));
        fields.set(Field::Last4Digits, Some("6705".to_string()));
        ExtractionResult::new(Bank::Kotak, fields)
    }

    #[test]
    fn test_csv_has_header_and_empty_cells() {
        let csv = format_result(&sample(), OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("bank,due_date,last_4_digits,credit_limit,available_credit,statement_date")
        );
        assert_eq!(lines.next(), Some("KOTAK,2024-02-04,6705,,,"));
    }

    #[test]
    fn test_text_marks_missing_fields() {
        let text = format_result(&sample(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Bank: KOTAK (Kotak Mahindra Bank)"));
        assert!(text.contains("Credit Limit:"));
        assert!(text.contains("2/5 fields found"));
    }

    #[test]
    fn test_json_includes_sources() {
        let report = ParseReport {
            result: sample(),
            text_layer_text: String::new(),
            ocr_text: String::new(),
            text_layer_fields: sample().fields,
            ocr_fields: FieldSet::default(),
            processing_time_ms: 12,
        };
        let json: serde_json::Value =
            serde_json::from_str(&format_report(&report, OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json["bank"], "KOTAK");
        assert_eq!(json["sources"]["text_layer"]["last_4_digits"], "6705");
        assert!(json["sources"]["ocr"]["due_date"].is_null());
    }
}
