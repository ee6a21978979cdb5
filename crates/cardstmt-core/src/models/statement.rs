//! Statement data models: issuing bank, extracted fields, and source tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Issuing institution of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bank {
    Hdfc,
    Icici,
    Kotak,
    Amex,
    CapitalOne,
    /// No marker matched.
    #[default]
    Unknown,
}

impl Bank {
    /// Supported institutions, in detection priority order.
    pub const SUPPORTED: [Bank; 5] = [
        Bank::Hdfc,
        Bank::Icici,
        Bank::Kotak,
        Bank::Amex,
        Bank::CapitalOne,
    ];

    /// Label used in output and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bank::Hdfc => "HDFC",
            Bank::Icici => "ICICI",
            Bank::Kotak => "KOTAK",
            Bank::Amex => "AMEX",
            Bank::CapitalOne => "CAPITAL_ONE",
            Bank::Unknown => "UNKNOWN",
        }
    }

    /// Full institution name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Bank::Hdfc => "HDFC Bank",
            Bank::Icici => "ICICI Bank",
            Bank::Kotak => "Kotak Mahindra Bank",
            Bank::Amex => "American Express",
            Bank::CapitalOne => "Capital One",
            Bank::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the five extracted statement fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    DueDate,
    #[serde(rename = "last_4_digits")]
    Last4Digits,
    CreditLimit,
    AvailableCredit,
    StatementDate,
}

impl Field {
    /// All fields, in output order.
    pub const ALL: [Field; 5] = [
        Field::DueDate,
        Field::Last4Digits,
        Field::CreditLimit,
        Field::AvailableCredit,
        Field::StatementDate,
    ];

    /// Snake-case key, matching the serialized field name.
    pub fn key(&self) -> &'static str {
        match self {
            Field::DueDate => "due_date",
            Field::Last4Digits => "last_4_digits",
            Field::CreditLimit => "credit_limit",
            Field::AvailableCredit => "available_credit",
            Field::StatementDate => "statement_date",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::DueDate => "Due Date",
            Field::Last4Digits => "Last 4 Digits",
            Field::CreditLimit => "Credit Limit",
            Field::AvailableCredit => "Available Credit",
            Field::StatementDate => "Statement Date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which raw-text acquisition path produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceTag {
    /// Embedded text recovered from the document.
    TextLayer,
    /// Text recognized from rasterized pages.
    Ocr,
}

impl SourceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::TextLayer => "text-layer",
            SourceTag::Ocr => "ocr",
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five independently optional statement fields.
///
/// Dates are `YYYY-MM-DD` when the raw value was recognized, otherwise the
/// trimmed raw value. Amounts keep only digits, commas, and the decimal point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    pub due_date: Option<String>,
    pub last_4_digits: Option<String>,
    pub credit_limit: Option<String>,
    pub available_credit: Option<String>,
    pub statement_date: Option<String>,
}

impl FieldSet {
    /// Get a field value.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Set a field value.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    /// Number of fields that hold a value.
    pub fn found_count(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    /// Whether no field holds a value.
    pub fn is_empty(&self) -> bool {
        self.found_count() == 0
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::DueDate => &self.due_date,
            Field::Last4Digits => &self.last_4_digits,
            Field::CreditLimit => &self.credit_limit,
            Field::AvailableCredit => &self.available_credit,
            Field::StatementDate => &self.statement_date,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::DueDate => &mut self.due_date,
            Field::Last4Digits => &mut self.last_4_digits,
            Field::CreditLimit => &mut self.credit_limit,
            Field::AvailableCredit => &mut self.available_credit,
            Field::StatementDate => &mut self.statement_date,
        }
    }
}

/// Final extraction result for one statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Detected issuing bank.
    pub bank: Bank,

    /// Extracted field values.
    #[serde(flatten)]
    pub fields: FieldSet,
}

impl ExtractionResult {
    /// Result for a document where nothing could be read.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn new(bank: Bank, fields: FieldSet) -> Self {
        Self { bank, fields }
    }

    /// Get a field value.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(field)
    }
}
