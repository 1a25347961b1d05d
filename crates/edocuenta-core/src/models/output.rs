//! Final output model: document metadata plus the structured summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::summary::AccountSummary;

/// Statement period range.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

/// Document-level metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document type tag (from configuration, not hardcoded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,

    /// Issuing bank (from configuration, not hardcoded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,

    /// Account number detected in the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Statement period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Number of pages in the source document.
    pub total_pages: u32,

    /// Detected document language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Structured data wrapper, mirroring the output schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredData {
    pub account_summary: AccountSummary,
}

/// The final artifact: metadata plus the ordered account summary.
///
/// After the merge adapter runs, the summary holds exactly one transaction
/// representation (`transaction_details`, sourced from the external grid)
/// and never the internal placeholder list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergedDocument {
    pub metadata: Metadata,
    pub structured_data: StructuredData,
}
