//! External transaction-grid model (Input B).
//!
//! The grid is produced by an upstream table-extraction collaborator and
//! passed through to the merged document mostly verbatim; rows keep every
//! field the extractor emitted.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Externally produced transaction-grid extraction result.
///
/// `total_rows` and `pages` are required; a grid JSON missing either fails
/// deserialization and is treated as malformed by the merge adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionGrid {
    /// Source PDF the grid was extracted from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,

    /// Document type tag reported by the grid extractor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,

    /// Page count reported by the grid extractor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,

    /// Aggregate row count over all pages.
    pub total_rows: u64,

    /// Extraction session count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<u64>,

    /// Per-page row data.
    pub pages: Vec<GridPage>,
}

impl TransactionGrid {
    /// An explicitly empty grid, used when the external extraction is
    /// absent or malformed.
    pub fn empty() -> Self {
        Self {
            source_file: None,
            document_type: None,
            total_pages: None,
            total_rows: 0,
            sessions: None,
            pages: Vec::new(),
        }
    }

    /// Deserialize a grid from JSON, returning `None` for anything that
    /// does not carry the required row/page structure.
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// Rows extracted from one page of the transaction table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridPage {
    /// 1-based page index in the source document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,

    /// Ledger rows, verbatim from the grid extractor.
    pub rows: Vec<GridRow>,
}

/// One ledger row.
///
/// Only the two date fields are named: `fecha_oper` is the primary date
/// token as printed (e.g. "21/JUN"); `fecha_oper_complete` is the
/// extractor's optional resolved date. Precedence between the two when
/// they disagree is unspecified upstream, so both are carried unchanged.
/// Every other column travels in `fields`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_oper: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_oper_complete: Option<String>,

    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}
