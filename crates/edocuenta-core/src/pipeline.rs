//! End-to-end pipeline: compose the summary, attach metadata, merge the
//! external transaction grid.

use serde_json::Value;
use tracing::info;

use crate::error::Result;
use crate::extract::{extract_metadata, SummaryComposer};
use crate::merge::inject_transaction_details;
use crate::models::config::ExtractorConfig;
use crate::models::document::StatementText;
use crate::models::grid::TransactionGrid;
use crate::models::output::{MergedDocument, StructuredData};

/// Process one statement document into its merged JSON output.
///
/// Pure transformation over in-memory data: every call works on owned,
/// immutable inputs and returns a newly built value, so documents can be
/// processed in parallel by independent callers with no shared state.
pub fn process_statement(
    doc: &StatementText,
    grid: Option<&TransactionGrid>,
    config: &ExtractorConfig,
) -> Result<Value> {
    let composer = SummaryComposer::new(config.clone());
    let summary = composer.compose(doc);
    let metadata = extract_metadata(doc, config);

    let document = MergedDocument {
        metadata,
        structured_data: StructuredData {
            account_summary: summary,
        },
    };

    let mut value = serde_json::to_value(&document)?;
    inject_transaction_details(&mut value, grid)?;

    info!(
        "processed statement: {} page(s), {} external row(s)",
        doc.pages.len(),
        grid.map(|g| g.total_rows).unwrap_or(0)
    );

    Ok(value)
}
