//! External-source merge adapter.
//!
//! Combines a composed summary document with the externally produced
//! transaction grid: the internal `transactions` placeholder is removed
//! and a single `transaction_details` key carrying the grid is inserted
//! at exactly the placeholder's former position, so the group order
//! (transaction details, then totals, then pending holds, then the rest)
//! is preserved. Applying the adapter to an already-merged document is a
//! no-op.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::MergeError;
use crate::models::grid::TransactionGrid;

/// Key of the internal placeholder removed by the merge.
pub const TRANSACTIONS_PLACEHOLDER_KEY: &str = "transactions";

/// Key under which the external grid lands in the summary.
pub const TRANSACTION_DETAILS_KEY: &str = "transaction_details";

/// Inject the external transaction grid into a merged-document JSON value.
///
/// `grid: None` (or a grid the caller failed to validate) still yields a
/// well-formed document whose `transaction_details` group reports zero
/// rows; the summary is never omitted. Structural violations of the
/// document itself (missing `structured_data`, a non-object summary) are
/// the only error cases.
pub fn inject_transaction_details(
    document: &mut Value,
    grid: Option<&TransactionGrid>,
) -> Result<(), MergeError> {
    let summary = account_summary_mut(document)?;

    // Idempotence: a second invocation leaves the document untouched.
    if summary.contains_key(TRANSACTION_DETAILS_KEY) {
        debug!("transaction_details already present, skipping re-insertion");
        return Ok(());
    }

    let details = match grid {
        Some(grid) => grid_to_value(grid),
        None => {
            warn!("external transaction grid absent or malformed, emitting zero rows");
            grid_to_value(&TransactionGrid::empty())
        }
    };

    let old = std::mem::take(summary);
    let mut inserted = false;

    for (key, value) in old {
        if key == TRANSACTIONS_PLACEHOLDER_KEY {
            // The external grid replaces the placeholder in place; the
            // placeholder's own content is dropped.
            summary.insert(TRANSACTION_DETAILS_KEY.to_string(), details.clone());
            inserted = true;
        } else {
            if key == "total_movimientos" && !inserted {
                summary.insert(TRANSACTION_DETAILS_KEY.to_string(), details.clone());
                inserted = true;
            }
            summary.insert(key, value);
        }
    }

    if !inserted {
        summary.insert(TRANSACTION_DETAILS_KEY.to_string(), details);
    }

    Ok(())
}

fn account_summary_mut(document: &mut Value) -> Result<&mut Map<String, Value>, MergeError> {
    let root = document
        .as_object_mut()
        .ok_or(MergeError::InvalidType { field: "document", expected: "an object" })?;

    let structured = root
        .get_mut("structured_data")
        .ok_or(MergeError::MissingField("structured_data"))?
        .as_object_mut()
        .ok_or(MergeError::InvalidType { field: "structured_data", expected: "an object" })?;

    structured
        .get_mut("account_summary")
        .ok_or(MergeError::MissingField("account_summary"))?
        .as_object_mut()
        .ok_or(MergeError::InvalidType { field: "account_summary", expected: "an object" })
}

fn grid_to_value(grid: &TransactionGrid) -> Value {
    // TransactionGrid always serializes cleanly: every field is a plain
    // serde type.
    serde_json::to_value(grid).unwrap_or_else(|_| Value::Object(Map::new()))
}
