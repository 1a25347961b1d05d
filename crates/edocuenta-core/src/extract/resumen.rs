//! Cuadro resumen extraction: the percentage/amount summary table.
//!
//! The table's cells arrive as separate OCR blocks, so pages are first
//! rebuilt into visual rows, then each row goes through the right-anchored
//! tabular line parser. Rows that do not carry an amount anchor are
//! dropped whole.

use rust_decimal::Decimal;

use crate::models::config::ExtractorConfig;
use crate::models::document::{PageText, StatementText};
use crate::models::summary::SummaryTableRow;

use super::amounts::parse_amount;
use super::spatial::reconstruct_rows;
use super::tabular::parse_summary_line;

/// Extract the summary table from the first page that carries one.
pub fn extract_cuadro_resumen(
    doc: &StatementText,
    config: &ExtractorConfig,
) -> Option<Vec<SummaryTableRow>> {
    for page in &doc.pages {
        let rows = page_rows(page, config);

        let mut table = Vec::new();
        let mut in_table = false;

        for row in rows {
            let clean = row.trim().replace(['–', '—'], "-");
            let upper = clean.to_uppercase();

            // Three ways into the table: the section header, the column
            // header row, or the first content row itself.
            if upper.replace(' ', "").contains("CUADRORESUMEN") {
                in_table = true;
                continue;
            }
            if upper.contains("CONCEPTO") && upper.contains("CANTIDAD") {
                in_table = true;
                continue;
            }
            if !in_table && upper.starts_with("SALDO INICIAL") {
                in_table = true;
            }
            if !in_table {
                continue;
            }

            if upper.contains("TOTAL") {
                break;
            }
            if upper.contains("NOTA") && clean.contains(':') {
                break;
            }
            if upper.contains("PAGINA") || upper.contains("PAGE") {
                continue;
            }
            if clean.len() < 5 {
                continue;
            }

            if let Some(parsed) = parse_summary_line(&clean) {
                table.push(parsed);
            }
        }

        if !table.is_empty() {
            return Some(table);
        }
    }
    None
}

/// Visual rows for a page; falls back to plain text lines when the OCR
/// collaborator supplied no positioned blocks.
fn page_rows(page: &PageText, config: &ExtractorConfig) -> Vec<String> {
    if page.blocks.is_empty() {
        return page.full_text().lines().map(|l| l.to_string()).collect();
    }
    reconstruct_rows(&page.blocks, config.spatial.row_tolerance)
}

/// Scalar balances stated by the summary table.
#[derive(Debug, Clone, Default)]
pub struct SummaryBalances {
    pub initial_balance: Option<Decimal>,
    pub deposits: Option<Decimal>,
    pub withdrawals: Option<Decimal>,
    pub final_balance: Option<Decimal>,
}

/// Derive the scalar balance fields from parsed summary rows. Multiple
/// deposit/withdrawal rows accumulate; balances take the first stated
/// value. Nothing is inferred from transaction data.
pub fn derive_balances(rows: &[SummaryTableRow], config: &ExtractorConfig) -> SummaryBalances {
    let mut balances = SummaryBalances::default();

    for row in rows {
        let concept = row.concept.to_lowercase();
        let Some(amount) = parse_amount(&row.amount, &config.currency) else {
            continue;
        };

        if concept.contains("saldo inicial") {
            balances.initial_balance.get_or_insert(amount);
        } else if concept.contains("saldo final") {
            balances.final_balance.get_or_insert(amount);
        } else if concept.contains("depósito") || concept.contains("deposito") {
            balances.deposits = Some(balances.deposits.unwrap_or_default() + amount);
        } else if concept.contains("retiro") {
            balances.withdrawals = Some(balances.withdrawals.unwrap_or_default() + amount);
        }
    }

    balances
}
