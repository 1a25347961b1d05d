//! Otros productos extraction: the investments table plus the holds
//! footer figures (Total de Apartados, Saldo Global).

use tracing::debug;

use crate::models::document::{PageText, StatementText};
use crate::models::summary::{InvestmentRow, OtherProducts};

use super::spatial::reconstruct_rows;

use super::patterns::{SALDO_GLOBAL, TOTAL_APARTADOS, TOTAL_APARTADOS_GLOBAL};

/// Extract the Otros productos section.
pub fn extract_otros_productos(doc: &StatementText) -> Option<OtherProducts> {
    let mut products = OtherProducts::default();

    for page in &doc.pages {
        let text = page.full_text();

        if products.investments.is_none()
            && (text.contains("Otros productos incluidos") || text.contains("inversiones"))
        {
            let investments = extract_investment_table(page);
            if !investments.is_empty() {
                products.investments = Some(investments);
            }
        }

        if products.total_apartados.is_none() {
            if let Some(caps) = TOTAL_APARTADOS.captures(&text) {
                products.total_apartados = Some(caps[1].to_string());
            }
        }
        if products.saldo_global.is_none() {
            if let Some(caps) = SALDO_GLOBAL.captures(&text) {
                products.saldo_global = Some(format!("$ {}", caps[1].trim()));
            }
        }
        // Older statement layouts join both figures into one line.
        if products.total_apartados.is_none() && products.saldo_global.is_none() {
            if let Some(caps) = TOTAL_APARTADOS_GLOBAL.captures(&text) {
                products.saldo_global = Some(format!("$ {}", caps[1].trim()));
            }
        }
    }

    (!products.is_empty()).then_some(products)
}

/// Parse the investments table from reconstructed visual rows.
///
/// Dense layouts need the tight tolerance; if nothing parses, retry with
/// the loose one.
fn extract_investment_table(page: &PageText) -> Vec<InvestmentRow> {
    for tolerance in [5.0, 10.0] {
        let rows = page_rows(page, tolerance);
        let table = parse_investment_rows(&rows);
        if !table.is_empty() {
            return table;
        }
    }
    Vec::new()
}

fn page_rows(page: &PageText, tolerance: f32) -> Vec<String> {
    if page.blocks.is_empty() {
        return page.full_text().lines().map(|l| l.to_string()).collect();
    }
    reconstruct_rows(&page.blocks, tolerance)
}

fn parse_investment_rows(rows: &[String]) -> Vec<InvestmentRow> {
    let mut table = Vec::new();
    let mut in_table = false;

    for row in rows {
        let upper = row.trim().to_uppercase();

        if upper.contains("CONTRATO") && (upper.contains("PRODUCTO") || upper.contains("TASA")) {
            in_table = true;
            continue;
        }
        if !in_table {
            continue;
        }

        if upper.contains("TOTAL DE APARTADOS")
            || upper.contains("SALDO GLOBAL")
            || upper.contains("DETALLE DE MOVIMIENTOS")
            || (upper.contains("OPER") && upper.contains("LIQ"))
        {
            break;
        }
        // Repeated headers and the GAT legal footnote.
        if upper.contains("CONTRATO")
            || upper.contains("ANTES DE IMPUESTOS")
            || upper.contains("GAT REAL ES EL RENDIMIENTO")
        {
            continue;
        }

        if let Some(parsed) = parse_investment_row(row) {
            table.push(parsed);
        } else {
            debug!("skipping non-investment row: {:?}", row);
        }
    }

    table
}

/// Parse one investment row from its whitespace tokens, anchored on the
/// right (total comisiones, GAT real, GAT nominal) with the rate token
/// located by its `%`.
fn parse_investment_row(row: &str) -> Option<InvestmentRow> {
    let tokens: Vec<&str> = row.split_whitespace().collect();
    if tokens.len() < 4 {
        return None;
    }

    let contrato = tokens[0];
    let valid_contrato = contrato.chars().all(|c| c.is_ascii_digit())
        || contrato.to_uppercase().contains("N/A")
        || contrato.eq_ignore_ascii_case("NA");
    if !valid_contrato {
        // Filters out dates, balances and stray text that drift into the
        // table region.
        return None;
    }

    let total_comisiones = tokens[tokens.len() - 1];
    let gat_real = tokens[tokens.len() - 2];
    let gat_nominal = tokens[tokens.len() - 3];

    let mut tasa = "N/A";
    let mut tasa_idx = None;
    for i in (1..tokens.len().saturating_sub(3)).rev() {
        if tokens[i].contains('%') {
            tasa = tokens[i];
            tasa_idx = Some(i);
            break;
        }
    }

    let producto = match tasa_idx {
        Some(idx) => tokens[1..idx].join(" "),
        None => tokens[1..tokens.len() - 3].join(" "),
    };

    Some(InvestmentRow {
        contrato: contrato.to_string(),
        producto,
        tasa: tasa.to_string(),
        gat_nominal: gat_nominal.to_string(),
        gat_real: gat_real.to_string(),
        total_comisiones: total_comisiones.to_string(),
    })
}
