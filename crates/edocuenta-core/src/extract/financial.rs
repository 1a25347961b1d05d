//! Información Financiera extraction: yield and fee figures, grouped the
//! way the document prints them (Rendimiento / Comisiones / Total
//! Comisiones).

use indexmap::IndexMap;
use regex::Regex;

use crate::models::document::StatementText;
use crate::models::summary::FinancialInfo;

const SECTION_MARKER: &str = "Información Financiera";

const RENDIMIENTO_FIELDS: [&str; 6] = [
    "Saldo Promedio",
    "Días del Periodo",
    "Tasa Bruta Anual",
    "Saldo Promedio Gravable",
    "Intereses a Favor (+)",
    "ISR Retenido (-)",
];

const COMISIONES_FIELDS: [&str; 2] = ["Cheques pagados", "Manejo de Cuenta"];

// (label, value is a count/amount pair)
const TOTAL_FIELDS: [(&str, bool); 3] = [
    ("Total Comisiones", false),
    ("Cargos Objetados", true),
    ("Abonos Objetados", true),
];

/// Extract the Información Financiera section from the first page that
/// carries it.
pub fn extract_informacion_financiera(doc: &StatementText) -> Option<FinancialInfo> {
    for page in &doc.pages {
        let text = page.full_text();
        if !text.contains(SECTION_MARKER) {
            continue;
        }

        let mut info = FinancialInfo::default();

        let mut rendimiento = IndexMap::new();
        for field in RENDIMIENTO_FIELDS {
            if field == "Tasa Bruta Anual" {
                // Printed as "Tasa Bruta Anual % 0.000".
                if let Some(value) = labeled_percent_value(&text, field) {
                    rendimiento.insert(format!("{} %", field), value);
                }
            } else if let Some(value) = labeled_value(&text, field) {
                rendimiento.insert(field.to_string(), value);
            }
        }
        if !rendimiento.is_empty() {
            info.rendimiento = Some(rendimiento);
        }

        let mut comisiones = IndexMap::new();
        for field in COMISIONES_FIELDS {
            if field == "Cheques pagados" {
                // Count and amount on consecutive lines.
                if let Some(value) = labeled_pair(&text, field) {
                    comisiones.insert(field.to_string(), value);
                }
            } else if let Some(value) = labeled_value(&text, field) {
                comisiones.insert(field.to_string(), value);
            }
        }
        if !comisiones.is_empty() {
            info.comisiones = Some(comisiones);
        }

        let mut totals = IndexMap::new();
        for (field, is_pair) in TOTAL_FIELDS {
            let value = if is_pair {
                labeled_pair(&text, field)
            } else {
                labeled_value(&text, field)
            };
            if let Some(value) = value {
                totals.insert(field.to_string(), value);
            }
        }
        if !totals.is_empty() {
            info.total_comisiones = Some(totals);
        }

        if !info.is_empty() {
            return Some(info);
        }
    }
    None
}

/// Match `<label>` followed by an amount on the same or the next line.
fn labeled_value(text: &str, label: &str) -> Option<String> {
    let escaped = regex::escape(label);
    let newline = Regex::new(&format!(r"{}\s*\n\s*([0-9,]+\.?\d*)", escaped)).unwrap();
    let inline = Regex::new(&format!(r"{}\s+([0-9,]+\.?\d*)", escaped)).unwrap();

    newline
        .captures(text)
        .or_else(|| inline.captures(text))
        .map(|caps| caps[1].to_string())
}

/// Match `<label> % <value>`.
fn labeled_percent_value(text: &str, label: &str) -> Option<String> {
    let escaped = regex::escape(label);
    let pattern = Regex::new(&format!(r"{}\s+%\s+([0-9,]+\.?\d*)", escaped)).unwrap();
    pattern.captures(text).map(|caps| caps[1].to_string())
}

/// Match `<label>` followed by a count line and an amount line, rendered
/// as "count  amount" like the document's two-column layout.
fn labeled_pair(text: &str, label: &str) -> Option<String> {
    let escaped = regex::escape(label);
    let pattern =
        Regex::new(&format!(r"{}\s*\n\s*(\d+)\s*\n\s*([0-9,]+\.?\d*)", escaped)).unwrap();
    pattern
        .captures(text)
        .map(|caps| format!("{}  {}", &caps[1], &caps[2]))
}
