//! Comportamiento extraction: behavior indicators, keyed by the original
//! row labels.

use indexmap::IndexMap;

use crate::models::document::StatementText;

use super::patterns::{
    DEPOSITOS_ABONOS, RETIROS_CARGOS, SALDO_ANTERIOR, SALDO_FINAL, SALDO_PROMEDIO_MINIMO,
};

/// Extract the Comportamiento table from the first page that carries it.
/// Two-column rows (count + amount) are rendered as "count  amount".
pub fn extract_comportamiento(doc: &StatementText) -> Option<IndexMap<String, String>> {
    for page in &doc.pages {
        let text = page.full_text();
        if !text.contains("Comportamiento") {
            continue;
        }

        let mut data = IndexMap::new();

        if let Some(caps) = SALDO_ANTERIOR.captures(&text) {
            data.insert("Saldo Anterior".to_string(), caps[1].to_string());
        }
        if let Some(caps) = SALDO_FINAL.captures(&text) {
            data.insert("Saldo Final".to_string(), caps[1].to_string());
        }
        if let Some(caps) = DEPOSITOS_ABONOS.captures(&text) {
            data.insert(
                "Depósitos / Abonos (+)".to_string(),
                format!("{}  {}", &caps[1], &caps[2]),
            );
        }
        if let Some(caps) = RETIROS_CARGOS.captures(&text) {
            data.insert(
                "Retiros / Cargos (-)".to_string(),
                format!("{}  {}", &caps[1], &caps[2]),
            );
        }
        if let Some(caps) = SALDO_PROMEDIO_MINIMO.captures(&text) {
            data.insert(
                "Saldo Promedio Mínimo Mensual".to_string(),
                caps[1].to_string(),
            );
        }

        if !data.is_empty() {
            return Some(data);
        }
    }
    None
}
