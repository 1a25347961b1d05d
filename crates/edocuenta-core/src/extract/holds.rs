//! Apartados Vigentes (pending holds) extraction.
//!
//! The section has no reliable table geometry, so it is parsed as a line
//! state machine: a text line opens an entry, the next amount line closes
//! it.

use crate::models::document::StatementText;
use crate::models::summary::Apartado;

use super::patterns::APARTADO_AMOUNT;

const SECTION_START: &str = "Estado de cuenta de Apartados Vigentes";
const HEADER_TOKENS: [&str; 5] = ["Folio", "Nombre Apartado", "Importe Apartado", "Importe Total", "$"];

/// Extract pending-hold entries from the Apartados Vigentes section.
pub fn extract_apartados_vigentes(doc: &StatementText) -> Option<Vec<Apartado>> {
    let mut apartados = Vec::new();

    for page in &doc.pages {
        let text = page.full_text();
        if !text.contains(SECTION_START) {
            continue;
        }

        let mut in_section = false;
        let mut pending_name: Option<String> = None;

        for line in text.lines() {
            let line = line.trim();

            if line.contains(SECTION_START) {
                in_section = true;
                continue;
            }
            if !in_section {
                continue;
            }

            if is_section_end(line) {
                break;
            }
            if HEADER_TOKENS.contains(&line) {
                continue;
            }

            if APARTADO_AMOUNT.is_match(line) {
                if let Some(name) = pending_name.take() {
                    apartados.push(Apartado {
                        nombre_apartado: name,
                        importe_apartado: line.replace(',', ""),
                    });
                }
            } else if !line.is_empty() && pending_name.is_none() {
                pending_name = Some(line.to_string());
            }
        }

        if !apartados.is_empty() {
            break;
        }
    }

    (!apartados.is_empty()).then_some(apartados)
}

fn is_section_end(line: &str) -> bool {
    let normalized = line.split_whitespace().collect::<Vec<_>>().join(" ");
    normalized.contains("No. de Cuenta")
        || normalized.contains("PAGINA")
        || normalized.contains("Total de Apartados")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::PageText;
    use pretty_assertions::assert_eq;

    fn doc_with_text(text: &str) -> StatementText {
        StatementText {
            pages: vec![PageText {
                page_number: 1,
                width: 612.0,
                height: 792.0,
                text: text.to_string(),
                blocks: vec![],
            }],
            language: None,
        }
    }

    #[test]
    fn test_name_amount_pairs() {
        let doc = doc_with_text(
            "Estado de cuenta de Apartados Vigentes\n\
             Folio\nNombre Apartado\nImporte Apartado\n\
             VACACIONES\n1,500.00\n\
             EMERGENCIAS\n26.00\n\
             Total  de Apartados 02",
        );

        let apartados = extract_apartados_vigentes(&doc).unwrap();
        assert_eq!(
            apartados,
            vec![
                Apartado {
                    nombre_apartado: "VACACIONES".to_string(),
                    importe_apartado: "1500.00".to_string(),
                },
                Apartado {
                    nombre_apartado: "EMERGENCIAS".to_string(),
                    importe_apartado: "26.00".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_section_ends_at_page_footer() {
        let doc = doc_with_text(
            "Estado de cuenta de Apartados Vigentes\n\
             AGUINALDO\n300.00\n\
             PAGINA 3/9\n\
             FANTASMA\n999.99",
        );

        let apartados = extract_apartados_vigentes(&doc).unwrap();
        assert_eq!(apartados.len(), 1);
        assert_eq!(apartados[0].nombre_apartado, "AGUINALDO");
    }

    #[test]
    fn test_absent_without_section() {
        let doc = doc_with_text("Detalle de Movimientos");
        assert!(extract_apartados_vigentes(&doc).is_none());
    }

    #[test]
    fn test_orphan_amount_is_ignored() {
        let doc = doc_with_text(
            "Estado de cuenta de Apartados Vigentes\n\
             123.00\n\
             VACACIONES\n1,500.00",
        );

        let apartados = extract_apartados_vigentes(&doc).unwrap();
        assert_eq!(apartados.len(), 1);
        assert_eq!(apartados[0].nombre_apartado, "VACACIONES");
    }
}
