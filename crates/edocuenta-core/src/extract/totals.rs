//! Total de Movimientos extraction.

use crate::models::document::StatementText;
use crate::models::summary::TotalMovimientos;

use super::patterns::{
    TOTAL_IMPORTE_ABONOS, TOTAL_IMPORTE_CARGOS, TOTAL_MOVIMIENTOS_ABONOS,
    TOTAL_MOVIMIENTOS_CARGOS,
};

/// Extract the Total de Movimientos section from the first page that
/// contains it. Amounts are comma-normalized; counts are plain integers.
pub fn extract_total_movimientos(doc: &StatementText) -> Option<TotalMovimientos> {
    for page in &doc.pages {
        let text = page.full_text();
        if !text.contains("Total de Movimientos") {
            continue;
        }

        let totals = TotalMovimientos {
            total_importe_cargos: TOTAL_IMPORTE_CARGOS
                .captures(&text)
                .map(|c| c[1].replace(',', "")),
            total_movimientos_cargos: TOTAL_MOVIMIENTOS_CARGOS
                .captures(&text)
                .and_then(|c| c[1].parse().ok()),
            total_importe_abonos: TOTAL_IMPORTE_ABONOS
                .captures(&text)
                .map(|c| c[1].replace(',', "")),
            total_movimientos_abonos: TOTAL_MOVIMIENTOS_ABONOS
                .captures(&text)
                .and_then(|c| c[1].parse().ok()),
        };

        if !totals.is_empty() {
            return Some(totals);
        }
    }
    None
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
    fn test_totals_with_values_on_next_line() {
        let doc = doc_with_text(
            "Total de Movimientos\n\
             TOTAL IMPORTE CARGOS\n17,425.00\n\
             TOTAL MOVIMIENTOS CARGOS\n12\n\
             TOTAL IMPORTE ABONOS\n24,360.00\n\
             TOTAL MOVIMIENTOS ABONOS\n3",
        );

        let totals = extract_total_movimientos(&doc).unwrap();
        assert_eq!(totals.total_importe_cargos.as_deref(), Some("17425.00"));
        assert_eq!(totals.total_movimientos_cargos, Some(12));
        assert_eq!(totals.total_importe_abonos.as_deref(), Some("24360.00"));
        assert_eq!(totals.total_movimientos_abonos, Some(3));
    }

    #[test]
    fn test_partial_totals_still_returned() {
        let doc = doc_with_text("Total de Movimientos\nTOTAL MOVIMIENTOS CARGOS 7");
        let totals = extract_total_movimientos(&doc).unwrap();
        assert_eq!(totals.total_movimientos_cargos, Some(7));
        assert_eq!(totals.total_importe_cargos, None);
    }

    #[test]
    fn test_absent_without_section_marker() {
        let doc = doc_with_text("TOTAL IMPORTE CARGOS 17,425.00");
        assert!(extract_total_movimientos(&doc).is_none());
    }
}
