//! Summary field composer: runs every field-group extractor against one
//! document and assembles the ordered account summary.

use tracing::{debug, info};

use crate::models::config::ExtractorConfig;
use crate::models::document::StatementText;
use crate::models::summary::AccountSummary;

use super::behavior::extract_comportamiento;
use super::branch::extract_branch_info;
use super::customer::extract_customer_info;
use super::financial::extract_informacion_financiera;
use super::headers::extract_pages_info;
use super::holds::extract_apartados_vigentes;
use super::products::extract_otros_productos;
use super::resumen::{derive_balances, extract_cuadro_resumen};
use super::totals::extract_total_movimientos;

/// Composes a complete [`AccountSummary`] for one document.
///
/// Every group extractor returns absence for text it cannot interpret;
/// one damaged section never prevents extraction of the rest. The summary
/// carries the internal `transactions` placeholder for the merge adapter
/// to replace.
pub struct SummaryComposer {
    config: ExtractorConfig,
}

impl SummaryComposer {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Assemble the summary in the canonical group order.
    pub fn compose(&self, doc: &StatementText) -> AccountSummary {
        let mut summary = AccountSummary::default();

        summary.customer_info = extract_customer_info(doc, &self.config);
        summary.pages_info = extract_pages_info(doc);
        summary.branch_info = extract_branch_info(doc);

        summary.cuadro_resumen = extract_cuadro_resumen(doc, &self.config);
        if let Some(rows) = &summary.cuadro_resumen {
            let balances = derive_balances(rows, &self.config);
            summary.initial_balance = balances.initial_balance;
            summary.deposits = balances.deposits;
            summary.withdrawals = balances.withdrawals;
            summary.final_balance = balances.final_balance;
        }

        summary.informacion_financiera = extract_informacion_financiera(doc);
        summary.comportamiento = extract_comportamiento(doc);
        summary.otros_productos = extract_otros_productos(doc);
        summary.total_movimientos = extract_total_movimientos(doc);
        summary.apartados_vigentes = extract_apartados_vigentes(doc);

        let present = [
            ("customer_info", summary.customer_info.is_some()),
            ("pages_info", summary.pages_info.is_some()),
            ("branch_info", summary.branch_info.is_some()),
            ("cuadro_resumen", summary.cuadro_resumen.is_some()),
            ("informacion_financiera", summary.informacion_financiera.is_some()),
            ("comportamiento", summary.comportamiento.is_some()),
            ("otros_productos", summary.otros_productos.is_some()),
            ("total_movimientos", summary.total_movimientos.is_some()),
            ("apartados_vigentes", summary.apartados_vigentes.is_some()),
        ];
        for (group, found) in present {
            debug!("group {}: {}", group, if found { "extracted" } else { "absent" });
        }
        info!(
            "composed account summary from {} page(s), {} group(s) present",
            doc.pages.len(),
            present.iter().filter(|(_, f)| *f).count()
        );

        summary
    }
}

impl Default for SummaryComposer {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::PageText;
    use pretty_assertions::assert_eq;

    fn page(text: &str) -> PageText {
        PageText {
            page_number: 1,
            width: 612.0,
            height: 792.0,
            text: text.to_string(),
            blocks: vec![],
        }
    }

    #[test]
    fn test_compose_full_statement() {
        let doc = StatementText {
            pages: vec![page(
                "Periodo DEL 01/06/2024 AL 30/06/2024\n\
                 No. de Cuenta 2960296619\n\
                 PAGINA 1/1\n\
                 SUCURSAL: 5389 CIHUATLAN DIRECCION: ALVARO OBREGON 26 PLAZA: CIHUATLAN TELEFONO: 6890000\n\
                 Cuadro resumen y gráfico de movimientos del período\n\
                 Saldo Inicial 12,383.20 5.29% A\n\
                 Saldo Final 31,858.78 13.64% F\n\
                 Total de Movimientos\n\
                 TOTAL MOVIMIENTOS CARGOS 12",
            )],
            language: None,
        };

        let summary = SummaryComposer::default().compose(&doc);

        assert!(summary.customer_info.is_some());
        assert!(summary.pages_info.is_some());
        assert!(summary.branch_info.is_some());
        assert!(summary.cuadro_resumen.is_some());
        assert!(summary.total_movimientos.is_some());
        assert!(summary.initial_balance.is_some());
        assert!(summary.final_balance.is_some());
        assert!(summary.transactions.is_empty());

        // Absent sections stay absent.
        assert!(summary.informacion_financiera.is_none());
        assert!(summary.apartados_vigentes.is_none());
    }

    #[test]
    fn test_compose_empty_document() {
        let summary = SummaryComposer::default().compose(&StatementText::default());

        assert!(summary.customer_info.is_none());
        assert!(summary.branch_info.is_none());
        assert!(summary.cuadro_resumen.is_none());
        assert!(summary.transactions.is_empty());
    }

    #[test]
    fn test_damaged_section_does_not_block_others() {
        let doc = StatementText {
            pages: vec![page(
                // A mangled summary table and a valid branch line.
                "Cuadro resumen\n@@@###???\n\
                 SUCURSAL: 0044 CENTRO PLAZA: GUADALAJARA",
            )],
            language: None,
        };

        let summary = SummaryComposer::default().compose(&doc);
        assert!(summary.cuadro_resumen.is_none());

        let branch = summary.branch_info.unwrap();
        assert_eq!(branch["SUCURSAL"], "0044 CENTRO");
        assert_eq!(branch["PLAZA"], "GUADALAJARA");
    }
}
