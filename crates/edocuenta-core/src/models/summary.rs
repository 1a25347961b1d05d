//! Account summary model.
//!
//! The serde field order of [`AccountSummary`] IS the canonical group order
//! of the output document: it is the externally observed order of sections
//! in the source statement and downstream consumers depend on it. New
//! groups must be inserted at their document position, never appended.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered account summary for one statement.
///
/// Absent groups are omitted from serialization entirely; presence of a key
/// is itself meaningful. The `transactions` placeholder is the only always-
/// present group: the merge adapter replaces it with `transaction_details`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Customer/account header fields, keyed by their original label text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_info: Option<IndexMap<String, String>>,

    /// Per-page header info (page number, account number, client number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_info: Option<Vec<PageInfo>>,

    /// Branch fields (SUCURSAL, DIRECCION, PLAZA, TELEFONO).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_info: Option<IndexMap<String, String>>,

    /// Opening balance, when stated by the summary table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_balance: Option<Decimal>,

    /// Total deposits, when stated by the summary table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposits: Option<Decimal>,

    /// Total withdrawals, when stated by the summary table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdrawals: Option<Decimal>,

    /// Closing balance, when stated by the summary table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_balance: Option<Decimal>,

    /// Información Financiera section (yield and fees).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub informacion_financiera: Option<FinancialInfo>,

    /// Comportamiento section (behavior indicators).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comportamiento: Option<IndexMap<String, String>>,

    /// Otros productos section (investments, holds totals).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otros_productos: Option<OtherProducts>,

    /// Internal transaction placeholder. Always empty: row-level ledger
    /// data comes from the external grid extractor and is injected by the
    /// merge adapter at this exact position.
    #[serde(default)]
    pub transactions: Vec<Value>,

    /// Total de Movimientos section (movement counts and totals).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_movimientos: Option<TotalMovimientos>,

    /// Estado de cuenta de Apartados Vigentes section (pending holds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartados_vigentes: Option<Vec<Apartado>>,

    /// Cuadro resumen y gráfico de movimientos rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuadro_resumen: Option<Vec<SummaryTableRow>>,
}

/// Header info repeated on every page of the statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// 1-based page index, as a string to match the document rendering.
    pub page_index: String,

    /// Account number printed in the page header.
    #[serde(rename = "No. de Cuenta", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Client number printed in the page header.
    #[serde(rename = "No. de Cliente", skip_serializing_if = "Option::is_none")]
    pub client_number: Option<String>,

    /// "PAGINA n/m" marker.
    #[serde(rename = "PAGINA", skip_serializing_if = "Option::is_none")]
    pub pagina: Option<String>,
}

/// Total de Movimientos figures. Amount strings are comma-normalized;
/// counts are plain integers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TotalMovimientos {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_importe_cargos: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_movimientos_cargos: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_importe_abonos: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_movimientos_abonos: Option<u32>,
}

impl TotalMovimientos {
    /// True when no field was found in the document.
    pub fn is_empty(&self) -> bool {
        self.total_importe_cargos.is_none()
            && self.total_movimientos_cargos.is_none()
            && self.total_importe_abonos.is_none()
            && self.total_movimientos_abonos.is_none()
    }
}

/// One pending hold (apartado) entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Apartado {
    /// Hold name as printed.
    pub nombre_apartado: String,

    /// Hold amount, comma-normalized.
    pub importe_apartado: String,
}

/// Información Financiera: three nested label/value groups, keyed by the
/// original label text of each row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialInfo {
    #[serde(rename = "Rendimiento", skip_serializing_if = "Option::is_none")]
    pub rendimiento: Option<IndexMap<String, String>>,

    #[serde(rename = "Comisiones", skip_serializing_if = "Option::is_none")]
    pub comisiones: Option<IndexMap<String, String>>,

    #[serde(rename = "Total Comisiones", skip_serializing_if = "Option::is_none")]
    pub total_comisiones: Option<IndexMap<String, String>>,
}

impl FinancialInfo {
    /// True when none of the three groups matched.
    pub fn is_empty(&self) -> bool {
        self.rendimiento.is_none() && self.comisiones.is_none() && self.total_comisiones.is_none()
    }
}

/// Otros productos incluidos en el estado de cuenta.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtherProducts {
    #[serde(
        rename = "Otros productos incluidos en el estado de cuenta (inversiones)",
        skip_serializing_if = "Option::is_none"
    )]
    pub investments: Option<Vec<InvestmentRow>>,

    #[serde(rename = "Total de Apartados", skip_serializing_if = "Option::is_none")]
    pub total_apartados: Option<String>,

    #[serde(rename = "Saldo Global", skip_serializing_if = "Option::is_none")]
    pub saldo_global: Option<String>,
}

impl OtherProducts {
    /// True when no product data was found.
    pub fn is_empty(&self) -> bool {
        self.investments.is_none() && self.total_apartados.is_none() && self.saldo_global.is_none()
    }
}

/// One row of the investments table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvestmentRow {
    #[serde(rename = "Contrato")]
    pub contrato: String,

    #[serde(rename = "Producto")]
    pub producto: String,

    #[serde(rename = "Tasa de Interés anual")]
    pub tasa: String,

    #[serde(rename = "GAT Nominal")]
    pub gat_nominal: String,

    #[serde(rename = "GAT Real")]
    pub gat_real: String,

    #[serde(rename = "Total de comisiones")]
    pub total_comisiones: String,
}

/// One parsed row of the percentage/amount summary table
/// (`<concept> <amount> <percent>% <columnCode>`).
///
/// Numeric tokens keep their original formatted text; downstream consumers
/// expect the document's own rendering, not re-formatted numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryTableRow {
    #[serde(rename = "Concepto")]
    pub concept: String,

    #[serde(rename = "Cantidad")]
    pub amount: String,

    #[serde(rename = "Porcentaje", skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,

    #[serde(rename = "Columna", skip_serializing_if = "Option::is_none")]
    pub column_code: Option<String>,
}
