//! Common regex patterns for statement field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Customer/account header fields. Keys in the output keep the original
    // label text of the document.
    pub static ref PERIODO: Regex = Regex::new(
        r"(?i)Periodo\s+DEL\s+([\d/]+)\s+AL\s+([\d/]+)"
    ).unwrap();

    pub static ref FECHA_CORTE: Regex = Regex::new(
        r"(?i)Fecha\s+de\s+Corte\s+([\d/]+)"
    ).unwrap();

    pub static ref NO_CUENTA: Regex = Regex::new(
        r"(?i)No\.\s+de\s+Cuenta\s+(\d+)"
    ).unwrap();

    // Client number values may contain spaces, dots and dashes
    // (e.g. "B 023 7524"); [ \t] instead of \s keeps the capture from
    // running onto the next header row.
    pub static ref NO_CLIENTE: Regex = Regex::new(
        r"(?i)No[\.\s]*de\s+Cliente[:\.\s]*([A-Z0-9]+(?:[ \t\.\-][A-Z0-9]+)*)"
    ).unwrap();

    pub static ref RFC: Regex = Regex::new(
        r"(?i)R\.F\.C\s+([A-Z0-9]+)"
    ).unwrap();

    pub static ref CLABE: Regex = Regex::new(
        r"(?i)No\.\s+Cuenta\s+CLABE\s+([\d ]+)"
    ).unwrap();

    pub static ref PAGINA: Regex = Regex::new(
        r"(?i)PAGINA\s+(\d+\s*/\s*\d+)"
    ).unwrap();

    // Statement period ranges.
    pub static ref PERIOD_DEL: Regex = Regex::new(
        r"(?i)DEL\s+(\d{1,2}/\d{1,2}/\d{2,4})\s+AL\s+(\d{1,2}/\d{1,2}/\d{2,4})"
    ).unwrap();

    pub static ref PERIOD_DASH: Regex = Regex::new(
        r"(\d{1,2}/\d{1,2}/\d{2,4})\s*[-–]\s*(\d{1,2}/\d{1,2}/\d{2,4})"
    ).unwrap();

    // Account numbers are 10-18 contiguous digits.
    pub static ref ACCOUNT_NUMBER: Regex = Regex::new(
        r"\b\d{10,18}\b"
    ).unwrap();

    // Total de Movimientos figures. Values may sit on the same line or on
    // the following line.
    pub static ref TOTAL_IMPORTE_CARGOS: Regex = Regex::new(
        r"(?i)TOTAL\s+IMPORTE\s+CARGOS[\s:]*([0-9,]+\.?\d*)"
    ).unwrap();

    pub static ref TOTAL_MOVIMIENTOS_CARGOS: Regex = Regex::new(
        r"(?i)TOTAL\s+MOVIMIENTOS\s+CARGOS[\s:]*(\d+)"
    ).unwrap();

    pub static ref TOTAL_IMPORTE_ABONOS: Regex = Regex::new(
        r"(?i)TOTAL\s+IMPORTE\s+ABONOS[\s:]*([0-9,]+\.?\d*)"
    ).unwrap();

    pub static ref TOTAL_MOVIMIENTOS_ABONOS: Regex = Regex::new(
        r"(?i)TOTAL\s+MOVIMIENTOS\s+ABONOS[\s:]*(\d+)"
    ).unwrap();

    // Comportamiento rows. Labels are matched with their printed casing;
    // the optional "( + )" / "(-)" markers may carry inner spaces.
    pub static ref SALDO_ANTERIOR: Regex = Regex::new(
        r"Saldo Anterior\s*(?:\([\+\s]+\))?\s*(?:\n|:)?\s*([0-9,]+\.?\d*)"
    ).unwrap();

    pub static ref SALDO_FINAL: Regex = Regex::new(
        r"Saldo Final\s*(?:\([\+\s]+\))?\s*(?:\n|:)?\s*([0-9,]+\.?\d*)"
    ).unwrap();

    pub static ref DEPOSITOS_ABONOS: Regex = Regex::new(
        r"Depósitos / Abonos\s*(?:\(\+\))?\s*\n\s*(\d+)\s*\n\s*([0-9,]+\.?\d*)"
    ).unwrap();

    pub static ref RETIROS_CARGOS: Regex = Regex::new(
        r"Retiros / Cargos\s*(?:\(-\))?\s*\n\s*(\d+)\s*\n\s*([0-9,]+\.?\d*)"
    ).unwrap();

    pub static ref SALDO_PROMEDIO_MINIMO: Regex = Regex::new(
        r"Saldo Promedio Mínimo Mensual:?\s*\n?\s*([0-9,]+\.?\d*)"
    ).unwrap();

    // Right-anchored tokens of the summary table line parser.
    pub static ref TRAILING_COLUMN_CODE: Regex = Regex::new(
        r"(?:\s|^)([A-Z0-9]{1,3})\s*$"
    ).unwrap();

    pub static ref TRAILING_PERCENT: Regex = Regex::new(
        r"(?:\s|^)(-?[\d,]+(?:\.\d+)?%)\s*$"
    ).unwrap();

    pub static ref TRAILING_AMOUNT: Regex = Regex::new(
        r"(?:\s|^)(-?\d{1,3}(?:,\d{3})*\.\d{2})\s*$"
    ).unwrap();

    // Apartados Vigentes rows: an amount line completes the entry started
    // by the preceding name line.
    pub static ref APARTADO_AMOUNT: Regex = Regex::new(
        r"^[0-9,]+\.\d{2}$"
    ).unwrap();

    // Otros productos footer figures. Saldo Global values stay on the
    // label's own line ([ \t], never \n).
    pub static ref TOTAL_APARTADOS: Regex = Regex::new(
        r"(?i)Total\s+de\s+Apartados[\s:]*(\d+)"
    ).unwrap();

    pub static ref SALDO_GLOBAL: Regex = Regex::new(
        r"(?i)Saldo\s+Global[\s:]*\$?[ \t]*([\d,\.]+(?:[ \t]+[\d,\.]+)*)"
    ).unwrap();

    pub static ref TOTAL_APARTADOS_GLOBAL: Regex = Regex::new(
        r"(?i)Total\s+de\s+Apartados\s+en\s+Global[\s:]*\$?[ \t]*([\d,\. ]+)"
    ).unwrap();

    // Standard comma-grouped amount with two decimals.
    pub static ref AMOUNT_STANDARD: Regex = Regex::new(
        r"([\d,]+\.\d{2})"
    ).unwrap();
}
