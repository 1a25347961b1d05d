//! Tabular line parsing for the summary table.
//!
//! Rows have the shape `<concept> <amount> <percent>% <columnCode>`. The
//! trailing tokens are the structurally reliable anchor, so parsing runs
//! right to left: strip the column code, strip the percentage, strip the
//! amount, and whatever remains is the concept. The amount is mandatory;
//! a line without one is rejected whole, never emitted as a partial
//! record. Tokens keep the document's own formatting.

use crate::models::summary::SummaryTableRow;

use super::patterns::{TRAILING_AMOUNT, TRAILING_COLUMN_CODE, TRAILING_PERCENT};

/// Parse one cleaned summary-table line, or `None` if it does not match
/// the expected shape.
pub fn parse_summary_line(line: &str) -> Option<SummaryTableRow> {
    let mut rest = line.trim();

    let mut column_code = None;
    if let Some(caps) = TRAILING_COLUMN_CODE.captures(rest) {
        let token = caps.get(1).unwrap();
        column_code = Some(token.as_str().to_string());
        rest = rest[..token.start()].trim_end();
    }

    let mut percentage = None;
    if let Some(caps) = TRAILING_PERCENT.captures(rest) {
        let token = caps.get(1).unwrap();
        percentage = Some(token.as_str().to_string());
        rest = rest[..token.start()].trim_end();
    }

    // The amount anchors the whole row.
    let caps = TRAILING_AMOUNT.captures(rest)?;
    let token = caps.get(1).unwrap();
    let amount = token.as_str().to_string();
    rest = rest[..token.start()].trim_end();

    let concept = rest.trim();
    if concept.is_empty() {
        return None;
    }

    Some(SummaryTableRow {
        concept: concept.to_string(),
        amount,
        percentage,
        column_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_row() {
        let row = parse_summary_line("Saldo Inicial 12,383.20 5.29% A").unwrap();
        assert_eq!(
            row,
            SummaryTableRow {
                concept: "Saldo Inicial".to_string(),
                amount: "12,383.20".to_string(),
                percentage: Some("5.29%".to_string()),
                column_code: Some("A".to_string()),
            }
        );
    }

    #[test]
    fn test_row_without_column_code() {
        let row = parse_summary_line("Retiros / Cargos 4,884.42 100.00%").unwrap();
        assert_eq!(row.concept, "Retiros / Cargos");
        assert_eq!(row.amount, "4,884.42");
        assert_eq!(row.percentage.as_deref(), Some("100.00%"));
        assert_eq!(row.column_code, None);
    }

    #[test]
    fn test_row_without_percent_or_code() {
        let row = parse_summary_line("Saldo Final 1,000.00").unwrap();
        assert_eq!(row.concept, "Saldo Final");
        assert_eq!(row.amount, "1,000.00");
        assert_eq!(row.percentage, None);
        assert_eq!(row.column_code, None);
    }

    #[test]
    fn test_line_without_amount_is_rejected() {
        // Percentage and column code alone never make a record.
        assert_eq!(parse_summary_line("Saldo Inicial 5.29% A"), None);
        assert_eq!(parse_summary_line("Concepto Cantidad % Columna"), None);
        assert_eq!(parse_summary_line(""), None);
    }

    #[test]
    fn test_line_without_concept_is_rejected() {
        assert_eq!(parse_summary_line("12,383.20 5.29% A"), None);
    }

    #[test]
    fn test_negative_amount_and_percent() {
        let row = parse_summary_line("Comisiones -120.00 -1.02% C").unwrap();
        assert_eq!(row.amount, "-120.00");
        assert_eq!(row.percentage.as_deref(), Some("-1.02%"));
        assert_eq!(row.column_code.as_deref(), Some("C"));
    }

    #[test]
    fn test_numeric_column_code() {
        let row = parse_summary_line("Depósitos 24,360.00 94.71% 2").unwrap();
        assert_eq!(row.column_code.as_deref(), Some("2"));
    }

    #[test]
    fn test_tokens_keep_original_formatting() {
        let row = parse_summary_line("Saldo Inicial 12,383.20 5.29% A").unwrap();
        // Thousands separators survive; nothing is re-rendered as numbers.
        assert!(row.amount.contains(','));
        assert!(row.percentage.unwrap().ends_with('%'));
    }
}
