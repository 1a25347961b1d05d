//! Branch info extraction (SUCURSAL / DIRECCION / PLAZA / TELEFONO).

use indexmap::IndexMap;
use lazy_static::lazy_static;

use crate::models::document::StatementText;

use super::boundary::{LabelSet, LabelSpec};

lazy_static! {
    static ref BRANCH_LABELS: LabelSet = LabelSet::new(vec![
        LabelSpec::new("SUCURSAL", &["SUCURSAL"]),
        LabelSpec::new("DIRECCION", &["DIRECCIÓN", "DIRECCION"]),
        LabelSpec::new("PLAZA", &["PLAZA"]),
        LabelSpec::new("TELEFONO", &["TELÉFONO", "TELEFONO"]),
    ]);
}

/// Extract the branch block from the first page that carries one.
///
/// Values are boundary-extracted, so a branch field can never absorb the
/// next field's label or content. The phone value is additionally cut at
/// the first non-phone character: TELEFONO is usually the last label of
/// the block and would otherwise run to the end of the page text.
pub fn extract_branch_info(doc: &StatementText) -> Option<IndexMap<String, String>> {
    for page in &doc.pages {
        let text = page.full_text();
        if !text.contains("SUCURSAL:") && !text.contains("Sucursal:") {
            continue;
        }

        let mut fields = BRANCH_LABELS.extract(&text);
        if let Some(phone) = fields.get_mut("TELEFONO") {
            *phone = leading_phone_run(phone);
        }

        if !fields.is_empty() {
            return Some(fields);
        }
    }
    None
}

/// Keep the leading run of phone characters (digits, spaces, +, -, parens).
fn leading_phone_run(value: &str) -> String {
    value
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'))
        .collect::<String>()
        .trim()
        .to_string()
}
