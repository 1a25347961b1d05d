//! Document metadata extraction: account number, statement period,
//! language.

use chrono::NaiveDate;

use crate::models::config::ExtractorConfig;
use crate::models::document::StatementText;
use crate::models::output::{Metadata, Period};

use super::patterns::{ACCOUNT_NUMBER, PERIOD_DASH, PERIOD_DEL};

const SPANISH_WORDS: [&str; 17] = [
    "cuenta", "estado", "periodo", "fecha", "cargos", "abonos", "descripcion", "referencia",
    "saldo", "inicial", "final", "depositos", "retiros", "operacion", "liquidacion", "del", "al",
];

const ENGLISH_WORDS: [&str; 16] = [
    "account",
    "statement",
    "period",
    "date",
    "debits",
    "credits",
    "description",
    "reference",
    "balance",
    "initial",
    "final",
    "deposits",
    "withdrawals",
    "operation",
    "liquidation",
    "from",
];

/// Extract document-level metadata. Bank and document type come from the
/// configuration; nothing is hardcoded here.
pub fn extract_metadata(doc: &StatementText, config: &ExtractorConfig) -> Metadata {
    Metadata {
        document_type: config.document_type.clone(),
        bank: config.bank.clone(),
        account_number: find_account_number(doc),
        period: find_period(doc),
        total_pages: doc.pages.len() as u32,
        language: doc.language.clone().or_else(|| detect_language(doc)),
    }
}

/// First 10-18 digit run in the document.
fn find_account_number(doc: &StatementText) -> Option<String> {
    for page in &doc.pages {
        let text = page.full_text();
        if let Some(m) = ACCOUNT_NUMBER.find(&text) {
            return Some(m.as_str().to_string());
        }
    }
    None
}

/// Statement period, from "DEL d/m/Y AL d/m/Y" or a dash-separated range.
fn find_period(doc: &StatementText) -> Option<Period> {
    for page in &doc.pages {
        let text = page.full_text();

        for pattern in [&*PERIOD_DEL, &*PERIOD_DASH] {
            if let Some(caps) = pattern.captures(&text) {
                let start = parse_period_date(&caps[1]);
                let end = parse_period_date(&caps[2]);
                if start.is_some() || end.is_some() {
                    return Some(Period { start, end });
                }
            }
        }
    }
    None
}

fn parse_period_date(s: &str) -> Option<NaiveDate> {
    for format in ["%d/%m/%Y", "%d/%m/%y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s.trim(), format) {
            return Some(date);
        }
    }
    None
}

/// Word-frequency language detection over the whole document text.
fn detect_language(doc: &StatementText) -> Option<String> {
    let all_text: String = doc
        .pages
        .iter()
        .map(|p| p.full_text())
        .collect::<Vec<_>>()
        .join(" ");

    if all_text.trim().len() < 10 {
        return None;
    }
    let lower = all_text.to_lowercase();

    let spanish = SPANISH_WORDS.iter().filter(|w| lower.contains(*w)).count();
    let english = ENGLISH_WORDS.iter().filter(|w| lower.contains(*w)).count();

    if spanish >= english && spanish > 0 {
        Some("es".to_string())
    } else if english > 0 {
        Some("en".to_string())
    } else {
        None
    }
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
    fn test_period_from_del_al_range() {
        let doc = doc_with_text("Periodo DEL 01/06/2024 AL 30/06/2024");
        let metadata = extract_metadata(&doc, &ExtractorConfig::default());

        let period = metadata.period.unwrap();
        assert_eq!(period.start, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2024, 6, 30));
    }

    #[test]
    fn test_period_from_dash_range() {
        let doc = doc_with_text("01/06/2024 - 30/06/2024");
        let period = extract_metadata(&doc, &ExtractorConfig::default())
            .period
            .unwrap();
        assert_eq!(period.start, NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test]
    fn test_account_number() {
        let doc = doc_with_text("No. de Cuenta 2960296619 JUAN PEREZ");
        let metadata = extract_metadata(&doc, &ExtractorConfig::default());
        assert_eq!(metadata.account_number.as_deref(), Some("2960296619"));
    }

    #[test]
    fn test_language_detection_spanish() {
        let doc = doc_with_text("Estado de cuenta: saldo inicial, cargos, abonos y retiros del periodo");
        let metadata = extract_metadata(&doc, &ExtractorConfig::default());
        assert_eq!(metadata.language.as_deref(), Some("es"));
    }

    #[test]
    fn test_ocr_language_wins_over_detection() {
        let mut doc = doc_with_text("account statement balance");
        doc.language = Some("es".to_string());
        let metadata = extract_metadata(&doc, &ExtractorConfig::default());
        assert_eq!(metadata.language.as_deref(), Some("es"));
    }

    #[test]
    fn test_empty_document_metadata() {
        let doc = StatementText::default();
        let metadata = extract_metadata(&doc, &ExtractorConfig::default());

        assert_eq!(metadata.total_pages, 0);
        assert!(metadata.account_number.is_none());
        assert!(metadata.period.is_none());
        assert!(metadata.language.is_none());
    }
}
