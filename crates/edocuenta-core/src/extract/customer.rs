//! Customer/account header extraction.
//!
//! Labeled header fields (Periodo, Fecha de Corte, account and client
//! numbers, R.F.C, CLABE) are matched by pattern; the client name/address
//! block carries no label and is found by page position instead.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::config::ExtractorConfig;
use crate::models::document::StatementText;

use super::patterns::{CLABE, FECHA_CORTE, NO_CLIENTE, NO_CUENTA, PERIODO, RFC};
use super::spatial::address_candidates;

lazy_static! {
    // Blocks that start with a known header label are never the address.
    static ref HEADER_STARTS: Vec<Regex> = vec![
        Regex::new(r"^Periodo\s+").unwrap(),
        Regex::new(r"^Fecha\s+de\s+Corte").unwrap(),
        Regex::new(r"^No\.\s+de\s+Cuenta").unwrap(),
        Regex::new(r"^No\.\s+de\s+Cliente").unwrap(),
        Regex::new(r"^R\.F\.C").unwrap(),
        Regex::new(r"^No\.\s+Cuenta\s+CLABE").unwrap(),
        Regex::new(r"(?i)^PAGINA").unwrap(),
    ];
}

const BRANCH_SECTION_KEYWORDS: [&str; 4] = ["SUCURSAL:", "DIRECCION:", "PLAZA:", "TELEFONO:"];

/// Extract the customer header mapping, keyed by original label text.
pub fn extract_customer_info(
    doc: &StatementText,
    config: &ExtractorConfig,
) -> Option<IndexMap<String, String>> {
    let mut periodo = None;
    let mut fecha_corte = None;
    let mut cuenta = None;
    let mut cliente = None;
    let mut rfc = None;
    let mut clabe = None;
    let mut client_name = None;
    let mut client_address = None;

    for (idx, page) in doc.pages.iter().enumerate() {
        let text = page.full_text();
        if text.is_empty() {
            continue;
        }

        if periodo.is_none() {
            if let Some(caps) = PERIODO.captures(&text) {
                periodo = Some(format!("DEL {} AL {}", caps[1].trim(), caps[2].trim()));
            }
        }
        if fecha_corte.is_none() {
            fecha_corte = FECHA_CORTE.captures(&text).map(|c| c[1].trim().to_string());
        }
        if cuenta.is_none() {
            cuenta = NO_CUENTA.captures(&text).map(|c| c[1].trim().to_string());
        }
        if cliente.is_none() {
            cliente = NO_CLIENTE.captures(&text).map(|c| c[1].trim().to_string());
        }
        if rfc.is_none() {
            rfc = RFC.captures(&text).map(|c| c[1].trim().to_string());
        }
        if clabe.is_none() {
            clabe = CLABE.captures(&text).map(|c| c[1].trim().to_string());
        }

        // The address block lives on one of the leading pages (page 1 can
        // be a cover image with no text at all).
        if idx < config.spatial.address_page_limit && client_name.is_none() {
            if let Some((name, address)) = find_address_block(doc, idx, config) {
                client_name = Some(name);
                client_address = Some(address);
            }
        }
    }

    let mut info = IndexMap::new();
    let entries = [
        ("Periodo", periodo),
        ("Fecha de Corte", fecha_corte),
        ("No. de Cuenta", cuenta),
        ("No. de Cliente", cliente),
        ("R.F.C", rfc),
        ("No. Cuenta CLABE", clabe),
        ("Client Name", client_name),
        ("Client Address", client_address),
    ];
    for (key, value) in entries {
        if let Some(value) = value {
            info.insert(key.to_string(), value);
        }
    }

    (!info.is_empty()).then_some(info)
}

/// Pick the topmost qualifying upper-left block and split it into client
/// name (first line) and address (remaining lines).
fn find_address_block(
    doc: &StatementText,
    page_idx: usize,
    config: &ExtractorConfig,
) -> Option<(String, String)> {
    let page = &doc.pages[page_idx];
    let candidates = address_candidates(page, &config.spatial, &config.boilerplate_markers);

    let block = candidates
        .into_iter()
        .find(|c| !HEADER_STARTS.iter().any(|p| p.is_match(&c.text)))?;

    let mut lines: Vec<&str> = block
        .text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    // An OCR block sometimes merges the address with the branch section
    // that follows it; cut at the first branch label.
    if let Some(pos) = lines.iter().position(|line| {
        let upper = line.to_uppercase();
        BRANCH_SECTION_KEYWORDS.iter().any(|kw| upper.contains(kw))
    }) {
        lines.truncate(pos);
    }

    let name = (*lines.first()?).to_string();
    let address = if lines.len() > 1 {
        lines[1..].join("\n")
    } else {
        name.clone()
    };

    Some((name, address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{PageText, TextBlock};
    use pretty_assertions::assert_eq;

    fn header_page() -> PageText {
        PageText {
            page_number: 1,
            width: 612.0,
            height: 792.0,
            text: String::new(),
            blocks: vec![
                TextBlock {
                    text: "Periodo DEL 01/06/2024 AL 30/06/2024".to_string(),
                    bbox: [320.0, 60.0, 560.0, 72.0],
                },
                TextBlock {
                    text: "Fecha de Corte 30/06/2024".to_string(),
                    bbox: [320.0, 75.0, 560.0, 87.0],
                },
                TextBlock {
                    text: "No. de Cuenta 2960296619".to_string(),
                    bbox: [320.0, 90.0, 560.0, 102.0],
                },
                TextBlock {
                    text: "No. de Cliente B0237524".to_string(),
                    bbox: [320.0, 105.0, 560.0, 117.0],
                },
                TextBlock {
                    text: "R.F.C PELJ800101ABC".to_string(),
                    bbox: [320.0, 120.0, 560.0, 132.0],
                },
                TextBlock {
                    text: "JUAN PEREZ LOPEZ\nAV. ALVARO OBREGON 26\nCIHUATLAN JALISCO CP 48970"
                        .to_string(),
                    bbox: [40.0, 110.0, 280.0, 150.0],
                },
            ],
        }
    }

    #[test]
    fn test_labeled_header_fields() {
        let doc = StatementText {
            pages: vec![header_page()],
            language: None,
        };
        let info = extract_customer_info(&doc, &ExtractorConfig::default()).unwrap();

        assert_eq!(info["Periodo"], "DEL 01/06/2024 AL 30/06/2024");
        assert_eq!(info["Fecha de Corte"], "30/06/2024");
        assert_eq!(info["No. de Cuenta"], "2960296619");
        assert_eq!(info["No. de Cliente"], "B0237524");
        assert_eq!(info["R.F.C"], "PELJ800101ABC");
    }

    #[test]
    fn test_address_block_split_into_name_and_address() {
        let doc = StatementText {
            pages: vec![header_page()],
            language: None,
        };
        let info = extract_customer_info(&doc, &ExtractorConfig::default()).unwrap();

        assert_eq!(info["Client Name"], "JUAN PEREZ LOPEZ");
        assert_eq!(
            info["Client Address"],
            "AV. ALVARO OBREGON 26\nCIHUATLAN JALISCO CP 48970"
        );
    }

    #[test]
    fn test_merged_branch_section_is_cut_from_address() {
        let mut page = header_page();
        page.blocks[5].text =
            "JUAN PEREZ LOPEZ\nAV. ALVARO OBREGON 26\nSUCURSAL: 5389 CIHUATLAN".to_string();

        let doc = StatementText {
            pages: vec![page],
            language: None,
        };
        let info = extract_customer_info(&doc, &ExtractorConfig::default()).unwrap();

        assert_eq!(info["Client Name"], "JUAN PEREZ LOPEZ");
        assert_eq!(info["Client Address"], "AV. ALVARO OBREGON 26");
    }

    #[test]
    fn test_empty_document_yields_absence() {
        let doc = StatementText::default();
        assert!(extract_customer_info(&doc, &ExtractorConfig::default()).is_none());
    }

    #[test]
    fn test_address_found_on_second_page() {
        let cover = PageText {
            page_number: 1,
            width: 612.0,
            height: 792.0,
            text: String::new(),
            blocks: vec![],
        };
        let doc = StatementText {
            pages: vec![cover, header_page()],
            language: None,
        };
        let info = extract_customer_info(&doc, &ExtractorConfig::default()).unwrap();
        assert_eq!(info["Client Name"], "JUAN PEREZ LOPEZ");
    }
}
