//! Per-page header extraction (account number, client number, PAGINA).

use crate::models::document::StatementText;
use crate::models::summary::PageInfo;

use super::patterns::{NO_CLIENTE, NO_CUENTA, PAGINA};

/// Extract the repeated page header from every page that carries one.
/// Pages with no header fields are skipped, not emitted empty.
pub fn extract_pages_info(doc: &StatementText) -> Option<Vec<PageInfo>> {
    let mut infos = Vec::new();

    for (idx, page) in doc.pages.iter().enumerate() {
        let text = page.full_text();

        let info = PageInfo {
            page_index: (idx + 1).to_string(),
            account_number: NO_CUENTA.captures(&text).map(|c| c[1].trim().to_string()),
            client_number: NO_CLIENTE.captures(&text).map(|c| c[1].trim().to_string()),
            pagina: PAGINA.captures(&text).map(|c| c[1].trim().to_string()),
        };

        if info.account_number.is_some() || info.client_number.is_some() || info.pagina.is_some() {
            infos.push(info);
        }
    }

    (!infos.is_empty()).then_some(infos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::PageText;
    use pretty_assertions::assert_eq;

    fn page(number: u32, text: &str) -> PageText {
        PageText {
            page_number: number,
            width: 612.0,
            height: 792.0,
            text: text.to_string(),
            blocks: vec![],
        }
    }

    #[test]
    fn test_headers_collected_per_page() {
        let doc = StatementText {
            pages: vec![
                page(1, "No. de Cuenta 2960296619\nNo. de Cliente B0237524\nPAGINA 1/2"),
                page(2, "No. de Cuenta 2960296619\nPAGINA 2/2"),
            ],
            language: None,
        };

        let infos = extract_pages_info(&doc).unwrap();
        assert_eq!(infos.len(), 2);

        assert_eq!(infos[0].page_index, "1");
        assert_eq!(infos[0].account_number.as_deref(), Some("2960296619"));
        assert_eq!(infos[0].client_number.as_deref(), Some("B0237524"));
        assert_eq!(infos[0].pagina.as_deref(), Some("1/2"));

        assert_eq!(infos[1].page_index, "2");
        assert_eq!(infos[1].client_number, None);
        assert_eq!(infos[1].pagina.as_deref(), Some("2/2"));
    }

    #[test]
    fn test_pages_without_headers_are_skipped() {
        let doc = StatementText {
            pages: vec![page(1, "portada"), page(2, "PAGINA 2/2")],
            language: None,
        };

        let infos = extract_pages_info(&doc).unwrap();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].page_index, "2");
    }

    #[test]
    fn test_no_headers_at_all() {
        let doc = StatementText {
            pages: vec![page(1, "sin encabezado")],
            language: None,
        };
        assert!(extract_pages_info(&doc).is_none());
    }
}
