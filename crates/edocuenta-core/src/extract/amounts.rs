//! Currency amount parsing, configurable per document family.

use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::AMOUNT_STANDARD;
use crate::models::config::CurrencyFormat;

/// Parse an amount from text using the configured separators.
///
/// Currency symbols and grouping separators are stripped, the decimal
/// separator is normalized to `.`, and the result is parsed as a
/// [`Decimal`]. Returns `None` for text with no parseable amount.
pub fn parse_amount(text: &str, format: &CurrencyFormat) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }

    let cleaned: String = text
        .chars()
        .filter(|c| {
            c.is_ascii_digit()
                || *c == '-'
                || *c == format.thousands_separator
                || *c == format.decimal_separator
        })
        .collect();

    let mut normalized = cleaned.replace(format.thousands_separator, "");
    if format.decimal_separator != '.' {
        normalized = normalized.replace(format.decimal_separator, ".");
    }

    Decimal::from_str(&normalized).ok()
}

/// Find the first amount token in `text`, returning it as its original
/// formatted string.
pub fn extract_amount_token(text: &str, format: &CurrencyFormat) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    if format.thousands_separator == ',' && format.decimal_separator == '.' {
        return AMOUNT_STANDARD
            .captures(text)
            .map(|caps| caps[1].to_string());
    }

    // Non-standard separators are rare; build the pattern on demand.
    let pattern = format!(
        r"([\d{ts}]+{ds}\d{{2}})",
        ts = regex::escape(&format.thousands_separator.to_string()),
        ds = regex::escape(&format.decimal_separator.to_string()),
    );
    Regex::new(&pattern)
        .ok()?
        .captures(text)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn standard() -> CurrencyFormat {
        CurrencyFormat::default()
    }

    #[test]
    fn test_parse_amount_standard() {
        assert_eq!(
            parse_amount("12,383.20", &standard()),
            Some(Decimal::from_str("12383.20").unwrap())
        );
        assert_eq!(
            parse_amount("$ 1,234.56", &standard()),
            Some(Decimal::from_str("1234.56").unwrap())
        );
        assert_eq!(
            parse_amount("-500.00", &standard()),
            Some(Decimal::from_str("-500.00").unwrap())
        );
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount("", &standard()), None);
        assert_eq!(parse_amount("sin importe", &standard()), None);
    }

    #[test]
    fn test_parse_amount_european_format() {
        let format = CurrencyFormat {
            symbol: "€".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
        };
        assert_eq!(
            parse_amount("1.234,56", &format),
            Some(Decimal::from_str("1234.56").unwrap())
        );
    }

    #[test]
    fn test_extract_amount_token_keeps_formatting() {
        assert_eq!(
            extract_amount_token("SALDO 12,383.20 FINAL", &standard()),
            Some("12,383.20".to_string())
        );
        assert_eq!(extract_amount_token("no amount here", &standard()), None);
    }
}
