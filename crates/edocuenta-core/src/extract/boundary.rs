//! Boundary-aware labeled field extraction.
//!
//! A [`LabelSet`] pulls labeled value spans out of noisy concatenated text
//! without bleeding into neighboring labels: every label occurrence is
//! located first, then each value is sliced from the end of its own label
//! token to the start of the next occurrence of ANY label. This ordered
//! scan replaces the negative-lookahead patterns an earlier revision used;
//! it cannot backtrack pathologically and the non-bleed guarantee holds by
//! construction.

use indexmap::IndexMap;
use regex::Regex;

/// One recognizable label: a canonical output key plus the token variants
/// (case/diacritic spellings) that may appear in the document.
#[derive(Debug, Clone)]
pub struct LabelSpec {
    /// Key used in the output mapping.
    pub canonical: String,

    /// Token spellings matched in the text.
    pub variants: Vec<String>,
}

impl LabelSpec {
    pub fn new(canonical: &str, variants: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// A fixed ordered set of known labels compiled into one scanner.
#[derive(Debug)]
pub struct LabelSet {
    labels: Vec<LabelSpec>,
    matcher: Regex,
}

impl LabelSet {
    /// Compile a label set. Within each label, longer variants are tried
    /// first so that a prefix variant never shadows a full token.
    pub fn new(labels: Vec<LabelSpec>) -> Self {
        let alternation = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let mut variants = label.variants.clone();
                variants.sort_by_key(|v| std::cmp::Reverse(v.len()));
                let tokens: Vec<String> = variants.iter().map(|v| regex::escape(v)).collect();
                format!("(?P<l{}>{})", i, tokens.join("|"))
            })
            .collect::<Vec<_>>()
            .join("|");

        let matcher = Regex::new(&format!("(?i)(?:{})", alternation)).unwrap();

        Self { labels, matcher }
    }

    /// Extract a mapping from canonical field name to value string.
    ///
    /// A value runs from its label token (plus an optional `:`/`.`
    /// separator) up to, but not including, the next occurrence of any
    /// other known label, across line breaks. Adjacent labels yield an
    /// empty value; labels that never occur are absent from the mapping;
    /// empty input yields an empty mapping. The first occurrence of each
    /// label wins.
    pub fn extract(&self, text: &str) -> IndexMap<String, String> {
        let mut fields = IndexMap::new();
        if text.is_empty() {
            return fields;
        }

        // Pass 1: locate every label occurrence.
        let mut hits: Vec<(usize, usize, usize)> = Vec::new();
        for caps in self.matcher.captures_iter(text) {
            let whole = caps.get(0).unwrap();
            let label_idx = (0..self.labels.len())
                .find(|i| caps.name(&format!("l{}", i)).is_some());
            if let Some(idx) = label_idx {
                hits.push((whole.start(), whole.end(), idx));
            }
        }

        // Pass 2: slice each value to the start of the next label.
        for (i, &(_, token_end, label_idx)) in hits.iter().enumerate() {
            let value_end = hits.get(i + 1).map(|h| h.0).unwrap_or(text.len());
            let raw = &text[token_end..value_end];
            let value = strip_separator(raw).trim().to_string();

            let canonical = &self.labels[label_idx].canonical;
            if !fields.contains_key(canonical) {
                fields.insert(canonical.clone(), value);
            }
        }

        fields
    }

    /// All token variants, for callers that need to check for bleed-over.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .flat_map(|l| l.variants.iter().map(|v| v.as_str()))
    }
}

/// Drop one leading `:` or `.` separator after a label token.
fn strip_separator(s: &str) -> &str {
    let s = s.trim_start();
    s.strip_prefix(':').or_else(|| s.strip_prefix('.')).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn branch_labels() -> LabelSet {
        LabelSet::new(vec![
            LabelSpec::new("SUCURSAL", &["SUCURSAL"]),
            LabelSpec::new("DIRECCION", &["DIRECCIÓN", "DIRECCION"]),
            LabelSpec::new("PLAZA", &["PLAZA"]),
            LabelSpec::new("TELEFONO", &["TELÉFONO", "TELEFONO"]),
        ])
    }

    #[test]
    fn test_values_stop_at_next_label() {
        let labels = branch_labels();
        let text =
            "SUCURSAL: 5389 CIHUATLAN DIRECCION: ALVARO OBREGON 26 PLAZA: CIHUATLAN TELEFONO: 6890000";
        let fields = labels.extract(text);

        assert_eq!(fields["SUCURSAL"], "5389 CIHUATLAN");
        assert_eq!(fields["DIRECCION"], "ALVARO OBREGON 26");
        assert_eq!(fields["PLAZA"], "CIHUATLAN");
        assert_eq!(fields["TELEFONO"], "6890000");
    }

    #[test]
    fn test_no_value_contains_another_label_token() {
        let labels = branch_labels();
        let text = "SUCURSAL: 5389 CIHUATLAN DIRECCION: ALVARO OBREGON 26 PLAZA: CIHUATLAN TELEFONO: 6890000";
        let fields = labels.extract(text);

        for value in fields.values() {
            let upper = value.to_uppercase();
            for token in labels.variants() {
                assert!(
                    !upper.contains(token),
                    "value {:?} bleeds into label {:?}",
                    value,
                    token
                );
            }
        }
    }

    #[test]
    fn test_adjacent_labels_yield_empty_value() {
        let labels = branch_labels();
        let fields = labels.extract("SUCURSAL: DIRECCION: CALLE FALSA 123");

        assert_eq!(fields["SUCURSAL"], "");
        assert_eq!(fields["DIRECCION"], "CALLE FALSA 123");
    }

    #[test]
    fn test_missing_label_is_absent() {
        let labels = branch_labels();
        let fields = labels.extract("SUCURSAL: 5389");

        assert_eq!(fields.len(), 1);
        assert!(!fields.contains_key("PLAZA"));
    }

    #[test]
    fn test_empty_text_yields_empty_mapping() {
        let labels = branch_labels();
        assert!(labels.extract("").is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive_and_multiline() {
        let labels = branch_labels();
        let text = "Sucursal: 0044 CENTRO\nDirección: AV. JUAREZ 10\nCOL. CENTRO\nPlaza: GUADALAJARA";
        let fields = labels.extract(text);

        assert_eq!(fields["SUCURSAL"], "0044 CENTRO");
        assert_eq!(fields["DIRECCION"], "AV. JUAREZ 10\nCOL. CENTRO");
        assert_eq!(fields["PLAZA"], "GUADALAJARA");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let labels = branch_labels();
        let fields = labels.extract("PLAZA: PRIMERA PLAZA: SEGUNDA");
        assert_eq!(fields["PLAZA"], "PRIMERA");
    }

    #[test]
    fn test_accented_variant_maps_to_canonical_key() {
        let labels = branch_labels();
        let fields = labels.extract("DIRECCIÓN: INSURGENTES SUR 100 TELÉFONO: 5550000");

        assert_eq!(fields["DIRECCION"], "INSURGENTES SUR 100");
        assert_eq!(fields["TELEFONO"], "5550000");
    }
}
