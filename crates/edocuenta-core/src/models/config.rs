//! Configuration structures for the extraction pipeline.
//!
//! Everything tunable lives here as an explicit struct passed to the
//! composer; there is no ambient/global configuration.

use serde::{Deserialize, Serialize};

/// Main configuration for the edocuenta pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Issuing bank name, copied into output metadata.
    pub bank: Option<String>,

    /// Document type tag, copied into output metadata.
    pub document_type: Option<String>,

    /// Currency formatting used when parsing amounts.
    pub currency: CurrencyFormat,

    /// Spatial selection thresholds.
    pub spatial: SpatialConfig,

    /// Institutional boilerplate markers. Blocks containing any of these
    /// are never address candidates, regardless of position.
    pub boilerplate_markers: Vec<String>,

    /// Header keywords that identify non-transaction text.
    pub skip_keywords: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            bank: None,
            document_type: Some("BANK_STATEMENT".to_string()),
            currency: CurrencyFormat::default(),
            spatial: SpatialConfig::default(),
            boilerplate_markers: vec![
                "BBVA".to_string(),
                "BANCO BBVA".to_string(),
                "Estado de Cuenta".to_string(),
            ],
            skip_keywords: vec![
                "periodo".to_string(),
                "fecha de corte".to_string(),
                "no. de cuenta".to_string(),
                "estado de cuenta".to_string(),
            ],
        }
    }
}

/// Currency/number formatting of the document family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Currency symbol to strip before parsing.
    pub symbol: String,

    /// Thousands separator character.
    pub thousands_separator: char,

    /// Decimal separator character.
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }
}

/// Thresholds for the spatial candidate selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialConfig {
    /// Candidate blocks must start within this fraction of page width.
    pub max_x_ratio: f32,

    /// Candidate blocks must start within this fraction of page height.
    pub max_y_ratio: f32,

    /// Blocks shorter than this are discarded as noise.
    pub min_text_len: usize,

    /// Vertical tolerance (points) when clustering blocks into visual rows.
    pub row_tolerance: f32,

    /// How many leading pages to search for the address block.
    pub address_page_limit: usize,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            max_x_ratio: 0.6,
            max_y_ratio: 0.5,
            min_text_len: 5,
            row_tolerance: 10.0,
            address_page_limit: 3,
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
