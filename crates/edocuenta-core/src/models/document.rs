//! Input document model: OCR text blocks grouped by page.
//!
//! These types mirror the JSON produced by the upstream OCR/layout
//! collaborator. They are read-only inputs; no extraction stage mutates
//! them.

use serde::{Deserialize, Serialize};

/// A single OCR/layout text unit with its axis-aligned bounding box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    /// Recognized text content (may span multiple lines).
    pub text: String,

    /// Bounding box as (x0, y0, x1, y1) in page coordinates.
    pub bbox: [f32; 4],
}

impl TextBlock {
    /// Horizontal origin of the block.
    pub fn x0(&self) -> f32 {
        self.bbox[0]
    }

    /// Vertical origin of the block.
    pub fn y0(&self) -> f32 {
        self.bbox[1]
    }

    /// Vertical center of the block, used for visual row clustering.
    pub fn y_center(&self) -> f32 {
        (self.bbox[1] + self.bbox[3]) / 2.0
    }
}

/// OCR data for a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    /// 1-based page number.
    pub page_number: u32,

    /// Page width in points.
    #[serde(default = "default_page_width")]
    pub width: f32,

    /// Page height in points.
    #[serde(default = "default_page_height")]
    pub height: f32,

    /// Full page text, when the OCR collaborator provides it.
    #[serde(default)]
    pub text: String,

    /// Positioned text blocks.
    #[serde(default)]
    pub blocks: Vec<TextBlock>,
}

// US Letter in points; the statement family is always Letter-sized.
fn default_page_width() -> f32 {
    612.0
}

fn default_page_height() -> f32 {
    792.0
}

impl PageText {
    /// Full text of the page: the OCR-provided `text` field when present,
    /// otherwise the block texts joined with newlines.
    pub fn full_text(&self) -> String {
        if !self.text.is_empty() {
            return self.text.clone();
        }

        self.blocks
            .iter()
            .map(|b| b.text.as_str())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Complete OCR output for one statement document (Input A).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementText {
    /// Per-page OCR data, in document order.
    #[serde(default)]
    pub pages: Vec<PageText>,

    /// Document language reported by the OCR collaborator, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}
