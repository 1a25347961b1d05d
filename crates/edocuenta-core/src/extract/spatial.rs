//! Spatial candidate selection and visual row reconstruction.
//!
//! Some fields of this document family carry no label at all (the customer
//! name/address block); they are found by page position instead. Other
//! sections are tables whose cells arrive as separate OCR blocks in
//! arbitrary order; those are rebuilt into visual rows by Y-clustering.

use crate::models::config::SpatialConfig;
use crate::models::document::{PageText, TextBlock};

/// A text block considered for a position-identified field.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialCandidate {
    /// Vertical origin of the block.
    pub y: f32,

    /// Block text.
    pub text: String,
}

/// Rank candidate blocks for the customer identity/address field.
///
/// A block qualifies only if it starts in the left `max_x_ratio` of the
/// page and the top `max_y_ratio` (identity blocks sit upper-left in this
/// document family), is at least `min_text_len` characters, and contains
/// no institutional boilerplate marker. Output is sorted by ascending
/// vertical origin: identity precedes address precedes account metadata.
/// Zero qualifying blocks is a valid result.
pub fn address_candidates(
    page: &PageText,
    config: &SpatialConfig,
    boilerplate_markers: &[String],
) -> Vec<SpatialCandidate> {
    let max_x = page.width * config.max_x_ratio;
    let max_y = page.height * config.max_y_ratio;

    let mut candidates: Vec<SpatialCandidate> = page
        .blocks
        .iter()
        .filter(|block| block.x0() < max_x && block.y0() < max_y)
        .filter(|block| block.text.trim().len() >= config.min_text_len)
        .filter(|block| {
            !boilerplate_markers
                .iter()
                .any(|marker| block.text.contains(marker.as_str()))
        })
        .map(|block| SpatialCandidate {
            y: block.y0(),
            text: block.text.trim().to_string(),
        })
        .collect();

    candidates.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Rebuild visual rows from positioned blocks.
///
/// Blocks are sorted by vertical center, clustered against the first
/// member of the current row within `y_tolerance`, ordered left-to-right
/// inside each row, and joined with single spaces.
pub fn reconstruct_rows(blocks: &[TextBlock], y_tolerance: f32) -> Vec<String> {
    let mut lines: Vec<(f32, f32, &str)> = blocks
        .iter()
        .filter(|b| !b.text.trim().is_empty())
        .map(|b| (b.y_center(), b.x0(), b.text.trim()))
        .collect();

    if lines.is_empty() {
        return Vec::new();
    }

    lines.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut rows: Vec<String> = Vec::new();
    let mut current: Vec<(f32, &str)> = vec![(lines[0].1, lines[0].2)];
    let mut row_y = lines[0].0;

    for &(y, x, text) in &lines[1..] {
        if (y - row_y).abs() < y_tolerance {
            current.push((x, text));
        } else {
            rows.push(join_row(&mut current));
            current.push((x, text));
            row_y = y;
        }
    }
    rows.push(join_row(&mut current));

    rows
}

fn join_row(members: &mut Vec<(f32, &str)>) -> String {
    members.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    let row = members
        .iter()
        .map(|(_, text)| *text)
        .collect::<Vec<_>>()
        .join(" ");
    members.clear();
    row
}
