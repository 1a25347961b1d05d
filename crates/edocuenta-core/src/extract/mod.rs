//! Field-group extraction for bank statements.
//!
//! Each submodule extracts one section of the statement and returns
//! absence (`None` or an empty collection) when the section is missing or
//! unreadable; no extractor errors on malformed text.

pub mod amounts;
pub mod behavior;
pub mod boundary;
pub mod branch;
pub mod composer;
pub mod customer;
pub mod financial;
pub mod headers;
pub mod holds;
pub mod metadata;
pub mod patterns;
pub mod products;
pub mod resumen;
pub mod spatial;
pub mod tabular;
pub mod totals;

pub use amounts::{extract_amount_token, parse_amount};
pub use boundary::{LabelSet, LabelSpec};
pub use composer::SummaryComposer;
pub use metadata::extract_metadata;
pub use spatial::{address_candidates, reconstruct_rows, SpatialCandidate};
pub use tabular::parse_summary_line;
