//! Core library for bank statement extraction.
//!
//! This crate provides:
//! - Boundary-aware labeled field extraction (branch info and friends)
//! - Spatial candidate selection for position-identified fields
//! - Tabular summary-line parsing and field-group composition
//! - Merging with an externally produced transaction-grid extraction
//!
//! PDF rasterization, OCR/layout analysis and the transaction-grid
//! extractor itself are upstream collaborators; this crate starts from
//! their JSON outputs.

pub mod error;
pub mod extract;
pub mod merge;
pub mod models;
pub mod pipeline;

pub use error::{EdocError, MergeError, Result};
pub use extract::{LabelSet, LabelSpec, SummaryComposer};
pub use merge::inject_transaction_details;
pub use models::{
    AccountSummary, ExtractorConfig, MergedDocument, PageText, StatementText, TextBlock,
    TransactionGrid,
};
pub use pipeline::process_statement;
