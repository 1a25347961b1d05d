//! Data models for statement extraction.

pub mod config;
pub mod document;
pub mod grid;
pub mod output;
pub mod summary;

pub use config::{CurrencyFormat, ExtractorConfig, SpatialConfig};
pub use document::{PageText, StatementText, TextBlock};
pub use grid::{GridPage, GridRow, TransactionGrid};
pub use output::{MergedDocument, Metadata, Period, StructuredData};
pub use summary::{
    AccountSummary, Apartado, FinancialInfo, InvestmentRow, OtherProducts, PageInfo,
    SummaryTableRow, TotalMovimientos,
};
