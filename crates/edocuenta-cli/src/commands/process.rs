//! Process command - extract and merge a single statement.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use serde_json::Value;
use tracing::{info, warn};

use edocuenta_core::models::config::ExtractorConfig;
use edocuenta_core::models::document::StatementText;
use edocuenta_core::models::grid::TransactionGrid;
use edocuenta_core::pipeline::process_statement;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input OCR dump (JSON with pages and text blocks)
    #[arg(required = true)]
    input: PathBuf,

    /// External transaction-grid JSON (optional)
    #[arg(long)]
    external_transactions: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing statement: {}", args.input.display());

    let doc = read_statement(&args.input)?;
    let grid = match &args.external_transactions {
        Some(path) => read_grid(path)?,
        None => None,
    };

    let merged = process_statement(&doc, grid.as_ref(), &config)?;

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&merged)?,
        OutputFormat::Text => text_summary(&merged),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &rendered)?;
        println!(
            "{} {}",
            style("Output written to").green(),
            output_path.display()
        );
    } else {
        println!("{}", rendered);
    }

    eprintln!(
        "{} in {:.2}s",
        style("Done").green().bold(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ExtractorConfig> {
    Ok(match config_path {
        Some(path) => ExtractorConfig::from_file(Path::new(path))?,
        None => ExtractorConfig::default(),
    })
}

pub fn read_statement(path: &Path) -> anyhow::Result<StatementText> {
    let content = fs::read_to_string(path)?;
    let doc = serde_json::from_str(&content)?;
    Ok(doc)
}

/// Load the external grid, degrading to `None` (zero-row merge) when the
/// file is malformed rather than aborting the document.
pub fn read_grid(path: &Path) -> anyhow::Result<Option<TransactionGrid>> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;

    match TransactionGrid::from_value(&value) {
        Some(grid) => {
            info!(
                "Loaded external transaction grid: {} row(s)",
                grid.total_rows
            );
            Ok(Some(grid))
        }
        None => {
            warn!(
                "External grid at {} is malformed, merging zero rows",
                path.display()
            );
            Ok(None)
        }
    }
}

/// Human-readable run summary, mirroring the key output fields.
fn text_summary(merged: &Value) -> String {
    let metadata = &merged["metadata"];
    let summary = &merged["structured_data"]["account_summary"];

    let mut lines = vec![
        format!(
            "Document type: {}",
            metadata["document_type"].as_str().unwrap_or("unknown")
        ),
        format!(
            "Account number: {}",
            metadata["account_number"].as_str().unwrap_or("not found")
        ),
        format!(
            "Pages: {}",
            metadata["total_pages"].as_u64().unwrap_or(0)
        ),
        format!(
            "Transaction rows: {}",
            summary["transaction_details"]["total_rows"]
                .as_u64()
                .unwrap_or(0)
        ),
    ];

    if let Some(groups) = summary.as_object() {
        lines.push(format!(
            "Groups: {}",
            groups.keys().cloned().collect::<Vec<_>>().join(", ")
        ));
    }

    lines.join("\n")
}
