//! Batch processing command for multiple statement files.
//!
//! Each document's pipeline run is fully isolated, so files are simply
//! processed one after another; failures are reported per file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use edocuenta_core::pipeline::process_statement;

use super::process::{load_config, read_grid, read_statement};

/// Suffix that pairs a grid file with its statement dump.
const GRID_SUFFIX: &str = ".transactions.json";

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (statement OCR dumps)
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Grid files match "*.json" globs too; they are inputs to their
    // statements, not statements themselves.
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| !p.to_string_lossy().ends_with(GRID_SUFFIX))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No input files matched: {}", args.input);
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut processed = 0usize;
    let mut failed = 0usize;

    for file in &files {
        pb.set_message(file.display().to_string());

        match process_one(file, &config, args.output_dir.as_deref()) {
            Ok(()) => processed += 1,
            Err(e) => {
                failed += 1;
                error!("{}: {}", file.display(), e);
                if !args.continue_on_error {
                    pb.finish_and_clear();
                    return Err(e);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    println!(
        "{} {} file(s), {} failed in {:.2}s",
        style("Processed").green().bold(),
        processed,
        failed,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn process_one(
    file: &PathBuf,
    config: &edocuenta_core::models::config::ExtractorConfig,
    output_dir: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let doc = read_statement(file)?;

    // A sibling "<name>.transactions.json" supplies the external grid.
    let grid_path = file.with_extension("").with_extension("transactions.json");
    let grid = if grid_path.exists() {
        read_grid(&grid_path)?
    } else {
        debug!("no external grid next to {}", file.display());
        None
    };

    let merged = process_statement(&doc, grid.as_ref(), config)?;
    let rendered = serde_json::to_string_pretty(&merged)?;

    let output_path = match output_dir {
        Some(dir) => {
            let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
            dir.join(format!("{}.merged.json", stem))
        }
        None => file.with_extension("merged.json"),
    };
    fs::write(&output_path, rendered)?;

    Ok(())
}
