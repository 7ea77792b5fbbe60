//! Display utilities and output writing for the hltv CLI.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use hltv_lib::prelude::*;
use hltv_lib::write_table;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

/// Output format for tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Tsv,
    Json,
    Ndjson,
    Parquet,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Tsv => Self::Tsv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
            Format::Parquet => Self::Parquet,
        }
    }
}

/// Picks the explicit format, else the one named by the output extension, else CSV.
pub(crate) fn resolve_format(format: Option<Format>, output: Option<&Path>) -> OutputFormat {
    format.map(OutputFormat::from).unwrap_or_else(|| {
        output
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .unwrap_or_default()
    })
}

/// Write a table to `output`, or to standard output for text formats.
pub(crate) fn write_output(table: &Table, output: Option<&Path>, format: Option<Format>) -> Result<()> {
    let format = resolve_format(format, output);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            write_table(format, table, BufWriter::new(file))?;
        }
        None => {
            if !format.is_text() {
                bail!("{format} output needs --output <FILE>");
            }
            write_table(format, table, BufWriter::new(std::io::stdout()))?;
        }
    }

    Ok(())
}

/// A spinner on standard error, hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
