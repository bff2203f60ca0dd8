//! Dataset inspection commands.

use std::path::Path;

use clap::Subcommand;
use hospfind_core::DatasetSummary;

/// Sub-commands available under `dataset`.
#[derive(Debug, Subcommand)]
pub enum DatasetCommands {
    /// Show record counts after normalization
    Stats,
}

/// Load the dataset and print summary counts.
///
/// Unlike `search`, this surfaces the underlying load error instead of
/// reporting an empty set.
///
/// # Errors
///
/// Returns an error if the dataset cannot be read or lacks a required column.
pub(crate) fn run_dataset_stats(dataset_path: &Path) -> anyhow::Result<()> {
    let records = hospfind_locator::read_dataset(dataset_path)?;
    let summary = DatasetSummary::from_records(&records);
    print!("{}", render_summary(dataset_path, &summary));
    Ok(())
}

pub(crate) fn render_summary(dataset_path: &Path, summary: &DatasetSummary) -> String {
    let mut lines = vec![
        format!("dataset: {}", dataset_path.display()),
        format!("hospitals with coordinates: {}", summary.total),
        format!("with emergency services:    {}", summary.with_emergency_services),
        format!("with available beds:        {}", summary.with_capacity),
        String::new(),
        format!("{:<40}COUNT", "TYPE"),
    ];
    for row in &summary.by_type {
        lines.push(format!("{:<40}{}", row.hospital_type, row.count));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
