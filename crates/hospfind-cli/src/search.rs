//! `search` command: triage, rank and print.

use std::fmt::Write as _;
use std::path::Path;

use hospfind_core::{MapPoint, SearchOutcome, SearchParams, SearchReport, UserQuery};
use hospfind_locator::{map_points, DatasetCache, LocatorError};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct SearchOutput<'a> {
    pub query: &'a UserQuery,
    pub report: &'a SearchReport,
    pub map: Vec<MapPoint>,
}

/// Run a single search against the dataset at `dataset_path`.
///
/// # Errors
///
/// Returns an error if the dataset could not be loaded, the complaint is
/// blank, or JSON output fails to serialize.
pub(crate) fn run_search(
    dataset_path: &Path,
    query: &UserQuery,
    params: &SearchParams,
    json: bool,
) -> anyhow::Result<()> {
    let records = DatasetCache::global(dataset_path).get();
    tracing::debug!(
        path = %dataset_path.display(),
        records = records.len(),
        "hospital dataset loaded"
    );

    let report = match hospfind_locator::search(&records, query, params) {
        Ok(report) => report,
        Err(LocatorError::DatasetUnavailable) => anyhow::bail!(
            "hospital dataset could not be loaded from {}; check the file and try again",
            dataset_path.display()
        ),
        Err(LocatorError::EmptyComplaint) => {
            anyhow::bail!("please enter a complaint first (--complaint \"...\")")
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        let output = SearchOutput {
            query,
            report: &report,
            map: map_points(query, report.outcome.top()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_report(&report, query, params));
    }
    Ok(())
}

/// Render a search report as plain text.
pub(crate) fn render_report(
    report: &SearchReport,
    query: &UserQuery,
    params: &SearchParams,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "STATUS: {} [tier {}]",
        report.urgency.label,
        report.urgency.tier.level()
    );

    match &report.outcome {
        SearchOutcome::NoResults => {
            let _ = writeln!(
                out,
                "no hospitals match the criteria within {} km",
                params.max_distance_km
            );
        }
        SearchOutcome::Ranked {
            top,
            total_qualifying,
        } => {
            let _ = writeln!(out, "{}", report.mode.message());
            let _ = writeln!(
                out,
                "found {total_qualifying} hospitals within {} km (top {}):",
                params.max_distance_km,
                top.len()
            );
            for (rank, candidate) in top.iter().enumerate() {
                let _ = writeln!(out);
                let _ = writeln!(out, "{}. {}", rank + 1, candidate.hospital.name);
                let _ = writeln!(out, "   distance: {:.2} km", candidate.distance_km);
                let _ = writeln!(
                    out,
                    "   beds available: {}",
                    candidate.hospital.available_capacity
                );
                let _ = writeln!(out, "   type: {}", candidate.hospital.hospital_type);
            }
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "map: {} hospital marker(s), you are at ({:.4}, {:.4})",
                top.len(),
                query.latitude,
                query.longitude
            );
        }
    }
    out
}
