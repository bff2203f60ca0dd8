//! Normalization from [`RawHospitalRow`] to [`HospitalRecord`].
//!
//! Per-row problems never fail the batch: rows without coordinates are
//! dropped and unparseable ratings become zero capacity. Only file-level
//! failures surface as errors, and [`load_and_normalize`] turns even those
//! into an empty set after logging the reason.

use std::path::Path;

use hospfind_core::HospitalRecord;

use crate::dataset::read_raw_rows_from_path;
use crate::error::LocatorError;
use crate::location::{has_coordinate_marker, parse_coordinates};
use crate::types::RawHospitalRow;

/// Normalizes one raw row, or returns `None` if it has no coordinates.
#[must_use]
pub fn normalize_row(row: &RawHospitalRow) -> Option<HospitalRecord> {
    if !has_coordinate_marker(&row.location) {
        return None;
    }
    let (latitude, longitude) = parse_coordinates(&row.location)?;

    Some(HospitalRecord {
        name: row.name.clone(),
        hospital_type: row.hospital_type.clone(),
        latitude,
        longitude,
        available_capacity: parse_capacity(&row.overall_rating),
        has_emergency_services: parse_emergency_flag(&row.emergency_services),
    })
}

/// Normalizes a batch, preserving dataset order.
#[must_use]
pub fn normalize_rows(rows: &[RawHospitalRow]) -> Vec<HospitalRecord> {
    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        if let Some(record) = normalize_row(row) {
            records.push(record);
        } else {
            tracing::debug!(row = idx, name = %row.name, "skipping row without coordinates");
        }
    }
    records
}

/// Derives capacity from the overall rating cell.
///
/// Only a plain integer is accepted; anything else (empty, `"Not Available"`,
/// `"3.5"`, negative) yields 0.
#[must_use]
pub fn parse_capacity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// Interprets a boolean-like cell. Unknown spellings are `false`.
#[must_use]
pub fn parse_emergency_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "t" | "1"
    )
}

/// Reads and normalizes the dataset at `path`.
///
/// # Errors
///
/// Returns [`LocatorError`] if the file cannot be opened, is not valid CSV,
/// or lacks a required column.
pub fn read_dataset(path: &Path) -> Result<Vec<HospitalRecord>, LocatorError> {
    let rows = read_raw_rows_from_path(path)?;
    let records = normalize_rows(&rows);
    tracing::info!(
        path = %path.display(),
        rows = rows.len(),
        records = records.len(),
        skipped = rows.len() - records.len(),
        "hospital dataset normalized"
    );
    Ok(records)
}

/// Reads and normalizes the dataset, degrading any failure to an empty set.
///
/// Callers must treat an empty result as "dataset unavailable" and check it
/// before running a query.
#[must_use]
pub fn load_and_normalize(path: &Path) -> Vec<HospitalRecord> {
    match read_dataset(path) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to load hospital dataset");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
