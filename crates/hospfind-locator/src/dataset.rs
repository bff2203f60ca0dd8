//! CSV reading with an explicit column schema.
//!
//! The header row is resolved once into [`ColumnIndex`]; a missing required
//! column fails the whole load with [`LocatorError::MissingColumn`] instead
//! of silently producing empty fields.

use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};

use crate::error::LocatorError;
use crate::types::RawHospitalRow;

pub const LOCATION_COLUMN: &str = "Location";
pub const NAME_COLUMN: &str = "Hospital Name";
pub const TYPE_COLUMN: &str = "Hospital Type";
pub const RATING_COLUMN: &str = "Hospital overall rating";
pub const EMERGENCY_COLUMN: &str = "Emergency Services";

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    location: usize,
    name: usize,
    hospital_type: usize,
    rating: usize,
    emergency: usize,
}

impl ColumnIndex {
    /// Resolves required columns by exact (trimmed) header name.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::MissingColumn`] naming the first absent column.
    pub fn from_headers(headers: &ByteRecord) -> Result<Self, LocatorError> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| decode_field(h).trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let find = |column: &'static str| -> Result<usize, LocatorError> {
            names
                .iter()
                .position(|n| n == column)
                .ok_or(LocatorError::MissingColumn { column })
        };

        Ok(Self {
            location: find(LOCATION_COLUMN)?,
            name: find(NAME_COLUMN)?,
            hospital_type: find(TYPE_COLUMN)?,
            rating: find(RATING_COLUMN)?,
            emergency: find(EMERGENCY_COLUMN)?,
        })
    }

    fn extract(&self, record: &ByteRecord) -> RawHospitalRow {
        let cell = |idx: usize| record.get(idx).map(decode_field).unwrap_or_default();
        RawHospitalRow {
            location: cell(self.location),
            name: cell(self.name),
            hospital_type: cell(self.hospital_type),
            overall_rating: cell(self.rating),
            emergency_services: cell(self.emergency),
        }
    }
}

/// Decodes a cell as UTF-8, falling back to Latin-1 (ISO-8859-1).
///
/// Every byte is a valid Latin-1 code point, so this never fails.
#[must_use]
pub fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Reads every data row from a CSV source.
///
/// Rows with fewer cells than the header are accepted; absent cells read as
/// empty strings.
///
/// # Errors
///
/// Returns [`LocatorError::Csv`] for I/O or framing failures and
/// [`LocatorError::MissingColumn`] if the header lacks a required column.
pub fn read_raw_rows<R: Read>(source: R) -> Result<Vec<RawHospitalRow>, LocatorError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let columns = ColumnIndex::from_headers(reader.byte_headers()?)?;

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        rows.push(columns.extract(&record));
    }
    Ok(rows)
}

/// Opens `path` and reads every data row.
///
/// # Errors
///
/// Returns [`LocatorError::Io`] if the file cannot be opened, otherwise as
/// [`read_raw_rows`].
pub fn read_raw_rows_from_path(path: &Path) -> Result<Vec<RawHospitalRow>, LocatorError> {
    let file = std::fs::File::open(path).map_err(|e| LocatorError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    read_raw_rows(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Provider ID,Hospital Name,City,Hospital Type,Emergency Services,Hospital overall rating,Location\n";

    #[test]
    fn reads_required_columns_in_any_order() {
        let csv = format!(
            "{HEADER}10001,SOUTHEAST ALABAMA MEDICAL CENTER,DOTHAN,Acute Care Hospitals,TRUE,3,\"1108 ROSS CLARK CIRCLE\nDOTHAN, AL\n(31.2163, -85.3613)\"\n"
        );
        let rows = read_raw_rows(csv.as_bytes()).expect("rows");
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.name, "SOUTHEAST ALABAMA MEDICAL CENTER");
        assert_eq!(row.hospital_type, "Acute Care Hospitals");
        assert_eq!(row.emergency_services, "TRUE");
        assert_eq!(row.overall_rating, "3");
        assert!(row.location.ends_with("(31.2163, -85.3613)"));
    }

    #[test]
    fn missing_column_fails_loudly() {
        let csv = "Hospital Name,Hospital Type,Emergency Services,Hospital overall rating\nA,B,TRUE,3\n";
        let err = read_raw_rows(csv.as_bytes()).unwrap_err();
        assert!(
            matches!(err, LocatorError::MissingColumn { column } if column == LOCATION_COLUMN),
            "expected MissingColumn(Location), got: {err:?}"
        );
    }

    #[test]
    fn short_rows_read_as_empty_cells() {
        let csv = format!("{HEADER}10002,SHORT ROW,TOWN\n");
        let rows = read_raw_rows(csv.as_bytes()).expect("rows");
        assert_eq!(rows[0].name, "SHORT ROW");
        assert_eq!(rows[0].location, "");
        assert_eq!(rows[0].overall_rating, "");
    }

    #[test]
    fn latin1_bytes_do_not_fail_the_load() {
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"10003,HOSPITAL SAN JOS\xc9,PONCE,Acute Care Hospitals,Yes,4,\"(18.0, -66.6)\"\n");
        let rows = read_raw_rows(bytes.as_slice()).expect("rows");
        assert_eq!(rows[0].name, "HOSPITAL SAN JOS\u{c9}");
    }

    #[test]
    fn header_with_bom_is_resolved() {
        let csv = "\u{feff}Location,Hospital Name,Hospital Type,Emergency Services,Hospital overall rating\n\"(1.0, 2.0)\",X,Z,TRUE,1\n";
        let rows = read_raw_rows(csv.as_bytes()).expect("rows");
        assert_eq!(rows[0].location, "(1.0, 2.0)");
    }

    #[test]
    fn decode_field_prefers_utf8() {
        assert_eq!(decode_field("São Paulo".as_bytes()), "São Paulo");
        assert_eq!(decode_field(b"S\xe3o"), "S\u{e3}o");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_raw_rows_from_path(Path::new("/nonexistent/hospfind/HospInfo.csv"))
            .unwrap_err();
        assert!(matches!(err, LocatorError::Io { .. }), "got: {err:?}");
    }
}
