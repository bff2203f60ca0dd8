//! Raw dataset shapes, before normalization.

/// One row of the hospital dataset, as text.
///
/// Fields are decoded leniently (UTF-8, falling back to Latin-1) and are
/// otherwise untouched. Missing trailing cells become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHospitalRow {
    /// Free-text address blob, optionally ending in `(lat, lng)`.
    pub location: String,
    pub name: String,
    pub hospital_type: String,
    /// Nominally `1`–`5`; frequently `"Not Available"`.
    pub overall_rating: String,
    /// Boolean-like indicator, e.g. `"TRUE"`, `"Yes"`.
    pub emergency_services: String,
}
