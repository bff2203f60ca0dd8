use serde::{Deserialize, Serialize};

/// A hospital row that survived normalization.
///
/// Coordinates are always present: rows without a parseable coordinate pair
/// never become a `HospitalRecord`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub hospital_type: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Derived from the dataset's overall quality rating, not real bed inventory.
    /// Missing or non-integer ratings normalize to 0.
    pub available_capacity: u32,
    pub has_emergency_services: bool,
}

impl HospitalRecord {
    /// Returns `true` if the record can take patients at all.
    #[must_use]
    pub fn has_capacity(&self) -> bool {
        self.available_capacity > 0
    }
}

/// A hospital annotated with its distance from the current query.
///
/// Lives only for the duration of a single search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(flatten)]
    pub hospital: HospitalRecord,
    /// Great-circle distance from the user, in kilometres.
    pub distance_km: f64,
}

/// One search request from the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub complaint: String,
}

impl UserQuery {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, complaint: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            complaint: complaint.into(),
        }
    }
}
