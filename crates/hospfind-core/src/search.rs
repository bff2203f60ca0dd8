//! Types shared between the ranking pipeline and the presentation layers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::hospitals::{Candidate, HospitalRecord};
use crate::CoreError;

/// Search radius used when no override is configured, in kilometres.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 100.0;

/// Number of ranked candidates returned when no override is configured.
pub const DEFAULT_TOP_N: usize = 3;

/// Severity bucket derived from the complaint text. Tier 1 is the most severe.
///
/// Serialized as its numeric level (`1`, `2`, `3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum UrgencyTier {
    Emergency,
    Moderate,
    Mild,
}

impl UrgencyTier {
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            UrgencyTier::Emergency => 1,
            UrgencyTier::Moderate => 2,
            UrgencyTier::Mild => 3,
        }
    }

    /// Human-readable status label shown to the patient.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UrgencyTier::Emergency => "DARURAT (Butuh Penanganan Segera)",
            UrgencyTier::Moderate => "SEDANG (Butuh Dokter)",
            UrgencyTier::Mild => "RINGAN (Rawat Jalan)",
        }
    }

    /// Ranking strategy used for this tier.
    #[must_use]
    pub fn ranking_mode(self) -> RankingMode {
        match self {
            UrgencyTier::Emergency => RankingMode::NearestFirst,
            UrgencyTier::Moderate | UrgencyTier::Mild => RankingMode::MostCapacityFirst,
        }
    }
}

impl From<UrgencyTier> for u8 {
    fn from(tier: UrgencyTier) -> Self {
        tier.level()
    }
}

impl TryFrom<u8> for UrgencyTier {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(UrgencyTier::Emergency),
            2 => Ok(UrgencyTier::Moderate),
            3 => Ok(UrgencyTier::Mild),
            other => Err(CoreError::InvalidTier(other)),
        }
    }
}

impl std::fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrgencyTier::Emergency => write!(f, "emergency"),
            UrgencyTier::Moderate => write!(f, "moderate"),
            UrgencyTier::Mild => write!(f, "mild"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyResult {
    pub tier: UrgencyTier,
    pub label: String,
}

impl From<UrgencyTier> for UrgencyResult {
    fn from(tier: UrgencyTier) -> Self {
        Self {
            tier,
            label: tier.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
    /// Ascending by distance. Used for emergencies.
    NearestFirst,
    /// Descending by available capacity. Used for everything else.
    MostCapacityFirst,
}

impl RankingMode {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            RankingMode::NearestFirst => "emergency mode: prioritizing nearest location",
            RankingMode::MostCapacityFirst => "normal mode: prioritizing bed availability",
        }
    }
}

/// Tunables for candidate selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Candidates at or beyond this distance are excluded.
    pub max_distance_km: f64,
    pub top_n: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl SearchParams {
    #[must_use]
    pub fn from_app_config(config: &crate::AppConfig) -> Self {
        Self {
            max_distance_km: config.max_distance_km,
            top_n: config.top_n,
        }
    }
}

/// Result of selection and ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// At least one hospital qualified. `total_qualifying` counts all of them,
    /// not just the truncated `top` list.
    Ranked {
        top: Vec<Candidate>,
        total_qualifying: usize,
    },
    /// Nothing qualified. This is a valid answer, not a load failure.
    NoResults,
}

impl SearchOutcome {
    #[must_use]
    pub fn top(&self) -> &[Candidate] {
        match self {
            SearchOutcome::Ranked { top, .. } => top,
            SearchOutcome::NoResults => &[],
        }
    }

    #[must_use]
    pub fn total_qualifying(&self) -> usize {
        match self {
            SearchOutcome::Ranked {
                total_qualifying, ..
            } => *total_qualifying,
            SearchOutcome::NoResults => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub urgency: UrgencyResult,
    pub mode: RankingMode,
    pub outcome: SearchOutcome,
}

/// A marker for the presentation layer's map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Hex colour, e.g. `"#FF0000"`.
    pub color: String,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    pub hospital_type: String,
    pub count: usize,
}

/// Aggregate counts over a normalized record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total: usize,
    pub with_emergency_services: usize,
    pub with_capacity: usize,
    /// Sorted by type name.
    pub by_type: Vec<TypeCount>,
}

impl DatasetSummary {
    #[must_use]
    pub fn from_records(records: &[HospitalRecord]) -> Self {
        let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
        for record in records {
            *by_type.entry(record.hospital_type.as_str()).or_default() += 1;
        }

        Self {
            total: records.len(),
            with_emergency_services: records
                .iter()
                .filter(|r| r.has_emergency_services)
                .count(),
            with_capacity: records.iter().filter(|r| r.has_capacity()).count(),
            by_type: by_type
                .into_iter()
                .map(|(hospital_type, count)| TypeCount {
                    hospital_type: hospital_type.to_string(),
                    count,
                })
                .collect(),
        }
    }
}
