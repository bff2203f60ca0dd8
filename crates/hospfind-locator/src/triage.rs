//! Keyword triage of free-text complaints.
//!
//! A fixed lookup, not a medical model. Keywords are lowercase Indonesian
//! substrings; tiers are checked in severity order and the first tier with
//! any hit wins.

use hospfind_core::{UrgencyResult, UrgencyTier};

use crate::error::LocatorError;

/// Tier 1: cardiac distress, breathing difficulty, fainting, bleeding,
/// critical condition, traffic accident, death.
pub const EMERGENCY_KEYWORDS: &[&str] = &[
    "jantung",
    "sesak",
    "pingsan",
    "darah",
    "kritis",
    "kecelakaan",
    "mati",
];

/// Tier 2: fracture, fever, vomiting, wound, generic pain.
pub const MODERATE_KEYWORDS: &[&str] = &["patah", "demam", "muntah", "luka", "sakit"];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}

/// Maps complaint text to an urgency tier.
///
/// Matching is case-insensitive substring membership, so `"sakit"` also
/// matches inside `"kesakitan"`.
#[must_use]
pub fn classify_tier(complaint: &str) -> UrgencyTier {
    let lower = complaint.to_lowercase();
    if contains_any(&lower, EMERGENCY_KEYWORDS) {
        UrgencyTier::Emergency
    } else if contains_any(&lower, MODERATE_KEYWORDS) {
        UrgencyTier::Moderate
    } else {
        UrgencyTier::Mild
    }
}

/// Maps complaint text to a tier and its status label.
#[must_use]
pub fn classify_urgency(complaint: &str) -> UrgencyResult {
    UrgencyResult::from(classify_tier(complaint))
}

/// Rejects empty or whitespace-only complaints before the pipeline runs.
///
/// # Errors
///
/// Returns [`LocatorError::EmptyComplaint`].
pub fn validate_complaint(complaint: &str) -> Result<&str, LocatorError> {
    let trimmed = complaint.trim();
    if trimmed.is_empty() {
        Err(LocatorError::EmptyComplaint)
    } else {
        Ok(trimmed)
    }
}
