//! End-to-end search over an already loaded record set.

use hospfind_core::{HospitalRecord, SearchParams, SearchReport, UserQuery};

use crate::error::LocatorError;
use crate::rank::select_and_rank;
use crate::triage::{classify_urgency, validate_complaint};

/// Classifies the complaint, then selects and ranks hospitals.
///
/// An empty `records` slice means the dataset failed to load and is reported
/// as [`LocatorError::DatasetUnavailable`], which is distinct from a
/// successful search with [`hospfind_core::SearchOutcome::NoResults`].
///
/// # Errors
///
/// Returns [`LocatorError::DatasetUnavailable`] for an empty record set and
/// [`LocatorError::EmptyComplaint`] for blank complaint text.
pub fn search(
    records: &[HospitalRecord],
    query: &UserQuery,
    params: &SearchParams,
) -> Result<SearchReport, LocatorError> {
    if records.is_empty() {
        return Err(LocatorError::DatasetUnavailable);
    }
    let complaint = validate_complaint(&query.complaint)?;

    let urgency = classify_urgency(complaint);
    let mode = urgency.tier.ranking_mode();
    let outcome = select_and_rank(records, query, urgency.tier, params);

    tracing::info!(
        tier = urgency.tier.level(),
        mode = ?mode,
        qualifying = outcome.total_qualifying(),
        returned = outcome.top().len(),
        "hospital search completed"
    );

    Ok(SearchReport {
        urgency,
        mode,
        outcome,
    })
}
