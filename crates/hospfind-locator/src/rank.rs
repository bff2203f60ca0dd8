//! Candidate selection and ranking.
//!
//! Filters run in a fixed order: emergency-service requirement (tier 1
//! only), then capacity, then distance. Sorting is stable, so equal keys keep
//! dataset order.

use hospfind_core::{
    Candidate, HospitalRecord, RankingMode, SearchOutcome, SearchParams, UrgencyTier, UserQuery,
};

use crate::geo::distance_km;

/// Returns every record that qualifies for `tier`, annotated with its
/// distance from the user, in dataset order.
#[must_use]
pub fn select_candidates(
    records: &[HospitalRecord],
    query: &UserQuery,
    tier: UrgencyTier,
    params: &SearchParams,
) -> Vec<Candidate> {
    records
        .iter()
        .filter(|r| tier != UrgencyTier::Emergency || r.has_emergency_services)
        .filter(|r| r.has_capacity())
        .filter_map(|r| {
            let distance = distance_km(query.latitude, query.longitude, r.latitude, r.longitude);
            (distance < params.max_distance_km).then(|| Candidate {
                hospital: r.clone(),
                distance_km: distance,
            })
        })
        .collect()
}

/// Sorts candidates in place for the given mode.
pub fn rank_candidates(candidates: &mut [Candidate], mode: RankingMode) {
    match mode {
        RankingMode::NearestFirst => {
            candidates.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        }
        RankingMode::MostCapacityFirst => {
            candidates.sort_by(|a, b| {
                b.hospital
                    .available_capacity
                    .cmp(&a.hospital.available_capacity)
            });
        }
    }
}

/// Selects, ranks and truncates.
///
/// `total_qualifying` in the result counts every qualifying candidate, not
/// just the `params.top_n` returned.
#[must_use]
pub fn select_and_rank(
    records: &[HospitalRecord],
    query: &UserQuery,
    tier: UrgencyTier,
    params: &SearchParams,
) -> SearchOutcome {
    let mut candidates = select_candidates(records, query, tier, params);
    if candidates.is_empty() {
        return SearchOutcome::NoResults;
    }

    let total_qualifying = candidates.len();
    rank_candidates(&mut candidates, tier.ranking_mode());
    candidates.truncate(params.top_n);

    SearchOutcome::Ranked {
        top: candidates,
        total_qualifying,
    }
}

#[cfg(test)]
#[path = "rank_test.rs"]
mod tests;
