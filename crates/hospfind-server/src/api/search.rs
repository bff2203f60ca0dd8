use axum::{extract::State, Extension, Json};
use hospfind_core::{MapPoint, SearchReport, UserQuery};
use hospfind_locator::{map_points, LocatorError};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{cached_records, dataset_unavailable, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SearchRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub complaint: String,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchResponse {
    #[serde(flatten)]
    pub report: SearchReport,
    pub map: Vec<MapPoint>,
}

pub(super) async fn search_hospitals(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<ApiResponse<SearchResponse>>, ApiError> {
    let records = cached_records(&state, &req_id.0).await?;
    let query = UserQuery::new(body.latitude, body.longitude, body.complaint);

    let report = hospfind_locator::search(&records, &query, &state.params).map_err(|e| match e {
        LocatorError::EmptyComplaint => {
            ApiError::new(req_id.0.clone(), "validation_error", e.to_string())
        }
        LocatorError::DatasetUnavailable => dataset_unavailable(req_id.0.clone()),
        other => {
            tracing::error!(error = %other, "hospital search failed");
            ApiError::new(req_id.0.clone(), "internal_error", "hospital search failed")
        }
    })?;

    let map = map_points(&query, report.outcome.top());

    Ok(Json(ApiResponse {
        data: SearchResponse { report, map },
        meta: ResponseMeta::new(req_id.0),
    }))
}
