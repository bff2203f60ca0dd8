use axum::{extract::State, Extension, Json};
use hospfind_core::DatasetSummary;

use crate::middleware::RequestId;

use super::{cached_records, ApiError, ApiResponse, AppState, ResponseMeta};

/// Counts over the normalized hospital set. An unreadable dataset reports zeros.
pub(super) async fn hospitals_summary(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<DatasetSummary>>, ApiError> {
    let records = cached_records(&state, &req_id.0).await?;

    Ok(Json(ApiResponse {
        data: DatasetSummary::from_records(&records),
        meta: ResponseMeta::new(req_id.0),
    }))
}
