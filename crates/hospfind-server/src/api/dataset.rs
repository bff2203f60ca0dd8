use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{dataset_unavailable, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct ReloadResponse {
    pub path: String,
    pub records: usize,
}

pub(super) async fn reload_dataset(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<ReloadResponse>>, ApiError> {
    let cache = Arc::clone(&state.cache);
    let records = tokio::task::spawn_blocking(move || cache.reload())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "dataset reload task failed");
            ApiError::new(req_id.0.clone(), "internal_error", "dataset reload failed")
        })?;

    // the empty set stays cached; a later reload can still recover
    if records.is_empty() {
        return Err(dataset_unavailable(req_id.0));
    }

    Ok(Json(ApiResponse {
        data: ReloadResponse {
            path: state.cache.path().display().to_string(),
            records: records.len(),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
