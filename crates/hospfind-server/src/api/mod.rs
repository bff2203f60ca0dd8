mod dataset;
mod hospitals;
mod search;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use hospfind_core::SearchParams;
use hospfind_locator::{DatasetCache, SharedRecords};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, require_bearer_auth, AuthState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<DatasetCache>,
    pub params: SearchParams,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    dataset_records: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "unauthorized" => StatusCode::UNAUTHORIZED,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "dataset_unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Returns the cached records, loading them off the async runtime on first use.
pub(super) async fn cached_records(
    state: &AppState,
    request_id: &str,
) -> Result<SharedRecords, ApiError> {
    let cache = Arc::clone(&state.cache);
    tokio::task::spawn_blocking(move || cache.get())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "dataset load task failed");
            ApiError::new(request_id, "internal_error", "dataset load failed")
        })
}

pub(super) fn dataset_unavailable(request_id: impl Into<String>) -> ApiError {
    ApiError::new(
        request_id,
        "dataset_unavailable",
        "hospital dataset could not be loaded",
    )
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-request-id"),
        ])
}

fn protected_router(auth: AuthState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/dataset/reload", post(dataset::reload_dataset))
        .layer(axum::middleware::from_fn_with_state(
            auth,
            require_bearer_auth,
        ))
}

pub fn build_app(state: AppState, auth: AuthState) -> Router {
    let public_routes = Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/search", post(search::search_hospitals))
        .route(
            "/api/v1/hospitals/summary",
            get(hospitals::hospitals_summary),
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_router(auth))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<impl IntoResponse, ApiError> {
    let records = cached_records(&state, &req_id.0).await?;
    let meta = ResponseMeta::new(req_id.0);

    if records.is_empty() {
        tracing::warn!(
            path = %state.cache.path().display(),
            "health check: hospital dataset unavailable"
        );
        return Ok((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                data: HealthData {
                    status: "degraded",
                    dataset_records: 0,
                },
                meta,
            }),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData {
                status: "ok",
                dataset_records: records.len(),
            },
            meta,
        }),
    ))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
