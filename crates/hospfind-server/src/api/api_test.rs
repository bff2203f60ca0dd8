use std::io::Write;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use tower::ServiceExt;

use super::*;

const FIXTURE: &str = "\
Hospital Name,Hospital Type,Emergency Services,Hospital overall rating,Location
SARASOTA MEMORIAL HOSPITAL,Acute Care Hospitals,Yes,4,\"1700 S TAMIAMI TRL
SARASOTA, FL 34239
(27.3233, -82.5246)\"
DOCTORS HOSPITAL OF SARASOTA,Acute Care Hospitals,Yes,2,\"5731 BEE RIDGE RD
SARASOTA, FL 34233
(27.2986, -82.4523)\"
BRADENTON CLINIC,Critical Access Hospitals,No,5,\"2020 59TH ST W
BRADENTON, FL 34209
(27.4820, -82.6087)\"
";

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

fn state_for(file: &tempfile::NamedTempFile) -> AppState {
    AppState {
        cache: Arc::new(DatasetCache::new(file.path())),
        params: SearchParams::default(),
    }
}

fn app_for(file: &tempfile::NamedTempFile, auth: AuthState) -> Router {
    build_app(state_for(file), auth)
}

fn search_request(body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/search")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&body).expect("json parse")
}

#[test]
fn api_error_validation_error_maps_to_bad_request() {
    let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn api_error_dataset_unavailable_maps_to_service_unavailable() {
    let response = dataset_unavailable("req-1").into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn api_error_unknown_code_maps_to_internal_error() {
    let response = ApiError::new("req-1", "internal_error", "boom").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_reports_record_count_and_request_id() {
    let file = write_fixture(FIXTURE);
    let response = app_for(&file, AuthState::disabled())
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .header("x-request-id", "req-health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("req-health")
    );
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["dataset_records"], 3);
    assert_eq!(json["meta"]["request_id"], "req-health");
}

#[tokio::test]
async fn health_is_degraded_when_dataset_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let state = AppState {
        cache: Arc::new(DatasetCache::new(dir.path().join("missing.csv"))),
        params: SearchParams::default(),
    };
    let response = build_app(state, AuthState::disabled())
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "degraded");
}

#[tokio::test]
async fn emergency_search_returns_nearest_with_er_and_map() {
    let file = write_fixture(FIXTURE);
    let response = app_for(&file, AuthState::disabled())
        .oneshot(search_request(&serde_json::json!({
            "latitude": 27.3364,
            "longitude": -82.5307,
            "complaint": "nyeri dada, sesak napas"
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["urgency"]["tier"], 1);
    assert_eq!(data["mode"], "nearest_first");
    assert_eq!(data["outcome"]["status"], "ranked");
    assert_eq!(data["outcome"]["total_qualifying"], 2);

    let top = data["outcome"]["top"].as_array().expect("top array");
    assert_eq!(top[0]["name"], "SARASOTA MEMORIAL HOSPITAL");
    assert_eq!(top[1]["name"], "DOCTORS HOSPITAL OF SARASOTA");

    let map = data["map"].as_array().expect("map array");
    assert_eq!(map.len(), 3);
    assert_eq!(map[2]["color"], "#0000FF");
}

#[tokio::test]
async fn mild_search_ranks_by_capacity() {
    let file = write_fixture(FIXTURE);
    let response = app_for(&file, AuthState::disabled())
        .oneshot(search_request(&serde_json::json!({
            "latitude": 27.3364,
            "longitude": -82.5307,
            "complaint": "batuk ringan"
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["urgency"]["tier"], 3);
    assert_eq!(json["data"]["mode"], "most_capacity_first");
    assert_eq!(
        json["data"]["outcome"]["top"][0]["name"],
        "BRADENTON CLINIC"
    );
}

#[tokio::test]
async fn search_far_away_reports_no_results() {
    let file = write_fixture(FIXTURE);
    let response = app_for(&file, AuthState::disabled())
        .oneshot(search_request(&serde_json::json!({
            "latitude": -6.2088,
            "longitude": 106.8456,
            "complaint": "demam"
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["outcome"]["status"], "no_results");
    assert_eq!(json["data"]["map"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn blank_complaint_is_a_validation_error() {
    let file = write_fixture(FIXTURE);
    let response = app_for(&file, AuthState::disabled())
        .oneshot(search_request(&serde_json::json!({
            "latitude": 27.3364,
            "longitude": -82.5307,
            "complaint": "   "
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn search_without_dataset_is_service_unavailable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let state = AppState {
        cache: Arc::new(DatasetCache::new(dir.path().join("missing.csv"))),
        params: SearchParams::default(),
    };
    let response = build_app(state, AuthState::disabled())
        .oneshot(search_request(&serde_json::json!({
            "latitude": 27.3364,
            "longitude": -82.5307,
            "complaint": "demam"
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "dataset_unavailable");
}

#[tokio::test]
async fn summary_counts_records() {
    let file = write_fixture(FIXTURE);
    let response = app_for(&file, AuthState::disabled())
        .oneshot(
            Request::builder()
                .uri("/api/v1/hospitals/summary")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 3);
    assert_eq!(json["data"]["with_emergency_services"], 2);
    assert_eq!(json["data"]["by_type"][0]["hospital_type"], "Acute Care Hospitals");
    assert_eq!(json["data"]["by_type"][0]["count"], 2);
}

#[tokio::test]
async fn reload_requires_bearer_token_when_enabled() {
    let file = write_fixture(FIXTURE);
    let auth = AuthState::from_keys("secret", false).expect("auth");
    let response = app_for(&file, auth)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/dataset/reload")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reload_picks_up_new_rows() {
    let file = write_fixture(FIXTURE);
    let state = state_for(&file);
    assert_eq!(state.cache.get().len(), 3);

    let extra = "ENGLEWOOD COMMUNITY HOSPITAL,Acute Care Hospitals,Yes,3,\"700 MEDICAL BLVD\nENGLEWOOD, FL 34223\n(26.9620, -82.3526)\"\n";
    let mut f = file.reopen().expect("reopen");
    f.write_all(format!("{FIXTURE}{extra}").as_bytes())
        .expect("rewrite fixture");

    let auth = AuthState::from_keys("secret", false).expect("auth");
    let response = build_app(state.clone(), auth)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/dataset/reload")
                .header("authorization", "Bearer secret")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["records"], 4);
    assert_eq!(state.cache.get().len(), 4);
}
