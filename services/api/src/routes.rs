use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use civic_triage::triage::{summarize_profile, ProfileSnapshot, ReportEvent, ReportSummary};
use serde::Deserialize;
use serde_json::json;

use crate::infra::{triage_report, AppState, TriageEngines, TriageOutcome, TriageRequest};

/// Reporter history as supplied by the report/event store.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProfileRequest {
    #[serde(default)]
    pub(crate) reports: Vec<ReportSummary>,
    #[serde(default)]
    pub(crate) events: Vec<ReportEvent>,
}

pub(crate) fn triage_routes(engines: Arc<TriageEngines>) -> Router {
    Router::new()
        .route("/api/v1/reports/triage", post(triage_endpoint))
        .route("/api/v1/profiles/summary", post(profile_endpoint))
        .with_state(engines)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn triage_endpoint(
    State(engines): State<Arc<TriageEngines>>,
    Json(request): Json<TriageRequest>,
) -> Json<TriageOutcome> {
    Json(triage_report(&engines, request))
}

pub(crate) async fn profile_endpoint(
    Json(request): Json<ProfileRequest>,
) -> Json<ProfileSnapshot> {
    Json(summarize_profile(&request.reports, &request.events))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
