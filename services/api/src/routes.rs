use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use surgical_readiness::assessment::{
    assessment_router, MarkerRepository, SurgicalAssessmentService,
};
use surgical_readiness::error::AppError;
use surgical_readiness::surgical::{
    calculate_detailed_risk_scores, MarkerImporter, MarkerRecord, RiskSummary,
};

#[derive(Debug, Deserialize)]
pub(crate) struct MarkerImportRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoredImportEntry {
    pub(crate) assessment: MarkerRecord,
    pub(crate) risk: RiskSummary,
}

#[derive(Debug, Serialize)]
pub(crate) struct MarkerImportResponse {
    pub(crate) imported: usize,
    pub(crate) assessments: Vec<ScoredImportEntry>,
}

pub(crate) fn with_surgical_routes<R>(
    service: Arc<SurgicalAssessmentService<R>>,
) -> axum::Router
where
    R: MarkerRepository + 'static,
{
    assessment_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/surgical/import", post(marker_import_endpoint))
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

/// Scores a pasted CSV export without storing it.
pub(crate) async fn marker_import_endpoint(
    Json(payload): Json<MarkerImportRequest>,
) -> Result<Json<MarkerImportResponse>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let assessments: Vec<ScoredImportEntry> = MarkerImporter::scored_from_reader(reader)?
        .into_iter()
        .map(|assessment| ScoredImportEntry {
            risk: calculate_detailed_risk_scores(&assessment),
            assessment,
        })
        .collect();

    Ok(Json(MarkerImportResponse {
        imported: assessments.len(),
        assessments,
    }))
}
