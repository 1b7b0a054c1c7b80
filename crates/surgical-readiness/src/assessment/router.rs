use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::repository::{MarkerRepository, RepositoryError};
use super::service::{AssessmentServiceError, SurgicalAssessmentService};
use crate::error::AppError;
use crate::profile::{HealthScoreBreakdown, MedicalProfile};
use crate::surgical::flags::{domain_bands, DomainBand};
use crate::surgical::{
    calculate_detailed_risk_scores, calculate_surgical_scores, MarkerRecord, RiskSummary,
    ScoreBand, SurgicalScores, UserId,
};

/// Router exposing scoring, risk and assessment history endpoints.
pub fn assessment_router<R>(service: Arc<SurgicalAssessmentService<R>>) -> Router
where
    R: MarkerRepository + 'static,
{
    Router::new()
        .route("/api/v1/surgical/scores", post(scores_handler))
        .route("/api/v1/surgical/risk", post(risk_handler))
        .route("/api/v1/surgical/assessments", post(record_handler::<R>))
        .route(
            "/api/v1/surgical/assessments/:user_id",
            get(history_handler::<R>),
        )
        .route(
            "/api/v1/surgical/assessments/:user_id/latest",
            get(latest_handler::<R>),
        )
        .route("/api/v1/profile/health-score", post(health_score_handler))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoresResponse {
    #[serde(flatten)]
    pub(crate) scores: SurgicalScores,
    pub(crate) overall_band: ScoreBand,
    pub(crate) domain_bands: Vec<DomainBand>,
}

pub(crate) async fn scores_handler(Json(markers): Json<MarkerRecord>) -> Json<ScoresResponse> {
    let scores = calculate_surgical_scores(&markers);
    Json(ScoresResponse {
        scores,
        overall_band: ScoreBand::from_score(scores.overall_surgical_score),
        domain_bands: domain_bands(&scores),
    })
}

/// Records arriving without attached scores are scored first.
pub(crate) async fn risk_handler(Json(markers): Json<MarkerRecord>) -> Json<RiskSummary> {
    let markers = if markers.attached_scores().is_some() {
        markers
    } else {
        markers.scored()
    };
    Json(calculate_detailed_risk_scores(&markers))
}

pub(crate) async fn health_score_handler(
    Json(profile): Json<MedicalProfile>,
) -> Json<HealthScoreBreakdown> {
    Json(HealthScoreBreakdown::from_profile(&profile))
}

pub(crate) async fn record_handler<R>(
    State(service): State<Arc<SurgicalAssessmentService<R>>>,
    Json(markers): Json<MarkerRecord>,
) -> Response
where
    R: MarkerRepository + 'static,
{
    match service.record(markers) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<SurgicalAssessmentService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: MarkerRepository + 'static,
{
    match service.history(&UserId(user_id)) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn latest_handler<R>(
    State(service): State<Arc<SurgicalAssessmentService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: MarkerRepository + 'static,
{
    let user_id = UserId(user_id);
    match service.latest_report(&user_id) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "user_id": user_id.0,
                "error": "no surgical assessment recorded",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: AssessmentServiceError) -> Response {
    AppError::from(err).into_response()
}
