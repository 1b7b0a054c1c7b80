use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::assessment::repository::{MarkerRepository, RepositoryError};
use crate::assessment::{assessment_router, SurgicalAssessmentService};
use crate::surgical::{MarkerRecord, UserId};

pub(super) fn assessment_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, day).expect("valid assessment date")
}

/// Anemic, hypotensive patient with poor overall readiness.
pub(super) fn frail_markers(user: &str, day: u32) -> MarkerRecord {
    MarkerRecord {
        asa_score: Some(3),
        rcri_score: Some(2),
        heart_rate: Some(118.0),
        systolic_bp: Some(84.0),
        oxygen_saturation: Some(91.0),
        hemoglobin: Some(8.4),
        platelet_count: Some(120_000.0),
        creatinine: Some(1.9),
        ..MarkerRecord::new(user, assessment_date(day))
    }
}

/// Every scored field sits at the midpoint of its scoring window.
pub(super) fn optimal_markers(user: &str, day: u32) -> MarkerRecord {
    MarkerRecord {
        asa_score: Some(1),
        rcri_score: Some(0),
        heart_rate: Some(80.0),
        systolic_bp: Some(105.0),
        ejection_fraction: Some(60.0),
        oxygen_saturation: Some(97.5),
        fev1: Some(80.0),
        hemoglobin: Some(14.0),
        wbc_count: Some(7_500.0),
        platelet_count: Some(300_000.0),
        sodium: Some(140.0),
        potassium: Some(4.25),
        creatinine: Some(0.9),
        ..MarkerRecord::new(user, assessment_date(day))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<MarkerRecord>>>,
}

impl MarkerRepository for MemoryRepository {
    fn insert(&self, record: MarkerRecord) -> Result<MarkerRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn history(&self, user_id: &UserId) -> Result<Vec<MarkerRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<MarkerRecord> = guard
            .iter()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.assessment_date.cmp(&a.assessment_date));
        Ok(records)
    }
}

pub(super) struct UnavailableRepository;

impl MarkerRepository for UnavailableRepository {
    fn insert(&self, _record: MarkerRecord) -> Result<MarkerRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn history(&self, _user_id: &UserId) -> Result<Vec<MarkerRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    SurgicalAssessmentService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = SurgicalAssessmentService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_service(
    service: SurgicalAssessmentService<MemoryRepository>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
