use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use surgical_readiness::assessment::{MarkerRepository, RepositoryError};
use surgical_readiness::surgical::{MarkerRecord, UserId};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local assessment store used until a hosted database is wired in.
#[derive(Default, Clone)]
pub(crate) struct InMemoryMarkerRepository {
    records: Arc<Mutex<Vec<MarkerRecord>>>,
}

impl MarkerRepository for InMemoryMarkerRepository {
    fn insert(&self, record: MarkerRecord) -> Result<MarkerRecord, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        if record.id.is_some() && guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn history(&self, user_id: &UserId) -> Result<Vec<MarkerRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        let mut records: Vec<MarkerRecord> = guard
            .iter()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect();
        // Stable sort keeps insertion order for assessments on the same day.
        records.sort_by(|a, b| b.assessment_date.cmp(&a.assessment_date));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, user: &str, day: u32) -> MarkerRecord {
        MarkerRecord {
            id: Some(id.to_string()),
            ..MarkerRecord::new(
                user,
                NaiveDate::from_ymd_opt(2024, 5, day).expect("valid date"),
            )
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let repository = InMemoryMarkerRepository::default();
        repository
            .insert(record("a-1", "patient-1", 1))
            .expect("first insert");
        let err = repository
            .insert(record("a-1", "patient-1", 2))
            .expect_err("duplicate rejected");
        assert!(matches!(err, RepositoryError::Conflict));
    }

    #[test]
    fn latest_is_newest_assessment_for_user() {
        let repository = InMemoryMarkerRepository::default();
        repository.insert(record("a-1", "patient-1", 3)).expect("insert");
        repository.insert(record("a-2", "patient-1", 9)).expect("insert");
        repository.insert(record("a-3", "patient-2", 20)).expect("insert");

        let latest = repository
            .latest(&UserId::from("patient-1"))
            .expect("readable")
            .expect("present");
        assert_eq!(latest.id.as_deref(), Some("a-2"));
        assert!(repository
            .latest(&UserId::from("patient-3"))
            .expect("readable")
            .is_none());
    }
}
