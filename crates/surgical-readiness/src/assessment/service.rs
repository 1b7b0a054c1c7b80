use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::report::ReadinessReport;
use super::repository::{MarkerRepository, RepositoryError};
use crate::surgical::{MarkerRecord, UserId};

/// Scores incoming assessments and serves readiness reports from storage.
pub struct SurgicalAssessmentService<R> {
    repository: Arc<R>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> String {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("assessment-{id:06}")
}

impl<R> SurgicalAssessmentService<R>
where
    R: MarkerRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Attach fresh scores to the record and persist it.
    pub fn record(&self, markers: MarkerRecord) -> Result<MarkerRecord, AssessmentServiceError> {
        let mut record = markers.scored();
        if record.id.is_none() {
            record.id = Some(next_assessment_id());
        }

        let stored = self.repository.insert(record).inspect_err(|err| {
            warn!(error = %err, "failed to persist surgical assessment");
        })?;

        info!(
            user_id = %stored.user_id,
            assessment_date = %stored.assessment_date,
            overall = stored.overall_surgical_score.unwrap_or_default(),
            "recorded surgical assessment"
        );
        Ok(stored)
    }

    pub fn history(&self, user_id: &UserId) -> Result<Vec<MarkerRecord>, AssessmentServiceError> {
        Ok(self.repository.history(user_id)?)
    }

    /// Report for the user's most recent assessment.
    pub fn latest_report(
        &self,
        user_id: &UserId,
    ) -> Result<ReadinessReport, AssessmentServiceError> {
        let record = self
            .repository
            .latest(user_id)?
            .ok_or(RepositoryError::NotFound)?;

        debug!(user_id = %user_id, assessment_date = %record.assessment_date, "building readiness report");
        Ok(ReadinessReport::from_record(record))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
