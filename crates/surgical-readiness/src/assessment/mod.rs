//! Assessment intake and reporting over a pluggable marker repository.

pub mod report;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use report::ReadinessReport;
pub use repository::{MarkerRepository, RepositoryError};
pub use router::assessment_router;
pub use service::{AssessmentServiceError, SurgicalAssessmentService};
