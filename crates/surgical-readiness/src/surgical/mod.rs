//! Surgical-readiness scoring: raw markers are normalized per field,
//! averaged per physiological domain, composed into a weighted overall score
//! and classified into risk descriptions and recommendations.
//!
//! Every function in this module is pure and total over [`MarkerRecord`].

mod composer;
mod domains;
pub mod flags;
pub mod import;
mod markers;
mod normalize;
pub mod ranges;
pub mod risk;

pub use composer::{calculate_surgical_scores, compose_overall_score, ScoreWeights, SCORE_WEIGHTS};
pub use domains::{cardiac_score, hematology_score, metabolic_score, pulmonary_score, Domain};
pub use flags::{flag_markers, MarkerFlag, MarkerStatus, ScoreBand};
pub use import::{MarkerImportError, MarkerImporter};
pub use markers::{MarkerField, MarkerRecord, SurgicalScores, UserId};
pub use normalize::{normalize, normalize_in, NEUTRAL_SCORE};
pub use ranges::{ReferenceRange, NORMAL_RANGES};
pub use risk::{calculate_detailed_risk_scores, RiskSummary};
