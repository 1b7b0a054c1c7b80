use super::domains::Domain;
use super::markers::{MarkerRecord, SurgicalScores};
use serde::Serialize;

/// Contribution of each domain to the overall readiness score. The four
/// weights must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    pub cardiac: f64,
    pub pulmonary: f64,
    pub hematology: f64,
    pub metabolic: f64,
}

pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    cardiac: 0.30,
    pulmonary: 0.25,
    hematology: 0.25,
    metabolic: 0.20,
};

impl ScoreWeights {
    pub fn weight(&self, domain: Domain) -> f64 {
        match domain {
            Domain::Cardiac => self.cardiac,
            Domain::Pulmonary => self.pulmonary,
            Domain::Hematology => self.hematology,
            Domain::Metabolic => self.metabolic,
        }
    }

    pub fn total(&self) -> f64 {
        self.cardiac + self.pulmonary + self.hematology + self.metabolic
    }
}

/// Weighted sum of the four domain scores.
pub fn compose_overall_score(cardiac: f64, pulmonary: f64, hematology: f64, metabolic: f64) -> f64 {
    let weights = SCORE_WEIGHTS;
    let overall = cardiac * weights.cardiac
        + pulmonary * weights.pulmonary
        + hematology * weights.hematology
        + metabolic * weights.metabolic;

    // The float weight sum may overshoot 1.0 by an ulp.
    overall.clamp(0.0, 1.0)
}

/// Scores every domain and composes the overall readiness score.
pub fn calculate_surgical_scores(markers: &MarkerRecord) -> SurgicalScores {
    let cardiac_score = Domain::Cardiac.score(markers);
    let pulmonary_score = Domain::Pulmonary.score(markers);
    let hematology_score = Domain::Hematology.score(markers);
    let metabolic_score = Domain::Metabolic.score(markers);

    SurgicalScores {
        cardiac_score,
        pulmonary_score,
        hematology_score,
        metabolic_score,
        overall_surgical_score: compose_overall_score(
            cardiac_score,
            pulmonary_score,
            hematology_score,
            metabolic_score,
        ),
    }
}
