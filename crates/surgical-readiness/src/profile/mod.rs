//! General health-risk model over a comorbidity profile and CBC panel.
//!
//! Independent of the surgical-readiness scorer: it uses a multiplicative
//! penalty chain and its own clamped-linear CBC normalization.

pub mod cbc;
pub mod domain;
pub mod risk;

pub use cbc::{calculate_cbc_score, CbcParameter, CbcValues, CBC_NORMAL_RANGES};
pub use domain::{
    CardiacHistory, DiabetesHistory, DialysisType, MalignancyHistory, MedicalProfile,
    PulmonaryHistory, RenalHistory, SmokingHistory,
};
pub use risk::{applied_penalties, calculate_risk_score, PenaltyRule, PENALTY_RULES};

use serde::Serialize;

pub const RISK_FACTOR_WEIGHT: f64 = 0.6;
pub const CBC_WEIGHT: f64 = 0.4;

/// Blend of the comorbidity risk score and the CBC closeness score.
pub fn calculate_overall_health_score(profile: &MedicalProfile) -> f64 {
    HealthScoreBreakdown::from_profile(profile).overall_health_score
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthScoreBreakdown {
    pub risk_score: f64,
    pub cbc_score: f64,
    pub overall_health_score: f64,
    pub conditions: Vec<&'static str>,
}

impl HealthScoreBreakdown {
    pub fn from_profile(profile: &MedicalProfile) -> Self {
        let risk_score = calculate_risk_score(profile);
        let cbc_score = profile
            .cbc_values
            .as_ref()
            .map(calculate_cbc_score)
            .unwrap_or(0.0);

        Self {
            risk_score,
            cbc_score,
            overall_health_score: risk_score * RISK_FACTOR_WEIGHT + cbc_score * CBC_WEIGHT,
            conditions: applied_penalties(profile)
                .into_iter()
                .map(|rule| rule.condition)
                .collect(),
        }
    }
}
