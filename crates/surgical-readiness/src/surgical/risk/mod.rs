mod classify;
mod recommendations;

pub use classify::{asa_description, rcri_risk, surgical_risk, ASA_DESCRIPTIONS, ASA_NOT_ASSESSED};
pub use recommendations::{
    generate_recommendations, RecommendationRule, DOMAIN_ATTENTION_THRESHOLD, NO_RECOMMENDATIONS,
    OVERALL_ATTENTION_THRESHOLD, RECOMMENDATION_RULES,
};

use super::markers::MarkerRecord;
use serde::{Deserialize, Serialize};

/// Human-readable perioperative risk summary for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub asa_description: String,
    pub rcri_risk: String,
    pub surgical_risk: String,
    pub recommendations: Vec<String>,
}

/// Classifies the record's ordinal indices and attached scores.
///
/// Reads the derived `*_score` fields as stored on the record; callers that
/// hold an unscored record should run [`MarkerRecord::scored`] first.
pub fn calculate_detailed_risk_scores(markers: &MarkerRecord) -> RiskSummary {
    RiskSummary {
        asa_description: asa_description(markers.asa_score).to_string(),
        rcri_risk: rcri_risk(markers.rcri_score).to_string(),
        surgical_risk: surgical_risk(markers.overall_surgical_score).to_string(),
        recommendations: generate_recommendations(markers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn summarizes_a_well_optimized_patient() {
        let record = MarkerRecord {
            asa_score: Some(1),
            rcri_score: Some(0),
            heart_rate: Some(80.0),
            systolic_bp: Some(105.0),
            oxygen_saturation: Some(97.5),
            hemoglobin: Some(14.0),
            sodium: Some(140.0),
            ..MarkerRecord::new(
                "patient-4",
                NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
            )
        }
        .scored();

        let summary = calculate_detailed_risk_scores(&record);
        assert_eq!(summary.asa_description, "Healthy person");
        assert_eq!(
            summary.rcri_risk,
            "Very Low Risk (0.4% risk of cardiac complications)"
        );
        assert_eq!(
            summary.surgical_risk,
            "Low Risk - Proceed with standard precautions"
        );
        assert_eq!(summary.recommendations, vec![NO_RECOMMENDATIONS.to_string()]);
    }

    #[test]
    fn out_of_table_asa_and_high_rcri() {
        let record = MarkerRecord {
            asa_score: Some(7),
            rcri_score: Some(3),
            overall_surgical_score: Some(0.65),
            ..MarkerRecord::new(
                "patient-4",
                NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
            )
        };

        let summary = calculate_detailed_risk_scores(&record);
        assert_eq!(summary.asa_description, "Not assessed");
        assert_eq!(
            summary.rcri_risk,
            "High Risk (>11% risk of cardiac complications)"
        );
        assert_eq!(
            summary.surgical_risk,
            "Moderate Risk - Consider optimization before surgery"
        );
    }
}
