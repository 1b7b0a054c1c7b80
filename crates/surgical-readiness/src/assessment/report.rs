use serde::Serialize;

use crate::surgical::flags::{abnormal_markers, domain_bands, DomainBand};
use crate::surgical::{
    calculate_detailed_risk_scores, MarkerFlag, MarkerRecord, RiskSummary, ScoreBand,
    SurgicalScores,
};

/// Everything the dashboard shows for one assessment.
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessReport {
    pub assessment: MarkerRecord,
    pub scores: SurgicalScores,
    pub overall_band: ScoreBand,
    pub domain_bands: Vec<DomainBand>,
    pub risk: RiskSummary,
    pub abnormal_markers: Vec<MarkerFlag>,
}

impl ReadinessReport {
    /// Builds the report from the raw fields; stored scores are recomputed.
    pub fn from_record(record: MarkerRecord) -> Self {
        let scores = crate::surgical::calculate_surgical_scores(&record);
        let assessment = record.with_scores(scores);

        Self {
            overall_band: ScoreBand::from_score(scores.overall_surgical_score),
            domain_bands: domain_bands(&scores),
            risk: calculate_detailed_risk_scores(&assessment),
            abnormal_markers: abnormal_markers(&assessment),
            scores,
            assessment,
        }
    }
}
