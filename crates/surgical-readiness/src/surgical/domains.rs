use super::markers::{MarkerField, MarkerRecord};
use super::normalize::{normalize_in, NEUTRAL_SCORE};
use super::ranges::{
    ReferenceRange, EJECTION_FRACTION_SCORING_RANGE, FEV1_SCORING_RANGE,
    HEART_RATE_SCORING_RANGE, NORMAL_RANGES,
};
use serde::{Deserialize, Serialize};

/// Physiological system scored independently before composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Cardiac,
    Pulmonary,
    Hematology,
    Metabolic,
}

impl Domain {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Cardiac,
            Self::Pulmonary,
            Self::Hematology,
            Self::Metabolic,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cardiac => "Cardiac",
            Self::Pulmonary => "Pulmonary",
            Self::Hematology => "Hematology",
            Self::Metabolic => "Metabolic",
        }
    }

    /// Marker fields contributing to the domain and the window each is
    /// normalized against.
    pub fn inputs(self) -> Vec<(MarkerField, ReferenceRange)> {
        match self {
            Self::Cardiac => vec![
                (MarkerField::HeartRate, HEART_RATE_SCORING_RANGE),
                (MarkerField::SystolicBp, NORMAL_RANGES.systolic_bp),
                (MarkerField::EjectionFraction, EJECTION_FRACTION_SCORING_RANGE),
            ],
            Self::Pulmonary => vec![
                (MarkerField::OxygenSaturation, NORMAL_RANGES.oxygen_saturation),
                (MarkerField::Fev1, FEV1_SCORING_RANGE),
            ],
            Self::Hematology => vec![
                (MarkerField::Hemoglobin, NORMAL_RANGES.hemoglobin),
                (MarkerField::WbcCount, NORMAL_RANGES.wbc_count),
                (MarkerField::PlateletCount, NORMAL_RANGES.platelet_count),
            ],
            Self::Metabolic => vec![
                (MarkerField::Sodium, NORMAL_RANGES.sodium),
                (MarkerField::Potassium, NORMAL_RANGES.potassium),
                (MarkerField::Creatinine, NORMAL_RANGES.creatinine),
            ],
        }
    }

    /// Mean normalized score over the populated inputs, neutral when none are.
    pub fn score(self, markers: &MarkerRecord) -> f64 {
        let scores: Vec<f64> = self
            .inputs()
            .into_iter()
            .filter_map(|(field, range)| {
                field
                    .read(markers)
                    .map(|value| normalize_in(Some(value), range))
            })
            .collect();

        if scores.is_empty() {
            NEUTRAL_SCORE
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        }
    }
}

pub fn cardiac_score(markers: &MarkerRecord) -> f64 {
    Domain::Cardiac.score(markers)
}

pub fn pulmonary_score(markers: &MarkerRecord) -> f64 {
    Domain::Pulmonary.score(markers)
}

pub fn hematology_score(markers: &MarkerRecord) -> f64 {
    Domain::Hematology.score(markers)
}

pub fn metabolic_score(markers: &MarkerRecord) -> f64 {
    Domain::Metabolic.score(markers)
}
