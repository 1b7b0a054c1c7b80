use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the patient account that owns an assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One surgical-marker assessment as captured by the intake form.
///
/// Every physiological field is independently optional. The `*_score`
/// fields are derived from the raw values by
/// [`calculate_surgical_scores`](super::calculate_surgical_scores) and can
/// always be recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: UserId,
    pub assessment_date: NaiveDate,

    // Cardiac
    pub ecg_status: Option<String>,
    pub heart_rate_variability: Option<f64>,
    pub troponin_level: Option<f64>,
    pub bnp_level: Option<f64>,
    pub ejection_fraction: Option<f64>,

    // Pulmonary
    pub oxygen_saturation: Option<f64>,
    pub fev1: Option<f64>,
    pub fvc: Option<f64>,
    pub abg_ph: Option<f64>,
    pub abg_po2: Option<f64>,
    pub abg_pco2: Option<f64>,

    // Hematology
    pub hemoglobin: Option<f64>,
    pub hematocrit: Option<f64>,
    pub wbc_count: Option<f64>,
    pub platelet_count: Option<f64>,
    pub iron_level: Option<f64>,
    pub ferritin: Option<f64>,
    pub pt: Option<f64>,
    pub ptt: Option<f64>,
    pub inr: Option<f64>,

    // Metabolic and biochemical
    pub sodium: Option<f64>,
    pub potassium: Option<f64>,
    pub chloride: Option<f64>,
    pub bicarbonate: Option<f64>,
    pub creatinine: Option<f64>,
    pub bun: Option<f64>,
    pub egfr: Option<f64>,
    pub alt: Option<f64>,
    pub ast: Option<f64>,
    pub alkaline_phosphatase: Option<f64>,
    pub bilirubin: Option<f64>,
    pub albumin: Option<f64>,
    pub blood_glucose: Option<f64>,
    pub hba1c: Option<f64>,
    pub total_cholesterol: Option<f64>,
    pub ldl: Option<f64>,
    pub hdl: Option<f64>,
    pub triglycerides: Option<f64>,

    // Inflammatory and nutritional
    pub crp: Option<f64>,
    pub esr: Option<f64>,
    pub bmi: Option<f64>,

    // Ordinal risk indices
    pub asa_score: Option<i32>,
    pub rcri_score: Option<i32>,

    // Vitals and lifestyle
    pub systolic_bp: Option<f64>,
    pub diastolic_bp: Option<f64>,
    pub heart_rate: Option<f64>,
    pub temperature: Option<f64>,
    pub smoking_status: Option<String>,
    pub alcohol_consumption: Option<String>,
    pub physical_activity_level: Option<String>,

    // Derived
    pub cardiac_score: Option<f64>,
    pub pulmonary_score: Option<f64>,
    pub hematology_score: Option<f64>,
    pub metabolic_score: Option<f64>,
    pub overall_surgical_score: Option<f64>,
}

impl MarkerRecord {
    pub fn new(user_id: impl Into<String>, assessment_date: NaiveDate) -> Self {
        Self {
            user_id: UserId(user_id.into()),
            assessment_date,
            ..Self::default()
        }
    }

    /// Attach previously computed scores, replacing any stale values.
    pub fn with_scores(mut self, scores: SurgicalScores) -> Self {
        self.cardiac_score = Some(scores.cardiac_score);
        self.pulmonary_score = Some(scores.pulmonary_score);
        self.hematology_score = Some(scores.hematology_score);
        self.metabolic_score = Some(scores.metabolic_score);
        self.overall_surgical_score = Some(scores.overall_surgical_score);
        self
    }

    /// Recompute the derived scores from the raw fields and attach them.
    pub fn scored(self) -> Self {
        let scores = super::calculate_surgical_scores(&self);
        self.with_scores(scores)
    }

    /// Scores currently attached to the record, if all five are present.
    pub fn attached_scores(&self) -> Option<SurgicalScores> {
        Some(SurgicalScores {
            cardiac_score: self.cardiac_score?,
            pulmonary_score: self.pulmonary_score?,
            hematology_score: self.hematology_score?,
            metabolic_score: self.metabolic_score?,
            overall_surgical_score: self.overall_surgical_score?,
        })
    }
}

/// Derived readiness scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurgicalScores {
    pub cardiac_score: f64,
    pub pulmonary_score: f64,
    pub hematology_score: f64,
    pub metabolic_score: f64,
    pub overall_surgical_score: f64,
}

/// Raw numeric marker fields read by the scorers, flags and rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerField {
    HeartRate,
    SystolicBp,
    DiastolicBp,
    EjectionFraction,
    OxygenSaturation,
    Fev1,
    Hemoglobin,
    Hematocrit,
    WbcCount,
    PlateletCount,
    Sodium,
    Potassium,
    Creatinine,
    Bun,
    BloodGlucose,
}

impl MarkerField {
    pub const fn name(self) -> &'static str {
        match self {
            Self::HeartRate => "heart_rate",
            Self::SystolicBp => "systolic_bp",
            Self::DiastolicBp => "diastolic_bp",
            Self::EjectionFraction => "ejection_fraction",
            Self::OxygenSaturation => "oxygen_saturation",
            Self::Fev1 => "fev1",
            Self::Hemoglobin => "hemoglobin",
            Self::Hematocrit => "hematocrit",
            Self::WbcCount => "wbc_count",
            Self::PlateletCount => "platelet_count",
            Self::Sodium => "sodium",
            Self::Potassium => "potassium",
            Self::Creatinine => "creatinine",
            Self::Bun => "bun",
            Self::BloodGlucose => "blood_glucose",
        }
    }

    pub fn read(self, record: &MarkerRecord) -> Option<f64> {
        match self {
            Self::HeartRate => record.heart_rate,
            Self::SystolicBp => record.systolic_bp,
            Self::DiastolicBp => record.diastolic_bp,
            Self::EjectionFraction => record.ejection_fraction,
            Self::OxygenSaturation => record.oxygen_saturation,
            Self::Fev1 => record.fev1,
            Self::Hemoglobin => record.hemoglobin,
            Self::Hematocrit => record.hematocrit,
            Self::WbcCount => record.wbc_count,
            Self::PlateletCount => record.platelet_count,
            Self::Sodium => record.sodium,
            Self::Potassium => record.potassium,
            Self::Creatinine => record.creatinine,
            Self::Bun => record.bun,
            Self::BloodGlucose => record.blood_glucose,
        }
    }
}
