use serde::{Deserialize, Serialize};

use super::cbc::CbcValues;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardiacHistory {
    pub has_condition: bool,
    pub ccf: bool,
    pub valvular_heart_disease: bool,
    pub cardiomyopathy: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulmonaryHistory {
    pub copd: bool,
    pub asthma: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialysisType {
    PostTransplant,
    JustPrior,
    ImmediatePost,
    Intermittent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenalHistory {
    pub dialysis_type: Option<DialysisType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiabetesHistory {
    pub is_diabetic: bool,
    pub on_insulin: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokingHistory {
    pub is_smoker: bool,
    pub cigarettes_per_day: Option<f64>,
}

impl SmokingHistory {
    pub fn is_heavy(&self) -> bool {
        self.is_smoker && self.cigarettes_per_day.is_some_and(|count| count > 10.0)
    }
}

/// Malignancy history by site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MalignancyHistory {
    pub head_and_neck: bool,
    pub lungs: bool,
    pub git: bool,
    pub brain: bool,
    pub renal: bool,
    pub blood: bool,
}

/// Comorbidity profile feeding the general health-risk model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalProfile {
    pub user_id: Option<String>,
    pub cardiac: CardiacHistory,
    pub pulmonary: PulmonaryHistory,
    pub renal: RenalHistory,
    pub diabetes: DiabetesHistory,
    pub smoking: SmokingHistory,
    pub malignancy: MalignancyHistory,
    pub hyperthyroid: bool,
    /// Free-text description; any non-blank entry counts as liver disease.
    pub liver_diseases: Option<String>,
    pub cbc_values: Option<CbcValues>,
}

impl MedicalProfile {
    pub fn has_liver_disease(&self) -> bool {
        // Whitespace-only entries are blank form fields, not a diagnosis.
        self.liver_diseases
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty())
    }
}
