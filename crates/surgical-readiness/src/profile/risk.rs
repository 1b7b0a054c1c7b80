use super::domain::MedicalProfile;

/// Multiplicative penalty applied when a comorbidity is present.
#[derive(Debug, Clone, Copy)]
pub struct PenaltyRule {
    pub condition: &'static str,
    pub factor: f64,
    pub applies: fn(&MedicalProfile) -> bool,
}

/// Every factor lies in `(0, 1)`; application order does not change the
/// product.
pub static PENALTY_RULES: [PenaltyRule; 19] = [
    PenaltyRule {
        condition: "cardiac_condition",
        factor: 0.8,
        applies: |profile| profile.cardiac.has_condition,
    },
    PenaltyRule {
        condition: "congestive_cardiac_failure",
        factor: 0.9,
        applies: |profile| profile.cardiac.has_condition && profile.cardiac.ccf,
    },
    PenaltyRule {
        condition: "valvular_heart_disease",
        factor: 0.9,
        applies: |profile| profile.cardiac.has_condition && profile.cardiac.valvular_heart_disease,
    },
    PenaltyRule {
        condition: "cardiomyopathy",
        factor: 0.85,
        applies: |profile| profile.cardiac.has_condition && profile.cardiac.cardiomyopathy,
    },
    PenaltyRule {
        condition: "copd",
        factor: 0.85,
        applies: |profile| profile.pulmonary.copd,
    },
    PenaltyRule {
        condition: "asthma",
        factor: 0.9,
        applies: |profile| profile.pulmonary.asthma,
    },
    PenaltyRule {
        condition: "dialysis",
        factor: 0.8,
        applies: |profile| profile.renal.dialysis_type.is_some(),
    },
    PenaltyRule {
        condition: "diabetes",
        factor: 0.9,
        applies: |profile| profile.diabetes.is_diabetic,
    },
    PenaltyRule {
        condition: "insulin_dependence",
        factor: 0.95,
        applies: |profile| profile.diabetes.is_diabetic && profile.diabetes.on_insulin,
    },
    PenaltyRule {
        condition: "smoker",
        factor: 0.85,
        applies: |profile| profile.smoking.is_smoker,
    },
    PenaltyRule {
        condition: "heavy_smoker",
        factor: 0.9,
        applies: |profile| profile.smoking.is_heavy(),
    },
    PenaltyRule {
        condition: "malignancy_head_and_neck",
        factor: 0.8,
        applies: |profile| profile.malignancy.head_and_neck,
    },
    PenaltyRule {
        condition: "malignancy_lungs",
        factor: 0.75,
        applies: |profile| profile.malignancy.lungs,
    },
    PenaltyRule {
        condition: "malignancy_git",
        factor: 0.85,
        applies: |profile| profile.malignancy.git,
    },
    PenaltyRule {
        condition: "malignancy_brain",
        factor: 0.7,
        applies: |profile| profile.malignancy.brain,
    },
    PenaltyRule {
        condition: "malignancy_renal",
        factor: 0.8,
        applies: |profile| profile.malignancy.renal,
    },
    PenaltyRule {
        condition: "malignancy_blood",
        factor: 0.75,
        applies: |profile| profile.malignancy.blood,
    },
    PenaltyRule {
        condition: "hyperthyroid",
        factor: 0.9,
        applies: |profile| profile.hyperthyroid,
    },
    PenaltyRule {
        condition: "liver_disease",
        factor: 0.85,
        applies: |profile| profile.has_liver_disease(),
    },
];

/// Conditions from [`PENALTY_RULES`] present in the profile.
pub fn applied_penalties(profile: &MedicalProfile) -> Vec<&'static PenaltyRule> {
    PENALTY_RULES
        .iter()
        .filter(|rule| (rule.applies)(profile))
        .collect()
}

/// Product of the penalty factors of every present condition, starting at 1.
pub fn calculate_risk_score(profile: &MedicalProfile) -> f64 {
    PENALTY_RULES
        .iter()
        .filter(|rule| (rule.applies)(profile))
        .fold(1.0, |score, rule| score * rule.factor)
}
