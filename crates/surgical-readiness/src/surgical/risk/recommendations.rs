use crate::surgical::MarkerRecord;

/// Domain scores below this value open the domain's raw-value checks.
pub const DOMAIN_ATTENTION_THRESHOLD: f64 = 0.7;
/// Overall scores below this value add the generic optimization advice.
pub const OVERALL_ATTENTION_THRESHOLD: f64 = 0.6;

pub const NO_RECOMMENDATIONS: &str = "No specific recommendations at this time";

/// A single recommendation fired when its predicate holds.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRule {
    pub key: &'static str,
    pub message: &'static str,
    pub applies: fn(&MarkerRecord) -> bool,
}

impl RecommendationRule {
    pub fn evaluate(&self, markers: &MarkerRecord) -> Option<&'static str> {
        (self.applies)(markers).then_some(self.message)
    }
}

/// Evaluated top to bottom; every matching rule contributes its message.
pub static RECOMMENDATION_RULES: [RecommendationRule; 9] = [
    RecommendationRule {
        key: "cardiac_blood_pressure",
        message: "Blood pressure optimization recommended",
        applies: blood_pressure_out_of_band,
    },
    RecommendationRule {
        key: "cardiac_heart_rate",
        message: "Cardiac evaluation recommended",
        applies: heart_rate_out_of_band,
    },
    RecommendationRule {
        key: "pulmonary_saturation",
        message: "Pulmonary optimization recommended",
        applies: low_oxygen_saturation,
    },
    RecommendationRule {
        key: "hematology_anemia",
        message: "Anemia workup and possible treatment recommended",
        applies: anemia,
    },
    RecommendationRule {
        key: "hematology_platelets",
        message: "Hematology consultation recommended",
        applies: low_platelets,
    },
    RecommendationRule {
        key: "metabolic_glucose",
        message: "Diabetes/blood sugar optimization recommended",
        applies: hyperglycemia,
    },
    RecommendationRule {
        key: "metabolic_renal",
        message: "Renal function optimization recommended",
        applies: elevated_creatinine,
    },
    RecommendationRule {
        key: "overall_prehabilitation",
        message: "Consider preoperative rehabilitation program",
        applies: low_overall,
    },
    RecommendationRule {
        key: "overall_multidisciplinary",
        message: "Multi-disciplinary team evaluation recommended",
        applies: low_overall,
    },
];

pub fn generate_recommendations(markers: &MarkerRecord) -> Vec<String> {
    let recommendations: Vec<String> = RECOMMENDATION_RULES
        .iter()
        .filter_map(|rule| rule.evaluate(markers))
        .map(str::to_string)
        .collect();

    if recommendations.is_empty() {
        vec![NO_RECOMMENDATIONS.to_string()]
    } else {
        recommendations
    }
}

// A missing derived score counts as zero, so it always needs attention.
fn needs_attention(score: Option<f64>) -> bool {
    score.unwrap_or(0.0) < DOMAIN_ATTENTION_THRESHOLD
}

fn raw(value: Option<f64>, predicate: impl Fn(f64) -> bool) -> bool {
    value.map(predicate).unwrap_or(false)
}

fn blood_pressure_out_of_band(markers: &MarkerRecord) -> bool {
    needs_attention(markers.cardiac_score)
        && raw(markers.systolic_bp, |bp| !(90.0..=160.0).contains(&bp))
}

fn heart_rate_out_of_band(markers: &MarkerRecord) -> bool {
    needs_attention(markers.cardiac_score)
        && raw(markers.heart_rate, |hr| !(60.0..=100.0).contains(&hr))
}

fn low_oxygen_saturation(markers: &MarkerRecord) -> bool {
    needs_attention(markers.pulmonary_score) && raw(markers.oxygen_saturation, |spo2| spo2 < 94.0)
}

fn anemia(markers: &MarkerRecord) -> bool {
    needs_attention(markers.hematology_score) && raw(markers.hemoglobin, |hb| hb < 10.0)
}

fn low_platelets(markers: &MarkerRecord) -> bool {
    needs_attention(markers.hematology_score)
        && raw(markers.platelet_count, |plt| plt < 150_000.0)
}

fn hyperglycemia(markers: &MarkerRecord) -> bool {
    needs_attention(markers.metabolic_score) && raw(markers.blood_glucose, |glucose| glucose > 180.0)
}

fn elevated_creatinine(markers: &MarkerRecord) -> bool {
    needs_attention(markers.metabolic_score) && raw(markers.creatinine, |cr| cr > 1.5)
}

fn low_overall(markers: &MarkerRecord) -> bool {
    markers.overall_surgical_score.unwrap_or(0.0) < OVERALL_ATTENTION_THRESHOLD
}
