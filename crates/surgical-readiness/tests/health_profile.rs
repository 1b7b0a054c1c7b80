use surgical_readiness::profile::{
    calculate_cbc_score, calculate_overall_health_score, calculate_risk_score, CbcValues,
    HealthScoreBreakdown, MedicalProfile,
};

fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

fn profile_from_json(payload: &str) -> MedicalProfile {
    serde_json::from_str(payload).expect("profile payload parses")
}

#[test]
fn healthy_profile_with_normal_panel_scores_one() {
    let profile = profile_from_json(
        r#"{
            "cbc_values": {
                "haemoglobin": 15.0,
                "pcv": 45.0,
                "total_wbc": 7000
            }
        }"#,
    );

    assert_eq!(calculate_risk_score(&profile), 1.0);
    assert!(approx(calculate_overall_health_score(&profile), 1.0));
}

#[test]
fn comorbidities_multiply_their_penalties() {
    let profile = profile_from_json(
        r#"{
            "cardiac": { "has_condition": true, "ccf": true },
            "diabetes": { "is_diabetic": true, "on_insulin": true },
            "renal": { "dialysis_type": "intermittent" },
            "liver_diseases": "cirrhosis"
        }"#,
    );

    let breakdown = HealthScoreBreakdown::from_profile(&profile);
    assert!(breakdown.risk_score < 1.0 && breakdown.risk_score > 0.0);
    assert_eq!(
        breakdown.conditions,
        vec![
            "cardiac_condition",
            "congestive_cardiac_failure",
            "dialysis",
            "diabetes",
            "insulin_dependence",
            "liver_disease",
        ]
    );
    assert!(approx(
        breakdown.overall_health_score,
        breakdown.risk_score * 0.6 + breakdown.cbc_score * 0.4
    ));
}

#[test]
fn fractional_cigarette_count_is_scored() {
    let profile = profile_from_json(r#"{"smoking":{"is_smoker":true,"cigarettes_per_day":12.5}}"#);
    assert!(profile.smoking.is_heavy());
    assert!(approx(calculate_risk_score(&profile), 0.85 * 0.9));

    let light = profile_from_json(r#"{"smoking":{"is_smoker":true,"cigarettes_per_day":9.5}}"#);
    assert!(approx(calculate_risk_score(&light), 0.85));
}

#[test]
fn adding_a_condition_never_raises_risk_score() {
    let mut profile = MedicalProfile::default();
    let baseline = calculate_risk_score(&profile);

    profile.pulmonary.asthma = true;
    let with_asthma = calculate_risk_score(&profile);
    assert!(with_asthma <= baseline);

    profile.hyperthyroid = true;
    assert!(calculate_risk_score(&profile) <= with_asthma);
}

#[test]
fn cbc_score_degrades_linearly_outside_range() {
    let normal = CbcValues {
        hemoglobin: Some(15.0),
        ..CbcValues::default()
    };
    let low = CbcValues {
        hemoglobin: Some(9.0),
        ..CbcValues::default()
    };

    assert_eq!(calculate_cbc_score(&normal), 1.0);
    let degraded = calculate_cbc_score(&low);
    assert!((0.0..1.0).contains(&degraded));
    assert_eq!(calculate_cbc_score(&CbcValues::default()), 0.0);
}
