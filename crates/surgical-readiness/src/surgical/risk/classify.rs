/// ASA physical-status descriptions keyed by class 1-6.
pub const ASA_DESCRIPTIONS: [(i32, &str); 6] = [
    (1, "Healthy person"),
    (2, "Mild systemic disease"),
    (3, "Severe systemic disease"),
    (4, "Severe systemic disease that is a constant threat to life"),
    (
        5,
        "Moribund person who is not expected to survive without the operation",
    ),
    (
        6,
        "Declared brain-dead person whose organs are being removed for donor purposes",
    ),
];

pub const ASA_NOT_ASSESSED: &str = "Not assessed";

pub fn asa_description(asa_score: Option<i32>) -> &'static str {
    asa_score
        .and_then(|score| {
            ASA_DESCRIPTIONS
                .iter()
                .find(|(class, _)| *class == score)
                .map(|(_, description)| *description)
        })
        .unwrap_or(ASA_NOT_ASSESSED)
}

/// Revised Cardiac Risk Index bands. Missing scores count as zero.
pub fn rcri_risk(rcri_score: Option<i32>) -> &'static str {
    match rcri_score.unwrap_or(0) {
        score if score <= 0 => "Very Low Risk (0.4% risk of cardiac complications)",
        1 => "Low Risk (0.9% risk of cardiac complications)",
        2 => "Moderate Risk (6.6% risk of cardiac complications)",
        _ => "High Risk (>11% risk of cardiac complications)",
    }
}

/// Surgical risk from the overall readiness score. Missing scores count as zero.
pub fn surgical_risk(overall_surgical_score: Option<f64>) -> &'static str {
    let overall = overall_surgical_score.unwrap_or(0.0);
    if overall >= 0.8 {
        "Low Risk - Proceed with standard precautions"
    } else if overall >= 0.6 {
        "Moderate Risk - Consider optimization before surgery"
    } else {
        "High Risk - Requires medical optimization before surgery"
    }
}
