use crate::infra::InMemoryMarkerRepository;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use surgical_readiness::assessment::{ReadinessReport, SurgicalAssessmentService};
use surgical_readiness::error::AppError;
use surgical_readiness::profile::{
    CardiacHistory, CbcValues, DiabetesHistory, HealthScoreBreakdown, MedicalProfile,
    SmokingHistory,
};
use surgical_readiness::surgical::{
    calculate_detailed_risk_scores, MarkerImporter, MarkerRecord, RiskSummary, ScoreBand, UserId,
};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Marker CSV export whose header row uses the marker field names
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Only score assessments belonging to this user
    #[arg(long)]
    pub(crate) user: Option<String>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs { csv, user } = args;

    let mut records = MarkerImporter::from_path(&csv)?;
    if let Some(user) = user.as_deref() {
        let user = UserId::from(user);
        records.retain(|record| record.user_id == user);
    }

    if records.is_empty() {
        println!("No assessments found in {}", csv.display());
        return Ok(());
    }

    println!("Surgical readiness for {} assessment(s)", records.len());
    let scored: Vec<MarkerRecord> = records.into_iter().map(MarkerRecord::scored).collect();
    for record in &scored {
        render_score_line(record);
    }

    if let Some(newest) = scored.iter().max_by_key(|record| record.assessment_date) {
        println!(
            "\nRisk summary for {} on {}",
            newest.user_id, newest.assessment_date
        );
        render_risk_summary(&calculate_detailed_risk_scores(newest));
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Surgical readiness demo");

    let repository = Arc::new(InMemoryMarkerRepository::default());
    let service = SurgicalAssessmentService::new(repository);

    service.record(sample_baseline())?;
    service.record(sample_preoperative())?;

    let user = UserId::from(DEMO_USER);
    let history = service.history(&user)?;
    println!("\nAssessment history for {user}");
    for record in &history {
        render_score_line(record);
    }

    let report = service.latest_report(&user)?;
    render_report(&report);

    let breakdown = HealthScoreBreakdown::from_profile(&sample_profile());
    println!("\nGeneral health score");
    println!(
        "- Risk factors {:.2} | CBC {:.2} | Overall {:.2}",
        breakdown.risk_score, breakdown.cbc_score, breakdown.overall_health_score
    );
    if breakdown.conditions.is_empty() {
        println!("- No penalised conditions");
    } else {
        println!("- Penalised conditions: {}", breakdown.conditions.join(", "));
    }

    Ok(())
}

const DEMO_USER: &str = "demo-patient";

fn demo_date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap_or_default()
}

fn sample_baseline() -> MarkerRecord {
    MarkerRecord {
        asa_score: Some(2),
        rcri_score: Some(1),
        heart_rate: Some(88.0),
        systolic_bp: Some(142.0),
        diastolic_bp: Some(88.0),
        oxygen_saturation: Some(95.0),
        fev1: Some(72.0),
        hemoglobin: Some(10.8),
        wbc_count: Some(8_200.0),
        platelet_count: Some(210_000.0),
        sodium: Some(138.0),
        potassium: Some(4.6),
        creatinine: Some(1.3),
        blood_glucose: Some(196.0),
        ..MarkerRecord::new(DEMO_USER, demo_date(3, 4))
    }
}

fn sample_preoperative() -> MarkerRecord {
    MarkerRecord {
        asa_score: Some(2),
        rcri_score: Some(1),
        heart_rate: Some(76.0),
        systolic_bp: Some(118.0),
        diastolic_bp: Some(76.0),
        ejection_fraction: Some(58.0),
        oxygen_saturation: Some(97.0),
        fev1: Some(84.0),
        hemoglobin: Some(12.9),
        wbc_count: Some(7_100.0),
        platelet_count: Some(260_000.0),
        sodium: Some(140.0),
        potassium: Some(4.2),
        creatinine: Some(1.0),
        blood_glucose: Some(132.0),
        ..MarkerRecord::new(DEMO_USER, demo_date(4, 22))
    }
}

fn sample_profile() -> MedicalProfile {
    MedicalProfile {
        user_id: Some(DEMO_USER.to_string()),
        cardiac: CardiacHistory {
            has_condition: true,
            ..CardiacHistory::default()
        },
        diabetes: DiabetesHistory {
            is_diabetic: true,
            on_insulin: false,
        },
        smoking: SmokingHistory {
            is_smoker: true,
            cigarettes_per_day: Some(5.0),
        },
        cbc_values: Some(CbcValues {
            hemoglobin: Some(12.9),
            hematocrit: Some(39.0),
            wbc: Some(7_100.0),
            platelets: Some(260_000.0),
            ..CbcValues::default()
        }),
        ..MedicalProfile::default()
    }
}

fn render_score_line(record: &MarkerRecord) {
    let Some(scores) = record.attached_scores() else {
        println!("- {} {}: not scored", record.assessment_date, record.user_id);
        return;
    };
    println!(
        "- {} {}: overall {:.2} ({}) | cardiac {:.2} | pulmonary {:.2} | hematology {:.2} | metabolic {:.2}",
        record.assessment_date,
        record.user_id,
        scores.overall_surgical_score,
        ScoreBand::from_score(scores.overall_surgical_score).label(),
        scores.cardiac_score,
        scores.pulmonary_score,
        scores.hematology_score,
        scores.metabolic_score,
    );
}

fn render_risk_summary(risk: &RiskSummary) {
    println!("- ASA: {}", risk.asa_description);
    println!("- RCRI: {}", risk.rcri_risk);
    println!("- Surgical risk: {}", risk.surgical_risk);
    println!("Recommendations:");
    for recommendation in &risk.recommendations {
        println!("  - {recommendation}");
    }
}

fn render_report(report: &ReadinessReport) {
    println!(
        "\nLatest readiness report ({})",
        report.assessment.assessment_date
    );
    println!(
        "Overall {:.2} ({})",
        report.scores.overall_surgical_score,
        report.overall_band.label()
    );
    for band in &report.domain_bands {
        println!(
            "  - {}: {:.2} ({})",
            band.domain_label,
            band.score,
            band.band.label()
        );
    }
    render_risk_summary(&report.risk);

    if report.abnormal_markers.is_empty() {
        println!("All flagged markers within reference ranges");
    } else {
        println!("Markers outside reference ranges:");
        for flag in &report.abnormal_markers {
            println!(
                "  - {} {:.1} (normal {:.1}-{:.1})",
                flag.field_name, flag.value, flag.range.min, flag.range.max
            );
        }
    }
}
