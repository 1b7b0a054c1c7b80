use super::markers::{MarkerField, MarkerRecord, SurgicalScores};
use super::ranges::{ReferenceRange, NORMAL_RANGES};
use super::Domain;
use serde::{Deserialize, Serialize};

/// Traffic-light band for a `[0, 1]` score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Optimal,
    Borderline,
    Critical,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::Optimal
        } else if score >= 0.6 {
            Self::Borderline
        } else {
            Self::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::Borderline => "Borderline",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainBand {
    pub domain: Domain,
    pub domain_label: &'static str,
    pub score: f64,
    pub band: ScoreBand,
}

/// Bands for the four domain scores, in domain order.
pub fn domain_bands(scores: &SurgicalScores) -> Vec<DomainBand> {
    Domain::ordered()
        .into_iter()
        .map(|domain| {
            let score = match domain {
                Domain::Cardiac => scores.cardiac_score,
                Domain::Pulmonary => scores.pulmonary_score,
                Domain::Hematology => scores.hematology_score,
                Domain::Metabolic => scores.metabolic_score,
            };
            DomainBand {
                domain,
                domain_label: domain.label(),
                score,
                band: ScoreBand::from_score(score),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStatus {
    Low,
    Normal,
    High,
}

impl MarkerStatus {
    pub fn classify(value: f64, range: ReferenceRange) -> Self {
        if value < range.min {
            Self::Low
        } else if value > range.max {
            Self::High
        } else {
            Self::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerFlag {
    pub field: MarkerField,
    pub field_name: &'static str,
    pub value: f64,
    pub range: ReferenceRange,
    pub status: MarkerStatus,
}

/// Flags every populated marker that has a display reference range.
pub fn flag_markers(markers: &MarkerRecord) -> Vec<MarkerFlag> {
    NORMAL_RANGES
        .entries()
        .into_iter()
        .filter_map(|(field, range)| {
            field.read(markers).map(|value| MarkerFlag {
                field,
                field_name: field.name(),
                value,
                range,
                status: MarkerStatus::classify(value, range),
            })
        })
        .collect()
}

/// Flags outside their reference range.
pub fn abnormal_markers(markers: &MarkerRecord) -> Vec<MarkerFlag> {
    flag_markers(markers)
        .into_iter()
        .filter(|flag| flag.status != MarkerStatus::Normal)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> MarkerRecord {
        MarkerRecord::new(
            "patient-5",
            NaiveDate::from_ymd_opt(2024, 7, 30).expect("valid date"),
        )
    }

    #[test]
    fn score_bands_follow_dashboard_thresholds() {
        assert_eq!(ScoreBand::from_score(0.8), ScoreBand::Optimal);
        assert_eq!(ScoreBand::from_score(0.7999), ScoreBand::Borderline);
        assert_eq!(ScoreBand::from_score(0.6), ScoreBand::Borderline);
        assert_eq!(ScoreBand::from_score(0.2), ScoreBand::Critical);
    }

    #[test]
    fn flags_only_populated_fields_in_table_order() {
        let markers = MarkerRecord {
            potassium: Some(5.6),
            heart_rate: Some(58.0),
            hemoglobin: Some(13.0),
            fev1: Some(70.0),
            ..record()
        };

        let flags = flag_markers(&markers);
        let names: Vec<&str> = flags.iter().map(|flag| flag.field_name).collect();
        assert_eq!(names, vec!["heart_rate", "hemoglobin", "potassium"]);
        assert_eq!(flags[0].status, MarkerStatus::Low);
        assert_eq!(flags[1].status, MarkerStatus::Normal);
        assert_eq!(flags[2].status, MarkerStatus::High);
    }

    #[test]
    fn heart_rate_flags_against_display_range() {
        let markers = MarkerRecord {
            heart_rate: Some(110.0),
            ..record()
        };
        let abnormal = abnormal_markers(&markers);
        assert_eq!(abnormal.len(), 1);
        assert_eq!(abnormal[0].status, MarkerStatus::High);
        assert_eq!(abnormal[0].range, NORMAL_RANGES.heart_rate);
    }

    #[test]
    fn domain_bands_cover_all_domains() {
        let scores = crate::surgical::calculate_surgical_scores(&record());
        let bands = domain_bands(&scores);
        assert_eq!(bands.len(), 4);
        assert!(bands.iter().all(|band| band.band == ScoreBand::Critical));
    }
}
