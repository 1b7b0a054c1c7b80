use serde::{Deserialize, Serialize};

use crate::surgical::ReferenceRange;

/// Complete blood count panel. Every parameter is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CbcValues {
    pub rbc: Option<f64>,
    #[serde(alias = "haemoglobin")]
    pub hemoglobin: Option<f64>,
    #[serde(alias = "pcv")]
    pub hematocrit: Option<f64>,
    pub mcv: Option<f64>,
    pub mch: Option<f64>,
    pub mchc: Option<f64>,
    #[serde(alias = "total_wbc")]
    pub wbc: Option<f64>,
    pub neutrophils: Option<f64>,
    pub lymphocytes: Option<f64>,
    pub monocytes: Option<f64>,
    pub eosinophils: Option<f64>,
    pub basophils: Option<f64>,
    pub platelets: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CbcParameter {
    Rbc,
    Hemoglobin,
    Hematocrit,
    Mcv,
    Mch,
    Mchc,
    Wbc,
    Neutrophils,
    Lymphocytes,
    Monocytes,
    Eosinophils,
    Basophils,
    Platelets,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CbcReference {
    pub parameter: CbcParameter,
    pub range: ReferenceRange,
    pub unit: &'static str,
}

const fn reference(parameter: CbcParameter, min: f64, max: f64, unit: &'static str) -> CbcReference {
    CbcReference {
        parameter,
        range: ReferenceRange::new(min, max),
        unit,
    }
}

pub const CBC_NORMAL_RANGES: [CbcReference; 13] = [
    reference(CbcParameter::Rbc, 4.5, 5.5, "10^6/µL"),
    reference(CbcParameter::Hemoglobin, 13.5, 17.5, "g/dL"),
    reference(CbcParameter::Hematocrit, 41.0, 50.0, "%"),
    reference(CbcParameter::Mcv, 80.0, 96.0, "fL"),
    reference(CbcParameter::Mch, 27.5, 33.2, "pg"),
    reference(CbcParameter::Mchc, 33.4, 35.5, "g/dL"),
    reference(CbcParameter::Wbc, 4_000.0, 11_000.0, "/µL"),
    reference(CbcParameter::Neutrophils, 40.0, 75.0, "%"),
    reference(CbcParameter::Lymphocytes, 20.0, 45.0, "%"),
    reference(CbcParameter::Monocytes, 2.0, 10.0, "%"),
    reference(CbcParameter::Eosinophils, 1.0, 6.0, "%"),
    reference(CbcParameter::Basophils, 0.0, 1.0, "%"),
    reference(CbcParameter::Platelets, 150_000.0, 450_000.0, "/µL"),
];

impl CbcValues {
    pub fn value(&self, parameter: CbcParameter) -> Option<f64> {
        match parameter {
            CbcParameter::Rbc => self.rbc,
            CbcParameter::Hemoglobin => self.hemoglobin,
            CbcParameter::Hematocrit => self.hematocrit,
            CbcParameter::Mcv => self.mcv,
            CbcParameter::Mch => self.mch,
            CbcParameter::Mchc => self.mchc,
            CbcParameter::Wbc => self.wbc,
            CbcParameter::Neutrophils => self.neutrophils,
            CbcParameter::Lymphocytes => self.lymphocytes,
            CbcParameter::Monocytes => self.monocytes,
            CbcParameter::Eosinophils => self.eosinophils,
            CbcParameter::Basophils => self.basophils,
            CbcParameter::Platelets => self.platelets,
        }
    }
}

/// Clamped linear deviation score: 1 inside the range, otherwise
/// `max(0, 1 - deviation / max_deviation)` measured from the midpoint.
///
/// Kept separate from the triangular surgical normalizer; the two disagree
/// on in-range values and on the missing-value default.
pub fn parameter_score(value: f64, range: ReferenceRange) -> f64 {
    if range.contains(value) {
        return 1.0;
    }

    let midpoint = range.midpoint();
    let max_deviation = (range.max - midpoint).max(midpoint - range.min);
    let deviation = (value - midpoint).abs();
    (1.0 - deviation / max_deviation).max(0.0)
}

/// Mean parameter score over the populated CBC fields; 0 when none are set.
pub fn calculate_cbc_score(values: &CbcValues) -> f64 {
    let scores: Vec<f64> = CBC_NORMAL_RANGES
        .iter()
        .filter_map(|reference| {
            values
                .value(reference.parameter)
                .map(|value| parameter_score(value, reference.range))
        })
        .collect();

    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_panel_scores_zero() {
        assert_eq!(calculate_cbc_score(&CbcValues::default()), 0.0);
    }

    #[test]
    fn in_range_parameters_score_full_marks() {
        let values = CbcValues {
            hemoglobin: Some(13.5),
            platelets: Some(450_000.0),
            basophils: Some(0.0),
            ..CbcValues::default()
        };
        assert_eq!(calculate_cbc_score(&values), 1.0);
    }

    #[test]
    fn out_of_range_parameters_score_by_deviation() {
        let range = ReferenceRange::new(40.0, 75.0);
        assert_eq!(parameter_score(90.0, range), 0.0);
        assert_eq!(parameter_score(10.0, range), 0.0);
        assert_eq!(parameter_score(57.5, range), 1.0);
    }

    #[test]
    fn averages_over_populated_fields_only() {
        let values = CbcValues {
            rbc: Some(5.0),
            wbc: Some(25_000.0),
            ..CbcValues::default()
        };
        assert_eq!(calculate_cbc_score(&values), 0.5);
    }

    #[test]
    fn accepts_lab_report_aliases() {
        let values: CbcValues =
            serde_json::from_str(r#"{"haemoglobin": 14.1, "pcv": 44.0, "total_wbc": 7200}"#)
                .expect("aliases parse");
        assert_eq!(values.hemoglobin, Some(14.1));
        assert_eq!(values.hematocrit, Some(44.0));
        assert_eq!(values.wbc, Some(7200.0));
    }

    #[test]
    fn table_covers_every_parameter_once() {
        let parameters: std::collections::HashSet<CbcParameter> =
            CBC_NORMAL_RANGES.iter().map(|entry| entry.parameter).collect();
        assert_eq!(parameters.len(), CBC_NORMAL_RANGES.len());
    }
}
