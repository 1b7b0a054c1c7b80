use super::markers::MarkerField;
use serde::Serialize;

/// Clinically normal `[min, max]` interval for a marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
}

impl ReferenceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Shared reference ranges used by the domain scorers and marker flags.
#[derive(Debug, Clone, Copy)]
pub struct NormalRanges {
    pub hemoglobin: ReferenceRange,
    pub hematocrit: ReferenceRange,
    pub wbc_count: ReferenceRange,
    pub platelet_count: ReferenceRange,
    pub sodium: ReferenceRange,
    pub potassium: ReferenceRange,
    pub creatinine: ReferenceRange,
    pub bun: ReferenceRange,
    pub oxygen_saturation: ReferenceRange,
    pub systolic_bp: ReferenceRange,
    pub diastolic_bp: ReferenceRange,
    /// Display-only. Cardiac scoring uses [`HEART_RATE_SCORING_RANGE`].
    pub heart_rate: ReferenceRange,
}

pub const NORMAL_RANGES: NormalRanges = NormalRanges {
    hemoglobin: ReferenceRange::new(12.0, 16.0),
    hematocrit: ReferenceRange::new(36.0, 46.0),
    wbc_count: ReferenceRange::new(4_000.0, 11_000.0),
    platelet_count: ReferenceRange::new(150_000.0, 450_000.0),
    sodium: ReferenceRange::new(135.0, 145.0),
    potassium: ReferenceRange::new(3.5, 5.0),
    creatinine: ReferenceRange::new(0.6, 1.2),
    bun: ReferenceRange::new(7.0, 20.0),
    oxygen_saturation: ReferenceRange::new(95.0, 100.0),
    systolic_bp: ReferenceRange::new(90.0, 120.0),
    diastolic_bp: ReferenceRange::new(60.0, 80.0),
    heart_rate: ReferenceRange::new(60.0, 100.0),
};

// Scoring windows that deliberately differ from the display ranges.
pub const HEART_RATE_SCORING_RANGE: ReferenceRange = ReferenceRange::new(40.0, 120.0);
pub const EJECTION_FRACTION_SCORING_RANGE: ReferenceRange = ReferenceRange::new(30.0, 90.0);
/// FEV1 as percent of predicted.
pub const FEV1_SCORING_RANGE: ReferenceRange = ReferenceRange::new(40.0, 120.0);

impl NormalRanges {
    /// Display ranges in presentation order.
    pub fn entries(&self) -> [(MarkerField, ReferenceRange); 12] {
        [
            (MarkerField::HeartRate, self.heart_rate),
            (MarkerField::SystolicBp, self.systolic_bp),
            (MarkerField::DiastolicBp, self.diastolic_bp),
            (MarkerField::OxygenSaturation, self.oxygen_saturation),
            (MarkerField::Hemoglobin, self.hemoglobin),
            (MarkerField::Hematocrit, self.hematocrit),
            (MarkerField::WbcCount, self.wbc_count),
            (MarkerField::PlateletCount, self.platelet_count),
            (MarkerField::Sodium, self.sodium),
            (MarkerField::Potassium, self.potassium),
            (MarkerField::Creatinine, self.creatinine),
            (MarkerField::Bun, self.bun),
        ]
    }
}
