use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use std::io::Read;

use super::MarkerImportError;
use crate::surgical::markers::MarkerRecord;

/// Integer-valued ordinal indices. Integral floats such as `2.0` are accepted.
const INTEGER_COLUMNS: [&str; 2] = ["asa_score", "rcri_score"];

/// Floating-point marker columns. Other columns pass through as text; serde
/// keeps the text fields and ignores the rest.
const NUMERIC_COLUMNS: [&str; 49] = [
    "heart_rate_variability",
    "troponin_level",
    "bnp_level",
    "ejection_fraction",
    "oxygen_saturation",
    "fev1",
    "fvc",
    "abg_ph",
    "abg_po2",
    "abg_pco2",
    "hemoglobin",
    "hematocrit",
    "wbc_count",
    "platelet_count",
    "iron_level",
    "ferritin",
    "pt",
    "ptt",
    "inr",
    "sodium",
    "potassium",
    "chloride",
    "bicarbonate",
    "creatinine",
    "bun",
    "egfr",
    "alt",
    "ast",
    "alkaline_phosphatase",
    "bilirubin",
    "albumin",
    "blood_glucose",
    "hba1c",
    "total_cholesterol",
    "ldl",
    "hdl",
    "triglycerides",
    "crp",
    "esr",
    "bmi",
    "systolic_bp",
    "diastolic_bp",
    "heart_rate",
    "temperature",
    "cardiac_score",
    "pulmonary_score",
    "hematology_score",
    "metabolic_score",
    "overall_surgical_score",
];

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<MarkerRecord>, MarkerImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<HashMap<String, String>>().enumerate() {
        // Header is line 1.
        let line = index + 2;
        let row = row?;
        records.push(record_from_row(line, row)?);
    }

    Ok(records)
}

fn record_from_row(
    line: usize,
    row: HashMap<String, String>,
) -> Result<MarkerRecord, MarkerImportError> {
    let mut fields = Map::new();

    for (column, raw) in row {
        let column = column.trim().to_ascii_lowercase();
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let value = if column == "assessment_date" {
            let date = parse_date(raw).ok_or_else(|| MarkerImportError::InvalidDate {
                line,
                value: raw.to_string(),
            })?;
            Value::String(date.format("%Y-%m-%d").to_string())
        } else if INTEGER_COLUMNS.contains(&column.as_str()) {
            parse_integer(raw).ok_or_else(|| invalid_number(line, &column, raw))?
        } else if NUMERIC_COLUMNS.contains(&column.as_str()) {
            parse_number(raw).ok_or_else(|| invalid_number(line, &column, raw))?
        } else {
            Value::String(raw.to_string())
        };

        fields.insert(column, value);
    }

    serde_json::from_value(Value::Object(fields))
        .map_err(|source| MarkerImportError::Record { line, source })
}

fn invalid_number(line: usize, column: &str, raw: &str) -> MarkerImportError {
    MarkerImportError::InvalidNumber {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    }
}

fn parse_integer(raw: &str) -> Option<Value> {
    if let Ok(integer) = raw.parse::<i32>() {
        return Some(Value::Number(integer.into()));
    }
    let float = raw.parse::<f64>().ok()?;
    let in_range = float >= f64::from(i32::MIN) && float <= f64::from(i32::MAX);
    (float.fract() == 0.0 && in_range).then(|| Value::Number((float as i64).into()))
}

fn parse_number(raw: &str) -> Option<Value> {
    if let Ok(integer) = raw.parse::<i64>() {
        return Some(Value::Number(integer.into()));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.naive_local().date())
}
