use super::ranges::ReferenceRange;

/// Score assigned to a missing value or an empty domain.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Triangular closeness-to-midpoint score.
///
/// Peaks at 1.0 on the range midpoint, falls linearly to 0.0 at `min` and
/// `max`, and stays at 0.0 beyond them. Symmetric about the midpoint. A
/// missing value scores [`NEUTRAL_SCORE`].
pub fn normalize(value: Option<f64>, min: f64, max: f64) -> f64 {
    let Some(value) = value else {
        return NEUTRAL_SCORE;
    };

    // Position within the range; deliberately unclamped.
    let position = (value - min) / (max - min);
    (1.0 - 2.0 * (0.5 - position).abs()).clamp(0.0, 1.0)
}

pub fn normalize_in(value: Option<f64>, range: ReferenceRange) -> f64 {
    normalize(value, range.min, range.max)
}
