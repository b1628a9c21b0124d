/// Lowest valid score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest valid score.
pub const MAX_SCORE: f64 = 100.0;
/// Value returned when a range cannot be rescaled.
pub const MIDPOINT: f64 = 50.0;

/// Clamp a risk score into `[0, 100]`. NaN counts as maximum risk.
pub fn clamp_risk(score: f64) -> f64 {
    if score.is_nan() {
        MAX_SCORE
    } else {
        score.clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// Clamp a safety score into `[0, 100]`. NaN counts as no safety at all.
pub fn clamp_safety(score: f64) -> f64 {
    if score.is_nan() {
        MIN_SCORE
    } else {
        score.clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// Convert a safety score (higher is safer) into a risk score.
pub fn safety_to_risk_score(safety_score: f64) -> f64 {
    MAX_SCORE - clamp_safety(safety_score)
}

/// Convert a risk score into a safety score (higher is safer).
pub fn risk_to_safety_score(risk_score: f64) -> f64 {
    MAX_SCORE - clamp_risk(risk_score)
}

/// True if `score` is a number within `[0, 100]`.
pub fn validate_risk_score(score: f64) -> bool {
    !score.is_nan() && (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// Linearly rescale `value` from `[min, max]` onto `[0, 100]`, clamped.
///
/// A degenerate range (`min == max`) yields [`MIDPOINT`]. Passing `min > max`
/// inverts the scale.
pub fn normalize_to_risk_scale(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return MIDPOINT;
    }
    clamp_risk((value - min) / (max - min) * MAX_SCORE)
}
