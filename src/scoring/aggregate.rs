use std::collections::HashMap;

use crate::models::{RiskCategory, RiskScore, Trend};
use crate::scoring::level::risk_config_by_score;
use crate::scoring::scale::clamp_risk;

/// Category label used when none is given.
pub const OVERALL_CATEGORY: &str = "Overall";

/// Changes smaller than this are reported as [`Trend::Stable`].
pub const TREND_TOLERANCE: f64 = 5.0;

/// Weighted mean of `scores` over `categories`, rounded half-up.
///
/// A category missing from `scores` counts as 0 but its weight still counts.
/// Scores keyed by unknown categories are not used. Returns 0 when the total
/// weight is 0.
pub fn calculate_overall_risk(categories: &[RiskCategory], scores: &HashMap<String, f64>) -> f64 {
    let total_weight: f64 = categories.iter().map(|c| c.weight).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }

    let weighted: f64 = categories
        .iter()
        .map(|c| scores.get(&c.id).copied().map_or(0.0, clamp_risk) * c.weight)
        .sum();

    // Every term is non-negative, so `round` (half away from zero) is half-up here.
    (weighted / total_weight).round()
}

/// Build a [`RiskScore`] for `value`, labelled `category` or
/// [`OVERALL_CATEGORY`].
pub fn create_risk_score(value: f64, category: Option<&str>) -> RiskScore {
    let value = clamp_risk(value);
    let config = risk_config_by_score(value);
    RiskScore {
        value,
        level: config.level,
        category: category.unwrap_or(OVERALL_CATEGORY).to_string(),
        description: config.description.to_string(),
    }
}

/// Compare two risk scores. A rising risk score is [`Trend::Worsening`];
/// do not pass safety scores here.
pub fn risk_trend(current: f64, previous: f64) -> Trend {
    let current = clamp_risk(current);
    let previous = clamp_risk(previous);
    if (current - previous).abs() < TREND_TOLERANCE {
        Trend::Stable
    } else if current > previous {
        Trend::Worsening
    } else {
        Trend::Improving
    }
}
