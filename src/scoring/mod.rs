//! Pure conversions from numeric scores to categorical risk information.
//!
//! - [`level`] — thresholds, the static per-level table and the lookups built on it.
//! - [`scale`] — clamping, risk/safety conversion, validation and rescaling.
//! - [`aggregate`] — weighted overall risk, [`RiskScore`](crate::models::RiskScore)
//!   construction and trends.
//!
//! Classification entry points clamp their input to `[0, 100]` first; only
//! [`scale::validate_risk_score`] rejects out-of-range values.

pub mod aggregate;
pub mod level;
pub mod scale;

pub use aggregate::{calculate_overall_risk, create_risk_score, risk_trend};
pub use level::{
    risk_config_by_score, risk_level_color, risk_level_config, risk_level_display,
    risk_level_styles, score_to_risk_level,
};
pub use scale::{
    normalize_to_risk_scale, risk_to_safety_score, safety_to_risk_score, validate_risk_score,
};
