use crate::models::{RiskLevel, RiskLevelConfig, RiskStyle};
use crate::scoring::scale::clamp_risk;

/// Highest score still classified as [`RiskLevel::Low`].
pub const LOW_MAX: f64 = 30.0;
/// Highest score still classified as [`RiskLevel::Medium`].
pub const MEDIUM_MAX: f64 = 60.0;
/// Highest score still classified as [`RiskLevel::High`].
pub const HIGH_MAX: f64 = 80.0;

/// Per-level configuration, least severe first.
pub static RISK_LEVELS: [RiskLevelConfig; 4] = [
    RiskLevelConfig {
        level: RiskLevel::Low,
        label: "Low Risk",
        description: "Minimal risk. Routine monitoring is sufficient.",
        style: RiskStyle {
            color: "text-green-700",
            background: "bg-green-100",
            border: "border-green-300",
        },
        chart_color: "#10b981",
    },
    RiskLevelConfig {
        level: RiskLevel::Medium,
        label: "Medium Risk",
        description: "Moderate risk. Schedule remedial work at the next visit.",
        style: RiskStyle {
            color: "text-yellow-700",
            background: "bg-yellow-100",
            border: "border-yellow-300",
        },
        chart_color: "#f59e0b",
    },
    RiskLevelConfig {
        level: RiskLevel::High,
        label: "High Risk",
        description: "Significant risk. Prioritise remedial action.",
        style: RiskStyle {
            color: "text-orange-700",
            background: "bg-orange-100",
            border: "border-orange-300",
        },
        chart_color: "#ef4444",
    },
    RiskLevelConfig {
        level: RiskLevel::Critical,
        label: "Critical Risk",
        description: "Severe risk. Immediate action is required.",
        style: RiskStyle {
            color: "text-red-700",
            background: "bg-red-100",
            border: "border-red-300",
        },
        chart_color: "#dc2626",
    },
];

/// Classify a risk score. Out-of-range input is clamped first.
pub fn score_to_risk_level(score: f64) -> RiskLevel {
    let score = clamp_risk(score);
    if score <= LOW_MAX {
        RiskLevel::Low
    } else if score <= MEDIUM_MAX {
        RiskLevel::Medium
    } else if score <= HIGH_MAX {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

pub fn risk_level_config(level: RiskLevel) -> &'static RiskLevelConfig {
    match level {
        RiskLevel::Low => &RISK_LEVELS[0],
        RiskLevel::Medium => &RISK_LEVELS[1],
        RiskLevel::High => &RISK_LEVELS[2],
        RiskLevel::Critical => &RISK_LEVELS[3],
    }
}

pub fn risk_config_by_score(score: f64) -> &'static RiskLevelConfig {
    risk_level_config(score_to_risk_level(score))
}

/// Display label such as `"Medium Risk"`.
pub fn risk_level_display(score: f64) -> &'static str {
    risk_config_by_score(score).label
}

pub fn risk_level_styles(score: f64) -> RiskStyle {
    risk_config_by_score(score).style
}

/// Hex color used to draw `score` in charts.
pub fn risk_level_color(score: f64) -> &'static str {
    risk_config_by_score(score).chart_color
}

/// Neutral gray used when a color cannot be resolved.
pub const NEUTRAL_RGB: (u8, u8, u8) = (0x6b, 0x72, 0x80);

/// Chart color of `level` as 8-bit channels.
pub fn level_rgb(level: RiskLevel) -> (u8, u8, u8) {
    hex_to_rgb(risk_level_config(level).chart_color).unwrap_or(NEUTRAL_RGB)
}

/// Parse a `#rrggbb` color into 8-bit channels.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(score_to_risk_level(0.0), RiskLevel::Low);
        assert_eq!(score_to_risk_level(30.0), RiskLevel::Low);
        assert_eq!(score_to_risk_level(30.5), RiskLevel::Medium);
        assert_eq!(score_to_risk_level(31.0), RiskLevel::Medium);
        assert_eq!(score_to_risk_level(60.0), RiskLevel::Medium);
        assert_eq!(score_to_risk_level(61.0), RiskLevel::High);
        assert_eq!(score_to_risk_level(80.0), RiskLevel::High);
        assert_eq!(score_to_risk_level(81.0), RiskLevel::Critical);
        assert_eq!(score_to_risk_level(100.0), RiskLevel::Critical);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(score_to_risk_level(-10.0), RiskLevel::Low);
        assert_eq!(score_to_risk_level(150.0), RiskLevel::Critical);
        assert_eq!(score_to_risk_level(f64::NEG_INFINITY), RiskLevel::Low);
        assert_eq!(score_to_risk_level(f64::NAN), RiskLevel::Critical);
    }

    #[test]
    fn test_level_is_monotonic() {
        let mut previous = RiskLevel::Low;
        for tenths in -100..=1100 {
            let level = score_to_risk_level(f64::from(tenths) / 10.0);
            assert!(level >= previous, "level dropped at {}", tenths);
            previous = level;
        }
    }

    #[test]
    fn test_table_covers_every_level() {
        for (config, level) in RISK_LEVELS.iter().zip(RiskLevel::ALL) {
            assert_eq!(config.level, level);
            assert_eq!(risk_level_config(level).level, level);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(risk_level_display(10.0), "Low Risk");
        assert_eq!(risk_level_display(45.0), "Medium Risk");
        assert_eq!(risk_level_display(75.0), "High Risk");
        assert_eq!(risk_level_display(95.0), "Critical Risk");
    }

    #[test]
    fn test_chart_colors() {
        assert_eq!(risk_level_color(0.0), "#10b981");
        assert_eq!(risk_level_color(50.0), "#f59e0b");
        assert_eq!(risk_level_color(70.0), "#ef4444");
        assert_eq!(risk_level_color(90.0), "#dc2626");
    }

    #[test]
    fn test_styles_are_explicit_per_level() {
        let style = risk_level_styles(65.0);
        assert_eq!(style.color, "text-orange-700");
        assert_eq!(style.background, "bg-orange-100");
        assert_eq!(style.border, "border-orange-300");
        assert_eq!(risk_config_by_score(65.0).style, style);
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#10b981"), Some((0x10, 0xb9, 0x81)));
        assert_eq!(hex_to_rgb("10b981"), None);
        assert_eq!(hex_to_rgb("#10b98"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
        for config in &RISK_LEVELS {
            assert!(hex_to_rgb(config.chart_color).is_some());
            assert_ne!(level_rgb(config.level), NEUTRAL_RGB);
        }
    }
}
