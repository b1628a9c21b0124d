use serde::{Deserialize, Serialize};

/// Categorical risk bucket, ordered by ascending severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Every level, least severe first.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Presentation tokens for a level (text, background and border).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskStyle {
    pub color: &'static str,
    pub background: &'static str,
    pub border: &'static str,
}

/// Static description of a [`RiskLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskLevelConfig {
    pub level: RiskLevel,
    /// Display label, e.g. `"High Risk"`.
    pub label: &'static str,
    pub description: &'static str,
    pub style: RiskStyle,
    /// Hex color used by charts and reports.
    pub chart_color: &'static str,
}

/// A score together with the level and description derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    pub value: f64,
    pub level: RiskLevel,
    pub category: String,
    pub description: String,
}

/// Direction of change between two risk scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Worsening,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Improving => write!(f, "improving"),
            Trend::Stable => write!(f, "stable"),
            Trend::Worsening => write!(f, "worsening"),
        }
    }
}

/// Weighted inspection category used for the overall risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskCategory {
    pub id: String,
    /// Human-readable name; falls back to `id` when empty.
    #[serde(default)]
    pub name: String,
    pub weight: f64,
}

impl RiskCategory {
    pub fn new(id: &str, name: &str, weight: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            weight,
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Which way round the scores in an inspection file are expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreScale {
    /// Higher means more risk.
    #[default]
    Risk,
    /// Higher means safer.
    Safety,
}

impl std::fmt::Display for ScoreScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreScale::Risk => write!(f, "risk"),
            ScoreScale::Safety => write!(f, "safety"),
        }
    }
}

/// Everything the engine derives from a single score.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// The score as given.
    pub input: f64,
    pub scale: ScoreScale,
    /// False if `input` was outside `[0, 100]` and had to be clamped.
    pub valid: bool,
    pub risk_score: f64,
    pub safety_score: f64,
    pub level: RiskLevel,
    pub label: &'static str,
    pub description: &'static str,
    pub style: RiskStyle,
    pub chart_color: &'static str,
}

/// Assessment of a single property.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyAssessment {
    pub id: String,
    pub name: String,
    pub overall: RiskScore,
    /// Safety score equivalent of the overall risk.
    pub safety: f64,
    pub categories: Vec<RiskScore>,
    pub previous_overall: Option<f64>,
    pub trend: Option<Trend>,
    /// Scores that were outside [0, 100] and had to be clamped.
    pub clamped: Vec<String>,
    /// Scores for categories that are not configured.
    pub ignored: Vec<String>,
}

/// Result of assessing every property in an inspection file.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub scale: ScoreScale,
    pub inspected_on: Option<String>,
    pub properties: Vec<PropertyAssessment>,
}

impl Assessment {
    /// Number of properties whose overall level is `level`.
    pub fn count(&self, level: RiskLevel) -> usize {
        self.properties
            .iter()
            .filter(|p| p.overall.level == level)
            .count()
    }

    /// True if any property is at or above `threshold`.
    pub fn fails(&self, threshold: RiskLevel) -> bool {
        self.properties.iter().any(|p| p.overall.level >= threshold)
    }
}
