use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::models::{RiskCategory, RiskLevel};

/// Root configuration structure, deserialized from `.risk-scorer/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Exit-code policy.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Weighted inspection categories used for the overall risk.
    #[serde(default = "default_categories")]
    pub categories: Vec<RiskCategory>,
}

/// Decides when an assessment fails.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Any property at or above this level makes the CLI exit with code 1.
    /// Defaults to `critical`.
    #[serde(default = "default_fail_on")]
    pub fail_on: RiskLevel,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            fail_on: default_fail_on(),
        }
    }
}

fn default_fail_on() -> RiskLevel {
    RiskLevel::Critical
}

/// Built-in inspection categories and their weights.
fn default_categories() -> Vec<RiskCategory> {
    vec![
        RiskCategory::new("electrical", "Electrical", 0.30),
        RiskCategory::new("drainage", "Drainage", 0.20),
        RiskCategory::new("fire_safety", "Fire Safety", 0.25),
        RiskCategory::new("structural", "Structural", 0.15),
        RiskCategory::new("compliance", "Compliance", 0.10),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            policy: PolicyConfig::default(),
            categories: default_categories(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML configuration document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject category sets the weighted mean cannot work with.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() {
                bail!("category id must not be empty");
            }
            if !seen.insert(category.id.as_str()) {
                bail!("duplicate category id `{}`", category.id);
            }
            if !category.weight.is_finite() || category.weight < 0.0 {
                bail!(
                    "category `{}` has invalid weight {}; weights must be finite and non-negative",
                    category.id,
                    category.weight
                );
            }
        }
        Ok(())
    }

    pub fn category(&self, id: &str) -> Option<&RiskCategory> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<base_dir>/.risk-scorer/config.toml`
/// 3. `~/.config/risk-scorer/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = base_dir.join(".risk-scorer").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home_config) = home_config_path() {
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    log::debug!("no config file found, using built-in categories");
    Ok(Config::default())
}

fn home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("risk-scorer").join("config.toml"))
}

fn read_config(path: &Path) -> Result<Config> {
    log::debug!("loading config from {}", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    Config::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.policy.fail_on, RiskLevel::Critical);
        assert_eq!(cfg.categories.len(), 5);
        let total: f64 = cfg.categories.iter().map(|c| c.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let cfg = Config::from_toml(
            r#"
[policy]
fail_on = "high"

[[categories]]
id = "electrical"
name = "Electrical"
weight = 2

[[categories]]
id = "drainage"
weight = 1.5
"#,
        )
        .unwrap();
        assert_eq!(cfg.policy.fail_on, RiskLevel::High);
        assert_eq!(cfg.categories.len(), 2);
        assert_eq!(cfg.category("drainage").unwrap().weight, 1.5);
        assert_eq!(cfg.category("drainage").unwrap().display_name(), "drainage");
        assert!(cfg.category("structural").is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg = Config::from_toml("[policy]\nfail_on = \"medium\"\n").unwrap();
        assert_eq!(cfg.policy.fail_on, RiskLevel::Medium);
        assert_eq!(cfg.categories.len(), 5);

        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg.policy.fail_on, RiskLevel::Critical);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Config::from_toml(
            r#"
[[categories]]
id = "electrical"
weight = 1

[[categories]]
id = "electrical"
weight = 2
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let err = Config::from_toml("[[categories]]\nid = \"a\"\nweight = -1\n").unwrap_err();
        assert!(err.to_string().contains("invalid weight"));
    }

    #[test]
    fn test_rejects_unknown_level() {
        assert!(Config::from_toml("[policy]\nfail_on = \"severe\"\n").is_err());
    }

    #[test]
    fn test_load_override() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[[categories]]").unwrap();
        writeln!(f, "id = \"roof\"").unwrap();
        writeln!(f, "weight = 1").unwrap();

        let dir = TempDir::new().unwrap();
        let cfg = load_config(dir.path(), Some(f.path())).unwrap();
        assert_eq!(cfg.categories.len(), 1);
        assert_eq!(cfg.categories[0].id, "roof");
    }

    #[test]
    fn test_load_local_config() {
        let dir = TempDir::new().unwrap();
        let cfg_dir = dir.path().join(".risk-scorer");
        std::fs::create_dir(&cfg_dir).unwrap();
        std::fs::write(
            cfg_dir.join("config.toml"),
            "[policy]\nfail_on = \"low\"\n",
        )
        .unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.policy.fail_on, RiskLevel::Low);
    }

    #[test]
    fn test_missing_override_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(dir.path(), Some(&missing)).is_err());
    }
}
