use risk_scorer::assessment::assess;
use risk_scorer::config::load_config;
use risk_scorer::inspection::load_inspections;
use risk_scorer::models::{RiskLevel, Trend};
use tempfile::TempDir;

const CONFIG: &str = r#"
[policy]
fail_on = "high"

[[categories]]
id = "electrical"
name = "Electrical"
weight = 1

[[categories]]
id = "drainage"
name = "Drainage"
weight = 3
"#;

const INSPECTIONS: &str = r#"
scale = "safety"
inspected_on = "2026-09-30"

[[properties]]
id = "store-042"
name = "Leeds Retail Park"
scores = { electrical = 0, drainage = 100 }
previous = { electrical = 0, drainage = 60 }

[[properties]]
id = "store-007"
name = "Harbour Street"
scores = { electrical = 90, roof = 10 }

[[properties.readings]]
category = "drainage"
value = 1
min = 0
max = 4
"#;

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    let cfg_dir = dir.path().join(".risk-scorer");
    std::fs::create_dir(&cfg_dir).unwrap();
    std::fs::write(cfg_dir.join("config.toml"), CONFIG).unwrap();
    std::fs::write(dir.path().join("sites.toml"), INSPECTIONS).unwrap();
    dir
}

#[test]
fn assesses_inspection_file_with_local_config() {
    let dir = workspace();

    let config = load_config(dir.path(), None).unwrap();
    assert_eq!(config.policy.fail_on, RiskLevel::High);

    let file = load_inspections(&dir.path().join("sites.toml")).unwrap();
    let assessment = assess(&config, &file);
    assert_eq!(assessment.inspected_on.as_deref(), Some("2026-09-30"));
    assert_eq!(assessment.properties.len(), 2);

    // store-007: electrical risk 10, drainage reading 25 safety -> 75 risk
    // (10 * 1 + 75 * 3) / 4 = 58.75 -> 59
    let first = &assessment.properties[0];
    assert_eq!(first.id, "store-007");
    assert_eq!(first.overall.value, 59.0);
    assert_eq!(first.overall.level, RiskLevel::Medium);
    assert_eq!(first.ignored, vec!["roof".to_string()]);
    assert!(first.trend.is_none());

    // store-042: electrical risk 100, drainage risk 0 -> 25; previously (100 + 40 * 3) / 4 = 55
    let second = &assessment.properties[1];
    assert_eq!(second.id, "store-042");
    assert_eq!(second.overall.value, 25.0);
    assert_eq!(second.safety, 75.0);
    assert_eq!(second.previous_overall, Some(55.0));
    assert_eq!(second.trend, Some(Trend::Improving));

    assert!(!assessment.fails(config.policy.fail_on));
    assert!(assessment.fails(RiskLevel::Medium));
}

#[test]
fn assessment_serializes_to_json() {
    let dir = workspace();
    let config = load_config(dir.path(), None).unwrap();
    let file = load_inspections(&dir.path().join("sites.toml")).unwrap();
    let assessment = assess(&config, &file);

    let json: serde_json::Value = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["scale"], "safety");
    assert_eq!(json["properties"][0]["overall"]["level"], "medium");
    assert_eq!(json["properties"][0]["overall"]["category"], "Overall");
    assert_eq!(json["properties"][1]["trend"], "improving");
    assert_eq!(json["properties"][1]["categories"][0]["category"], "Electrical");
}
