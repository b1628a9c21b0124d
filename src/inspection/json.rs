use std::path::Path;

use anyhow::{Context, Result};

use super::InspectionFile;

pub struct JsonSource;

impl JsonSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonSource {
    fn default() -> Self {
        Self::new()
    }
}

impl super::InspectionSource for JsonSource {
    fn load(&self, path: &Path) -> Result<InspectionFile> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse(&content).with_context(|| format!("Invalid inspection file {}", path.display()))
    }
}

fn parse(content: &str) -> Result<InspectionFile> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::InspectionSource;
    use crate::models::ScoreScale;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_json_inspections() {
        let content = r#"
{
  "scale": "safety",
  "inspected_on": "2026-09-30",
  "properties": [
    {
      "id": "store-042",
      "name": "Leeds Retail Park",
      "scores": { "electrical": 65, "drainage": 90.5 },
      "previous": { "electrical": 70 },
      "readings": [
        { "category": "fire_safety", "value": 3, "min": 0, "max": 10 }
      ]
    },
    { "id": "store-007" }
  ]
}
"#;
        let file = parse(content).unwrap();
        assert_eq!(file.scale, ScoreScale::Safety);
        assert_eq!(file.inspected_on.as_deref(), Some("2026-09-30"));
        assert_eq!(file.properties.len(), 2);

        let first = &file.properties[0];
        assert_eq!(first.name, "Leeds Retail Park");
        assert_eq!(first.scores["drainage"], 90.5);
        assert_eq!(first.previous["electrical"], 70.0);
        assert_eq!(first.readings[0].category, "fire_safety");
        assert_eq!(first.readings[0].max, 10.0);

        let second = &file.properties[1];
        assert!(second.name.is_empty());
        assert!(second.scores.is_empty());
        assert!(second.readings.is_empty());
    }

    #[test]
    fn test_scale_defaults_to_risk() {
        let file = parse(r#"{"properties": []}"#).unwrap();
        assert_eq!(file.scale, ScoreScale::Risk);
        assert!(file.inspected_on.is_none());
    }

    #[test]
    fn test_load_reports_path_on_error() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "{{ not json").unwrap();
        let err = JsonSource::new().load(f.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid inspection file"));
    }
}
