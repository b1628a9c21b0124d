use std::path::Path;

use anyhow::{Context, Result};

use super::InspectionFile;

pub struct TomlSource;

impl TomlSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TomlSource {
    fn default() -> Self {
        Self::new()
    }
}

impl super::InspectionSource for TomlSource {
    fn load(&self, path: &Path) -> Result<InspectionFile> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: InspectionFile = toml::from_str(&content)
            .with_context(|| format!("Invalid inspection file {}", path.display()))?;
        Ok(file)
    }
}
