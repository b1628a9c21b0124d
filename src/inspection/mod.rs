//! Loading inspection files from disk.
//!
//! - [`json`] — `.json` inspection files.
//! - [`toml_file`] — `.toml` inspection files.
//!
//! Both formats deserialize into the same [`InspectionFile`] shape.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::detector::{detect_format, InputFormat};
use crate::models::ScoreScale;

pub mod json;
pub mod toml_file;

pub trait InspectionSource {
    fn load(&self, path: &Path) -> Result<InspectionFile>;
}

/// Inspection results for a set of properties.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InspectionFile {
    /// Scale every score in this file is expressed in.
    #[serde(default)]
    pub scale: ScoreScale,
    #[serde(default)]
    pub inspected_on: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyRecord>,
}

/// One inspected property (store, site, unit).
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Scores keyed by category id.
    #[serde(default)]
    pub scores: HashMap<String, f64>,
    /// Scores from the previous inspection, if any.
    #[serde(default)]
    pub previous: HashMap<String, f64>,
    /// Raw gauge readings to rescale onto `[0, 100]`.
    #[serde(default)]
    pub readings: Vec<Reading>,
}

/// A raw measurement on an arbitrary `[min, max]` gauge.
#[derive(Debug, Clone, Deserialize)]
pub struct Reading {
    pub category: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Load `path` using the loader matching its extension.
pub fn load_inspections(path: &Path) -> Result<InspectionFile> {
    let format = detect_format(path).ok_or_else(|| {
        anyhow!(
            "Unsupported inspection file {}; expected a .toml or .json file",
            path.display()
        )
    })?;

    log::debug!("reading {} inspection file {}", format, path.display());

    let file = match format {
        InputFormat::Toml => toml_file::TomlSource::new().load(path)?,
        InputFormat::Json => json::JsonSource::new().load(path)?,
    };

    log::info!(
        "loaded {} properties ({} scale) from {}",
        file.properties.len(),
        file.scale,
        path.display()
    );
    Ok(file)
}
