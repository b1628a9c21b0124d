use std::path::Path;

/// Supported inspection file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Toml,
    Json,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Toml => write!(f, "TOML"),
            InputFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Detect the inspection file format from its extension (case-insensitive).
pub fn detect_format(path: &Path) -> Option<InputFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "toml" => Some(InputFormat::Toml),
        "json" => Some(InputFormat::Json),
        _ => None,
    }
}
