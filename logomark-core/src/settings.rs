//! Tool settings, loaded from YAML. Every field has a default so a partial
//! file (or none at all) is valid.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::export::DEFAULT_HISTORY_LIMIT;
use crate::palette::PaletteRegistry;
use crate::stream::HashMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hash_mode: HashMode,
    pub history_limit: usize,
    pub preview: PreviewSize,
    /// Custom palette registry; built-ins when unset.
    pub palettes: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { hash_mode: HashMode::default(), history_limit: DEFAULT_HISTORY_LIMIT, preview: PreviewSize::default(), palettes: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSize {
    pub width: u32,
    pub height: u32,
}

impl Default for PreviewSize {
    fn default() -> Self { Self { width: 512, height: 512 } }
}

impl Settings {
    pub fn registry(&self) -> Result<PaletteRegistry> {
        match &self.palettes {
            Some(path) => PaletteRegistry::load_from_path(path),
            None => Ok(PaletteRegistry::builtin()),
        }
    }
}

pub fn load_from_yaml_str(s: &str) -> Result<Settings> {
    if s.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Settings = serde_yaml::from_str(s)?;
    Ok(settings)
}

pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings {}", path.display()))?;
    load_from_yaml_str(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let s = load_from_yaml_str("").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.history_limit, 12);
        assert_eq!(s.preview, PreviewSize { width: 512, height: 512 });
    }

    #[test]
    fn partial_overrides() {
        let s = load_from_yaml_str("hash_mode: double-precision\npreview:\n  width: 256\n").unwrap();
        assert_eq!(s.hash_mode, HashMode::DoublePrecision);
        assert_eq!(s.preview.width, 256);
        assert_eq!(s.preview.height, 512);
        assert_eq!(s.history_limit, 12);
    }

    #[test]
    fn builtin_registry_without_path() {
        assert_eq!(Settings::default().registry().unwrap().len(), 5);
    }

    #[test]
    fn missing_registry_file_errors() {
        let s = Settings { palettes: Some("/nope/palettes.yaml".into()), ..Default::default() };
        assert!(s.registry().is_err());
    }
}
