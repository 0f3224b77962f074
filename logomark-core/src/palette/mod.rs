//! Palette registry. Lookups never fail: an unknown id resolves to the first
//! registered palette.

mod builtin;

use std::collections::HashSet;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgb;
pub use builtin::builtin_palettes;

pub const DEFAULT_PALETTE_ID: &str = "neo-nebula";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub caption: String,
    pub swatch: [Rgb; 3],
    pub typography: Rgb,
    pub accent: Rgb,
    pub shapes: Vec<Rgb>,
    /// CSS background used for glow layers and palette chips.
    pub background: String,
}

impl Palette {
    /// Shape color for one draw. A palette without shape colors falls back
    /// to its accent; the draw is consumed either way.
    pub fn shape_color(&self, slot: usize) -> Rgb {
        self.shapes.get(slot).copied().unwrap_or(self.accent)
    }

    /// Number of slots to draw over; never zero.
    pub fn shape_slots(&self) -> usize { self.shapes.len().max(1) }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette registry must contain at least one palette")]
    Empty,
    #[error("duplicate palette id {0:?}")]
    Duplicate(String),
    #[error("palette id must not be empty")]
    MissingId,
}

/// Ordered, non-empty set of palettes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteRegistry {
    palettes: Vec<Palette>,
}

impl PaletteRegistry {
    pub fn new(palettes: Vec<Palette>) -> Result<Self, PaletteError> {
        if palettes.is_empty() {
            return Err(PaletteError::Empty);
        }
        let mut seen = HashSet::new();
        for p in &palettes {
            if p.id.trim().is_empty() {
                return Err(PaletteError::MissingId);
            }
            if !seen.insert(p.id.as_str()) {
                return Err(PaletteError::Duplicate(p.id.clone()));
            }
        }
        Ok(Self { palettes })
    }

    pub fn builtin() -> Self { Self { palettes: builtin_palettes() } }

    /// Exact match only.
    pub fn find(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Resolve an id, falling back to the first palette.
    pub fn get(&self, id: &str) -> &Palette {
        match self.find(id) {
            Some(p) => p,
            None => {
                log::warn!("unknown palette {:?}, using {:?}", id, self.default_palette().id);
                self.default_palette()
            }
        }
    }

    pub fn default_palette(&self) -> &Palette { &self.palettes[0] }

    pub fn ids(&self) -> impl Iterator<Item = &str> { self.palettes.iter().map(|p| p.id.as_str()) }

    pub fn iter(&self) -> std::slice::Iter<'_, Palette> { self.palettes.iter() }

    pub fn len(&self) -> usize { self.palettes.len() }

    pub fn is_empty(&self) -> bool { self.palettes.is_empty() }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let palettes: Vec<Palette> = serde_yaml::from_str(s)?;
        Ok(Self::new(palettes)?)
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading palette registry {}", path.display()))?;
        Self::from_yaml_str(&data).with_context(|| format!("parsing palette registry {}", path.display()))
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self { Self::builtin() }
}

impl<'a> IntoIterator for &'a PaletteRegistry {
    type Item = &'a Palette;
    type IntoIter = std::slice::Iter<'a, Palette>;
    fn into_iter(self) -> Self::IntoIter { self.palettes.iter() }
}

/// Shared built-in registry.
pub fn builtin_registry() -> &'static PaletteRegistry {
    static REGISTRY: OnceLock<PaletteRegistry> = OnceLock::new();
    REGISTRY.get_or_init(PaletteRegistry::builtin)
}
