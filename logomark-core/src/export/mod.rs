//! Saved concepts (the deck) and their JSON persistence.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::campaign::CampaignConfig;
use crate::generate::LogoVariant;

pub const DEFAULT_HISTORY_LIMIT: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedLogo {
    pub id: Uuid,
    pub name: String,
    pub summary: String,
    pub palette_label: String,
    /// Where the rendered artifact lives: a file path or a data URL.
    pub artifact: String,
    pub created_at_ms: u64,
}

impl SavedLogo {
    pub fn from_variant(config: &CampaignConfig, variant: &LogoVariant, artifact: impl Into<String>) -> Self {
        let tagline = if config.tagline.is_empty() { "Launch now" } else { config.tagline.as_str() };
        Self {
            id: Uuid::new_v4(),
            name: if config.brand.is_empty() { "Meta Concept".into() } else { config.brand.clone() },
            summary: format!("{} using {}. CTA: {}.", variant.structure.intro(), variant.palette.name, tagline),
            palette_label: variant.palette.name.clone(),
            artifact: artifact.into(),
            created_at_ms: now_ms(),
        }
    }

    /// Download stem: whitespace runs become `-`, lowercased, then
    /// `-meta-logo`, e.g. `meta-horizon-meta-logo`.
    pub fn file_stem(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        let mut in_space = false;
        for c in self.name.chars() {
            if c.is_whitespace() {
                if !in_space {
                    slug.push('-');
                }
                in_space = true;
            } else {
                slug.extend(c.to_lowercase());
                in_space = false;
            }
        }
        format!("{slug}-meta-logo")
    }

    pub fn file_name(&self) -> String { format!("{}.png", self.file_stem()) }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Newest-first history, capped at `limit` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub limit: usize,
    pub entries: VecDeque<SavedLogo>,
}

impl Default for Deck {
    fn default() -> Self { Self::with_limit(DEFAULT_HISTORY_LIMIT) }
}

impl Deck {
    pub fn with_limit(limit: usize) -> Self { Self { limit, entries: VecDeque::new() } }

    /// Insert at the front, dropping the oldest entries past the limit.
    pub fn push(&mut self, entry: SavedLogo) -> &SavedLogo {
        self.entries.push_front(entry);
        self.entries.truncate(self.limit.max(1));
        &self.entries[0]
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &SavedLogo> { self.entries.iter() }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).with_context(|| format!("reading deck {}", path.display()))?;
        let mut deck: Deck = serde_json::from_str(&data).with_context(|| format!("parsing deck {}", path.display()))?;
        let limit = deck.limit.max(1);
        deck.entries.truncate(limit);
        Ok(deck)
    }

    pub fn save_to_path<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing deck {}", path.display()))?;
        Ok(())
    }
}
