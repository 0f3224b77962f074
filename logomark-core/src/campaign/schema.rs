use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

/// Campaign brief. Text fields may be empty; display defaults are applied by
/// renderers, never here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    pub brand: String,
    #[serde(alias = "campaignGoal")]
    pub campaign_goal: String,
    pub audience: String,
    /// Free text; tokens are separated by commas or newlines.
    pub keywords: String,
    pub tagline: String,
    pub tone: Tone,
    pub structure: Structure,
    #[serde(alias = "paletteId")]
    pub palette_id: String,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            brand: String::new(),
            campaign_goal: String::new(),
            audience: String::new(),
            keywords: String::new(),
            tagline: String::new(),
            tone: Tone::default(),
            structure: Structure::default(),
            palette_id: crate::palette::DEFAULT_PALETTE_ID.to_string(),
        }
    }
}

impl CampaignConfig {
    /// The brief a fresh session starts from.
    pub fn sample() -> Self {
        Self {
            brand: "Meta Horizon".into(),
            campaign_goal: "Boost retention and community sign-ups".into(),
            audience: "Gen Z creators exploring immersive storytelling".into(),
            keywords: "immersive, social, collaborative".into(),
            tagline: "Build worlds together".into(),
            tone: Tone::Futuristic,
            structure: Structure::IconLeft,
            palette_id: "neo-nebula".into(),
        }
    }

    /// Non-empty, trimmed keyword tokens in input order.
    pub fn keyword_tokens(&self) -> Vec<&str> {
        self.keywords
            .split(|c: char| c == ',' || c == '\n')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Bold,
    Playful,
    Elegant,
    #[default]
    Futuristic,
    Organic,
}

impl Tone {
    pub const ALL: [Tone; 5] = [Tone::Bold, Tone::Playful, Tone::Elegant, Tone::Futuristic, Tone::Organic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Bold => "bold",
            Tone::Playful => "playful",
            Tone::Elegant => "elegant",
            Tone::Futuristic => "futuristic",
            Tone::Organic => "organic",
        }
    }

    /// Bold and futuristic briefs get the brighter gradient.
    pub fn is_high_intensity(&self) -> bool { matches!(self, Tone::Bold | Tone::Futuristic) }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Tone {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("tone", s))
    }
}

/// Lockup: where the icon sits relative to the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Structure {
    #[default]
    IconLeft,
    IconTop,
    IconOverlay,
}

impl Structure {
    pub const ALL: [Structure; 3] = [Structure::IconLeft, Structure::IconTop, Structure::IconOverlay];

    pub fn as_str(&self) -> &'static str {
        match self {
            Structure::IconLeft => "icon-left",
            Structure::IconTop => "icon-top",
            Structure::IconOverlay => "icon-overlay",
        }
    }

    /// One-line pitch used in saved-concept summaries.
    pub fn intro(&self) -> &'static str {
        match self {
            Structure::IconLeft => "Split mark with icon driving instant recognition",
            Structure::IconTop => "Stacked hero mark for vertical placements",
            Structure::IconOverlay => "Immersive overlay lockup for Reels + Stories",
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Structure {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Structure::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("structure", s))
    }
}
