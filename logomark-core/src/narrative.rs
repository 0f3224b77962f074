//! Templated campaign copy. Pure; reads only the brief.

use serde::{Deserialize, Serialize};

use crate::campaign::{CampaignConfig, Tone};

pub const MAX_HOOKS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightPack {
    pub headline: String,
    pub narrative: String,
    pub channel_plan: Vec<String>,
    pub cta_ideas: Vec<String>,
    pub performance_hooks: Vec<String>,
}

/// Three words that set the register for a tone.
pub fn tone_descriptors(tone: Tone) -> [&'static str; 3] {
    match tone {
        Tone::Bold => ["impact", "velocity", "conversion"],
        Tone::Playful => ["delight", "community", "shareability"],
        Tone::Elegant => ["premium", "trust", "exclusivity"],
        Tone::Futuristic => ["innovation", "immersive", "forward"],
        Tone::Organic => ["authentic", "sustainable", "human"],
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

pub fn derive_narrative(config: &CampaignConfig) -> InsightPack {
    let [lead, second, third] = tone_descriptors(config.tone);
    let hooks: Vec<&str> = config.keyword_tokens().into_iter().take(MAX_HOOKS).collect();
    let audience = config.audience.to_lowercase();

    let headline = format!(
        "{} – Meta-ready logo concepts to drive {}",
        or_default(&config.brand, "Campaign"),
        lead
    );
    let narrative = format!(
        "Position the launch around {}, {}, {} to captivate {}. \nLean into {} with motion-first storytelling across Meta surfaces.",
        lead,
        second,
        third,
        or_default(&audience, "your core audience"),
        if hooks.is_empty() { "your signature strengths".to_string() } else { hooks.join(", ") },
    );

    InsightPack {
        headline,
        narrative,
        channel_plan: vec![
            "Reels hook with animated logo pulse".into(),
            "Stories sticker pack with campaign CTA".into(),
            "Feed carousel showcasing logo lockups + testimonials".into(),
        ],
        cta_ideas: vec![
            format!("\"{}\" hero CTA across placements", or_default(&config.tagline, "Launch now")),
            "Swipe-up mini-site with variant selector".into(),
            "Lead gen ad featuring brand-safe colorways".into(),
        ],
        performance_hooks: vec![
            format!("{} via responsive logo crops tailored for Meta surfaces", second),
            format!("{} with shoppable CTA overlays for IG & FB", third),
            format!("{} unlocked by consistent gradient storytelling", lead),
        ],
    }
}
