//! Application state for an interactive front end: the brief being edited,
//! the current generation key, the saved-concept deck, and a one-entry
//! memo of the last generated variants.

use std::sync::Arc;

use rand::seq::IteratorRandom;
use rand::Rng;
use uuid::Uuid;

use crate::campaign::{CampaignConfig, Structure, Tone};
use crate::export::{Deck, SavedLogo};
use crate::generate::{LogoVariant, VariantAssembler, VARIANTS_PER_REQUEST};
use crate::palette::{Palette, PaletteRegistry};
use crate::settings::Settings;
use crate::stream::HashMode;

pub type VariantSet = Arc<[LogoVariant; VARIANTS_PER_REQUEST]>;

/// Opaque token; a new one forces fresh variants for an unchanged brief.
pub fn new_generation_key() -> String {
    Uuid::new_v4().simple().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    config: CampaignConfig,
    generation_key: String,
    hash_mode: HashMode,
    palette: Palette,
}

/// Recomputes only when the brief, key, hash mode or resolved palette change.
#[derive(Debug, Default)]
pub struct VariantCache {
    entry: Option<(CacheKey, VariantSet)>,
    misses: u64,
}

impl VariantCache {
    pub fn get_or_generate(
        &mut self,
        assembler: VariantAssembler,
        config: &CampaignConfig,
        generation_key: &str,
        registry: &PaletteRegistry,
    ) -> VariantSet {
        let key = CacheKey {
            config: config.clone(),
            generation_key: generation_key.to_string(),
            hash_mode: assembler.hash_mode,
            palette: registry.get(&config.palette_id).clone(),
        };
        if let Some((cached, set)) = &self.entry {
            if *cached == key {
                return Arc::clone(set);
            }
        }
        self.misses += 1;
        let set: VariantSet = Arc::new(assembler.generate(config, generation_key, registry));
        self.entry = Some((key, Arc::clone(&set)));
        set
    }

    /// Number of times variants were actually computed.
    pub fn misses(&self) -> u64 { self.misses }

    pub fn clear(&mut self) { self.entry = None; }
}

#[derive(Debug)]
pub struct Session {
    config: CampaignConfig,
    generation_key: String,
    assembler: VariantAssembler,
    deck: Deck,
    cache: VariantCache,
}

impl Default for Session {
    fn default() -> Self { Self::new(CampaignConfig::sample()) }
}

impl Session {
    pub fn new(config: CampaignConfig) -> Self {
        Self {
            config,
            generation_key: new_generation_key(),
            assembler: VariantAssembler::default(),
            deck: Deck::default(),
            cache: VariantCache::default(),
        }
    }

    pub fn with_settings(config: CampaignConfig, settings: &Settings) -> Self {
        let mut session = Self::new(config);
        session.assembler = VariantAssembler::new(settings.hash_mode);
        session.deck = Deck::with_limit(settings.history_limit);
        session
    }

    /// Pin the key, e.g. to reproduce an earlier run.
    pub fn with_generation_key(mut self, key: impl Into<String>) -> Self {
        self.generation_key = key.into();
        self
    }

    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    pub fn config(&self) -> &CampaignConfig { &self.config }

    pub fn generation_key(&self) -> &str { &self.generation_key }

    pub fn deck(&self) -> &Deck { &self.deck }

    pub fn into_deck(self) -> Deck { self.deck }

    pub fn update_config(&mut self, edit: impl FnOnce(&mut CampaignConfig)) {
        edit(&mut self.config);
    }

    pub fn regenerate(&mut self) -> &str {
        self.generation_key = new_generation_key();
        &self.generation_key
    }

    /// Random lockup and palette.
    pub fn randomize_structure<R: Rng + ?Sized>(&mut self, rng: &mut R, registry: &PaletteRegistry) {
        self.config.structure = Structure::ALL[rng.gen_range(0..Structure::ALL.len())];
        if let Some(id) = registry.ids().choose(rng) {
            self.config.palette_id = id.to_string();
        }
    }

    pub fn randomize_tone<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.config.tone = Tone::ALL[rng.gen_range(0..Tone::ALL.len())];
    }

    pub fn variants(&mut self, registry: &PaletteRegistry) -> VariantSet {
        self.cache.get_or_generate(self.assembler, &self.config, &self.generation_key, registry)
    }

    pub fn cache(&self) -> &VariantCache { &self.cache }

    pub fn save_variant(&mut self, variant: &LogoVariant, artifact: impl Into<String>) -> &SavedLogo {
        let entry = SavedLogo::from_variant(&self.config, variant, artifact);
        log::info!("saved {} ({}) to deck", variant.id, entry.name);
        self.deck.push(entry)
    }
}
