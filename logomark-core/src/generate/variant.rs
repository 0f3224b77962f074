use serde::{Deserialize, Serialize};

use super::core_mark::{compose_core_mark, CoreMark};
use super::gradient::{compose_gradient, GradientDescriptor};
use super::shapes::{generate_shapes, LogoShape};
use crate::campaign::{seed_string, CampaignConfig, Structure};
use crate::color::{Rgb, Rgba};
use crate::palette::{Palette, PaletteRegistry};
use crate::stream::{DeterministicStream, HashMode};

pub const VARIANTS_PER_REQUEST: usize = 3;
pub const TAGLINE_ALPHA: f64 = 0.86;

/// One generated scene. Identified by `"{palette_id}-{index}"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoVariant {
    pub id: String,
    pub index: usize,
    pub seed: String,
    pub palette: Palette,
    pub gradient: GradientDescriptor,
    pub shapes: Vec<LogoShape>,
    pub core: CoreMark,
    pub structure: Structure,
    pub typography_color: Rgb,
    pub tagline_color: Rgba,
    /// Palette background CSS for the glow behind the icon. The SVG card
    /// tints its glow with the first color in it.
    pub accent_glow: String,
}

/// Runs the pipeline for one brief. Holds no per-request state, so a single
/// assembler can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantAssembler {
    pub hash_mode: HashMode,
}

impl VariantAssembler {
    pub fn new(hash_mode: HashMode) -> Self { Self { hash_mode } }

    pub fn variant(&self, config: &CampaignConfig, generation_key: &str, palette: &Palette, index: usize) -> LogoVariant {
        let seed = seed_string(config, generation_key, index);
        let mut rng = DeterministicStream::with_mode(&seed, self.hash_mode);

        let gradient = compose_gradient(&palette.swatch, config.tone, &mut rng);
        let shapes = generate_shapes(palette, config.structure, config.tone, &mut rng);
        let core = compose_core_mark(palette, &mut rng);

        log::debug!(
            "variant {}-{}: seed={:?} shapes={} layers={} core={}",
            palette.id, index, seed, shapes.len(), core.layers.len(), core.kind
        );

        LogoVariant {
            id: format!("{}-{}", palette.id, index),
            index,
            seed,
            palette: palette.clone(),
            gradient,
            shapes,
            core,
            structure: config.structure,
            typography_color: palette.typography,
            tagline_color: palette.typography.with_alpha(TAGLINE_ALPHA),
            accent_glow: palette.background.clone(),
        }
    }

    /// Indices 0, 1, 2 against one resolved palette.
    pub fn generate(&self, config: &CampaignConfig, generation_key: &str, registry: &PaletteRegistry) -> [LogoVariant; VARIANTS_PER_REQUEST] {
        let palette = registry.get(&config.palette_id);
        std::array::from_fn(|index| self.variant(config, generation_key, palette, index))
    }
}

/// [`VariantAssembler::generate`] with 32-bit wrapping hashing.
pub fn generate_variants(config: &CampaignConfig, generation_key: &str, registry: &PaletteRegistry) -> [LogoVariant; VARIANTS_PER_REQUEST] {
    VariantAssembler::default().generate(config, generation_key, registry)
}
