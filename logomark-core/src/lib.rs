pub mod campaign;
pub mod color;
pub mod export;
pub mod generate;
pub mod narrative;
pub mod palette;
pub mod render;
pub mod session;
pub mod settings;
pub mod stream;

pub use campaign::{CampaignConfig, Structure, Tone};
pub use generate::{generate_variants, LogoVariant, VariantAssembler, VARIANTS_PER_REQUEST};
pub use narrative::{derive_narrative, InsightPack};
pub use palette::{Palette, PaletteRegistry};
pub use render::{render_preview_rgba, render_svg};
pub use session::Session;
pub use settings::Settings;
pub use stream::{DeterministicStream, HashMode};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A string that does not name any variant of a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: &str) -> Self { Self { kind, value: value.to_string() } }
}
