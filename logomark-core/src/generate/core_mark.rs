//! Concentric core mark.
//!
//! Radii are stored exactly as composed, `26 - idx * (6 + draw * 5)`, which
//! can reach zero or below from the third layer on. Renderers clamp with
//! [`CoreMarkLayer::render_radius`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::palette::Palette;
use crate::stream::UnitSource;
use crate::ParseEnumError;

pub const MIN_LAYERS: usize = 2;
pub const LAYER_COUNT_SPAN: usize = 3;
pub const OUTER_RADIUS: f64 = 26.0;
pub const MIN_RENDER_RADIUS: f64 = 10.0;

const STEP_BASE: f64 = 6.0;
const STEP_SPAN: f64 = 5.0;
const STROKE_ALPHA: f64 = 0.52;
const STROKE_ALPHA_STEP: f64 = 0.09;
const FILL_ALPHA: f64 = 0.78;
const FILL_ALPHA_STEP: f64 = 0.12;
const LAYER_OPACITY: f64 = 0.68;
const LAYER_OPACITY_STEP: f64 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoreMarkKind {
    Planet,
    Wave,
    Prism,
    Portal,
    Signal,
}

impl CoreMarkKind {
    pub const ALL: [CoreMarkKind; 5] =
        [CoreMarkKind::Planet, CoreMarkKind::Wave, CoreMarkKind::Prism, CoreMarkKind::Portal, CoreMarkKind::Signal];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoreMarkKind::Planet => "planet",
            CoreMarkKind::Wave => "wave",
            CoreMarkKind::Prism => "prism",
            CoreMarkKind::Portal => "portal",
            CoreMarkKind::Signal => "signal",
        }
    }
}

impl fmt::Display for CoreMarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for CoreMarkKind {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoreMarkKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("core mark kind", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreMarkLayer {
    pub radius: f64,
    pub stroke: Rgba,
    pub fill: Rgba,
    pub opacity: f64,
}

impl CoreMarkLayer {
    pub fn render_radius(&self) -> f64 { self.radius.max(MIN_RENDER_RADIUS) }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreMark {
    pub id: String,
    pub kind: CoreMarkKind,
    pub layers: Vec<CoreMarkLayer>,
}

pub fn compose_core_mark(palette: &Palette, rng: &mut impl UnitSource) -> CoreMark {
    let kind = *rng.pick(&CoreMarkKind::ALL);
    let count = MIN_LAYERS + rng.next_index(LAYER_COUNT_SPAN);
    let layers: Vec<CoreMarkLayer> = (0..count)
        .map(|idx| {
            let step = idx as f64;
            let radius = OUTER_RADIUS - step * (STEP_BASE + rng.next_unit() * STEP_SPAN);
            let fill = palette.shape_color(rng.next_index(palette.shape_slots()));
            CoreMarkLayer {
                radius,
                stroke: palette.accent.with_alpha(STROKE_ALPHA - step * STROKE_ALPHA_STEP),
                fill: fill.with_alpha(FILL_ALPHA - step * FILL_ALPHA_STEP),
                opacity: LAYER_OPACITY - step * LAYER_OPACITY_STEP,
            }
        })
        .collect();
    CoreMark { id: format!("{}-{}", kind, layers.len()), kind, layers }
}
