//! Decorative shape layout.
//!
//! Per shape the draw order is fixed: form, x, y, size, rotation, color,
//! opacity, then blur for orbs only. Changing it changes every scene.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::campaign::{Structure, Tone};
use crate::palette::Palette;
use crate::stream::UnitSource;
use crate::color::Rgb;
use crate::ParseEnumError;

pub const MIN_SHAPES: usize = 4;
pub const SHAPE_COUNT_SPAN: usize = 4;

const X_SPAN_ICON_LEFT: f64 = 52.0;
const Y_SPAN_ICON_TOP: f64 = 42.0;
const POSITION_SPAN: f64 = 72.0;
pub const SIZE_BASE: f64 = 32.0;
const SIZE_SPAN_BOLD: f64 = 64.0;
const SIZE_SPAN: f64 = 52.0;
pub const OPACITY_BASE: f64 = 0.25;
const OPACITY_SPAN: f64 = 0.55;
const ORB_BLUR_BASE: f64 = 8.0;
const ORB_BLUR_SPAN: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeForm {
    Orb,
    Beam,
    Ring,
    Triangle,
    Spark,
}

impl ShapeForm {
    pub const ALL: [ShapeForm; 5] = [ShapeForm::Orb, ShapeForm::Beam, ShapeForm::Ring, ShapeForm::Triangle, ShapeForm::Spark];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeForm::Orb => "orb",
            ShapeForm::Beam => "beam",
            ShapeForm::Ring => "ring",
            ShapeForm::Triangle => "triangle",
            ShapeForm::Spark => "spark",
        }
    }
}

impl fmt::Display for ShapeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for ShapeForm {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeForm::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("shape form", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoShape {
    pub id: String,
    pub form: ShapeForm,
    /// Top-left anchor in icon units.
    pub position: DVec2,
    pub size: f64,
    pub rotation_deg: f64,
    pub color: Rgb,
    pub opacity: f64,
    /// Orbs carry a positive radius, sparks an explicit zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    /// Rings only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Rgb>,
}

/// Lay out 4 to 7 shapes.
pub fn generate_shapes(
    palette: &Palette,
    structure: Structure,
    tone: Tone,
    rng: &mut impl UnitSource,
) -> Vec<LogoShape> {
    let count = MIN_SHAPES + rng.next_index(SHAPE_COUNT_SPAN);
    let x_span = if structure == Structure::IconLeft { X_SPAN_ICON_LEFT } else { POSITION_SPAN };
    let y_span = if structure == Structure::IconTop { Y_SPAN_ICON_TOP } else { POSITION_SPAN };
    let size_span = if tone == Tone::Bold { SIZE_SPAN_BOLD } else { SIZE_SPAN };

    (0..count)
        .map(|i| {
            let form = *rng.pick(&ShapeForm::ALL);
            let x = rng.next_unit() * x_span;
            let y = rng.next_unit() * y_span;
            let size = SIZE_BASE + rng.next_unit() * size_span;
            let rotation_deg = rng.next_unit() * 360.0;
            let color = palette.shape_color(rng.next_index(palette.shape_slots()));
            let opacity = OPACITY_BASE + rng.next_unit() * OPACITY_SPAN;
            let blur = match form {
                ShapeForm::Orb => Some(ORB_BLUR_BASE + rng.next_unit() * ORB_BLUR_SPAN),
                ShapeForm::Spark => Some(0.0),
                _ => None,
            };
            let stroke = (form == ShapeForm::Ring).then_some(palette.typography);
            LogoShape {
                id: format!("{}-{}", form, i),
                form,
                position: DVec2::new(x, y),
                size,
                rotation_deg,
                color,
                opacity,
                blur,
                stroke,
            }
        })
        .collect()
}
