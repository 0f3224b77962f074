use std::fmt;

use serde::{Deserialize, Serialize};

use crate::campaign::Tone;
use crate::color::{Rgb, Rgba};
use crate::stream::UnitSource;

pub const ANGLE_BASE_DEG: f64 = 110.0;
pub const ANGLE_SPAN_DEG: f64 = 80.0;
pub const HIGH_INTENSITY: f64 = 0.92;
pub const LOW_INTENSITY: f64 = 0.78;
/// Alpha scale of the last stop relative to the first two.
pub const TAIL_FADE: f64 = 0.88;

/// Linear background gradient: CSS angle plus three color stops spread evenly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientDescriptor {
    pub angle_deg: f64,
    pub stops: [Rgba; 3],
}

/// Consumes exactly one draw.
pub fn compose_gradient(swatch: &[Rgb; 3], tone: Tone, rng: &mut impl UnitSource) -> GradientDescriptor {
    let intensity = if tone.is_high_intensity() { HIGH_INTENSITY } else { LOW_INTENSITY };
    let angle_deg = ANGLE_BASE_DEG + rng.next_unit() * ANGLE_SPAN_DEG;
    let [a, b, c] = *swatch;
    GradientDescriptor {
        angle_deg,
        stops: [a.with_alpha(intensity), b.with_alpha(intensity), c.with_alpha(intensity * TAIL_FADE)],
    }
}

impl GradientDescriptor {
    /// Offset of stop `i` in [0, 1].
    pub fn stop_offset(&self, i: usize) -> f64 {
        i as f64 / (self.stops.len() - 1) as f64
    }

    /// Color at position `t` along the gradient axis, linear in straight RGBA.
    pub fn sample(&self, t: f64) -> [f64; 4] {
        let t = t.clamp(0.0, 1.0);
        let seg = ((t * 2.0).floor() as usize).min(1);
        let local = t * 2.0 - seg as f64;
        let lo = self.stops[seg].to_rgba8();
        let hi = self.stops[seg + 1].to_rgba8();
        std::array::from_fn(|ch| f64::from(lo[ch]) + (f64::from(hi[ch]) - f64::from(lo[ch])) * local)
    }
}

impl fmt::Display for GradientDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.stops;
        write!(f, "linear-gradient({}deg, {}, {}, {})", self.angle_deg, a, b, c)
    }
}
