//! CPU rasterizer for quick PNG previews. Draws the gradient card, the
//! accent panel and the icon; text is left to the SVG output.

use glam::DVec2;

use super::geometry::{gradient_axis, gradient_t, primitive, Primitive, ICON_CENTER, ICON_SIZE};
use crate::color::Rgba;
use crate::generate::LogoVariant;

/// Icon side as a fraction of the shorter image side.
pub const ICON_FRACTION: f64 = 0.6;
pub const PANEL_FRACTION: f64 = 0.05;
pub const PANEL_TINT: f64 = 0.16;
const SUBSAMPLES: [DVec2; 4] = [
    DVec2::new(0.25, 0.25),
    DVec2::new(0.75, 0.25),
    DVec2::new(0.25, 0.75),
    DVec2::new(0.75, 0.75),
];

/// Color channels in 0..=255, alpha in 0..=1, not premultiplied.
type Pixel = [f64; 4];

fn over(dst: &mut Pixel, rgb: [f64; 3], alpha: f64) {
    if alpha <= 0.0 {
        return;
    }
    let out_a = alpha + dst[3] * (1.0 - alpha);
    for ch in 0..3 {
        dst[ch] = (rgb[ch] * alpha + dst[ch] * dst[3] * (1.0 - alpha)) / out_a;
    }
    dst[3] = out_a;
}

fn rgb_of(color: Rgba) -> [f64; 3] {
    [f64::from(color.rgb.r), f64::from(color.rgb.g), f64::from(color.rgb.b)]
}

struct Layer {
    prim: Primitive,
    rgb: [f64; 3],
    alpha: f64,
}

fn icon_layers(variant: &LogoVariant) -> Vec<Layer> {
    let mut layers: Vec<Layer> = variant
        .shapes
        .iter()
        .map(|shape| Layer {
            prim: primitive(shape),
            rgb: rgb_of(shape.color.with_alpha(1.0)),
            alpha: shape.opacity,
        })
        .collect();
    for (i, core) in variant.core.layers.iter().enumerate() {
        let radius = core.render_radius();
        layers.push(Layer {
            prim: Primitive::Disc { center: ICON_CENTER, radius, blur: 0.0 },
            rgb: rgb_of(core.fill),
            alpha: core.fill.alpha * core.opacity,
        });
        layers.push(Layer {
            prim: Primitive::Ring { center: ICON_CENTER, radius, width: if i == 0 { 2.0 } else { 1.0 } },
            rgb: rgb_of(core.stroke),
            alpha: core.stroke.alpha * core.opacity,
        });
    }
    layers
}

/// Rasterize `variant` into a straight-alpha RGBA8 buffer of
/// `width * height * 4` bytes, row-major from the top-left.
pub fn render_preview_rgba(variant: &LogoVariant, width: u32, height: u32) -> Vec<u8> {
    let (w, h) = (width as usize, height as usize);
    let mut pixels = Vec::with_capacity(w * h * 4);
    if w == 0 || h == 0 {
        return pixels;
    }

    let size = DVec2::new(f64::from(width), f64::from(height));
    let (start, end) = gradient_axis(variant.gradient.angle_deg, size);
    let short = size.x.min(size.y);
    let inset = (short * PANEL_FRACTION).round();
    let accent = rgb_of(variant.palette.accent.with_alpha(1.0));
    let side = short * ICON_FRACTION;
    let icon_origin = (size - DVec2::splat(side)) / 2.0;
    let to_icon = ICON_SIZE / side;
    let layers = icon_layers(variant);

    log::debug!("rasterizing {} at {}x{} ({} layers)", variant.id, width, height, layers.len());

    for y in 0..h {
        for x in 0..w {
            let cell = DVec2::new(x as f64, y as f64);
            let center = cell + DVec2::splat(0.5);
            let bg = variant.gradient.sample(gradient_t(center, start, end));
            let mut px: Pixel = [bg[0], bg[1], bg[2], bg[3] / 255.0];

            if center.x >= inset && center.y >= inset && center.x <= size.x - inset && center.y <= size.y - inset {
                over(&mut px, accent, PANEL_TINT);
            }

            for layer in &layers {
                let covered: f64 = SUBSAMPLES
                    .iter()
                    .map(|offset| layer.prim.coverage((cell + *offset - icon_origin) * to_icon))
                    .sum();
                over(&mut px, layer.rgb, layer.alpha * covered / SUBSAMPLES.len() as f64);
            }

            pixels.extend_from_slice(&[
                px[0].round().clamp(0.0, 255.0) as u8,
                px[1].round().clamp(0.0, 255.0) as u8,
                px[2].round().clamp(0.0, 255.0) as u8,
                (px[3] * 255.0).round().clamp(0.0, 255.0) as u8,
            ]);
        }
    }
    pixels
}
