//! Standalone SVG card for one variant: gradient background, tinted panel,
//! the 120x120 icon and the brand lockup.

use std::fmt::{self, Write};

use glam::DVec2;

use super::geometry::{gradient_axis, primitive, Primitive, ICON_CENTER, ICON_SIZE};
use super::fmt_num;
use crate::campaign::{CampaignConfig, Structure};
use crate::color::{first_css_color, Rgb};
use crate::generate::{CoreMark, LogoShape, LogoVariant, ShapeForm};

pub const CARD_WIDTH: f64 = 480.0;
pub const CARD_HEIGHT: f64 = 320.0;
pub const CARD_RADIUS: f64 = 24.0;
pub const PANEL_INSET: f64 = 18.0;
pub const PANEL_RADIUS: f64 = 14.0;
pub const PANEL_TINT: f64 = 0.16;
pub const GAP: f64 = 18.0;
pub const GLOW_OPACITY: f64 = 0.65;
pub const GLOW_BLUR: f64 = 28.0;
pub const BRAND_FONT_SIZE: f64 = 30.0;
pub const TAGLINE_FONT_SIZE: f64 = 16.0;

pub const DEFAULT_BRAND: &str = "Meta Campaign";
pub const DEFAULT_TAGLINE: &str = "Designing attention";

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

struct Lockup {
    icon: DVec2,
    brand: DVec2,
    tagline: DVec2,
    anchor: &'static str,
}

fn lockup(structure: Structure) -> Lockup {
    let inner = DVec2::splat(PANEL_INSET * 2.0);
    match structure {
        Structure::IconLeft => {
            let icon = DVec2::new(inner.x, (CARD_HEIGHT - ICON_SIZE) / 2.0);
            let text_x = icon.x + ICON_SIZE + GAP;
            Lockup {
                icon,
                brand: DVec2::new(text_x, CARD_HEIGHT / 2.0 - 4.0),
                tagline: DVec2::new(text_x, CARD_HEIGHT / 2.0 + TAGLINE_FONT_SIZE + 6.0),
                anchor: "start",
            }
        }
        Structure::IconTop => {
            let icon = DVec2::new((CARD_WIDTH - ICON_SIZE) / 2.0, inner.y + 12.0);
            let text_top = icon.y + ICON_SIZE + GAP;
            Lockup {
                icon,
                brand: DVec2::new(CARD_WIDTH / 2.0, text_top + BRAND_FONT_SIZE),
                tagline: DVec2::new(CARD_WIDTH / 2.0, text_top + BRAND_FONT_SIZE + TAGLINE_FONT_SIZE + 10.0),
                anchor: "middle",
            }
        }
        Structure::IconOverlay => {
            let icon = inner;
            let text_top = icon.y + ICON_SIZE + 14.0;
            Lockup {
                icon,
                brand: DVec2::new(inner.x, text_top + BRAND_FONT_SIZE),
                tagline: DVec2::new(inner.x, text_top + BRAND_FONT_SIZE + TAGLINE_FONT_SIZE + 10.0),
                anchor: "start",
            }
        }
    }
}

fn hex(rgb: Rgb) -> String { rgb.to_string() }

fn write_shape(out: &mut impl Write, shape: &LogoShape) -> fmt::Result {
    let opacity = fmt_num(shape.opacity);
    let fill = hex(shape.color);
    let rot = fmt_num(shape.rotation_deg);
    match (shape.form, primitive(shape)) {
        (_, Primitive::Disc { center, radius, blur }) => {
            let mut filter = String::new();
            if blur > 0.0 {
                writeln!(
                    out,
                    "    <filter id=\"{}-blur\" x=\"-100%\" y=\"-100%\" width=\"300%\" height=\"300%\"><feGaussianBlur stdDeviation=\"{}\"/></filter>",
                    shape.id,
                    fmt_num(blur)
                )?;
                filter = format!(" filter=\"url(#{}-blur)\"", shape.id);
            }
            writeln!(
                out,
                "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\" opacity=\"{opacity}\"{filter}/>",
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(radius)
            )
        }
        (_, Primitive::Ring { center, radius, width }) => writeln!(
            out,
            "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" opacity=\"{opacity}\"/>",
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            hex(shape.stroke.unwrap_or(shape.color)),
            fmt_num(width)
        ),
        (_, Primitive::Bar { origin, extent, corner, pivot, .. }) => writeln!(
            out,
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{fill}\" opacity=\"{opacity}\" transform=\"rotate({rot} {} {})\"/>",
            fmt_num(origin.x),
            fmt_num(origin.y),
            fmt_num(extent.x),
            fmt_num(extent.y),
            fmt_num(corner),
            fmt_num(pivot.x),
            fmt_num(pivot.y)
        ),
        (ShapeForm::Spark, Primitive::Polygon { points, pivot, scale, .. }) => {
            write!(out, "    <path d=\"")?;
            write_path_data(out, &points)?;
            writeln!(
                out,
                "\" fill=\"{fill}\" opacity=\"{opacity}\" transform=\"scale({}) rotate({rot} {} {})\"/>",
                fmt_num(scale),
                fmt_num(pivot.x),
                fmt_num(pivot.y)
            )
        }
        (_, Primitive::Polygon { points, pivot, .. }) => writeln!(
            out,
            "    <polygon points=\"{}\" fill=\"{fill}\" opacity=\"{opacity}\" transform=\"rotate({rot} {} {})\"/>",
            points.iter().map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y))).collect::<Vec<_>>().join(" "),
            fmt_num(pivot.x),
            fmt_num(pivot.y)
        ),
    }
}

fn write_path_data(out: &mut impl Write, points: &[DVec2]) -> fmt::Result {
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        write!(out, "{cmd}{} {} ", fmt_num(p.x), fmt_num(p.y))?;
    }
    out.write_char('Z')
}

fn write_core(out: &mut impl Write, core: &CoreMark) -> fmt::Result {
    for (i, layer) in core.layers.iter().enumerate() {
        writeln!(
            out,
            "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" opacity=\"{}\"/>",
            fmt_num(ICON_CENTER.x),
            fmt_num(ICON_CENTER.y),
            fmt_num(layer.render_radius()),
            layer.fill,
            layer.stroke,
            if i == 0 { 2 } else { 1 },
            fmt_num(layer.opacity)
        )?;
    }
    Ok(())
}

/// One variant laid out as an SVG card; `Display` writes the whole document.
#[derive(Debug, Clone, Copy)]
pub struct SvgCard<'a> {
    pub variant: &'a LogoVariant,
    pub config: &'a CampaignConfig,
}

impl fmt::Display for SvgCard<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (variant, config) = (self.variant, self.config);
        let size = DVec2::new(CARD_WIDTH, CARD_HEIGHT);
        let (start, end) = gradient_axis(variant.gradient.angle_deg, size);
        let layout = lockup(variant.structure);
        let brand = escape_xml(if config.brand.is_empty() { DEFAULT_BRAND } else { &config.brand });
        let tagline = escape_xml(if config.tagline.is_empty() { DEFAULT_TAGLINE } else { &config.tagline });
        let id = escape_xml(&variant.id);

        writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = fmt_num(CARD_WIDTH),
            h = fmt_num(CARD_HEIGHT)
        )?;
        writeln!(out, "  <defs>")?;
        writeln!(
            out,
            "    <linearGradient id=\"{id}-bg\" gradientUnits=\"userSpaceOnUse\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">",
            fmt_num(start.x),
            fmt_num(start.y),
            fmt_num(end.x),
            fmt_num(end.y)
        )?;
        for (i, stop) in variant.gradient.stops.iter().enumerate() {
            writeln!(
                out,
                "      <stop offset=\"{}\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                fmt_num(variant.gradient.stop_offset(i)),
                stop.rgb,
                fmt_num(stop.alpha)
            )?;
        }
        writeln!(out, "    </linearGradient>")?;
        writeln!(
            out,
            "    <filter id=\"{id}-glow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\"><feGaussianBlur stdDeviation=\"{}\"/></filter>",
            fmt_num(GLOW_BLUR)
        )?;
        writeln!(out, "  </defs>")?;

        writeln!(
            out,
            "  <rect width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"url(#{id}-bg)\"/>",
            fmt_num(CARD_WIDTH),
            fmt_num(CARD_HEIGHT),
            fmt_num(CARD_RADIUS)
        )?;
        writeln!(
            out,
            "  <rect x=\"{i}\" y=\"{i}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"/>",
            fmt_num(CARD_WIDTH - PANEL_INSET * 2.0),
            fmt_num(CARD_HEIGHT - PANEL_INSET * 2.0),
            fmt_num(PANEL_RADIUS),
            variant.palette.accent.with_alpha(PANEL_TINT),
            i = fmt_num(PANEL_INSET)
        )?;

        // Glow takes the first color of the palette background, else the accent.
        let glow_color = first_css_color(&variant.accent_glow).unwrap_or(variant.palette.accent.with_alpha(1.0));
        let glow = layout.icon + DVec2::splat(ICON_SIZE / 2.0);
        writeln!(
            out,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" fill-opacity=\"{}\" opacity=\"{}\" filter=\"url(#{id}-glow)\"/>",
            fmt_num(glow.x),
            fmt_num(glow.y),
            fmt_num(ICON_SIZE / 2.0),
            glow_color.rgb,
            fmt_num(glow_color.alpha),
            fmt_num(GLOW_OPACITY)
        )?;

        writeln!(
            out,
            "  <svg x=\"{}\" y=\"{}\" width=\"{s}\" height=\"{s}\" viewBox=\"0 0 {s} {s}\" overflow=\"visible\">",
            fmt_num(layout.icon.x),
            fmt_num(layout.icon.y),
            s = fmt_num(ICON_SIZE)
        )?;
        for shape in &variant.shapes {
            write_shape(out, shape)?;
        }
        write_core(out, &variant.core)?;
        writeln!(out, "  </svg>")?;

        writeln!(
            out,
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"{}\" font-family=\"Inter, sans-serif\" font-size=\"{}\" font-weight=\"700\" fill=\"{}\">{brand}</text>",
            fmt_num(layout.brand.x),
            fmt_num(layout.brand.y),
            layout.anchor,
            fmt_num(BRAND_FONT_SIZE),
            variant.typography_color
        )?;
        writeln!(
            out,
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"{}\" font-family=\"Inter, sans-serif\" font-size=\"{}\" fill=\"{}\" fill-opacity=\"{}\">{tagline}</text>",
            fmt_num(layout.tagline.x),
            fmt_num(layout.tagline.y),
            layout.anchor,
            fmt_num(TAGLINE_FONT_SIZE),
            variant.tagline_color.rgb,
            fmt_num(variant.tagline_color.alpha)
        )?;
        writeln!(out, "</svg>")
    }
}

/// Render `variant` with the brand and tagline from `config` as a complete
/// SVG document.
pub fn render_svg(variant: &LogoVariant, config: &CampaignConfig) -> String {
    SvgCard { variant, config }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_variants;
    use crate::palette::builtin_registry;

    fn sample() -> (CampaignConfig, LogoVariant) {
        let cfg = CampaignConfig::sample();
        let variant = generate_variants(&cfg, "svg-test", builtin_registry())[0].clone();
        (cfg, variant)
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("R&D <\"fast\"> 'x'"), "R&amp;D &lt;&quot;fast&quot;&gt; &apos;x&apos;");
    }

    #[test]
    fn document_shape() {
        let (cfg, v) = sample();
        let svg = render_svg(&v, &cfg);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 120 120\""));
        assert!(svg.contains(">Meta Horizon</text>"));
        assert!(svg.contains(">Build worlds together</text>"));
        assert_eq!(svg.matches("<stop ").count(), 3);
        // One circle per core layer drawn at the icon center.
        assert_eq!(svg.matches("cx=\"60\" cy=\"60\"").count(), v.core.layers.len());
    }

    #[test]
    fn one_element_per_shape() {
        let (cfg, v) = sample();
        let svg = render_svg(&v, &cfg);
        let elements = svg.matches("<circle").count() + svg.matches("<rect").count() + svg.matches("<polygon").count()
            + svg.matches("<path").count();
        // Shapes + core layers + glow + background + panel.
        assert_eq!(elements, v.shapes.len() + v.core.layers.len() + 3);
    }

    #[test]
    fn empty_text_uses_defaults_and_brand_is_escaped() {
        let (_, v) = sample();
        let svg = render_svg(&v, &CampaignConfig::default());
        assert!(svg.contains(">Meta Campaign</text>"));
        assert!(svg.contains(">Designing attention</text>"));

        let cfg = CampaignConfig { brand: "Fish & <Chips>".into(), ..Default::default() };
        let svg = render_svg(&v, &cfg);
        assert!(svg.contains(">Fish &amp; &lt;Chips&gt;</text>"));
    }

    #[test]
    fn lockup_anchor_follows_structure() {
        let (cfg, mut v) = sample();
        v.structure = Structure::IconTop;
        assert!(render_svg(&v, &cfg).contains("text-anchor=\"middle\""));
        v.structure = Structure::IconOverlay;
        assert!(!render_svg(&v, &cfg).contains("text-anchor=\"middle\""));
    }

    #[test]
    fn small_core_radius_is_clamped() {
        let (cfg, mut v) = sample();
        v.core.layers[0].radius = -4.0;
        let svg = render_svg(&v, &cfg);
        assert!(svg.contains("cx=\"60\" cy=\"60\" r=\"10\""));
    }

    #[test]
    fn glow_reads_palette_background() {
        let (cfg, mut v) = sample();
        // neo-nebula background opens with rgba(67,97,238,0.95).
        let svg = render_svg(&v, &cfg);
        assert!(svg.contains("fill=\"#4361EE\" fill-opacity=\"0.95\" opacity=\"0.65\""));

        v.accent_glow = "none".into();
        let svg = render_svg(&v, &cfg);
        assert!(svg.contains(&format!("fill=\"{}\" fill-opacity=\"1\" opacity=\"0.65\"", v.palette.accent)));
    }

    #[test]
    fn card_displays_same_document() {
        let (cfg, v) = sample();
        assert_eq!(SvgCard { variant: &v, config: &cfg }.to_string(), render_svg(&v, &cfg));
    }
}
