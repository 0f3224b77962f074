//! Pinned outputs for one brief in both hash modes. Any change to seed
//! layout, draw order or constants shows up here first.

use glam::DVec2;
use logomark_core::color::Rgb;
use logomark_core::generate::{CoreMarkKind, ShapeForm};
use logomark_core::palette::builtin_registry;
use logomark_core::{CampaignConfig, HashMode, LogoVariant, Structure, Tone, VariantAssembler};

fn brief() -> CampaignConfig {
    CampaignConfig {
        brand: "Acme".into(),
        keywords: "fast,bold".into(),
        tone: Tone::Bold,
        structure: Structure::IconLeft,
        palette_id: "neo-nebula".into(),
        ..Default::default()
    }
}

fn first_variant(mode: HashMode) -> LogoVariant {
    let [first, ..] = VariantAssembler::new(mode).generate(&brief(), "abc", builtin_registry());
    first
}

fn forms(v: &LogoVariant) -> Vec<ShapeForm> {
    v.shapes.iter().map(|s| s.form).collect()
}

const BLUE: Rgb = Rgb::from_hex(0x4361EE);
const CYAN: Rgb = Rgb::from_hex(0x4CC9F0);
const PINK: Rgb = Rgb::from_hex(0xF72585);

#[test]
fn wrapping_scene() {
    let v = first_variant(HashMode::Wrapping);
    assert_eq!(v.seed, "Acme|||fast,bold||bold|abc|0");
    assert_eq!(v.id, "neo-nebula-0");
    assert_eq!(v.gradient.angle_deg, 180.312);
    assert_eq!(v.gradient.stops[0].alpha, 0.92);

    use ShapeForm::*;
    assert_eq!(forms(&v), vec![Spark, Orb, Beam, Triangle, Triangle]);

    let spark = &v.shapes[0];
    assert_eq!(spark.id, "spark-0");
    assert_eq!(spark.position, DVec2::new(51.1056, 5.0112));
    assert_eq!(spark.size, 37.4272);
    assert_eq!(spark.rotation_deg, 184.572);
    assert_eq!(spark.color, BLUE);
    assert_eq!(spark.opacity, 0.536055);
    assert_eq!(spark.blur, Some(0.0));
    assert_eq!(spark.stroke, None);

    let orb = &v.shapes[1];
    assert_eq!(orb.blur, Some(12.872));
    assert_eq!(orb.color, CYAN);

    assert_eq!(v.core.kind, CoreMarkKind::Wave);
    assert_eq!(v.core.id, "wave-4");
    let radii: Vec<f64> = v.core.layers.iter().map(|l| l.radius).collect();
    assert_eq!(radii, vec![26.0, 16.307499999999997, 9.021, 7.783999999999999]);
    let fills: Vec<Rgb> = v.core.layers.iter().map(|l| l.fill.rgb).collect();
    assert_eq!(fills, vec![PINK, CYAN, PINK, CYAN]);
    assert_eq!(v.core.layers[2].render_radius(), 10.0);
}

#[test]
fn double_precision_scene() {
    let v = first_variant(HashMode::DoublePrecision);
    assert_eq!(v.gradient.angle_deg, 142.8);

    use ShapeForm::*;
    assert_eq!(forms(&v), vec![Ring, Beam, Spark, Ring, Beam, Beam]);

    let ring = &v.shapes[0];
    assert_eq!(ring.position, DVec2::new(31.423599999999997, 31.5576));
    assert_eq!(ring.size, 94.64320000000001);
    assert_eq!(ring.rotation_deg, 146.988);
    assert_eq!(ring.color, PINK);
    assert_eq!(ring.opacity, 0.41120500000000004);
    assert_eq!(ring.stroke, Some(Rgb::from_hex(0xF8F9FF)));

    assert_eq!(v.core.kind, CoreMarkKind::Prism);
    let radii: Vec<f64> = v.core.layers.iter().map(|l| l.radius).collect();
    assert_eq!(radii, vec![26.0, 19.7715, 6.704000000000001, 5.2805]);
    let fills: Vec<Rgb> = v.core.layers.iter().map(|l| l.fill.rgb).collect();
    assert_eq!(fills, vec![CYAN, BLUE, BLUE, PINK]);
}

#[test]
fn later_indices_use_their_own_seed() {
    let variants = VariantAssembler::default().generate(&brief(), "abc", builtin_registry());
    assert_eq!(variants[1].seed, "Acme|||fast,bold||bold|abc|1");
    assert_eq!(variants[2].seed, "Acme|||fast,bold||bold|abc|2");
    assert_ne!(variants[0].shapes, variants[1].shapes);
}
