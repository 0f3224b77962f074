use logomark_core::palette::builtin_registry;
use logomark_core::stream::DeterministicStream;
use logomark_core::{generate_variants, CampaignConfig, HashMode, Structure, Tone, VariantAssembler};
use proptest::prelude::*;

fn brief_strategy() -> impl Strategy<Value = CampaignConfig> {
    (
        "[A-Za-z0-9 &]{0,16}",
        "[a-z ]{0,24}",
        "[a-z ,\n]{0,24}",
        "[A-Za-z !]{0,16}",
        prop::sample::select(Tone::ALL.to_vec()),
        prop::sample::select(Structure::ALL.to_vec()),
        prop::sample::select(vec!["neo-nebula", "sunset-reel", "hyper-growth", "sonic-wave", "velvet-noir", "nope"]),
    )
        .prop_map(|(brand, audience, keywords, tagline, tone, structure, palette)| CampaignConfig {
            brand,
            audience,
            keywords,
            tagline,
            tone,
            structure,
            palette_id: palette.to_string(),
            ..Default::default()
        })
}

fn hash_mode_strategy() -> impl Strategy<Value = HashMode> {
    prop::sample::select(vec![HashMode::Wrapping, HashMode::DoublePrecision])
}

proptest! {
    #[test]
    fn draws_are_quantized_units(seed in "\\PC{0,64}", mode in hash_mode_strategy()) {
        let stream = DeterministicStream::with_mode(&seed, mode);
        for draw in stream.take(32) {
            prop_assert!((0.0..1.0).contains(&draw));
            let scaled = draw * 10_000.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn variants_stay_in_range(config in brief_strategy(), key in "[a-f0-9]{0,32}", mode in hash_mode_strategy()) {
        let registry = builtin_registry();
        let palette = registry.get(&config.palette_id);
        let variants = VariantAssembler::new(mode).generate(&config, &key, registry);
        let x_span = if config.structure == Structure::IconLeft { 52.0 } else { 72.0 };
        let y_span = if config.structure == Structure::IconTop { 42.0 } else { 72.0 };
        let size_span = if config.tone == Tone::Bold { 64.0 } else { 52.0 };

        for (index, v) in variants.iter().enumerate() {
            prop_assert_eq!(v.index, index);
            prop_assert_eq!(&v.palette, palette);
            prop_assert!(v.gradient.angle_deg >= 110.0 && v.gradient.angle_deg < 190.0);
            prop_assert!((4..=7).contains(&v.shapes.len()));
            for s in &v.shapes {
                prop_assert!(s.position.x >= 0.0 && s.position.x < x_span);
                prop_assert!(s.position.y >= 0.0 && s.position.y < y_span);
                prop_assert!(s.size >= 32.0 && s.size < 32.0 + size_span);
                prop_assert!(s.rotation_deg >= 0.0 && s.rotation_deg < 360.0);
                prop_assert!(s.opacity >= 0.25 && s.opacity < 0.8);
                prop_assert!(palette.shapes.contains(&s.color));
            }
            prop_assert!((2..=4).contains(&v.core.layers.len()));
            prop_assert_eq!(v.core.layers[0].radius, 26.0);
            prop_assert!(v.core.layers.iter().all(|l| l.render_radius() >= 10.0));
            prop_assert!(v.core.layers.windows(2).all(|w| w[1].opacity < w[0].opacity));
        }
    }

    #[test]
    fn generation_is_pure(config in brief_strategy(), key in "[a-z]{0,8}") {
        let registry = builtin_registry();
        prop_assert_eq!(generate_variants(&config, &key, registry), generate_variants(&config, &key, registry));
    }

    #[test]
    fn structure_only_reinterprets_the_same_seed(config in brief_strategy(), other in prop::sample::select(Structure::ALL.to_vec())) {
        let registry = builtin_registry();
        let mut moved = config.clone();
        moved.structure = other;
        let a = generate_variants(&config, "k", registry);
        let b = generate_variants(&moved, "k", registry);
        for (x, y) in a.iter().zip(b.iter()) {
            prop_assert_eq!(&x.seed, &y.seed);
            prop_assert_eq!(x.shapes.len(), y.shapes.len());
            prop_assert_eq!(&x.core, &y.core);
            prop_assert_eq!(&x.gradient, &y.gradient);
        }
    }
}

#[test]
fn unknown_palette_falls_back_to_first() {
    let config = CampaignConfig { palette_id: "does-not-exist".into(), ..CampaignConfig::sample() };
    let variants = generate_variants(&config, "k", builtin_registry());
    assert!(variants.iter().all(|v| v.palette.id == "neo-nebula"));
}

#[test]
fn key_changes_every_variant() {
    let config = CampaignConfig::sample();
    let a = generate_variants(&config, "first", builtin_registry());
    let b = generate_variants(&config, "second", builtin_registry());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_ne!(x.seed, y.seed);
        assert_ne!(x.shapes, y.shapes);
    }
}

#[test]
fn generated_types_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<logomark_core::LogoVariant>();
    assert_send_sync::<VariantAssembler>();
    assert_send_sync::<logomark_core::PaletteRegistry>();

    let config = CampaignConfig::sample();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = config.clone();
            std::thread::spawn(move || generate_variants(&config, "shared", builtin_registry()))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
