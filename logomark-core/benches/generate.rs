use criterion::{black_box, criterion_group, criterion_main, Criterion};
use logomark_core::palette::builtin_registry;
use logomark_core::stream::DeterministicStream;
use logomark_core::{derive_narrative, render_preview_rgba, render_svg, CampaignConfig, HashMode, VariantAssembler};

// Stream throughput: seed + 64 draws, roughly one variant's worth
fn bench_stream(c: &mut Criterion) {
    let seed = "Meta Horizon|Boost retention and community sign-ups|immersive, social, collaborative|key|0";
    for mode in [HashMode::Wrapping, HashMode::DoublePrecision] {
        c.bench_function(&format!("stream_64_draws_{}", mode), |b| {
            b.iter(|| {
                let stream = DeterministicStream::with_mode(black_box(seed), mode);
                black_box(stream.take(64).sum::<f64>())
            })
        });
    }
}

// Full pipeline for one brief: three variants
fn bench_generate(c: &mut Criterion) {
    let config = CampaignConfig::sample();
    let registry = builtin_registry();
    let assembler = VariantAssembler::default();
    c.bench_function("generate_three_variants", |b| {
        b.iter(|| black_box(assembler.generate(black_box(&config), "bench-key", registry)))
    });
    c.bench_function("derive_narrative", |b| b.iter(|| black_box(derive_narrative(black_box(&config)))));
}

fn bench_render(c: &mut Criterion) {
    let config = CampaignConfig::sample();
    let variants = VariantAssembler::default().generate(&config, "bench-key", builtin_registry());
    c.bench_function("render_svg", |b| b.iter(|| black_box(render_svg(black_box(&variants[0]), &config))));
    c.bench_function("render_preview_128", |b| {
        b.iter(|| black_box(render_preview_rgba(black_box(&variants[0]), 128, 128)))
    });
}

criterion_group!(benches, bench_stream, bench_generate, bench_render);
criterion_main!(benches);
