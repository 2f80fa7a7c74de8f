use {
    criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main},
    rand::{SeedableRng, rngs::StdRng},
    std::{hint::black_box, time::Duration},
    themegen::{
        GenerateOptions, ThemeGenerator, ThemeType, ThemeVariant,
        color::{AAA_NORMAL, Oklch, content_color_for, fit_background},
        theme::{export::OutputFormat, naming::NameStrategy},
    },
};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for (name, enforce) in [("enforced", true), ("best_effort", false)] {
        let generator = ThemeGenerator::new(Default::default(), enforce);

        for theme_type in [ThemeType::Light, ThemeType::Dark] {
            let options = GenerateOptions::new(theme_type, NameStrategy::AdjectiveNoun);
            let mut rng = StdRng::seed_from_u64(0);

            group.bench_function(BenchmarkId::new(name, format!("{theme_type:?}")), |b| {
                b.iter(|| generator.generate(black_box(&options), &mut rng))
            });
        }
    }

    let generator = ThemeGenerator::default();
    let mut rng = StdRng::seed_from_u64(1);
    group.bench_function("colors_only/dark", |b| {
        b.iter(|| generator.generate_colors(black_box(ThemeVariant::Dark), &mut rng))
    });

    group.finish();
}

fn bench_contrast(c: &mut Criterion) {
    let mut group = c.benchmark_group("contrast");

    let backgrounds = [
        ("dark", Oklch::new(0.15, 0.02, 250.0)),
        ("mid", Oklch::new(0.6, 0.2, 30.0).to_gamut()),
        ("light", Oklch::new(0.95, 0.01, 80.0)),
    ];

    for (name, bg) in backgrounds {
        group.bench_with_input(BenchmarkId::new("content_color_for", name), &bg, |b, bg| {
            b.iter(|| content_color_for(black_box(*bg), AAA_NORMAL))
        });

        group.bench_with_input(BenchmarkId::new("fit_background", name), &bg, |b, bg| {
            b.iter(|| fit_background(black_box(*bg), AAA_NORMAL))
        });
    }

    group.bench_function("to_gamut/out_of_gamut", |b| {
        b.iter(|| black_box(Oklch::new(0.7, 0.45, 145.0)).to_gamut())
    });

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");
    let generator = ThemeGenerator::default();

    for format in [
        OutputFormat::Json,
        OutputFormat::Toml,
        OutputFormat::Css,
        OutputFormat::Daisyui,
    ] {
        group.bench_function(format!("{format:?}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(2);
                    (0..8)
                        .map(|_| generator.generate(&GenerateOptions::default(), &mut rng))
                        .collect::<Vec<_>>()
                },
                |themes| format.render(&themes).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group! {
    name = generator_bench;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(200);
    targets = bench_generate, bench_contrast
}

criterion_group! {
    name = export_bench;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(3));
    targets = bench_export
}

criterion_main!(generator_bench, export_bench);
