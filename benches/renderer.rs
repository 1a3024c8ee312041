use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use placeholder_svg::color::Rgb;
use placeholder_svg::palette::derive;
use placeholder_svg::render::{render_placeholder, render_svg};
use placeholder_svg::request::{Flags, PlaceholderParams};
use placeholder_svg::theme::Theme;
use std::hint::black_box;

const ALL_ON: Flags = Flags {
    dots: true,
    gradient: true,
    label: true,
};

fn fixture(name: &str) -> PlaceholderParams {
    match name {
        "flat_small" => PlaceholderParams::new("64", "64"),
        "flat_large" => PlaceholderParams::new("3000", "3000").with_color("4a90d9"),
        "shorthand_gradient" => PlaceholderParams::new("640", "480")
            .with_color("#f5a")
            .with_flags(Flags {
                gradient: true,
                ..Flags::default()
            }),
        "rounded_dots" => PlaceholderParams::new("320", "320")
            .with_color("0b3d2e")
            .with_radius("40")
            .with_flags(Flags {
                dots: true,
                ..Flags::default()
            }),
        "all_layers" => PlaceholderParams::new("1280", "720")
            .with_color("c0ffee")
            .with_radius("24")
            .with_flags(ALL_ON),
        _ => panic!("unknown fixture {name}"),
    }
}

const FIXTURES: [&str; 5] = [
    "flat_small",
    "flat_large",
    "shorthand_gradient",
    "rounded_dots",
    "all_layers",
];

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    for (name, color) in [
        ("black", Rgb::new(0, 0, 0)),
        ("gray", Rgb::new(0x33, 0x33, 0x33)),
        ("white", Rgb::new(0xff, 0xff, 0xff)),
        ("red", Rgb::new(0xff, 0, 0)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &color, |b, color| {
            b.iter(|| black_box(derive(black_box(*color), &ALL_ON)));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let theme = Theme::classic();
    let mut group = c.benchmark_group("render");
    for name in FIXTURES {
        let request = fixture(name).validate().expect("fixture is valid");
        let palette = derive(request.color, &request.flags);
        group.bench_with_input(BenchmarkId::from_parameter(name), &request, |b, request| {
            b.iter(|| {
                let svg = render_svg(black_box(request), &palette, &theme);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    for name in FIXTURES {
        let params = fixture(name);
        group.bench_with_input(BenchmarkId::from_parameter(name), &params, |b, params| {
            b.iter(|| {
                let svg = render_placeholder(black_box(params)).expect("render failed");
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_derive, bench_render, bench_end_to_end
);
criterion_main!(benches);
