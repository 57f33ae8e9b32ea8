use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use unitplot_rs::core::{PlotDescriptor, SeriesDescriptor};
use unitplot_rs::render::render_plot;
use unitplot_rs::units::{UnitTable, format_unit, parse_unit};

fn bench_unit_parse_round_trip(c: &mut Criterion) {
    c.bench_function("unit_parse_round_trip", |b| {
        b.iter(|| {
            let parsed = parse_unit(black_box("µm⁻³"));
            let _ = format_unit(
                parsed.unit.as_deref().unwrap_or_default(),
                parsed.exponent,
            );
        })
    });
}

fn bench_render_two_series_10k(c: &mut Criterion) {
    let units = UnitTable::si();
    let x: Vec<f64> = (0..10_000).map(|i| i as f64 * 1e-3).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();

    let descriptors = vec![
        PlotDescriptor::new("Distance", "Height")
            .with_units("µm", "µm")
            .with_series(SeriesDescriptor::new("profile", x.clone(), y.clone()).with_style("-")),
        PlotDescriptor::new("Distance", "Height")
            .with_units("nm", "nm")
            .with_series(SeriesDescriptor::new("detail", x, y).with_style("k-o")),
    ];

    c.bench_function("render_two_series_10k", |b| {
        b.iter(|| {
            let rendered = render_plot(black_box(&descriptors), black_box(Some("µm")), &units)
                .expect("render should succeed");
            black_box(rendered.primitives.len())
        })
    });
}

criterion_group!(benches, bench_unit_parse_round_trip, bench_render_two_series_10k);
criterion_main!(benches);
