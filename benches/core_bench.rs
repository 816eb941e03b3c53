use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use std::hint::black_box;
use tactical_plotting::{
    compute_outline, decode, encode, EditController, EventLog, FeatureRef, MemoryLayer,
    PlottingHost, Symbol, Variant, VariantKind,
};

fn build_zigzag(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = i as f64 * 25.0;
            let y = if i % 2 == 0 { 0.0 } else { 12.0 + (i % 5) as f64 };
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_outlines(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline");

    for &count in &[3usize, 16, 128] {
        let points = build_zigzag(count);
        for kind in [
            VariantKind::DiagonalArrow,
            VariantKind::BezierCurve2,
            VariantKind::CardinalCurve,
        ] {
            let variant = Variant::from(kind);
            group.bench_with_input(
                BenchmarkId::new(format!("{kind:?}"), count),
                &points,
                |b, pts| b.iter(|| black_box(compute_outline(&variant, black_box(pts)))),
            );
        }
    }

    let base = [DVec2::new(0.0, 0.0), DVec2::new(40.0, 10.0)];
    group.bench_function("GatheringPlace", |b| {
        b.iter(|| black_box(compute_outline(&Variant::GatheringPlace, black_box(&base))))
    });

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let symbol = Symbol::new(Variant::DiagonalArrow { ratio: 6.0 }, build_zigzag(256));
    let text = encode(&symbol);

    c.bench_function("codec_encode_256", |b| {
        b.iter(|| black_box(encode(black_box(&symbol))))
    });
    c.bench_function("codec_decode_256", |b| {
        b.iter(|| {
            let decoded =
                decode(black_box(&text), VariantKind::DiagonalArrow).expect("decode failed");
            black_box(decoded.control_points().len())
        })
    });
}

fn bench_point_drag(c: &mut Criterion) {
    let mut layer = MemoryLayer::default();
    let id = layer.add_symbol(Symbol::new(
        Variant::DiagonalArrow { ratio: 6.0 },
        build_zigzag(32),
    ));
    let mut controller = EditController::new(EventLog::new());
    controller.select(&mut layer, id);

    c.bench_function("drag_move_point_32", |b| {
        b.iter(|| {
            controller.drag_start(&mut layer, FeatureRef::ControlPoint(16), DVec2::ZERO);
            controller.drag_move(&mut layer, black_box(DVec2::new(0.5, -0.5)));
            controller.drag_complete(&mut layer);
        })
    });
}

criterion_group!(benches, bench_outlines, bench_codec, bench_point_drag);
criterion_main!(benches);
