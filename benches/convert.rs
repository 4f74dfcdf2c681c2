use geo::{polygon, Geometry, MultiPolygon};

use criterion::{criterion_group, criterion_main, Criterion};
use geopath::algorithm::convert_batch;
use geopath::{ConvertOptions, GeometryConverter, NoopDiagnostics, PathGeometry};

fn create_data() -> Vec<Geometry> {
    // An L shape
    let poly = polygon![
        (x: 0.0, y: 0.0),
        (x: 4.0, y: 0.0),
        (x: 4.0, y: 1.0),
        (x: 1.0, y: 1.0),
        (x: 1.0, y: 4.0),
        (x: 0.0, y: 4.0),
        (x: 0.0, y: 0.0),
    ];
    let multi = MultiPolygon::new(vec![poly; 20]);
    vec![Geometry::MultiPolygon(multi); 1000]
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();

    for flatten in [false, true] {
        let options = ConvertOptions::new(flatten);
        c.bench_function(
            &format!("convert 1000 MultiPolygons (flatten_multiparts={flatten})"),
            |b| {
                b.iter(|| {
                    let mut converter =
                        GeometryConverter::with_diagnostics(options, NoopDiagnostics);
                    let mut sink: Vec<PathGeometry> = Vec::new();
                    for geom in &data {
                        converter.convert(geom, &mut sink);
                    }
                    sink
                })
            },
        );
    }

    c.bench_function("convert_batch 1000 MultiPolygons", |b| {
        b.iter(|| convert_batch(&data, ConvertOptions::default()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
