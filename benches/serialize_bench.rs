use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use fielderr::{add_field, add_global, label, ErrorCollection};

fn build_collection(fields: usize, per_field: usize) -> ErrorCollection {
    let mut errors = ErrorCollection::new();
    for field in 0..fields {
        let name = format!("field_{}", field);
        for n in 0..per_field {
            add_field!(errors, name.as_str(), "Invalid", label("FIELD"), n as u64);
        }
    }
    add_global!(errors, "MonError", 12, "titi");
    errors
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    group
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));

    // Different collection sizes
    for &(fields, per_field) in &[(1, 1), (10, 5), (100, 10), (1000, 3)] {
        let errors = build_collection(fields, per_field);

        group.bench_function(format!("to_string_{}x{}", fields, per_field), |b| {
            b.iter(|| serde_json::to_string(black_box(&errors)).unwrap())
        });
        group.bench_function(format!("to_json_{}x{}", fields, per_field), |b| {
            b.iter(|| black_box(&errors).to_json())
        });
    }

    group.finish();
}

fn benchmark_build(c: &mut Criterion) {
    c.bench_function("build_100x10", |b| {
        b.iter(|| black_box(build_collection(100, 10)).has_error())
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(2));
    targets = benchmark_serialize, benchmark_build
);
criterion_main!(benches);
