//! Criterion benchmarks for the typed getters.
//!
//! Measures one lookup plus parse for the common getters against an
//! in-memory store, including the defaulted fallback path.
//!
//! Run with:
//! ```bash
//! cargo bench --package app-settings --bench accessor_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use app_settings::{Color, ConfigAccessor, MemoryStore};

fn build_accessor() -> ConfigAccessor<MemoryStore, MemoryStore> {
    let settings: MemoryStore = [
        ("name", "svc"),
        ("retries", "3"),
        ("ratio", "0.75"),
        ("verbose", "True"),
        ("timeout_minutes", "1051200"),
        ("hosts", "a,b,c,d,e"),
        ("endpoint", "https://api.example.com/v1/"),
        ("theme", "CornflowerBlue"),
    ]
    .into_iter()
    .collect();
    let connections: MemoryStore = [("Main", "Data Source=db01;Initial Catalog=orders")]
        .into_iter()
        .collect();
    ConfigAccessor::new(settings, connections)
}

fn bench_getters(c: &mut Criterion) {
    let accessor = build_accessor();
    let mut group = c.benchmark_group("getters");

    group.bench_function("get_string", |b| {
        b.iter(|| accessor.get_string(black_box("name")))
    });
    group.bench_function("get_int", |b| b.iter(|| accessor.get_int(black_box("retries"))));
    group.bench_function("get_int_or_absent", |b| {
        b.iter(|| accessor.get_int_or(black_box("missing"), 5))
    });
    group.bench_function("get_double", |b| b.iter(|| accessor.get_double(black_box("ratio"))));
    group.bench_function("get_bool", |b| b.iter(|| accessor.get_bool(black_box("verbose"))));
    group.bench_function("get_minutes", |b| {
        b.iter(|| accessor.get_minutes(black_box("timeout_minutes")))
    });
    group.bench_function("get_csv", |b| b.iter(|| accessor.get_csv(black_box("hosts"))));
    group.bench_function("get_uri", |b| b.iter(|| accessor.get_uri(black_box("endpoint"))));
    group.bench_function("get_color_or", |b| {
        b.iter(|| accessor.get_color_or(black_box("theme"), Color::from_rgb(0, 0, 0)))
    });
    group.bench_function("get_connection_string", |b| {
        b.iter(|| accessor.get_connection_string(black_box("Main")))
    });

    group.finish();
}

criterion_group!(benches, bench_getters);
criterion_main!(benches);
