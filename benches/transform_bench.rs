use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use gantry::core::grammar::{parse, Mode};
use gantry::core::record::Variable;
use gantry::core::render::{render, Format};

/// Generate a build-mode import payload with the given token count.
fn build_payload(count: usize) -> String {
    (0..count).map(|i| format!("--build-arg VAR_{} ", i)).collect()
}

/// Generate a run-mode import payload with the given token count.
fn run_payload(count: usize) -> String {
    (0..count).map(|i| format!("-VAR_{} value{} ", i, i)).collect()
}

fn records(count: usize) -> Vec<Variable> {
    (0..count)
        .map(|i| Variable {
            id: i as u64 + 1,
            name: format!("VAR_{}", i),
            value: Some(format!("value{}", i)),
            secret: false,
        })
        .collect()
}

/// Benchmark the import transforms with varying input sizes.
fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("import");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let sizes = [8, 64, 512];

    for size in sizes {
        let build = build_payload(size);
        group.throughput(Throughput::Bytes(build.len() as u64));
        group.bench_with_input(BenchmarkId::new("build", size), &build, |b, input| {
            b.iter(|| parse(Mode::Build, black_box(input)).unwrap());
        });

        let run = run_payload(size);
        group.throughput(Throughput::Bytes(run.len() as u64));
        group.bench_with_input(BenchmarkId::new("run", size), &run, |b, input| {
            b.iter(|| parse(Mode::Run, black_box(input)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the export transforms with varying record counts.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let sizes = [8, 64, 512];

    for size in sizes {
        let records = records(size);

        group.bench_with_input(
            BenchmarkId::new("build_args", size),
            &records,
            |b, records| {
                b.iter(|| render(Format::BuildArgs, Mode::Build, black_box(records)).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("app_settings", size),
            &records,
            |b, records| {
                b.iter(|| render(Format::AppSettings, Mode::Run, black_box(records)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_import, bench_render);
criterion_main!(benches);
