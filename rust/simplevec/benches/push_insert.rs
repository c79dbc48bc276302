use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use simplevec::{SimpleVector, reserve};
use std::hint::black_box;

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    for &size in &[16usize, 1024, 65536] {
        group.bench_with_input(BenchmarkId::new("simple_vector", size), &size, |b, &n| {
            b.iter(|| {
                let mut v = SimpleVector::new();
                for i in 0..n {
                    v.push_back(black_box(i));
                }
                v
            });
        });

        group.bench_with_input(
            BenchmarkId::new("simple_vector_reserved", size),
            &size,
            |b, &n| {
                b.iter(|| {
                    let mut v = SimpleVector::with_reservation(reserve(n));
                    for i in 0..n {
                        v.push_back(black_box(i));
                    }
                    v
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("std_vec", size), &size, |b, &n| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..n {
                    v.push(black_box(i));
                }
                v
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for &size in &[16usize, 1024] {
        group.bench_with_input(BenchmarkId::new("simple_vector", size), &size, |b, &n| {
            b.iter(|| {
                let mut v = SimpleVector::new();
                for i in 0..n {
                    v.insert(0, black_box(i));
                }
                v
            });
        });

        group.bench_with_input(BenchmarkId::new("std_vec", size), &size, |b, &n| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..n {
                    v.insert(0, black_box(i));
                }
                v
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_back, bench_insert_front);
criterion_main!(benches);
