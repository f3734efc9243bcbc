use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use hamiltonian::cs::graph::{generators, HamiltonianPath};

fn bench_complete_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("complete_graph");
    for n in [4usize, 6, 8] {
        let graph = generators::complete(n);
        group.bench_with_input(BenchmarkId::new("find_path", n), &graph, |b, g| {
            b.iter(|| HamiltonianPath::new(black_box(g)).find_path(None))
        });
        group.bench_with_input(BenchmarkId::new("count_paths", n), &graph, |b, g| {
            b.iter(|| HamiltonianPath::new(black_box(g)).count_paths())
        });
    }
    group.finish();
}

fn bench_sparse_no_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("no_path");
    for n in [8usize, 12, 16] {
        let graph = generators::star(n);
        group.bench_with_input(BenchmarkId::new("star", n), &graph, |b, g| {
            b.iter(|| HamiltonianPath::new(black_box(g)).find_path(None))
        });
    }
    group.finish();
}

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph");
    for n in [8usize, 10, 12] {
        let graph = generators::random(n, 0.35, false, 2024).expect("valid probability");
        group.bench_with_input(BenchmarkId::new("find_path", n), &graph, |b, g| {
            b.iter(|| HamiltonianPath::new(black_box(g)).find_path(None))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_complete_graphs,
    bench_sparse_no_path,
    bench_random_graphs
);
criterion_main!(benches);
