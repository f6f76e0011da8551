use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use duograph::{DirectedGraph, Graph, UndirectedGraph};

/// Deterministic pseudo-random edge list (xorshift) so runs are comparable.
fn random_edges(n: usize, m: usize) -> Vec<(usize, usize)> {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    (0..m)
        .map(|_| {
            let x = (next() % n as u64) as usize + 1;
            let y = (next() % n as u64) as usize + 1;
            (x, y)
        })
        .collect()
}

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for &size in &[1_000usize, 100_000] {
        let edges = random_edges(size, size * 4);
        let graph: UndirectedGraph = UndirectedGraph::with_edges(size, edges).unwrap();

        group.bench_with_input(BenchmarkId::new("bfs", size), &graph, |b, g| {
            b.iter(|| black_box(g.breadth_first_traversal(1).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("dfs", size), &graph, |b, g| {
            b.iter(|| black_box(g.depth_first_traversal(1).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("components", size), &graph, |b, g| {
            b.iter(|| black_box(g.connected_component_count()));
        });
    }
    group.finish();
}

fn bench_directed(c: &mut Criterion) {
    let mut group = c.benchmark_group("directed");
    for &size in &[1_000usize, 100_000] {
        let edges = random_edges(size, size * 2);
        let graph: DirectedGraph = DirectedGraph::with_edges(size, edges).unwrap();

        group.bench_with_input(BenchmarkId::new("kosaraju", size), &graph, |b, g| {
            b.iter(|| black_box(g.strongly_connected_component_count()));
        });
        group.bench_with_input(BenchmarkId::new("is_cyclic", size), &graph, |b, g| {
            b.iter(|| black_box(g.is_cyclic()));
        });
        group.bench_with_input(BenchmarkId::new("weak_components", size), &graph, |b, g| {
            b.iter(|| black_box(g.weakly_connected_component_count()));
        });
    }

    let size = 100_000;
    let path: DirectedGraph = DirectedGraph::with_edges(size, (1..size).map(|i| (i, i + 1))).unwrap();
    group.bench_function("is_tree_long_path", |b| {
        b.iter(|| black_box(path.is_tree()));
    });
    group.finish();
}

criterion_group!(benches, bench_traversals, bench_directed);
criterion_main!(benches);
