use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use heron::alg::dijkstra;
use heron::graphlib::{AdjacencyList, GraphOptions};
use std::hint::black_box;

fn grid(side: usize) -> AdjacencyList {
    let mut g = AdjacencyList::new(GraphOptions {
        directed: false,
        node_count: side * side,
    });
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            let w = ((row * 31 + col * 17) % 13 + 1) as f64;
            if col + 1 < side {
                g.add_edge_with_weight(v, v + 1, w).unwrap();
            }
            if row + 1 < side {
                g.add_edge_with_weight(v, v + side, w + 0.5).unwrap();
            }
        }
    }
    g
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra/grid");
    for &side in &[16usize, 64, 128] {
        let g = grid(side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &g, |b, g| {
            b.iter(|| black_box(dijkstra::dijkstra(g, 0).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid);
criterion_main!(benches);
