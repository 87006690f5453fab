use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use edbox_core::identity::{ColorVariant, assign_color, assign_name, djb2};
use edbox_core::thread::{CommentNode, flatten};

/// Forest sizes: (name, roots, replies per node, depth).
const SHAPES: [(&str, usize, usize, usize); 3] = [
    ("small", 20, 2, 2),
    ("wide", 200, 8, 2),
    ("deep", 10, 2, 10),
];

fn build_tree(next_id: &mut u64, fanout: usize, depth: usize) -> CommentNode<u64> {
    *next_id += 1;
    let id = *next_id;
    if depth == 0 {
        return CommentNode::leaf(id);
    }
    let children = (0..fanout)
        .map(|_| build_tree(next_id, fanout, depth - 1))
        .collect();
    CommentNode::new(id, children)
}

fn build_forest(roots: usize, fanout: usize, depth: usize) -> Vec<CommentNode<u64>> {
    let mut next_id = 0;
    (0..roots)
        .map(|_| build_tree(&mut next_id, fanout, depth))
        .collect()
}

fn bench_identity(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity");
    let ids: Vec<u64> = (0..1_000).collect();
    group.throughput(Throughput::Elements(ids.len() as u64));

    group.bench_function("djb2", |b| {
        b.iter(|| {
            ids.iter()
                .map(|id| djb2(&id.to_string()))
                .fold(0_u32, u32::wrapping_add)
        });
    });
    group.bench_function("assign_name", |b| {
        b.iter(|| ids.iter().map(|id| assign_name(*id).len()).sum::<usize>());
    });
    group.bench_function("assign_color", |b| {
        b.iter(|| {
            ids.iter()
                .map(|id| assign_color(*id, ColorVariant::Secondary).len())
                .sum::<usize>()
        });
    });

    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("thread.flatten");

    for (name, roots, fanout, depth) in SHAPES {
        let forest = build_forest(roots, fanout, depth);
        let total = edbox_core::thread::node_count(&forest);
        group.throughput(Throughput::Elements(total as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &forest, |b, forest| {
            b.iter(|| black_box(flatten(forest).len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_identity, bench_flatten);
criterion_main!(benches);
