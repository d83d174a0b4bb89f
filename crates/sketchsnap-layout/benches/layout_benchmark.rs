//! Layout benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sketchsnap_core::{Rect, Size};
use sketchsnap_layout::{arrange, Axis, ContentNode};

fn screen_batches() -> Vec<Vec<Rect>> {
    (0..20)
        .map(|column| {
            (0..5)
                .map(|row| Rect::new(0.0, 0.0, 375.0 + column as f64, 667.0 + row as f64))
                .collect()
        })
        .collect()
}

fn scroll_tree(depth: usize, fanout: usize) -> ContentNode {
    let frame = Rect::new(depth as f64 * 4.0, depth as f64 * 8.0, 320.0, 44.0);
    if depth == 0 {
        return ContentNode::new(frame);
    }
    ContentNode::scroll(frame, Size::new(320.0, 2000.0))
        .with_children((0..fanout).map(|_| scroll_tree(depth - 1, fanout)))
}

fn arrange_screens(c: &mut Criterion) {
    c.bench_function("arrange_100_screens", |b| {
        b.iter(|| arrange(black_box(screen_batches()), 20.0, 20.0, Axis::Horizontal))
    });
}

fn content_bounds(c: &mut Criterion) {
    let tree = scroll_tree(6, 4);
    c.bench_function("whole_content_bounds_5k_nodes", |b| {
        b.iter(|| black_box(&tree).whole_content_bounds())
    });
}

criterion_group!(benches, arrange_screens, content_bounds);
criterion_main!(benches);
