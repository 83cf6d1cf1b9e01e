use criterion::{black_box, criterion_group, criterion_main, Criterion};

use yaml2bkl::{convert_document, convert_str, load_str, render};

const WXAPP: &str = include_str!("../tests/fixtures/wxapp.yaml");

fn bench_convert(c: &mut Criterion) {
    c.bench_function("convert_wxapp", |b| b.iter(|| convert_str(black_box(WXAPP))));
}

fn bench_render(c: &mut Criterion) {
    let tree = load_str(WXAPP).and_then(|document| convert_document(&document));
    if let Ok(tree) = tree {
        c.bench_function("render_wxapp", |b| b.iter(|| render(black_box(&tree))));
    }
}

criterion_group!(benches, bench_convert, bench_render);
criterion_main!(benches);
