use brick_core::Dimensions;
use brick_layer::{gen_block_layer_text, session_from_text};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn ingest_layer_bench(c: &mut Criterion) {
    let text = gen_block_layer_text(Dimensions::new(12, 16), 42).unwrap();
    c.bench_function("ingest_layer_12x16", |b| {
        b.iter(|| {
            let session = session_from_text(black_box(&text)).unwrap();
            black_box(session);
        });
    });
}

criterion_group!(benches, ingest_layer_bench);
criterion_main!(benches);
