//! Streaming pipeline benchmark: Measure preprocess + delta cost per tick.
//!
//! Every render tick re-scans the whole committed buffer, so the numbers
//! that matter are how preprocessing and delta computation scale with
//! buffer size.

use ballast::render::delta::delta;
use ballast::snapshot::preprocess;
use ballast::TableLayouts;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a markdown document of `blocks` paragraph/table blocks.
fn create_test_document(blocks: usize) -> String {
    let mut doc = String::new();
    for i in 0..blocks {
        doc.push_str(&format!(
            "Paragraph {i} with a handful of ordinary words in it.\n\n"
        ));
        if i % 4 == 0 {
            doc.push_str("| id | note |\n| --- | --- |\n");
            doc.push_str(&format!("| {i} | row for block {i} |\n"));
            doc.push_str(&format!("| {i} | another row with longer cell content |\n\n"));
        }
    }
    doc
}

fn preprocess_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess_by_size");

    for blocks in [8, 64, 256] {
        let doc = create_test_document(blocks);

        group.bench_with_input(BenchmarkId::from_parameter(blocks), &doc, |b, doc| {
            b.iter(|| {
                let mut layouts = TableLayouts::new();
                preprocess(black_box(doc), &mut layouts, false)
            })
        });
    }

    group.finish();
}

fn preprocess_warm_registry(c: &mut Criterion) {
    let doc = create_test_document(64);
    let mut layouts = TableLayouts::new();
    preprocess(&doc, &mut layouts, false);

    c.bench_function("preprocess_64_blocks_warm", |b| {
        b.iter(|| preprocess(black_box(&doc), &mut layouts, false))
    });
}

fn delta_append_suffix(c: &mut Criterion) {
    let prev = create_test_document(256);
    let next = format!("{prev}one more paragraph at the end.\n");

    c.bench_function("delta_append_suffix", |b| {
        b.iter(|| delta(black_box(&prev), black_box(&next)))
    });
}

fn delta_divergent_rewind(c: &mut Criterion) {
    let prev = create_test_document(256);
    let mut next = prev.clone();
    // Flip a byte near the middle to force the common-prefix scan.
    let mid = next.len() / 2;
    next.replace_range(mid..=mid, "Z");

    c.bench_function("delta_divergent_rewind", |b| {
        b.iter(|| delta(black_box(&prev), black_box(&next)))
    });
}

criterion_group!(
    benches,
    preprocess_by_size,
    preprocess_warm_registry,
    delta_append_suffix,
    delta_divergent_rewind,
);
criterion_main!(benches);
