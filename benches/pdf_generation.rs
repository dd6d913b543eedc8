//! Finalize throughput benchmarks
//!
//! Measures resolution, layout and emission of documents of increasing size.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use folio::document::DocumentConfig;
use folio::document::codec::deflate;
use folio::{DictValue, Dictionary, PdfDocument, PdfWriter, StreamEncoding, WriterConfig};
use std::hint::black_box;

/// A catalog, a page tree and `pages` pages, each with one content stream
/// referenced before it is created.
fn build_writer(pages: usize) -> PdfWriter {
    let mut writer = PdfWriter::with_config(WriterConfig::default().with_fixed_timestamp(0));
    writer.create_object(
        Dictionary::new()
            .with("Type", "/Catalog")
            .with("Pages", DictValue::reference("PAGES")),
        Some("CATALOG"),
    );
    let kids: Vec<DictValue> = (1..=pages)
        .map(|n| DictValue::reference(format!("PAGE_{}", n)))
        .collect();
    writer.create_object(
        Dictionary::new()
            .with("Type", "/Pages")
            .with("Kids", kids)
            .with("Count", pages.to_string()),
        Some("PAGES"),
    );
    for n in 1..=pages {
        writer.create_object(
            Dictionary::new()
                .with("Type", "/Page")
                .with("Parent", DictValue::reference("PAGES"))
                .with("MediaBox", "[ 0 0 595.276 841.89 ]")
                .with("Contents", DictValue::reference(format!("CONTENT_{}", n))),
            Some(&format!("PAGE_{}", n)),
        );
        let content = format!("BT /F1 12 Tf 1 0 0 1 72 720 Tm (Page {}) Tj ET", n);
        let data = deflate(content.as_bytes(), 6).expect("in-memory deflate");
        writer
            .create_stream_object(
                Dictionary::new(),
                data,
                StreamEncoding::Flate,
                Some(&format!("CONTENT_{}", n)),
            )
            .expect("no reserved keys");
    }
    writer
}

fn bench_finalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("finalize");
    for pages in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(pages as u64));
        group.bench_with_input(BenchmarkId::from_parameter(pages), &pages, |b, &pages| {
            b.iter_batched(
                || build_writer(pages),
                |writer| black_box(writer.finalize_to_vec().expect("finalize")),
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");
    for pages in [1usize, 50] {
        group.bench_with_input(BenchmarkId::new("text_pages", pages), &pages, |b, &pages| {
            b.iter(|| {
                let config = WriterConfig::default().with_fixed_timestamp(0);
                let mut document = PdfDocument::with_config(DocumentConfig::default(), config)
                    .expect("document setup");
                for page in 0..pages {
                    if page > 0 {
                        document.add_page().expect("add page");
                    }
                    for line in 0..40 {
                        let y = 280.0 - line as f64 * 6.5;
                        document.place_text("The quick brown fox jumps over the lazy dog", 20.0, y);
                    }
                }
                black_box(document.create_to_vec().expect("create"))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_finalize, bench_document);
criterion_main!(benches);
