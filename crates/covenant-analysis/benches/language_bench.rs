//! Prohibited-language scanner benchmarks.
//!
//! Run with: cargo bench -p covenant-analysis --bench language_bench

use covenant_analysis::enforcement::language::LanguageScanner;
use covenant_analysis::scanner::hasher::sha256_reader;
use covenant_core::config::LanguageConfig;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// A document of `lines` lines, one in ten carrying a (sometimes negated) claim.
fn document(lines: usize) -> String {
    (0..lines)
        .map(|i| match i % 10 {
            0 => "We do not guarantee that the system understands intent.".to_string(),
            5 => "The AI is smart and will always respond.".to_string(),
            _ => format!("Paragraph {i} describes the static certification pages."),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn language_scan(c: &mut Criterion) {
    let scanner = LanguageScanner::from_config(&LanguageConfig::default()).unwrap();
    let mut group = c.benchmark_group("language_scan");

    for lines in [100, 1_000, 10_000] {
        let text = document(lines);
        group.bench_with_input(BenchmarkId::new("lines", lines), &text, |b, text| {
            b.iter(|| scanner.scan_text(black_box("README.md"), black_box(text)));
        });
    }
    group.finish();
}

fn canonical_digest(c: &mut Criterion) {
    let data = vec![0x5au8; 4 * 1024 * 1024];
    let mut group = c.benchmark_group("canonical_digest");
    group.sample_size(20);

    for chunk in [4096, 65_536] {
        group.bench_with_input(BenchmarkId::new("chunk", chunk), &chunk, |b, &chunk| {
            b.iter(|| sha256_reader(black_box(&data[..]), chunk).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, language_scan, canonical_digest);
criterion_main!(benches);
