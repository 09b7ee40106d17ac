//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Benchmarks for run lexing

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wallart_lexer::{LayoutConfig, layout, scan, strip_escapes};
use wallart_palette::TerminalPalette;

fn colored_capture(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        text.push_str(&format!(
            "\x1b[1;{};40m{:>4}\x1b[0m \x1b[{}mline of captured output\x1b[0m\tdone\n",
            31 + i % 7,
            i,
            90 + i % 8
        ));
    }
    text
}

// Benchmark lexing plain text with no escapes
fn bench_scan_plain_text(c: &mut Criterion) {
    let palette = TerminalPalette::xterm();
    let mut group = c.benchmark_group("scan_plain_text");

    for size in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let text = "A".repeat(size);
            b.iter(|| black_box(scan(black_box(text.as_str()), &palette).count()));
        });
    }
    group.finish();
}

// Benchmark lexing colored captures
fn bench_scan_colored(c: &mut Criterion) {
    let palette = TerminalPalette::witchhazel();
    let mut group = c.benchmark_group("scan_colored");

    for lines in [10, 100, 1000].iter() {
        let text = colored_capture(*lines);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &text, |b, text| {
            b.iter(|| black_box(scan(black_box(text.as_str()), &palette).count()));
        });
    }
    group.finish();
}

// Benchmark escape stripping
fn bench_strip(c: &mut Criterion) {
    let text = colored_capture(100);
    c.bench_function("strip_escapes", |b| {
        b.iter(|| black_box(strip_escapes(black_box(text.as_str()))));
    });
}

// Benchmark lexing plus grid layout
fn bench_layout(c: &mut Criterion) {
    let palette = TerminalPalette::xterm();
    let text = colored_capture(100);
    let config = LayoutConfig::default();
    c.bench_function("layout", |b| {
        b.iter(|| black_box(layout(scan(black_box(text.as_str()), &palette), &config)));
    });
}

criterion_group!(
    benches,
    bench_scan_plain_text,
    bench_scan_colored,
    bench_strip,
    bench_layout
);
criterion_main!(benches);
