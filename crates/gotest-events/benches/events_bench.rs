// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{Criterion, criterion_group, criterion_main};
use gotest_events::event::{Decoded, decode_line};
use gotest_events::registry::Registry;

/// Build a stream of `tests` top-level tests, each with a few sub-tests and some output
fn synthetic_stream(tests: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for i in 0..tests {
        let name = format!("TestCase{i}");
        lines.push(format!(
            r#"{{"Action":"run","Package":"example.com/bench","Test":"{name}"}}"#
        ));
        for j in 0..3 {
            let sub = format!("{name}/sub_{j}");
            lines.push(format!(
                r#"{{"Action":"run","Package":"example.com/bench","Test":"{sub}"}}"#
            ));
            lines.push(format!(
                r#"{{"Action":"output","Package":"example.com/bench","Test":"{sub}","Output":"    bench_test.go:{j}: \n"}}"#
            ));
            lines.push(format!(
                r#"{{"Action":"output","Package":"example.com/bench","Test":"{sub}","Output":"        \tError Trace:\tbench_test.go:{j}\n"}}"#
            ));
            lines.push(format!(
                r#"{{"Action":"pass","Package":"example.com/bench","Test":"{sub}","Elapsed":0.001}}"#
            ));
        }
        lines.push(format!(
            r#"{{"Action":"pass","Package":"example.com/bench","Test":"{name}","Elapsed":0.003}}"#
        ));
    }
    lines
}

fn events_benchmark(c: &mut Criterion) {
    let stream = synthetic_stream(500);

    c.bench_function("decode_lines", |b| {
        b.iter(|| {
            for line in &stream {
                std::hint::black_box(decode_line(line).expect("valid event"));
            }
        })
    });

    c.bench_function("replay_registry", |b| {
        b.iter(|| {
            let mut registry = Registry::new();
            for line in &stream {
                if let Decoded::Event(event) = decode_line(line).expect("valid event") {
                    registry.apply(event);
                }
            }
            std::hint::black_box(registry.summary())
        })
    });
}

criterion_group!(benches, events_benchmark);
criterion_main!(benches);
