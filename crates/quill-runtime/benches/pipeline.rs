//! Pipeline benchmarks
//!
//! Measures each stage on its own (lex, parse, interpret) and the full run,
//! over programs of increasing length.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quill_runtime::{capture_writer, interpret, parse, parse_source, tokenize, Quill};

/// A program of `n` blocks, each reading, computing and conditionally printing
fn generate_program(n: usize) -> String {
    let mut source = String::new();
    for i in 0..n {
        source.push_str(&format!(
            "input(v{i}); acc{i} = v{i} * 3 + {i} - 1;\n\
             if acc{i} > 10 then print(acc{i}); endif;\n",
            i = i
        ));
    }
    source
}

fn generate_inputs(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn bench_lex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex");
    for size in [10, 100, 1000] {
        let source = generate_program(size);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| tokenize(black_box(source)))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for size in [10, 100, 1000] {
        let tokens = match tokenize(&generate_program(size)) {
            Ok(tokens) => tokens,
            Err(e) => panic!("benchmark program failed to lex: {}", e),
        };
        group.bench_with_input(BenchmarkId::from_parameter(size), &tokens, |b, tokens| {
            b.iter(|| parse(black_box(tokens.clone())))
        });
    }
    group.finish();
}

fn bench_interpret(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpret");
    for size in [10, 100, 1000] {
        let program = match parse_source(&generate_program(size)) {
            Ok(program) => program,
            Err(e) => panic!("benchmark program failed to parse: {}", e),
        };
        let inputs = generate_inputs(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &program, |b, program| {
            b.iter(|| {
                let (writer, _) = capture_writer();
                interpret(black_box(program), &inputs, writer)
            })
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let source = generate_program(100);
    let inputs = generate_inputs(100);
    let (writer, _) = capture_writer();
    let quill = Quill::new().with_output(writer);

    c.bench_function("run_100_blocks", |b| {
        b.iter(|| quill.run(black_box(&source), &inputs))
    });
}

criterion_group!(
    benches,
    bench_lex,
    bench_parse,
    bench_interpret,
    bench_full_run
);
criterion_main!(benches);
