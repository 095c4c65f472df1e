//! Lexer throughput benchmarks.
//!
//! `full` drives whole files through [`Lexer::next_token`]; `resume`
//! measures restoring a mid-file snapshot and lexing one line, the editor
//! pattern the session is built for.

#![allow(clippy::unwrap_used, reason = "benchmarks lex known-good input")]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mirah_lexer::{Lexer, TokenKind};

/// Generate N small classes mixing strings, regexes and heredocs.
fn generate_n_classes(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "class Greeter{i} < Base\n  \
                 def greet(name:String, count:int)\n    \
                 # say hi {i} times\n    \
                 count.times {{ puts \"Hello #{{name}} #{i}\" }}\n    \
                 return name =~ /^[a-z]+{i}$/i ? 0x{i:X} : 3.14e-{i}\n  \
                 end\n\n  \
                 def banner\n    \
                 <<-EOS\n      Greeter #{{@name}}\n    EOS\n  \
                 end\n\
                 end\n"
            )
        })
        .collect()
}

fn bench_full_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("mirah_lexer/full");

    for num_classes in [10, 100, 1000] {
        let source = generate_n_classes(num_classes);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_classes),
            &source,
            |b, src| {
                b.iter(|| {
                    let mut lexer = Lexer::new(src);
                    loop {
                        let token = lexer.next_token().unwrap();
                        if token.kind == TokenKind::Eof {
                            break;
                        }
                        black_box(token);
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_resume(c: &mut Criterion) {
    let source = generate_n_classes(1000);
    let half = u32::try_from(source.len() / 2).unwrap();
    let mut lexer = Lexer::new(&source);
    while lexer.position() < half {
        lexer.next_token().unwrap();
    }
    let offset = lexer.position();
    let state = lexer.state();

    c.bench_function("mirah_lexer/resume_line", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(&source);
            lexer.restore(offset, &state);
            loop {
                let token = lexer.next_token().unwrap();
                if matches!(token.kind, TokenKind::NewLine | TokenKind::Eof) {
                    break;
                }
                black_box(token);
            }
        });
    });
}

criterion_group!(benches, bench_full_throughput, bench_resume);
criterion_main!(benches);
