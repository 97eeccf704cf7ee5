use criterion::{Criterion, criterion_group, criterion_main};
use dotlog::fmt::{FormatOptions, FormatPatch, PrefixStyle, dotted};
use dotlog::{Level, Logger, MemorySink, Message, Origin};
use std::hint::black_box;

fn bench_dotted(c: &mut Criterion) {
    let mut group = c.benchmark_group("dotted");

    let single = FormatOptions::default();
    group.bench_function("single_pattern", |b| {
        b.iter(|| dotted(black_box("Loading modules"), black_box("boot:"), &single));
    });

    let two = FormatOptions::default().apply(&FormatPatch::new().two_patterns("-->", "<--"));
    group.bench_function("two_patterns", |b| {
        b.iter(|| dotted(black_box("Loading modules"), black_box("boot:"), &two));
    });

    group.finish();
}

fn bench_prefix(c: &mut Criterion) {
    let style = PrefixStyle::default();
    let origin = Origin::named("worker", 4);
    c.bench_function("PrefixStyle::render", |b| {
        b.iter(|| style.render(black_box(Level::Warn), Some(&origin)));
    });
}

fn bench_log_to_memory(c: &mut Criterion) {
    let sink = MemorySink::new();
    let logger = Logger::builder().sink(sink.clone()).build();
    c.bench_function("Logger::info dotted", |b| {
        b.iter(|| {
            logger.info(Message::new(black_box("step")).origin("bench").dotted());
            sink.clear();
        });
    });
}

criterion_group!(benches, bench_dotted, bench_prefix, bench_log_to_memory);
criterion_main!(benches);
