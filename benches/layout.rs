use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scatter_layout::{
    JitterMode, LayoutConfig, LogEvent, LogSink, Logger, LoggingResult, ScatterLayout,
    ViewportConfig,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

fn sparse_desktop(c: &mut Criterion) {
    let layout = ScatterLayout::default();
    let viewport = ViewportConfig::new(1920, 1080);
    c.bench_function("sparse_desktop_12", |b| {
        b.iter(|| layout.generate(black_box(12), black_box(3), &viewport));
    });
}

fn sparse_desktop_logged(c: &mut Criterion) {
    let layout = ScatterLayout::default().with_logger(Logger::new(NullSink));
    let viewport = ViewportConfig::new(1920, 1080);
    c.bench_function("sparse_desktop_12_logged", |b| {
        b.iter(|| layout.generate(black_box(12), black_box(3), &viewport));
    });
}

fn dense_laptop(c: &mut Criterion) {
    let layout = ScatterLayout::new(LayoutConfig {
        jitter: JitterMode::Disabled,
        ..LayoutConfig::default()
    });
    let viewport = ViewportConfig::new(1280, 720);
    c.bench_function("dense_laptop_80", |b| {
        b.iter(|| layout.generate(black_box(80), black_box(7), &viewport));
    });
}

fn overcrowded_phone(c: &mut Criterion) {
    let layout = ScatterLayout::default();
    let viewport = ViewportConfig::new(320, 480);
    c.bench_function("overcrowded_phone_200", |b| {
        b.iter(|| layout.generate(black_box(200), black_box(0), &viewport));
    });
}

criterion_group!(
    benches,
    sparse_desktop,
    sparse_desktop_logged,
    dense_laptop,
    overcrowded_phone
);
criterion_main!(benches);
