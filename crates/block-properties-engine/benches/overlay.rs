use block_properties_engine::{
    DisplayMode, InlineStyle, Overlay, Span, ViewState, build_decorations, query_at,
};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_overlay(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay");

    let content = common::generate_note(20_000);
    let style = InlineStyle::default();

    // A 60-line window in the middle of a large note.
    let mut view = ViewState::new(&content);
    let ranges = common::viewport_ranges(&content, 60);
    let (start, end) = ranges[ranges.len() / 2];
    view.set_visible_ranges(vec![Span::new(start, end)]).unwrap();

    group.bench_function("rebuild_visible_badge", |b| {
        b.iter(|| {
            let set = build_decorations(std::hint::black_box(&view), DisplayMode::Badge, &style);
            std::hint::black_box(set);
        });
    });

    group.bench_function("keystroke_then_rebuild", |b| {
        let mut view = view.clone();
        let mut overlay = Overlay::attach(&view, DisplayMode::Inline, style.clone());
        b.iter(|| {
            let update = view.insert(start, "x").unwrap();
            overlay.update(&view, &update);
            let update = view.replace(Span::new(start, start + 1), "").unwrap();
            overlay.update(&view, &update);
        });
    });

    group.bench_function("hover_query", |b| {
        let pos = start + (end - start) / 2;
        b.iter(|| std::hint::black_box(query_at(&view, std::hint::black_box(pos))));
    });

    group.finish();
}

criterion_group!(benches, bench_overlay);
criterion_main!(benches);
