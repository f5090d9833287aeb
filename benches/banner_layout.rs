// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_banners::design::DesignConfig;
use iced_banners::ui::notifications::layout::{self, GlyphMetrics, LayoutRequest};
use iced_banners::ui::notifications::{NotificationSpec, Surface};
use std::hint::black_box;

const LOREM: &str = "Lorem ipsum dolor sit amet, consetetur sadipscing elitr, sed diam \
                     nonumy eirmod tempor invidunt ut labore et dolore magna aliquyam erat, \
                     sed diam voluptua. At vero eos et accusam et justo duo dolores et ea rebum.";

fn banner_layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("banner_layout");

    let design = DesignConfig::bundled();
    let surface = Surface::new(Size::new(375.0, 667.0));
    let measure = GlyphMetrics::default();

    let short = NotificationSpec::success("Saved");
    let long = NotificationSpec::warning("Long Text")
        .with_subtitle(LOREM)
        .with_button("Update", None);

    for (name, spec) in [("title_only", &short), ("long_subtitle_with_button", &long)] {
        let style = design.style(spec.kind());
        let icon = layout::resolve_icon(spec, style);

        group.bench_function(name, |b| {
            b.iter(|| {
                let request = LayoutRequest::new(spec, icon.as_ref(), style, &surface);
                black_box(layout::compute(black_box(&request), &measure))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, banner_layout_benchmark);
criterion_main!(benches);
