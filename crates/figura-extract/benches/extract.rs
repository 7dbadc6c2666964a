//! Extraction benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figura_core::SelectionSnapshot;
use figura_extract::{darken, Extractor};

const BUTTON_SET: &str = r#"{
    "nodes": [{
        "id": "1:0",
        "name": "Button",
        "type": "COMPONENT_SET",
        "children": [
            {
                "id": "1:1", "name": "Primary Button, State=Default", "type": "COMPONENT",
                "width": 120, "height": 40, "cornerRadius": 8, "strokeWeight": 1,
                "paddingLeft": 16, "paddingRight": 16, "paddingTop": 8, "paddingBottom": 8,
                "fills": [{ "type": "SOLID", "color": { "r": 0.1, "g": 0.4, "b": 0.9 } }],
                "strokes": [],
                "effects": [{ "type": "DROP_SHADOW", "color": { "r": 0, "g": 0, "b": 0, "a": 0.2 }, "offset": { "x": 0, "y": 2 }, "radius": 4 }]
            },
            {
                "id": "1:2", "name": "Primary Button, State=Hover", "type": "COMPONENT",
                "width": 120, "height": 40,
                "fills": [{ "type": "SOLID", "color": { "r": 0.05, "g": 0.3, "b": 0.8 } }]
            },
            {
                "id": "1:3", "name": "Primary Button, State=Disabled", "type": "COMPONENT",
                "width": 120, "height": 40,
                "fills": [{ "type": "SOLID", "color": { "r": 0.8, "g": 0.8, "b": 0.8 } }]
            }
        ]
    }],
    "selection": ["1:1"]
}"#;

fn extract_button_set(c: &mut Criterion) {
    let (graph, selection) = SelectionSnapshot::from_json(BUTTON_SET)
        .and_then(SelectionSnapshot::into_scene)
        .expect("benchmark snapshot is valid");
    let extractor = Extractor::new();

    c.bench_function("extract_button_set", |b| {
        b.iter(|| extractor.extract_selection(black_box(&graph), black_box(&selection)))
    });
}

fn darken_color(c: &mut Criterion) {
    c.bench_function("darken_color", |b| {
        b.iter(|| darken(black_box("rgba(26, 102, 230, 1)"), black_box(0.1)))
    });
}

criterion_group!(benches, extract_button_set, darken_color);
criterion_main!(benches);
