// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_select::keyboard::{NavState, transition};
use understory_select::layout::SelectLayout;
use understory_select::props::SelectProps;
use understory_select::root::{SelectEvent, SelectRoot};
use understory_select::types::{Key, KeyEvent, OptionRecord};

const ROW_H: f64 = 24.0;

fn gen_options(n: usize) -> Vec<OptionRecord> {
    (0..n)
        .map(|i| OptionRecord::new(format!("v{i}"), format!("Option {i}")))
        .collect()
}

fn gen_layout(n: usize) -> SelectLayout {
    let top = 44.0;
    SelectLayout {
        trigger: Rect::new(0.0, 0.0, 240.0, 40.0),
        content: Some(Rect::new(0.0, top, 240.0, top + n as f64 * ROW_H)),
        rows: (0..n)
            .map(|i| {
                let y0 = top + i as f64 * ROW_H;
                Rect::new(0.0, y0, 240.0, y0 + ROW_H)
            })
            .collect(),
    }
}

fn bench_keyboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyboard");
    let opts = gen_options(1_000);
    group.bench_function("transition_arrow_down", |b| {
        b.iter(|| {
            black_box(transition(
                NavState::Open {
                    highlighted: Some(black_box(500)),
                },
                Key::ArrowDown,
                &opts,
                false,
            ))
        });
    });
    group.bench_function("sweep_arrow_down_n1000", |b| {
        let mut select = SelectRoot::new(SelectProps::new().options(gen_options(1_000))).unwrap();
        b.iter(|| {
            select.dispatch(SelectEvent::TriggerKey(KeyEvent::new(Key::ArrowDown)));
            for _ in 0..1_000 {
                select.dispatch(SelectEvent::TriggerKey(KeyEvent::new(Key::ArrowDown)));
            }
            select.dispatch(SelectEvent::TriggerKey(KeyEvent::new(Key::Escape)));
        });
    });
    group.finish();
}

fn bench_pointer(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer");
    for &n in &[10_usize, 100, 1_000] {
        group.bench_function(format!("move_across_rows_n{}", n), |b| {
            let mut select = SelectRoot::new(SelectProps::new().options(gen_options(n))).unwrap();
            select.set_layout(gen_layout(n));
            select.dispatch(SelectEvent::TriggerClick);
            let mut i = 0_usize;
            b.iter(|| {
                let y = 44.0 + (i % n) as f64 * ROW_H + ROW_H / 2.0;
                i += 1;
                black_box(select.dispatch(SelectEvent::PointerMove(Point::new(10.0, y))))
            });
        });
        group.bench_function(format!("pointer_down_inside_n{}", n), |b| {
            let mut select = SelectRoot::new(SelectProps::new().options(gen_options(n))).unwrap();
            select.set_layout(gen_layout(n));
            select.dispatch(SelectEvent::TriggerClick);
            b.iter(|| black_box(select.dispatch(SelectEvent::PointerDown(Point::new(10.0, 50.0)))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_keyboard, bench_pointer);
criterion_main!(benches);
