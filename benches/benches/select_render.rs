// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_select::props::SelectProps;
use understory_select::root::{SelectEvent, SelectRoot};
use understory_select::types::OptionRecord;
use understory_select::value::SelectValue;

fn gen_options(n: usize) -> Vec<OptionRecord> {
    (0..n)
        .map(|i| OptionRecord::new(format!("v{i}"), format!("Option {i}")).with_disabled(i % 7 == 3))
        .collect()
}

fn open_select(n: usize) -> SelectRoot {
    let mut select = SelectRoot::new(
        SelectProps::new()
            .options(gen_options(n))
            .value(SelectValue::uncontrolled(Some(format!("v{}", n / 2)))),
    )
    .unwrap();
    select.dispatch(SelectEvent::TriggerClick);
    select
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for &n in &[10_usize, 100, 1_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("open_n{}", n), |b| {
            let select = open_select(n);
            b.iter(|| black_box(select.render().unwrap()));
        });
        group.bench_function(format!("closed_n{}", n), |b| {
            let mut select = open_select(n);
            select.dispatch(SelectEvent::TriggerClick);
            b.iter(|| black_box(select.render().unwrap()));
        });
    }
    group.finish();
}

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    for &n in &[10_usize, 100, 1_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("new_n{}", n), |b| {
            b.iter_batched(
                || SelectProps::new().options(gen_options(n)),
                |props| black_box(SelectRoot::new(props).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render, bench_construct);
criterion_main!(benches);
