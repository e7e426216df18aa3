// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tapguard::guard::Guard;
use tapguard_dom::{Document, Element, NodeId};

const SEL: &str = "disable-double-submit";

/// A form holding `n` guarded controls, cycling through the three kinds.
fn gen_page(n: usize) -> (Document, Vec<NodeId>) {
    let mut doc = Document::new();
    let body = doc.insert(None, Element::new("body"));
    let form = doc.insert(Some(body), Element::new("form"));
    let mut controls = Vec::with_capacity(n);
    for i in 0..n {
        let name = format!("c{i}");
        let el = match i % 3 {
            0 => Element::new("input")
                .class(SEL)
                .attr("type", "submit")
                .attr("name", &name)
                .attr("value", "Save")
                .attr("data-disable-with", "Saving..."),
            1 => Element::new("button")
                .class("btn")
                .class(SEL)
                .attr("type", "button")
                .attr("data-disable-with", "Working...")
                .content("<i class=\"icon\"></i> Run"),
            _ => Element::new("a")
                .class(SEL)
                .attr("href", &format!("/item/{i}"))
                .content("Open"),
        };
        controls.push(doc.insert(Some(form), el));
    }
    (doc, controls)
}

/// A guarded control under `depth` wrappers, with an icon inside it.
fn gen_deep(depth: usize) -> (Document, NodeId, NodeId) {
    let mut doc = Document::new();
    let mut parent = doc.insert(None, Element::new("body"));
    for _ in 0..depth {
        parent = doc.insert(Some(parent), Element::new("div").class("wrap"));
    }
    let control = doc.insert(
        Some(parent),
        Element::new("div").class(SEL).content("Go"),
    );
    let icon = doc.insert(Some(control), Element::new("i"));
    (doc, control, icon)
}

fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk");
    for &n in &[8usize, 64, 256] {
        let (doc, _) = gen_page(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("disable_enable_all_n{n}"), |b| {
            b.iter_batched(
                || Guard::new(doc.clone()),
                |mut guard| {
                    guard.disable_all();
                    guard.enable_all();
                    black_box(guard.tracked());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");
    for &n in &[8usize, 64, 256] {
        let (doc, controls) = gen_page(n);
        let submit = controls[0];
        let styled = controls[1.min(n - 1)];
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("submit_n{n}"), |b| {
            b.iter_batched(
                || Guard::new(doc.clone()),
                |mut guard| {
                    black_box(guard.click(submit));
                    black_box(guard.advance(3000));
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("click_n{n}"), |b| {
            b.iter_batched(
                || Guard::new(doc.clone()),
                |mut guard| {
                    black_box(guard.click(styled));
                    black_box(guard.advance(3000));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for &depth in &[4usize, 32, 128] {
        let (doc, control, icon) = gen_deep(depth);
        group.bench_function(format!("descendant_click_depth{depth}"), |b| {
            let mut guard = Guard::new(doc.clone());
            b.iter(|| black_box(guard.handle_click(black_box(icon))));
        });
        group.bench_function(format!("target_click_depth{depth}"), |b| {
            b.iter_batched(
                || Guard::new(doc.clone()),
                |mut guard| black_box(guard.handle_click(control)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bulk, bench_cycle, bench_dispatch);
criterion_main!(benches);
