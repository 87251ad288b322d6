// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-MindMapify-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of MindMapify and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use mindmapify::format::mermaid::{parse_markup, render_markup, serialize};
use mindmapify::model::{ConceptChild, ConceptNode, Hierarchy, ViewSelector};
use mindmapify::render::TreeEngine;

fn hierarchy(branches: usize, children: usize, leaves: usize) -> Hierarchy {
    let nodes = (0..branches)
        .map(|i| {
            let kids = (0..children)
                .map(|j| {
                    ConceptChild::new(
                        format!("Concept {i}.{j} with [brackets] & \"quotes\""),
                        (0..leaves).map(|k| format!("Leaf {i}.{j}.{k}")),
                    )
                })
                .collect();
            ConceptNode::new(format!("Branch {i}"), kids)
        })
        .collect();
    Hierarchy::new("Resume", nodes)
}

// Group names (`mindmap.serialize`, `mindmap.render`) and case ids stay stable so results remain
// comparable over time.
fn benches_serialize(c: &mut Criterion) {
    let cases = [
        ("small", hierarchy(2, 3, 2)),
        ("medium", hierarchy(8, 6, 4)),
        ("wide", hierarchy(64, 4, 1)),
        ("deep_leaves", hierarchy(4, 4, 32)),
    ];

    {
        let mut group = c.benchmark_group("mindmap.serialize");

        for (case_id, hierarchy) in &cases {
            let description = serialize(hierarchy, &ViewSelector::All);
            group.throughput(Throughput::Elements(description.len() as u64));
            group.bench_function(*case_id, |b| {
                b.iter(|| {
                    let description = serialize(black_box(hierarchy), &ViewSelector::All);
                    black_box(render_markup(&description).len())
                })
            });
        }

        let (_, medium) = &cases[1];
        let selector = ViewSelector::branch("Branch 5");
        group.bench_function("medium_single_branch", |b| {
            b.iter(|| black_box(serialize(black_box(medium), &selector).len()))
        });

        group.finish();
    }

    {
        let mut group = c.benchmark_group("mindmap.render");
        let engine = TreeEngine::default();

        for (case_id, hierarchy) in &cases {
            let markup = render_markup(&serialize(hierarchy, &ViewSelector::All));
            group.throughput(Throughput::Bytes(markup.len() as u64));
            group.bench_function(format!("parse/{case_id}"), |b| {
                b.iter(|| black_box(parse_markup(black_box(&markup)).expect("parse").nodes().len()))
            });
            group.bench_function(format!("tree/{case_id}"), |b| {
                b.iter(|| black_box(engine.render_sync(black_box(&markup)).expect("render").height()))
            });
        }

        group.finish();
    }
}

criterion_group!(benches, benches_serialize);
criterion_main!(benches);
