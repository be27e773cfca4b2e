// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use waypoint::model::{FloorGraph, FloorPlan, NodeId};
use waypoint::query::shortest_path;
use waypoint::session::Navigator;

fn node(label: String) -> NodeId {
    NodeId::new(label).expect("node id")
}

/// `side x side` rooms, each connected to its right and lower neighbour.
fn grid_plan(side: usize) -> FloorPlan {
    let cell = |row: usize, col: usize| node(format!("r{row:03}-{col:03}"));
    let mut entries = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let mut neighbors = Vec::with_capacity(2);
            if col + 1 < side {
                neighbors.push(cell(row, col + 1));
            }
            if row + 1 < side {
                neighbors.push(cell(row + 1, col));
            }
            entries.push((cell(row, col), neighbors));
        }
    }
    FloorPlan::new(format!("grid {side}x{side}"), entries)
}

// Benchmark identity (keep stable):
// - Group names in this file: `route.build`, `route.shortest_path`, `route.walk`
// - Case IDs must remain stable across refactors so results stay comparable over time.
fn benches_route(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("route.build");
        for (case_id, plan) in [("builtin", FloorPlan::builtin()), ("grid_40", grid_plan(40))] {
            group.throughput(Throughput::Elements(plan.entries().len() as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let graph = FloorGraph::build(black_box(&plan)).expect("graph");
                    black_box(graph.edge_count())
                })
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("route.shortest_path");

        let builtin = FloorGraph::build(&FloorPlan::builtin()).expect("graph");
        let nodes = builtin.all_nodes();
        group.throughput(Throughput::Elements((nodes.len() * nodes.len()) as u64));
        group.bench_function("builtin_all_pairs", |b| {
            b.iter(|| {
                let mut hops = 0usize;
                for from in &nodes {
                    for to in &nodes {
                        let route = shortest_path(black_box(&builtin), from, to).expect("route");
                        hops = hops.wrapping_add(route.hops());
                    }
                }
                black_box(hops)
            })
        });

        let grid = FloorGraph::build(&grid_plan(40)).expect("graph");
        let corner_a = node("r000-000".to_owned());
        let corner_b = node("r039-039".to_owned());
        group.throughput(Throughput::Elements(grid.node_count() as u64));
        group.bench_function("grid_40_corner_to_corner", |b| {
            b.iter(|| {
                let route =
                    shortest_path(black_box(&grid), &corner_a, &corner_b).expect("route");
                black_box(route.hops())
            })
        });

        group.finish();
    }

    {
        let mut group = c.benchmark_group("route.walk");
        let from = node("201".to_owned());
        let to = node("209".to_owned());
        group.bench_function("builtin_start_and_walk", |b| {
            let mut navigator = Navigator::builtin();
            b.iter(|| {
                navigator.start(black_box(&from), black_box(&to)).expect("start");
                while navigator.advance().is_ok() {}
                black_box(navigator.rev())
            })
        });
        group.finish();
    }
}

criterion_group!(benches, benches_route);
criterion_main!(benches);
