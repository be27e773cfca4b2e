// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::floor_plan::FloorPlan;
use super::graph::FloorGraph;
use super::ids::NodeId;

pub(crate) fn node(label: &str) -> NodeId {
    NodeId::new(label).expect("node id")
}

pub(crate) fn nodes(labels: &[&str]) -> Vec<NodeId> {
    labels.iter().map(|label| node(label)).collect()
}

pub(crate) fn plan_from(table: &[(&str, &[&str])]) -> FloorPlan {
    FloorPlan::from_labels("Fixture", table).expect("fixture labels")
}

pub(crate) fn graph_from(table: &[(&str, &[&str])]) -> FloorGraph {
    FloorGraph::build(&plan_from(table)).expect("fixture graph")
}

/// `a - b - c - d - a`: two equally short routes from `a` to `c`.
pub(crate) fn square() -> FloorGraph {
    graph_from(&[("a", &["b", "d"]), ("b", &["c"]), ("c", &["d"])])
}

/// `a - b - c` on one side and `x - y` on the other.
pub(crate) fn two_islands() -> FloorGraph {
    graph_from(&[("a", &["b"]), ("b", &["c"]), ("x", &["y"])])
}

/// A small corridor with a shortcut through a staircase.
///
/// ```text
/// 101 - 102 - 103 - 104
///  |                 |
///  +---- stairs1 ----+
/// ```
pub(crate) fn corridor_with_stairs() -> FloorGraph {
    graph_from(&[
        ("101", &["102", "stairs1"]),
        ("102", &["103"]),
        ("103", &["104"]),
        ("104", &["stairs1"]),
    ])
}
