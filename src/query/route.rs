// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use thiserror::Error;

use crate::model::{FloorGraph, NodeId, Route, UnknownNodeError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown node {node_id}")]
    UnknownNode { node_id: NodeId },
    #[error("no path from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },
}

impl From<UnknownNodeError> for RouteError {
    fn from(value: UnknownNodeError) -> Self {
        Self::UnknownNode { node_id: value.node_id }
    }
}

fn ensure_known(graph: &FloorGraph, node_id: &NodeId) -> Result<(), RouteError> {
    if graph.has_node(node_id) {
        Ok(())
    } else {
        Err(RouteError::UnknownNode { node_id: node_id.clone() })
    }
}

/// Fewest-hops route from `from` to `to`, both inclusive.
///
/// Breadth-first search that expands neighbors in lexicographic label order and keeps the first
/// predecessor that discovers a node. When several routes share the minimal hop count, this picks
/// the one whose node sequence sorts first (`a-b-c` over `a-d-c` on a square).
pub fn shortest_path(graph: &FloorGraph, from: &NodeId, to: &NodeId) -> Result<Route, RouteError> {
    ensure_known(graph, from)?;
    ensure_known(graph, to)?;

    if from == to {
        return Ok(Route::single(from.clone()));
    }

    let mut predecessor: BTreeMap<&NodeId, &NodeId> = BTreeMap::new();
    let mut seen: BTreeSet<&NodeId> = BTreeSet::new();
    let mut queue: VecDeque<&NodeId> = VecDeque::new();

    seen.insert(from);
    queue.push_back(from);

    while let Some(node_id) = queue.pop_front() {
        if node_id == to {
            return Ok(walk_back(&predecessor, from, to));
        }

        for next_id in graph.neighbors(node_id)? {
            if seen.insert(next_id) {
                predecessor.insert(next_id, node_id);
                queue.push_back(next_id);
            }
        }
    }

    Err(RouteError::NoPath { from: from.clone(), to: to.clone() })
}

fn walk_back<'g>(
    predecessor: &BTreeMap<&'g NodeId, &'g NodeId>,
    from: &NodeId,
    to: &'g NodeId,
) -> Route {
    let mut nodes = vec![to.clone()];
    let mut cursor = to;
    while cursor != from {
        // Every node reached by the search other than `from` has a predecessor.
        let Some(prev) = predecessor.get(cursor) else {
            break;
        };
        nodes.push((*prev).clone());
        cursor = *prev;
    }
    nodes.reverse();
    Route::new(nodes).unwrap_or_else(|| Route::single(from.clone()))
}

/// Hop distance from `from` to every node reachable from it (including `from` at 0).
pub fn hop_distances(
    graph: &FloorGraph,
    from: &NodeId,
) -> Result<BTreeMap<NodeId, usize>, RouteError> {
    ensure_known(graph, from)?;

    let mut dist: BTreeMap<NodeId, usize> = BTreeMap::new();
    let mut queue: VecDeque<(&NodeId, usize)> = VecDeque::new();
    dist.insert(from.clone(), 0);
    queue.push_back((from, 0));

    while let Some((node_id, distance)) = queue.pop_front() {
        let next_distance = distance.saturating_add(1);
        for next_id in graph.neighbors(node_id)? {
            if dist.contains_key(next_id) {
                continue;
            }
            dist.insert(next_id.clone(), next_distance);
            queue.push_back((next_id, next_distance));
        }
    }

    Ok(dist)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rstest::rstest;

    use super::{hop_distances, shortest_path, RouteError};
    use crate::model::fixtures::{corridor_with_stairs, graph_from, node, square, two_islands};
    use crate::model::{FloorGraph, FloorPlan, NodeId};

    fn labels(route: &crate::model::Route) -> Vec<&str> {
        route.nodes().iter().map(NodeId::as_str).collect()
    }

    /// Every simple path between two nodes, by depth-first enumeration.
    fn all_simple_paths(graph: &FloorGraph, from: &NodeId, to: &NodeId) -> Vec<Vec<NodeId>> {
        fn walk(
            graph: &FloorGraph,
            to: &NodeId,
            path: &mut Vec<NodeId>,
            on_path: &mut BTreeSet<NodeId>,
            out: &mut Vec<Vec<NodeId>>,
        ) {
            let last = path.last().expect("non-empty path").clone();
            if &last == to {
                out.push(path.clone());
                return;
            }
            for next in graph.neighbors(&last).expect("known node") {
                if on_path.insert(next.clone()) {
                    path.push(next.clone());
                    walk(graph, to, path, on_path, out);
                    path.pop();
                    on_path.remove(next);
                }
            }
        }

        let mut out = Vec::new();
        let mut path = vec![from.clone()];
        let mut on_path = BTreeSet::from([from.clone()]);
        walk(graph, to, &mut path, &mut on_path, &mut out);
        out
    }

    #[test]
    fn same_source_and_destination_is_a_single_node_route() {
        let graph = square();
        for node_id in graph.nodes() {
            let route = shortest_path(&graph, node_id, node_id).expect("route");
            assert_eq!(route.nodes(), std::slice::from_ref(node_id));
        }
    }

    #[test]
    fn square_tie_break_prefers_lexicographically_first_route() {
        let graph = square();
        let route = shortest_path(&graph, &node("a"), &node("c")).expect("route");
        assert_eq!(labels(&route), vec!["a", "b", "c"]);

        for _ in 0..10 {
            assert_eq!(shortest_path(&graph, &node("a"), &node("c")).expect("route"), route);
        }

        let back = shortest_path(&graph, &node("c"), &node("a")).expect("route");
        assert_eq!(labels(&back), vec!["c", "b", "a"]);
    }

    #[test]
    fn stairs_shortcut_beats_the_corridor() {
        let graph = corridor_with_stairs();
        let route = shortest_path(&graph, &node("101"), &node("104")).expect("route");
        assert_eq!(labels(&route), vec!["101", "stairs1", "104"]);
    }

    #[test]
    fn disconnected_components_have_no_path() {
        let graph = two_islands();
        let err = shortest_path(&graph, &node("a"), &node("y")).unwrap_err();
        assert_eq!(err, RouteError::NoPath { from: node("a"), to: node("y") });
    }

    #[rstest]
    #[case("nope", "a", "nope")]
    #[case("a", "nope", "nope")]
    #[case("nope", "also-nope", "nope")]
    fn unknown_endpoints_are_reported(#[case] from: &str, #[case] to: &str, #[case] bad: &str) {
        let graph = square();
        let err = shortest_path(&graph, &node(from), &node(to)).unwrap_err();
        assert_eq!(err, RouteError::UnknownNode { node_id: node(bad) });
    }

    #[test]
    fn routes_match_exhaustive_search_on_small_graphs() {
        for graph in [square(), corridor_with_stairs(), two_islands(), ladder()] {
            for from in graph.nodes() {
                for to in graph.nodes() {
                    let candidates = all_simple_paths(&graph, from, to);
                    match shortest_path(&graph, from, to) {
                        Ok(route) => {
                            let best = candidates.iter().map(Vec::len).min().expect("a path");
                            assert_eq!(route.len(), best, "{from} -> {to}");

                            let smallest = candidates
                                .iter()
                                .filter(|path| path.len() == best)
                                .min()
                                .expect("a shortest path");
                            assert_eq!(route.nodes(), smallest.as_slice(), "{from} -> {to}");
                        }
                        Err(RouteError::NoPath { .. }) => {
                            assert!(candidates.is_empty(), "{from} -> {to}")
                        }
                        Err(other) => panic!("unexpected error {other}"),
                    }
                }
            }
        }
    }

    fn ladder() -> FloorGraph {
        graph_from(&[
            ("a1", &["a2", "b1"]),
            ("a2", &["a3", "b2"]),
            ("a3", &["b3"]),
            ("b1", &["b2"]),
            ("b2", &["b3"]),
        ])
    }

    #[test]
    fn builtin_routes_are_valid_and_as_short_as_bfs_distance() {
        let graph = FloorGraph::build(&FloorPlan::builtin()).expect("builtin graph");
        for from in graph.nodes() {
            let distances = hop_distances(&graph, from).expect("distances");
            for to in graph.nodes() {
                let route = shortest_path(&graph, from, to).expect("builtin floor is connected");
                assert_eq!(route.source(), from);
                assert_eq!(route.destination(), to);
                assert_eq!(Some(&route.hops()), distances.get(to), "{from} -> {to}");
                assert!(route.legs().all(|(a, b)| graph.are_adjacent(a, b)), "{route}");

                let unique = route.nodes().iter().collect::<BTreeSet<_>>();
                assert_eq!(unique.len(), route.len(), "{route} repeats a node");
            }
        }
    }

    #[test]
    fn builtin_route_across_the_floor() {
        let graph = FloorGraph::build(&FloorPlan::builtin()).expect("builtin graph");
        let route = shortest_path(&graph, &node("201"), &node("209")).expect("route");
        assert_eq!(route.hops(), 6);
        assert_eq!(labels(&route), vec!["201", "212", "226", "211", "210", "stairs7", "209"]);
    }

    #[test]
    fn hop_distances_only_cover_the_reachable_component() {
        let graph = two_islands();
        let distances = hop_distances(&graph, &node("a")).expect("distances");
        let flat = distances.iter().map(|(k, v)| (k.as_str(), *v)).collect::<Vec<_>>();
        assert_eq!(flat, vec![("a", 0), ("b", 1), ("c", 2)]);
    }
}
