// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use super::floor_plan::FloorPlan;
use super::ids::{NodeId, NodeKind};

/// Undirected, unweighted, simple graph of a floor.
///
/// Built once from a [`FloorPlan`] and never mutated afterwards. Neighbor sets are kept sorted so
/// every traversal over the graph is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorGraph {
    name: String,
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGraphError {
    #[error("node {node_id} lists itself as a neighbor")]
    SelfLoop { node_id: NodeId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node {node_id}")]
pub struct UnknownNodeError {
    pub node_id: NodeId,
}

impl FloorGraph {
    /// Builds the graph, adding one undirected edge per listed (node, neighbor) pair.
    ///
    /// Links listed from both sides collapse into a single edge. A neighbor that has no entry of
    /// its own becomes a node anyway; its only edges are the ones other entries give it.
    pub fn build(plan: &FloorPlan) -> Result<Self, InvalidGraphError> {
        let mut adjacency: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();

        for (node_id, _) in plan.entries() {
            adjacency.entry(node_id.clone()).or_default();
        }

        for (node_id, neighbors) in plan.entries() {
            for neighbor_id in neighbors {
                if neighbor_id == node_id {
                    return Err(InvalidGraphError::SelfLoop { node_id: node_id.clone() });
                }
                if !adjacency.contains_key(neighbor_id) {
                    tracing::debug!(node = %neighbor_id, referenced_by = %node_id, "implicit node");
                }
                adjacency.entry(node_id.clone()).or_default().insert(neighbor_id.clone());
                adjacency.entry(neighbor_id.clone()).or_default().insert(node_id.clone());
            }
        }

        let graph = Self { name: plan.name().to_owned(), adjacency };
        tracing::debug!(
            name = graph.name(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built floor graph"
        );
        Ok(graph)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_node(&self, node_id: &NodeId) -> bool {
        self.adjacency.contains_key(node_id)
    }

    pub fn neighbors(&self, node_id: &NodeId) -> Result<&BTreeSet<NodeId>, UnknownNodeError> {
        self.adjacency.get(node_id).ok_or_else(|| UnknownNodeError { node_id: node_id.clone() })
    }

    /// All nodes in lexicographic order of their labels.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.adjacency.keys()
    }

    pub fn all_nodes(&self) -> Vec<NodeId> {
        self.nodes().cloned().collect()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Every undirected edge once, as `(smaller, larger)`, sorted.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.adjacency.iter().flat_map(|(node_id, neighbors)| {
            neighbors.iter().filter(move |neighbor_id| node_id < *neighbor_id).map(move |n| (node_id, n))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn degree(&self, node_id: &NodeId) -> Result<usize, UnknownNodeError> {
        self.neighbors(node_id).map(BTreeSet::len)
    }

    pub fn kind(&self, node_id: &NodeId) -> Result<NodeKind, UnknownNodeError> {
        if self.has_node(node_id) {
            Ok(NodeKind::of(node_id))
        } else {
            Err(UnknownNodeError { node_id: node_id.clone() })
        }
    }

    pub fn are_adjacent(&self, a: &NodeId, b: &NodeId) -> bool {
        self.adjacency.get(a).is_some_and(|neighbors| neighbors.contains(b))
    }
}
