// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::ids::NodeId;

/// An immutable, non-empty walk from a source node to a destination node.
///
/// Routes produced by [`crate::query::route::shortest_path`] never repeat a node and connect
/// every consecutive pair by an edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    nodes: Vec<NodeId>,
}

impl Route {
    /// Returns `None` for an empty node list.
    pub fn new(nodes: Vec<NodeId>) -> Option<Self> {
        if nodes.is_empty() {
            return None;
        }
        Some(Self { nodes })
    }

    pub fn single(node_id: NodeId) -> Self {
        Self { nodes: vec![node_id] }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn source(&self) -> &NodeId {
        &self.nodes[0]
    }

    pub fn destination(&self) -> &NodeId {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of nodes, which is also the number of steps a traversal takes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn contains(&self, node_id: &NodeId) -> bool {
        self.nodes.contains(node_id)
    }

    /// Consecutive node pairs, i.e. the edges walked.
    pub fn legs(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

/// Formats as `[201, 213, 227]`.
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, node_id) in self.nodes.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(node_id.as_str())?;
        }
        f.write_str("]")
    }
}
