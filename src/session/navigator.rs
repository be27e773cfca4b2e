// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{FloorGraph, FloorPlan, InvalidGraphError, NodeId, Route};
use crate::query::{shortest_path, RouteError};

use super::traversal::{SessionSnapshot, StepError, StepReport, TraversalSession};

/// The command boundary shared by the TUI and the MCP server.
///
/// Owns the floor graph and the one live [`TraversalSession`]. Every command that changes the
/// session bumps `rev`, so pollers can tell when to redraw.
#[derive(Debug, Clone)]
pub struct Navigator {
    graph: FloorGraph,
    session: TraversalSession,
    rev: u64,
}

impl Navigator {
    pub fn new(graph: FloorGraph) -> Self {
        Self { graph, session: TraversalSession::new(), rev: 0 }
    }

    pub fn from_plan(plan: &FloorPlan) -> Result<Self, InvalidGraphError> {
        FloorGraph::build(plan).map(Self::new)
    }

    pub fn builtin() -> Self {
        Self::from_plan(&FloorPlan::builtin()).expect("built-in floor plan has no self-loops")
    }

    pub fn graph(&self) -> &FloorGraph {
        &self.graph
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    /// Route lookup that leaves the session alone.
    pub fn route_between(&self, from: &NodeId, to: &NodeId) -> Result<Route, RouteError> {
        shortest_path(&self.graph, from, to)
    }

    pub fn start(&mut self, from: &NodeId, to: &NodeId) -> Result<SessionSnapshot, RouteError> {
        let result = self.session.start(&self.graph, from, to);
        self.bump_rev();
        match &result {
            Ok(snapshot) => tracing::info!(
                from = %from,
                to = %to,
                steps = snapshot.total_steps(),
                "tracking started"
            ),
            Err(err) => tracing::warn!(from = %from, to = %to, error = %err, "tracking not started"),
        }
        result
    }

    pub fn advance(&mut self) -> Result<StepReport, StepError> {
        let result = self.session.advance_step();
        match &result {
            Ok(report) => {
                self.bump_rev();
                tracing::debug!(
                    step = report.step,
                    total = report.total_steps,
                    node = %report.node_id,
                    "moved"
                );
                if let Some(route) = &report.completed_route {
                    tracing::info!(route = %route, "destination reached");
                }
            }
            Err(err) => tracing::debug!(error = %err, "step ignored"),
        }
        result
    }

    pub fn reset(&mut self) -> SessionSnapshot {
        self.session.reset();
        self.bump_rev();
        tracing::debug!("session reset");
        self.session.snapshot()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    fn bump_rev(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::Navigator;
    use crate::model::fixtures::{node, two_islands};
    use crate::query::RouteError;
    use crate::session::{StepError, TraversalState};

    #[test]
    fn builtin_navigator_walks_a_route_to_completion() {
        let mut navigator = Navigator::builtin();
        let snapshot = navigator.start(&node("201"), &node("227")).expect("start");
        assert_eq!(snapshot.state, TraversalState::Ready);

        let total = snapshot.total_steps();
        for expected_step in 1..=total {
            let report = navigator.advance().expect("advance");
            assert_eq!(report.step, expected_step);
            assert_eq!(report.is_final(), expected_step == total);
        }

        assert_eq!(navigator.snapshot().state, TraversalState::Completed);
        assert_eq!(navigator.advance(), Err(StepError::AlreadyCompleted));
    }

    #[test]
    fn rev_moves_on_every_session_change_but_not_on_ignored_steps() {
        let mut navigator = Navigator::new(two_islands());
        assert_eq!(navigator.rev(), 0);

        navigator.advance().unwrap_err();
        assert_eq!(navigator.rev(), 0);

        navigator.start(&node("a"), &node("c")).expect("start");
        assert_eq!(navigator.rev(), 1);

        navigator.advance().expect("advance");
        assert_eq!(navigator.rev(), 2);

        navigator.start(&node("a"), &node("x")).unwrap_err();
        assert_eq!(navigator.rev(), 3);
        assert_eq!(navigator.snapshot().state, TraversalState::Idle);

        navigator.reset();
        assert_eq!(navigator.rev(), 4);
    }

    #[test]
    fn route_between_does_not_touch_the_session() {
        let mut navigator = Navigator::new(two_islands());
        navigator.start(&node("a"), &node("b")).expect("start");
        let before = navigator.snapshot();

        let route = navigator.route_between(&node("a"), &node("c")).expect("route");
        assert_eq!(route.hops(), 2);
        assert_eq!(
            navigator.route_between(&node("a"), &node("y")),
            Err(RouteError::NoPath { from: node("a"), to: node("y") })
        );
        assert_eq!(navigator.snapshot(), before);
    }
}
