// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use thiserror::Error;

use crate::model::{FloorGraph, NodeId, Route};
use crate::query::{shortest_path, RouteError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalState {
    /// No route.
    Idle,
    /// Route computed, nothing walked yet.
    Ready,
    InProgress,
    /// Every node of the route has been visited.
    Completed,
}

impl TraversalState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Ready => "ready",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

/// Advancing is only meaningful while part of a route is still unwalked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("not started")]
    NotStarted,
    #[error("already completed")]
    AlreadyCompleted,
}

/// What one `advance_step` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// 1-indexed.
    pub step: usize,
    pub total_steps: usize,
    pub node_id: NodeId,
    /// Set on the step that reaches the destination.
    pub completed_route: Option<Route>,
}

impl StepReport {
    pub fn is_final(&self) -> bool {
        self.completed_route.is_some()
    }
}

/// How a node relates to the current traversal, for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeMark {
    Off,
    OnRoute,
    Visited,
    Current,
    Destination,
}

/// Read-only copy of a session, handed to renderers and adapters after every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: TraversalState,
    pub route: Option<Route>,
    pub history: Vec<NodeId>,
    pub current_index: usize,
    pub destination: Option<NodeId>,
}

impl SessionSnapshot {
    pub fn idle() -> Self {
        Self {
            state: TraversalState::Idle,
            route: None,
            history: Vec::new(),
            current_index: 0,
            destination: None,
        }
    }

    pub fn path(&self) -> &[NodeId] {
        self.route.as_ref().map(Route::nodes).unwrap_or(&[])
    }

    pub fn total_steps(&self) -> usize {
        self.route.as_ref().map(Route::len).unwrap_or(0)
    }

    /// The node walked most recently.
    pub fn current(&self) -> Option<&NodeId> {
        self.history.last()
    }

    /// Walked nodes other than the current one.
    pub fn visited(&self) -> &[NodeId] {
        match self.history.split_last() {
            Some((_, visited)) => visited,
            None => &[],
        }
    }

    /// Destination wins over current, current over visited, visited over merely being on route.
    pub fn mark(&self, node_id: &NodeId) -> NodeMark {
        if self.destination.as_ref() == Some(node_id) {
            NodeMark::Destination
        } else if self.current() == Some(node_id) {
            NodeMark::Current
        } else if self.visited().contains(node_id) {
            NodeMark::Visited
        } else if self.route.as_ref().is_some_and(|route| route.contains(node_id)) {
            NodeMark::OnRoute
        } else {
            NodeMark::Off
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Progress {
    route: Route,
    // Always a prefix of `route`; its length is the cursor.
    history: Vec<NodeId>,
}

/// Replays one route a node at a time.
///
/// `Idle -> Ready -> InProgress -> Completed`, with `start`/`begin` replacing whatever was there
/// and `reset` going back to `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalSession {
    progress: Option<Progress>,
}

impl TraversalSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the route and replaces the session with a fresh `Ready` one.
    ///
    /// On failure the session is `Idle` afterwards, whatever it was before.
    pub fn start(
        &mut self,
        graph: &FloorGraph,
        from: &NodeId,
        to: &NodeId,
    ) -> Result<SessionSnapshot, RouteError> {
        match shortest_path(graph, from, to) {
            Ok(route) => Ok(self.begin(route)),
            Err(err) => {
                self.progress = None;
                Err(err)
            }
        }
    }

    /// Starts walking a route that was computed elsewhere.
    pub fn begin(&mut self, route: Route) -> SessionSnapshot {
        let history = Vec::with_capacity(route.len());
        self.progress = Some(Progress { route, history });
        self.snapshot()
    }

    pub fn advance_step(&mut self) -> Result<StepReport, StepError> {
        let progress = self.progress.as_mut().ok_or(StepError::NotStarted)?;

        let index = progress.history.len();
        let node_id =
            progress.route.nodes().get(index).cloned().ok_or(StepError::AlreadyCompleted)?;
        progress.history.push(node_id.clone());

        let step = index + 1;
        let total_steps = progress.route.len();
        let completed_route = (step == total_steps).then(|| progress.route.clone());

        Ok(StepReport { step, total_steps, node_id, completed_route })
    }

    pub fn reset(&mut self) {
        self.progress = None;
    }

    pub fn state(&self) -> TraversalState {
        match &self.progress {
            None => TraversalState::Idle,
            Some(progress) if progress.history.is_empty() => TraversalState::Ready,
            Some(progress) if progress.history.len() < progress.route.len() => {
                TraversalState::InProgress
            }
            Some(_) => TraversalState::Completed,
        }
    }

    pub fn history(&self) -> &[NodeId] {
        self.progress.as_ref().map(|progress| progress.history.as_slice()).unwrap_or(&[])
    }

    pub fn current_index(&self) -> usize {
        self.history().len()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        match &self.progress {
            None => SessionSnapshot::idle(),
            Some(progress) => SessionSnapshot {
                state: self.state(),
                route: Some(progress.route.clone()),
                history: progress.history.clone(),
                current_index: progress.history.len(),
                destination: Some(progress.route.destination().clone()),
            },
        }
    }
}
