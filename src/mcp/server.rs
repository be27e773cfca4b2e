// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use tokio::sync::Mutex;

use crate::model::{NodeId, NodeKind};
use crate::query::RouteError;
use crate::render::{describe_progress, render_route_annotated};
use crate::session::{Navigator, SessionSnapshot, StepError};

use super::types::*;

#[derive(Clone)]
pub struct WaypointMcp {
    navigator: Arc<Mutex<Navigator>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WaypointMcp {
    pub fn new(navigator: Navigator) -> Self {
        Self::with_shared_navigator(Arc::new(Mutex::new(navigator)))
    }

    /// Serves the navigator the TUI is drawing, so both surfaces drive one session.
    pub fn with_shared_navigator(navigator: Arc<Mutex<Navigator>>) -> Self {
        Self { navigator, tool_router: Self::tool_router() }
    }

    pub fn shared_navigator(&self) -> Arc<Mutex<Navigator>> {
        self.navigator.clone()
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        tracing::info!("serving MCP over stdio");
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        tracing::info!("MCP stdio session closed");
        Ok(())
    }

    /// List every node of the floor plan (sorted) with its kind and degree; start here to pick
    /// ids for `route.find` or `session.start`.
    #[tool(name = "plan.nodes")]
    async fn plan_nodes(&self) -> Result<Json<PlanNodesResponse>, ErrorData> {
        let navigator = self.navigator.lock().await;
        let graph = navigator.graph();
        let nodes = graph
            .nodes()
            .map(|node_id| NodeSummary {
                node_id: node_id.to_string(),
                kind: NodeKind::of(node_id).label().to_owned(),
                degree: graph.degree(node_id).map(|degree| degree as u64).unwrap_or(0),
            })
            .collect::<Vec<_>>();

        Ok(Json(PlanNodesResponse {
            name: graph.name().to_owned(),
            nodes,
            edge_count: graph.edge_count() as u64,
        }))
    }

    /// Direct neighbours of one node, sorted.
    #[tool(name = "plan.neighbors")]
    async fn plan_neighbors(
        &self,
        params: Parameters<PlanNeighborsParams>,
    ) -> Result<Json<PlanNeighborsResponse>, ErrorData> {
        let node_id = parse_node_id(&params.0.node_id, "node_id")?;
        let navigator = self.navigator.lock().await;
        let neighbors = navigator.graph().neighbors(&node_id).map_err(|err| {
            ErrorData::invalid_params(
                err.to_string(),
                Some(serde_json::json!({ "node_id": node_id.as_str() })),
            )
        })?;

        Ok(Json(PlanNeighborsResponse {
            node_id: node_id.to_string(),
            kind: NodeKind::of(&node_id).label().to_owned(),
            neighbors: neighbors.iter().map(ToString::to_string).collect(),
        }))
    }

    /// Shortest route (fewest hops, ties broken lexicographically) between two nodes without
    /// touching the live session; `route` is null when they are not connected.
    #[tool(name = "route.find")]
    async fn route_find(
        &self,
        params: Parameters<RouteFindParams>,
    ) -> Result<Json<RouteFindResponse>, ErrorData> {
        let RouteFindParams { from, to } = params.0;
        let from = parse_node_id(&from, "from")?;
        let to = parse_node_id(&to, "to")?;

        let navigator = self.navigator.lock().await;
        match navigator.route_between(&from, &to) {
            Ok(route) => Ok(Json(RouteFindResponse {
                hops: Some(route.hops() as u64),
                route: Some(route.nodes().iter().map(ToString::to_string).collect()),
            })),
            Err(RouteError::NoPath { .. }) => {
                Ok(Json(RouteFindResponse { route: None, hops: None }))
            }
            Err(err @ RouteError::UnknownNode { .. }) => Err(route_error_to_mcp(&err, &from, &to)),
        }
    }

    /// Compute a route and make it the live session (replacing any previous one); follow with
    /// `session.advance`. On failure the session is left idle.
    #[tool(name = "session.start")]
    async fn session_start(
        &self,
        params: Parameters<SessionStartParams>,
    ) -> Result<Json<SessionStartResponse>, ErrorData> {
        let SessionStartParams { from, to } = params.0;
        let from = parse_node_id(&from, "from")?;
        let to = parse_node_id(&to, "to")?;

        let mut navigator = self.navigator.lock().await;
        let snapshot =
            navigator.start(&from, &to).map_err(|err| route_error_to_mcp(&err, &from, &to))?;

        Ok(Json(SessionStartResponse {
            message: format!("Tracking started from {from} to {to}"),
            session: snapshot_to_mcp(&snapshot, navigator.rev()),
        }))
    }

    /// Walk one step along the live route. Advancing an idle or completed session is not an
    /// error: it reports `advanced: false` with a message.
    #[tool(name = "session.advance")]
    async fn session_advance(&self) -> Result<Json<SessionAdvanceResponse>, ErrorData> {
        let mut navigator = self.navigator.lock().await;
        let result = navigator.advance();
        let snapshot = navigator.snapshot();
        let session = snapshot_to_mcp(&snapshot, navigator.rev());
        drop(navigator);

        let response = match result {
            Ok(report) => SessionAdvanceResponse {
                advanced: true,
                step: Some(report.step as u64),
                total_steps: Some(report.total_steps as u64),
                node_id: Some(report.node_id.to_string()),
                completed: report.is_final(),
                message: format!(
                    "Step {}/{}. Moved to: {}",
                    report.step, report.total_steps, report.node_id
                ),
                session,
            },
            Err(err) => SessionAdvanceResponse {
                advanced: false,
                step: None,
                total_steps: None,
                node_id: None,
                completed: err == StepError::AlreadyCompleted,
                message: step_error_message(err, &snapshot),
                session,
            },
        };
        Ok(Json(response))
    }

    /// Read the live session without changing it.
    #[tool(name = "session.read")]
    async fn session_read(&self) -> Result<Json<SessionReadResponse>, ErrorData> {
        let navigator = self.navigator.lock().await;
        let snapshot = navigator.snapshot();
        Ok(Json(SessionReadResponse {
            summary: describe_progress(&snapshot),
            session: snapshot_to_mcp(&snapshot, navigator.rev()),
        }))
    }

    /// Drop the live route and return to idle.
    #[tool(name = "session.reset")]
    async fn session_reset(&self) -> Result<Json<SessionResetResponse>, ErrorData> {
        let mut navigator = self.navigator.lock().await;
        let snapshot = navigator.reset();
        Ok(Json(SessionResetResponse { session: snapshot_to_mcp(&snapshot, navigator.rev()) }))
    }

    /// Render the live route as Unicode boxes with visited/current/destination markers.
    #[tool(name = "session.render_text")]
    async fn session_render_text(
        &self,
        params: Parameters<SessionRenderTextParams>,
    ) -> Result<Json<SessionRenderTextResponse>, ErrorData> {
        let max_width = params.0.max_width.map(|width| width as usize);
        let navigator = self.navigator.lock().await;
        let snapshot = navigator.snapshot();
        let rev = navigator.rev();
        drop(navigator);

        let rendered = render_route_annotated(&snapshot, max_width).map_err(|err| {
            ErrorData::internal_error(
                format!("failed to render route: {err}"),
                Some(serde_json::json!({ "rev": rev })),
            )
        })?;

        Ok(Json(SessionRenderTextResponse {
            text: rendered.text,
            summary: describe_progress(&snapshot),
            rev,
        }))
    }
}

#[tool_handler]
impl ServerHandler for WaypointMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Waypoint indoor navigation server (tools: plan.nodes, plan.neighbors, route.find, session.start, session.advance, session.read, session.reset, session.render_text)"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// Mapping helpers shared by the tool handlers.
include!("server/helpers.rs");
