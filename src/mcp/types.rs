// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NodeSummary {
    pub node_id: String,
    /// `room` or `stairs`.
    pub kind: String,
    pub degree: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PlanNodesResponse {
    pub name: String,
    pub nodes: Vec<NodeSummary>,
    pub edge_count: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PlanNeighborsParams {
    pub node_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PlanNeighborsResponse {
    pub node_id: String,
    pub kind: String,
    pub neighbors: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RouteFindParams {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RouteFindResponse {
    /// `None` when the two nodes are not connected.
    pub route: Option<Vec<String>>,
    pub hops: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SessionStartParams {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpSessionSnapshot {
    /// `idle`, `ready`, `in_progress` or `completed`.
    pub state: String,
    pub path: Vec<String>,
    pub history: Vec<String>,
    pub current_index: u64,
    pub total_steps: u64,
    pub current: Option<String>,
    pub destination: Option<String>,
    pub rev: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionStartResponse {
    pub message: String,
    pub session: McpSessionSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionAdvanceResponse {
    pub advanced: bool,
    pub step: Option<u64>,
    pub total_steps: Option<u64>,
    pub node_id: Option<String>,
    pub completed: bool,
    pub message: String,
    pub session: McpSessionSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionReadResponse {
    pub summary: String,
    pub session: McpSessionSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionResetResponse {
    pub session: McpSessionSnapshot,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SessionRenderTextParams {
    /// Wrap the route strip at this many columns.
    pub max_width: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionRenderTextResponse {
    pub text: String,
    pub summary: String,
    pub rev: u64,
}
