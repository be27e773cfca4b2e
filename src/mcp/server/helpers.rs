// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

fn parse_node_id(value: &str, field: &str) -> Result<NodeId, ErrorData> {
    NodeId::new(value.to_owned()).map_err(|err| {
        ErrorData::invalid_params(
            format!("invalid {field}: {err}"),
            Some(serde_json::json!({ field: value })),
        )
    })
}

fn route_error_to_mcp(err: &RouteError, from: &NodeId, to: &NodeId) -> ErrorData {
    match err {
        RouteError::UnknownNode { node_id } => ErrorData::invalid_params(
            format!("unknown node: {node_id}"),
            Some(serde_json::json!({ "node_id": node_id.as_str() })),
        ),
        RouteError::NoPath { .. } => ErrorData::invalid_params(
            "No path found!",
            Some(serde_json::json!({ "from": from.as_str(), "to": to.as_str() })),
        ),
    }
}

fn step_error_message(err: StepError, snapshot: &SessionSnapshot) -> String {
    match err {
        StepError::NotStarted => "Start tracking first.".to_owned(),
        StepError::AlreadyCompleted => match &snapshot.route {
            Some(route) => format!("Reached destination. Full path: {route}"),
            None => "Reached destination.".to_owned(),
        },
    }
}

fn snapshot_to_mcp(snapshot: &SessionSnapshot, rev: u64) -> McpSessionSnapshot {
    McpSessionSnapshot {
        state: snapshot.state.label().to_owned(),
        path: snapshot.path().iter().map(ToString::to_string).collect(),
        history: snapshot.history.iter().map(ToString::to_string).collect(),
        current_index: snapshot.current_index as u64,
        total_steps: snapshot.total_steps() as u64,
        current: snapshot.current().map(ToString::to_string),
        destination: snapshot.destination.as_ref().map(ToString::to_string),
        rev,
    }
}
