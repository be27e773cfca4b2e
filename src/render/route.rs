// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use thiserror::Error;

use crate::model::NodeId;
use crate::session::{NodeMark, SessionSnapshot, TraversalState};

use super::canvas::{Canvas, CanvasError};

const BOX_HEIGHT: usize = 3;
const ROW_HEIGHT: usize = BOX_HEIGHT + 1;
const ROW_GAP: usize = 1;
const ARROW_GAP: usize = 4;
const MAX_LABEL_LEN: usize = 12;

pub const VISITED_MARKER: char = '✓';
pub const CURRENT_MARKER: char = '●';
pub const DESTINATION_MARKER: char = '◎';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteRenderError {
    #[error("canvas error: {0}")]
    Canvas(#[from] CanvasError),
}

/// Where a route node's box landed, in character cells (inclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpan {
    pub node_id: NodeId,
    pub mark: NodeMark,
    pub y0: usize,
    pub y1: usize,
    pub x0: usize,
    pub x1: usize,
}

/// Rendered route strip plus the cell spans of every node box, for colouring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotatedRoute {
    pub text: String,
    pub node_spans: Vec<NodeSpan>,
}

#[derive(Debug, Clone, Copy)]
struct Placement {
    row: usize,
    x0: usize,
    x1: usize,
    inner_width: usize,
}

pub fn render_route_unicode(snapshot: &SessionSnapshot) -> Result<String, RouteRenderError> {
    render_route_annotated(snapshot, None).map(|rendered| rendered.text)
}

/// Boxes for every node of the route, joined by arrows, with a marker row underneath.
///
/// With `max_width` the strip wraps onto further rows instead of growing wider; a row that is cut
/// short still ends in an arrow. An idle snapshot renders as the empty string.
pub fn render_route_annotated(
    snapshot: &SessionSnapshot,
    max_width: Option<usize>,
) -> Result<AnnotatedRoute, RouteRenderError> {
    let nodes = snapshot.path();
    if nodes.is_empty() {
        return Ok(AnnotatedRoute::default());
    }

    let labels = nodes
        .iter()
        .map(|node_id| truncate_with_ellipsis(node_id.as_str(), MAX_LABEL_LEN))
        .collect::<Vec<_>>();

    let mut placements = Vec::<Placement>::with_capacity(nodes.len());
    let mut row = 0usize;
    let mut cursor_x = 0usize;
    let mut width = 0usize;

    for (idx, label) in labels.iter().enumerate() {
        let inner_width = label.chars().count() + 2;
        let total_width = inner_width + 2;
        let has_arrow = idx + 1 < nodes.len();
        let needed = total_width + if has_arrow { ARROW_GAP } else { 0 };

        if cursor_x > 0 && max_width.is_some_and(|max| cursor_x + needed > max) {
            row += 1;
            cursor_x = 0;
        }

        let x0 = cursor_x;
        let x1 = x0 + total_width - 1;
        placements.push(Placement { row, x0, x1, inner_width });

        width = width.max(x0 + needed);
        cursor_x = x1 + 1 + ARROW_GAP;
    }

    let rows = row + 1;
    let height = rows * ROW_HEIGHT + (rows - 1) * ROW_GAP;
    let mut canvas = Canvas::new(width, height)?;
    let mut node_spans = Vec::with_capacity(nodes.len());

    for (idx, placement) in placements.iter().enumerate() {
        let y0 = placement.row * (ROW_HEIGHT + ROW_GAP);
        let label = &labels[idx];

        canvas.draw_box(placement.x0, y0, placement.x1, y0 + BOX_HEIGHT - 1)?;
        let left_pad = (placement.inner_width - label.chars().count()) / 2;
        canvas.write_str(placement.x0 + 1 + left_pad, y0 + 1, label)?;

        if idx + 1 < nodes.len() {
            let arrow_head = placement.x1 + ARROW_GAP;
            canvas.draw_hline(placement.x1 + 1, arrow_head - 1, y0 + 1)?;
            canvas.set(arrow_head, y0 + 1, '▶')?;
        }

        let mark = snapshot.mark(&nodes[idx]);
        if let Some(marker) = marker_for(mark) {
            let center = placement.x0 + (placement.x1 - placement.x0) / 2;
            canvas.set(center, y0 + BOX_HEIGHT, marker)?;
        }

        node_spans.push(NodeSpan {
            node_id: nodes[idx].clone(),
            mark,
            y0,
            y1: y0 + BOX_HEIGHT - 1,
            x0: placement.x0,
            x1: placement.x1,
        });
    }

    Ok(AnnotatedRoute { text: canvas.to_string_trimmed(), node_spans })
}

fn marker_for(mark: NodeMark) -> Option<char> {
    match mark {
        NodeMark::Visited => Some(VISITED_MARKER),
        NodeMark::Current => Some(CURRENT_MARKER),
        NodeMark::Destination => Some(DESTINATION_MARKER),
        NodeMark::Off | NodeMark::OnRoute => None,
    }
}

/// One sentence describing where the traversal stands.
pub fn describe_progress(snapshot: &SessionSnapshot) -> String {
    let destination = snapshot.destination.as_ref().map(NodeId::as_str).unwrap_or("?");
    match (snapshot.state, snapshot.route.as_ref()) {
        (TraversalState::Idle, _) | (_, None) => "No active route.".to_owned(),
        (TraversalState::Ready, Some(route)) => {
            format!("Route to {destination} ready: {} steps {route}.", route.len())
        }
        (TraversalState::InProgress, Some(route)) => {
            let current = snapshot.current().map(NodeId::as_str).unwrap_or("?");
            format!(
                "Step {}/{}: at {current}, heading to {destination}.",
                snapshot.current_index,
                route.len()
            )
        }
        (TraversalState::Completed, Some(route)) => {
            format!("Reached destination {destination}. Full path: {route}")
        }
    }
}

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_owned();
    }
    if max_len == 0 {
        return String::new();
    }
    let mut out = text.chars().take(max_len - 1).collect::<String>();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::{describe_progress, render_route_annotated, render_route_unicode};
    use crate::model::fixtures::nodes;
    use crate::model::Route;
    use crate::session::{NodeMark, SessionSnapshot, TraversalSession};

    fn abc_session() -> TraversalSession {
        let mut session = TraversalSession::new();
        session.begin(Route::new(nodes(&["a", "b", "c"])).expect("route"));
        session
    }

    #[test]
    fn idle_snapshot_renders_empty() {
        assert_eq!(render_route_unicode(&SessionSnapshot::idle()).expect("render"), "");
    }

    #[test]
    fn snapshot_ready_route_marks_only_the_destination() {
        let rendered = render_route_unicode(&abc_session().snapshot()).expect("render");
        assert_eq!(
            rendered,
            "┌───┐    ┌───┐    ┌───┐\n│ a │───▶│ b │───▶│ c │\n└───┘    └───┘    └───┘\n                    ◎"
        );
    }

    #[test]
    fn snapshot_in_progress_marks_visited_and_current() {
        let mut session = abc_session();
        session.advance_step().expect("step");
        session.advance_step().expect("step");
        let rendered = render_route_unicode(&session.snapshot()).expect("render");
        assert_eq!(
            rendered,
            "┌───┐    ┌───┐    ┌───┐\n│ a │───▶│ b │───▶│ c │\n└───┘    └───┘    └───┘\n  ✓        ●        ◎"
        );
    }

    #[test]
    fn spans_cover_each_box() {
        let mut session = abc_session();
        session.advance_step().expect("step");
        let rendered = render_route_annotated(&session.snapshot(), None).expect("render");
        let spans = rendered
            .node_spans
            .iter()
            .map(|span| (span.node_id.as_str(), span.mark, span.x0, span.x1))
            .collect::<Vec<_>>();
        assert_eq!(
            spans,
            vec![
                ("a", NodeMark::Current, 0, 4),
                ("b", NodeMark::OnRoute, 9, 13),
                ("c", NodeMark::Destination, 18, 22),
            ]
        );
    }

    #[test]
    fn narrow_width_wraps_onto_a_second_row() {
        let snapshot = abc_session().snapshot();
        let rendered = render_route_annotated(&snapshot, Some(18)).expect("render");
        assert_eq!(
            rendered.text,
            "┌───┐    ┌───┐\n│ a │───▶│ b │───▶\n└───┘    └───┘\n\n\n┌───┐\n│ c │\n└───┘\n  ◎"
        );
        assert_eq!(rendered.node_spans[2].y0, 5);
    }

    #[test]
    fn long_labels_are_truncated() {
        let mut session = TraversalSession::new();
        session.begin(Route::new(nodes(&["east-wing-stairs-b"])).expect("route"));
        let rendered = render_route_unicode(&session.snapshot()).expect("render");
        assert!(rendered.contains("│ east-wing-s… │"), "{rendered}");
    }

    #[test]
    fn progress_descriptions() {
        let mut session = abc_session();
        assert_eq!(describe_progress(&session.snapshot()), "Route to c ready: 3 steps [a, b, c].");
        session.advance_step().expect("step");
        assert_eq!(describe_progress(&session.snapshot()), "Step 1/3: at a, heading to c.");
        session.advance_step().expect("step");
        session.advance_step().expect("step");
        assert_eq!(
            describe_progress(&session.snapshot()),
            "Reached destination c. Full path: [a, b, c]"
        );
        assert_eq!(describe_progress(&SessionSnapshot::idle()), "No active route.");
    }
}
