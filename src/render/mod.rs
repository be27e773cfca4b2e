// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic Unicode text renderings of traversal progress.
//!
//! The TUI colours the output using the returned node spans; MCP returns the plain text.

pub mod canvas;
pub mod route;

pub use canvas::{Canvas, CanvasError};
pub use route::{
    describe_progress, render_route_annotated, render_route_unicode, AnnotatedRoute, NodeSpan,
    RouteRenderError,
};
