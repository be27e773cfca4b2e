// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Waypoint: indoor shortest-path navigation with a step-by-step traversal session.
//!
//! [`model`] holds the floor plan and its graph, [`query`] finds fewest-hop routes, [`session`]
//! replays a route one step at a time, and [`render`], [`tui`], and [`mcp`] present it.

pub mod mcp;
pub mod model;
pub mod query;
pub mod render;
pub mod session;
pub mod tui;
