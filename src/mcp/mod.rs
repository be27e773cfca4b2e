// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Model Context Protocol (MCP) server surface.
//!
//! Lets an agent inspect the floor plan, look up routes, and drive the live traversal session.

mod server;
mod types;

pub use server::WaypointMcp;
pub use types::*;
