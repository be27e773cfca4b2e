// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Step-by-step traversal of a computed route.
//!
//! [`TraversalSession`] is the state machine; [`Navigator`] is the single command boundary that
//! owns the graph plus one live session and is shared by the TUI and MCP surfaces.

pub mod navigator;
pub mod traversal;

pub use navigator::Navigator;
pub use traversal::{
    NodeMark, SessionSnapshot, StepError, StepReport, TraversalSession, TraversalState,
};
