// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A floor plan (adjacency table) is turned into an immutable floor graph; routes are walks over it.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod floor_plan;
pub mod graph;
pub mod ids;
pub mod route;

pub use floor_plan::{FloorPlan, FloorPlanError};
pub use graph::{FloorGraph, InvalidGraphError, UnknownNodeError};
pub use ids::{Id, IdError, NodeId, NodeKind};
pub use route::Route;
