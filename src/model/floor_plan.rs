// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::ids::{IdError, NodeId};

const BUILTIN_NAME: &str = "Second floor";

/// Corridor and staircase links of the second floor, as surveyed.
///
/// The table is intentionally left as recorded (some links are only listed from one side);
/// [`crate::model::FloorGraph::build`] symmetrises it.
const BUILTIN_ADJACENCY: &[(&str, &[&str])] = &[
    ("201", &["213", "214", "stairs1", "212"]),
    ("202", &["214", "stairs1", "215", "203", "216"]),
    ("203", &["216", "stairs5", "202", "215"]),
    ("204", &["205", "217", "218", "stairs5", "stairs6"]),
    ("205", &["stairs2", "219", "218", "204", "217"]),
    ("206", &["219", "220", "stairs2"]),
    ("207", &["221", "stairs2", "222", "220"]),
    ("208", &["222", "209", "223", "stairs2"]),
    ("209", &["223", "222", "208", "stairs7", "stairs8"]),
    ("210", &["stairs8", "224", "211", "225", "stairs7"]),
    ("211", &["210", "224", "225", "226", "stairs4"]),
    ("212", &["stairs4", "226", "227", "201", "213"]),
    ("213", &["212", "201", "stairs1", "214", "227"]),
    ("214", &["201", "202", "stairs1", "215", "216"]),
    ("215", &["202", "203", "214", "216", "stairs1"]),
    ("216", &["202", "203", "215", "stairs5", "stairs6"]),
    ("217", &["204", "205", "218", "stairs6", "stairs5"]),
    ("218", &["204", "205", "217", "219", "stairs2"]),
    ("219", &["205", "206", "stairs2", "220"]),
    ("220", &["206", "207", "221", "219"]),
    ("221", &["207", "220", "stairs3", "222"]),
    ("222", &["207", "208", "209", "221", "223", "stairs3"]),
    ("223", &["208", "209", "stairs7", "222"]),
    ("224", &["210", "211", "stairs8", "225"]),
    ("225", &["210", "211", "stairs4", "224", "226"]),
    ("226", &["211", "212", "227", "225", "stairs4"]),
    ("227", &["212", "226", "stairs4", "213"]),
    ("stairs1", &["201", "202", "213", "214", "215"]),
    ("stairs2", &["205", "206", "219", "218"]),
    ("stairs3", &["207", "208", "221", "222"]),
    ("stairs4", &["211", "212", "225", "226", "227"]),
    ("stairs5", &["204", "203", "216", "217"]),
    ("stairs6", &["204", "203", "216", "217"]),
    ("stairs7", &["stairs8", "209", "210"]),
    ("stairs8", &["210", "stairs7", "209"]),
];

/// An adjacency table: each entry lists a node and the nodes it links to.
///
/// Entries built with [`FloorPlan::new`] or [`FloorPlan::from_labels`] keep their declaration
/// order. The table is plain data; it does not promise symmetry or that every referenced node has
/// an entry of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPlan {
    name: String,
    entries: Vec<(NodeId, Vec<NodeId>)>,
}

#[derive(Debug, Deserialize)]
struct FloorPlanFile {
    #[serde(default)]
    name: Option<String>,
    adjacency: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Error)]
pub enum FloorPlanError {
    #[error("failed to read floor plan {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid floor plan JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid node label in floor plan: {0}")]
    InvalidId(#[from] IdError),
}

impl FloorPlan {
    pub fn new(name: impl Into<String>, entries: Vec<(NodeId, Vec<NodeId>)>) -> Self {
        Self { name: name.into(), entries }
    }

    /// The 27-room / 8-staircase floor the application ships with.
    pub fn builtin() -> Self {
        Self::from_labels(BUILTIN_NAME, BUILTIN_ADJACENCY)
            .expect("built-in floor plan labels are valid")
    }

    pub fn from_labels(name: &str, table: &[(&str, &[&str])]) -> Result<Self, IdError> {
        let entries = table
            .iter()
            .map(|(node, neighbors)| {
                let node = NodeId::new(*node)?;
                let neighbors =
                    neighbors.iter().map(|label| NodeId::new(*label)).collect::<Result<_, _>>()?;
                Ok((node, neighbors))
            })
            .collect::<Result<Vec<_>, IdError>>()?;
        Ok(Self::new(name, entries))
    }

    /// Parses `{"name": "...", "adjacency": {"201": ["213", ...], ...}}`; `name` is optional.
    ///
    /// Entries come out sorted by node label. A node key repeated in the document keeps only its
    /// last neighbour list.
    pub fn from_json_str(source: &str) -> Result<Self, FloorPlanError> {
        let file: FloorPlanFile = serde_json::from_str(source)?;
        let mut entries = Vec::with_capacity(file.adjacency.len());
        for (node, neighbors) in file.adjacency {
            let node = NodeId::new(node)?;
            let neighbors = neighbors.into_iter().map(NodeId::new).collect::<Result<_, _>>()?;
            entries.push((node, neighbors));
        }
        Ok(Self::new(file.name.unwrap_or_else(|| "Floor plan".to_owned()), entries))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FloorPlanError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|source| FloorPlanError::Io { path: path.to_path_buf(), source })?;
        let plan = Self::from_json_str(&source)?;
        tracing::info!(path = %path.display(), entries = plan.entries.len(), "loaded floor plan");
        Ok(plan)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[(NodeId, Vec<NodeId>)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{FloorPlan, FloorPlanError};
    use crate::model::NodeKind;

    #[test]
    fn builtin_lists_every_room_and_staircase() {
        let plan = FloorPlan::builtin();
        assert_eq!(plan.entries().len(), 35);

        let stairs =
            plan.entries().iter().filter(|(node, _)| NodeKind::of(node) == NodeKind::Stairs).count();
        assert_eq!(stairs, 8);
    }

    #[test]
    fn from_json_reads_name_and_adjacency() {
        let plan = FloorPlan::from_json_str(
            r#"{"name": "Annex", "adjacency": {"a": ["b"], "b": ["c"]}}"#,
        )
        .expect("parse");
        assert_eq!(plan.name(), "Annex");
        let entries = plan
            .entries()
            .iter()
            .map(|(node, neighbors)| {
                (node.as_str(), neighbors.iter().map(|n| n.as_str()).collect::<Vec<_>>())
            })
            .collect::<Vec<_>>();
        assert_eq!(entries, vec![("a", vec!["b"]), ("b", vec!["c"])]);
    }

    #[test]
    fn from_json_sorts_entries_and_keeps_the_last_repeated_key() {
        let plan = FloorPlan::from_json_str(
            r#"{"adjacency": {"c": ["a"], "a": ["b"], "b": ["c"], "a": ["c"]}}"#,
        )
        .expect("parse");
        let entries = plan
            .entries()
            .iter()
            .map(|(node, neighbors)| {
                (node.as_str(), neighbors.iter().map(|n| n.as_str()).collect::<Vec<_>>())
            })
            .collect::<Vec<_>>();
        assert_eq!(entries, vec![("a", vec!["c"]), ("b", vec!["c"]), ("c", vec!["a"])]);
    }

    #[test]
    fn from_json_defaults_the_name() {
        let plan = FloorPlan::from_json_str(r#"{"adjacency": {}}"#).expect("parse");
        assert_eq!(plan.name(), "Floor plan");
        assert!(plan.is_empty());
    }

    #[test]
    fn from_json_rejects_blank_labels() {
        let err = FloorPlan::from_json_str(r#"{"adjacency": {"a": [""]}}"#).unwrap_err();
        assert!(matches!(err, FloorPlanError::InvalidId(_)), "{err}");
    }

    #[test]
    fn from_json_rejects_malformed_documents() {
        let err = FloorPlan::from_json_str(r#"{"adjacency": ["a"]}"#).unwrap_err();
        assert!(matches!(err, FloorPlanError::Json(_)), "{err}");
    }

    #[test]
    fn load_reports_missing_files_with_their_path() {
        let err = FloorPlan::load("/definitely/not/here.json").unwrap_err();
        match err {
            FloorPlanError::Io { path, .. } => {
                assert_eq!(path, std::path::PathBuf::from("/definitely/not/here.json"))
            }
            other => panic!("expected io error, got {other}"),
        }
    }
}
