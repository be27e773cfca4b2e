// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use thiserror::Error;

/// A typed label used to address things on a floor plan.
///
/// Labels are free-form (`"201"`, `"stairs1"`) but must be non-empty and contain no whitespace,
/// so they stay unambiguous in the one-line route renderings and in MCP payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        validate_label(&value)?;
        Ok(Self { value, _marker: PhantomData })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("label must not be empty")]
    Empty,
    #[error("label must not contain whitespace: {label:?}")]
    ContainsWhitespace { label: String },
}

fn validate_label(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(IdError::ContainsWhitespace { label: value.to_owned() });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeIdTag {}
pub type NodeId = Id<NodeIdTag>;

/// What kind of place a node stands for. Only the presentation layers care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Room,
    Stairs,
}

impl NodeKind {
    pub fn of(node_id: &NodeId) -> Self {
        if node_id.as_str().contains("stairs") {
            Self::Stairs
        } else {
            Self::Room
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Stairs => "stairs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Id, IdError, NodeId, NodeKind};

    #[test]
    fn id_rejects_empty() {
        let result: Result<Id<()>, _> = Id::new("");
        assert_eq!(result, Err(IdError::Empty));
    }

    #[test]
    fn id_rejects_whitespace() {
        let result: Result<Id<()>, _> = Id::new("room 201");
        assert_eq!(result, Err(IdError::ContainsWhitespace { label: "room 201".to_owned() }));
    }

    #[test]
    fn ids_order_lexicographically() {
        let mut ids = ["stairs1", "213", "201", "stairs10"]
            .into_iter()
            .map(|label| NodeId::new(label).expect("node id"))
            .collect::<Vec<_>>();
        ids.sort();
        let labels = ids.iter().map(NodeId::as_str).collect::<Vec<_>>();
        assert_eq!(labels, vec!["201", "213", "stairs1", "stairs10"]);
    }

    #[test]
    fn node_kind_is_derived_from_label() {
        assert_eq!(NodeKind::of(&NodeId::new("stairs7").expect("id")), NodeKind::Stairs);
        assert_eq!(NodeKind::of(&NodeId::new("east-stairs").expect("id")), NodeKind::Stairs);
        assert_eq!(NodeKind::of(&NodeId::new("207").expect("id")), NodeKind::Room);
    }
}
