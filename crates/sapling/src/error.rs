//! Error types for Sapling layout operations.
//!
//! [`LayoutError`] is returned by
//! [`TreeLayout::arrange`](crate::TreeLayout::arrange). Structural problems
//! are fatal and reported before any node is positioned; an extents failure
//! leaves every node position untouched, so the caller may retry with a
//! different offset or configuration.

use thiserror::Error;

use crate::tree::NodeId;

/// The main error type for layout operations.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),

    #[error("Extents error: node {node} would be placed at ({x}, {y}), outside the drawable extents")]
    Extents { node: NodeId, x: f32, y: f32 },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// A violation of the rooted-tree precondition.
///
/// These can only arise from misuse of [`Tree`](crate::Tree), for example
/// appending the same node under two parents or under one of its own
/// descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("node {0} does not belong to this tree")]
    UnknownNode(NodeId),

    #[error("node {child} is listed under {parent} but is not a child of that parent")]
    NotChildOfParent { child: NodeId, parent: NodeId },

    #[error("node {0} is reachable from the root more than once")]
    Revisited(NodeId),
}
