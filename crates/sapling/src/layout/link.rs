//! Structural pass: sibling and neighbor adjacency for the positioning walks.

use std::ops::Index;

use log::trace;

use crate::{error::StructureError, tree::NodeId, tree::Tree};

/// Lateral and upward links of one node, derived from the child lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct NodeLinks {
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub left_sibling: Option<NodeId>,
    pub right_sibling: Option<NodeId>,
    /// Nearest node to the left on the same level, not necessarily a sibling.
    pub left_neighbor: Option<NodeId>,
    /// Distance from the root; the root is level 0.
    pub level: usize,
}

/// Links for every node reachable from a root.
///
/// Nodes outside the linked tree keep default (empty) links.
#[derive(Debug)]
pub(super) struct Links {
    nodes: Vec<NodeLinks>,
    preorder: Vec<NodeId>,
}

/// A node waiting on the linking stack together with the links its parent
/// already knows about.
struct Pending {
    id: NodeId,
    parent: Option<NodeId>,
    left_sibling: Option<NodeId>,
    right_sibling: Option<NodeId>,
    level: usize,
}

impl Links {
    /// Links every node reachable from `root`.
    ///
    /// Nodes are visited in preorder with children left to right, so the
    /// most recently visited node on a level is always the left neighbor of
    /// the next one visited there.
    ///
    /// # Errors
    ///
    /// Fails if a child does not record the listing node as its parent
    /// (it was appended under several parents), or if a node is reached
    /// twice (a cycle, or a node listed twice).
    pub fn build<T>(tree: &Tree<T>, root: NodeId) -> Result<Self, StructureError> {
        let mut nodes = vec![NodeLinks::default(); tree.len()];
        let mut seen = vec![false; tree.len()];
        let mut preorder = Vec::new();
        let mut last_on_level: Vec<NodeId> = Vec::new();

        let mut stack = vec![Pending {
            id: root,
            parent: None,
            left_sibling: None,
            right_sibling: None,
            level: 0,
        }];

        while let Some(pending) = stack.pop() {
            let id = pending.id;
            let node = tree.node(id).ok_or(StructureError::UnknownNode(id))?;
            if std::mem::replace(&mut seen[id.index()], true) {
                return Err(StructureError::Revisited(id));
            }
            if let Some(parent) = pending.parent {
                if node.parent() != Some(parent) {
                    return Err(StructureError::NotChildOfParent { child: id, parent });
                }
            }

            let left_neighbor = if pending.level < last_on_level.len() {
                Some(std::mem::replace(&mut last_on_level[pending.level], id))
            } else {
                last_on_level.push(id);
                None
            };

            let children = node.children();
            nodes[id.index()] = NodeLinks {
                parent: pending.parent,
                first_child: children.first().copied(),
                last_child: children.last().copied(),
                left_sibling: pending.left_sibling,
                right_sibling: pending.right_sibling,
                left_neighbor,
                level: pending.level,
            };
            preorder.push(id);

            // Push children in reverse order for left-to-right traversal
            for (index, &child) in children.iter().enumerate().rev() {
                stack.push(Pending {
                    id: child,
                    parent: Some(id),
                    left_sibling: index.checked_sub(1).map(|left| children[left]),
                    right_sibling: children.get(index + 1).copied(),
                    level: pending.level + 1,
                });
            }
        }

        trace!(nodes = preorder.len(), levels = last_on_level.len(); "Tree linked");

        Ok(Self { nodes, preorder })
    }

    /// Returns the size of the node table, unlinked nodes included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the linked nodes in preorder, children left to right
    pub fn preorder(&self) -> &[NodeId] {
        &self.preorder
    }

    /// Iterates over the children of `id`, left to right
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self[id].first_child, |&child| self[child].right_sibling)
    }

    /// Finds the leftmost descendant of `id` exactly `depth` levels below it.
    ///
    /// Subtrees that end before reaching `depth` are skipped; returns `None`
    /// if no branch of `id` is that deep.
    pub fn leftmost_descendant(&self, id: NodeId, depth: usize) -> Option<NodeId> {
        let mut stack = vec![(id, 0)];
        while let Some((current, below)) = stack.pop() {
            if below >= depth {
                return Some(current);
            }
            let children: Vec<_> = self.children(current).collect();
            stack.extend(children.into_iter().rev().map(|child| (child, below + 1)));
        }
        None
    }
}

impl Index<NodeId> for Links {
    type Output = NodeLinks;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}
