//! Arena-backed ordered trees whose nodes carry a layout position.
//!
//! A [`Tree`] owns every [`Node`] in a flat arena and hands out [`NodeId`]
//! handles. Only the parent-to-child direction is structural: each node keeps
//! an ordered list of children, and that order is the left-to-right drawing
//! order. The parent recorded on each node is a lookup aid that
//! [`TreeLayout::arrange`](crate::TreeLayout::arrange) verifies against the
//! child lists before positioning anything.
//!
//! # Example
//!
//! ```
//! # use sapling::Tree;
//! let mut tree = Tree::with_root("root");
//! let root = tree.root().unwrap();
//! let left = tree.add_child(root, "left").unwrap();
//! let right = tree.add_child(root, "right").unwrap();
//!
//! assert_eq!(tree.node(root).unwrap().children(), &[left, right]);
//! assert_eq!(tree[right].parent(), Some(root));
//! ```

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use sapling_core::geometry::{Bounds, Point};

use crate::error::StructureError;

/// Handle to a node stored in a [`Tree`].
///
/// Ids are plain arena indices; they stay valid for the lifetime of the tree
/// because nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the arena index of this node
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A tree vertex: caller payload, ordered children and the computed position.
#[derive(Debug, Clone)]
pub struct Node<T> {
    data: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    position: Point,
}

impl<T> Node<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
            position: Point::default(),
        }
    }

    /// Returns the caller payload
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns the caller payload mutably
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the parent recorded when this node was last appended
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the children in left-to-right order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the position assigned by the last successful layout.
    ///
    /// Nodes that were never laid out sit at the origin.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// An ordered, rooted tree stored in an arena.
///
/// Nodes may be created detached with [`Tree::add_node`] and grafted later
/// with [`Tree::append_child`]; only nodes reachable from the root take part
/// in layout.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Creates an empty tree without a root
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Creates a tree holding a single root node
    pub fn with_root(data: T) -> Self {
        let mut tree = Self::new();
        let root = tree.add_node(data);
        tree.root = Some(root);
        tree
    }

    /// Returns the root node, if one has been set
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Makes an existing node the root of the tree.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::UnknownNode`] if `id` is not part of this tree.
    pub fn set_root(&mut self, id: NodeId) -> Result<(), StructureError> {
        self.check(id)?;
        self.root = Some(id);
        Ok(())
    }

    /// Adds a detached node and returns its id
    pub fn add_node(&mut self, data: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(data));
        id
    }

    /// Appends `child` as the rightmost child of `parent`.
    ///
    /// The child records `parent` as its parent. Appending a node that is
    /// already listed under another parent leaves it in both child lists;
    /// such a tree is rejected by layout with a structural error.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::UnknownNode`] if either id is not part of
    /// this tree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), StructureError> {
        self.check(parent)?;
        self.check(child)?;
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Creates a node and appends it as the rightmost child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::UnknownNode`] if `parent` is not part of
    /// this tree.
    pub fn add_child(&mut self, parent: NodeId, data: T) -> Result<NodeId, StructureError> {
        self.check(parent)?;
        let child = self.add_node(data);
        self.append_child(parent, child)?;
        Ok(child)
    }

    /// Returns the node for `id`, if it belongs to this tree
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    /// Returns the node for `id` mutably, if it belongs to this tree
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id.0)
    }

    /// Returns the position of `id`, if it belongs to this tree
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.node(id).map(Node::position)
    }

    /// Returns the number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every node in the arena in creation order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Iterates from the root in preorder, children left to right.
    ///
    /// Each node is yielded at most once, so a malformed tree cannot make
    /// the iterator loop forever.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self)
    }

    /// Computes the rectangle spanned by the positions of all nodes
    /// reachable from the root.
    ///
    /// An axis without extent (a single node, or a single level) is widened
    /// to one unit so the rectangle can always be scaled to fit a viewport.
    /// Returns `None` for a tree without a root.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut positions = self.preorder().map(|(_, node)| node.position);
        let first = positions.next()?;
        let bounds = positions.fold(Bounds::from_point(first), Bounds::include);

        let width = if bounds.width() > 0.0 {
            bounds.width()
        } else {
            1.0
        };
        let height = if bounds.height() > 0.0 {
            bounds.height()
        } else {
            1.0
        };
        Some(Bounds::new(
            bounds.min_x(),
            bounds.min_y(),
            bounds.min_x() + width,
            bounds.min_y() + height,
        ))
    }

    pub(crate) fn set_position(&mut self, id: NodeId, position: Point) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.position = position;
        }
    }

    fn check(&self, id: NodeId) -> Result<(), StructureError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(StructureError::UnknownNode(id))
        }
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = Node<T>;

    /// # Panics
    /// Panics if the node does not belong to this tree.
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl<T> IndexMut<NodeId> for Tree<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}

/// Preorder iterator returned by [`Tree::preorder`].
pub struct Preorder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
    seen: Vec<bool>,
}

impl<'a, T> Preorder<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let stack = tree.root.into_iter().collect();
        Self {
            tree,
            stack,
            seen: vec![false; tree.len()],
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = (NodeId, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let Some(node) = self.tree.node(id) else {
                continue;
            };
            if std::mem::replace(&mut self.seen[id.0], true) {
                continue;
            }
            // Push children in reverse order for left-to-right traversal
            self.stack.extend(node.children.iter().rev());
            return Some((id, node));
        }
        None
    }
}
