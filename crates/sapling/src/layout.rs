//! The tree layout driver.
//!
//! [`TreeLayout::arrange`] runs three passes over a [`Tree`]:
//!
//! 1. **Link** - validate the tree shape and derive sibling and same-level
//!    neighbor links.
//! 2. **First walk** - postorder; compute provisional x values and subtree
//!    modifiers, separating overlapping subtrees.
//! 3. **Second walk** - preorder; accumulate modifiers into absolute
//!    coordinates and check them against the drawable extents.
//!
//! Per-node bookkeeping lives in side tables owned by a single call, so the
//! only state that survives `arrange` is the committed node positions.

mod first_walk;
mod link;
mod second_walk;

use std::fmt;

use log::{debug, info, trace};

use sapling_core::geometry::Point;

use crate::{
    config::LayoutConfig,
    error::LayoutError,
    extents::{Extents, ExtentsCheck},
    tree::Tree,
};

use link::Links;
use second_walk::TopAdjustment;

/// Positions the nodes of a [`Tree`] in the classic tidy-tree style.
///
/// Parents are centered above their children, siblings keep at least the
/// sibling separation, and neighboring subtrees keep at least the subtree
/// separation at every level. Levels are stacked downwards, `y` growing with
/// depth.
///
/// # Examples
///
/// ```
/// use sapling::{Tree, TreeLayout, config::LayoutConfig, geometry::Point};
///
/// let mut tree = Tree::with_root("root");
/// let root = tree.root().unwrap();
/// let left = tree.add_child(root, "left").unwrap();
/// let right = tree.add_child(root, "right").unwrap();
///
/// let layout = TreeLayout::new(LayoutConfig::default());
/// layout.arrange(&mut tree, Point::new(0.0, 0.0)).expect("layout");
///
/// assert_eq!(tree[root].position(), Point::new(0.0, 0.0));
/// assert!(tree[left].position().x() < 0.0);
/// assert!(tree[right].position().x() > 0.0);
/// assert_eq!(tree[left].position().y(), 1.25);
/// ```
pub struct TreeLayout {
    config: LayoutConfig,
    extents: Box<dyn ExtentsCheck + Send + Sync>,
}

impl TreeLayout {
    /// Create a layout using `config`.
    ///
    /// Coordinates are checked against [`LayoutConfig::extents`] when set,
    /// and only required to be finite otherwise.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            extents: Box::new(Extents::from(config.extents())),
        }
    }

    /// Replace the drawable-extents check.
    ///
    /// The check takes precedence over [`LayoutConfig::extents`].
    pub fn with_extents(mut self, extents: impl ExtentsCheck + Send + Sync + 'static) -> Self {
        self.extents = Box::new(extents);
        self
    }

    /// Returns the layout configuration
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes and assigns a position to every node of `tree` reachable
    /// from its root, placing the root at `offset`.
    ///
    /// Nodes deeper than [`LayoutConfig::max_depth`] are not positioned and
    /// keep whatever position they had. A tree without a root is trivially
    /// arranged.
    ///
    /// Positions are committed only when every coordinate has been computed
    /// and accepted; on error the tree is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::Config`] if the configuration is invalid.
    /// - [`LayoutError::Structure`] if the nodes reachable from the root do
    ///   not form a tree.
    /// - [`LayoutError::Extents`] if a coordinate falls outside the drawable
    ///   extents.
    pub fn arrange<T>(&self, tree: &mut Tree<T>, offset: Point) -> Result<(), LayoutError> {
        self.config.validate()?;

        let Some(root) = tree.root() else {
            debug!("Tree has no root, nothing to arrange");
            return Ok(());
        };

        info!(root:% = root, offset:? = offset; "Arranging tree");

        let links = Links::build(tree, root)?;
        debug!(nodes = links.preorder().len(); "Tree structure validated");

        let walks = first_walk::run(&links, root, &self.config);
        let top = TopAdjustment::new(offset, walks[root.index()].prelim);
        trace!(top:? = top; "Preliminary positions computed");

        let positions = second_walk::run(&links, &walks, top, &self.config, &*self.extents)?;

        for &(id, position) in &positions {
            tree.set_position(id, position);
        }

        info!(positioned = positions.len(); "Tree arranged");
        Ok(())
    }
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl fmt::Debug for TreeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeLayout")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
