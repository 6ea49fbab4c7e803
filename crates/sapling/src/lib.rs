//! Sapling - aesthetic layout of rooted, ordered trees.
//!
//! Sapling computes drawing coordinates for the nodes of a tree using the
//! Reingold-Tilford algorithm as extended by Walker to trees of arbitrary
//! arity: parents are centered over their children, siblings and
//! neighboring subtrees keep configurable minimum gaps, and small subtrees
//! sandwiched between larger ones are spread evenly.
//!
//! The crate only computes coordinates. Rendering, animation and any
//! interactive behavior belong to the caller.
//!
//! # Example
//!
//! ```
//! use sapling::{Tree, TreeLayout, config::AppConfig, geometry::Point};
//!
//! let mut tree = Tree::with_root("animal");
//! let root = tree.root().unwrap();
//! let mammal = tree.add_child(root, "mammal").unwrap();
//! tree.add_child(mammal, "cat").unwrap();
//! tree.add_child(mammal, "dog").unwrap();
//! tree.add_child(root, "bird").unwrap();
//!
//! let config = AppConfig::default();
//! TreeLayout::new(*config.layout())
//!     .arrange(&mut tree, Point::new(0.0, 0.0))
//!     .expect("layout should succeed");
//!
//! for (_, node) in tree.preorder() {
//!     println!("{} {:?}", node.data(), node.position());
//! }
//! ```

pub mod config;
pub mod tree;

mod error;
mod extents;
mod layout;

pub use sapling_core::geometry;

pub use error::{LayoutError, StructureError};
pub use extents::{Extents, ExtentsCheck};
pub use layout::TreeLayout;
pub use tree::{Node, NodeId, Tree};
