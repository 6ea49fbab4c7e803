//! Final positioning: a preorder walk turning provisional x values and
//! accumulated modifiers into absolute coordinates.

use log::warn;

use sapling_core::geometry::Point;

use crate::{config::LayoutConfig, error::LayoutError, extents::ExtentsCheck, tree::NodeId};

use super::{first_walk::Walk, link::Links};

/// Translation that puts the root at the requested offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct TopAdjustment {
    x: f32,
    y: f32,
}

impl TopAdjustment {
    /// Aligns the root's provisional x with `offset`
    pub fn new(offset: Point, root_prelim: f32) -> Self {
        Self {
            x: offset.x() - root_prelim,
            y: offset.y(),
        }
    }
}

/// Computes the absolute position of every node up to the maximum depth.
///
/// Positions are returned in preorder rather than written to the tree, so a
/// failure leaves the caller's tree untouched.
///
/// # Errors
///
/// Returns [`LayoutError::Extents`] for the first node, in preorder, whose
/// coordinate is rejected by `extents`.
pub(super) fn run(
    links: &Links,
    walks: &[Walk],
    top: TopAdjustment,
    config: &LayoutConfig,
    extents: &dyn ExtentsCheck,
) -> Result<Vec<(NodeId, Point)>, LayoutError> {
    let mut modsums = vec![0.0_f32; links.node_count()];
    let mut positions = Vec::with_capacity(links.preorder().len());

    for &id in links.preorder() {
        let node = &links[id];
        if node.level > config.max_depth() {
            continue;
        }

        // Ancestors are visited first, so their modifier sum is final.
        let modsum = node
            .parent
            .map_or(0.0, |parent| modsums[parent.index()] + walks[parent.index()].modifier);
        modsums[id.index()] = modsum;

        let position = Point::new(
            top.x + walks[id.index()].prelim + modsum,
            top.y + node.level as f32 * config.level_separation(),
        );
        if !extents.accepts(position) {
            warn!(node:% = id, x = position.x(), y = position.y(); "Node outside drawable extents");
            return Err(LayoutError::Extents {
                node: id,
                x: position.x(),
                y: position.y(),
            });
        }
        positions.push((id, position));
    }

    Ok(positions)
}
