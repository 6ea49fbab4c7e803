//! Preliminary positioning: a postorder walk with subtree apportionment.
//!
//! Every node receives a provisional x relative to its siblings and a
//! modifier that is later applied to its whole subtree. Leaves are packed
//! against their left sibling; parents are centered over their children.
//! When a subtree is placed next to a sibling, its left contour is compared
//! level by level with the right contour of whatever lies to its left, and
//! the subtree is pushed right until the two keep the subtree separation.

use log::debug;

use crate::{config::LayoutConfig, tree::NodeId};

use super::link::Links;

/// Per-node result of the preliminary pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(super) struct Walk {
    /// Provisional x before ancestor modifiers are applied.
    pub prelim: f32,
    /// Shift applied to every descendant in the final pass.
    pub modifier: f32,
}

/// Runs the preliminary pass over the tree rooted at `root`.
///
/// Nodes deeper than the configured maximum depth are not visited and keep
/// a zero walk; nodes at the maximum depth are treated as leaves.
pub(super) fn run(links: &Links, root: NodeId, config: &LayoutConfig) -> Vec<Walk> {
    let mut walker = FirstWalk {
        links,
        config,
        walks: vec![Walk::default(); links.node_count()],
    };

    // (node, children already visited)
    let mut stack = vec![(root, false)];
    while let Some((id, expanded)) = stack.pop() {
        let node = &links[id];
        if expanded || node.first_child.is_none() || node.level >= config.max_depth() {
            walker.visit(id);
            continue;
        }
        stack.push((id, true));
        let children: Vec<_> = links.children(id).collect();
        stack.extend(children.into_iter().rev().map(|child| (child, false)));
    }

    walker.walks
}

struct FirstWalk<'a> {
    links: &'a Links,
    config: &'a LayoutConfig,
    walks: Vec<Walk>,
}

impl FirstWalk<'_> {
    fn visit(&mut self, id: NodeId) {
        let node = self.links[id];
        let packed = node.left_sibling.map(|left| {
            self.prelim(left)
                + self.config.sibling_separation()
                + self.mean_node_size(Some(left), Some(id))
        });

        let (first, last) = match (node.first_child, node.last_child) {
            (Some(first), Some(last)) if node.level < self.config.max_depth() => (first, last),
            _ => {
                self.walks[id.index()] = Walk {
                    prelim: packed.unwrap_or(0.0),
                    modifier: 0.0,
                };
                return;
            }
        };

        let midpoint = (self.prelim(first) + self.prelim(last)) / 2.0;
        match packed {
            Some(prelim) => {
                self.walks[id.index()] = Walk {
                    prelim,
                    modifier: prelim - midpoint,
                };
                self.apportion(id, node.level);
            }
            None => {
                self.walks[id.index()] = Walk {
                    prelim: midpoint,
                    modifier: 0.0,
                };
            }
        }
    }

    /// Pushes the subtree of `id` right until its left contour clears the
    /// right contour of everything to its left, spreading the shift over
    /// the sibling subtrees in between.
    fn apportion(&mut self, id: NodeId, level: usize) {
        let links = self.links;
        let depth_to_stop = self.config.max_depth().saturating_sub(level);

        let mut leftmost = links[id].first_child;
        let mut neighbor = leftmost.and_then(|node| links[node].left_neighbor);
        let mut compare_depth = 1;

        while compare_depth <= depth_to_stop {
            let (Some(contour), Some(other)) = (leftmost, neighbor) else {
                break;
            };

            // Climb back to the level of `id` on both sides, summing the
            // modifiers that will shift each contour node in the final pass.
            let mut ancestor_leftmost = contour;
            let mut ancestor_neighbor = other;
            let mut left_modsum = 0.0;
            let mut right_modsum = 0.0;
            for _ in 0..compare_depth {
                let (Some(up_leftmost), Some(up_neighbor)) = (
                    links[ancestor_leftmost].parent,
                    links[ancestor_neighbor].parent,
                ) else {
                    return;
                };
                ancestor_leftmost = up_leftmost;
                ancestor_neighbor = up_neighbor;
                right_modsum += self.modifier(ancestor_leftmost);
                left_modsum += self.modifier(ancestor_neighbor);
            }

            let mut move_distance = self.prelim(other)
                + left_modsum
                + self.config.subtree_separation()
                + self.mean_node_size(Some(contour), Some(other))
                - (self.prelim(contour) + right_modsum);

            if move_distance > 0.0 {
                // Count the subtrees from `id` leftwards up to the one that
                // holds the neighbor.
                let mut left_siblings = 0;
                let mut cursor = Some(id);
                while let Some(sibling) = cursor.filter(|&sibling| sibling != ancestor_neighbor) {
                    left_siblings += 1;
                    cursor = links[sibling].left_sibling;
                }

                // The neighbor lives under a different parent; an ancestor
                // of `id` resolves the overlap.
                if cursor.is_none() {
                    return;
                }

                debug!(
                    node:% = id,
                    neighbor:% = other,
                    compare_depth,
                    move_distance,
                    subtrees = left_siblings;
                    "Apportioning subtree shift"
                );

                let portion = move_distance / left_siblings as f32;
                let mut cursor = id;
                while cursor != ancestor_neighbor {
                    let walk = &mut self.walks[cursor.index()];
                    walk.prelim += move_distance;
                    walk.modifier += move_distance;
                    move_distance -= portion;
                    match links[cursor].left_sibling {
                        Some(sibling) => cursor = sibling,
                        None => break,
                    }
                }
            }

            compare_depth += 1;
            leftmost = if links[contour].first_child.is_none() {
                links.leftmost_descendant(id, compare_depth)
            } else {
                links[contour].first_child
            };
            neighbor = leftmost.and_then(|node| links[node].left_neighbor);
        }
    }

    /// Clearance between two node centers: one node size per present side.
    fn mean_node_size(&self, left: Option<NodeId>, right: Option<NodeId>) -> f32 {
        let sides = usize::from(left.is_some()) + usize::from(right.is_some());
        sides as f32 * self.config.node_size()
    }

    fn prelim(&self, id: NodeId) -> f32 {
        self.walks[id.index()].prelim
    }

    fn modifier(&self, id: NodeId) -> f32 {
        self.walks[id.index()].modifier
    }
}
