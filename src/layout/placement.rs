// Horizontal placement: subtree widths, then child offsets.
//
// Width pass (post-order): a leaf subtree (primitive or empty container)
// needs one `node_spacing` slot; a container needs the sum of its
// children's widths plus a small gap per boundary, never less than one
// slot. Position pass (pre-order): children are laid left-to-right, each
// centered within its own width slot, and the whole row is shifted so its
// span is centered under the parent's x. Sibling spans cannot overlap
// because slots are disjoint by construction.

use super::PointF;
use crate::tree::{NodeId, Tree};

/// Fraction of `node_spacing` inserted between adjacent sibling slots.
const SLOT_GAP_FACTOR: f64 = 0.1;

/// Required width per subtree, indexed by arena position. Bottom-up over
/// the explicit post-order, so child widths exist before their parent's.
pub fn subtree_widths(tree: &Tree) -> Vec<f64> {
    let spacing = tree.node_spacing;
    let mut widths = vec![0.0; tree.nodes.len()];
    for nid in tree.post_order() {
        let node = &tree.nodes[nid.0];
        widths[nid.0] = if node.children.is_empty() {
            spacing
        } else {
            let sum: f64 = node.children.iter().map(|&c| widths[c.0]).sum();
            let gaps = (node.children.len() - 1) as f64 * spacing * SLOT_GAP_FACTOR;
            (sum + gaps).max(spacing)
        };
    }
    widths
}

/// Write every node's layout-space position. The root sits at x = 0; y is
/// `level * level_height` for all nodes.
pub fn assign_positions(tree: &mut Tree, widths: &[f64]) {
    let spacing = tree.node_spacing;
    let level_height = tree.level_height;

    let mut stack: Vec<(NodeId, f64)> = tree.root.map(|r| (r, 0.0)).into_iter().collect();
    while let Some((nid, x)) = stack.pop() {
        let y = tree.nodes[nid.0].level as f64 * level_height;
        tree.nodes[nid.0].pos = PointF { x, y };

        let node = &tree.nodes[nid.0];
        if node.children.is_empty() {
            continue;
        }
        // Every child width is >= spacing, so for a non-empty container the
        // row width equals this node's own subtree width.
        let mut cursor = x - widths[nid.0] / 2.0;
        for &c in &node.children {
            stack.push((c, cursor + widths[c.0] / 2.0));
            cursor += widths[c.0] + spacing * SLOT_GAP_FACTOR;
        }
    }
}
