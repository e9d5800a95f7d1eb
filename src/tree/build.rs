// Tree construction from a parsed JSON value.
//
// Consumes the input, classifying each sub-value once (object, array,
// primitive) and attaching children in key-iteration / index order. The
// traversal uses an explicit stack instead of call-stack recursion, so
// deeply nested documents cannot overflow the stack.

use serde_json::Value;

use super::{Node, NodeId, NodeKind, Tree};
use crate::layout::{self, LayoutConfig, PointF};

impl Tree {
    /// Build a fully positioned tree for `value`.
    ///
    /// Runs, in order: vertical spacing from the raw value, node
    /// construction, then the width and position passes. The returned tree
    /// is complete before any caller can observe it; new input means a new
    /// build, never an incremental patch.
    pub fn build(value: Value, cfg: &LayoutConfig) -> Tree {
        let max_depth = layout::max_nesting_depth(&value);
        let mut tree = Tree {
            root: None,
            nodes: Vec::new(),
            level_height: layout::optimal_level_height(max_depth, cfg),
            node_spacing: cfg.node_spacing,
        };

        let mut stack: Vec<(Value, String, usize, Option<NodeId>)> =
            vec![(value, "root".to_string(), 0, None)];

        while let Some((value, key, level, parent)) = stack.pop() {
            let nid = NodeId(tree.nodes.len());
            let (kind, scalar, entries) = match value {
                Value::Object(map) => {
                    let entries: Vec<(String, Value)> = map.into_iter().collect();
                    (NodeKind::Object, None, entries)
                }
                Value::Array(items) => {
                    let entries: Vec<(String, Value)> = items
                        .into_iter()
                        .enumerate()
                        .map(|(i, item)| (format!("[{}]", i), item))
                        .collect();
                    (NodeKind::Array, None, entries)
                }
                scalar => (NodeKind::Primitive, Some(scalar), Vec::new()),
            };

            tree.nodes.push(Node {
                nid,
                key,
                value: scalar,
                kind,
                level,
                parent,
                children: Vec::new(),
                pos: PointF::default(),
            });

            match parent {
                Some(p) => tree.nodes[p.0].children.push(nid),
                None => tree.root = Some(nid),
            }

            // Reverse so the first child is popped (and allocated) first,
            // keeping arena order pre-order and child lists in input order.
            for (child_key, child_value) in entries.into_iter().rev() {
                stack.push((child_value, child_key, level + 1, Some(nid)));
            }
        }

        layout::layout_tree(&mut tree);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(value: Value) -> Tree {
        Tree::build(value, &LayoutConfig::default())
    }

    #[test]
    fn test_object_children_in_key_order() {
        let tree = build(json!({"a": 1, "b": 2}));
        let root = tree.node(tree.root.unwrap());
        assert_eq!(root.kind, NodeKind::Object);
        assert_eq!(root.level, 0);
        assert_eq!(root.key, "root");

        let keys: Vec<&str> = root
            .children
            .iter()
            .map(|&c| tree.node(c).key.as_str())
            .collect();
        assert_eq!(keys, ["a", "b"]);
        for &c in &root.children {
            let child = tree.node(c);
            assert_eq!(child.kind, NodeKind::Primitive);
            assert_eq!(child.level, 1);
            assert_eq!(child.parent, Some(root.nid));
        }
    }

    #[test]
    fn test_array_children_labeled_by_index() {
        let tree = build(json!([10, "x", [true]]));
        let root = tree.node(tree.root.unwrap());
        assert_eq!(root.kind, NodeKind::Array);

        let keys: Vec<&str> = root
            .children
            .iter()
            .map(|&c| tree.node(c).key.as_str())
            .collect();
        assert_eq!(keys, ["[0]", "[1]", "[2]"]);
        assert_eq!(tree.node(root.children[2]).kind, NodeKind::Array);
    }

    #[test]
    fn test_primitive_root_has_no_children() {
        let tree = build(json!(42));
        assert_eq!(tree.nodes.len(), 1);
        let root = tree.node(tree.root.unwrap());
        assert_eq!(root.kind, NodeKind::Primitive);
        assert!(root.children.is_empty());
        assert_eq!(root.display_value(), "42");
    }

    #[test]
    fn test_empty_containers_keep_their_kind() {
        let tree = build(json!({"o": {}, "a": []}));
        let root = tree.node(tree.root.unwrap());
        let o = tree.node(root.children[0]);
        let a = tree.node(root.children[1]);
        assert_eq!(o.kind, NodeKind::Object);
        assert!(o.children.is_empty());
        assert_eq!(a.kind, NodeKind::Array);
        assert!(a.children.is_empty());
    }

    #[test]
    fn test_levels_follow_nesting() {
        let tree = build(json!({"x": {"y": {"z": 1}}}));
        let levels: Vec<usize> = tree
            .pre_order()
            .into_iter()
            .map(|nid| tree.node(nid).level)
            .collect();
        assert_eq!(levels, [0, 1, 2, 3]);
    }

    #[test]
    fn test_arena_order_is_pre_order() {
        let tree = build(json!({"a": {"b": 1}, "c": [2]}));
        let pre = tree.pre_order();
        let arena: Vec<NodeId> = (0..tree.nodes.len()).map(NodeId).collect();
        assert_eq!(pre, arena);
    }

    #[test]
    fn test_primitives_own_their_scalar() {
        let tree = build(json!({"n": 7, "s": "seven"}));
        let root = tree.node(tree.root.unwrap());
        assert_eq!(tree.node(root.children[0]).value, Some(json!(7)));
        assert_eq!(tree.node(root.children[1]).value, Some(json!("seven")));
        assert_eq!(root.value, None);
    }
}
