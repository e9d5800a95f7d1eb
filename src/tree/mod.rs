// Node tree for a parsed JSON value.
//
// Arena representation: every node lives in `Tree.nodes`, addressed by
// NodeId indices, with child lists in insertion order. Arena order is
// depth-first pre-order (parent before children, siblings left-to-right).
// A tree is built once per input and replaced wholesale on new input.

use serde::Serialize;
use serde_json::Value;

use crate::layout::PointF;

mod build;

/// Index into the tree's node arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

/// Shape of the JSON value a node represents. Decided once at construction,
/// never re-derived from the raw value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Primitive,
    Array,
    Object,
}

/// One JSON value in the tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub nid: NodeId,
    /// Property name, array index in the form `[i]`, or "root".
    pub key: String,
    /// The owned scalar for primitives. A container's content is exactly
    /// its children, so containers own no value of their own.
    pub value: Option<Value>,
    pub kind: NodeKind,
    /// Depth from the root (root = 0).
    pub level: usize,
    pub parent: Option<NodeId>,
    /// Insertion order = object-key order / array index order.
    pub children: Vec<NodeId>,
    /// Layout-space position, written by the position pass.
    pub pos: PointF,
}

impl Node {
    /// String form the renderer draws inside the node: `{}`/`[]` markers
    /// for containers, the scalar itself otherwise (strings unquoted).
    pub fn display_value(&self) -> String {
        match self.kind {
            NodeKind::Object => "{}".to_string(),
            NodeKind::Array => "[]".to_string(),
            NodeKind::Primitive => match &self.value {
                Some(Value::String(s)) => s.clone(),
                Some(v) => v.to_string(),
                None => String::new(),
            },
        }
    }
}

/// A fully built, fully positioned tree for one input value.
///
/// `level_height` and `node_spacing` are fixed for the duration of one
/// build; changing input data triggers a full rebuild.
#[derive(Debug, Clone)]
pub struct Tree {
    pub root: Option<NodeId>,
    pub nodes: Vec<Node>,
    /// Vertical distance between adjacent levels.
    pub level_height: f64,
    /// Minimum horizontal slot a subtree occupies.
    pub node_spacing: f64,
}

impl Tree {
    pub fn node(&self, nid: NodeId) -> &Node {
        &self.nodes[nid.0]
    }

    /// All nodes in depth-first pre-order. The renderer sorts by `level`
    /// for back-to-front drawing, so any stable order would do.
    pub fn all_nodes(&self) -> Vec<NodeId> {
        self.pre_order()
    }

    /// Pre-order traversal: parent before children. Explicit stack, so
    /// deeply nested inputs cannot overflow the call stack.
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(nid) = stack.pop() {
            out.push(nid);
            // Reverse so the first child is popped first.
            for &c in self.nodes[nid.0].children.iter().rev() {
                stack.push(c);
            }
        }
        out
    }

    /// Post-order traversal: children before parent.
    pub fn post_order(&self) -> Vec<NodeId> {
        // Pre-order with sibling order flipped, reversed at the end.
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(nid) = stack.pop() {
            out.push(nid);
            for &c in &self.nodes[nid.0].children {
                stack.push(c);
            }
        }
        out.reverse();
        out
    }

    /// Reconstruct the JSON value under `nid`. Object key order is
    /// preserved, so `original_data(root)` round-trips the input exactly.
    pub fn original_data(&self, nid: NodeId) -> Value {
        let node = &self.nodes[nid.0];
        match node.kind {
            NodeKind::Primitive => node.value.clone().unwrap_or(Value::Null),
            NodeKind::Array => Value::Array(
                node.children
                    .iter()
                    .map(|&c| self.original_data(c))
                    .collect(),
            ),
            NodeKind::Object => {
                let mut map = serde_json::Map::new();
                for &c in &node.children {
                    map.insert(self.nodes[c.0].key.clone(), self.original_data(c));
                }
                Value::Object(map)
            }
        }
    }
}
