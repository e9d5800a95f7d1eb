//! Output types for the canvas frontend.
//!
//! One document per build, serialized to JSON and sent across the wasm
//! boundary for rendering.

use serde::Serialize;

use crate::layout::{LayoutConfig, PointF};
use crate::tree::{NodeKind, Tree};

/// A positioned node ready to draw.
#[derive(Debug, Clone, Serialize)]
pub struct NodeOutput {
    /// Index into the document's `nodes` list.
    pub id: usize,
    pub key: String,
    /// Display string: `{}`/`[]` for containers, the scalar otherwise.
    pub value: String,
    /// "primitive", "array" or "object".
    pub kind: NodeKind,
    /// Depth from the root; the renderer sorts on this for back-to-front
    /// drawing.
    pub level: usize,
    pub pos: PointF,
}

/// A parent-to-child connector line.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeOutput {
    pub from: usize,
    pub to: usize,
}

/// Error information for editor markers
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    pub line: usize,       // 1-based line number
    pub column: usize,     // 1-based column number
    pub end_line: usize,   // 1-based end line (same as line for single-line errors)
    pub end_column: usize, // 1-based end column
}

/// The combined output sent to the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct TreeOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeOutput>,
    /// Layout-space node size hint for the renderer.
    pub node_radius: f64,
    /// Vertical distance between levels in this build.
    pub level_height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl TreeOutput {
    /// Flatten a built tree into the render document. Arena order is
    /// pre-order, so node ids double as arena indices.
    pub fn from_tree(tree: &Tree, cfg: &LayoutConfig) -> TreeOutput {
        let mut nodes = Vec::with_capacity(tree.nodes.len());
        let mut edges = Vec::new();

        for nid in tree.all_nodes() {
            let node = tree.node(nid);
            nodes.push(NodeOutput {
                id: nid.0,
                key: node.key.clone(),
                value: node.display_value(),
                kind: node.kind,
                level: node.level,
                pos: node.pos,
            });
            for &c in &node.children {
                edges.push(EdgeOutput { from: nid.0, to: c.0 });
            }
        }

        TreeOutput {
            nodes,
            edges,
            node_radius: cfg.node_radius,
            level_height: tree.level_height,
            error: None,
        }
    }
}
