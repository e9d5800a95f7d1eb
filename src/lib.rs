pub mod layout;
pub mod output;
pub mod random;
pub mod tree;
pub mod wasm;

pub use layout::{layout_tree, max_nesting_depth, optimal_level_height, LayoutConfig, PointF};
pub use output::{EdgeOutput, ErrorInfo, NodeOutput, TreeOutput};
pub use random::{generate, generate_default};
pub use tree::{Node, NodeId, NodeKind, Tree};
