//! WASM bindings for the arbor-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use serde_json::{to_string, Value};
use wasm_bindgen::prelude::*;

use crate::layout::LayoutConfig;
use crate::output::{ErrorInfo, TreeOutput};
use crate::random;
use crate::tree::Tree;

#[wasm_bindgen]
extern "C" {
    pub fn alert(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// Parse JSON text and build a positioned tree from it.
///
/// Returns the serialized render document. On a parse failure the document
/// carries no nodes and an `error` with the parser's message and position.
#[wasm_bindgen]
pub fn build_tree(input: &str) -> String {
    let cfg = LayoutConfig::default();
    let value: Value = match serde_json::from_str(input) {
        Ok(value) => value,
        Err(e) => {
            console_error(&format!("Error parsing JSON: {}", e));
            let error_output = TreeOutput {
                nodes: vec![],
                edges: vec![],
                node_radius: cfg.node_radius,
                level_height: 0.0,
                error: Some(ErrorInfo {
                    message: e.to_string(),
                    line: e.line(),
                    column: e.column(),
                    end_line: e.line(),
                    end_column: e.column() + 1, // Highlight at least one character
                }),
            };
            return to_string(&error_output).unwrap();
        }
    };

    build_and_serialize(value, &cfg)
}

/// Generate a random nested object and build its tree.
#[wasm_bindgen]
pub fn generate_random_tree() -> String {
    build_and_serialize(random::generate_default(), &LayoutConfig::default())
}

fn build_and_serialize(value: Value, cfg: &LayoutConfig) -> String {
    let tree = Tree::build(value, cfg);
    let max_level = tree.nodes.iter().map(|n| n.level).max().unwrap_or(0);
    console_log(&format!(
        "Tree depth: {}, optimal level height: {}",
        max_level, tree.level_height
    ));
    to_string(&TreeOutput::from_tree(&tree, cfg)).unwrap()
}
