// Depth-adaptive vertical spacing.
//
// The longest root-to-leaf path decides the per-level row height: a fixed
// vertical budget divided over the number of levels, clamped below so
// rows never get unreadably thin.

use serde_json::Value;

use super::LayoutConfig;

/// Longest root-to-leaf path in `value`. A primitive or empty container
/// root is depth 0; each nesting step adds one.
pub fn max_nesting_depth(value: &Value) -> usize {
    let mut max_depth = 0;
    let mut stack: Vec<(&Value, usize)> = vec![(value, 0)];
    while let Some((v, d)) = stack.pop() {
        max_depth = max_depth.max(d);
        match v {
            Value::Object(map) => {
                for child in map.values() {
                    stack.push((child, d + 1));
                }
            }
            Value::Array(items) => {
                for child in items {
                    stack.push((child, d + 1));
                }
            }
            _ => {}
        }
    }
    max_depth
}

/// Row height for a tree of the given depth: the vertical budget split
/// across `max_depth + 1` levels, never less than `min_row_height`.
pub fn optimal_level_height(max_depth: usize, cfg: &LayoutConfig) -> f64 {
    cfg.min_row_height
        .max(cfg.vertical_budget / (max_depth as f64 + 1.0))
}
