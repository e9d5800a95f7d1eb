// Random nested-object generator for demos and tests.
//
// Bounded depth, 1-5 keys per level, 70% chance a value nests again while
// below the bound, integer leaves otherwise. Always terminates and always
// yields a JSON-serializable value.

use rand::Rng;
use serde_json::{Map, Value};

/// Maximum nesting depth of a generated value.
pub const MAX_DEPTH: usize = 4;

/// Probability that a value nests instead of ending in an integer leaf.
const BRANCH_PROBABILITY: f64 = 0.7;

/// Generate a random nested object with the thread-local RNG.
pub fn generate_default() -> Value {
    generate(&mut rand::thread_rng())
}

/// Generate a random nested object from `rng`.
pub fn generate(rng: &mut impl Rng) -> Value {
    generate_level(rng, 0)
}

fn generate_level(rng: &mut impl Rng, depth: usize) -> Value {
    if depth >= MAX_DEPTH {
        return random_leaf(rng);
    }

    let mut map = Map::new();
    let num_keys: usize = rng.gen_range(1..=5);
    for i in 0..num_keys {
        let value = if depth < MAX_DEPTH - 1 && rng.gen_bool(BRANCH_PROBABILITY) {
            generate_level(rng, depth + 1)
        } else {
            random_leaf(rng)
        };
        map.insert(format!("key{}", i + 1), value);
    }
    Value::Object(map)
}

fn random_leaf(rng: &mut impl Rng) -> Value {
    let n: i64 = rng.gen_range(0..100);
    Value::from(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::max_nesting_depth;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Walk a generated value, checking object fan-out and leaf ranges.
    fn check_shape(value: &Value) {
        match value {
            Value::Object(map) => {
                assert!((1..=5).contains(&map.len()));
                for (key, child) in map {
                    assert!(key.starts_with("key"));
                    check_shape(child);
                }
            }
            Value::Number(n) => {
                let n = n.as_i64().unwrap();
                assert!((0..100).contains(&n));
            }
            other => panic!("unexpected value in generated tree: {}", other),
        }
    }

    #[test]
    fn test_generated_tree_stays_within_depth_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = generate(&mut rng);
            assert!(max_nesting_depth(&value) <= MAX_DEPTH);
        }
    }

    #[test]
    fn test_generated_tree_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let value = generate(&mut rng);
            assert!(value.is_object(), "top level is always an object");
            check_shape(&value);
        }
    }

    #[test]
    fn test_generated_tree_serializes() {
        let mut rng = StdRng::seed_from_u64(11);
        let value = generate(&mut rng);
        let text = serde_json::to_string(&value).unwrap();
        let reparsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, value);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate(&mut StdRng::seed_from_u64(5));
        let b = generate(&mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
