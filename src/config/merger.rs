//! Layering of YAML configuration values.
//!
//! The built-in defaults form the bottom layer; the user-global file and
//! the project file are overlaid on top.
//!
//! # Merge Rules
//!
//! - Mappings are merged key by key, recursively
//! - Sequences are replaced entirely (a project listing `packages`
//!   replaces the default list rather than extending it)
//! - Scalars and explicit nulls in the overlay replace the base value

use serde_yaml::Value;

/// Overlay `overlay` onto `base`, returning the merged value.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut merged = base_map.clone();
            for (key, value) in overlay_map {
                let next = match base_map.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Mapping(merged)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Fold layers in order; later layers take precedence.
pub fn merge_layers(base: Value, layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(base, |acc, layer| deep_merge(&acc, layer))
}
