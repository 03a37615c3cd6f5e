//! Recursive removal of empty values from a YAML tree
//!
//! The forms snapshot every field they own, populated or not, so the raw
//! tree is full of empty strings, empty sequences, and nulls for options
//! the user never touched. Pruning strips all of that out before
//! serialization so the generated YAML only contains what was actually
//! configured.

use serde_yaml_ng::{Mapping, Value};

/// Prune a value, returning `None` when the value is entirely empty.
///
/// Emptiness rules:
/// - `null` and the empty string are empty
/// - a sequence is empty when every element prunes away; surviving
///   elements keep their relative order
/// - a mapping is empty when every key's value prunes away; surviving
///   keys keep their insertion order
/// - numbers (including `0`) and booleans (including `false`) are never
///   empty
///
/// An all-empty sequence or mapping prunes to `None`, not to `[]` or
/// `{}`; emptiness propagates upward until something real survives.
pub fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::Sequence(seq) => {
            let kept: Vec<Value> = seq.into_iter().filter_map(prune).collect();
            if kept.is_empty() {
                None
            } else {
                Some(Value::Sequence(kept))
            }
        }
        Value::Mapping(map) => {
            let mut kept = Mapping::new();
            for (key, val) in map {
                if let Some(val) = prune(val) {
                    kept.insert(key, val);
                }
            }
            if kept.is_empty() {
                None
            } else {
                Some(Value::Mapping(kept))
            }
        }
        other => Some(other),
    }
}
